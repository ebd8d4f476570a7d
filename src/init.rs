use std::rc::Rc;

use log::{debug, info, warn};

use crate::{
    config::RangeSliderConfig,
    elements::SliderElements,
    error::InitError,
    event::{EventKind, ListenerId, ObserverId},
    hub::{listener, InputHub},
    page::Page,
    slider::RangeSlider,
};

/// Detaches a slider from its page.
///
/// Running it is the only way to dispose of a slider. Dropping it without
/// running leaves the listeners registered, still acting on the elements
/// they were bound to.
#[must_use = "dropping a Teardown leaves the slider's listeners registered"]
pub struct Teardown {
    hub:          Rc<InputHub>,
    container_id: String,
    listeners:    Vec<ListenerId>,
    observer:     ObserverId,
}

impl Teardown {
    pub fn run(self) {
        let mut removed = 0;

        for id in &self.listeners {
            if self.hub.remove_listener(*id) {
                removed += 1;
            }
        }

        self.hub.remove_observer(self.observer);
        debug!("range slider {} detached ({} listener(s))", self.container_id, removed);
    }

    pub fn listener_ids(&self) -> &[ListenerId] { &self.listeners }
}

/// Binds a slider to the markup under `config.container_id` and shows the
/// initial values. On failure nothing on the page has been touched.
pub fn try_init_range_slider(page: &Page, config: &RangeSliderConfig) -> Result<Teardown, InitError> {
    let elements = SliderElements::resolve(&page.document(), &config.container_id)?;

    if config.bounds().is_inverted() {
        warn!("range slider {}: min {} is above max {}", config.container_id, config.min, config.max);
    }

    let slider = Rc::new(RangeSlider::new(config, elements));
    let hub = page.hub();
    let mut listeners = Vec::new();

    for display in elements.display_fields() {
        let s = slider.clone();
        listeners.push(hub.add_listener(
            display,
            EventKind::Input,
            listener(move |page, event| s.on_display_input(&mut page.document_mut(), event.target)),
        ));
    }

    let s = slider.clone();
    listeners.push(hub.add_listener(
        elements.lower_control,
        EventKind::Input,
        listener(move |page, _| s.on_lower_control_input(&mut page.document_mut())),
    ));

    let s = slider.clone();
    listeners.push(hub.add_listener(
        elements.upper_control,
        EventKind::Input,
        listener(move |page, _| s.on_upper_control_input(&mut page.document_mut())),
    ));

    let s = slider.clone();
    listeners.push(hub.add_listener(
        elements.progress,
        EventKind::MouseDown,
        listener(move |page, event| {
            event.prevent_default();
            s.begin_drag(&mut page.document_mut(), event.client_x);
        }),
    ));

    // The native reset rewrites the fields first; re-apply the configured
    // values once it is done.
    if let Some(form) = elements.form {
        let s = slider.clone();
        listeners.push(hub.add_listener(
            form,
            EventKind::Reset,
            listener(move |page, _| {
                let s = s.clone();
                page.schedule(move |page| s.reset_to_initial(&mut page.document_mut()));
            }),
        ));
    }

    let observer = hub.add_observer(slider.clone());
    slider.reset_to_initial(&mut page.document_mut());

    info!(
        "range slider {} bound: bounds {}..={}, initial {}..={}",
        config.container_id,
        config.min,
        config.max,
        config.initial().min(),
        config.initial().max()
    );

    Ok(Teardown {
        hub: hub.clone(),
        container_id: config.container_id.clone(),
        listeners,
        observer,
    })
}

/// [`try_init_range_slider`] that reports failure through the log only.
pub fn init_range_slider(page: &Page, config: &RangeSliderConfig) -> Option<Teardown> {
    match try_init_range_slider(page, config) {
        Ok(teardown) => Some(teardown),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}
