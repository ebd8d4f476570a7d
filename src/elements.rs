//! The markup a slider binds to.
//!
//! A container, found by id, holding one element of each class below. Where
//! they sit inside the container doesn't matter; the first match in document
//! order wins.

use crate::{
    dom::{Document, ElementId},
    error::{ElementPresence, InitError},
};

pub const PROGRESS_CLASS: &str = "smeg-range-slider-slider-progress";
pub const LOWER_DISPLAY_CLASS: &str = "min-price";
pub const UPPER_DISPLAY_CLASS: &str = "max-price";
pub const LOWER_CONTROL_CLASS: &str = "min-input";
pub const UPPER_CONTROL_CLASS: &str = "max-input";

/// Set on the container while the progress bar is being dragged.
pub const DRAGGING_CLASS: &str = "dragging";

pub const FORM_TAG: &str = "form";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderElements {
    pub container:     ElementId,
    pub progress:      ElementId,
    pub lower_display: ElementId,
    pub upper_display: ElementId,
    pub lower_control: ElementId,
    pub upper_control: ElementId,
    /// Nearest enclosing form, if any.
    pub form:          Option<ElementId>,
}

impl SliderElements {
    pub fn resolve(doc: &Document, container_id: &str) -> Result<Self, InitError> {
        let container = doc.get_element_by_id(container_id).ok_or_else(|| InitError::ContainerNotFound {
            id: container_id.into(),
        })?;

        let find = |class| doc.query_class(container, class);

        match (
            find(PROGRESS_CLASS),
            find(LOWER_DISPLAY_CLASS),
            find(UPPER_DISPLAY_CLASS),
            find(LOWER_CONTROL_CLASS),
            find(UPPER_CONTROL_CLASS),
        ) {
            (Some(progress), Some(lower_display), Some(upper_display), Some(lower_control), Some(upper_control)) => {
                Ok(Self {
                    container,
                    progress,
                    lower_display,
                    upper_display,
                    lower_control,
                    upper_control,
                    form: doc.closest(container, FORM_TAG),
                })
            }
            (progress, lower_display, upper_display, lower_control, upper_control) => {
                Err(InitError::MissingElements {
                    container_id: container_id.into(),
                    found:        ElementPresence {
                        progress:      progress.is_some(),
                        lower_display: lower_display.is_some(),
                        upper_display: upper_display.is_some(),
                        lower_control: lower_control.is_some(),
                        upper_control: upper_control.is_some(),
                    },
                })
            }
        }
    }

    pub fn display_fields(&self) -> [ElementId; 2] { [self.lower_display, self.upper_display] }

    pub fn control_fields(&self) -> [ElementId; 2] { [self.lower_control, self.upper_control] }
}

/// Builds the standard slider markup under `parent`:
///
/// ```text
/// div#<container_id>
///   div.slider
///     div.smeg-range-slider-slider-progress
///   div.range-input
///     input.min-input[type=range]  input.max-input[type=range]
///   div.price-input
///     input.min-price[type=number] input.max-price[type=number]
/// ```
///
/// The fields start out empty; give them markup values with
/// [`Document::set_default_value`] and the container a rect with
/// [`Document::set_rect`] as needed.
pub fn mount_slider_markup(doc: &mut Document, parent: ElementId, container_id: &str) -> SliderElements {
    let container = doc.append_new(parent, "div", &["range-slider"]);
    doc.set_id(container, container_id);

    let track = doc.append_new(container, "div", &["slider"]);
    let progress = doc.append_new(track, "div", &[PROGRESS_CLASS]);

    let range_inputs = doc.append_new(container, "div", &["range-input"]);
    let lower_control = doc.append_new(range_inputs, "input", &[LOWER_CONTROL_CLASS]);
    let upper_control = doc.append_new(range_inputs, "input", &[UPPER_CONTROL_CLASS]);

    let number_inputs = doc.append_new(container, "div", &["price-input"]);
    let lower_display = doc.append_new(number_inputs, "input", &[LOWER_DISPLAY_CLASS]);
    let upper_display = doc.append_new(number_inputs, "input", &[UPPER_DISPLAY_CLASS]);

    for control in [lower_control, upper_control] {
        doc.set_attribute(control, "type", "range");
    }

    for display in [lower_display, upper_display] {
        doc.set_attribute(display, "type", "number");
    }

    SliderElements {
        container,
        progress,
        lower_display,
        upper_display,
        lower_control,
        upper_control,
        form: doc.closest(container, FORM_TAG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_mounted_markup() {
        let mut doc = Document::new();
        let root = doc.root();
        let form = doc.append_new(root, "form", &[]);
        let mounted = mount_slider_markup(&mut doc, form, "price");

        assert_eq!(SliderElements::resolve(&doc, "price"), Ok(mounted));
        assert_eq!(mounted.form, Some(form));
    }

    #[test]
    fn reports_missing_container() {
        let doc = Document::new();
        assert_eq!(
            SliderElements::resolve(&doc, "price"),
            Err(InitError::ContainerNotFound { id: "price".into() })
        );
    }

    #[test]
    fn reports_which_elements_are_missing() {
        let mut doc = Document::new();
        let root = doc.root();
        let mounted = mount_slider_markup(&mut doc, root, "price");
        doc.remove(mounted.upper_control);
        doc.remove(mounted.progress);

        match SliderElements::resolve(&doc, "price") {
            Err(InitError::MissingElements { container_id, found }) => {
                assert_eq!(container_id, "price");
                assert_eq!(found.missing(), vec!["progress", "upperControl"]);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn elements_outside_the_container_do_not_count() {
        let mut doc = Document::new();
        let root = doc.root();
        let mounted = mount_slider_markup(&mut doc, root, "price");
        doc.append_child(root, mounted.lower_display);

        assert!(matches!(SliderElements::resolve(&doc, "price"), Err(InitError::MissingElements { .. })));
        assert_eq!(mounted.form, None);
    }
}
