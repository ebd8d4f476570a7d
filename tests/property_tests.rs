//! Property tests for the slider's range invariants.
//!
//! Uses proptest to verify that, whatever the user types or drags:
//! 1. the selected range stays ordered and inside the bounds
//! 2. the progress bar covers exactly the selected share of the track
//! 3. dragging moves the selection without changing its span
//! 4. a form reset always lands back on the configured initial values

use proptest::prelude::*;
use range_slider::{
    init_range_slider, mount_slider_markup, ElementId, Page, RangeSliderConfig, Rect, SliderElements, Teardown,
};

const TRACK: Rect = Rect::new(50.0, 500.0);

#[derive(Clone, Debug)]
enum Gesture {
    TypeLower(String),
    TypeUpper(String),
    Drag { grab: f64, to: f64 },
    Reset,
}

struct Mounted {
    page:      Page,
    form:      ElementId,
    elements:  SliderElements,
    _teardown: Teardown,
}

fn mount(config: &RangeSliderConfig) -> Mounted {
    let page = Page::new();
    let root = page.document().root();
    let form = page.document_mut().append_new(root, "form", &[]);
    let elements = mount_slider_markup(&mut page.document_mut(), form, &config.container_id);
    page.document_mut().set_rect(elements.container, TRACK);
    let teardown = init_range_slider(&page, config).expect("markup is complete");

    Mounted {
        page,
        form,
        elements,
        _teardown: teardown,
    }
}

impl Mounted {
    fn read(&self, field: ElementId) -> i64 {
        self.page.document().value(field).parse().expect("slider writes whole numbers")
    }

    fn selection(&self) -> (i64, i64) { (self.read(self.elements.lower_control), self.read(self.elements.upper_control)) }

    fn shown(&self) -> (i64, i64) { (self.read(self.elements.lower_display), self.read(self.elements.upper_display)) }

    fn style_percent(&self, left: bool) -> f64 {
        let doc = self.page.document();
        let style = doc.style(self.elements.progress).cloned().unwrap_or_default();
        let text = if left { style.left } else { style.width }.unwrap_or_default();
        text.trim_end_matches('%').parse().expect("finite percentage")
    }

    fn apply(&self, gesture: &Gesture) {
        match gesture {
            Gesture::TypeLower(text) => self.page.type_into(self.elements.lower_display, text),
            Gesture::TypeUpper(text) => self.page.type_into(self.elements.upper_display, text),
            Gesture::Drag { grab, to } => {
                let bar = self.page.document().bounding_client_rect(self.elements.progress);
                self.page.mouse_down(self.elements.progress, bar.left + grab * bar.width);
                self.page.mouse_move(*to);
                self.page.mouse_up(*to);
            }
            Gesture::Reset => {
                self.page.reset_form(self.form);
                self.page.run_pending_tasks();
            }
        }
    }
}

// ── Strategies ───────────────────────────────────────────────────────

fn arb_config() -> impl Strategy<Value = RangeSliderConfig> {
    (-1000..1000_i64, 1..2000_i64, 0.0..1.0_f64, 0.0..1.0_f64).prop_map(|(min, span, a, b)| {
        let pick = |f: f64| min + (f * span as f64).round() as i64;
        let (lo, hi) = if a <= b { (pick(a), pick(b)) } else { (pick(b), pick(a)) };
        RangeSliderConfig::new("slider").with_bounds(min, min + span).with_initial(lo, hi)
    })
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => (-5000..5000_i64).prop_map(|v| v.to_string()),
        1 => Just(String::new()),
        1 => "[a-z ]{1,6}",
        1 => (-5000..5000_i64, "[a-z]{1,3}").prop_map(|(v, unit)| format!("{}{}", v, unit)),
    ]
}

fn arb_gesture() -> impl Strategy<Value = Gesture> {
    prop_oneof![
        3 => arb_text().prop_map(Gesture::TypeLower),
        3 => arb_text().prop_map(Gesture::TypeUpper),
        3 => (0.0..1.0_f64, -1000.0..2000.0_f64).prop_map(|(grab, to)| Gesture::Drag { grab, to }),
        1 => Just(Gesture::Reset),
    ]
}

// ── Invariants ───────────────────────────────────────────────────────

proptest! {
    /// Typing, dragging and resetting never leave the selection unordered or
    /// out of bounds, and the displays always mirror the controls.
    #[test]
    fn selection_stays_ordered_and_bounded(
        config in arb_config(),
        gestures in prop::collection::vec(arb_gesture(), 1..25),
    ) {
        let m = mount(&config);

        for gesture in &gestures {
            m.apply(gesture);
            let (lo, hi) = m.selection();
            prop_assert!(lo <= hi, "{:?} left {} > {}", gesture, lo, hi);
            prop_assert!(lo >= config.min && hi <= config.max, "{:?} left {}..{}", gesture, lo, hi);
            prop_assert_eq!(m.shown(), (lo, hi));
        }
    }

    /// The bar's left edge and width are the selection's share of the track.
    #[test]
    fn progress_covers_the_selection(
        config in arb_config(),
        gestures in prop::collection::vec(arb_gesture(), 0..10),
    ) {
        let m = mount(&config);

        for gesture in &gestures {
            m.apply(gesture);
        }

        let (lo, hi) = m.selection();
        let range = (config.max - config.min) as f64;
        prop_assert!((m.style_percent(false) - 100.0 * (hi - lo) as f64 / range).abs() < 1e-9);
        prop_assert!((m.style_percent(true) - 100.0 * (lo - config.min) as f64 / range).abs() < 1e-9);
    }

    /// Dragging shifts both ends together.
    #[test]
    fn drag_preserves_span(config in arb_config(), grab in 0.0..1.0_f64, to in -1000.0..2000.0_f64) {
        let m = mount(&config);
        let (lo, hi) = m.selection();

        m.apply(&Gesture::Drag { grab, to });

        let (new_lo, new_hi) = m.selection();
        prop_assert_eq!(new_hi - new_lo, hi - lo);
        prop_assert!(new_lo >= config.min && new_hi <= config.max);
    }

    /// After a reset the configured initial values are back, whatever came before.
    #[test]
    fn reset_restores_initial_values(
        config in arb_config(),
        gestures in prop::collection::vec(arb_gesture(), 0..10),
    ) {
        let m = mount(&config);

        for gesture in &gestures {
            m.apply(gesture);
        }

        m.apply(&Gesture::Reset);
        let initial = config.initial();
        prop_assert_eq!(m.selection(), (*initial.min(), *initial.max()));
    }
}
