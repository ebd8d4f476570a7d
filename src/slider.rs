//! Behaviour of one dual-handle slider.
//!
//! The two control fields are the source of truth for the selected range.
//! The display fields and the progress bar are derived from them, except
//! while the user types into a display field, which is then clamped and
//! pushed into the controls.

use std::cell::Cell;

use log::trace;

use crate::{
    config::RangeSliderConfig,
    converter::{Converter, IsoConverter, LinearPercentConverter},
    dom::{Document, ElementId},
    elements::{SliderElements, DRAGGING_CLASS},
    event::PointerEvent,
    hub::PointerObserver,
    number::{format_percent, parse_float, parse_int},
    page::Page,
    range::Range,
};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragState {
    pub is_dragging:    bool,
    /// Pointer x minus the progress bar's left edge at press time.
    pub start_offset_x: f64,
}

pub struct RangeSlider {
    bounds:    Range<i64>,
    initial:   Range<i64>,
    converter: LinearPercentConverter,
    elements:  SliderElements,
    drag:      Cell<DragState>,
}

impl RangeSlider {
    pub fn new(config: &RangeSliderConfig, elements: SliderElements) -> Self {
        Self {
            bounds: config.bounds(),
            initial: config.initial(),
            converter: LinearPercentConverter::new(config.bounds()),
            elements,
            drag: Cell::default(),
        }
    }

    pub fn bounds(&self) -> Range<i64> { self.bounds }
    pub fn elements(&self) -> &SliderElements { &self.elements }
    pub fn drag_state(&self) -> DragState { self.drag.get() }

    /// The range held by the control fields. Text that doesn't parse reads as
    /// the respective bound.
    pub fn live_range(&self, doc: &Document) -> Range<i64> {
        Range::new(
            parse_int(doc.value(self.elements.lower_control)).unwrap_or(*self.bounds.min()),
            parse_int(doc.value(self.elements.upper_control)).unwrap_or(*self.bounds.max()),
        )
    }

    /// Writes bounds and initial values into all four fields.
    pub fn reset_to_initial(&self, doc: &mut Document) {
        let (min, max) = (self.bounds.min().to_string(), self.bounds.max().to_string());
        let e = &self.elements;

        for (field, value) in [
            (e.lower_control, self.initial.min()),
            (e.upper_control, self.initial.max()),
            (e.lower_display, self.initial.min()),
            (e.upper_display, self.initial.max()),
        ] {
            doc.set_attribute(field, "min", &min);
            doc.set_attribute(field, "max", &max);
            doc.set_value(field, &value.to_string());
        }

        self.update_progress(doc);
    }

    /// Positions the progress bar over the live range and mirrors the range
    /// into the display fields.
    pub fn update_progress(&self, doc: &mut Document) {
        let live = self.live_range(doc);
        let width = self.converter.span_to_percent(*live.min(), *live.max());
        let left = self.converter.convert(*live.min());

        doc.set_style_width(self.elements.progress, &format_percent(*width));
        doc.set_style_left(self.elements.progress, &format_percent(*left));
        doc.set_value(self.elements.lower_display, &live.min().to_string());
        doc.set_value(self.elements.upper_display, &live.max().to_string());
    }

    /// A display field changed. Both displays are clamped into the bounds;
    /// if the edit crossed the other value, the other value follows it.
    pub fn on_display_input(&self, doc: &mut Document, source: ElementId) {
        let e = &self.elements;
        let mut lo = self.bounds.clamp(&parse_int(doc.value(e.lower_display)).unwrap_or(*self.bounds.min()));
        let mut hi = self.bounds.clamp(&parse_int(doc.value(e.upper_display)).unwrap_or(*self.bounds.max()));

        if source == e.lower_display && lo > hi {
            hi = lo;
            doc.set_value(e.upper_display, &hi.to_string());
        }
        else if source == e.upper_display && hi < lo {
            lo = hi;
            doc.set_value(e.lower_display, &lo.to_string());
        }

        doc.set_value(e.lower_control, &lo.to_string());
        doc.set_value(e.upper_control, &hi.to_string());
        self.update_progress(doc);
    }

    /// The lower control moved. If it met or passed the upper one, the upper
    /// control takes its value. No clamping into the bounds here.
    pub fn on_lower_control_input(&self, doc: &mut Document) {
        let e = &self.elements;

        if let (Some(lo), Some(hi)) = (parse_int(doc.value(e.lower_control)), parse_int(doc.value(e.upper_control))) {
            if lo >= hi {
                let text = doc.value(e.lower_control).to_string();
                doc.set_value(e.upper_control, &text);
            }
        }

        self.update_progress(doc);
    }

    /// Mirror of [`RangeSlider::on_lower_control_input`] for the upper control.
    pub fn on_upper_control_input(&self, doc: &mut Document) {
        let e = &self.elements;

        if let (Some(lo), Some(hi)) = (parse_int(doc.value(e.lower_control)), parse_int(doc.value(e.upper_control))) {
            if hi <= lo {
                let text = doc.value(e.upper_control).to_string();
                doc.set_value(e.lower_control, &text);
            }
        }

        self.update_progress(doc);
    }

    pub fn begin_drag(&self, doc: &mut Document, client_x: f64) {
        let progress = doc.bounding_client_rect(self.elements.progress);

        self.drag.set(DragState {
            is_dragging:    true,
            start_offset_x: client_x - progress.left,
        });

        trace!("drag start at {} (offset {})", client_x, client_x - progress.left);
        doc.toggle_class(self.elements.container, DRAGGING_CLASS, true);
    }

    /// Slides the whole selection so the bar follows the pointer, keeping the
    /// bar inside the track and the selected span unchanged.
    pub fn drag_to(&self, doc: &mut Document, client_x: f64) {
        let drag = self.drag.get();

        if drag.is_dragging {
            let track = doc.bounding_client_rect(self.elements.container);
            let width = doc
                .style(self.elements.progress)
                .and_then(|s| s.width.as_deref())
                .and_then(parse_float)
                .unwrap_or(0.0);

            let left = (client_x - track.left - drag.start_offset_x) / track.width * 100.0;
            let left = left.max(0.0).min(100.0 - width);
            let lo = self.converter.convert_inverse(left.into());
            let live = self.live_range(doc);
            let hi = lo.saturating_add(live.span());

            doc.set_value(self.elements.lower_control, &lo.to_string());
            doc.set_value(self.elements.upper_control, &hi.to_string());
            self.update_progress(doc);
        }

        doc.toggle_class(self.elements.container, DRAGGING_CLASS, drag.is_dragging);
    }

    pub fn end_drag(&self, doc: &mut Document) {
        let mut drag = self.drag.get();
        drag.is_dragging = false;
        self.drag.set(drag);
        doc.toggle_class(self.elements.container, DRAGGING_CLASS, false);
    }
}

impl PointerObserver for RangeSlider {
    fn pointer_moved(&self, page: &Page, event: &PointerEvent) { self.drag_to(&mut page.document_mut(), event.client_x) }

    fn pointer_released(&self, page: &Page, _event: &PointerEvent) { self.end_drag(&mut page.document_mut()) }
}
