extern crate range_slider;

use log::info;
use once_cell::sync::Lazy;
use range_slider::{
    init_range_slider, logging::init_logger, mount_slider_markup, Page, RangeSliderConfig, Rect, SliderElements,
};

static PRICE_FILTER: Lazy<RangeSliderConfig> = Lazy::new(|| {
    RangeSliderConfig::from_json(
        r#"{ "containerId": "price-filter", "min": 0, "max": 500, "initialMin": 50, "initialMax": 250 }"#,
    )
    .unwrap_or_else(|_| RangeSliderConfig::new("price-filter").with_bounds(0, 500))
});

fn report(page: &Page, elements: &SliderElements, step: &str) {
    let doc = page.document();
    let style = doc.style(elements.progress).cloned().unwrap_or_default();

    info!(
        "{:<24} {:>4} .. {:<4} left={:<8} width={}",
        step,
        doc.value(elements.lower_display),
        doc.value(elements.upper_display),
        style.left.unwrap_or_default(),
        style.width.unwrap_or_default()
    );
}

fn main() {
    init_logger("info", None);

    let page = Page::new();
    let root = page.document().root();
    let form = page.document_mut().append_new(root, "form", &[]);
    let elements = mount_slider_markup(&mut page.document_mut(), form, &PRICE_FILTER.container_id);
    page.document_mut().set_rect(elements.container, Rect::new(20.0, 300.0));

    let teardown = match init_range_slider(&page, &PRICE_FILTER) {
        Some(t) => t,
        None => return,
    };

    report(&page, &elements, "initial");

    page.type_into(elements.lower_display, "300");
    report(&page, &elements, "typed 300 as minimum");

    page.type_into(elements.upper_display, "9000");
    report(&page, &elements, "typed 9000 as maximum");

    let bar = page.document().bounding_client_rect(elements.progress);
    page.mouse_down(elements.progress, bar.left + 5.0);
    page.mouse_move(bar.left - 60.0);
    page.mouse_up(bar.left - 60.0);
    report(&page, &elements, "dragged 60px left");

    page.reset_form(form);
    report(&page, &elements, "native form reset");
    page.run_pending_tasks();
    report(&page, &elements, "after deferred reset");

    teardown.run();
    page.type_into(elements.lower_display, "0");
    report(&page, &elements, "typed after teardown");
}
