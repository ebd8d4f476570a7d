//! A dual-handle range slider bound to number fields and a progress bar.
//!
//! The slider binds to markup in a host [`Page`]: a container holding a
//! progress bar, two number fields showing the selected range and two range
//! controls holding it. Typing, dragging the bar and resetting the enclosing
//! form keep all five consistent.
//!
//! ```
//! use range_slider::{init_range_slider, mount_slider_markup, Page, RangeSliderConfig};
//!
//! let page = Page::new();
//! let root = page.document().root();
//! let elements = mount_slider_markup(&mut page.document_mut(), root, "price");
//!
//! let config = RangeSliderConfig::new("price").with_bounds(0, 100).with_initial(20, 80);
//! let teardown = init_range_slider(&page, &config).expect("markup is complete");
//!
//! page.type_into(elements.lower_display, "90");
//! assert_eq!(page.document().value(elements.upper_display), "90");
//!
//! teardown.run();
//! ```

pub mod config;
pub mod converter;
pub mod dom;
pub mod elements;
pub mod error;
pub mod event;
pub mod hub;
pub mod init;
pub mod logging;
pub mod number;
pub mod page;
pub mod range;
pub mod slider;
pub mod tasks;
pub mod type_cell;

pub use config::RangeSliderConfig;
pub use dom::{Document, ElementId, Rect};
pub use elements::{mount_slider_markup, SliderElements};
pub use error::{ConfigError, InitError};
pub use init::{init_range_slider, try_init_range_slider, Teardown};
pub use page::Page;
pub use slider::RangeSlider;
