use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, range::Range};

pub const DEFAULT_MIN: i64 = 0;
pub const DEFAULT_MAX: i64 = 9999;

fn default_min() -> i64 { DEFAULT_MIN }
fn default_max() -> i64 { DEFAULT_MAX }

/// Options for one slider instance, field names as the host page writes them:
///
/// ```json
/// { "containerId": "price", "min": 0, "max": 100, "initialMin": 20, "initialMax": 80 }
/// ```
///
/// Only `containerId` is required. The initial pair defaults to the bounds and
/// is used as given, even when it lies outside them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeSliderConfig {
    pub container_id: String,
    #[serde(default = "default_min")]
    pub min:          i64,
    #[serde(default = "default_max")]
    pub max:          i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_min:  Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_max:  Option<i64>,
}

impl RangeSliderConfig {
    pub fn new(container_id: &str) -> Self {
        Self {
            container_id: container_id.into(),
            min:          DEFAULT_MIN,
            max:          DEFAULT_MAX,
            initial_min:  None,
            initial_max:  None,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> { Ok(serde_json::from_str(json)?) }

    pub fn with_bounds(self, min: i64, max: i64) -> Self { Self { min, max, ..self } }

    pub fn with_initial(self, initial_min: i64, initial_max: i64) -> Self {
        Self {
            initial_min: Some(initial_min),
            initial_max: Some(initial_max),
            ..self
        }
    }

    pub fn bounds(&self) -> Range<i64> { Range::new(self.min, self.max) }

    /// The values shown after initialization and after every form reset.
    pub fn initial(&self) -> Range<i64> {
        Range::new(self.initial_min.unwrap_or(self.min), self.initial_max.unwrap_or(self.max))
    }
}
