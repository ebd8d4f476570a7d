use std::fmt;

use itertools::Itertools;
use thiserror::Error;

/// Which of the five bound elements were found inside the container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ElementPresence {
    pub progress:      bool,
    pub lower_display: bool,
    pub upper_display: bool,
    pub lower_control: bool,
    pub upper_control: bool,
}

impl ElementPresence {
    fn entries(&self) -> [(&'static str, bool); 5] {
        [
            ("progress", self.progress),
            ("lowerDisplay", self.lower_display),
            ("upperDisplay", self.upper_display),
            ("lowerControl", self.lower_control),
            ("upperControl", self.upper_control),
        ]
    }

    pub fn is_complete(&self) -> bool { self.entries().iter().all(|(_, found)| *found) }

    pub fn missing(&self) -> Vec<&'static str> {
        self.entries().iter().filter(|(_, found)| !found).map(|(name, _)| *name).collect()
    }
}

impl fmt::Display for ElementPresence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.entries().iter().map(|(name, found)| format!("{}: {}", name, found)).join(", "))
    }
}

/// Why a slider could not be bound to its markup. Nothing is mutated or
/// registered when one of these is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InitError {
    #[error("range slider container not found: {id}")]
    ContainerNotFound { id: String },

    #[error("some range slider elements not found in container {container_id}: {found}")]
    MissingElements { container_id: String, found: ElementPresence },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid range slider config: {0}")]
    Json(#[from] serde_json::Error),
}
