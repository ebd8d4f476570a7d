use std::fmt;

use crate::{dom::ElementId, type_cell::TypeCell};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Input,
    MouseDown,
    Reset,
}

impl EventKind {
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::Input => "input",
            EventKind::MouseDown => "mousedown",
            EventKind::Reset => "reset",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// An event delivered to listeners of a single element.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    pub kind:          EventKind,
    pub target:        ElementId,
    pub client_x:      f64,
    default_prevented: bool,
}

impl Event {
    pub fn new(kind: EventKind, target: ElementId) -> Self {
        Self {
            kind,
            target,
            client_x: 0.0,
            default_prevented: false,
        }
    }

    pub fn with_client_x(self, client_x: f64) -> Self { Self { client_x, ..self } }

    pub fn prevent_default(&mut self) { self.default_prevented = true }

    pub fn default_prevented(&self) -> bool { self.default_prevented }
}

/// Document-wide pointer movement or release.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerEvent {
    pub client_x: f64,
}

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerTag;

pub type ListenerId = TypeCell<ListenerTag, u64>;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserverTag;

pub type ObserverId = TypeCell<ObserverTag, u64>;
