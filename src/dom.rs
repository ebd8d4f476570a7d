//! A minimal element tree standing in for the host document.
//!
//! Elements live in an arena and are addressed by [`ElementId`]. Removing an
//! element only detaches it from its parent, so ids held elsewhere stay
//! valid; they just stop being reachable through [`Document::get_element_by_id`].

use std::collections::HashMap;

use itertools::Itertools;

use crate::{number::parse_float, type_cell::TypeCell};

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementTag;

pub type ElementId = TypeCell<ElementTag, usize>;

const FORM_CONTROL_TAGS: [&str; 3] = ["input", "select", "textarea"];

/// Horizontal placement in client coordinates.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Rect {
    pub left:  f64,
    pub width: f64,
}

impl Rect {
    pub const fn new(left: f64, width: f64) -> Self { Self { left, width } }
}

/// Inline style properties the slider writes.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Style {
    pub left:  Option<String>,
    pub width: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Element {
    tag:           String,
    id:            Option<String>,
    classes:       Vec<String>,
    attributes:    HashMap<String, String>,
    value:         String,
    default_value: String,
    style:         Style,
    rect:          Option<Rect>,
    parent:        Option<ElementId>,
    children:      Vec<ElementId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            ..Default::default()
        }
    }

    pub fn tag(&self) -> &str { &self.tag }
    pub fn id(&self) -> Option<&str> { self.id.as_deref() }
    pub fn classes(&self) -> &[String] { &self.classes }
    pub fn has_class(&self, class: &str) -> bool { self.classes.iter().any(|c| c == class) }
    pub fn class_name(&self) -> String { self.classes.iter().join(" ") }
    pub fn attribute(&self, name: &str) -> Option<&str> { self.attributes.get(name).map(String::as_str) }
    pub fn value(&self) -> &str { &self.value }
    pub fn default_value(&self) -> &str { &self.default_value }
    pub fn style(&self) -> &Style { &self.style }
    pub fn parent(&self) -> Option<ElementId> { self.parent }
    pub fn children(&self) -> &[ElementId] { &self.children }
    pub fn is_form_control(&self) -> bool { FORM_CONTROL_TAGS.contains(&self.tag.as_str()) }
}

#[derive(Clone, Debug)]
pub struct Document {
    elements: Vec<Element>,
    root:     ElementId,
}

impl Default for Document {
    fn default() -> Self { Self::new() }
}

impl Document {
    pub fn new() -> Self {
        Self {
            elements: vec![Element::new("body")],
            root:     0.into(),
        }
    }

    pub fn root(&self) -> ElementId { self.root }

    pub fn element(&self, id: ElementId) -> Option<&Element> { self.elements.get(*id) }

    fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> { self.elements.get_mut(*id) }

    pub fn create_element(&mut self, tag: &str) -> ElementId {
        self.elements.push(Element::new(tag));
        (self.elements.len() - 1).into()
    }

    /// Creates an element with the given classes and appends it to `parent`.
    pub fn append_new(&mut self, parent: ElementId, tag: &str, classes: &[&str]) -> ElementId {
        let id = self.create_element(tag);

        for class in classes {
            self.add_class(id, class);
        }

        self.append_child(parent, id);
        id
    }

    /// Moves `child` under `parent`. Returns false if either id is unknown or
    /// the move would make an element its own ancestor.
    pub fn append_child(&mut self, parent: ElementId, child: ElementId) -> bool {
        if self.element(parent).is_none() || self.element(child).is_none() || self.ancestors(parent).contains(&child) {
            return false;
        }

        self.remove(child);

        if let Some(c) = self.element_mut(child) {
            c.parent = Some(parent);
        }

        if let Some(p) = self.element_mut(parent) {
            p.children.push(child);
        }

        true
    }

    /// Detaches `id` from its parent. The element and its subtree stay in the arena.
    pub fn remove(&mut self, id: ElementId) {
        let parent = match self.element_mut(id) {
            Some(e) => e.parent.take(),
            None => return,
        };

        if let Some(p) = parent {
            if let Some(p) = self.element_mut(p) {
                p.children.retain(|c| *c != id);
            }
        }
    }

    /// `id` itself followed by its parent chain.
    pub fn ancestors(&self, id: ElementId) -> Vec<ElementId> {
        let mut chain = Vec::new();
        let mut current = self.element(id).map(|_| id);

        while let Some(c) = current {
            chain.push(c);
            current = self.element(c).and_then(Element::parent);
        }

        chain
    }

    pub fn is_connected(&self, id: ElementId) -> bool { self.ancestors(id).last() == Some(&self.root) }

    /// Descendants of `id` in document order, excluding `id`.
    pub fn descendants(&self, id: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack = self
            .element(id)
            .map(|e| e.children.iter().rev().copied().collect::<Vec<_>>())
            .unwrap_or_default();

        while let Some(c) = stack.pop() {
            out.push(c);

            if let Some(e) = self.element(c) {
                stack.extend(e.children.iter().rev().copied());
            }
        }

        out
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<ElementId> {
        std::iter::once(self.root)
            .chain(self.descendants(self.root))
            .find(|e| self.element(*e).and_then(Element::id) == Some(id))
    }

    /// First descendant of `scope` carrying `class`.
    pub fn query_class(&self, scope: ElementId, class: &str) -> Option<ElementId> {
        self.descendants(scope).into_iter().find(|e| self.has_class(*e, class))
    }

    /// Nearest inclusive ancestor with the given tag.
    pub fn closest(&self, id: ElementId, tag: &str) -> Option<ElementId> {
        self.ancestors(id).into_iter().find(|e| self.element(*e).map_or(false, |e| e.tag.eq_ignore_ascii_case(tag)))
    }

    pub fn set_id(&mut self, id: ElementId, value: &str) {
        if let Some(e) = self.element_mut(id) {
            e.id = Some(value.into());
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool { self.element(id).map_or(false, |e| e.has_class(class)) }

    pub fn add_class(&mut self, id: ElementId, class: &str) {
        if let Some(e) = self.element_mut(id) {
            if !e.has_class(class) {
                e.classes.push(class.into());
            }
        }
    }

    pub fn remove_class(&mut self, id: ElementId, class: &str) {
        if let Some(e) = self.element_mut(id) {
            e.classes.retain(|c| c != class);
        }
    }

    /// Adds `class` when `force` is set, removes it otherwise.
    pub fn toggle_class(&mut self, id: ElementId, class: &str, force: bool) {
        if force {
            self.add_class(id, class)
        }
        else {
            self.remove_class(id, class)
        }
    }

    pub fn attribute(&self, id: ElementId, name: &str) -> Option<&str> { self.element(id).and_then(|e| e.attribute(name)) }

    pub fn set_attribute(&mut self, id: ElementId, name: &str, value: &str) {
        if let Some(e) = self.element_mut(id) {
            e.attributes.insert(name.into(), value.into());
        }
    }

    /// Current value; unknown ids read as empty.
    pub fn value(&self, id: ElementId) -> &str { self.element(id).map_or("", Element::value) }

    pub fn set_value(&mut self, id: ElementId, value: &str) {
        if let Some(e) = self.element_mut(id) {
            e.value = value.into();
        }
    }

    /// Sets the markup value: what a form reset restores. Also becomes the current value.
    pub fn set_default_value(&mut self, id: ElementId, value: &str) {
        if let Some(e) = self.element_mut(id) {
            e.default_value = value.into();
            e.value = value.into();
        }
    }

    /// Restores every form control under `form` to its markup value.
    pub fn reset_form_controls(&mut self, form: ElementId) {
        for id in self.descendants(form) {
            if let Some(e) = self.element_mut(id) {
                if e.is_form_control() {
                    e.value = e.default_value.clone();
                }
            }
        }
    }

    pub fn style(&self, id: ElementId) -> Option<&Style> { self.element(id).map(Element::style) }

    pub fn set_style_left(&mut self, id: ElementId, value: &str) {
        if let Some(e) = self.element_mut(id) {
            e.style.left = Some(value.into());
        }
    }

    pub fn set_style_width(&mut self, id: ElementId, value: &str) {
        if let Some(e) = self.element_mut(id) {
            e.style.width = Some(value.into());
        }
    }

    pub fn set_rect(&mut self, id: ElementId, rect: Rect) {
        if let Some(e) = self.element_mut(id) {
            e.rect = Some(rect);
        }
    }

    /// An explicitly placed element reports its own rect. Otherwise it fills
    /// its parent's rect, narrowed by inline `left`/`width` percentages when
    /// those are set.
    pub fn bounding_client_rect(&self, id: ElementId) -> Rect {
        let element = match self.element(id) {
            Some(e) => e,
            None => return Rect::default(),
        };

        if let Some(rect) = element.rect {
            return rect;
        }

        let container = match element.parent {
            Some(p) => self.bounding_client_rect(p),
            None => return Rect::default(),
        };

        let percent = |v: &Option<String>| v.as_deref().and_then(parse_float).map(|p| p / 100.0);

        Rect::new(
            container.left + container.width * percent(&element.style.left).unwrap_or(0.0),
            container.width * percent(&element.style.width).unwrap_or(1.0),
        )
    }
}
