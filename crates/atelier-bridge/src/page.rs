//! Minimal markup model consumed by the action registry.
//!
//! Lesson markup is rendered elsewhere; the bridge only needs elements
//! with an identifier, a handler name in their declarative metadata, and
//! a few attributes. A [`Page`] is the id-keyed collection the
//! registration pass iterates, and an [`InteractionEvent`] is what the
//! host delivers to the generic dispatch entry point.

use std::collections::{BTreeMap, HashMap};

/// Metadata attribute naming the command handler an element is bound to.
pub const HANDLER_ATTRIBUTE: &str = "data-handler";

/// Metadata attribute carrying the JSON argument object for the handler.
pub const ARGS_ATTRIBUTE: &str = "data-args";

/// One registrable UI element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: String,
    tag: String,
    attributes: BTreeMap<String, String>,
    text: String,
}

impl Element {
    pub fn new(id: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tag: tag.into(),
            attributes: BTreeMap::new(),
            text: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// The handler name from the element's declarative metadata.
    pub fn handler(&self) -> Option<&str> {
        self.attribute(HANDLER_ATTRIBUTE)
    }

    /// The raw argument JSON from the element's declarative metadata.
    pub fn args(&self) -> Option<&str> {
        self.attribute(ARGS_ATTRIBUTE)
    }
}

/// An id-keyed element collection.
#[derive(Debug, Default)]
pub struct Page {
    elements: HashMap<String, Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element, replacing any previous element with its id.
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id.clone(), element);
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.get_mut(id)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.values()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

/// A UI interaction delivered to the dispatch entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionEvent {
    /// Identifier of the event's current target element.
    pub element_id: String,
    /// Handler name read off the current target, if any.
    pub handler: Option<String>,
}

impl InteractionEvent {
    /// An event for an element known only by id.
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            handler: None,
        }
    }

    /// The event a host would synthesize for a click on `element`.
    pub fn from_element(element: &Element) -> Self {
        Self {
            element_id: element.id().to_string(),
            handler: element.handler().map(str::to_string),
        }
    }
}
