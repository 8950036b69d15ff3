//! Mock DOM
//!
//! A browser-free element tree, enough to render the calculator and
//! observe what a user would see.

use std::collections::{BTreeMap, HashMap};

/// Represents a DOM element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes (`data-*` included)
    pub attributes: HashMap<String, String>,
    /// Inline style properties
    pub style: BTreeMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            style: BTreeMap::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Sets an inline style property
    pub fn set_style(&mut self, property: &str, value: &str) {
        self.style.insert(property.to_string(), value.to_string());
    }

    /// Gets an inline style property
    #[must_use]
    pub fn style_value(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// Adds a class
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// DOM events that can be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Key down on the document
    KeyDown {
        /// The `KeyboardEvent.key` value
        key: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates a key down event
    #[must_use]
    pub fn key_down(key: &str) -> Self {
        Self::KeyDown {
            key: key.to_string(),
        }
    }
}

/// Mock DOM document
#[derive(Debug, Default)]
pub struct MockDom {
    /// Elements by ID, in registration order
    elements: Vec<DomElement>,
    index: HashMap<String, usize>,
    /// Dispatched events
    event_history: Vec<DomEvent>,
    /// Messages shown through `window.alert`
    alerts: Vec<String>,
}

impl MockDom {
    /// Creates an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an element for ID lookup, replacing one with the same ID
    pub fn register_element(&mut self, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        match self.index.get(&element.id) {
            Some(&slot) => self.elements[slot] = element,
            None => {
                self.index.insert(element.id.clone(), self.elements.len());
                self.elements.push(element);
            }
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.index.get(id).map(|&slot| &self.elements[slot])
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.index.get(id).map(|&slot| &mut self.elements[slot])
    }

    /// Elements carrying `class`, in registration order
    pub fn query_class(&self, class: &str) -> impl Iterator<Item = &DomElement> + '_ {
        let class = class.to_string();
        self.elements.iter().filter(move |e| e.has_class(&class))
    }

    /// Mutable variant of [`MockDom::query_class`]
    pub fn query_class_mut(&mut self, class: &str) -> impl Iterator<Item = &mut DomElement> + '_ {
        let class = class.to_string();
        self.elements.iter_mut().filter(move |e| e.has_class(&class))
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.get_element_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.get_element(id).map(|e| e.text_content.as_str())
    }

    /// Records a dispatched event
    pub fn record_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Shows a blocking alert
    pub fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    /// Alerts shown so far
    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_builders() {
        let elem = DomElement::new("button")
            .with_id("btn-1")
            .with_text("1")
            .with_class("btn")
            .with_attr("data-number", "1");
        assert_eq!(elem.tag, "button");
        assert_eq!(elem.id, "btn-1");
        assert_eq!(elem.text_content, "1");
        assert!(elem.has_class("btn"));
        assert_eq!(elem.get_attr("data-number"), Some("1"));
    }

    #[test]
    fn test_add_class_no_duplicates() {
        let mut elem = DomElement::default();
        elem.add_class("active");
        elem.add_class("active");
        assert_eq!(elem.classes.len(), 1);
        elem.remove_class("active");
        assert!(!elem.has_class("active"));
    }

    #[test]
    fn test_style() {
        let mut elem = DomElement::default();
        elem.set_style("font-size", "48px");
        assert_eq!(elem.style_value("font-size"), Some("48px"));
        assert_eq!(elem.style_value("color"), None);
    }

    #[test]
    fn test_register_and_lookup() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div").with_id("display"));
        dom.set_element_text("display", "42");
        assert_eq!(dom.get_element_text("display"), Some("42"));
        assert!(dom.get_element("missing").is_none());
    }

    #[test]
    fn test_register_replaces_same_id() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div").with_id("x").with_text("a"));
        dom.register_element(DomElement::new("div").with_id("x").with_text("b"));
        assert_eq!(dom.get_element_text("x"), Some("b"));
        assert_eq!(dom.query_class("any").count(), 0);
    }

    #[test]
    fn test_register_ignores_anonymous() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("div").with_class("orphan"));
        assert_eq!(dom.query_class("orphan").count(), 0);
    }

    #[test]
    fn test_query_class() {
        let mut dom = MockDom::new();
        dom.register_element(DomElement::new("button").with_id("a").with_class("operator"));
        dom.register_element(DomElement::new("button").with_id("b"));
        dom.register_element(DomElement::new("button").with_id("c").with_class("operator"));
        let ids: Vec<&str> = dom.query_class("operator").map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);

        for elem in dom.query_class_mut("operator") {
            elem.add_class("active");
        }
        assert!(dom.get_element("c").unwrap().has_class("active"));
    }

    #[test]
    fn test_events_and_alerts() {
        let mut dom = MockDom::new();
        dom.record_event(DomEvent::click("btn-1"));
        dom.record_event(DomEvent::key_down("Enter"));
        assert_eq!(dom.event_history().len(), 2);
        assert_eq!(dom.event_history()[1], DomEvent::key_down("Enter"));

        dom.alert("Error: Division by zero");
        assert_eq!(dom.alerts(), ["Error: Division by zero".to_string()]);
    }
}
