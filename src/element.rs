use indexmap::IndexMap;

use crate::error::Error;
use crate::reader;
use crate::writer::{self, WriteOptions};

/// An in-memory XML element: a name, an ordered attribute map and a list of
/// child nodes.
///
/// Elements are always standalone. There is no parent pointer, so an element
/// produced by one document can be attached to another freely.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

/// A child of an [`Element`].
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Element {
    /// Creates an element with the given name and no attributes or children.
    pub fn new(name: impl Into<String>) -> Element {
        Element {
            name: name.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Parses an XML document into an element tree.
    ///
    /// Parsing stops after the first complete root element. Whitespace-only
    /// text between element children is treated as formatting and dropped;
    /// an element whose content is only text keeps it verbatim.
    pub fn from_xml(xml: &str) -> Result<Element, Error> {
        reader::parse(xml)
    }

    /// Renders this element as XML text using the given writer configuration.
    pub fn to_xml(&self, options: &WriteOptions) -> String {
        writer::write_document(self, options)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of the named attribute, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterates over the attributes in document order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the first attribute in document order, if any.
    pub fn first_attribute(&self) -> Option<(&str, &str)> {
        self.attributes
            .iter()
            .next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Sets an attribute, replacing any previous value. A replaced attribute
    /// keeps its original position.
    pub fn push_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    // Used to place namespace declarations ahead of the attributes the
    // serialization engine produced.
    pub(crate) fn insert_attribute_front(&mut self, name: String, value: String) {
        self.attributes.shift_remove(&name);
        self.attributes.insert(name, value);
        let last = self.attributes.len() - 1;
        self.attributes.move_index(last, 0);
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut Vec<Node> {
        &mut self.children
    }

    /// Appends a child element.
    pub fn push_element(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    /// Appends a text node.
    pub fn push_text(&mut self, text: impl Into<String>) {
        self.children.push(Node::Text(text.into()));
    }

    /// Returns the first child element with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find_map(|node| match node {
            Node::Element(element) if element.name == name => Some(element),
            _ => None,
        })
    }

    /// Returns the concatenated text content of this element and all of its
    /// descendants, in document order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => element.collect_text(out),
            }
        }
    }
}

impl Node {
    /// If the `Node` is an element, returns the associated `Element`.
    /// Returns None otherwise.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// If the `Node` is a text node, returns the associated str.
    /// Returns None otherwise.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order() -> Element {
        let mut number = Element::new("OrderNumber");
        number.push_text("AB12C");
        let mut order = Element::new("TestOrder");
        order.push_attribute("status", "open");
        order.push_element(number);
        order
    }

    #[test]
    fn accessors() {
        let order = order();
        assert_eq!(order.name(), "TestOrder");
        assert_eq!(order.attribute("status"), Some("open"));
        assert_eq!(order.attribute("missing"), None);
        assert_eq!(order.first_attribute(), Some(("status", "open")));
        assert_eq!(order.child("OrderNumber").map(Element::name), Some("OrderNumber"));
        assert_eq!(order.child("Missing"), None);
        assert_eq!(order.children().len(), 1);
        assert_eq!(order.children()[0].as_element().map(Element::name), Some("OrderNumber"));
        assert_eq!(order.children()[0].as_text(), None);
    }

    #[test]
    fn descendant_text() {
        let mut envelope = Element::new("Envelope");
        envelope.push_text("a");
        envelope.push_element(order());
        envelope.push_text("z");
        assert_eq!(envelope.text(), "aAB12Cz");
    }

    #[test]
    fn attribute_replacement_keeps_position() {
        let mut order = order();
        order.push_attribute("priority", "low");
        order.push_attribute("status", "closed");
        let attributes: Vec<_> = order.attributes().collect();
        assert_eq!(
            attributes,
            vec![("status", "closed"), ("priority", "low")]
        );
    }

    #[test]
    fn front_insertion() {
        let mut order = order();
        order.insert_attribute_front("xmlns:ns".to_owned(), "urn:test".to_owned());
        assert_eq!(order.first_attribute(), Some(("xmlns:ns", "urn:test")));

        // Re-inserting an existing attribute moves it to the front.
        order.insert_attribute_front("status".to_owned(), "open".to_owned());
        let attributes: Vec<_> = order.attributes().collect();
        assert_eq!(
            attributes,
            vec![("status", "open"), ("xmlns:ns", "urn:test")]
        );
    }
}
