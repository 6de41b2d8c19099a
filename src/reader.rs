use std::str;

use quick_xml::escape;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::element::Element;
use crate::error::{Error, ErrorKind};

/// Parses `text` into an element tree, stopping after the first complete
/// root element.
pub(crate) fn parse(text: &str) -> Result<Element, Error> {
    let mut reader = Reader::from_str(text);
    let mut stack: Vec<Element> = Vec::new();

    loop {
        match reader.read_event().map_err(ErrorKind::Xml)? {
            Event::Start(start) => {
                stack.push(element_from_start(&start)?);
            }
            Event::Empty(start) => {
                let element = element_from_start(&start)?;
                match stack.last_mut() {
                    Some(parent) => parent.push_element(element),
                    None => return Ok(element),
                }
            }
            Event::End(_) => {
                let mut element = match stack.pop() {
                    Some(element) => element,
                    None => return Err(ErrorKind::UnexpectedEndTag.into()),
                };
                prune_formatting_text(&mut element);
                match stack.last_mut() {
                    Some(parent) => parent.push_element(element),
                    None => return Ok(element),
                }
            }
            Event::Text(text) => {
                let raw = str::from_utf8(text.as_ref()).map_err(ErrorKind::InvalidUtf8)?;
                let unescaped = escape::unescape(raw).map_err(ErrorKind::Escape)?;
                if let Some(parent) = stack.last_mut() {
                    append_text(parent, &unescaped);
                }
            }
            Event::CData(data) => {
                let raw = str::from_utf8(data.as_ref()).map_err(ErrorKind::InvalidUtf8)?;
                if let Some(parent) = stack.last_mut() {
                    append_text(parent, raw);
                }
            }
            Event::GeneralRef(name) => {
                let name = str::from_utf8(name.as_ref()).map_err(ErrorKind::InvalidUtf8)?;
                let resolved = resolve_reference(name)?;
                if let Some(parent) = stack.last_mut() {
                    append_text(parent, &resolved);
                }
            }
            Event::Eof => {
                return Err(if stack.is_empty() {
                    ErrorKind::MissingRootElement.into()
                } else {
                    ErrorKind::UnexpectedEof.into()
                });
            }
            // Declarations, comments, processing instructions and doctypes
            // carry nothing the tree model represents.
            _ => {}
        }
    }
}

fn element_from_start(start: &BytesStart) -> Result<Element, Error> {
    let name = start.name();
    let name = str::from_utf8(name.as_ref()).map_err(ErrorKind::InvalidUtf8)?;
    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(ErrorKind::Attribute)?;
        let key = str::from_utf8(attribute.key.as_ref()).map_err(ErrorKind::InvalidUtf8)?;
        let raw = str::from_utf8(&attribute.value).map_err(ErrorKind::InvalidUtf8)?;
        let value = escape::unescape(raw).map_err(ErrorKind::Escape)?;
        element.push_attribute(key, value);
    }
    Ok(element)
}

// Adjacent text events (escaped runs, CDATA sections, entity references)
// merge into a single text node.
fn append_text(parent: &mut Element, text: &str) {
    use crate::element::Node;
    if let Some(Node::Text(existing)) = parent.children_mut().last_mut() {
        existing.push_str(text);
        return;
    }
    parent.push_text(text);
}

// Whitespace-only text between element children is indentation, not content.
// Text is the content when no element children exist, whatever it contains,
// so it survives intact. Runs with a reference or CDATA section are merged
// into one node before this check, keeping their interior whitespace.
fn prune_formatting_text(element: &mut Element) {
    use crate::element::Node;
    let has_element_children = element
        .children()
        .iter()
        .any(|node| matches!(node, Node::Element(_)));
    if has_element_children {
        element
            .children_mut()
            .retain(|node| !matches!(node, Node::Text(text) if text.trim().is_empty()));
    }
}

fn resolve_reference(name: &str) -> Result<String, Error> {
    let resolved = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "apos" => '\'',
        "quot" => '"',
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x") {
                u32::from_str_radix(hex, 16).ok()
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse().ok()
            } else {
                None
            };
            return match code.and_then(char::from_u32) {
                Some(resolved) => Ok(resolved.to_string()),
                None => Err(ErrorKind::UnresolvedReference(name.to_owned()).into()),
            };
        }
    };
    Ok(resolved.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_elements() {
        let root = parse(
            "<Manifest reference=\"M-1\">\
             <TestOrder><OrderNumber>AB12C</OrderNumber></TestOrder>\
             </Manifest>",
        )
        .unwrap();
        assert_eq!(root.name(), "Manifest");
        assert_eq!(root.attribute("reference"), Some("M-1"));
        let order = root.child("TestOrder").unwrap();
        assert_eq!(order.child("OrderNumber").unwrap().text(), "AB12C");
    }

    #[test]
    fn attribute_values_are_unescaped() {
        let root = parse("<Order note=\"a &amp; b\"/>").unwrap();
        assert_eq!(root.attribute("note"), Some("a & b"));
    }

    #[test]
    fn text_entities_are_resolved() {
        let root = parse("<Note>A&amp;B &lt;2&gt; &#65;</Note>").unwrap();
        assert_eq!(root.text(), "A&B <2> A");
    }

    #[test]
    fn inter_element_whitespace_is_dropped() {
        let root = parse("<Order>\n  <OrderNumber>AB12C</OrderNumber>\n</Order>").unwrap();
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.text(), "AB12C");
    }

    #[test]
    fn whitespace_only_content_is_kept() {
        let root = parse("<OrderNumber>   </OrderNumber>").unwrap();
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.text(), "   ");
    }

    #[test]
    fn whitespace_around_references_is_kept() {
        let root = parse("<Note> &#65; </Note>").unwrap();
        assert_eq!(root.text(), " A ");
    }

    #[test]
    fn cdata_is_taken_verbatim() {
        let root = parse("<Note><![CDATA[a < b & c]]></Note>").unwrap();
        assert_eq!(root.text(), "a < b & c");
    }

    #[test]
    fn empty_element_forms() {
        let root = parse("<Order/>").unwrap();
        assert_eq!(root.name(), "Order");
        assert!(root.children().is_empty());

        let root = parse("<Order></Order>").unwrap();
        assert!(root.children().is_empty());
    }

    #[test]
    fn document_without_root_fails() {
        let err = parse("<!-- nothing here -->").unwrap_err();
        assert!(err.is_conversion());
    }

    #[test]
    fn unclosed_tag_fails() {
        let err = parse("<Order><OrderNumber>AB12C").unwrap_err();
        assert!(err.is_conversion());
    }

    #[test]
    fn stops_after_first_root() {
        let root = parse("<First/><Second/>").unwrap();
        assert_eq!(root.name(), "First");
    }

    #[test]
    fn declaration_is_skipped() {
        let root = parse("<?xml version=\"1.0\" encoding=\"UTF-8\"?><Order/>").unwrap();
        assert_eq!(root.name(), "Order");
    }
}
