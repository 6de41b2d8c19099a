use serde::Serialize;

use crate::element::Element;
use crate::error::{Error, ErrorKind};
use crate::namespaces::{declaration_attribute, Namespaces};
use crate::reader;
use crate::writer::{WriteOptions, DEFAULT_OPTIONS};

/// Serializes `value` to an [`Element`] tree with a namespace declared as the
/// root element's first attribute.
///
/// An empty `default_prefix` declares the namespace as the default `xmlns`.
/// The returned element is detached and can be attached to any document.
pub fn to_element<T: Serialize>(
    value: &T,
    default_prefix: &str,
    default_namespace: &str,
) -> Result<Element, Error> {
    if default_namespace.trim().is_empty() {
        return Err(ErrorKind::EmptyNamespaceUri.into());
    }
    let xml = quick_xml::se::to_string(value).map_err(ErrorKind::Serialize)?;
    let mut element = reader::parse(&xml)?;
    element.insert_attribute_front(
        declaration_attribute(default_prefix),
        default_namespace.to_owned(),
    );
    Ok(element)
}

/// Serializes `value` to XML text using the default writer configuration.
///
/// Every namespace in `namespaces` is declared on the root element, in
/// registration order, ahead of any other attributes.
pub fn to_string<T: Serialize>(value: &T, namespaces: &Namespaces) -> Result<String, Error> {
    to_string_with_options(value, namespaces, &DEFAULT_OPTIONS)
}

/// Serializes `value` to XML text using the given writer configuration.
pub fn to_string_with_options<T: Serialize>(
    value: &T,
    namespaces: &Namespaces,
    options: &WriteOptions,
) -> Result<String, Error> {
    let xml = quick_xml::se::to_string(value).map_err(ErrorKind::Serialize)?;
    let mut element = reader::parse(&xml)?;
    // Front insertion in reverse keeps the registration order.
    for (prefix, uri) in namespaces.iter().rev() {
        element.insert_attribute_front(declaration_attribute(prefix), uri.to_owned());
    }
    Ok(element.to_xml(options))
}
