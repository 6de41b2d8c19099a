use std::any::{Any, TypeId};

use serde::de::DeserializeOwned;

use crate::element::Element;
use crate::error::{Error, ErrorKind};
use crate::writer::WriteOptions;

/// Deserializes an instance of type `T` from an [`Element`] tree.
pub fn from_element<T: DeserializeOwned>(element: &Element) -> Result<T, Error> {
    let xml = element.to_xml(&WriteOptions::compact());
    quick_xml::de::from_str(&xml).map_err(|err| ErrorKind::Deserialize(err).into())
}

/// Deserializes an instance of type `T` from XML text.
///
/// Empty or whitespace-only input is rejected before parsing. Requesting a
/// `String` returns the input unchanged.
pub fn from_str<T: DeserializeOwned + 'static>(xml: &str) -> Result<T, Error> {
    if xml.trim().is_empty() {
        return Err(ErrorKind::EmptyText.into());
    }
    if TypeId::of::<T>() == TypeId::of::<String>() {
        let text: Box<dyn Any> = Box::new(xml.to_owned());
        // Guarded by the TypeId check above.
        return Ok(*text.downcast::<T>().expect("T is String"));
    }
    quick_xml::de::from_str(xml).map_err(|err| ErrorKind::Deserialize(err).into())
}
