use indexmap::IndexMap;

use crate::error::{Error, ErrorKind};

/// An ordered mapping from namespace prefix to namespace URI, declared on the
/// root element during serialization.
///
/// The empty prefix denotes the default namespace and is declared as a plain
/// `xmlns` attribute.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Namespaces {
    map: IndexMap<String, String>,
}

impl Namespaces {
    pub fn new() -> Namespaces {
        Namespaces::default()
    }

    /// Registers `uri` under `prefix`, replacing any previous registration
    /// for the same prefix.
    ///
    /// Fails with an invalid-input error if the URI is empty or
    /// whitespace-only.
    pub fn add(&mut self, prefix: impl Into<String>, uri: impl Into<String>) -> Result<(), Error> {
        let uri = uri.into();
        if uri.trim().is_empty() {
            return Err(ErrorKind::EmptyNamespaceUri.into());
        }
        self.map.insert(prefix.into(), uri);
        Ok(())
    }

    /// Returns the URI registered for `prefix`, if any.
    pub fn get(&self, prefix: &str) -> Option<&str> {
        self.map.get(prefix).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over the registered (prefix, URI) pairs in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (&str, &str)> {
        self.map
            .iter()
            .map(|(prefix, uri)| (prefix.as_str(), uri.as_str()))
    }
}

/// The attribute name declaring a namespace for the given prefix.
pub(crate) fn declaration_attribute(prefix: &str) -> String {
    if prefix.is_empty() {
        "xmlns".to_owned()
    } else {
        format!("xmlns:{}", prefix)
    }
}
