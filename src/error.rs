use std::{error, fmt, str};

use quick_xml::escape::EscapeError;
use quick_xml::events::attributes::AttrError;
use quick_xml::{DeError, SeError};

/// This type represents all possible errors that can occur when converting
/// between typed values and XML.
#[derive(Debug)]
pub struct Error {
    inner: Box<ErrorImpl>,
}

#[derive(Debug)]
pub(crate) struct ErrorImpl {
    kind: ErrorKind,
}

#[derive(Debug)]
pub(crate) enum ErrorKind {
    EmptyText,
    EmptyNamespaceUri,

    MissingRootElement,
    UnexpectedEof,
    UnexpectedEndTag,
    UnresolvedReference(String),
    InvalidUtf8(str::Utf8Error),

    Xml(quick_xml::Error),
    Attribute(AttrError),
    Escape(EscapeError),
    Serialize(SeError),
    Deserialize(DeError),
}

impl Error {
    /// Returns true if this error was caused by an invalid argument: XML text
    /// or a namespace URI that is empty or whitespace-only. Such errors are
    /// raised before the underlying XML engine is invoked.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self.inner.kind,
            ErrorKind::EmptyText | ErrorKind::EmptyNamespaceUri
        )
    }

    /// Returns true if the underlying XML engine could not produce a
    /// well-typed result: malformed XML, a type mismatch, or a document
    /// without a root element.
    pub fn is_conversion(&self) -> bool {
        !self.is_invalid_input()
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &self.inner.kind {
            ErrorKind::InvalidUtf8(err) => Some(err),
            ErrorKind::Xml(err) => Some(err),
            ErrorKind::Attribute(err) => Some(err),
            ErrorKind::Escape(err) => Some(err),
            ErrorKind::Serialize(err) => Some(err),
            ErrorKind::Deserialize(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.inner.kind {
            ErrorKind::EmptyText => write!(f, "XML text is empty or whitespace-only"),
            ErrorKind::EmptyNamespaceUri => {
                write!(f, "namespace URI is empty or whitespace-only")
            }
            ErrorKind::MissingRootElement => write!(f, "document contains no root element"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected end of XML document"),
            ErrorKind::UnexpectedEndTag => write!(f, "unexpected closing tag"),
            ErrorKind::UnresolvedReference(name) => {
                write!(f, "unresolved entity reference: &{};", name)
            }
            ErrorKind::InvalidUtf8(err) => write!(f, "invalid UTF-8 in XML: {}", err),
            ErrorKind::Xml(err) => write!(f, "malformed XML: {}", err),
            ErrorKind::Attribute(err) => write!(f, "malformed XML attribute: {}", err),
            ErrorKind::Escape(err) => write!(f, "invalid escape sequence: {}", err),
            ErrorKind::Serialize(err) => write!(f, "serialization failed: {}", err),
            ErrorKind::Deserialize(err) => write!(f, "deserialization failed: {}", err),
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Box::new(ErrorImpl { kind }),
        }
    }
}
