//! # XmlCodec
//!
//! Typed XML (de)serialization helpers built on Serde.
//!
//! Values that implement [`Serialize`](serde::Serialize) can be converted to
//! an XML [`Element`] tree or straight to text, with namespace declarations
//! placed first on the root element. Deserialization accepts either form.
//!
//! ```rust
//! use serde_derive::{Deserialize, Serialize};
//!
//! #[derive(Debug, Deserialize, PartialEq, Serialize)]
//! struct Order {
//!     #[serde(rename = "OrderNumber")]
//!     order_number: String,
//! }
//!
//! let order = Order {
//!     order_number: "AB12C".to_owned(),
//! };
//!
//! let element = xml_codec::to_element(&order, "ns", "urn:orders").unwrap();
//! assert_eq!(element.first_attribute(), Some(("xmlns:ns", "urn:orders")));
//! assert_eq!(element.text(), "AB12C");
//!
//! let round_tripped: Order = xml_codec::from_element(&element).unwrap();
//! assert_eq!(round_tripped, order);
//!
//! let parsed: Order =
//!     xml_codec::from_str("<Order><OrderNumber>AB12C</OrderNumber></Order>").unwrap();
//! assert_eq!(parsed, order);
//! ```

mod de;
mod element;
mod error;
mod namespaces;
mod reader;
mod ser;
mod writer;

pub use crate::de::{from_element, from_str};
pub use crate::element::{Element, Node};
pub use crate::error::Error;
pub use crate::namespaces::Namespaces;
pub use crate::ser::{to_element, to_string, to_string_with_options};
pub use crate::writer::WriteOptions;
