#![doc=include_str!( "../README.md")]
//! ## Feature flags
#![doc = document_features::document_features!()]
#![deny(unsafe_code)]
#![deny(clippy::all)]

use hard_xml::{XmlRead, XmlWrite};
use thiserror::Error;

pub mod field;
pub mod minimal;
mod number;
pub mod traits;
#[cfg(feature = "v1")]
pub mod v1;

pub use number::{Number, ParseNumberError};

/// Namespace of the XMILE 1.0 schema.
pub const XMILE_NAMESPACE: &str = "http://docs.oasis-open.org/xmile/ns/XMILE/v1.0";

/// Namespace of the isee systems vendor extensions.
pub const ISEE_NAMESPACE: &str = "http://iseesystems.com/XMILE";

/// Prefix bound to [`ISEE_NAMESPACE`] in XMILE files.
pub const ISEE_PREFIX: &str = "isee";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Semver(#[from] lenient_semver::parser::OwnedError),

    #[error("Error parsing XML: {0}")]
    XmlParse(String),

    #[error("Error writing XML: {0}")]
    XmlWrite(String),

    #[error(transparent)]
    InvalidNumber(#[from] ParseNumberError),

    #[error("Unsupported XMILE version {0}")]
    UnsupportedVersion(String),
}

/// Serialize `value` to an XML string.
///
/// If `fragment` is `false`, the output is a standalone document: it starts with an XML
/// declaration, and the root element declares the XMILE default namespace and the `isee`
/// prefix unless it already does. Fragments are written as-is, for embedding in a document
/// that binds those namespaces.
pub fn serialize<T: XmlWrite>(value: &T, fragment: bool) -> Result<String, Error> {
    let xml = value
        .to_string()
        .map_err(|e| Error::XmlWrite(e.to_string()))?;
    log::debug!(
        "Serialized {} ({} bytes)",
        std::any::type_name::<T>(),
        xml.len()
    );
    if fragment {
        Ok(xml)
    } else {
        let xml = declare_namespaces(&xml)?;
        Ok(format!("{XML_DECLARATION}\n{xml}"))
    }
}

/// Adds the namespace declarations missing from the start tag of the root element.
fn declare_namespaces(xml: &str) -> Result<String, Error> {
    use hard_xml::xmlparser::{Token, Tokenizer};

    let mut insert_at = None;
    let mut has_default = false;
    let mut has_isee = false;
    for token in Tokenizer::from(xml) {
        match token.map_err(|e| Error::XmlWrite(e.to_string()))? {
            Token::ElementStart { span, .. } => insert_at = Some(span.end()),
            Token::Attribute { prefix, local, .. } => match (prefix.as_str(), local.as_str()) {
                ("", "xmlns") => has_default = true,
                ("xmlns", ISEE_PREFIX) => has_isee = true,
                _ => {}
            },
            Token::ElementEnd { .. } => break,
            _ => {}
        }
    }
    let insert_at =
        insert_at.ok_or_else(|| Error::XmlWrite("No root element written".to_owned()))?;

    let mut declarations = String::new();
    if !has_default {
        declarations.push_str(&format!(r#" xmlns="{XMILE_NAMESPACE}""#));
    }
    if !has_isee {
        declarations.push_str(&format!(r#" xmlns:{ISEE_PREFIX}="{ISEE_NAMESPACE}""#));
    }
    if declarations.is_empty() {
        return Ok(xml.to_owned());
    }
    log::trace!("Declaring namespaces on root:{declarations}");

    let mut out = String::with_capacity(xml.len() + declarations.len());
    out.push_str(&xml[..insert_at]);
    out.push_str(&declarations);
    out.push_str(&xml[insert_at..]);
    Ok(out)
}

/// Deserialize a value of type `T` from an XML string.
pub fn deserialize<'a, T: XmlRead<'a>>(xml: &'a str) -> Result<T, Error> {
    log::trace!("Deserializing {}", std::any::type_name::<T>());
    T::from_str(xml).map_err(|e| {
        log::debug!("Failed to read {}: {e}", std::any::type_name::<T>());
        Error::XmlParse(e.to_string())
    })
}
