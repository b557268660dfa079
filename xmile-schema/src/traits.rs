//! Common traits for XMILE schema types

use crate::{
    field::{FieldSpec, Namespace, XmlRole},
    Error,
};

/// A record bound to a single XMILE element.
///
/// The tag and namespace are fixed per type. `FIELDS` mirrors the `#[xml(...)]` declarations
/// on the type, in the order they are written.
pub trait XmileElement {
    /// Local name of the element.
    const TAG: &'static str;

    /// Namespace of the element itself.
    const NAMESPACE: Namespace = Namespace::Xmile;

    const FIELDS: &'static [FieldSpec];

    /// Looks up the binding of a field by its Rust identifier.
    fn field_spec(field: &str) -> Option<&'static FieldSpec> {
        Self::FIELDS.iter().find(|spec| spec.field == field)
    }

    fn attributes() -> impl Iterator<Item = &'static FieldSpec> {
        Self::FIELDS
            .iter()
            .filter(|spec| spec.role == XmlRole::Attribute)
    }

    fn elements() -> impl Iterator<Item = &'static FieldSpec> {
        Self::FIELDS
            .iter()
            .filter(|spec| spec.role == XmlRole::Element)
    }
}

/// A parsed XMILE document root.
pub trait XmileDocument {
    /// Returns the XMILE version as a string
    fn version_string(&self) -> &str;

    /// Returns the parsed XMILE version as a semver::Version
    fn version(&self) -> Result<semver::Version, Error> {
        lenient_semver::parse(self.version_string()).map_err(|e| e.owned().into())
    }

    /// Checks that the document is an XMILE 1.x document
    fn check_version(&self) -> Result<(), Error> {
        match self.version()? {
            v if v.major == 1 => Ok(()),
            _ => Err(Error::UnsupportedVersion(self.version_string().to_owned())),
        }
    }
}

/// Asserts that every entry of `T::FIELDS` shows up in the XML written for `value`.
///
/// `value` must have every field populated, with at least one item in each list.
#[cfg(test)]
pub(crate) fn assert_fields_written<T: XmileElement + hard_xml::XmlWrite>(value: &T) {
    let xml = value.to_string().unwrap();
    for spec in T::FIELDS {
        match spec.role {
            XmlRole::Attribute => assert!(
                xml.contains(&format!(" {}=\"", spec.qualified_name())),
                "<{}>: attribute {} missing from {xml}",
                T::TAG,
                spec.qualified_name()
            ),
            XmlRole::Element => assert!(
                ["/", ">", " "]
                    .iter()
                    .any(|end| xml.contains(&format!("<{}{end}", spec.name))),
                "<{}>: element {} missing from {xml}",
                T::TAG,
                spec.name
            ),
            XmlRole::Text => assert!(
                !xml.ends_with("/>"),
                "<{}>: text content missing from {xml}",
                T::TAG
            ),
        }
    }
}
