//! Static binding metadata for the fields of an XMILE record.

use std::borrow::Cow;

use crate::{ISEE_NAMESPACE, ISEE_PREFIX, XMILE_NAMESPACE};

/// Where a field lives in the XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XmlRole {
    /// Serialized on the opening tag as `name="value"`.
    Attribute,
    /// Serialized as a nested child tag.
    Element,
    /// Serialized as the character content of the element.
    Text,
}

/// The XML namespace a field belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace {
    /// The XMILE 1.0 schema namespace, declared as the default namespace.
    Xmile,
    /// The isee systems vendor namespace, always written with the `isee` prefix.
    Isee,
}

impl Namespace {
    pub const fn uri(&self) -> &'static str {
        match self {
            Namespace::Xmile => XMILE_NAMESPACE,
            Namespace::Isee => ISEE_NAMESPACE,
        }
    }

    /// The prefix used when writing names in this namespace.
    pub const fn prefix(&self) -> Option<&'static str> {
        match self {
            Namespace::Xmile => None,
            Namespace::Isee => Some(ISEE_PREFIX),
        }
    }
}

/// Describes how one field of a record maps onto XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The Rust field identifier.
    pub field: &'static str,
    /// The local XML name.
    pub name: &'static str,
    pub role: XmlRole,
    pub namespace: Namespace,
}

impl FieldSpec {
    pub const fn attribute(field: &'static str, name: &'static str) -> Self {
        Self {
            field,
            name,
            role: XmlRole::Attribute,
            namespace: Namespace::Xmile,
        }
    }

    pub const fn element(field: &'static str, name: &'static str) -> Self {
        Self {
            field,
            name,
            role: XmlRole::Element,
            namespace: Namespace::Xmile,
        }
    }

    pub const fn text(field: &'static str) -> Self {
        Self {
            field,
            name: "",
            role: XmlRole::Text,
            namespace: Namespace::Xmile,
        }
    }

    /// Moves the field into the isee vendor namespace.
    pub const fn isee(self) -> Self {
        Self {
            namespace: Namespace::Isee,
            ..self
        }
    }

    /// The name as it appears in the XML, including the namespace prefix if any.
    pub fn qualified_name(&self) -> Cow<'static, str> {
        match self.namespace.prefix() {
            Some(prefix) => Cow::Owned(format!("{prefix}:{}", self.name)),
            None => Cow::Borrowed(self.name),
        }
    }
}

#[test]
fn test_qualified_name() {
    let plain = FieldSpec::attribute("label_side", "label_side");
    assert_eq!(plain.qualified_name(), "label_side");
    assert_eq!(plain.namespace.uri(), XMILE_NAMESPACE);

    let vendor = FieldSpec::attribute("navigate_to", "navigate_to").isee();
    assert_eq!(vendor.qualified_name(), "isee:navigate_to");
    assert_eq!(vendor.namespace.uri(), ISEE_NAMESPACE);
    assert_eq!(vendor.role, XmlRole::Attribute);

    let child = FieldSpec::element("reset_to", "reset_to");
    assert_eq!(child.role, XmlRole::Element);
    assert_eq!(child.namespace.prefix(), None);
}
