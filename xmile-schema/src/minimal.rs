//! Minimal XMILE definitions for determining the XMILE version.

use crate::traits::XmileDocument;

/// A minimal XMILE document that only contains the version.
/// Everything below the root element is skipped.
#[derive(Default, PartialEq, Debug, hard_xml::XmlRead)]
#[xml(tag = "xmile")]
pub struct MinXmile {
    #[xml(attr = "version")]
    pub version: String,
}

impl MinXmile {
    pub fn deserialize(xml: &str) -> Result<Self, crate::Error> {
        crate::deserialize(xml)
    }
}

impl XmileDocument for MinXmile {
    fn version_string(&self) -> &str {
        &self.version
    }
}
