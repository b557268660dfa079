use crate::{
    field::FieldSpec,
    traits::{XmileDocument, XmileElement},
    ISEE_NAMESPACE, XMILE_NAMESPACE,
};

use super::{Slider, Views};

/// Root element of an XMILE file.
///
/// Namespace declarations are kept as plain attributes so that a document read from disk is
/// written back with the same declarations.
///
/// Only the model and view tree leading to sliders is bound. Everything else in the file
/// (`header`, `sim_specs`, `variables`, non-slider view content, ...) is skipped when reading and
/// is therefore missing from the written output. Writing an `Xmile` is not a way to edit a file
/// in place.
#[derive(Default, PartialEq, Debug, Clone, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[xml(tag = "xmile")]
pub struct Xmile {
    /// Version of XMILE the file conforms to.
    #[xml(attr = "version")]
    pub version: String,
    #[xml(attr = "xmlns")]
    pub xmlns: Option<String>,
    #[xml(attr = "xmlns:isee")]
    pub xmlns_isee: Option<String>,
    #[xml(child = "model")]
    pub models: Vec<Model>,
}

#[derive(Default, PartialEq, Debug, Clone, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[xml(tag = "model")]
pub struct Model {
    /// Name of the module model; absent for the root model.
    #[xml(attr = "name")]
    pub name: Option<String>,
    #[xml(child = "views")]
    pub views: Option<Views>,
}

impl Xmile {
    /// An empty XMILE 1.0 document declaring both the XMILE and the isee namespaces.
    pub fn new() -> Self {
        Self {
            version: "1.0".to_owned(),
            xmlns: Some(XMILE_NAMESPACE.to_owned()),
            xmlns_isee: Some(ISEE_NAMESPACE.to_owned()),
            models: Vec::new(),
        }
    }

    /// The root model, i.e. the first one without a name.
    pub fn root_model(&self) -> Option<&Model> {
        self.models.iter().find(|model| model.name.is_none())
    }

    /// Iterates over every slider in every model.
    pub fn sliders(&self) -> impl Iterator<Item = &Slider> {
        self.models
            .iter()
            .filter_map(|model| model.views.as_ref())
            .flat_map(|views| views.sliders())
    }
}

impl XmileDocument for Xmile {
    fn version_string(&self) -> &str {
        &self.version
    }
}

impl XmileElement for Xmile {
    const TAG: &'static str = "xmile";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("version", "version"),
        FieldSpec::attribute("xmlns", "xmlns"),
        FieldSpec::attribute("xmlns_isee", "xmlns:isee"),
        FieldSpec::element("models", "model"),
    ];
}

impl XmileElement for Model {
    const TAG: &'static str = "model";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("name", "name"),
        FieldSpec::element("views", "views"),
    ];
}
