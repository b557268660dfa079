use crate::{field::FieldSpec, traits::XmileElement, Number};

use super::Slider;

#[derive(Default, PartialEq, Debug, Clone, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[xml(tag = "views")]
pub struct Views {
    #[xml(child = "view")]
    pub views: Vec<View>,
}

impl Views {
    /// Iterates over the sliders of all views, in document order.
    pub fn sliders(&self) -> impl Iterator<Item = &Slider> {
        self.views.iter().flat_map(|view| view.sliders.iter())
    }
}

/// A single diagram or interface page of a model.
///
/// Only sliders are bound; other view content is skipped when reading.
#[derive(Default, PartialEq, Debug, Clone, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[xml(tag = "view")]
pub struct View {
    /// `stock_flow`, `interface` or `popup`.
    #[xml(attr = "type")]
    pub view_type: Option<String>,
    #[xml(attr = "width")]
    pub width: Option<Number>,
    #[xml(attr = "height")]
    pub height: Option<Number>,
    /// Zoom in percent.
    #[xml(attr = "zoom")]
    pub zoom: Option<Number>,
    #[xml(attr = "background")]
    pub background: Option<String>,
    #[xml(child = "slider")]
    pub sliders: Vec<Slider>,
}

impl View {
    /// Finds the slider bound to the variable `entity`.
    pub fn slider_for(&self, entity: &str) -> Option<&Slider> {
        self.sliders
            .iter()
            .find(|slider| slider.entity_name() == Some(entity))
    }
}

impl XmileElement for Views {
    const TAG: &'static str = "views";
    const FIELDS: &'static [FieldSpec] = &[FieldSpec::element("views", "view")];
}

impl XmileElement for View {
    const TAG: &'static str = "view";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("view_type", "type"),
        FieldSpec::attribute("width", "width"),
        FieldSpec::attribute("height", "height"),
        FieldSpec::attribute("zoom", "zoom"),
        FieldSpec::attribute("background", "background"),
        FieldSpec::element("sliders", "slider"),
    ];
}

#[test]
fn test_view_sliders() {
    use super::Entity;
    use hard_xml::XmlRead;

    let xml = r#"<view type="interface" zoom="100">
        <text_box x="10" y="10">Controls</text_box>
        <slider min="0" max="1"><entity name="Price"/></slider>
        <button x="10" y="200"/>
        <slider min="1" max="9"><entity name="Lifetime"/></slider>
    </view>"#;
    let view = View::from_str(xml).unwrap();

    assert_eq!(view.view_type.as_deref(), Some("interface"));
    assert_eq!(view.zoom, Some(Number::Int(100)));
    assert_eq!(view.sliders.len(), 2);
    assert_eq!(
        view.slider_for("Lifetime").and_then(|s| s.max),
        Some(Number::Int(9))
    );
    assert!(view.slider_for("Unknown").is_none());

    let views = Views {
        views: vec![
            view,
            View {
                sliders: vec![Slider {
                    entity: Some(Entity::new("Cost")),
                    ..Default::default()
                }],
                ..Default::default()
            },
        ],
    };
    let names: Vec<_> = views.sliders().filter_map(Slider::entity_name).collect();
    assert_eq!(names, ["Price", "Lifetime", "Cost"]);
}
