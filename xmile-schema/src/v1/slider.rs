use crate::{field::FieldSpec, traits::XmileElement, Number};

use super::{Entity, Format, ResetTo};

/// A slider control on an interface view, bound to a single model variable.
///
/// Every field is optional: `None` means the attribute or child element was absent from the
/// source XML. Fields in the isee vendor namespace are read and written with the `isee:`
/// prefix.
///
/// Vendor attributes are matched by that literal prefix, not by namespace URI. A file that binds
/// `http://iseesystems.com/XMILE` to some other prefix reads as if those attributes were
/// absent. Files written by isee tools always use `isee`.
#[derive(Default, PartialEq, Debug, Clone, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[xml(tag = "slider")]
pub struct Slider {
    /// Unique id of the control within its view.
    #[xml(attr = "uid")]
    pub uid: Option<u32>,
    #[xml(attr = "x")]
    pub x: Option<Number>,
    #[xml(attr = "y")]
    pub y: Option<Number>,
    #[xml(attr = "width")]
    pub width: Option<Number>,
    #[xml(attr = "height")]
    pub height: Option<Number>,
    #[xml(attr = "z_index")]
    pub z_index: Option<i64>,

    #[xml(attr = "title")]
    pub title: Option<String>,
    /// Side the label is drawn on: `top`, `bottom`, `left` or `right`.
    #[xml(attr = "label_side")]
    pub label_side: Option<String>,
    #[xml(attr = "show_name")]
    pub show_name: Option<bool>,
    #[xml(attr = "wrap_title")]
    pub wrap_title: Option<bool>,

    #[xml(attr = "color")]
    pub color: Option<String>,
    #[xml(attr = "background")]
    pub background: Option<String>,
    #[xml(attr = "font_family")]
    pub font_family: Option<String>,
    #[xml(attr = "font_size")]
    pub font_size: Option<String>,
    #[xml(attr = "font_weight")]
    pub font_weight: Option<String>,
    #[xml(attr = "font_color")]
    pub font_color: Option<String>,

    /// Lower end of the slider range.
    #[xml(attr = "min")]
    pub min: Option<Number>,
    /// Upper end of the slider range.
    #[xml(attr = "max")]
    pub max: Option<Number>,
    /// Step between selectable values.
    #[xml(attr = "increment")]
    pub increment: Option<Number>,
    #[xml(attr = "num_ticks")]
    pub num_ticks: Option<u32>,
    #[xml(attr = "vertical")]
    pub vertical: Option<bool>,
    /// Whether the numeric input box grows with its content.
    #[xml(attr = "input_expands")]
    pub input_expands: Option<bool>,
    #[xml(attr = "input_width")]
    pub input_width: Option<u32>,

    #[xml(attr = "isee:show_hover_tip")]
    pub show_hover_tip: Option<String>,
    #[xml(attr = "isee:always_show_hover_tip")]
    pub always_show_hover_tip: Option<bool>,
    #[xml(attr = "isee:fancy_appearance")]
    pub fancy_appearance: Option<bool>,
    #[xml(attr = "isee:navigate_to")]
    pub navigate_to: Option<bool>,
    /// Variable whose value decides whether the control is enabled.
    #[xml(attr = "isee:conditional_entity")]
    pub conditional_entity: Option<String>,

    #[xml(child = "format")]
    pub format: Option<Format>,
    /// The bound model variable.
    #[xml(child = "entity")]
    pub entity: Option<Entity>,
    #[xml(child = "reset_to")]
    pub reset_to: Option<ResetTo>,
}

impl Slider {
    /// Name of the model variable this slider controls, if any.
    pub fn entity_name(&self) -> Option<&str> {
        self.entity.as_ref().and_then(|e| e.name.as_deref())
    }
}

impl XmileElement for Slider {
    const TAG: &'static str = "slider";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("uid", "uid"),
        FieldSpec::attribute("x", "x"),
        FieldSpec::attribute("y", "y"),
        FieldSpec::attribute("width", "width"),
        FieldSpec::attribute("height", "height"),
        FieldSpec::attribute("z_index", "z_index"),
        FieldSpec::attribute("title", "title"),
        FieldSpec::attribute("label_side", "label_side"),
        FieldSpec::attribute("show_name", "show_name"),
        FieldSpec::attribute("wrap_title", "wrap_title"),
        FieldSpec::attribute("color", "color"),
        FieldSpec::attribute("background", "background"),
        FieldSpec::attribute("font_family", "font_family"),
        FieldSpec::attribute("font_size", "font_size"),
        FieldSpec::attribute("font_weight", "font_weight"),
        FieldSpec::attribute("font_color", "font_color"),
        FieldSpec::attribute("min", "min"),
        FieldSpec::attribute("max", "max"),
        FieldSpec::attribute("increment", "increment"),
        FieldSpec::attribute("num_ticks", "num_ticks"),
        FieldSpec::attribute("vertical", "vertical"),
        FieldSpec::attribute("input_expands", "input_expands"),
        FieldSpec::attribute("input_width", "input_width"),
        FieldSpec::attribute("show_hover_tip", "show_hover_tip").isee(),
        FieldSpec::attribute("always_show_hover_tip", "always_show_hover_tip").isee(),
        FieldSpec::attribute("fancy_appearance", "fancy_appearance").isee(),
        FieldSpec::attribute("navigate_to", "navigate_to").isee(),
        FieldSpec::attribute("conditional_entity", "conditional_entity").isee(),
        FieldSpec::element("format", "format"),
        FieldSpec::element("entity", "entity"),
        FieldSpec::element("reset_to", "reset_to"),
    ];
}
