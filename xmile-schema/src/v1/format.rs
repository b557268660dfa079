use crate::{field::FieldSpec, traits::XmileElement, Number};

/// Number formatting of a displayed value.
#[derive(Default, PartialEq, Debug, Clone, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[xml(tag = "format")]
pub struct Format {
    /// Rounding precision, e.g. `0.01`.
    #[xml(attr = "precision")]
    pub precision: Option<Number>,
    /// Factor the value is divided by before display.
    #[xml(attr = "scale_by")]
    pub scale_by: Option<Number>,
    #[xml(attr = "display_as")]
    pub display_as: Option<String>,
    /// Show thousands separators.
    #[xml(attr = "delimit_000s")]
    pub delimit_000s: Option<bool>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DisplayAs {
    Number,
    Currency,
    Percent,
    Other(String),
}

impl Format {
    pub fn display_kind(&self) -> Option<DisplayAs> {
        self.display_as.as_deref().map(|display_as| match display_as {
            "number" => DisplayAs::Number,
            "currency" => DisplayAs::Currency,
            "percent" => DisplayAs::Percent,
            other => DisplayAs::Other(other.to_string()),
        })
    }
}

impl XmileElement for Format {
    const TAG: &'static str = "format";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("precision", "precision"),
        FieldSpec::attribute("scale_by", "scale_by"),
        FieldSpec::attribute("display_as", "display_as"),
        FieldSpec::attribute("delimit_000s", "delimit_000s"),
    ];
}

#[test]
fn test_format() {
    use hard_xml::{XmlRead, XmlWrite};

    let xml = r#"<format precision="0.01" scale_by="1000" display_as="currency" delimit_000s="true"/>"#;
    let format = Format::from_str(xml).unwrap();
    assert_eq!(
        format,
        Format {
            precision: Some(Number::Float(0.01)),
            scale_by: Some(Number::Int(1000)),
            display_as: Some("currency".to_owned()),
            delimit_000s: Some(true),
        }
    );
    assert_eq!(format.display_kind(), Some(DisplayAs::Currency));
    assert_eq!(format.to_string().unwrap(), xml);

    assert_eq!(Format::default().display_kind(), None);
}
