use crate::{field::FieldSpec, traits::XmileElement, Error, Number};

/// The value a control is reset to, and when.
#[derive(Default, PartialEq, Debug, Clone, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[xml(tag = "reset_to")]
pub struct ResetTo {
    #[xml(attr = "after")]
    pub after: Option<String>,
    /// The reset value, kept as written.
    #[xml(text)]
    pub value: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ResetAfter {
    /// Reset once, after the next run.
    OneTime,
    /// Reset after every run.
    OneRun,
    Other(String),
}

impl ResetTo {
    pub fn after_kind(&self) -> Option<ResetAfter> {
        self.after.as_deref().map(|after| match after {
            "one_time" => ResetAfter::OneTime,
            "one_run" => ResetAfter::OneRun,
            other => ResetAfter::Other(other.to_string()),
        })
    }

    /// Parses the reset value. An empty value yields `None`.
    pub fn number(&self) -> Result<Option<Number>, Error> {
        let value = self.value.trim();
        if value.is_empty() {
            return Ok(None);
        }
        Ok(Some(value.parse()?))
    }
}

impl XmileElement for ResetTo {
    const TAG: &'static str = "reset_to";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("after", "after"),
        FieldSpec::text("value"),
    ];
}

#[test]
fn test_reset_to() {
    use hard_xml::{XmlRead, XmlWrite};

    let xml = r#"<reset_to after="one_run">0.25</reset_to>"#;
    let reset_to = ResetTo::from_str(xml).unwrap();
    assert_eq!(reset_to.after_kind(), Some(ResetAfter::OneRun));
    assert_eq!(reset_to.number(), Ok(Some(Number::Float(0.25))));
    assert_eq!(reset_to.to_string().unwrap(), xml);

    let bad = ResetTo {
        after: Some("never".to_owned()),
        value: "high".to_owned(),
    };
    assert_eq!(bad.after_kind(), Some(ResetAfter::Other("never".to_owned())));
    assert!(matches!(bad.number(), Err(Error::InvalidNumber(_))));

    assert_eq!(ResetTo::default().number(), Ok(None));
}
