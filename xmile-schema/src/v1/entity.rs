use crate::{field::FieldSpec, traits::XmileElement};

/// Reference to the model variable a control is bound to.
#[derive(Default, PartialEq, Debug, Clone, hard_xml::XmlRead, hard_xml::XmlWrite)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[xml(tag = "entity")]
pub struct Entity {
    /// Name of the variable, as written in the model.
    #[xml(attr = "name")]
    pub name: Option<String>,
    /// Array subscript of the element, for arrayed variables.
    #[xml(attr = "index")]
    pub index: Option<String>,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            index: None,
        }
    }
}

impl XmileElement for Entity {
    const TAG: &'static str = "entity";
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::attribute("name", "name"),
        FieldSpec::attribute("index", "index"),
    ];
}

#[test]
fn test_entity() {
    use hard_xml::{XmlRead, XmlWrite};

    let xml = r#"<entity name="Population" index="North"/>"#;
    let entity = Entity::from_str(xml).unwrap();
    assert_eq!(entity.name.as_deref(), Some("Population"));
    assert_eq!(entity.index.as_deref(), Some("North"));
    assert_eq!(entity.to_string().unwrap(), xml);

    assert_eq!(Entity::new("Population").to_string().unwrap(), r#"<entity name="Population"/>"#);
}
