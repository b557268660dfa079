//! Test the XMILE 1.0 model tree by parsing the Population.xmile file.

use xmile_schema::{
    deserialize, serialize,
    traits::XmileDocument,
    v1::{DisplayAs, Entity, Model, ResetAfter, Slider, View, Views, Xmile},
    Number, ISEE_NAMESPACE, XMILE_NAMESPACE,
};

fn read_population() -> Xmile {
    let test_file = std::env::current_dir()
        .map(|path| path.join("tests/Population.xmile"))
        .unwrap();
    let xml_content = std::fs::read_to_string(test_file).unwrap();
    deserialize(&xml_content).unwrap()
}

#[test_log::test]
fn test_xmile_parse() {
    let doc = read_population();

    assert_eq!(doc.version, "1.0");
    assert_eq!(doc.xmlns.as_deref(), Some(XMILE_NAMESPACE));
    assert_eq!(doc.xmlns_isee.as_deref(), Some(ISEE_NAMESPACE));
    doc.check_version().unwrap();

    let model = doc.root_model().unwrap();
    let views = &model.views.as_ref().unwrap().views;
    assert_eq!(views.len(), 2);
    assert_eq!(views[0].view_type.as_deref(), Some("stock_flow"));
    assert!(views[0].sliders.is_empty());

    let interface = &views[1];
    assert_eq!(interface.view_type.as_deref(), Some("interface"));
    assert_eq!(interface.sliders.len(), 2);

    let birth_rate = interface.slider_for("Birth_Rate").unwrap();
    assert_eq!(birth_rate.uid, Some(2));
    assert_eq!(birth_rate.x, Some(Number::Int(40)));
    assert_eq!(birth_rate.y, Some(Number::Float(60.5)));
    assert_eq!(birth_rate.min, Some(Number::Int(0)));
    assert_eq!(birth_rate.max, Some(Number::Float(0.1)));
    assert_eq!(birth_rate.increment, Some(Number::Float(0.005)));
    assert_eq!(birth_rate.num_ticks, Some(3));
    assert_eq!(birth_rate.input_width, Some(45));
    assert_eq!(birth_rate.show_name, Some(true));
    assert_eq!(birth_rate.input_expands, Some(true));
    assert_eq!(birth_rate.label_side.as_deref(), Some("top"));
    assert_eq!(birth_rate.font_size.as_deref(), Some("12pt"));
    assert_eq!(birth_rate.background.as_deref(), Some("#E0E0E0"));
    assert_eq!(birth_rate.always_show_hover_tip, Some(false));
    assert_eq!(birth_rate.fancy_appearance, Some(true));
    assert_eq!(birth_rate.navigate_to, Some(false));
    assert_eq!(birth_rate.show_hover_tip.as_deref(), Some("when_deciding"));
    assert_eq!(birth_rate.vertical, None);

    let format = birth_rate.format.as_ref().unwrap();
    assert_eq!(format.precision, Some(Number::Float(0.001)));
    assert_eq!(format.scale_by, Some(Number::Int(1)));
    assert_eq!(format.display_kind(), Some(DisplayAs::Number));
    assert_eq!(format.delimit_000s, Some(true));

    let reset_to = birth_rate.reset_to.as_ref().unwrap();
    assert_eq!(reset_to.after_kind(), Some(ResetAfter::OneTime));
    assert_eq!(reset_to.number(), Ok(Some(Number::Float(0.03))));

    let lifetime = interface.slider_for("Lifetime").unwrap();
    assert_eq!(lifetime.vertical, Some(true));
    assert_eq!(lifetime.conditional_entity.as_deref(), Some("Advanced_Mode"));
    assert_eq!(lifetime.format, None);
    assert_eq!(lifetime.reset_to, None);

    let names: Vec<_> = doc.sliders().filter_map(Slider::entity_name).collect();
    assert_eq!(names, ["Birth_Rate", "Lifetime"]);
}

#[test_log::test]
fn test_xmile_roundtrip() {
    let doc = read_population();

    let xml = serialize(&doc, false).unwrap();
    assert!(xml.contains(&format!(r#"xmlns:isee="{ISEE_NAMESPACE}""#)));
    assert!(xml.contains(r#"isee:fancy_appearance="true""#));
    assert!(xml.contains(r#"isee:conditional_entity="Advanced_Mode""#));

    let reparsed: Xmile = deserialize(&xml).unwrap();
    assert_eq!(doc, reparsed);

    // Content outside the bound tree is not written back.
    for tag in ["<header", "<sim_specs", "<variables", "<stock"] {
        assert!(!xml.contains(tag), "{tag} written in {xml}");
    }
}

#[test_log::test]
fn test_slider_in_aggregate() {
    let mut doc = Xmile::new();
    doc.models.push(Model {
        name: None,
        views: Some(Views {
            views: vec![View {
                view_type: Some("interface".to_owned()),
                sliders: vec![Slider {
                    min: Some(Number::Int(5)),
                    max: Some(Number::Float(5.5)),
                    always_show_hover_tip: Some(true),
                    entity: Some(Entity::new("Contact Rate")),
                    ..Default::default()
                }],
                ..Default::default()
            }],
        }),
    });

    let xml = serialize(&doc, false).unwrap();
    assert!(xml.starts_with("<?xml"));
    assert!(xml.contains(&format!(r#"xmlns="{XMILE_NAMESPACE}""#)));
    assert!(xml.contains(r#"<entity name="Contact Rate"/>"#));

    let reparsed: Xmile = deserialize(&xml).unwrap();
    assert_eq!(reparsed, doc);
    let slider = reparsed.sliders().next().unwrap();
    assert_eq!(slider.entity_name(), Some("Contact Rate"));
    assert_eq!(slider.always_show_hover_tip, Some(true));
}

#[test]
#[cfg(feature = "serde")]
fn test_slider_json() {
    let slider = Slider {
        min: Some(Number::Int(5)),
        max: Some(Number::Float(5.5)),
        navigate_to: Some(true),
        entity: Some(Entity::new("Price")),
        ..Default::default()
    };

    let json = serde_json::to_string(&slider).unwrap();
    let parsed: Slider = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, slider);

    let partial: Slider = serde_json::from_str(r#"{"min": 1, "max": 2.5}"#).unwrap();
    assert_eq!(partial.min, Some(Number::Int(1)));
    assert_eq!(partial.max, Some(Number::Float(2.5)));
    assert_eq!(partial.entity, None);
}
