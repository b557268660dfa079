use xmile_schema::traits::XmileDocument;

#[test]
fn test_minimal() -> Result<(), Box<dyn std::error::Error>> {
    let test_file = std::env::current_dir().map(|path| path.join("tests/Population.xmile"))?;
    let data = std::fs::read_to_string(test_file)?;
    let doc = xmile_schema::minimal::MinXmile::deserialize(&data)?;
    assert_eq!(doc.version, "1.0");
    assert_eq!(doc.version()?, semver::Version::new(1, 0, 0));
    doc.check_version()?;

    Ok(())
}

#[test]
fn test_unsupported_version() {
    let doc = xmile_schema::minimal::MinXmile::deserialize(r#"<xmile version="2.1"/>"#).unwrap();
    assert_eq!(
        doc.check_version(),
        Err(xmile_schema::Error::UnsupportedVersion("2.1".to_owned()))
    );

    let doc = xmile_schema::minimal::MinXmile::deserialize(r#"<xmile version="one"/>"#).unwrap();
    assert!(matches!(
        doc.version(),
        Err(xmile_schema::Error::Semver(_))
    ));
}

#[test]
fn test_missing_version() {
    let result = xmile_schema::minimal::MinXmile::deserialize("<xmile><model/></xmile>");
    assert!(matches!(result, Err(xmile_schema::Error::XmlParse(_))));
}
