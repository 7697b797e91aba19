use status_rail::{Code, Help, MetadataValue, StackFrame, Visibility};

#[test]
fn enums_use_canonical_names() {
    assert_eq!(serde_json::to_string(&Code::ResourceExhausted).unwrap(), "\"RESOURCE_EXHAUSTED\"");
    assert_eq!(serde_json::to_string(&Visibility::Public).unwrap(), "\"PUBLIC\"");
    assert_eq!(serde_json::from_str::<Code>("\"NOT_FOUND\"").unwrap(), Code::NotFound);
}

#[test]
fn field_types_deserialize_from_json() {
    let value: MetadataValue =
        serde_json::from_str(r#"{"value":"42","visibility":"PRIVATE"}"#).unwrap();
    assert_eq!(value, MetadataValue::private("42"));

    let help: Help = serde_json::from_str(
        r#"{"links":[{"description":"Status","url":"https://status.example.com"}]}"#,
    )
    .unwrap();
    assert_eq!(help.links()[0].url(), "https://status.example.com");

    let frame = StackFrame::new("app::main", "src/main.rs", 3);
    let json = serde_json::to_string(&frame).unwrap();
    assert_eq!(serde_json::from_str::<StackFrame>(&json).unwrap(), frame);
}
