use status_rail::{Code, StatusError, Visibility, SPEC_VERSION};

pub mod code;
pub mod debug_info;

#[test]
fn new_error_starts_from_defaults() {
    let err = StatusError::new("shopify.core", "SYSTEM_ERROR");

    assert_eq!(err.spec_version(), SPEC_VERSION);
    assert_eq!(err.code(), Code::Unknown);
    assert_eq!(err.message(), "unknown error");
    assert_eq!(err.visibility(), Visibility::Internal);
    assert!(err.metadata().is_empty());
    assert!(err.causes().is_empty());
    assert!(err.help().is_none());
    assert!(err.debug_info().is_none());
    assert!(err.retry_info().is_none());
    assert!(err.wrapped().is_none());
}

#[test]
fn visibility_orders_from_internal_to_public() {
    assert!(Visibility::Internal < Visibility::Private);
    assert!(Visibility::Private < Visibility::Public);

    assert!(Visibility::Public.is_visible_to(Visibility::Internal));
    assert!(Visibility::Private.is_visible_to(Visibility::Private));
    assert!(!Visibility::Internal.is_visible_to(Visibility::Public));
}

#[test]
fn visibility_parses_canonical_names() {
    assert_eq!("PUBLIC".parse::<Visibility>(), Ok(Visibility::Public));
    assert_eq!(Visibility::Private.to_string(), "PRIVATE");

    let err = "public".parse::<Visibility>().unwrap_err();
    assert_eq!(err.kind(), "visibility");
    assert_eq!(err.input(), "public");
}
