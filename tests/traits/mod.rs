use status_rail::traits::ErrorIdentity;
use status_rail::{ErrorTemplate, StatusError};

pub mod transient;

struct Exemplar {
    domain: &'static str,
    reason: &'static str,
}

impl ErrorIdentity for Exemplar {
    fn domain(&self) -> &str {
        self.domain
    }

    fn reason(&self) -> &str {
        self.reason
    }
}

#[test]
fn custom_identities_compare_against_errors_and_templates() {
    let exemplar = Exemplar { domain: "shopify.users", reason: "NOT_FOUND" };
    let err = StatusError::new("shopify.users", "NOT_FOUND");
    let template = ErrorTemplate::new("shopify.users", "NOT_FOUND");

    assert!(exemplar.same_identity(&err));
    assert!(exemplar.same_identity(&template));
    assert!(exemplar.matches(&err));
    assert!(!exemplar.matches(&std::io::Error::other("NOT_FOUND")));
    assert!(err.is_same_kind(&exemplar));
}

#[test]
fn identity_ignores_everything_but_domain_and_reason() {
    let a = StatusError::builder("shopify.users", "NOT_FOUND")
        .code(status_rail::Code::NotFound)
        .message("a")
        .id("1")
        .build();
    let b = StatusError::builder("shopify.users", "NOT_FOUND")
        .code(status_rail::Code::Internal)
        .message("b")
        .id("2")
        .build();

    assert!(a.same_identity(&b));
    assert!(!a.same_identity(&StatusError::new("shopify.Users", "NOT_FOUND")));
}
