use std::error::Error;
use std::fmt;

use status_rail::{chain, ErrorTemplate, StatusError};

#[derive(Debug)]
struct Context {
    message: &'static str,
    source: Box<dyn Error + Send + Sync>,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl Error for Context {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}

fn wrap(message: &'static str, source: impl Error + Send + Sync + 'static) -> Context {
    Context { message, source: Box::new(source) }
}

#[test]
fn find_through_arbitrary_wrapping_depth() {
    let not_found = ErrorTemplate::new("shopify.users", "NOT_FOUND");
    let err = wrap("handler", wrap("service", wrap("repository", not_found.new_error())));

    let found = chain::find(&err, &not_found);
    assert_eq!(found.map(StatusError::domain), Some("shopify.users"));
    assert!(chain::is(&err, &not_found));
}

#[test]
fn find_fails_on_identity_mismatch_of_the_same_type() {
    let err = wrap("handler", StatusError::new("shopify.users", "NOT_FOUND"));

    assert!(chain::find(&err, &ErrorTemplate::new("shopify.users", "GONE")).is_none());
    assert!(chain::find(&err, &ErrorTemplate::new("shopify.orders", "NOT_FOUND")).is_none());
}

#[test]
fn find_fails_on_foreign_error_types() {
    let err = wrap("handler", std::io::Error::other("NOT_FOUND"));

    assert!(!chain::is(&err, &ErrorTemplate::new("shopify.users", "NOT_FOUND")));
}

#[test]
fn find_returns_the_first_match_outermost_first() {
    let inner = StatusError::builder("db", "TIMEOUT").id("inner").build();
    let outer = StatusError::builder("db", "TIMEOUT").id("outer").wrap(inner).build();

    let exemplar = StatusError::new("db", "TIMEOUT");
    assert_eq!(chain::find(&outer, &exemplar).and_then(StatusError::id), Some("outer"));
}

#[test]
fn iter_yields_every_layer() {
    let err = wrap("handler", wrap("service", StatusError::new("db", "TIMEOUT")));

    let layers: Vec<_> = chain::iter(&err).collect();
    assert_eq!(layers.len(), 3);
    assert_eq!(layers[0].to_string(), "handler");
    assert_eq!(layers[1].to_string(), "service");
    assert!(layers[2].is::<StatusError>());
}
