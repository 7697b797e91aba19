use std::time::Duration;

use chrono::Utc;
use status_rail::{Code, StatusError, TransientError, TransientErrorExt};

#[test]
fn temporary_codes_are_transient() {
    for code in [Code::Unavailable, Code::ResourceExhausted, Code::Aborted, Code::DeadlineExceeded] {
        let err = StatusError::builder("svc", "TEMPORARY").code(code).build();
        assert!(err.is_transient(), "{code}");
    }

    for code in [Code::NotFound, Code::InvalidArgument, Code::PermissionDenied, Code::Internal] {
        let err = StatusError::builder("svc", "PERMANENT").code(code).build();
        assert!(err.is_permanent(), "{code}");
        assert_eq!(err.retry_after_hint(), None);
    }
}

#[test]
fn retry_guidance_makes_any_error_transient() {
    let err = StatusError::builder("svc", "TRY_LATER")
        .code(Code::FailedPrecondition)
        .retry_offset(Duration::from_secs(5))
        .build();

    assert!(err.is_transient());
    assert_eq!(err.retry_after_hint(), Some(Duration::from_secs(5)));
}

#[test]
fn retry_time_hint_never_goes_negative() {
    let past = Utc::now() - chrono::Duration::seconds(30);
    let err = StatusError::builder("svc", "TRY_LATER").retry_time(past).build();
    assert_eq!(err.retry_after_hint(), Some(Duration::ZERO));

    let future = Utc::now() + chrono::Duration::seconds(300);
    let err = StatusError::builder("svc", "TRY_LATER").retry_time(future).build();
    let hint = err.retry_after_hint().unwrap_or_default();
    assert!(hint > Duration::from_secs(290) && hint <= Duration::from_secs(300));
}

#[test]
fn retry_if_transient_on_status_results() {
    let ok: Result<i32, StatusError> = Ok(1);
    assert!(ok.retry_if_transient().is_none());

    let busy: Result<i32, StatusError> =
        Err(StatusError::builder("db", "BUSY").code(Code::Unavailable).build());
    assert!(busy.retry_if_transient().is_some());

    let denied: Result<i32, StatusError> =
        Err(StatusError::builder("db", "DENIED").code(Code::PermissionDenied).build());
    assert!(denied.retry_if_transient().is_none());
}

#[test]
fn custom_errors_only_need_the_classification() {
    #[derive(Debug)]
    struct Busy;

    impl TransientError for Busy {
        fn is_transient(&self) -> bool {
            true
        }
    }

    assert!(!Busy.is_permanent());
    assert_eq!(Busy.retry_after_hint(), None);

    let result: Result<(), Busy> = Err(Busy);
    assert!(result.retry_if_transient().is_some());
}
