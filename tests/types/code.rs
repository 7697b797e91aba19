use status_rail::Code;

#[test]
fn discriminants_are_fixed() {
    assert_eq!(Code::Cancelled.as_i32(), 1);
    assert_eq!(Code::Unknown.as_i32(), 2);
    assert_eq!(Code::Unavailable.as_i32(), 14);
    assert_eq!(Code::Unauthenticated.as_i32(), 16);

    for (index, code) in Code::ALL.iter().enumerate() {
        assert_eq!(code.as_i32(), index as i32 + 1);
        assert_eq!(Code::from_i32(code.as_i32()), *code);
    }
}

#[test]
fn out_of_range_values_fall_back_to_unknown() {
    assert_eq!(Code::from_i32(0), Code::Unknown);
    assert_eq!(Code::from_i32(17), Code::Unknown);
    assert_eq!(Code::from(-3), Code::Unknown);
}

#[test]
fn status_table_matches_transport_mapping() {
    let expected = [
        (Code::Cancelled, 499),
        (Code::Unknown, 500),
        (Code::InvalidArgument, 400),
        (Code::DeadlineExceeded, 504),
        (Code::NotFound, 404),
        (Code::AlreadyExists, 409),
        (Code::PermissionDenied, 403),
        (Code::ResourceExhausted, 429),
        (Code::FailedPrecondition, 400),
        (Code::Aborted, 409),
        (Code::OutOfRange, 400),
        (Code::Unimplemented, 501),
        (Code::Internal, 500),
        (Code::Unavailable, 503),
        (Code::DataLoss, 500),
        (Code::Unauthenticated, 401),
    ];

    for (code, status) in expected {
        assert_eq!(code.http_status(), status, "{code}");
    }
}

#[test]
fn default_messages_and_names() {
    assert_eq!(Code::Cancelled.message(), "the operation was cancelled");
    assert_eq!(Code::InvalidArgument.message(), "invalid argument provided");
    assert_eq!(Code::Unimplemented.message(), "not implemented");
    assert_eq!(Code::DataLoss.message(), "data loss or corruption");

    assert_eq!(Code::FailedPrecondition.as_str(), "FAILED_PRECONDITION");
    assert_eq!(Code::DeadlineExceeded.to_string(), "DEADLINE_EXCEEDED");
}

#[test]
fn parses_every_canonical_name() {
    for code in Code::ALL {
        assert_eq!(code.as_str().parse::<Code>(), Ok(code));
    }

    let err = "NOT_A_CODE".parse::<Code>().unwrap_err();
    assert_eq!(err.kind(), "code");
    assert_eq!(err.to_string(), "unrecognized code name: \"NOT_A_CODE\"");
}
