use status_rail::{DebugInfo, StackFrame, StatusError, DEFAULT_STACK_DEPTH};

#[test]
fn stack_trace_starts_at_the_calling_function() {
    let err = StatusError::builder("shopify.debugging", "STACK").stack_trace().build();
    let frames = err.debug_info().map(DebugInfo::stack_frames).unwrap_or_default();

    assert!(!frames.is_empty());
    assert!(frames.len() <= DEFAULT_STACK_DEPTH);
    assert!(
        frames[0].function().contains("stack_trace_starts_at_the_calling_function"),
        "{:?}",
        frames[0]
    );
    assert!(frames.iter().all(|f| !f.function().starts_with("status_rail::")));
}

#[test]
fn stack_trace_depth_limits_frame_count() {
    let err = StatusError::builder("shopify.debugging", "STACK").stack_trace_depth(2).build();
    let frames = err.debug_info().map(DebugInfo::frames).unwrap_or_default();

    assert!(!frames.is_empty() && frames.len() <= 2);
}

#[inline(never)]
fn nested(depth: u32) -> StatusError {
    if depth == 0 {
        return StatusError::builder("shopify.debugging", "DEEP").stack_trace_depth(2).build();
    }
    std::hint::black_box(nested(depth - 1))
}

#[test]
fn shallow_capture_from_deep_recursion_keeps_innermost_frames() {
    let err = nested(200);
    let frames = err.debug_info().map(DebugInfo::frames).unwrap_or_default();

    assert_eq!(frames.len(), 2);
    assert!(frames[0].function().contains("nested"), "{:?}", frames[0]);
    assert!(!frames[0].file().is_empty(), "{:?}", frames[0]);
    assert!(frames[0].line() > 0, "{:?}", frames[0]);
}

#[test]
fn zero_depth_uses_the_default() {
    let err = StatusError::builder("shopify.debugging", "STACK").stack_trace_depth(0).build();
    let frames = err.debug_info().map(DebugInfo::frames).unwrap_or_default();

    assert!(!frames.is_empty() && frames.len() <= DEFAULT_STACK_DEPTH);
}

#[test]
fn detail_and_frames_are_set_independently() {
    let err = StatusError::builder("shopify.debugging", "STACK")
        .debug_detail("pool exhausted")
        .stack_trace_depth(4)
        .build();
    let debug = err.debug_info().unwrap();
    assert_eq!(debug.detail(), "pool exhausted");
    assert!(!debug.frames().is_empty());

    let err = StatusError::builder("shopify.debugging", "STACK")
        .stack_trace_depth(4)
        .debug_detail("pool exhausted")
        .build();
    let debug = err.debug_info().unwrap();
    assert_eq!(debug.detail(), "pool exhausted");
    assert!(!debug.frames().is_empty());
}

#[test]
fn stack_frames_returns_an_independent_copy() {
    let info = DebugInfo::new(vec![StackFrame::new("app::main", "src/main.rs", 3)], "");
    let mut copy = info.stack_frames();
    copy.clear();

    assert_eq!(info.frames().len(), 1);
    assert_eq!(info.stack_entries(), vec!["src/main.rs:3 app::main".to_owned()]);
}

#[test]
fn empty_debug_info_has_empty_collections() {
    let info = DebugInfo::with_detail("only detail");

    assert!(info.stack_frames().is_empty());
    assert!(info.stack_entries().is_empty());

    let err = StatusError::builder("svc", "DEBUG").debug_info(info).build();
    assert!(err.to_string().ends_with("\n\nonly detail"));
}
