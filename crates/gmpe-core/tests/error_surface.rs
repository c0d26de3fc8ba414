use gmpe_core::errors::{ErrorInfo, GmpeError};
use gmpe_core::{FaultType, Period};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("period", "0.20")
        .with_context("reason", "example")
}

#[test]
fn period_error_surface() {
    let err = GmpeError::Period(sample_info("period-not-found", "no coefficients"));
    assert_eq!(err.code(), "period-not-found");
    assert!(err.info().context.contains_key("period"));
}

#[test]
fn input_error_surface() {
    let err = GmpeError::Input(sample_info("non-positive-distance", "distance must be positive"));
    assert_eq!(err.info().code, "non-positive-distance");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn shape_error_surface() {
    let err = GmpeError::Shape(sample_info("broadcast-mismatch", "shapes differ"));
    assert_eq!(err.code(), "broadcast-mismatch");
}

#[test]
fn display_includes_context_and_hint() {
    let err = GmpeError::Config(
        ErrorInfo::new("empty-periods", "plan lists no periods")
            .with_context("plan", "smoke")
            .with_hint("add at least one period"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("config error: plan lists no periods (code: empty-periods)"));
    assert!(rendered.contains("plan=smoke"));
    assert!(rendered.contains("hint: add at least one period"));
}

#[test]
fn errors_round_trip_json() {
    let err = GmpeError::Serde(sample_info("json_deserialize", "bad payload"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Serde\""));
    let decoded: GmpeError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}

#[test]
fn invalid_fault_code_is_an_input_error() {
    let err = FaultType::from_code(7).unwrap_err();
    assert!(matches!(err, GmpeError::Input(_)));
    assert_eq!(err.code(), "invalid-fault-type");
    assert_eq!(err.info().context.get("code").map(String::as_str), Some("7"));
    assert!(err.info().hint.is_some());
}

#[test]
fn malformed_period_is_a_period_error() {
    let err = "0.2s".parse::<Period>().unwrap_err();
    assert!(matches!(err, GmpeError::Period(_)));
    assert_eq!(err.code(), "period-parse");
}
