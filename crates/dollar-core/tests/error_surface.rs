use dollar_core::codes;
use dollar_core::errors::{graph_error, sample_error, DollarError, ErrorInfo};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("id", "1")
        .with_context("reason", "example")
}

#[test]
fn graph_error_surface() {
    let err = DollarError::Graph(sample_info(codes::DUPLICATE_ID, "node id already in use"));
    assert_eq!(err.info().code, "duplicate-id");
    assert!(err.info().context.contains_key("id"));
    assert!(err.is(codes::DUPLICATE_ID));
}

#[test]
fn sample_error_surface() {
    let err = sample_error(codes::CAPACITY_EXCEEDED, "too many slots").with_context("slots", 33);
    assert!(matches!(&err, DollarError::Sample(_)));
    assert_eq!(err.code(), "capacity-exceeded");
    assert_eq!(err.info().context.get("slots"), Some(&"33".to_string()));
}

#[test]
fn game_and_config_error_surface() {
    let game = DollarError::Game(sample_info(codes::UNKNOWN_NODE, "no such node"));
    assert_eq!(game.code(), codes::UNKNOWN_NODE);
    let config = DollarError::Config(sample_info(codes::INVALID_CONFIG, "floor above ceiling"));
    assert!(config.info().context.contains_key("reason"));
}

#[test]
fn display_includes_context_and_hint() {
    let err = graph_error(codes::NOT_CONNECTED, "genus requires a connected graph")
        .with_context("nodes", 4)
        .with_hint("connect every node first");
    let rendered = err.to_string();
    assert!(rendered.starts_with("graph error: genus requires a connected graph"));
    assert!(rendered.contains("code: not-connected"));
    assert!(rendered.contains("nodes=4"));
    assert!(rendered.contains("hint: connect every node first"));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = sample_error(codes::NO_SOLUTION, "no sequence sums to target");
    let json = serde_json::to_value(&err).expect("serialize");
    assert_eq!(json["family"], "Sample");
    assert_eq!(json["detail"]["code"], "no-solution");
    let decoded: DollarError = serde_json::from_value(json).expect("deserialize");
    assert_eq!(decoded, err);
}
