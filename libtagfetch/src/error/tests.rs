use super::*;
use std::error::Error;
use std::io;

#[test]
fn test_tool_not_found_message() {
    let err = TagFetchError::tool_not_found("Skopeo");

    assert!(matches!(err, TagFetchError::ToolNotFound { .. }));
    assert_eq!(
        err.to_string(),
        "Skopeo is not installed. Please install Skopeo to use this script."
    );
    assert!(err.source().is_none());
}

#[test]
fn test_tool_not_found_with_source() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "cannot find binary path");
    let err = TagFetchError::tool_not_found_with_source("Skopeo", io_err);

    assert!(err.source().is_some());
    assert!(err.to_string().starts_with("Skopeo is not installed"));
}

#[test]
fn test_config_not_found_message() {
    let err = TagFetchError::config_not_found("config.yaml");
    assert_eq!(err.to_string(), "config.yaml file not found.");
}

#[test]
fn test_config_error_surfaces_detail() {
    let err = TagFetchError::config("missing field `registries`", Some("config.yaml"));

    assert_eq!(
        err.to_string(),
        "Error parsing YAML file: missing field `registries`"
    );
    if let TagFetchError::Config { path, .. } = err {
        assert_eq!(path.as_deref(), Some("config.yaml"));
    } else {
        panic!("expected a configuration error");
    }
}

#[test]
fn test_config_error_with_source() {
    let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let err = TagFetchError::config_with_source("cannot read", None, io_err);

    assert!(err.source().is_some());
    assert!(err.to_string().contains("cannot read"));
}

#[test]
fn test_pattern_error_names_pattern() {
    let regex_err = regex::Regex::new("(unclosed").unwrap_err();
    let err = TagFetchError::pattern("(unclosed", regex_err);

    assert!(err.to_string().contains("'(unclosed'"));
    assert!(err.source().is_some());
}

#[test]
fn test_fetch_error_displays_raw_message() {
    let err = TagFetchError::fetch("Error: manifest unknown", Some(1));

    assert_eq!(err.to_string(), "Error: manifest unknown");
    if let TagFetchError::Fetch { status, .. } = err {
        assert_eq!(status, Some(1));
    } else {
        panic!("expected a fetch error");
    }
}

#[test]
fn test_fetch_error_with_source() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "no such file");
    let err = TagFetchError::fetch_with_source("failed to execute skopeo: no such file", io_err);

    assert!(err.source().is_some());
    assert!(err.to_string().contains("failed to execute skopeo"));
}

#[test]
fn test_io_error() {
    let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe");
    let err = TagFetchError::io("failed to write report", io_err);

    assert_eq!(err.to_string(), "I/O error: failed to write report");
    assert!(err.source().is_some());
    assert!(!err.is_fetch());
}

#[test]
fn test_is_broken_pipe() {
    let closed = io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe");
    assert!(TagFetchError::io("failed to write report", closed).is_broken_pipe());

    let full = io::Error::new(io::ErrorKind::Other, "no space left on device");
    assert!(!TagFetchError::io("failed to write report", full).is_broken_pipe());
    assert!(!TagFetchError::fetch("broken pipe", None).is_broken_pipe());
}

#[test]
fn test_is_fetch() {
    assert!(TagFetchError::fetch("boom", None).is_fetch());
    assert!(!TagFetchError::tool_not_found("skopeo").is_fetch());
    assert!(!TagFetchError::config_not_found("config.yaml").is_fetch());
}

#[test]
fn test_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<TagFetchError>();
}
