use super::*;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_empty_filter_keeps_everything() {
    let filter = TagFilter::new::<&str>(&[]).unwrap();
    assert!(filter.is_empty());
    assert_eq!(
        filter.apply(tags(&["1.0", "latest"])),
        tags(&["1.0", "latest"])
    );
}

#[test]
fn test_default_filter_is_empty() {
    assert!(TagFilter::default().is_empty());
}

#[test]
fn test_unanchored_match() {
    let filter = TagFilter::new(&["rc"]).unwrap();
    assert!(filter.is_excluded("1.0-rc1"));
    assert!(filter.is_excluded("rc"));
    assert!(!filter.is_excluded("1.0"));
}

#[test]
fn test_anchored_match() {
    let filter = TagFilter::new(&["^sha-", "-debug$"]).unwrap();
    assert!(filter.is_excluded("sha-abc123"));
    assert!(!filter.is_excluded("1.0-sha-abc"));
    assert!(filter.is_excluded("1.0-debug"));
    assert!(!filter.is_excluded("1.0-debug-slim"));
}

#[test]
fn test_apply_preserves_order() {
    let filter = TagFilter::new(&["-rc", "latest"]).unwrap();
    let kept = filter.apply(tags(&["2.0", "2.1-rc1", "latest", "1.9", "3.0-rc2", "1.10"]));
    assert_eq!(kept, tags(&["2.0", "1.9", "1.10"]));
}

#[test]
fn test_apply_can_remove_all() {
    let filter = TagFilter::new(&[".*"]).unwrap();
    assert!(filter.apply(tags(&["1.0", "2.0"])).is_empty());
}

#[test]
fn test_owned_patterns() {
    let patterns = vec!["alpine$".to_string()];
    let filter = TagFilter::new(patterns.as_slice()).unwrap();
    assert!(filter.is_excluded("3.18-alpine"));
}

#[test]
fn test_invalid_pattern() {
    let err = TagFilter::new(&["1.0", "(unclosed"]).unwrap_err();
    match err {
        TagFetchError::Pattern { pattern, .. } => assert_eq!(pattern, "(unclosed"),
        other => panic!("expected a pattern error, got {:?}", other),
    }
}
