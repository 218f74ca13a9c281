use super::*;

fn output(reporter: ConsoleReporter<Vec<u8>>) -> String {
    String::from_utf8(reporter.into_inner()).unwrap()
}

#[test]
fn test_color_choice_from_string() {
    assert_eq!(ColorChoice::from("always"), ColorChoice::Always);
    assert_eq!(ColorChoice::from("NEVER"), ColorChoice::Never);
    assert_eq!(ColorChoice::from("auto"), ColorChoice::Auto);
    assert_eq!(ColorChoice::from("invalid"), ColorChoice::Auto);
}

#[test]
fn test_should_color_explicit_choices() {
    assert!(should_color(ColorChoice::Always));
    assert!(!should_color(ColorChoice::Never));
}

#[test]
fn test_plain_output_matches_library_reporter() {
    let tags = vec!["1.10.0".to_string(), "1.9.0".to_string()];
    let err = TagFetchError::fetch("Error: unauthorized", Some(1));

    let mut console = ConsoleReporter::new(Vec::new(), false);
    let mut plain = libtagfetch::PlainReporter::new(Vec::new());
    for reporter in [&mut console as &mut dyn Reporter, &mut plain] {
        reporter.fetching("quay.io", "app").unwrap();
        reporter.latest("app", 2, &tags).unwrap();
        reporter.fetching("quay.io", "db").unwrap();
        reporter.fetch_failed("quay.io", "db", &err).unwrap();
        reporter.fetching("quay.io", "web").unwrap();
        reporter.no_tags("quay.io", "web").unwrap();
    }

    assert_eq!(
        output(console),
        String::from_utf8(plain.into_inner()).unwrap()
    );
}

#[test]
fn test_plain_output_has_no_escape_codes() {
    let mut reporter = ConsoleReporter::new(Vec::new(), false);
    reporter.latest("app", 1, &["1.0".to_string()]).unwrap();
    assert_eq!(output(reporter), "Latest 1 tags for app:\n1.0\n\n");
}

#[test]
fn test_colored_header_keeps_text() {
    let mut reporter = ConsoleReporter::new(Vec::new(), true);
    reporter.latest("app", 1, &["1.0".to_string()]).unwrap();

    let text = output(reporter);
    assert!(text.contains("\u{1b}["));
    assert!(text.contains("Latest 1 tags for app:"));
    // Tags themselves stay uncolored
    assert!(text.contains("\n1.0\n\n"));
}

#[test]
fn test_colored_error_line() {
    let mut reporter = ConsoleReporter::new(Vec::new(), true);
    let err = TagFetchError::fetch("denied", Some(1));
    reporter.fetch_failed("r", "a", &err).unwrap();

    let text = output(reporter);
    assert!(text.contains("\u{1b}["));
    assert!(text.contains("Error fetching tags for a from r: denied"));
}

/// A stdout whose reader has gone away.
struct ClosedPipe;

impl Write for ClosedPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
}

#[test]
fn test_write_fatal_prints_one_line() {
    let mut out = Vec::new();
    let err = TagFetchError::config_not_found("config.yaml");
    write_fatal(&mut out, &err).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "config.yaml file not found.\n");
}

#[test]
fn test_write_fatal_to_closed_pipe_returns_error() {
    let err = TagFetchError::config_not_found("config.yaml");
    let result = write_fatal(&mut ClosedPipe, &err);
    assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
}
