use libtagfetch::report::{self, Reporter};
use libtagfetch::TagFetchError;
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};

/// Color choice for console output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl From<&str> for ColorChoice {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "always" => ColorChoice::Always,
            "never" => ColorChoice::Never,
            _ => ColorChoice::Auto,
        }
    }
}

/// Check if we should use colors in output
pub fn should_color(choice: ColorChoice) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => {
            std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
        }
    }
}

/// Reporter for the console
///
/// Prints the same lines as [`libtagfetch::PlainReporter`]; when color is
/// enabled the header is bold, failures are red and empty images yellow.
pub struct ConsoleReporter<W> {
    out: W,
    color: bool,
}

impl ConsoleReporter<io::Stdout> {
    /// Reporter writing to stdout
    pub fn stdout(choice: ColorChoice) -> Self {
        Self::new(io::stdout(), should_color(choice))
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn fetching(&mut self, registry: &str, image: &str) -> io::Result<()> {
        let line = report::fetching_line(registry, image);
        if self.color {
            writeln!(self.out, "{}", line.dimmed())?;
        } else {
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }

    fn fetch_failed(
        &mut self,
        registry: &str,
        image: &str,
        error: &TagFetchError,
    ) -> io::Result<()> {
        let line = report::error_line(registry, image, error);
        if self.color {
            writeln!(self.out, "{}", line.red())
        } else {
            writeln!(self.out, "{}", line)
        }
    }

    fn no_tags(&mut self, registry: &str, image: &str) -> io::Result<()> {
        let line = report::no_tags_line(registry, image);
        if self.color {
            writeln!(self.out, "{}", line.yellow())
        } else {
            writeln!(self.out, "{}", line)
        }
    }

    fn latest(&mut self, image: &str, max: usize, tags: &[String]) -> io::Result<()> {
        let header = report::latest_header(image, max);
        if self.color {
            writeln!(self.out, "{}", header.bold())?;
        } else {
            writeln!(self.out, "{}", header)?;
        }
        for tag in tags {
            writeln!(self.out, "{}", tag)?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Print the single diagnostic line of a fatal error
///
/// Nothing more can be reported when stdout is gone, so write failures are
/// ignored.
pub fn fatal(err: &TagFetchError) {
    let _ = write_fatal(&mut io::stdout(), err);
}

fn write_fatal<W: Write>(out: &mut W, err: &TagFetchError) -> io::Result<()> {
    writeln!(out, "{}", err)?;
    out.flush()
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
