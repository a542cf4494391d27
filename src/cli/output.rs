//! Terminal output for the CLI.
//!
//! Detail, success and section lines go to stdout and are muted by `--quiet`.
//! Errors go to stderr and the final report goes to stdout unconditionally.
//! Colour is used only when the target stream is a terminal.

use cyrup_termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};
use std::io::{self, IsTerminal, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Verbose,
    Success,
    Section,
}

impl Kind {
    fn style(self) -> Option<ColorSpec> {
        let mut spec = ColorSpec::new();
        match self {
            Kind::Verbose => return None,
            Kind::Success => spec.set_fg(Some(Color::Green)).set_bold(true),
            Kind::Section => spec.set_fg(Some(Color::Cyan)).set_bold(true),
        };
        Some(spec)
    }
}

/// Output manager for colored terminal output, honoring verbose and quiet modes.
#[derive(Debug, Clone)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print a detail line when verbose and not quiet.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        self.emit(Kind::Verbose, message)
    }

    /// Print a success line.
    pub fn success(&self, message: &str) -> io::Result<()> {
        self.emit(Kind::Success, message)
    }

    /// Print a section header.
    pub fn section(&self, title: &str) -> io::Result<()> {
        self.emit(Kind::Section, title)
    }

    /// Print an error to stderr, even in quiet mode.
    pub fn error(&self, message: &str) -> io::Result<()> {
        let mut err = StandardStream::stderr(color_choice(io::stderr().is_terminal()));
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red));
        write_line(&mut err, Some(&spec), message)
    }

    /// Print a result line to stdout, even in quiet mode.
    pub fn report(&self, message: &str) -> io::Result<()> {
        let mut out = StandardStream::stdout(ColorChoice::Never);
        write_line(&mut out, None, message)?;
        out.flush()
    }

    fn emit(&self, kind: Kind, message: &str) -> io::Result<()> {
        let Some(line) = self.render(kind, message) else {
            return Ok(());
        };
        let mut out = StandardStream::stdout(color_choice(io::stdout().is_terminal()));
        write_line(&mut out, kind.style().as_ref(), &line)
    }

    fn render(&self, kind: Kind, message: &str) -> Option<String> {
        if self.quiet || (kind == Kind::Verbose && !self.verbose) {
            return None;
        }
        Some(match kind {
            Kind::Verbose => message.to_string(),
            Kind::Success => format!("✓ {message}"),
            Kind::Section => format!("\n{message}\n{}", "─".repeat(message.chars().count())),
        })
    }
}

fn color_choice(is_terminal: bool) -> ColorChoice {
    if is_terminal {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

fn write_line<W: WriteColor>(out: &mut W, style: Option<&ColorSpec>, text: &str) -> io::Result<()> {
    match style {
        Some(spec) => {
            out.set_color(spec)?;
            write!(out, "{text}")?;
            out.reset()?;
            writeln!(out)
        }
        None => writeln!(out, "{text}"),
    }
}
