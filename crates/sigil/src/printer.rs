//! Terminal signature printer
//!
//! Renders [`AnnotatedText`] to a terminal, with optional ANSI colors keyed
//! off each run's innermost semantic tag. Wrapped parameter blocks indent
//! their lines by two spaces so overlong signatures stay readable in plain
//! text output.

use crate::annotate::{AnnotatedText, Segment, Tag};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::io;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Terminal printer for annotated signatures
pub struct SignaturePrinter<'a> {
    /// Text to print
    text: &'a AnnotatedText,
    /// Whether to use colored output
    use_color: bool,
}

impl<'a> SignaturePrinter<'a> {
    /// Create a new printer
    pub fn new(text: &'a AnnotatedText, use_color: bool) -> Self {
        Self { text, use_color }
    }

    /// Print directly to stdout
    pub fn print_to_stdout(&self) {
        let choice = if self.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        if let Err(e) = self.write_colored(&mut stdout) {
            eprintln!("Error printing signature: {}", e);
        }
    }

    /// Write with colors to a WriteColor implementor
    pub fn write_colored<W: WriteColor>(&self, w: &mut W) -> io::Result<()> {
        for segment in self.text.segments() {
            match segment {
                Segment::Run(run) => {
                    match run.innermost_tag().and_then(Self::color_for) {
                        Some(spec) => {
                            w.set_color(&spec)?;
                            write!(w, "{}", run.text)?;
                            w.reset()?;
                        }
                        None => write!(w, "{}", run.text)?,
                    }
                }
                Segment::LineBreak | Segment::BlockStart => write!(w, "\n  ")?,
                Segment::BlockEnd => writeln!(w)?,
            }
        }
        writeln!(w)
    }

    /// Color for a semantic tag; `None` prints unstyled
    fn color_for(tag: Tag) -> Option<ColorSpec> {
        let mut spec = ColorSpec::new();
        match tag {
            Tag::Keyword => spec.set_fg(Some(Color::Blue)).set_bold(true),
            Tag::Primitive => spec.set_fg(Some(Color::Cyan)),
            Tag::TypeName | Tag::TypeQualifier => spec.set_fg(Some(Color::Green)),
            Tag::FnName => spec.set_fg(Some(Color::Green)).set_bold(true),
            Tag::FnQualifier => spec.set_fg(Some(Color::Green)).set_dimmed(true),
            Tag::TypeParam => spec.set_fg(Some(Color::Yellow)),
            Tag::Param => spec.set_fg(Some(Color::Magenta)),
            Tag::Punctuation => return None,
            _ => return None,
        };
        Some(spec)
    }
}

impl Display for SignaturePrinter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for segment in self.text.segments() {
            match segment {
                Segment::Run(run) => write!(f, "{}", run.text)?,
                Segment::LineBreak | Segment::BlockStart => write!(f, "\n  ")?,
                Segment::BlockEnd => writeln!(f)?,
            }
        }
        Ok(())
    }
}
