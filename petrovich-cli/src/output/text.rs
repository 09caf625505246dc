//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use petrovich_core::{Case, Declension, NameRequest};
use std::io::Write;

/// Plain text formatter - outputs one form per line
///
/// With all six forms, consecutive names are separated by a blank line.
pub struct TextFormatter<W: Write> {
    writer: W,
    case: Option<Case>,
    written: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, case: Option<Case>) -> Self {
        Self {
            writer,
            case,
            written: 0,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_declension(&mut self, _request: &NameRequest, declension: &Declension) -> Result<()> {
        match self.case {
            Some(case) => writeln!(self.writer, "{}", declension.get(case))?,
            None => {
                if self.written > 0 {
                    writeln!(self.writer)?;
                }
                for (_, form) in declension.iter() {
                    writeln!(self.writer, "{form}")?;
                }
            }
        }
        self.written += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
