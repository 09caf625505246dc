//! JSON output formatter

use super::{Layout, OutputFormatter};
use anyhow::Result;
use petrovich_core::{Case, Declension, Gender, NameKind, NameRequest};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - collects declensions and writes them on `finish`
///
/// A single name is written as an object keyed by case name; a batch as an
/// array of records.
pub struct JsonFormatter<W: Write> {
    writer: W,
    case: Option<Case>,
    layout: Layout,
    entries: Vec<(NameRequest, Declension)>,
}

/// Forms of one name, optionally restricted to one case
pub struct CaseForms<'a> {
    declension: &'a Declension,
    case: Option<Case>,
}

impl Serialize for CaseForms<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for (case, form) in self.declension.iter() {
            if self.case.map_or(true, |only| only == case) {
                map.serialize_entry(case.name(), form)?;
            }
        }
        map.end()
    }
}

/// Data structure for batch JSON output
#[derive(Serialize)]
pub struct DeclensionRecord<'a> {
    pub kind: NameKind,
    pub gender: Gender,
    pub name: &'a str,
    pub forms: CaseForms<'a>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, case: Option<Case>, layout: Layout) -> Self {
        Self {
            writer,
            case,
            layout,
            entries: Vec::new(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_declension(&mut self, request: &NameRequest, declension: &Declension) -> Result<()> {
        self.entries.push((request.clone(), declension.clone()));
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        let case = self.case;
        match self.layout {
            Layout::Single => {
                for (_, declension) in &self.entries {
                    serde_json::to_writer_pretty(&mut self.writer, &CaseForms { declension, case })?;
                    writeln!(self.writer)?;
                }
            }
            Layout::Batch => {
                let records: Vec<DeclensionRecord<'_>> = self
                    .entries
                    .iter()
                    .map(|(request, declension)| DeclensionRecord {
                        kind: request.kind,
                        gender: request.gender,
                        name: &request.name,
                        forms: CaseForms { declension, case },
                    })
                    .collect();
                serde_json::to_writer_pretty(&mut self.writer, &records)?;
                writeln!(self.writer)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}
