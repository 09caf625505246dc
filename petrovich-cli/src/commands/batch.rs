//! Batch command implementation

use super::{CaseArg, LoggingArgs};
use crate::error::CliError;
use crate::output::{self, Layout, OutputFormat};
use crate::rules_source::RulesSource;
use anyhow::{Context, Result};
use clap::Args;
use petrovich_core::{Gender, NameKind, NameRequest, Petrovich};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Arguments for the batch command
#[derive(Debug, Args)]
pub struct BatchArgs {
    /// Input file with one `KIND GENDER NAME` entry per line (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Print only this case
    #[arg(short, long, value_enum)]
    pub case: Option<CaseArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// External rule file (default: built-in Russian rules)
    #[arg(short, long, value_name = "FILE", env = "PETROVICH_RULES")]
    pub rules: Option<PathBuf>,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

impl BatchArgs {
    /// Execute the batch command
    pub fn execute(&self) -> Result<()> {
        self.logging.init_logging()?;
        log::debug!("Arguments: {:?}", self);

        let requests = match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("Failed to open {}", path.display()))?;
                parse_requests(BufReader::new(file))?
            }
            None => parse_requests(io::stdin().lock())?,
        };
        log::info!("Read {} names", requests.len());

        let petrovich = Petrovich::new(RulesSource::from_option(self.rules.clone()).load()?);
        let declensions = petrovich.decline_batch(&requests);

        let mut formatter =
            output::stdout_formatter(self.format, self.case.map(Into::into), Layout::Batch);
        for (request, declension) in requests.iter().zip(&declensions) {
            formatter.format_declension(request, declension)?;
        }
        formatter.finish()
    }
}

/// Read every request from `reader`, stopping at the first malformed line
///
/// Blank lines and lines starting with `#` are skipped.
pub fn parse_requests<R: BufRead>(reader: R) -> Result<Vec<NameRequest>> {
    let mut requests = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read line {}", i + 1))?;
        if let Some(request) = parse_line(i + 1, &line)? {
            requests.push(request);
        }
    }
    Ok(requests)
}

/// Parse `KIND GENDER NAME`; the name is a single token
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<NameRequest>, CliError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let invalid = |reason: String| CliError::InvalidInput {
        line: line_no,
        reason,
    };

    let mut fields = line.split_whitespace();
    let (Some(kind), Some(gender), Some(name)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(invalid("expected KIND GENDER NAME".to_string()));
    };
    if fields.next().is_some() {
        return Err(invalid(format!(
            "name must be a single word; join compound names with '-' (got '{}')",
            line.splitn(3, char::is_whitespace).nth(2).unwrap_or_default().trim()
        )));
    }

    let kind: NameKind = kind.parse().map_err(|e| invalid(format!("{e}")))?;
    let gender: Gender = gender.parse().map_err(|e| invalid(format!("{e}")))?;
    Ok(Some(NameRequest::new(kind, gender, name)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_line() {
        let request = parse_line(1, "last male Бонч-Бруевич").unwrap().unwrap();
        assert_eq!(
            request,
            NameRequest::new(NameKind::Last, Gender::Male, "Бонч-Бруевич")
        );

        let request = parse_line(1, "  first\tfemale   Анна-Мария ").unwrap().unwrap();
        assert_eq!(request.name, "Анна-Мария");
    }

    #[test]
    fn test_parse_line_rejects_name_with_spaces() {
        match parse_line(4, "first female Анна Мария") {
            Err(CliError::InvalidInput { line, reason }) => {
                assert_eq!(line, 4);
                assert!(reason.contains("single word"));
                assert!(reason.contains("Анна Мария"));
            }
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_line_skips_blank_and_comments() {
        assert!(parse_line(1, "").unwrap().is_none());
        assert!(parse_line(2, "   ").unwrap().is_none());
        assert!(parse_line(3, "# kind gender name").unwrap().is_none());
    }

    #[test]
    fn test_parse_line_errors() {
        match parse_line(7, "first neuter Саша") {
            Err(CliError::InvalidInput { line, reason }) => {
                assert_eq!(line, 7);
                assert_eq!(reason, "Invalid gender: neuter");
            }
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
        assert!(parse_line(1, "first male").is_err());
        assert!(parse_line(1, "nickname male Саша").is_err());
    }

    #[test]
    fn test_parse_requests() {
        let input = "# names\nfirst male Николай\n\nmiddle male Петрович\nlast male Воронин\n";
        let requests = parse_requests(Cursor::new(input)).unwrap();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[1].kind, NameKind::Middle);
    }

    #[test]
    fn test_parse_requests_reports_line_number() {
        let input = "first male Николай\nfirst\n";
        let err = parse_requests(Cursor::new(input)).unwrap_err();
        assert!(err.to_string().starts_with("Line 2:"));
    }
}
