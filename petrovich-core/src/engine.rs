//! Declension engine
//!
//! [`Petrovich`] owns a shared handle to an immutable [`RuleTable`]; cloning
//! it is cheap and every method takes `&self`, so one engine can serve any
//! number of threads.

use crate::codepoint;
use crate::declension::Declension;
use crate::error::Result;
use crate::matcher::{MatchResult, Matcher};
use crate::rules::RuleTable;
use crate::types::{Case, Gender, NameKind, CASE_COUNT};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Separator between the parts of a compound name
pub const PART_SEPARATOR: char = '-';

/// One name to decline in a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameRequest {
    pub kind: NameKind,
    pub gender: Gender,
    pub name: String,
}

impl NameRequest {
    pub fn new(kind: NameKind, gender: Gender, name: impl Into<String>) -> Self {
        Self {
            kind,
            gender,
            name: name.into(),
        }
    }
}

/// Russian personal name declension engine
#[derive(Debug, Clone)]
pub struct Petrovich {
    rules: Arc<RuleTable>,
}

impl Petrovich {
    pub fn new(rules: Arc<RuleTable>) -> Self {
        Self { rules }
    }

    /// Engine over the embedded Russian rules
    pub fn russian() -> Result<Self> {
        RuleTable::russian().map(Self::new)
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// All six case forms of `word`
    ///
    /// Never fails: words that carry no Cyrillic letter, or that no rule
    /// covers, come back unchanged in every slot.
    pub fn decline(&self, kind: NameKind, gender: Gender, word: &str) -> Declension {
        if !codepoint::has_cyrillic_letter(word) {
            log::trace!("'{word}' has no Cyrillic letters, leaving as is");
            return Declension::identity(word);
        }

        let matcher = Matcher::new(&self.rules);
        let part_count = word.split(PART_SEPARATOR).count();
        if part_count == 1 {
            return decline_part(&matcher, kind, gender, word, false);
        }

        let parts: Vec<Declension> = word
            .split(PART_SEPARATOR)
            .enumerate()
            .map(|(i, part)| decline_part(&matcher, kind, gender, part, i == 0))
            .collect();
        Declension::join(&parts, PART_SEPARATOR)
    }

    /// A single case form of `word`
    pub fn decline_case(&self, kind: NameKind, gender: Gender, word: &str, case: Case) -> String {
        if case == Case::Nominative {
            return word.to_string();
        }
        self.decline(kind, gender, word).into_form(case)
    }

    pub fn decline_first_name(&self, gender: Gender, word: &str) -> Declension {
        self.decline(NameKind::First, gender, word)
    }

    pub fn decline_middle_name(&self, gender: Gender, word: &str) -> Declension {
        self.decline(NameKind::Middle, gender, word)
    }

    pub fn decline_last_name(&self, gender: Gender, word: &str) -> Declension {
        self.decline(NameKind::Last, gender, word)
    }

    /// Decline raw bytes expected to hold UTF-8
    ///
    /// Input that is not valid UTF-8 matches no rule and is copied into
    /// every slot byte for byte.
    pub fn decline_bytes(&self, kind: NameKind, gender: Gender, word: &[u8]) -> [Vec<u8>; CASE_COUNT] {
        match codepoint::decode(word) {
            Some(text) => self.decline(kind, gender, text).into_bytes(),
            None => std::array::from_fn(|_| word.to_vec()),
        }
    }

    /// Decline many names, in input order
    #[cfg(feature = "parallel")]
    pub fn decline_batch(&self, requests: &[NameRequest]) -> Vec<Declension> {
        log::debug!("declining {} names in parallel", requests.len());
        requests
            .par_iter()
            .map(|r| self.decline(r.kind, r.gender, &r.name))
            .collect()
    }

    /// Decline many names, in input order
    #[cfg(not(feature = "parallel"))]
    pub fn decline_batch(&self, requests: &[NameRequest]) -> Vec<Declension> {
        log::debug!("declining {} names", requests.len());
        requests
            .iter()
            .map(|r| self.decline(r.kind, r.gender, &r.name))
            .collect()
    }
}

fn decline_part(
    matcher: &Matcher<'_>,
    kind: NameKind,
    gender: Gender,
    part: &str,
    first_of_compound: bool,
) -> Declension {
    if !codepoint::has_cyrillic_letter(part) {
        return Declension::identity(part);
    }
    match matcher.select_part(kind, gender, part, first_of_compound) {
        MatchResult::Matched { rule, suffix_len } => Declension::inflect(part, rule, suffix_len),
        MatchResult::NoRule => Declension::identity(part),
    }
}
