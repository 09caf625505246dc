//! Runtime rule table
//!
//! The table is built once (from a rule file or programmatically), validated,
//! and never mutated afterwards. Lookups hand out plain references, so any
//! number of threads can read it at once.

use super::config::{RuleConfig, RulesConfig, TAG_FIRST_WORD};
use crate::codepoint;
use crate::error::{PetrovichError, Result};
use crate::types::{Case, GenderScope, NameKind, MOD_COUNT};
use smallvec::SmallVec;

/// Longest ending a suffix rule may test, in code points
pub const MAX_SUFFIX_LEN: usize = 4;

/// Mod leaving the word exactly as the caller wrote it
pub const KEEP_MOD: &str = ".";

/// One declension rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    scope: GenderScope,
    /// Lowercase endings (suffix rules) or whole words (exceptions)
    tests: SmallVec<[String; 4]>,
    /// Replacement endings, genitive through prepositional
    mods: [String; MOD_COUNT],
    exception: bool,
    first_word_only: bool,
    tail: Option<usize>,
}

impl Rule {
    /// Rule matched against the ending of a word
    pub fn suffix<I, S>(scope: GenderScope, tests: I, mods: [&str; MOD_COUNT]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(scope, tests, mods.map(String::from), false)
    }

    /// Rule matched against the whole word, ahead of every suffix rule
    pub fn exception<I, S>(scope: GenderScope, words: I, mods: [&str; MOD_COUNT]) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(scope, words, mods.map(String::from), true)
    }

    fn new<I, S>(scope: GenderScope, tests: I, mods: [String; MOD_COUNT], exception: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            scope,
            tests: tests.into_iter().map(Into::into).collect(),
            mods,
            exception,
            first_word_only: false,
            tail: None,
        }
    }

    /// Replace only the last `tail` code points instead of the whole match
    pub fn with_tail(mut self, tail: usize) -> Self {
        self.tail = Some(tail);
        self
    }

    /// Restrict the rule to the first part of a hyphenated name
    pub fn only_first_word(mut self) -> Self {
        self.first_word_only = true;
        self
    }

    pub fn scope(&self) -> GenderScope {
        self.scope
    }

    pub fn tests(&self) -> &[String] {
        &self.tests
    }

    pub fn mods(&self) -> &[String; MOD_COUNT] {
        &self.mods
    }

    /// Ending appended to the stem for `case`
    ///
    /// `None` when the case keeps the word unchanged: the nominative, or a
    /// [`KEEP_MOD`] entry.
    pub fn mod_for(&self, case: Case) -> Option<&str> {
        case.mod_index()
            .map(|i| self.mods[i].as_str())
            .filter(|m| *m != KEEP_MOD)
    }

    pub fn is_exception(&self) -> bool {
        self.exception
    }

    pub fn is_first_word_only(&self) -> bool {
        self.first_word_only
    }

    /// Number of trailing code points this rule replaces after matching
    /// `matched_len` code points
    #[inline]
    pub fn replaced_len(&self, matched_len: usize) -> usize {
        self.tail.unwrap_or(matched_len)
    }

    /// Whether the rule contains the empty "any word" test
    pub fn is_fallback(&self) -> bool {
        !self.exception && self.tests.iter().any(String::is_empty)
    }

    fn from_config(config: &RuleConfig, exception: bool, ctx: &str) -> Result<Self> {
        let mods: [String; MOD_COUNT] = config.mods.clone().try_into().map_err(|mods: Vec<String>| {
            PetrovichError::InvalidRules(format!(
                "{ctx}: expected {MOD_COUNT} mods, got {}",
                mods.len()
            ))
        })?;

        let mut rule = Self::new(config.gender, config.test.iter().cloned(), mods, exception);
        rule.tail = config.tail;
        rule.first_word_only = config.has_tag(TAG_FIRST_WORD);
        Ok(rule)
    }

    fn validate(&self, ctx: &str) -> Result<()> {
        if self.tests.is_empty() {
            return Err(invalid(ctx, "test list is empty"));
        }

        for test in &self.tests {
            if *test != codepoint::fold_str(test) {
                return Err(invalid(ctx, &format!("test '{test}' must be lowercase")));
            }
            if self.exception && test.is_empty() {
                return Err(invalid(ctx, "exception words must not be empty"));
            }
            if !self.exception && codepoint::char_count(test) > MAX_SUFFIX_LEN {
                return Err(invalid(
                    ctx,
                    &format!("suffix '{test}' is longer than {MAX_SUFFIX_LEN} code points"),
                ));
            }
        }

        if let Some(tail) = self.tail {
            let shortest = self
                .tests
                .iter()
                .map(|t| codepoint::char_count(t))
                .min()
                .unwrap_or(0);
            if tail > shortest {
                return Err(invalid(
                    ctx,
                    &format!("tail {tail} exceeds the shortest test ({shortest} code points)"),
                ));
            }
        }

        Ok(())
    }
}

fn invalid(ctx: &str, msg: &str) -> PetrovichError {
    PetrovichError::InvalidRules(format!("{ctx}: {msg}"))
}

/// Ordered rules of one name kind
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// All rules in declaration order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Exception rules in declaration order
    pub fn exceptions(&self) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter().filter(|r| r.is_exception())
    }

    /// Suffix rules in declaration order
    pub fn suffixes(&self) -> impl Iterator<Item = &Rule> + '_ {
        self.rules.iter().filter(|r| !r.is_exception())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn validate(&self, kind: NameKind) -> Result<()> {
        for (i, rule) in self.exceptions().enumerate() {
            rule.validate(&format!("{} exception rule {i}", kind.section()))?;
        }
        for (i, rule) in self.suffixes().enumerate() {
            rule.validate(&format!("{} suffix rule {i}", kind.section()))?;
        }

        // A catch-all rule shadows nothing only when it comes last
        let suffix_count = self.suffixes().count();
        if let Some(pos) = self.suffixes().position(Rule::is_fallback) {
            if pos + 1 != suffix_count {
                return Err(PetrovichError::InvalidRules(format!(
                    "{} suffix rule {pos}: a rule with an empty test must be the last suffix rule",
                    kind.section()
                )));
            }
        }

        Ok(())
    }
}

/// Complete, immutable set of rules for all name kinds
#[derive(Debug, Clone)]
pub struct RuleTable {
    code: String,
    name: String,
    sets: [RuleSet; 3],
}

impl RuleTable {
    /// Start building a table programmatically
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::default()
    }

    /// Build and validate a table from a parsed rule file
    pub fn from_config(config: &RulesConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = RuleTableBuilder::new()
            .code(config.metadata.code.clone())
            .name(config.metadata.name.clone());

        for kind in NameKind::ALL {
            let rules = config.kind(kind);
            for (i, rule) in rules.exceptions.iter().enumerate() {
                let ctx = format!("{} exception rule {i}", kind.section());
                builder = builder.rule(kind, Rule::from_config(rule, true, &ctx)?);
            }
            for (i, rule) in rules.suffixes.iter().enumerate() {
                let ctx = format!("{} suffix rule {i}", kind.section());
                builder = builder.rule(kind, Rule::from_config(rule, false, &ctx)?);
            }
        }

        builder.build()
    }

    /// Rules of one name kind
    #[inline]
    pub fn rules(&self, kind: NameKind) -> &RuleSet {
        &self.sets[kind.index()]
    }

    /// Short identifier from the rule file metadata
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable name from the rule file metadata
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total number of rules across all kinds
    pub fn rule_count(&self) -> usize {
        self.sets.iter().map(RuleSet::len).sum()
    }
}

/// Fluent builder for [`RuleTable`]
#[derive(Debug, Default)]
pub struct RuleTableBuilder {
    code: Option<String>,
    name: Option<String>,
    sets: [Vec<Rule>; 3],
}

impl RuleTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Append a rule to the partition of `kind`
    pub fn rule(mut self, kind: NameKind, rule: Rule) -> Self {
        self.sets[kind.index()].push(rule);
        self
    }

    /// Validate and freeze the table
    pub fn build(self) -> Result<RuleTable> {
        let table = RuleTable {
            code: self.code.unwrap_or_else(|| "custom".to_string()),
            name: self.name.unwrap_or_else(|| "Custom rules".to_string()),
            sets: self.sets.map(|rules| RuleSet { rules }),
        };

        for kind in NameKind::ALL {
            table.rules(kind).validate(kind)?;
        }

        log::debug!(
            "built rule table '{}' with {} rules",
            table.code,
            table.rule_count()
        );
        Ok(table)
    }
}
