//! Rule selection
//!
//! Selection runs in two passes over the rules of one name kind:
//!
//! 1. **Exceptions**: whole-word, case-insensitive comparison; the first
//!    gender-compatible exception that lists the word wins outright.
//! 2. **Suffixes**: every gender-compatible suffix rule whose test is a tail
//!    of the word is a candidate; the longest tail wins and equal lengths go
//!    to the rule declared first.

use crate::codepoint;
use crate::rules::{Rule, RuleSet, RuleTable};
use crate::types::{Gender, NameKind};
use std::cmp::Reverse;

/// Outcome of rule selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult<'a> {
    /// No rule applies; the word is left as is
    NoRule,
    /// `rule` applies and matched the last `suffix_len` code points
    Matched { rule: &'a Rule, suffix_len: usize },
}

impl<'a> MatchResult<'a> {
    pub fn rule(&self) -> Option<&'a Rule> {
        match self {
            MatchResult::Matched { rule, .. } => Some(rule),
            MatchResult::NoRule => None,
        }
    }

    pub fn suffix_len(&self) -> Option<usize> {
        match self {
            MatchResult::Matched { suffix_len, .. } => Some(*suffix_len),
            MatchResult::NoRule => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, MatchResult::Matched { .. })
    }
}

/// Selects the rule for a word from a borrowed table
#[derive(Debug, Clone, Copy)]
pub struct Matcher<'a> {
    table: &'a RuleTable,
}

impl<'a> Matcher<'a> {
    pub fn new(table: &'a RuleTable) -> Self {
        Self { table }
    }

    /// Select the rule for a standalone word
    pub fn select(&self, kind: NameKind, gender: Gender, word: &str) -> MatchResult<'a> {
        self.select_part(kind, gender, word, false)
    }

    /// Select the rule for one part of a possibly hyphenated name
    ///
    /// `first_of_compound` is true only for the leading part of a name with
    /// at least two parts; rules tagged `first_word` are skipped otherwise.
    pub fn select_part(
        &self,
        kind: NameKind,
        gender: Gender,
        word: &str,
        first_of_compound: bool,
    ) -> MatchResult<'a> {
        if word.is_empty() {
            return MatchResult::NoRule;
        }

        let folded = codepoint::fold_str(word);
        let set = self.table.rules(kind);
        let eligible =
            |rule: &Rule| rule.scope().admits(gender) && (first_of_compound || !rule.is_first_word_only());

        let result = match exception_pass(set, &folded, eligible) {
            MatchResult::NoRule => suffix_pass(set, &folded, eligible),
            found => found,
        };

        match result {
            MatchResult::Matched { rule, suffix_len } => log::trace!(
                "{kind}/{gender} '{word}': matched {} rule {:?} on {suffix_len} code points",
                if rule.is_exception() { "exception" } else { "suffix" },
                rule.tests()
            ),
            MatchResult::NoRule => log::trace!("{kind}/{gender} '{word}': no rule"),
        }
        result
    }
}

fn exception_pass<'a>(
    set: &'a RuleSet,
    folded: &str,
    eligible: impl Fn(&Rule) -> bool,
) -> MatchResult<'a> {
    set.exceptions()
        .filter(|rule| eligible(rule))
        .find(|rule| rule.tests().iter().any(|test| test == folded))
        .map_or(MatchResult::NoRule, |rule| MatchResult::Matched {
            rule,
            suffix_len: codepoint::char_count(folded),
        })
}

fn suffix_pass<'a>(
    set: &'a RuleSet,
    folded: &str,
    eligible: impl Fn(&Rule) -> bool,
) -> MatchResult<'a> {
    set.suffixes()
        .enumerate()
        .filter(|(_, rule)| eligible(rule))
        .filter_map(|(order, rule)| {
            rule.tests()
                .iter()
                .filter(|test| codepoint::has_tail(folded, test))
                .map(|test| codepoint::char_count(test))
                .max()
                .map(|len| (order, rule, len))
        })
        .min_by_key(|&(order, _, len)| (Reverse(len), order))
        .map_or(MatchResult::NoRule, |(_, rule, suffix_len)| MatchResult::Matched {
            rule,
            suffix_len,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GenderScope, MOD_COUNT};

    const A: [&str; MOD_COUNT] = ["a1", "a2", "a3", "a4", "a5"];
    const B: [&str; MOD_COUNT] = ["b1", "b2", "b3", "b4", "b5"];
    const C: [&str; MOD_COUNT] = ["c1", "c2", "c3", "c4", "c5"];

    fn first_of(result: MatchResult<'_>) -> &str {
        result.rule().expect("expected a match").mods()[0].as_str()
    }

    #[test]
    fn test_longest_suffix_wins_regardless_of_order() {
        let table = RuleTable::builder()
            .rule(NameKind::First, Rule::suffix(GenderScope::Any, ["й"], A))
            .rule(NameKind::First, Rule::suffix(GenderScope::Any, ["ай"], B))
            .build()
            .unwrap();
        let matcher = Matcher::new(&table);

        let result = matcher.select(NameKind::First, Gender::Male, "Николай");
        assert_eq!(first_of(result), "b1");
        assert_eq!(result.suffix_len(), Some(2));

        let result = matcher.select(NameKind::First, Gender::Male, "Сергей");
        assert_eq!(first_of(result), "a1");
        assert_eq!(result.suffix_len(), Some(1));
    }

    #[test]
    fn test_equal_length_goes_to_first_declared() {
        let table = RuleTable::builder()
            .rule(NameKind::Last, Rule::suffix(GenderScope::Any, ["ин"], A))
            .rule(NameKind::Last, Rule::suffix(GenderScope::Any, ["ин", "ын"], B))
            .build()
            .unwrap();
        let result = Matcher::new(&table).select(NameKind::Last, Gender::Male, "Воронин");
        assert_eq!(first_of(result), "a1");
    }

    #[test]
    fn test_exception_outranks_longer_suffix() {
        let table = RuleTable::builder()
            .rule(NameKind::First, Rule::suffix(GenderScope::Any, ["лев"], A))
            .rule(NameKind::First, Rule::exception(GenderScope::Any, ["лев"], B))
            .build()
            .unwrap();
        let result = Matcher::new(&table).select(NameKind::First, Gender::Male, "ЛЕВ");
        assert_eq!(first_of(result), "b1");
        assert_eq!(result.suffix_len(), Some(3));
    }

    #[test]
    fn test_exception_needs_whole_word() {
        let table = RuleTable::builder()
            .rule(NameKind::First, Rule::exception(GenderScope::Any, ["лев"], B))
            .rule(NameKind::First, Rule::suffix(GenderScope::Any, ["в"], A))
            .build()
            .unwrap();
        let result = Matcher::new(&table).select(NameKind::First, Gender::Male, "Ярослав");
        assert_eq!(first_of(result), "a1");
    }

    #[test]
    fn test_gender_filter() {
        let table = RuleTable::builder()
            .rule(NameKind::First, Rule::suffix(GenderScope::Male, ["ь"], A))
            .rule(NameKind::First, Rule::suffix(GenderScope::Female, ["ь"], B))
            .rule(NameKind::First, Rule::exception(GenderScope::Female, ["игорь"], C))
            .build()
            .unwrap();
        let matcher = Matcher::new(&table);

        assert_eq!(first_of(matcher.select(NameKind::First, Gender::Male, "Игорь")), "a1");
        assert_eq!(first_of(matcher.select(NameKind::First, Gender::Female, "Любовь")), "b1");
        assert_eq!(first_of(matcher.select(NameKind::First, Gender::Female, "Игорь")), "c1");
    }

    #[test]
    fn test_kinds_are_separate_partitions() {
        let table = RuleTable::builder()
            .rule(NameKind::Middle, Rule::suffix(GenderScope::Male, ["ич"], A))
            .build()
            .unwrap();
        let matcher = Matcher::new(&table);
        assert!(matcher.select(NameKind::Middle, Gender::Male, "Петрович").is_match());
        assert_eq!(
            matcher.select(NameKind::Last, Gender::Male, "Петрович"),
            MatchResult::NoRule
        );
    }

    #[test]
    fn test_first_word_rules() {
        let table = RuleTable::builder()
            .rule(
                NameKind::Last,
                Rule::exception(GenderScope::Any, ["бонч"], A).only_first_word(),
            )
            .rule(NameKind::Last, Rule::suffix(GenderScope::Male, ["ч"], B))
            .build()
            .unwrap();
        let matcher = Matcher::new(&table);

        assert_eq!(
            first_of(matcher.select_part(NameKind::Last, Gender::Male, "Бонч", true)),
            "a1"
        );
        assert_eq!(first_of(matcher.select(NameKind::Last, Gender::Male, "Бонч")), "b1");
    }

    #[test]
    fn test_fallback_and_empty_word() {
        let table = RuleTable::builder()
            .rule(NameKind::First, Rule::suffix(GenderScope::Any, ["а"], A))
            .rule(NameKind::First, Rule::suffix(GenderScope::Any, [""], B))
            .build()
            .unwrap();
        let matcher = Matcher::new(&table);

        let result = matcher.select(NameKind::First, Gender::Female, "Ирэн");
        assert_eq!(first_of(result), "b1");
        assert_eq!(result.suffix_len(), Some(0));
        assert_eq!(first_of(matcher.select(NameKind::First, Gender::Female, "Анна")), "a1");
        assert_eq!(matcher.select(NameKind::First, Gender::Female, ""), MatchResult::NoRule);
    }

    #[test]
    fn test_suffix_longer_than_word_never_matches() {
        let table = RuleTable::builder()
            .rule(NameKind::First, Rule::suffix(GenderScope::Any, ["ович"], A))
            .build()
            .unwrap();
        let matcher = Matcher::new(&table);
        assert_eq!(matcher.select(NameKind::First, Gender::Male, "вич"), MatchResult::NoRule);
        let result = matcher.select(NameKind::First, Gender::Male, "ович");
        assert_eq!(result.suffix_len(), Some(4));
    }
}
