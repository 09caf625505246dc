//! The six case forms of one word

use crate::codepoint;
use crate::rules::Rule;
use crate::types::{Case, CASE_COUNT};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::ops::Index;

/// Case forms of a word, indexed by [`Case`]
///
/// The nominative slot always holds the input word unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declension {
    forms: [String; CASE_COUNT],
}

impl Declension {
    /// Every case is the word itself
    pub fn identity(word: &str) -> Self {
        Self {
            forms: std::array::from_fn(|_| word.to_string()),
        }
    }

    /// Apply `rule`, which matched the last `matched_len` code points of `word`
    ///
    /// The head of the word keeps the caller's casing; the rule's ending is
    /// appended exactly as stored. Cases the rule leaves unchanged copy the
    /// word whole.
    pub(crate) fn inflect(word: &str, rule: &Rule, matched_len: usize) -> Self {
        let (stem, _) = codepoint::split_tail(word, rule.replaced_len(matched_len));
        Self {
            forms: Case::ALL.map(|case| match rule.mod_for(case) {
                None => word.to_string(),
                Some(ending) => {
                    let mut form = String::with_capacity(stem.len() + ending.len());
                    form.push_str(stem);
                    form.push_str(ending);
                    form
                }
            }),
        }
    }

    /// Join per-part declensions of a hyphenated name, case by case
    pub(crate) fn join(parts: &[Declension], separator: char) -> Self {
        Self {
            forms: Case::ALL.map(|case| {
                let mut form = String::new();
                for (i, part) in parts.iter().enumerate() {
                    if i > 0 {
                        form.push(separator);
                    }
                    form.push_str(part.get(case));
                }
                form
            }),
        }
    }

    pub fn get(&self, case: Case) -> &str {
        &self.forms[case.index()]
    }

    pub fn forms(&self) -> &[String; CASE_COUNT] {
        &self.forms
    }

    pub fn into_forms(self) -> [String; CASE_COUNT] {
        self.forms
    }

    /// Take one form out, dropping the others
    pub fn into_form(self, case: Case) -> String {
        let [nom, gen, dat, acc, ins, pre] = self.forms;
        match case {
            Case::Nominative => nom,
            Case::Genitive => gen,
            Case::Dative => dat,
            Case::Accusative => acc,
            Case::Instrumental => ins,
            Case::Prepositional => pre,
        }
    }

    /// `(case, form)` pairs in case order
    pub fn iter(&self) -> impl Iterator<Item = (Case, &str)> + '_ {
        Case::ALL
            .into_iter()
            .zip(self.forms.iter().map(String::as_str))
    }

    /// Forms as raw UTF-8 bytes
    pub fn into_bytes(self) -> [Vec<u8>; CASE_COUNT] {
        self.forms.map(String::into_bytes)
    }
}

impl Index<Case> for Declension {
    type Output = str;

    fn index(&self, case: Case) -> &str {
        self.get(case)
    }
}

/// Serialized as a map from case name to form
impl Serialize for Declension {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CASE_COUNT))?;
        for (case, form) in self.iter() {
            map.serialize_entry(case.name(), form)?;
        }
        map.end()
    }
}
