//! Closed vocabularies of the declension engine: cases, name kinds, genders

use crate::error::PetrovichError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of grammatical cases
pub const CASE_COUNT: usize = 6;

/// Number of cases a rule rewrites (every case except the nominative)
pub const MOD_COUNT: usize = CASE_COUNT - 1;

/// Grammatical case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Case {
    /// Именительный: who? (the input form)
    Nominative,
    /// Родительный: whom? (of)
    Genitive,
    /// Дательный: to whom?
    Dative,
    /// Винительный: whom? (direct object)
    Accusative,
    /// Творительный: by whom?
    Instrumental,
    /// Предложный: about whom?
    Prepositional,
}

impl Case {
    /// All cases in output order
    pub const ALL: [Case; CASE_COUNT] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
    ];

    /// Position in the six-form output
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Position in a rule's `mods` list, `None` for the nominative
    pub const fn mod_index(self) -> Option<usize> {
        match self {
            Case::Nominative => None,
            other => Some(other as usize - 1),
        }
    }

    /// Lowercase English name, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            Case::Nominative => "nominative",
            Case::Genitive => "genitive",
            Case::Dative => "dative",
            Case::Accusative => "accusative",
            Case::Instrumental => "instrumental",
            Case::Prepositional => "prepositional",
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Case {
    type Err = PetrovichError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nominative" | "nom" => Ok(Case::Nominative),
            "genitive" | "gen" => Ok(Case::Genitive),
            "dative" | "dat" => Ok(Case::Dative),
            "accusative" | "acc" => Ok(Case::Accusative),
            "instrumental" | "ins" => Ok(Case::Instrumental),
            "prepositional" | "pre" => Ok(Case::Prepositional),
            _ => Err(PetrovichError::InvalidCase(s.to_string())),
        }
    }
}

/// Which part of a full name a word is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    /// Given name (имя)
    First,
    /// Patronymic (отчество)
    Middle,
    /// Family name (фамилия)
    Last,
}

impl NameKind {
    /// All kinds, in rule-table order
    pub const ALL: [NameKind; 3] = [NameKind::First, NameKind::Middle, NameKind::Last];

    /// Position of this kind's partition in a rule table
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Short token used on the command line
    pub fn name(&self) -> &'static str {
        match self {
            NameKind::First => "first",
            NameKind::Middle => "middle",
            NameKind::Last => "last",
        }
    }

    /// Section key of this kind in a rule file
    pub fn section(&self) -> &'static str {
        match self {
            NameKind::First => "firstname",
            NameKind::Middle => "middlename",
            NameKind::Last => "lastname",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NameKind {
    type Err = PetrovichError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "firstname" => Ok(NameKind::First),
            "middle" | "middlename" => Ok(NameKind::Middle),
            "last" | "lastname" => Ok(NameKind::Last),
            _ => Err(PetrovichError::InvalidKind(s.to_string())),
        }
    }
}

/// Grammatical gender of the person being named
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn name(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = PetrovichError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(PetrovichError::InvalidGender(s.to_string())),
        }
    }
}

/// Genders a rule applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderScope {
    Male,
    Female,
    #[serde(alias = "androgynous")]
    Any,
}

impl GenderScope {
    /// Whether a rule with this scope may be applied for `gender`
    #[inline]
    pub fn admits(self, gender: Gender) -> bool {
        match self {
            GenderScope::Any => true,
            GenderScope::Male => gender == Gender::Male,
            GenderScope::Female => gender == Gender::Female,
        }
    }
}
