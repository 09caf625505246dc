//! Declension of Russian personal names
//!
//! Given a first name, patronymic or family name, its kind and the gender of
//! its bearer, this crate produces the name in all six grammatical cases.
//! Declension is rule-driven: the rule table is plain data (see
//! `configs/rules/russian.toml`), loaded once and shared read-only.
//!
//! # Architecture
//!
//! - **Rules** ([`rules`]): TOML schema, validation and the immutable
//!   [`RuleTable`]
//! - **Matcher** ([`matcher`]): picks the rule for a word, exceptions first,
//!   then the longest matching suffix
//! - **Engine** ([`Petrovich`]): splits compound names, applies the rule and
//!   assembles the [`Declension`]
//!
//! # Example
//!
//! ```rust
//! use petrovich_core::{Case, Gender, NameKind, Petrovich};
//!
//! let petrovich = Petrovich::russian().unwrap();
//!
//! let forms = petrovich.decline(NameKind::First, Gender::Male, "Николай");
//! assert_eq!(forms.get(Case::Genitive), "Николая");
//! assert_eq!(forms.get(Case::Instrumental), "Николаем");
//!
//! // Words without Cyrillic letters are left alone
//! let forms = petrovich.decline(NameKind::Last, Gender::Female, "Smith");
//! assert_eq!(forms.get(Case::Dative), "Smith");
//! ```

pub mod codepoint;
pub mod declension;
pub mod engine;
pub mod error;
pub mod matcher;
pub mod rules;
pub mod types;

pub use declension::Declension;
pub use engine::{NameRequest, Petrovich, PART_SEPARATOR};
pub use error::{PetrovichError, Result};
pub use matcher::{MatchResult, Matcher};
pub use rules::{Rule, RuleTable, RuleTableBuilder};
pub use types::{Case, Gender, GenderScope, NameKind, CASE_COUNT, MOD_COUNT};
