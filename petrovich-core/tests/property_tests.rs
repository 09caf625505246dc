//! Property tests over arbitrary input with the embedded rules

use petrovich_core::{Case, Gender, NameKind, Petrovich};
use proptest::prelude::*;

fn kind_strategy() -> impl Strategy<Value = NameKind> {
    prop::sample::select(NameKind::ALL.to_vec())
}

fn gender_strategy() -> impl Strategy<Value = Gender> {
    prop::sample::select(vec![Gender::Male, Gender::Female])
}

proptest! {
    #[test]
    fn test_nominative_is_input(
        kind in kind_strategy(),
        gender in gender_strategy(),
        word in "\\PC{0,12}",
    ) {
        let petrovich = Petrovich::russian().unwrap();
        let forms = petrovich.decline(kind, gender, &word);
        prop_assert_eq!(forms.get(Case::Nominative), word.as_str());
    }

    #[test]
    fn test_declension_is_deterministic(
        kind in kind_strategy(),
        gender in gender_strategy(),
        word in "[А-ЯЁа-яё]{1,10}(-[А-Яа-я]{1,8})?",
    ) {
        let petrovich = Petrovich::russian().unwrap();
        let first = petrovich.decline(kind, gender, &word);
        let second = petrovich.decline(kind, gender, &word);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_non_cyrillic_passes_through(
        kind in kind_strategy(),
        gender in gender_strategy(),
        word in "[A-Za-z0-9 '.-]{0,16}",
    ) {
        let petrovich = Petrovich::russian().unwrap();
        let forms = petrovich.decline(kind, gender, &word);
        for (_, form) in forms.iter() {
            prop_assert_eq!(form, word.as_str());
        }
    }

    #[test]
    fn test_part_count_is_preserved(
        kind in kind_strategy(),
        gender in gender_strategy(),
        parts in prop::collection::vec("[а-я]{1,8}", 1..4),
    ) {
        let petrovich = Petrovich::russian().unwrap();
        let word = parts.join("-");
        let forms = petrovich.decline(kind, gender, &word);
        for (case, form) in forms.iter() {
            prop_assert_eq!(form.split('-').count(), parts.len(), "{}: {}", case, form);
        }
    }

    #[test]
    fn test_bytes_agree_with_str(
        kind in kind_strategy(),
        gender in gender_strategy(),
        word in "[А-Яа-я]{0,10}",
    ) {
        let petrovich = Petrovich::russian().unwrap();
        let from_str = petrovich.decline(kind, gender, &word).into_bytes();
        let from_bytes = petrovich.decline_bytes(kind, gender, word.as_bytes());
        prop_assert_eq!(from_str, from_bytes);
    }

    #[test]
    fn test_arbitrary_bytes_never_panic(
        kind in kind_strategy(),
        gender in gender_strategy(),
        bytes in prop::collection::vec(any::<u8>(), 0..24),
    ) {
        let petrovich = Petrovich::russian().unwrap();
        let forms = petrovich.decline_bytes(kind, gender, &bytes);
        prop_assert_eq!(&forms[Case::Nominative.index()], &bytes);
    }
}
