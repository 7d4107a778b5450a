//! Property tests for conversion

use proptest::prelude::*;
use rutags_core::{convert, ParsedTag, SchemaVersion};

const UD_POS: &[&str] = &[
    "ADJ", "ADV", "DET", "CONJ", "CCONJ", "VERB", "X", "INTJ", "NOUN", "PRON", "NUM", "PART",
    "ADP", "PROPN",
];

const GRAMMEMES: &[&str] = &[
    "S", "A", "V", "ADV", "CONJ", "SPRO", "APRO", "NUM", "PR", "гео", "имя", "сокр", "им", "род",
    "ед", "мн", "муж", "жен", "неод", "од", "несов", "сов", "прош", "деепр", "1-л", "PRTS", "xyz",
];

const SEPARATORS: &[&str] = &[",", "=", " ", "|", "(", ")"];

fn version() -> impl Strategy<Value = SchemaVersion> {
    prop_oneof![Just(SchemaVersion::Ud14), Just(SchemaVersion::Ud20)]
}

fn mystem_like() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(GRAMMEMES), 0..8),
        prop::collection::vec(prop::sample::select(SEPARATORS), 8),
    )
        .prop_map(|(grams, seps)| {
            grams
                .iter()
                .zip(seps.iter().cycle())
                .map(|(g, s)| format!("{g}{s}"))
                .collect::<String>()
        })
}

proptest! {
    #[test]
    fn prop_output_starts_with_ud_pos(raw in any::<String>(), version in version()) {
        let out = convert(&raw, version);
        prop_assert!(!out.is_empty());
        let (pos, features) = out.split_once(' ').expect("POS and features separated by a space");
        prop_assert!(UD_POS.contains(&pos), "unexpected POS {pos}");
        prop_assert!(!features.is_empty());
    }

    #[test]
    fn prop_mystem_like_output_is_well_formed(raw in mystem_like(), version in version()) {
        let out = convert(&raw, version);
        let (pos, features) = out.split_once(' ').unwrap();
        prop_assert!(UD_POS.contains(&pos));
        if features != "_" {
            let names: Vec<&str> = features
                .split('|')
                .map(|pair| pair.split_once('=').unwrap().0)
                .collect();
            let mut sorted = names.clone();
            sorted.sort_unstable();
            sorted.dedup();
            prop_assert_eq!(names, sorted);
        }
    }

    #[test]
    fn prop_conversion_is_deterministic(raw in mystem_like(), version in version()) {
        prop_assert_eq!(convert(&raw, version), convert(&raw, version));
    }

    #[test]
    fn prop_delimiters_only_yield_unknown(raw in "[ ,=|()\\t]*", version in version()) {
        prop_assert_eq!(convert(&raw, version), "X _");
    }

    #[test]
    fn prop_feature_order_irrelevant(
        features in prop::collection::btree_map("[A-Z][a-z]{1,8}", "[A-Z][a-z]{1,5}", 0..6),
    ) {
        let mut forward = ParsedTag::new();
        for (category, value) in &features {
            forward.set_feature(category.clone(), value.clone());
        }
        let mut backward = ParsedTag::new();
        for (category, value) in features.iter().rev() {
            backward.set_feature(category.clone(), value.clone());
        }
        prop_assert_eq!(forward.to_string(), backward.to_string());
    }
}
