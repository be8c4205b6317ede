//! Showcase type tests

use scalars_types::{Entry, Label, ScalarGroup, ScalarValue, Section, Showcase, ShowcaseError};

use crate::common::EXPECTED_STDOUT;

#[test]
fn library_rendering_matches_binary_output() {
    assert_eq!(Showcase::standard().unwrap().render(), EXPECTED_STDOUT);
}

#[test]
fn groups_are_separated_by_blank_lines() {
    let rendered = Showcase::standard().unwrap().render();
    let blocks: Vec<_> = rendered.split_terminator("\n\n").collect();
    assert_eq!(blocks.len(), ScalarGroup::ALL.len());
    assert!(rendered.ends_with("String: true\n\n"));
}

#[test]
fn every_value_has_the_declared_type() {
    let showcase = Showcase::standard().unwrap();
    let types: Vec<_> = showcase
        .entries()
        .map(|entry| (entry.label.as_str(), entry.value.type_name()))
        .collect();

    assert_eq!(
        types,
        [
            ("Integer", "isize"),
            ("Integer 8", "i8"),
            ("Integer 16", "i16"),
            ("Integer 32", "i32"),
            ("Integer 64", "i64"),
            ("Unsigned Integer", "usize"),
            ("Unsigned Integer 8", "u8"),
            ("Unsigned Integer 16", "u16"),
            ("Unsigned Integer 32", "u32"),
            ("Unsigned Integer 64", "u64"),
            ("Decimal 32", "f32"),
            ("Decimal 64", "f64"),
            ("Boolean", "bool"),
            ("String", "&str"),
        ]
    );
}

#[test]
fn fixed_width_labels_match_bit_widths() {
    let showcase = Showcase::standard().unwrap();
    for entry in showcase.entries() {
        let label = entry.label.as_str();
        let Some(suffix) = label.rsplit_once(' ').map(|(_, last)| last) else {
            continue;
        };
        if let Ok(bits) = suffix.parse::<u32>() {
            assert_eq!(entry.value.bit_width(), Some(bits), "{label}");
        }
    }
}

#[test]
fn text_value_is_not_the_boolean() {
    let showcase = Showcase::standard().unwrap();
    let value_of = |label: &str| {
        showcase
            .entries()
            .find(|entry| entry.label.as_str() == label)
            .map(|entry| entry.value)
    };
    assert_eq!(value_of("Boolean"), Some(ScalarValue::Bool(true)));
    assert_eq!(value_of("String"), Some(ScalarValue::Str("true")));
}

#[test]
fn reused_label_is_rejected() {
    let entry = Entry::new(Label::new("Boolean"), ScalarValue::Bool(true));
    let err = Showcase::new(vec![Section::new(ScalarGroup::Logical, vec![entry, entry])])
        .unwrap_err();
    assert_eq!(err, ShowcaseError::DuplicateLabel("Boolean"));
}
