//! The ordered set of labelled scalars and its text block.
//!
//! Each entry renders as `"<label>: <value>"` on its own line and every
//! section is followed by a blank line, including the last one.

use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

use crate::{Label, ScalarGroup, ScalarValue};

/// A showcase whose sections break the grouping or labelling rules.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShowcaseError {
    #[error("label {0:?} appears more than once")]
    DuplicateLabel(&'static str),
    #[error("{label:?} holds a {found} value but sits in the {expected} section")]
    MisplacedValue {
        label: &'static str,
        expected: ScalarGroup,
        found: ScalarGroup,
    },
}

/// A labelled scalar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub label: Label,
    pub value: ScalarValue,
}

impl Entry {
    #[must_use]
    pub const fn new(label: Label, value: ScalarValue) -> Self {
        Self { label, value }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Entries printed together, followed by a blank line.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    group: ScalarGroup,
    entries: Vec<Entry>,
}

impl Section {
    #[must_use]
    pub fn new(group: ScalarGroup, entries: Vec<Entry>) -> Self {
        Self { group, entries }
    }

    #[inline]
    #[must_use]
    pub fn group(&self) -> ScalarGroup {
        self.group
    }

    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        writeln!(f)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Showcase {
    sections: Vec<Section>,
}

impl Showcase {
    /// Build a showcase, checking that labels are unique and every value sits
    /// in the section of its own group.
    pub fn new(sections: Vec<Section>) -> Result<Self, ShowcaseError> {
        let mut seen = HashSet::new();
        for section in &sections {
            for entry in &section.entries {
                let label = entry.label.as_str();
                if !seen.insert(label) {
                    return Err(ShowcaseError::DuplicateLabel(label));
                }
                let found = entry.value.group();
                if found != section.group {
                    return Err(ShowcaseError::MisplacedValue {
                        label,
                        expected: section.group,
                        found,
                    });
                }
            }
        }
        Ok(Self { sections })
    }

    /// The fourteen primitive values, one section per [`ScalarGroup`].
    pub fn standard() -> Result<Self, ShowcaseError> {
        let integer: isize = 32;
        let integer8: i8 = 8;
        let integer16: i16 = 16;
        let integer32: i32 = 32;
        let integer64: i64 = 64;

        let unsigned_integer: usize = 32;
        let unsigned_integer8: u8 = 8;
        let unsigned_integer16: u16 = 16;
        let unsigned_integer32: u32 = 32;
        let unsigned_integer64: u64 = 64;

        let decimal32: f32 = 0.01;
        let decimal64: f64 = 0.1;

        let boolean = true;
        let string = "true";

        Self::new(vec![
            Section::new(
                ScalarGroup::Signed,
                vec![
                    Entry::new(Label::new("Integer"), ScalarValue::Isize(integer)),
                    Entry::new(Label::new("Integer 8"), ScalarValue::I8(integer8)),
                    Entry::new(Label::new("Integer 16"), ScalarValue::I16(integer16)),
                    Entry::new(Label::new("Integer 32"), ScalarValue::I32(integer32)),
                    Entry::new(Label::new("Integer 64"), ScalarValue::I64(integer64)),
                ],
            ),
            Section::new(
                ScalarGroup::Unsigned,
                vec![
                    Entry::new(
                        Label::new("Unsigned Integer"),
                        ScalarValue::Usize(unsigned_integer),
                    ),
                    Entry::new(
                        Label::new("Unsigned Integer 8"),
                        ScalarValue::U8(unsigned_integer8),
                    ),
                    Entry::new(
                        Label::new("Unsigned Integer 16"),
                        ScalarValue::U16(unsigned_integer16),
                    ),
                    Entry::new(
                        Label::new("Unsigned Integer 32"),
                        ScalarValue::U32(unsigned_integer32),
                    ),
                    Entry::new(
                        Label::new("Unsigned Integer 64"),
                        ScalarValue::U64(unsigned_integer64),
                    ),
                ],
            ),
            Section::new(
                ScalarGroup::Decimal,
                vec![
                    Entry::new(Label::new("Decimal 32"), ScalarValue::F32(decimal32)),
                    Entry::new(Label::new("Decimal 64"), ScalarValue::F64(decimal64)),
                ],
            ),
            Section::new(
                ScalarGroup::Logical,
                vec![
                    Entry::new(Label::new("Boolean"), ScalarValue::Bool(boolean)),
                    Entry::new(Label::new("String"), ScalarValue::Str(string)),
                ],
            ),
        ])
    }

    #[inline]
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// All entries in print order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.sections.iter().flat_map(|section| section.entries.iter())
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Showcase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            write!(f, "{section}")?;
        }
        Ok(())
    }
}
