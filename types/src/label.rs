use std::fmt;

/// A display label guaranteed to hold non-whitespace text.
///
/// Labels are static text, so the check runs at compile time when the label
/// is a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Label(&'static str);

impl Label {
    #[must_use]
    pub const fn new(value: &'static str) -> Self {
        assert!(!value.trim_ascii().is_empty(), "Label must not be blank");
        Self(value)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}
