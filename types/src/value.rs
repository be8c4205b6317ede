//! Scalar values and the groups they are printed under.

use std::fmt;

/// Category a scalar is printed under. Variants are in print order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarGroup {
    Signed,
    Unsigned,
    Decimal,
    /// Boolean and text values.
    Logical,
}

impl ScalarGroup {
    pub const ALL: [ScalarGroup; 4] = [
        ScalarGroup::Signed,
        ScalarGroup::Unsigned,
        ScalarGroup::Decimal,
        ScalarGroup::Logical,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarGroup::Signed => "signed",
            ScalarGroup::Unsigned => "unsigned",
            ScalarGroup::Decimal => "decimal",
            ScalarGroup::Logical => "logical",
        }
    }
}

impl fmt::Display for ScalarGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One value of a Rust primitive type.
///
/// Rendering through [`fmt::Display`]:
/// - integers as plain decimal digits
/// - floats with exactly two digits after the decimal point
/// - booleans as `true` / `false`
/// - text verbatim
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarValue {
    Isize(isize),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    Usize(usize),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    Bool(bool),
    Str(&'static str),
}

impl ScalarValue {
    /// Digits kept after the decimal point for floating-point values.
    pub const DECIMAL_PLACES: usize = 2;

    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            ScalarValue::Isize(_) => "isize",
            ScalarValue::I8(_) => "i8",
            ScalarValue::I16(_) => "i16",
            ScalarValue::I32(_) => "i32",
            ScalarValue::I64(_) => "i64",
            ScalarValue::Usize(_) => "usize",
            ScalarValue::U8(_) => "u8",
            ScalarValue::U16(_) => "u16",
            ScalarValue::U32(_) => "u32",
            ScalarValue::U64(_) => "u64",
            ScalarValue::F32(_) => "f32",
            ScalarValue::F64(_) => "f64",
            ScalarValue::Bool(_) => "bool",
            ScalarValue::Str(_) => "&str",
        }
    }

    /// Width in bits for numeric values. `isize`/`usize` report the host's
    /// pointer width.
    #[must_use]
    pub fn bit_width(&self) -> Option<u32> {
        match self {
            ScalarValue::I8(_) | ScalarValue::U8(_) => Some(8),
            ScalarValue::I16(_) | ScalarValue::U16(_) => Some(16),
            ScalarValue::I32(_) | ScalarValue::U32(_) | ScalarValue::F32(_) => Some(32),
            ScalarValue::I64(_) | ScalarValue::U64(_) | ScalarValue::F64(_) => Some(64),
            ScalarValue::Isize(_) | ScalarValue::Usize(_) => Some(usize::BITS),
            ScalarValue::Bool(_) | ScalarValue::Str(_) => None,
        }
    }

    #[must_use]
    pub fn group(&self) -> ScalarGroup {
        match self {
            ScalarValue::Isize(_)
            | ScalarValue::I8(_)
            | ScalarValue::I16(_)
            | ScalarValue::I32(_)
            | ScalarValue::I64(_) => ScalarGroup::Signed,
            ScalarValue::Usize(_)
            | ScalarValue::U8(_)
            | ScalarValue::U16(_)
            | ScalarValue::U32(_)
            | ScalarValue::U64(_) => ScalarGroup::Unsigned,
            ScalarValue::F32(_) | ScalarValue::F64(_) => ScalarGroup::Decimal,
            ScalarValue::Bool(_) | ScalarValue::Str(_) => ScalarGroup::Logical,
        }
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const PLACES: usize = ScalarValue::DECIMAL_PLACES;
        match self {
            ScalarValue::Isize(v) => write!(f, "{v}"),
            ScalarValue::I8(v) => write!(f, "{v}"),
            ScalarValue::I16(v) => write!(f, "{v}"),
            ScalarValue::I32(v) => write!(f, "{v}"),
            ScalarValue::I64(v) => write!(f, "{v}"),
            ScalarValue::Usize(v) => write!(f, "{v}"),
            ScalarValue::U8(v) => write!(f, "{v}"),
            ScalarValue::U16(v) => write!(f, "{v}"),
            ScalarValue::U32(v) => write!(f, "{v}"),
            ScalarValue::U64(v) => write!(f, "{v}"),
            ScalarValue::F32(v) => write!(f, "{v:.PLACES$}"),
            ScalarValue::F64(v) => write!(f, "{v:.PLACES$}"),
            ScalarValue::Bool(v) => write!(f, "{v}"),
            ScalarValue::Str(v) => f.write_str(v),
        }
    }
}
