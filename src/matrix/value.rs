//! Value types stored in edge matrices
//!
//! Three representations are supported: a unit presence marker for
//! unweighted graphs, 64-bit integers and 64-bit floats. The representation
//! is chosen once per conversion and never mixed within a matrix.

use std::fmt;

/// Value representation of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Unit presence marker (unweighted edges)
    Presence,
    /// 64-bit signed integer weights
    Integer,
    /// 64-bit floating point weights
    Real,
}

/// Presence marker of an unweighted edge
///
/// Every stored entry of an unweighted matrix is `Present`; absent entries
/// are implicit. Conceptually the weight is `1` (or `true`).
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Present;

impl fmt::Debug for Present {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "true")
    }
}

/// Values that can be accumulated into a sparse edge matrix
pub trait EdgeValue: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Representation tag for this value type
    const KIND: ValueKind;

    /// Sum of two entries, `None` if it overflows the value type
    ///
    /// For presence markers summation is logical OR.
    fn checked_merge(self, other: Self) -> Option<Self>;

    /// Element-wise maximum
    fn max_with(self, other: Self) -> Self;

    /// The value as a float (presence counts as `1.0`)
    fn to_f64(self) -> f64;
}

impl EdgeValue for Present {
    const KIND: ValueKind = ValueKind::Presence;

    fn checked_merge(self, _other: Self) -> Option<Self> {
        Some(Present)
    }

    fn max_with(self, _other: Self) -> Self {
        Present
    }

    fn to_f64(self) -> f64 {
        1.0
    }
}

impl EdgeValue for i64 {
    const KIND: ValueKind = ValueKind::Integer;

    fn checked_merge(self, other: Self) -> Option<Self> {
        self.checked_add(other)
    }

    fn max_with(self, other: Self) -> Self {
        Ord::max(self, other)
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl EdgeValue for f64 {
    const KIND: ValueKind = ValueKind::Real;

    fn checked_merge(self, other: Self) -> Option<Self> {
        Some(self + other)
    }

    fn max_with(self, other: Self) -> Self {
        f64::max(self, other)
    }

    fn to_f64(self) -> f64 {
        self
    }
}
