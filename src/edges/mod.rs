//! Edge records and their decoding into coordinate buffers
//!
//! An edge is a record of either two fields `(row, col)` or three fields
//! `(row, col, weight)`. Records can be plain tuples, fixed-size arrays or
//! variable-length slices of [`Field`]s (for data parsed at runtime).

pub mod decode;

pub use decode::{decode_edges, CooBuffers, EdgeValues};

use std::fmt;

/// A single scalar field of an edge record
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field {
    /// Integer field
    Int(i64),
    /// Real-valued field
    Real(f64),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Int(v) => write!(f, "{}", v),
            Field::Real(v) => write!(f, "{}", v),
        }
    }
}

impl From<i64> for Field {
    fn from(v: i64) -> Self {
        Field::Int(v)
    }
}

impl From<i32> for Field {
    fn from(v: i32) -> Self {
        Field::Int(v as i64)
    }
}

impl From<u32> for Field {
    fn from(v: u32) -> Self {
        Field::Int(v as i64)
    }
}

impl From<usize> for Field {
    fn from(v: usize) -> Self {
        // Out-of-range values saturate and are rejected later as overflow
        Field::Int(i64::try_from(v).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Field {
    fn from(v: f64) -> Self {
        Field::Real(v)
    }
}

impl From<f32> for Field {
    fn from(v: f32) -> Self {
        Field::Real(v as f64)
    }
}

/// A record describing one edge
///
/// Field 0 is the row index, field 1 the column index and the optional
/// field 2 the weight.
pub trait EdgeRecord {
    /// Number of fields in this record
    fn arity(&self) -> usize;

    /// Field at position `idx`, if present
    fn field(&self, idx: usize) -> Option<Field>;
}

impl<A, B> EdgeRecord for (A, B)
where
    A: Copy + Into<Field>,
    B: Copy + Into<Field>,
{
    fn arity(&self) -> usize {
        2
    }

    fn field(&self, idx: usize) -> Option<Field> {
        match idx {
            0 => Some(self.0.into()),
            1 => Some(self.1.into()),
            _ => None,
        }
    }
}

impl<A, B, C> EdgeRecord for (A, B, C)
where
    A: Copy + Into<Field>,
    B: Copy + Into<Field>,
    C: Copy + Into<Field>,
{
    fn arity(&self) -> usize {
        3
    }

    fn field(&self, idx: usize) -> Option<Field> {
        match idx {
            0 => Some(self.0.into()),
            1 => Some(self.1.into()),
            2 => Some(self.2.into()),
            _ => None,
        }
    }
}

impl EdgeRecord for [Field] {
    fn arity(&self) -> usize {
        self.len()
    }

    fn field(&self, idx: usize) -> Option<Field> {
        self.get(idx).copied()
    }
}

impl<const N: usize> EdgeRecord for [Field; N] {
    fn arity(&self) -> usize {
        N
    }

    fn field(&self, idx: usize) -> Option<Field> {
        self.get(idx).copied()
    }
}

impl EdgeRecord for Vec<Field> {
    fn arity(&self) -> usize {
        self.len()
    }

    fn field(&self, idx: usize) -> Option<Field> {
        self.get(idx).copied()
    }
}

impl<R: EdgeRecord + ?Sized> EdgeRecord for &R {
    fn arity(&self) -> usize {
        (**self).arity()
    }

    fn field(&self, idx: usize) -> Option<Field> {
        (**self).field(idx)
    }
}
