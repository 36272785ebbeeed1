//! Edge decoding: records to parallel coordinate buffers
//!
//! All validation happens here, before any matrix storage is allocated.
//! Decoding fails on the first offending record, reported by its position
//! in the input list.

use tracing::debug;

use crate::constants::{MAX_INDEX, UNWEIGHTED_ARITY, WEIGHTED_ARITY};
use crate::edges::{EdgeRecord, Field};
use crate::error::{EdgeListError, Result};
use crate::matrix::ValueKind;

/// Values of the decoded edges, one representation for the whole list
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeValues {
    /// Presence markers for `len` unweighted edges
    Unweighted(usize),
    /// Integer weights
    Integer(Vec<i64>),
    /// Real weights (integers promoted when any weight is real)
    Real(Vec<f64>),
}

impl EdgeValues {
    /// Number of values
    pub fn len(&self) -> usize {
        match self {
            EdgeValues::Unweighted(n) => *n,
            EdgeValues::Integer(v) => v.len(),
            EdgeValues::Real(v) => v.len(),
        }
    }

    /// Returns true if there are no values
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value representation selected for the list
    pub fn kind(&self) -> ValueKind {
        match self {
            EdgeValues::Unweighted(_) => ValueKind::Presence,
            EdgeValues::Integer(_) => ValueKind::Integer,
            EdgeValues::Real(_) => ValueKind::Real,
        }
    }
}

/// Coordinate-list (COO) buffers: one row, column and value per input edge
#[derive(Debug, Clone, PartialEq)]
pub struct CooBuffers {
    /// Row index of each edge
    pub rows: Vec<u32>,
    /// Column index of each edge
    pub cols: Vec<u32>,
    /// Value of each edge
    pub values: EdgeValues,
}

impl CooBuffers {
    /// Number of decoded edges
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no edge was decoded
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether the edges carried an explicit weight column
    pub fn is_weighted(&self) -> bool {
        !matches!(self.values, EdgeValues::Unweighted(_))
    }
}

/// Decodes an edge list into coordinate buffers
///
/// The arity of the first record fixes the arity of the whole list:
/// two fields give unweighted edges, three fields give weighted edges.
///
/// # Errors
///
/// * [`EdgeListError::EmptyInput`] if `edges` is empty
/// * [`EdgeListError::MalformedEdge`] if a record does not have 2 or 3
///   fields, differs in arity from the first record, or has a fractional
///   or non-finite index
/// * [`EdgeListError::NegativeIndex`] for an index below zero
/// * [`EdgeListError::IndexOverflow`] for an index above [`MAX_INDEX`]
pub fn decode_edges<E: EdgeRecord>(edges: &[E]) -> Result<CooBuffers> {
    let first = edges.first().ok_or(EdgeListError::EmptyInput)?;

    let arity = first.arity();
    if arity != UNWEIGHTED_ARITY && arity != WEIGHTED_ARITY {
        return Err(malformed(
            0,
            format!("expected 2 or 3 fields, found {}", arity),
        ));
    }
    let weighted = arity == WEIGHTED_ARITY;

    let mut rows = Vec::with_capacity(edges.len());
    let mut cols = Vec::with_capacity(edges.len());
    let mut weights = Vec::with_capacity(if weighted { edges.len() } else { 0 });

    for (position, edge) in edges.iter().enumerate() {
        if edge.arity() != arity {
            return Err(malformed(
                position,
                format!(
                    "expected {} fields like the first edge, found {}",
                    arity,
                    edge.arity()
                ),
            ));
        }

        rows.push(decode_index(position, field_at(edge, 0, position)?)?);
        cols.push(decode_index(position, field_at(edge, 1, position)?)?);

        if weighted {
            weights.push(field_at(edge, 2, position)?);
        }
    }

    let values = if weighted {
        promote_weights(weights)
    } else {
        EdgeValues::Unweighted(rows.len())
    };

    debug!(
        "Decoded {} edges (kind={:?})",
        rows.len(),
        values.kind()
    );

    Ok(CooBuffers { rows, cols, values })
}

/// Validates one index field and narrows it to the index width
pub(crate) fn decode_index(position: usize, value: Field) -> Result<u32> {
    match value {
        Field::Int(v) => {
            if v < 0 {
                return Err(EdgeListError::NegativeIndex { position, value });
            }
            if v > MAX_INDEX as i64 {
                return Err(EdgeListError::IndexOverflow {
                    position,
                    value,
                    max: MAX_INDEX,
                });
            }
            Ok(v as u32)
        }
        Field::Real(v) => {
            if !v.is_finite() || v.fract() != 0.0 {
                return Err(malformed(
                    position,
                    format!("index {} is not an integer", v),
                ));
            }
            if v < 0.0 {
                return Err(EdgeListError::NegativeIndex { position, value });
            }
            if v > MAX_INDEX as f64 {
                return Err(EdgeListError::IndexOverflow {
                    position,
                    value,
                    max: MAX_INDEX,
                });
            }
            Ok(v as u32)
        }
    }
}

fn field_at<E: EdgeRecord>(edge: &E, idx: usize, position: usize) -> Result<Field> {
    edge.field(idx)
        .ok_or_else(|| malformed(position, format!("missing field {}", idx)))
}

/// Picks one value type for all weights: integer unless any weight is real
fn promote_weights(weights: Vec<Field>) -> EdgeValues {
    let integers: Option<Vec<i64>> = weights
        .iter()
        .map(|w| match *w {
            Field::Int(v) => Some(v),
            Field::Real(_) => None,
        })
        .collect();

    match integers {
        Some(values) => EdgeValues::Integer(values),
        None => EdgeValues::Real(
            weights
                .into_iter()
                .map(|w| match w {
                    Field::Int(v) => v as f64,
                    Field::Real(v) => v,
                })
                .collect(),
        ),
    }
}

fn malformed(position: usize, reason: String) -> EdgeListError {
    EdgeListError::MalformedEdge { position, reason }
}
