//! Fixed-base table construction.
//!
//! This module builds a [`PrecomputedTable`] for a base point `G`. Cell
//! `(i, j)` holds
//!
//! ```text
//! table[i][j] = affine( 2^(w·i) · (j+1) · G )
//! ```
//!
//! where `w` is the window. A fixed-base multiplier can then compute `k·G`
//! with one lookup and one addition per `w`-bit window of `k`. It does no
//! doublings at run time.
//!
//! ## Construction order
//!
//! Columns are built one at a time. An accumulator holds `(j+1)·G` for the
//! current column. A working copy of it, the cursor, is doubled `w` times
//! between rows and normalized into each cell. The accumulator itself is
//! only ever advanced by adding `G`. If it were doubled along with the
//! cursor, every later column would be wrong.

use std::fmt;
use std::ops::Index;

use crate::curve::{AffinePoint, CurveParameters};
use crate::table::params::{TableParamError, TableParams};

/// A grid of affine multiples of a fixed base point.
///
/// Cells are stored row-major: all multiples of group 0, then group 1, and
/// so on. This is also the order of the encoded form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrecomputedTable {
    params: TableParams,
    points: Vec<AffinePoint>,
}

/// Errors that may occur while building or decoding a table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The table parameters are invalid.
    InvalidParams(TableParamError),

    /// Normalizing cell `(group, multiple)` required inverting zero.
    ///
    /// The point at that cell is the identity, so the base point is not of
    /// large order. The build is aborted.
    InversionOfZero { group: usize, multiple: usize },

    /// An encoded table does not have the length its parameters imply.
    InvalidLength { expected: usize, actual: usize },

    /// A coordinate of cell `(group, multiple)` is not below the modulus.
    NonCanonical { group: usize, multiple: usize },

    /// The name given for a generated constant is not a Rust identifier.
    InvalidName,
}

impl PrecomputedTable {
    pub(crate) fn from_points(params: TableParams, points: Vec<AffinePoint>) -> Self {
        debug_assert_eq!(points.len(), params.cells());
        Self { params, points }
    }

    /// The parameters this table was built with.
    pub fn params(&self) -> &TableParams {
        &self.params
    }

    /// Returns cell `(group, multiple)`, or `None` if out of range.
    pub fn get(&self, group: usize, multiple: usize) -> Option<&AffinePoint> {
        if group >= self.params.groups || multiple >= self.params.multiples {
            return None;
        }

        self.points.get(group * self.params.multiples + multiple)
    }

    /// Returns all multiples of one group, or `None` if out of range.
    pub fn group(&self, group: usize) -> Option<&[AffinePoint]> {
        let start = group.checked_mul(self.params.multiples)?;
        let end = start.checked_add(self.params.multiples)?;

        self.points.get(start..end)
    }

    /// All cells in row-major order.
    pub fn points(&self) -> &[AffinePoint] {
        &self.points
    }
}

impl Index<(usize, usize)> for PrecomputedTable {
    type Output = AffinePoint;

    /// # Panics
    ///
    /// Panics if either index is out of range.
    fn index(&self, (group, multiple): (usize, usize)) -> &Self::Output {
        match self.get(group, multiple) {
            Some(point) => point,
            None => panic!(
                "table index ({}, {}) out of range for {}x{} table",
                group, multiple, self.params.groups, self.params.multiples
            ),
        }
    }
}

/// Builds a fixed-base table for `curve.generator`.
///
/// # Errors
///
/// Returns an error if:
/// - `params` fails validation
/// - a cell turns out to be the identity, which only happens when the base
///   point has small order
///
/// No partial table is ever returned.
pub fn build(
    curve: &CurveParameters,
    params: &TableParams,
) -> Result<PrecomputedTable, TableError> {
    params.validate()?;

    let base = curve.generator;
    let mut points = vec![AffinePoint::default(); params.cells()];
    let mut acc = base;

    for multiple in 0..params.multiples {
        let mut cursor = acc;

        for group in 0..params.groups {
            if group > 0 {
                for _ in 0..params.window {
                    cursor = cursor.double();
                }
            }

            let point = cursor
                .to_affine()
                .ok_or(TableError::InversionOfZero { group, multiple })?;

            debug_assert!(curve.contains(&point), "table point is not on the curve");

            points[group * params.multiples + multiple] = point;
        }

        acc = if multiple == 0 { base.double() } else { acc + base };
    }

    Ok(PrecomputedTable::from_points(*params, points))
}

/// Builds the standard 43 × 32 table for the P-256 base point.
pub fn build_p256() -> Result<PrecomputedTable, TableError> {
    build(&CurveParameters::p256(), &TableParams::default())
}

impl From<TableParamError> for TableError {
    fn from(err: TableParamError) -> Self {
        TableError::InvalidParams(err)
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidParams(err) => write!(f, "invalid table parameters: {}", err),
            TableError::InversionOfZero { group, multiple } => write!(
                f,
                "cell ({}, {}) is the point at infinity and cannot be normalized",
                group, multiple
            ),
            TableError::InvalidLength { expected, actual } => write!(
                f,
                "encoded table is {} bytes, expected {}",
                actual, expected
            ),
            TableError::NonCanonical { group, multiple } => write!(
                f,
                "cell ({}, {}) has a coordinate outside the field",
                group, multiple
            ),
            TableError::InvalidName => write!(f, "constant name is not a valid Rust identifier"),
        }
    }
}

impl std::error::Error for TableError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TableError::InvalidParams(err) => Some(err),
            _ => None,
        }
    }
}
