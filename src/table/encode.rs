//! Binary encoding of precomputed tables.
//!
//! ## Layout
//!
//! ```text
//! record(i, j) = x₀ x₁ x₂ x₃ y₀ y₁ y₂ y₃      (8 × u64, little-endian)
//! table        = record(0, 0) … record(0, M−1)
//!                record(1, 0) … record(G−1, M−1)
//! ```
//!
//! Coordinates are written in Montgomery form, least significant limb first,
//! each limb as 8 little-endian bytes. Every record is 64 bytes. Records go
//! in row-major order over `(group, multiple)`. There is no header or
//! padding, and no length prefix: the reader must know the parameters.
//!
//! This is the layout a little-endian fixed-base multiplier expects to read
//! directly out of a static byte array.

use crate::curve::AffinePoint;
use crate::field::FieldElement;
use crate::table::core::{PrecomputedTable, TableError};
use crate::table::params::{RECORD_SIZE, TableParams};

/// Serializes a table into its flat binary layout.
///
/// The output is exactly `table.params().encoded_len()` bytes long.
pub fn encode(table: &PrecomputedTable) -> Vec<u8> {
    let mut out = Vec::with_capacity(table.params().encoded_len());

    for point in table.points() {
        let x = point.x().montgomery_limbs();
        let y = point.y().montgomery_limbs();

        for limb in x.iter().chain(y.iter()) {
            out.extend_from_slice(&limb.to_le_bytes());
        }
    }

    out
}

/// Parses a table from its flat binary layout.
///
/// # Errors
///
/// Returns an error if:
/// - `params` fails validation
/// - `bytes` is not exactly `params.encoded_len()` long
/// - any coordinate is not a canonical field element (`≥ p`)
pub fn decode(bytes: &[u8], params: &TableParams) -> Result<PrecomputedTable, TableError> {
    params.validate()?;

    let expected = params.encoded_len();
    if bytes.len() != expected {
        return Err(TableError::InvalidLength {
            expected,
            actual: bytes.len(),
        });
    }

    let mut points = Vec::with_capacity(params.cells());

    for (index, record) in bytes.chunks_exact(RECORD_SIZE).enumerate() {
        let (x, y) = record.split_at(RECORD_SIZE / 2);

        match (read_coordinate(x), read_coordinate(y)) {
            (Some(x), Some(y)) => points.push(AffinePoint::new(x, y)),
            _ => {
                return Err(TableError::NonCanonical {
                    group: index / params.multiples,
                    multiple: index % params.multiples,
                });
            }
        }
    }

    Ok(PrecomputedTable::from_points(*params, points))
}

/// Reads four little-endian limbs as a Montgomery-form coordinate.
fn read_coordinate(bytes: &[u8]) -> Option<FieldElement> {
    let mut limbs = [0u64; 4];

    for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
        let mut word = [0u8; 8];
        word.copy_from_slice(chunk);
        *limb = u64::from_le_bytes(word);
    }

    FieldElement::from_montgomery_limbs(limbs)
}
