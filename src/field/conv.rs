//! Conversions between `FieldElement` and natural integer representations
//!
//! A `FieldElement` is always held in Montgomery form. The conversions in
//! this module are the only places where values cross between that form and
//! the natural residue, so that no caller can mix the two by accident.
//!
//! Byte conversions use **big-endian** order, matching the usual encoding of
//! P-256 coordinates (SEC 1, FIPS 186-4).

use std::fmt::{Display, Formatter, Result};

use crate::field::FieldElement;
use crate::field::core::is_canonical;

/// Converts a `u64` into a field element.
///
/// Every `u64` is below `p`, so this conversion cannot fail.
impl From<u64> for FieldElement {
    fn from(value: u64) -> Self {
        FieldElement::from_natural([value, 0, 0, 0])
    }
}

/// Attempts to convert a 32-byte big-endian integer into a field element.
///
/// Fails if the integer is not strictly below `p`; non-canonical encodings
/// are rejected rather than reduced.
impl TryFrom<[u8; 32]> for FieldElement {
    type Error = ();

    fn try_from(value: [u8; 32]) -> std::result::Result<Self, Self::Error> {
        let mut limbs = [0u64; 4];

        for (limb, chunk) in limbs.iter_mut().zip(value.rchunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(chunk);
            *limb = u64::from_be_bytes(word);
        }

        if !is_canonical(&limbs) {
            return Err(());
        }

        Ok(FieldElement::from_natural(limbs))
    }
}

/// Converts a field element into its natural 32-byte big-endian encoding.
impl From<FieldElement> for [u8; 32] {
    fn from(value: FieldElement) -> Self {
        let mut out = [0u8; 32];

        for (chunk, limb) in out.rchunks_exact_mut(8).zip(value.to_natural().iter()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }

        out
    }
}

impl Display for FieldElement {
    /// Formats the natural value as 64 lowercase hexadecimal digits.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let bytes: [u8; 32] = (*self).into();

        for byte in bytes.iter() {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}
