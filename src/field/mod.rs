//! Base field arithmetic for NIST P-256.
//!
//! This module implements arithmetic in the prime field
//!
//! ```text
//! 𝔽ₚ where p = 2²⁵⁶ − 2²²⁴ + 2¹⁹² + 2⁹⁶ − 1
//! ```
//!
//! over which the P-256 curve is defined.
//!
//! ## Representation
//!
//! Field elements are stored as four 64-bit limbs, least significant limb
//! first, and are kept in **Montgomery form** at all times:
//!
//! ```text
//! ã = a · R mod p,   R = 2²⁵⁶
//! ```
//!
//! Every value is fully reduced (`ã < p`), so two elements are equal exactly
//! when their limbs are equal. The natural (non-Montgomery) value is only
//! visible through the explicit conversions in `conv`.
//!
//! ## Implemented operations
//!
//! - Addition, subtraction, negation, doubling
//! - Montgomery multiplication and squaring
//! - Inversion via Fermat's little theorem (`a^(p−2)`)
//! - Conversions to and from natural big-endian bytes and `u64`
//!
//! ## Notes
//!
//! The arithmetic here is **variable-time**. It is meant for building public
//! precomputed tables from public constants and must not be fed secrets.

mod conv;
mod core;
mod ops;

pub use self::core::FieldElement;
