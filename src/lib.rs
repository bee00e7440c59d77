//! Precomputed fixed-base tables for NIST P-256
//!
//! This crate builds the read-only lookup table that a P-256 implementation
//! uses to compute `k·G` for the fixed base point `G` without any point
//! doublings at multiplication time. The doublings are done once, here, and
//! stored in the table, so the multiplier is left with table lookups and
//! additions only.
//!
//! # Module overview
//!
//! - `field`
//!   Arithmetic in the P-256 base field. Elements are four 64-bit limbs kept
//!   in Montgomery form, with multiplication, squaring and inversion by
//!   Fermat's little theorem.
//!
//! - `curve`
//!   Jacobian and affine points, point doubling and addition, affine
//!   normalization, and the P-256 domain parameters as an explicit
//!   `CurveParameters` value.
//!
//! - `table`
//!   The table builder, the exact binary layout of the table (64-byte
//!   little-endian records in row-major order) with its decoder, and an
//!   emitter that renders the bytes as a Rust `const`.
//!
//! The `gen-p256-table` binary wraps `table` to write the standard table to
//! disk, either as Rust source or as a raw blob.
//!
//! # Example
//!
//! ```
//! use p256_precomputed::table::{build_p256, encode, TABLE_SIZE};
//!
//! let table = build_p256().unwrap();
//! let bytes = encode(&table);
//!
//! assert_eq!(bytes.len(), TABLE_SIZE);
//! ```
//!
//! # Design goals
//!
//! - Pure, deterministic construction: the same parameters always give the
//!   same bytes
//! - Curve parameters passed explicitly, never read from globals
//! - Value types with copy semantics for field elements and points
//! - An exact, documented byte layout that round-trips without loss
//!
//! The arithmetic is variable-time and meant for public data only. This
//! crate does not implement scalar multiplication with the table.

pub mod curve;
pub mod field;
pub mod table;
