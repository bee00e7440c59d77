//! Fixed-base precomputed tables for P-256.
//!
//! This module builds, serializes and emits the lookup table used to speed
//! up `k·G` for the fixed base point `G`.
//!
//! The implementation is split into:
//!
//! - `params`
//!   Table shape (`window`, `groups`, `multiples`), its validation, and the
//!   constants of the standard 43 × 32 layout.
//!
//! - `core`
//!   The builder and the [`PrecomputedTable`] type. The builder is a pure
//!   function of the curve parameters and the table parameters.
//!
//! - `encode`
//!   The exact binary layout (64-byte little-endian records, row-major) and
//!   its inverse.
//!
//! - `emit`
//!   Renders an encoded table as a Rust `const` item, for embedding, or as
//!   the raw file the generator writes.
//!
//! ## Standard table
//!
//! ```text
//! window    = 6
//! groups    = 43      (6 × 43 = 258 ≥ 256 bits)
//! multiples = 32
//! size      = 43 × 32 × 64 = 88 064 bytes
//! ```
//!
//! ## Scope
//!
//! This module only produces the table. Walking it to multiply a scalar is
//! left to the consumer.

mod core;
mod emit;
mod encode;
mod params;

pub use self::core::{PrecomputedTable, TableError, build, build_p256};
pub use emit::{OutputFormat, RustConst, render};
pub use encode::{decode, encode};
pub use params::{
    GROUPS, MAX_WINDOW, MULTIPLES, RECORD_SIZE, TABLE_SIZE, TableParamError, TableParams, WINDOW,
};
