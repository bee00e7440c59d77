//! NIST P-256 group arithmetic.
//!
//! The curve is the short Weierstrass curve
//!
//! ```text
//! y² = x³ − 3·x + b
//! ```
//!
//! over the field implemented in [`crate::field`].
//!
//! ## Coordinate systems
//!
//! - **JacobianPoint**: `(X : Y : Z)` with `x = X/Z²`, `y = Y/Z³`
//!   - Working representation for doubling and addition
//!   - No inversions until normalization
//!   - The identity is any triple with `Z = 0`
//!
//! - **AffinePoint**: `(x, y)`
//!   - Normalized form stored in precomputed tables
//!   - Never the identity
//!
//! Both are plain `Copy` values. Copying a `JacobianPoint` produces an
//! independent point, so a working copy can be doubled without disturbing
//! the point it was taken from.
//!
//! ## Domain parameters
//!
//! [`CurveParameters`] carries the modulus, the coefficient `b`, the base
//! point and the group order. It is passed explicitly to everything that
//! needs it; nothing in this crate reads curve constants from a global.

mod affine;
mod jacobian;
mod params;

pub use affine::AffinePoint;
pub use jacobian::JacobianPoint;
pub use params::CurveParameters;
