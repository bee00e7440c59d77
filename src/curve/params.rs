//! Domain parameters for NIST P-256.
//!
//! Values are taken from FIPS 186-4, appendix D.1.2.3, and stored as natural
//! little-endian 64-bit limbs. They are converted to Montgomery form when a
//! [`CurveParameters`] value is built.

use crate::curve::{AffinePoint, JacobianPoint};
use crate::field::FieldElement;

const B: [u64; 4] = [
    0x3bce_3c3e_27d2_604b,
    0x651d_06b0_cc53_b0f6,
    0xb3eb_bd55_7698_86bc,
    0x5ac6_35d8_aa3a_93e7,
];

const GENERATOR_X: [u64; 4] = [
    0xf4a1_3945_d898_c296,
    0x7703_7d81_2deb_33a0,
    0xf8bc_e6e5_63a4_40f2,
    0x6b17_d1f2_e12c_4247,
];

const GENERATOR_Y: [u64; 4] = [
    0xcbb6_4068_37bf_51f5,
    0x2bce_3357_6b31_5ece,
    0x8ee7_eb4a_7c0f_9e16,
    0x4fe3_42e2_fe1a_7f9b,
];

const ORDER: [u64; 4] = [
    0xf3b9_cac2_fc63_2551,
    0xbce6_faad_a717_9e84,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_0000_0000,
];

/// Curve domain parameters.
///
/// Passed explicitly to the table builder. All fields are public so that a
/// caller can swap in a different base point on the same curve, for example
/// to build a table for a fixed public key instead of `G`.
#[derive(Copy, Clone, Debug)]
pub struct CurveParameters {
    /// Prime modulus `p`, natural little-endian limbs.
    pub modulus: [u64; 4],
    /// Curve coefficient `b`, Montgomery form.
    pub b: FieldElement,
    /// Base point, Jacobian coordinates in Montgomery form.
    pub generator: JacobianPoint,
    /// Order of the base point, natural little-endian limbs.
    ///
    /// Informational only: table construction never reduces by it.
    pub order: [u64; 4],
}

impl CurveParameters {
    /// Returns the standard P-256 parameters with the FIPS base point `G`.
    pub fn p256() -> Self {
        Self {
            modulus: FieldElement::MODULUS,
            b: FieldElement::from_natural(B),
            generator: JacobianPoint::new(
                FieldElement::from_natural(GENERATOR_X),
                FieldElement::from_natural(GENERATOR_Y),
                FieldElement::ONE,
            ),
            order: ORDER,
        }
    }

    /// Returns `true` if `point` satisfies `y² = x³ − 3·x + b`.
    pub fn contains(&self, point: &AffinePoint) -> bool {
        let x = point.x;
        let x3 = x.square() * x;
        let rhs = x3 - (x.double() + x) + self.b;

        point.y.square() == rhs
    }
}

impl Default for CurveParameters {
    fn default() -> Self {
        Self::p256()
    }
}
