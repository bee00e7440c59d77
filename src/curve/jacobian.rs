//! Jacobian point arithmetic on P-256.
//!
//! A point `(X : Y : Z)` stands for the affine point `(X/Z², Y/Z³)`. Doubling
//! and addition stay in these coordinates and need no field inversion; the
//! single inversion happens in [`JacobianPoint::to_affine`].
//!
//! ## Formulas
//!
//! - Doubling: `dbl-2001-b` (Bernstein–Lange), specialised to `a = −3`
//! - Addition: `add-2007-bl` (Bernstein–Lange), general `Z₁, Z₂`
//!
//! Addition detects the exceptional inputs of `add-2007-bl` (an identity
//! operand, `P + P`, `P + (−P)`) and handles them explicitly.

use std::ops::{Add, AddAssign, Neg};

use crate::curve::AffinePoint;
use crate::field::FieldElement;

/// A curve point in Jacobian projective coordinates.
#[derive(Copy, Clone, Debug)]
pub struct JacobianPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
    pub(crate) z: FieldElement,
}

impl JacobianPoint {
    /// The point at infinity.
    pub const IDENTITY: Self = Self {
        x: FieldElement::ONE,
        y: FieldElement::ONE,
        z: FieldElement::ZERO,
    };

    /// Builds a point from its three Jacobian coordinates.
    pub fn new(x: FieldElement, y: FieldElement, z: FieldElement) -> Self {
        Self { x, y, z }
    }

    pub fn x(&self) -> FieldElement {
        self.x
    }

    pub fn y(&self) -> FieldElement {
        self.y
    }

    pub fn z(&self) -> FieldElement {
        self.z
    }

    /// Returns `true` for the point at infinity.
    pub fn is_identity(&self) -> bool {
        self.z.is_zero()
    }

    /// Returns `2·self`.
    ///
    /// The identity, and points with `Y = 0`, double to the identity.
    pub fn double(&self) -> Self {
        let delta = self.z.square();
        let gamma = self.y.square();
        let beta = self.x * gamma;

        // 3·X² − 3·Z⁴ = 3·(X − Z²)·(X + Z²)
        let t = (self.x - delta) * (self.x + delta);
        let alpha = t.double() + t;

        let beta4 = beta.double().double();
        let x3 = alpha.square() - beta4.double();
        let z3 = (self.y + self.z).square() - gamma - delta;

        let gamma_sq8 = gamma.square().double().double().double();
        let y3 = alpha * (beta4 - x3) - gamma_sq8;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Computes `self + rhs`.
    fn add_point(&self, rhs: &Self) -> Self {
        if self.is_identity() {
            return *rhs;
        }
        if rhs.is_identity() {
            return *self;
        }

        let z1z1 = self.z.square();
        let z2z2 = rhs.z.square();
        let u1 = self.x * z2z2;
        let u2 = rhs.x * z1z1;
        let s1 = self.y * rhs.z * z2z2;
        let s2 = rhs.y * self.z * z1z1;

        let h = u2 - u1;
        let r = (s2 - s1).double();

        if h.is_zero() {
            return if r.is_zero() {
                self.double()
            } else {
                Self::IDENTITY
            };
        }

        let i = h.double().square();
        let j = h * i;
        let v = u1 * i;

        let x3 = r.square() - j - v.double();
        let y3 = r * (v - x3) - (s1 * j).double();
        let z3 = ((self.z + rhs.z).square() - z1z1 - z2z2) * h;

        Self {
            x: x3,
            y: y3,
            z: z3,
        }
    }

    /// Normalizes the point to affine coordinates.
    ///
    /// Computes `z⁻¹` once, then `x = X·z⁻²` and `y = Y·z⁻³`. The result
    /// stays in Montgomery form.
    ///
    /// Returns `None` for the identity, whose `Z` has no inverse.
    pub fn to_affine(&self) -> Option<AffinePoint> {
        let z_inv = self.z.invert()?;
        let z_inv_sq = z_inv.square();

        let x = self.x * z_inv_sq;
        let y = self.y * z_inv * z_inv_sq;

        Some(AffinePoint::new(x, y))
    }
}

impl Add for JacobianPoint {
    type Output = JacobianPoint;

    fn add(self, rhs: JacobianPoint) -> Self::Output {
        self.add_point(&rhs)
    }
}

impl AddAssign for JacobianPoint {
    fn add_assign(&mut self, rhs: JacobianPoint) {
        *self = self.add_point(&rhs);
    }
}

impl Neg for JacobianPoint {
    type Output = JacobianPoint;

    fn neg(self) -> Self::Output {
        Self {
            x: self.x,
            y: -self.y,
            z: self.z,
        }
    }
}

impl PartialEq for JacobianPoint {
    /// Compares the represented points, not the raw coordinates.
    fn eq(&self, other: &Self) -> bool {
        match (self.is_identity(), other.is_identity()) {
            (true, true) => return true,
            (true, false) | (false, true) => return false,
            (false, false) => {}
        }

        let z1z1 = self.z.square();
        let z2z2 = other.z.square();

        self.x * z2z2 == other.x * z1z1
            && self.y * z2z2 * other.z == other.y * z1z1 * self.z
    }
}

impl Eq for JacobianPoint {}
