use crate::curve::JacobianPoint;
use crate::field::FieldElement;

/// A curve point in affine coordinates `(x, y)`.
///
/// Both coordinates are kept in Montgomery form, exactly as they are laid
/// out in an encoded table. Affine points are obtained by normalizing a
/// [`JacobianPoint`] or by decoding a table.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct AffinePoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl AffinePoint {
    pub(crate) fn new(x: FieldElement, y: FieldElement) -> Self {
        Self { x, y }
    }

    /// The affine x coordinate.
    pub fn x(&self) -> FieldElement {
        self.x
    }

    /// The affine y coordinate.
    pub fn y(&self) -> FieldElement {
        self.y
    }
}

/// Lifts an affine point to Jacobian coordinates with `Z = 1`.
impl From<AffinePoint> for JacobianPoint {
    fn from(point: AffinePoint) -> Self {
        JacobianPoint::new(point.x, point.y, FieldElement::ONE)
    }
}
