//! Montgomery limb arithmetic for the P-256 base field.
//!
//! Multiplication uses the CIOS (coarsely integrated operand scanning)
//! Montgomery reduction over 64-bit words. Because the low limb of `p` is
//! `2⁶⁴ − 1`, the per-round reduction factor `−p⁻¹ mod 2⁶⁴` is simply `1`.

/// Add with carry: `a + b + carry` → `(sum, carry_out)`.
#[inline(always)]
const fn adc(a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = a as u128 + b as u128 + carry as u128;
    (t as u64, (t >> 64) as u64)
}

/// Subtract with borrow: `a − b − borrow` → `(difference, borrow_out)`.
///
/// `borrow` and `borrow_out` are `0` or `1`.
#[inline(always)]
const fn sbb(a: u64, b: u64, borrow: u64) -> (u64, u64) {
    let t = (a as u128).wrapping_sub(b as u128 + borrow as u128);
    (t as u64, (t >> 127) as u64)
}

/// Multiply-accumulate: `acc + a·b + carry` → `(low, high)`.
///
/// Cannot overflow: the maximum is exactly `2¹²⁸ − 1`.
#[inline(always)]
const fn mac(acc: u64, a: u64, b: u64, carry: u64) -> (u64, u64) {
    let t = acc as u128 + (a as u128 * b as u128) + carry as u128;
    (t as u64, (t >> 64) as u64)
}

/// Element of the P-256 base field, in Montgomery form.
///
/// Limbs are little-endian (least significant first) and always hold a
/// canonical value `< p`. The type is `Copy`: arithmetic never mutates its
/// operands.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldElement(pub(crate) [u64; 4]);

impl FieldElement {
    /// The prime modulus `p`, little-endian limbs.
    pub const MODULUS: [u64; 4] = [
        0xffff_ffff_ffff_ffff,
        0x0000_0000_ffff_ffff,
        0x0000_0000_0000_0000,
        0xffff_ffff_0000_0001,
    ];

    const MODULUS_MINUS_TWO: [u64; 4] = [
        0xffff_ffff_ffff_fffd,
        0x0000_0000_ffff_ffff,
        0x0000_0000_0000_0000,
        0xffff_ffff_0000_0001,
    ];

    /// `R² mod p`, used to enter Montgomery form.
    const R2: [u64; 4] = [
        0x0000_0000_0000_0003,
        0xffff_fffb_ffff_ffff,
        0xffff_ffff_ffff_fffe,
        0x0000_0004_ffff_fffd,
    ];

    /// `−p⁻¹ mod 2⁶⁴`.
    const INV: u64 = 1;

    /// The additive identity (0).
    pub const ZERO: Self = Self([0; 4]);

    /// The multiplicative identity (1), i.e. `R mod p`.
    pub const ONE: Self = Self([
        0x0000_0000_0000_0001,
        0xffff_ffff_0000_0000,
        0xffff_ffff_ffff_ffff,
        0x0000_0000_ffff_fffe,
    ]);

    /// Builds an element from Montgomery-form limbs.
    ///
    /// Returns `None` if the limbs do not encode a value strictly below `p`.
    pub fn from_montgomery_limbs(limbs: [u64; 4]) -> Option<Self> {
        if is_canonical(&limbs) {
            Some(Self(limbs))
        } else {
            None
        }
    }

    /// Returns the Montgomery-form limbs, least significant first.
    ///
    /// This is the representation stored in precomputed tables.
    pub const fn montgomery_limbs(&self) -> [u64; 4] {
        self.0
    }

    /// Converts natural little-endian limbs (`< p`) into Montgomery form.
    pub(crate) fn from_natural(limbs: [u64; 4]) -> Self {
        debug_assert!(is_canonical(&limbs), "natural limbs must be below p");
        Self(limbs).montgomery_mul(&Self(Self::R2))
    }

    /// Leaves Montgomery form, returning natural little-endian limbs.
    pub(crate) fn to_natural(self) -> [u64; 4] {
        self.montgomery_mul(&Self([1, 0, 0, 0])).0
    }

    /// Returns `true` if this is the additive identity.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&l| l == 0)
    }

    /// Returns `self²`.
    pub fn square(&self) -> Self {
        self.montgomery_mul(self)
    }

    /// Returns `2·self`.
    pub fn double(&self) -> Self {
        self.add_mod(self)
    }

    /// Computes the multiplicative inverse.
    ///
    /// Uses Fermat's little theorem, `a⁻¹ = a^(p−2)`, entirely in Montgomery
    /// form. Returns `None` for zero, which has no inverse.
    pub fn invert(&self) -> Option<Self> {
        if self.is_zero() {
            return None;
        }

        Some(self.pow(&Self::MODULUS_MINUS_TWO))
    }

    /// Left-to-right square-and-multiply over a little-endian exponent.
    fn pow(&self, exp: &[u64; 4]) -> Self {
        let mut acc = Self::ONE;

        for &limb in exp.iter().rev() {
            for bit in (0..64).rev() {
                acc = acc.square();

                if (limb >> bit) & 1 == 1 {
                    acc = acc.montgomery_mul(self);
                }
            }
        }

        acc
    }

    /// Computes `self · rhs · R⁻¹ mod p`.
    pub(crate) fn montgomery_mul(&self, rhs: &Self) -> Self {
        let mut t = [0u64; 4];
        let mut top = 0u64;

        for &a in self.0.iter() {
            let mut carry = 0u64;
            for (slot, &b) in t.iter_mut().zip(rhs.0.iter()) {
                (*slot, carry) = mac(*slot, a, b, carry);
            }
            let (high, overflow) = adc(top, carry, 0);

            let m = t[0].wrapping_mul(Self::INV);
            let (_, mut carry) = mac(t[0], m, Self::MODULUS[0], 0);
            for j in 1..4 {
                (t[j - 1], carry) = mac(t[j], m, Self::MODULUS[j], carry);
            }
            let (low, c) = adc(high, carry, 0);
            t[3] = low;
            top = overflow + c;
        }

        Self::reduce_once(t, top)
    }

    /// Computes `self + rhs mod p`.
    pub(crate) fn add_mod(&self, rhs: &Self) -> Self {
        let mut sum = [0u64; 4];
        let mut carry = 0u64;

        for (s, (&a, &b)) in sum.iter_mut().zip(self.0.iter().zip(rhs.0.iter())) {
            (*s, carry) = adc(a, b, carry);
        }

        Self::reduce_once(sum, carry)
    }

    /// Computes `self − rhs mod p`.
    pub(crate) fn sub_mod(&self, rhs: &Self) -> Self {
        let mut diff = [0u64; 4];
        let mut borrow = 0u64;

        for (d, (&a, &b)) in diff.iter_mut().zip(self.0.iter().zip(rhs.0.iter())) {
            (*d, borrow) = sbb(a, b, borrow);
        }

        if borrow == 1 {
            // Wraps past 2²⁵⁶ back into [0, p).
            let mut carry = 0u64;
            for (d, &m) in diff.iter_mut().zip(Self::MODULUS.iter()) {
                (*d, carry) = adc(*d, m, carry);
            }
        }

        Self(diff)
    }

    /// Reduces `top·2²⁵⁶ + t`, known to be `< 2p`, into `[0, p)`.
    fn reduce_once(t: [u64; 4], top: u64) -> Self {
        let mut reduced = [0u64; 4];
        let mut borrow = 0u64;

        for (r, (&v, &m)) in reduced.iter_mut().zip(t.iter().zip(Self::MODULUS.iter())) {
            (*r, borrow) = sbb(v, m, borrow);
        }

        if top == 0 && borrow == 1 {
            Self(t)
        } else {
            Self(reduced)
        }
    }
}

/// Returns `true` if the little-endian limbs encode a value strictly below `p`.
pub(crate) fn is_canonical(limbs: &[u64; 4]) -> bool {
    for (&l, &m) in limbs.iter().zip(FieldElement::MODULUS.iter()).rev() {
        if l < m {
            return true;
        }
        if l > m {
            return false;
        }
    }

    false
}
