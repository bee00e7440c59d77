#![allow(dead_code)]

use std::sync::OnceLock;

use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{ProjectivePoint, Scalar};

use p256_precomputed::curve::AffinePoint;
use p256_precomputed::table::{PrecomputedTable, build_p256};

/// Montgomery limbs of the P-256 base point, `G·R mod p`.
pub const GENERATOR_X_MONT: [u64; 4] = [
    0x79e730d418a9143c,
    0x75ba95fc5fedb601,
    0x79fb732b77622510,
    0x18905f76a53755c6,
];

pub const GENERATOR_Y_MONT: [u64; 4] = [
    0xddf25357ce95560a,
    0x8b4ab8e4ba19e45c,
    0xd2e88688dd21f325,
    0x8571ff1825885d85,
];

/// The standard table, built once per test binary.
pub fn standard_table() -> &'static PrecomputedTable {
    static TABLE: OnceLock<PrecomputedTable> = OnceLock::new();
    TABLE.get_or_init(|| build_p256().unwrap())
}

/// `2^(window·group) · (multiple+1)` as a P-256 scalar.
pub fn cell_scalar(window: u32, group: usize, multiple: usize) -> Scalar {
    Scalar::from(2u64).pow_vartime(&[window as u64 * group as u64])
        * Scalar::from(multiple as u64 + 1)
}

/// Natural big-endian affine coordinates of `scalar · G`, from the `p256` crate.
pub fn reference(scalar: Scalar) -> ([u8; 32], [u8; 32]) {
    let affine = (ProjectivePoint::GENERATOR * scalar).to_affine();
    let encoded = affine.to_encoded_point(false);

    let x: [u8; 32] = encoded.x().unwrap().as_slice().try_into().unwrap();
    let y: [u8; 32] = encoded.y().unwrap().as_slice().try_into().unwrap();

    (x, y)
}

/// Natural big-endian affine coordinates of a point from this crate.
pub fn natural(point: &AffinePoint) -> ([u8; 32], [u8; 32]) {
    (point.x().into(), point.y().into())
}

pub fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
