mod common;

use p256::Scalar;
use sha2::{Digest, Sha256};

use p256_precomputed::curve::{CurveParameters, JacobianPoint};
use p256_precomputed::table::{
    GROUPS, MULTIPLES, TABLE_SIZE, TableError, TableParamError, TableParams, WINDOW, build,
    build_p256, encode,
};

fn params(window: u32, groups: usize, multiples: usize) -> TableParams {
    TableParams {
        window,
        groups,
        multiples,
    }
}

#[test]
fn default_params_are_standard_layout() {
    let p = TableParams::default();

    assert_eq!(p, params(WINDOW, GROUPS, MULTIPLES));
    assert_eq!(p.cells(), 1376);
    assert_eq!(p.encoded_len(), 88064);
    assert_eq!(p.encoded_len(), TABLE_SIZE);
    assert_eq!(p.covered_bits(), 258);
    assert!(p.validate().is_ok());
}

#[test]
fn validate_rejects_bad_params() {
    assert_eq!(params(0, 1, 1).validate(), Err(TableParamError::ZeroWindow));
    assert_eq!(params(17, 1, 1).validate(), Err(TableParamError::WindowTooLarge));
    assert_eq!(params(6, 0, 1).validate(), Err(TableParamError::ZeroGroups));
    assert_eq!(params(6, 1, 0).validate(), Err(TableParamError::ZeroMultiples));
    assert_eq!(params(2, 1, 5).validate(), Err(TableParamError::TooManyMultiples));

    assert!(params(2, 1, 4).validate().is_ok());
    assert!(params(16, 1, 1).validate().is_ok());
}

#[test]
fn validate_rejects_oversized_tables() {
    // 2^57 records of 64 bytes is one past isize::MAX.
    let groups = isize::MAX as usize / 64 + 1;

    assert_eq!(params(6, groups, 1).validate(), Err(TableParamError::TooLarge));
    assert_eq!(params(6, usize::MAX, 32).validate(), Err(TableParamError::TooLarge));
    assert!(params(6, groups - 1, 1).validate().is_ok());

    let p = params(6, usize::MAX, 32);
    assert_eq!(p.cells(), usize::MAX);
    assert_eq!(p.encoded_len(), usize::MAX);
    assert_eq!(p.covered_bits(), usize::MAX);
}

#[test]
fn build_rejects_oversized_tables() {
    let err = build(&CurveParameters::p256(), &params(6, usize::MAX / 64 + 1, 1)).unwrap_err();

    assert_eq!(err, TableError::InvalidParams(TableParamError::TooLarge));
}

#[test]
fn build_rejects_bad_params() {
    let curve = CurveParameters::p256();
    let err = build(&curve, &params(6, 0, 32)).unwrap_err();

    assert_eq!(err, TableError::InvalidParams(TableParamError::ZeroGroups));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn standard_table_shape() {
    let table = common::standard_table();

    assert_eq!(table.params(), &TableParams::default());
    assert_eq!(table.points().len(), GROUPS * MULTIPLES);

    assert!(table.get(GROUPS - 1, MULTIPLES - 1).is_some());
    assert!(table.get(GROUPS, 0).is_none());
    assert!(table.get(0, MULTIPLES).is_none());

    assert_eq!(table.group(0).unwrap().len(), MULTIPLES);
    assert_eq!(table.group(GROUPS - 1).unwrap().len(), MULTIPLES);
    assert!(table.group(GROUPS).is_none());
    assert!(table.group(usize::MAX).is_none());
}

#[test]
fn group_slices_match_cells() {
    let table = common::standard_table();
    let row = table.group(5).unwrap();

    for (j, point) in row.iter().enumerate() {
        assert_eq!(point, &table[(5, j)]);
    }
}

#[test]
#[should_panic(expected = "out of range")]
fn index_out_of_range_panics() {
    let table = common::standard_table();
    let _cell = table[(GROUPS, 0)];
}

#[test]
fn first_cell_is_generator() {
    let table = common::standard_table();
    let cell = table[(0, 0)];

    assert_eq!(cell.x().montgomery_limbs(), common::GENERATOR_X_MONT);
    assert_eq!(cell.y().montgomery_limbs(), common::GENERATOR_Y_MONT);
}

#[test]
fn known_cells() {
    let table = common::standard_table();

    // (0, 31) = 32·G
    assert_eq!(
        common::natural(&table[(0, 31)]),
        common::reference(Scalar::from(32u64))
    );

    // (1, 0) = 64·G
    assert_eq!(
        table[(1, 0)].x().montgomery_limbs(),
        [
            0xdb6d96f305968b80,
            0x380a0913089f73b9,
            0x7da70b83c2c61e01,
            0x95fb8394569b38c7,
        ]
    );
    assert_eq!(
        common::natural(&table[(1, 0)]),
        common::reference(Scalar::from(64u64))
    );
}

#[test]
fn every_cell_matches_reference() {
    let table = common::standard_table();

    for group in 0..GROUPS {
        for multiple in 0..MULTIPLES {
            let expected = common::reference(common::cell_scalar(WINDOW, group, multiple));
            assert_eq!(
                common::natural(&table[(group, multiple)]),
                expected,
                "cell ({}, {})",
                group,
                multiple
            );
        }
    }
}

#[test]
fn every_cell_is_on_curve() {
    let curve = CurveParameters::p256();

    for point in common::standard_table().points() {
        assert!(curve.contains(point));
    }
}

#[test]
fn rows_are_window_doublings_apart() {
    let table = common::standard_table();

    for group in [0, 1, 20, GROUPS - 2] {
        for multiple in [0, 7, MULTIPLES - 1] {
            let mut p = JacobianPoint::from(table[(group, multiple)]);
            for _ in 0..WINDOW {
                p = p.double();
            }

            assert_eq!(p.to_affine().unwrap(), table[(group + 1, multiple)]);
        }
    }
}

#[test]
fn columns_step_by_first_column() {
    let table = common::standard_table();

    for group in [0, 13, GROUPS - 1] {
        let step = JacobianPoint::from(table[(group, 0)]);

        for multiple in 0..MULTIPLES - 1 {
            let next = JacobianPoint::from(table[(group, multiple)]) + step;
            assert_eq!(next.to_affine().unwrap(), table[(group, multiple + 1)]);
        }
    }
}

#[test]
fn build_is_deterministic() {
    let a = encode(&build_p256().unwrap());
    let b = encode(common::standard_table());

    assert_eq!(Sha256::digest(&a), Sha256::digest(&b));
    assert_eq!(
        common::hex(&Sha256::digest(&a)),
        "a3a5d08c40939adb7c0e9e4f5b689721296130750ab4e38fe4543294c8dbbfe3"
    );
}

#[test]
fn default_curve_and_params_give_standard_table() {
    let table = build(&CurveParameters::default(), &TableParams::default()).unwrap();

    assert_eq!(&table, common::standard_table());
}

#[test]
fn alternate_base_point() {
    let mut curve = CurveParameters::p256();
    let g = curve.generator;
    curve.generator = g.double() + g;

    let p = params(2, 3, 4);
    let table = build(&curve, &p).unwrap();

    assert_eq!(table.points().len(), 12);

    for group in 0..3 {
        for multiple in 0..4 {
            let scalar = common::cell_scalar(2, group, multiple) * Scalar::from(3u64);
            assert_eq!(
                common::natural(&table[(group, multiple)]),
                common::reference(scalar),
                "cell ({}, {})",
                group,
                multiple
            );
        }
    }
}

#[test]
fn base_point_in_non_normalized_form() {
    // Same point as G, with Z ≠ 1.
    let mut curve = CurveParameters::p256();
    let g = curve.generator;
    curve.generator = (g.double() + g) + -g.double();

    let p = params(3, 4, 8);
    let table = build(&curve, &p).unwrap();
    let expected = build(&CurveParameters::p256(), &p).unwrap();

    assert_eq!(table, expected);
}

#[test]
fn single_cell_table() {
    let table = build(&CurveParameters::p256(), &params(1, 1, 1)).unwrap();

    assert_eq!(table.points().len(), 1);
    assert_eq!(
        table[(0, 0)].x().montgomery_limbs(),
        common::GENERATOR_X_MONT
    );
}

#[test]
fn identity_base_point_fails() {
    let mut curve = CurveParameters::p256();
    curve.generator = JacobianPoint::IDENTITY;

    let err = build(&curve, &params(6, 2, 2)).unwrap_err();

    assert_eq!(
        err,
        TableError::InversionOfZero {
            group: 0,
            multiple: 0
        }
    );
    assert!(err.to_string().contains("(0, 0)"));
}
