//! Mask composition, membership and inversion properties

use proptest::prelude::*;

use bulkexpr::mask::Mask;

// =============================================================================
// Spec properties
// =============================================================================

#[test]
fn row_rule_alone_masks_cells() {
    let mask = Mask::rows(3, 3, vec![true, false, false]).unwrap();
    assert!(mask.is_masked(0, 2));
    assert!(!mask.is_masked(1, 1));
}

#[test]
fn column_rule_alone_masks_cells() {
    let mask = Mask::columns(3, 3, vec![false, true, false]).unwrap();
    assert!(mask.is_masked(1, 1));
    assert!(!mask.is_masked(1, 0));
}

#[test]
fn sparse_rule_membership() {
    let mask = Mask::sparse_elements(5, 5, &[1, 3], &[2, 4]).unwrap();
    assert!(mask.is_masked(1, 2));
    assert!(mask.is_masked(3, 4));
    assert!(!mask.is_masked(1, 4));
}

#[test]
fn sparse_rule_bounds_are_checked_at_construction() {
    assert!(Mask::sparse_elements(5, 5, &[5], &[0]).is_err());
    assert!(Mask::sparse_elements(5, 5, &[0], &[5]).is_err());
    assert!(Mask::sparse_elements(5, 5, &[4], &[4]).is_ok());
}

#[test]
fn unconfigured_rules_never_mask() {
    let mask = Mask::sparse_elements(4, 4, &[], &[]).unwrap();
    assert!(!mask.is_row_masked(0));
    assert!(!mask.is_column_masked(0));
    assert!(!mask.is_masked(2, 2));
}

#[test]
fn rules_compose_by_or() {
    let mask = Mask::rows(3, 3, vec![true, false, false])
        .unwrap()
        .and_columns(vec![false, true, false])
        .unwrap()
        .and_sparse_elements(&[2], &[2])
        .unwrap();

    assert!(mask.is_masked(0, 0)); // row rule
    assert!(mask.is_masked(2, 1)); // column rule
    assert!(mask.is_masked(2, 2)); // sparse rule
    assert!(!mask.is_masked(1, 0)); // no rule
}

#[test]
fn inversion_shares_backing_state_and_leaves_original_intact() {
    let mask = Mask::rows(2, 2, vec![true, false]).unwrap();
    let inverted = mask.inverted();

    assert!(mask.is_masked(0, 0));
    assert!(!inverted.is_masked(0, 0));
    assert!(inverted.is_masked(1, 1));

    // Double inversion behaves like the original.
    let back = inverted.inverted();
    for r in 0..2 {
        for c in 0..2 {
            assert_eq!(back.is_masked(r, c), mask.is_masked(r, c));
        }
    }
}

// =============================================================================
// Property-based coverage
// =============================================================================

/// Strategy producing one single-rule mask of each kind over a small grid
fn single_rule_mask() -> impl Strategy<Value = Mask> {
    let dims = (1usize..8, 1usize..8);
    dims.prop_flat_map(|(rows, cols)| {
        let row_rule = proptest::collection::vec(any::<bool>(), rows)
            .prop_map(move |f| Mask::rows(rows, cols, f).unwrap());
        let col_rule = proptest::collection::vec(any::<bool>(), cols)
            .prop_map(move |f| Mask::columns(rows, cols, f).unwrap());
        let dense_rule = proptest::collection::vec(
            proptest::collection::vec(any::<bool>(), cols),
            rows,
        )
        .prop_map(move |g| Mask::elements(rows, cols, g).unwrap());
        let sparse_rule = proptest::collection::vec((0..rows, 0..cols), 0..rows * cols)
            .prop_map(move |coords| {
                let (i, j): (Vec<usize>, Vec<usize>) = coords.into_iter().unzip();
                Mask::sparse_elements(rows, cols, &i, &j).unwrap()
            });
        prop_oneof![row_rule, col_rule, dense_rule, sparse_rule]
    })
}

proptest! {
    #[test]
    fn inversion_flips_every_coordinate(mask in single_rule_mask()) {
        let inverted = mask.inverted();
        for r in 0..mask.row_count() {
            for c in 0..mask.column_count() {
                prop_assert_ne!(mask.is_masked(r, c), inverted.is_masked(r, c));
            }
        }
    }

    #[test]
    fn row_and_column_queries_agree_with_cell_queries(
        (rows, cols) in (1usize..8, 1usize..8),
        seed in any::<u64>(),
    ) {
        let flags: Vec<bool> = (0..rows).map(|r| (seed >> (r % 64)) & 1 == 1).collect();
        let mask = Mask::rows(rows, cols, flags.clone()).unwrap();
        for (r, &flag) in flags.iter().enumerate() {
            prop_assert_eq!(mask.is_row_masked(r), flag);
            for c in 0..cols {
                prop_assert_eq!(mask.is_masked(r, c), flag);
            }
        }
    }
}
