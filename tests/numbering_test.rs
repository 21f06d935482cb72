//! Display numbering invariants of the violation list.

mod common;

use common::record;
use drc_review::units::mil;
use drc_review::view::list::{ListError, ViolationListModel};
use proptest::prelude::*;

#[test]
fn test_kth_append_shows_number_k() {
    let mut model = ViolationListModel::new();
    for k in 1..=10u32 {
        let row = model.append(&record(&format!("violation {}", k), "", None, mil(10), &[]));
        assert_eq!(model.number_of(row).unwrap(), Some(k));
    }
}

#[test]
fn test_reset_restarts_at_one() {
    let mut model = ViolationListModel::new();
    model.append(&record("a", "", None, mil(10), &[]));
    model.append(&record("b", "", None, mil(10), &[]));
    model.reset();
    assert_eq!(model.len(), 0);
    let row = model.append(&record("c", "", None, mil(10), &[]));
    assert_eq!(model.number_of(row).unwrap(), Some(1));
}

#[test]
fn test_out_of_range_row_is_an_error() {
    let mut model = ViolationListModel::new();
    model.append(&record("a", "", None, mil(10), &[]));
    assert_eq!(model.get(1).unwrap_err(), ListError::IndexOutOfRange(1));
    assert!(model.get(0).unwrap().is_some());
}

proptest! {
    /// For any interleaving of leaf appends and group headers, the Kth
    /// leaf appended since the last reset exposes display number K, and
    /// headers never consume a number.
    #[test]
    fn prop_leaf_numbers_are_dense(ops in proptest::collection::vec(any::<bool>(), 1..64)) {
        let mut model = ViolationListModel::new();
        let mut expected = 0u32;
        for (i, is_leaf) in ops.iter().enumerate() {
            if *is_leaf {
                expected += 1;
                let row = model.append(&record(&format!("v{}", i), "", None, mil(10), &[]));
                prop_assert_eq!(model.number_of(row).unwrap(), Some(expected));
            } else {
                let row = model.append_group("cluster");
                prop_assert_eq!(model.number_of(row).unwrap(), None);
            }
        }
        prop_assert_eq!(model.len(), ops.len());
        prop_assert_eq!(model.entries().count() as u32, expected);
    }
}
