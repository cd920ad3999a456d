// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `quarry_selection` crate.
//!
//! These exercise how contents and the revision counter interact across the
//! operations editors map pointer gestures onto.

use quarry_selection::Selection;

#[test]
fn empty_selection_basics() {
    let sel = Selection::<u32>::new();
    assert!(sel.is_empty());
    assert_eq!(sel.len(), 0);
    assert_eq!(sel.revision(), 0);
    assert_eq!(sel.iter().count(), 0);
}

#[test]
fn clear_bumps_revision_only_on_change() {
    let mut sel = Selection::new();
    sel.clear();
    assert_eq!(sel.revision(), 0);

    sel.add(1_u32);
    assert_eq!(sel.revision(), 1);

    sel.clear();
    assert!(sel.is_empty());
    assert_eq!(sel.revision(), 2);
}

#[test]
fn extend_with_merges_and_ignores_duplicates() {
    let mut sel = Selection::new();
    sel.extend_with([1_u32, 2]);
    let rev = sel.revision();

    sel.extend_with([2, 3, 3]);
    assert_eq!(sel.len(), 3);
    assert!(sel.contains(&1) && sel.contains(&2) && sel.contains(&3));
    assert_eq!(sel.revision(), rev + 1);

    // Nothing new: no revision bump.
    sel.extend_with([1, 3]);
    assert_eq!(sel.revision(), rev + 1);
}

#[test]
fn replace_with_swaps_contents_regardless_of_order() {
    let mut sel = Selection::new();
    sel.replace_with([1_u32, 2, 2, 3]);
    assert_eq!(sel.items(), &[1, 2, 3]);
    let rev = sel.revision();

    // Same set, different order: treated as unchanged.
    sel.replace_with([3, 1, 2]);
    assert_eq!(sel.revision(), rev);

    sel.replace_with([10, 11]);
    assert_eq!(sel.items(), &[10, 11]);
    assert!(sel.revision() > rev);
}
