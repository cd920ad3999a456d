// Copyright 2025 the Quarry Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quarry Selection: the set of items an editor currently operates on.
//!
//! [`Selection`] is an unordered set of keys, unique by equality. Keys are
//! expected to be identity handles (for example `quarry_world::PointId`), so
//! two distinct items at the same position are never conflated.
//!
//! Besides the keys themselves the container tracks a **revision** counter
//! that bumps whenever the contents change. Renderers and inspectors can use
//! it as a cheap "did anything change?" marker.
//!
//! ## Minimal example
//!
//! ```rust
//! use quarry_selection::Selection;
//!
//! let mut selection = Selection::<u32>::new();
//!
//! // Plain click on item 7.
//! selection.clear();
//! selection.add(7);
//!
//! // Additive rectangle: merge in whatever the rectangle enclosed.
//! selection.extend_with([3, 7, 9]);
//! assert_eq!(selection.len(), 3);
//! assert!(selection.contains(&9));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// A set of selected keys plus a revision counter.
///
/// Keys live in a `Vec<T>`; uniqueness is enforced by scanning on insertion.
/// Iteration order is insertion order but carries no meaning. Enable the
/// `hashbrown` feature for [`Selection::extend_with_hashed`] when merging large
/// batches.
#[derive(Clone, Debug)]
pub struct Selection<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the selected keys.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the revision counter.
    ///
    /// Bumped only by mutations that change the contents; no-op calls leave
    /// it untouched.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> Selection<T>
where
    T: PartialEq,
{
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.items.iter().any(|k| k == key)
    }

    /// Adds `key`; returns `true` if it was not selected before.
    pub fn add(&mut self, key: T) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.items.push(key);
        self.bump_revision();
        true
    }

    /// Removes `key`; returns `true` if it was selected.
    pub fn remove(&mut self, key: &T) -> bool {
        match self.items.iter().position(|k| k == key) {
            Some(idx) => {
                self.items.swap_remove(idx);
                self.bump_revision();
                true
            }
            None => false,
        }
    }

    /// Adds every key from `keys` that is not already selected.
    ///
    /// Duplicates in the input are ignored. The revision bumps once if at
    /// least one key was added.
    ///
    /// De-duplication scans the current contents for each input key; see
    /// [`Selection::extend_with_hashed`] for large batches.
    pub fn extend_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.items.len();
        for key in keys {
            if !self.contains(&key) {
                self.items.push(key);
            }
        }
        if self.items.len() != before {
            self.bump_revision();
        }
    }

    /// Replaces the selection with `keys`, ignoring duplicates.
    pub fn replace_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut new_items: Vec<T> = Vec::new();
        for key in keys {
            if !new_items.contains(&key) {
                new_items.push(key);
            }
        }
        let unchanged = new_items.len() == self.items.len()
            && new_items.iter().all(|k| self.contains(k));
        if unchanged {
            return;
        }
        self.items = new_items;
        self.bump_revision();
    }
}

#[cfg(feature = "hashbrown")]
impl<T> Selection<T>
where
    T: core::hash::Hash + Eq + Clone,
{
    /// Hash-based variant of [`Selection::extend_with`].
    ///
    /// Linear in the size of the selection plus the input, at the cost of one
    /// temporary hash set of the current keys.
    pub fn extend_with_hashed<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        use hashbrown::HashSet;

        let mut seen: HashSet<T> = self.items.iter().cloned().collect();
        let before = self.items.len();
        for key in keys {
            if seen.insert(key.clone()) {
                self.items.push(key);
            }
        }
        if self.items.len() != before {
            self.bump_revision();
        }
    }
}
