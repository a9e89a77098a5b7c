use std::fmt::Display;

use itertools::Itertools;

/// The index of an item; items are numbered `0..num_items`.
pub type Item = usize;

/// A set of items stored as a bitmask.
///
/// The representation is canonical: two sets containing the same items are equal (and hash and
/// order identically) regardless of the order in which the items were added. Sets are ordered by
/// their bitmask, i.e. sets are compared starting from their highest item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemSet {
    mask: u64,
}

impl ItemSet {
    /// The maximum number of distinct items that an [`ItemSet`] can hold.
    pub const CAPACITY: usize = u64::BITS as usize;

    /// Creates the empty set.
    pub fn empty() -> Self {
        Self { mask: 0 }
    }

    /// Creates the set `{0, ..., num_items - 1}`.
    ///
    /// `num_items` must not exceed [`ItemSet::CAPACITY`].
    pub fn all(num_items: usize) -> Self {
        crate::fair_split_assert_simple!(num_items <= Self::CAPACITY);

        let mask = if num_items == Self::CAPACITY {
            u64::MAX
        } else {
            (1_u64 << num_items) - 1
        };
        Self { mask }
    }

    /// Returns a copy of this set to which `item` has been added.
    pub fn with(self, item: Item) -> Self {
        crate::fair_split_assert_simple!(item < Self::CAPACITY);
        Self {
            mask: self.mask | (1 << item),
        }
    }

    pub fn contains(&self, item: Item) -> bool {
        item < Self::CAPACITY && self.mask & (1 << item) != 0
    }

    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    pub fn union(self, other: ItemSet) -> Self {
        Self {
            mask: self.mask | other.mask,
        }
    }

    /// Returns the items of `self` which are not in `other`.
    pub fn difference(self, other: ItemSet) -> Self {
        Self {
            mask: self.mask & !other.mask,
        }
    }

    pub fn is_disjoint(&self, other: &ItemSet) -> bool {
        self.mask & other.mask == 0
    }

    /// Iterates over the items in increasing order.
    pub fn iter(&self) -> ItemSetIter {
        ItemSetIter {
            remaining: self.mask,
        }
    }
}

impl FromIterator<Item> for ItemSet {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        iter.into_iter().fold(ItemSet::empty(), ItemSet::with)
    }
}

impl IntoIterator for ItemSet {
    type Item = Item;
    type IntoIter = ItemSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for ItemSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.iter().join(", "))
    }
}

/// Iterator over the items of an [`ItemSet`], lowest item first.
#[derive(Clone, Copy, Debug)]
pub struct ItemSetIter {
    remaining: u64,
}

impl Iterator for ItemSetIter {
    type Item = Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let item = self.remaining.trailing_zeros() as usize;
        // Clear the lowest set bit
        self.remaining &= self.remaining - 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remaining.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for ItemSetIter {}
