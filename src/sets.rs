//! Sets of assignments identified by their integer ID

use bit_set::BitSet;
use delegate::delegate;
use itertools::Itertools;
use std::fmt;
use std::iter::FromIterator;

/// A subset of a universe, with efficient bitwise operations.
///
/// A SatSet is an abstraction over [BitSet], where each bit is the ID of an [assignment](crate::Assignment).
/// Membership only depends on this ID: union, intersection and differences are bitwise operations.
///
/// ```
/// use truthset::SatSet;
/// use std::iter::FromIterator;
///
/// let mut set = SatSet::from_iter([1, 3]);
/// set.union_with(&SatSet::from_iter([2, 3]));
/// assert_eq!(set.to_string(), "{1, 2, 3}");
///
/// let complement = set.complement(5);
/// assert_eq!(complement.iter().collect::<Vec<_>>(), vec![0, 4]);
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct SatSet {
    ids: BitSet,
}

impl SatSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// All IDs of a universe of the given size
    pub fn full(size: usize) -> Self {
        Self::from_iter(0..size)
    }

    /// The IDs of a universe of the given size which are not in this set
    pub fn complement(&self, size: usize) -> Self {
        let mut result = Self::full(size);
        result.difference_with(self);
        result
    }

    delegate! {
        to self.ids {
            pub fn insert(&mut self, id: usize) -> bool;
            pub fn contains(&self, id: usize) -> bool;
            pub fn len(&self) -> usize;
            pub fn is_empty(&self) -> bool;
        }
    }

    /// Add all IDs from the other set
    pub fn union_with(&mut self, other: &Self) {
        self.ids.union_with(&other.ids);
    }

    /// Retain only the IDs also included in the other set
    pub fn intersect_with(&mut self, other: &Self) {
        self.ids.intersect_with(&other.ids);
    }

    /// Remove all IDs from the other set
    pub fn difference_with(&mut self, other: &Self) {
        self.ids.difference_with(&other.ids);
    }

    /// Return true if the other set contains all IDs of this set
    pub fn is_subset(&self, other: &Self) -> bool {
        self.ids.is_subset(&other.ids)
    }

    /// Return true if the two sets have no common ID
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.ids.is_disjoint(&other.ids)
    }

    /// Iterate over the IDs in increasing order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.ids.iter()
    }
}

impl FromIterator<usize> for SatSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self {
            ids: BitSet::from_iter(iter),
        }
    }
}

impl Extend<usize> for SatSet {
    fn extend<T: IntoIterator<Item = usize>>(&mut self, iter: T) {
        self.ids.extend(iter);
    }
}

impl From<BitSet> for SatSet {
    fn from(ids: BitSet) -> Self {
        Self { ids }
    }
}

impl AsRef<BitSet> for SatSet {
    fn as_ref(&self) -> &BitSet {
        &self.ids
    }
}

impl fmt::Display for SatSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.ids.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;
    use std::iter::FromIterator;

    #[test]
    fn set_operations() {
        let a = SatSet::from_iter([1, 3, 5, 7]);
        let b = SatSet::from_iter([3, 4, 5]);

        let mut and = a.clone();
        and.intersect_with(&b);
        assert_eq!(and, SatSet::from_iter([3, 5]));

        let mut or = a.clone();
        or.union_with(&b);
        assert_eq!(or, SatSet::from_iter([1, 3, 4, 5, 7]));

        let mut diff = a.clone();
        diff.difference_with(&b);
        assert_eq!(diff, SatSet::from_iter([1, 7]));

        assert!(and.is_subset(&a));
        assert!(!a.is_subset(&b));
        assert!(diff.is_disjoint(&b));
    }

    #[test]
    fn complement_in_universe() {
        let a = SatSet::from_iter([0, 2]);
        let c = a.complement(4);
        assert_eq!(c, SatSet::from_iter([1, 3]));
        assert!(c.is_disjoint(&a));

        let mut all = c.clone();
        all.union_with(&a);
        assert_eq!(all, SatSet::full(4));
        assert_eq!(all.len(), 4);

        assert!(SatSet::full(0).is_empty());
        assert_eq!(SatSet::new().complement(1), SatSet::full(1));
    }
}
