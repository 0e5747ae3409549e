//! Stable value-to-index assignment for contingency rows and columns.

use indexmap::IndexSet;
use std::hash::Hash;

/// Bidirectional map between distinct observed values and matrix indices.
///
/// Indices are dense (`0..len`) and assigned in insertion order unless the
/// index is explicitly re-sorted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryIndex<T: Hash + Eq> {
    values: IndexSet<T>,
}

impl<T: Hash + Eq> CategoryIndex<T> {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            values: IndexSet::new(),
        }
    }

    /// Create an index from values in first-occurrence order.
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// Insert a value, returning its index. Existing values keep their index.
    pub fn insert(&mut self, value: T) -> usize {
        self.values.insert_full(value).0
    }

    /// Index assigned to `value`, if it was observed.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.values.get_index_of(value)
    }

    /// Value stored at `index`.
    pub fn value_at(&self, index: usize) -> Option<&T> {
        self.values.get_index(index)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no value has been inserted.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in index order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.values.iter()
    }

    /// Check whether `value` was observed.
    pub fn contains(&self, value: &T) -> bool {
        self.values.contains(value)
    }
}

impl<T: Hash + Eq + Ord> CategoryIndex<T> {
    /// Re-sort the index by value.
    ///
    /// Returns the sorted index and a remapping table where `remap[old] == new`.
    pub fn into_sorted(mut self) -> (Self, Vec<usize>) {
        let mut order: Vec<usize> = (0..self.values.len()).collect();
        order.sort_by(|&a, &b| self.values[a].cmp(&self.values[b]));

        let mut remap = vec![0; order.len()];
        for (new, &old) in order.iter().enumerate() {
            remap[old] = new;
        }

        // Values are distinct, so the stable sort reproduces `order` exactly.
        self.values.sort();
        (self, remap)
    }
}

impl<T: Hash + Eq> Default for CategoryIndex<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Hash + Eq> IntoIterator for &'a CategoryIndex<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_order() {
        let mut index = CategoryIndex::new();
        assert_eq!(index.insert("b"), 0);
        assert_eq!(index.insert("a"), 1);
        assert_eq!(index.insert("b"), 0);
        assert_eq!(index.insert("c"), 2);

        assert_eq!(index.len(), 3);
        assert_eq!(index.index_of(&"a"), Some(1));
        assert_eq!(index.index_of(&"z"), None);
        assert_eq!(index.value_at(2), Some(&"c"));
        assert_eq!(index.iter().copied().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_from_values_deduplicates() {
        let index = CategoryIndex::from_values(vec![3, 1, 3, 2, 1]);
        assert_eq!(index.iter().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert!(index.contains(&2));
        assert!(!index.contains(&4));
    }

    #[test]
    fn test_into_sorted_remap() {
        let index = CategoryIndex::from_values(vec!["pear", "apple", "fig"]);
        let (sorted, remap) = index.into_sorted();

        assert_eq!(sorted.iter().copied().collect::<Vec<_>>(), vec!["apple", "fig", "pear"]);
        // pear was 0 and is now 2, apple 1 -> 0, fig 2 -> 1
        assert_eq!(remap, vec![2, 0, 1]);
        assert_eq!(sorted.index_of(&"pear"), Some(2));
    }

    #[test]
    fn test_empty_index() {
        let index: CategoryIndex<u8> = CategoryIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.value_at(0), None);
        let (sorted, remap) = index.into_sorted();
        assert!(sorted.is_empty());
        assert!(remap.is_empty());
    }
}
