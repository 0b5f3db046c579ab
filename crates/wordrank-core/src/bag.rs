//! Multiset of counted items.
//!
//! A [`Bag`] stores how many times each distinct item was added. Counts are
//! kept in a frequency map, so [`Bag::count`] always reflects every
//! [`Bag::add`] and [`Bag::clear`] made before it.

use std::collections::HashMap;
use std::collections::hash_map;
use std::hash::Hash;

/// An unordered collection that allows repeated items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bag<T: Eq + Hash> {
    counts: HashMap<T, usize>,
    size: usize,
}

impl<T: Eq + Hash> Default for Bag<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Bag<T> {
    /// Create a new empty bag.
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            size: 0,
        }
    }

    /// Add one copy of `item`. Multiple copies are allowed.
    pub fn add(&mut self, item: T) {
        *self.counts.entry(item).or_insert(0) += 1;
        self.size += 1;
    }

    /// Number of copies of `item` currently in the bag, zero if absent.
    pub fn count(&self, item: &T) -> usize {
        self.counts.get(item).copied().unwrap_or(0)
    }

    /// Remove every copy of `item`. Does nothing if it is absent.
    pub fn clear(&mut self, item: &T) {
        if let Some(removed) = self.counts.remove(item) {
            self.size -= removed;
        }
    }

    /// Total number of copies of all items.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of distinct items.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Whether the bag holds no items at all.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Iterate over `(item, count)` pairs in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, T, usize> {
        self.counts.iter()
    }
}

impl<T: Eq + Hash + Ord + Clone> Bag<T> {
    /// Items by decreasing number of copies, as `(count, item)` pairs.
    ///
    /// Each distinct item appears once. Equal counts are ordered by
    /// decreasing item, i.e. the pairs are in reverse natural order.
    pub fn ordered(&self) -> Vec<(usize, T)> {
        let mut pairs: Vec<(usize, T)> = self
            .counts
            .iter()
            .map(|(item, &count)| (count, item.clone()))
            .collect();
        sort_descending(&mut pairs);
        pairs
    }
}

impl<T: Eq + Hash + Ord> Bag<T> {
    /// Same ordering as [`Bag::ordered`], consuming the bag.
    pub fn into_ordered(self) -> Vec<(usize, T)> {
        let mut pairs: Vec<(usize, T)> = self
            .counts
            .into_iter()
            .map(|(item, count)| (count, item))
            .collect();
        sort_descending(&mut pairs);
        pairs
    }
}

fn sort_descending<T: Ord>(pairs: &mut [(usize, T)]) {
    pairs.sort_unstable_by(|a, b| b.cmp(a));
}

impl<T: Eq + Hash> Extend<T> for Bag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Eq + Hash> FromIterator<T> for Bag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bag_of(words: &[&str]) -> Bag<String> {
        words.iter().map(|w| (*w).to_string()).collect()
    }

    #[test]
    fn empty_bag() {
        let bag: Bag<String> = Bag::new();
        assert_eq!(bag.size(), 0);
        assert!(bag.is_empty());
        assert_eq!(bag.count(&"cat".to_string()), 0);
        assert!(bag.ordered().is_empty());
    }

    #[test]
    fn count_matches_adds() {
        let bag = bag_of(&["cat", "dog", "cat", "cat"]);
        assert_eq!(bag.count(&"cat".to_string()), 3);
        assert_eq!(bag.count(&"dog".to_string()), 1);
        assert_eq!(bag.count(&"emu".to_string()), 0);
        assert_eq!(bag.size(), 4);
        assert_eq!(bag.distinct(), 2);
    }

    #[test]
    fn clear_removes_all_copies() {
        let mut bag = bag_of(&["cat", "dog", "cat"]);
        let cat = "cat".to_string();
        bag.clear(&cat);
        assert_eq!(bag.count(&cat), 0);
        assert_eq!(bag.count(&cat), 0);
        assert_eq!(bag.size(), 1);

        bag.add(cat.clone());
        assert_eq!(bag.count(&cat), 1);
        assert_eq!(bag.size(), 2);
    }

    #[test]
    fn clear_absent_is_noop() {
        let mut bag = bag_of(&["cat"]);
        bag.clear(&"dog".to_string());
        assert_eq!(bag.size(), 1);
        assert_eq!(bag.count(&"cat".to_string()), 1);
    }

    #[test]
    fn count_sees_interleaved_updates() {
        let mut bag = Bag::new();
        bag.add("a");
        assert_eq!(bag.count(&"a"), 1);
        bag.add("a");
        assert_eq!(bag.ordered(), vec![(2, "a")]);
        bag.clear(&"a");
        assert!(bag.ordered().is_empty());
    }

    #[test]
    fn ordered_breaks_ties_by_decreasing_item() {
        let bag = bag_of(&["cat", "cat", "dog", "dog", "dog", "cat"]);
        assert_eq!(
            bag.ordered(),
            vec![(3, "dog".to_string()), (3, "cat".to_string())]
        );
    }

    #[test]
    fn ordered_is_sorted_and_deduplicated() {
        let bag = bag_of(&[
            "the", "bag", "apple", "the", "zebra", "bag", "the", "yak", "apple", "moth",
        ]);
        let ordered = bag.ordered();

        let total: usize = ordered.iter().map(|(c, _)| c).sum();
        assert_eq!(total, bag.size());
        assert_eq!(ordered.len(), bag.distinct());

        for pair in ordered.windows(2) {
            let (c1, w1) = &pair[0];
            let (c2, w2) = &pair[1];
            assert!(c1 > c2 || (c1 == c2 && w1 >= w2), "{pair:?}");
        }
        assert_eq!(ordered[0], (3, "the".to_string()));
        assert_eq!(
            ordered[3..],
            [
                (1, "zebra".to_string()),
                (1, "yak".to_string()),
                (1, "moth".to_string())
            ]
        );
    }

    #[test]
    fn into_ordered_matches_ordered() {
        let bag = bag_of(&["b", "a", "c", "a", "b", "a"]);
        let expected = bag.ordered();
        assert_eq!(bag.into_ordered(), expected);
    }
}
