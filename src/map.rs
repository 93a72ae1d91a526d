//! An ordered map backed by a plain, unbalanced Binary Search Tree.
//!
//! Nodes are never rotated, so the shape of the tree is entirely decided by the order of
//! insertions and deletions. Inserting keys in sorted order gives a tree that is really a linked
//! list.
//!
//! # Examples
//!
//! ```
//! use bst_map::map::BstMap;
//!
//! let mut map = BstMap::new();
//!
//! // Nothing in here yet.
//! assert_eq!(map.get(&1), None);
//!
//! assert!(map.insert(1, 2));
//! assert_eq!(map.get(&1), Some(&2));
//!
//! // Inserting an existing key is rejected and keeps the old value.
//! assert!(!map.insert(1, 3));
//! assert_eq!(map.get(&1), Some(&2));
//!
//! // Indexed access creates missing entries.
//! *map.get_or_insert_default(4) += 10;
//! assert_eq!(map.get(&4), Some(&10));
//!
//! // Erasing reports how many entries went away.
//! assert_eq!(map.erase(&1), 1);
//! assert_eq!(map.erase(&1), 0);
//! assert_eq!(map.len(), 1);
//! ```

use std::fmt;
use std::mem;

use crate::compare::{KeyComparator, NaturalOrder};
use crate::iter::{IntoIter, Iter, Keys, Values};
use crate::node::{Link, Node};
use crate::render::InOrder;

/// A map from unique keys to values, kept in a Binary Search Tree ordered by `C`.
///
/// `len` is tracked as nodes are linked in and spliced out rather than by counting.
pub struct BstMap<K, V, C = NaturalOrder> {
    root: Link<K, V>,
    size: usize,
    comparator: C,
}

impl<K, V, C> Default for BstMap<K, V, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<K, V, C> Drop for BstMap<K, V, C> {
    fn drop(&mut self) {
        self.root.clear();
    }
}

impl<K, V, C> Clone for BstMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Clone,
{
    /// Copies every node. The copy has the same tree shape as `self` and shares nothing with it.
    fn clone(&self) -> Self {
        Self {
            root: self.root.deep_clone(),
            size: self.size,
            comparator: self.comparator.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = source.root.deep_clone();
        self.size = source.size;
        self.comparator.clone_from(&source.comparator);
    }
}

impl<K, V, C> fmt::Debug for BstMap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> BstMap<K, V> {
    /// Generates a new, empty map ordered by `K`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> BstMap<K, V, C> {
    /// Generates a new, empty map ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            root: Link::new(),
            size: 0,
            comparator,
        }
    }

    /// The comparator this map orders its keys with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// The number of entries in the map.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if the map has no root node.
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.root.is_empty(), self.size == 0);
        self.root.is_empty()
    }

    /// Removes every entry. Nodes are freed children first.
    pub fn clear(&mut self) {
        let freed = self.root.clear();
        debug_assert_eq!(freed, self.size);
        log::debug!("BstMap::clear freed {} nodes", freed);
        self.size = 0;
    }

    /// The number of nodes on the longest path from the root to a leaf.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::map::BstMap;
    ///
    /// let mut map = BstMap::new();
    /// assert_eq!(map.height(), 0);
    ///
    /// // Nothing rebalances ascending keys into a bushier tree.
    /// for key in 0..10 {
    ///     map.insert(key, ());
    /// }
    /// assert_eq!(map.height(), 10);
    /// ```
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Mirrors the tree in place by swapping the children of every node.
    ///
    /// The entries stay the same but iteration now runs from the largest key to the smallest.
    /// Until the map is inverted again its shape no longer agrees with its comparator, so lookups,
    /// insertions and erasures will not find what they are looking for.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::map::BstMap;
    ///
    /// let mut map = BstMap::from([(1, 'a'), (2, 'b'), (3, 'c')]);
    ///
    /// map.invert();
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [3, 2, 1]);
    ///
    /// map.invert();
    /// assert_eq!(map.keys().copied().collect::<Vec<_>>(), [1, 2, 3]);
    /// ```
    pub fn invert(&mut self) {
        self.root.mirror();
        log::debug!("BstMap::invert mirrored {} nodes", self.size);
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root, self.size)
    }

    /// Iterates over the keys in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Iterates over the values in the order of their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// A [`Display`][fmt::Display] rendering of every entry, one `{key : value}` per line.
    pub fn in_order(&self) -> InOrder<'_, K, V>
    where
        K: fmt::Display,
        V: fmt::Display,
    {
        InOrder { iter: self.iter() }
    }

    /// Prints [`in_order`][BstMap::in_order] to standard output.
    pub fn print_in_order(&self)
    where
        K: fmt::Display,
        V: fmt::Display,
    {
        print!("{}", self.in_order());
    }

    /// Collects every entry, in order, into a vector. This walks the tree once with its own
    /// stack so it can be called any number of times.
    fn entries(&self) -> Vec<(&K, &V)> {
        self.iter().collect()
    }
}

impl<K, V, C> BstMap<K, V, C>
where
    C: KeyComparator<K>,
{
    /// Inserts `value` at `key` if no equivalent key is present yet. Returns whether an entry
    /// was added. An existing value is never overwritten.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::map::BstMap;
    ///
    /// let mut map = BstMap::new();
    ///
    /// assert!(map.insert(1, "first"));
    /// assert!(!map.insert(1, "second"));
    ///
    /// assert_eq!(map.get(&1), Some(&"first"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let inserted = self.root.insert(key, value, &self.comparator);
        if inserted {
            self.size += 1;
        } else {
            log::trace!("BstMap::insert rejected a duplicate key");
        }
        inserted
    }

    /// Returns a mutable reference to the value at `key`, first inserting `V::default()` if the
    /// key is missing. Assign through the reference to set or update the entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::map::BstMap;
    ///
    /// let mut map = BstMap::new();
    ///
    /// *map.get_or_insert_default("apples") = 3;
    /// *map.get_or_insert_default("apples") += 1;
    ///
    /// // Merely looking creates an entry too.
    /// assert_eq!(*map.get_or_insert_default("pears"), 0);
    ///
    /// assert_eq!(map.get(&"apples"), Some(&4));
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        let (value, inserted) = self
            .root
            .get_or_insert_with(key, V::default, &self.comparator);
        if inserted {
            self.size += 1;
            log::trace!("BstMap::get_or_insert_default created an entry");
        }
        value
    }

    /// Potentially finds the value associated with the given key. If no node has an equivalent
    /// key, `None` is returned.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.root.find(key, &self.comparator).map(|n| &n.value)
    }

    /// Like [`get`][BstMap::get] but allows changing the value in place.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.root
            .seek(key, &self.comparator)
            .node_mut()
            .map(|n| &mut n.value)
    }

    /// Returns `true` if the map holds an entry for `key`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.root.find(key, &self.comparator).is_some()
    }

    /// Removes the entry for `key` and returns its value, if there was one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_map::map::BstMap;
    ///
    /// let mut map = BstMap::from([(1, 2)]);
    ///
    /// assert_eq!(map.remove(&1), Some(2));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        match self.root.erase(key, &self.comparator) {
            Some(node) => {
                self.size -= 1;
                log::debug!("BstMap::erase removed a node, {} left", self.size);
                Some(Node::into_entry(node).1)
            }
            None => {
                log::trace!("BstMap::erase found no node to remove");
                None
            }
        }
    }

    /// Removes the entry for `key`. Returns how many entries were removed: `1` or `0`.
    ///
    /// A node with two children is replaced by its right child, and its left subtree is hung
    /// under the smallest node of that right child. Nothing is rebalanced afterwards.
    pub fn erase(&mut self, key: &K) -> usize {
        match self.remove(key) {
            Some(_) => 1,
            None => 0,
        }
    }
}

/// Two maps are equal when they hold the same number of entries and every entry of one can be
/// found, with an equal value, by searching the other. Tree shapes do not matter.
impl<K, V, C> PartialEq for BstMap<K, V, C>
where
    C: KeyComparator<K>,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self
                .entries()
                .into_iter()
                .all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, C> Eq for BstMap<K, V, C>
where
    C: KeyComparator<K>,
    V: Eq,
{
}

impl<K, V, C> Extend<(K, V)> for BstMap<K, V, C>
where
    C: KeyComparator<K>,
{
    /// Inserts every pair in turn. Pairs whose key is already present are dropped.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K, V, C> FromIterator<(K, V)> for BstMap<K, V, C>
where
    C: KeyComparator<K> + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for BstMap<K, V>
where
    K: Ord,
{
    /// Builds a map by inserting the pairs from first to last, so the first occurrence of a
    /// duplicated key wins.
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a, K, V, C> IntoIterator for &'a BstMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for BstMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let root = self.root.take();
        let len = mem::replace(&mut self.size, 0);
        IntoIter::new(root, len)
    }
}
