//! In-order iterators over a [`BstMap`][crate::map::BstMap].
//!
//! All of them walk the tree with an explicit stack that lives inside the iterator, so two
//! iterators (or two equality checks) never share traversal state.

use std::fmt;
use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// An iterator over the entries of a map in ascending key order.
///
/// Created by [`BstMap::iter`][crate::map::BstMap::iter].
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(crate) fn new(root: &'a Link<K, V>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root.node());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.node();
        }
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K, V> fmt::Debug for Iter<'_, K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.node());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}
impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a map in ascending order.
///
/// Created by [`BstMap::keys`][crate::map::BstMap::keys].
#[derive(Clone, Debug)]
pub struct Keys<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}
impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a map, ordered by their keys.
///
/// Created by [`BstMap::values`][crate::map::BstMap::values].
#[derive(Clone, Debug)]
pub struct Values<'a, K, V> {
    pub(crate) inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}
impl<K, V> FusedIterator for Values<'_, K, V> {}

/// An owning iterator over the entries of a map in ascending key order.
///
/// Nodes are taken apart as they are yielded. Dropping the iterator early frees whatever is left.
pub struct IntoIter<K, V> {
    stack: Vec<Box<Node<K, V>>>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    pub(crate) fn new(root: Link<K, V>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: Link<K, V>) {
        while let Some(mut node) = link.0 {
            link = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        let right = node.right.take();
        self.push_left_spine(right);
        self.remaining -= 1;
        Some(Node::into_entry(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}
impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> Drop for IntoIter<K, V> {
    fn drop(&mut self) {
        // Left children were already taken off the stacked nodes, but their right subtrees can be
        // arbitrarily deep.
        for node in self.stack.drain(..) {
            Link(Some(node)).clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::NaturalOrder;

    fn build(keys: &[i32]) -> Link<i32, i32> {
        let mut link = Link::new();
        for &key in keys {
            link.insert(key, -key, &NaturalOrder);
        }
        link
    }

    #[test]
    fn iter_is_in_order() {
        let keys = [5, 3, 8, 1, 4, 7, 9];
        let link = build(&keys);
        let iter = Iter::new(&link, keys.len());
        assert_eq!(iter.len(), 7);

        let entries: Vec<_> = iter.map(|(k, v)| (*k, *v)).collect();
        assert_eq!(
            entries,
            [(1, -1), (3, -3), (4, -4), (5, -5), (7, -7), (8, -8), (9, -9)]
        );
    }

    #[test]
    fn iter_over_empty_link() {
        let link: Link<i32, i32> = Link::new();
        let mut iter = Iter::new(&link, 0);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn into_iter_is_in_order() {
        let link = build(&[2, 1, 4, 3, 5]);
        let keys: Vec<_> = IntoIter::new(link, 5).map(|(k, _)| k).collect();
        assert_eq!(keys, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn dropping_partially_consumed_into_iter() {
        // Ascending inserts leave everything in the right subtree of the first node.
        let keys: Vec<i32> = (0..2_000).collect();
        let link = build(&keys);
        let mut iter = IntoIter::new(link, keys.len());
        assert_eq!(iter.next(), Some((0, 0)));
        assert_eq!(iter.len(), 1_999);
        drop(iter);
    }
}
