//! The node/link model shared by [`BstMap`][crate::map::BstMap] and its iterators.
//!
//! Every `Node` exclusively owns its two children through a [`Link`]. Nothing else points into
//! the tree, so splicing a node out is a matter of moving `Box`es between links.
//!
//! None of the walks in here recurse on the call stack. The tree is never rebalanced, so sorted
//! input produces a chain as deep as the map is long.

use std::cmp::Ordering;
use std::mem;

use crate::compare::KeyComparator;

/// A key, its value, and the two subtrees hanging off of it.
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new_boxed(key: K, value: V) -> Box<Self> {
        Box::new(Node {
            key,
            value,
            left: Link::new(),
            right: Link::new(),
        })
    }

    /// Moves the key and value out of a node that has already been detached from its children.
    pub(crate) fn into_entry(node: Box<Self>) -> (K, V) {
        debug_assert!(node.left.is_empty() && node.right.is_empty());
        let Node { key, value, .. } = *node;
        (key, value)
    }
}

/// An owning slot for a subtree. An empty link is the bottom of a subtree.
pub(crate) struct Link<K, V>(pub(crate) Option<Box<Node<K, V>>>);

impl<K, V> Default for Link<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Which of the splice cases `Link::splice_out` took. Only used for logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Splice {
    /// The node had no right child and was replaced by its left subtree (possibly empty).
    NoRight,
    /// The node had no left child and was replaced by its right subtree.
    NoLeft,
    /// The node's left subtree was hung off the leftmost node of its right subtree, and the right
    /// subtree took its place.
    BothChildren,
}

impl<K, V> Link<K, V> {
    pub(crate) fn new() -> Self {
        Link(None)
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    pub(crate) fn node(&self) -> Option<&Node<K, V>> {
        self.0.as_deref()
    }

    pub(crate) fn node_mut(&mut self) -> Option<&mut Node<K, V>> {
        self.0.as_deref_mut()
    }

    pub(crate) fn take(&mut self) -> Self {
        Link(self.0.take())
    }

    /// Finds the node holding `key` by ordered descent.
    pub(crate) fn find<C>(&self, key: &K, cmp: &C) -> Option<&Node<K, V>>
    where
        C: KeyComparator<K>,
    {
        let mut link = self;
        while let Some(node) = link.node() {
            match cmp.compare(key, &node.key) {
                Ordering::Less => link = &node.left,
                Ordering::Equal => return Some(node),
                Ordering::Greater => link = &node.right,
            }
        }
        None
    }

    /// Descends to the link that either holds `key` or is the empty slot `key` belongs in.
    pub(crate) fn seek<C>(&mut self, key: &K, cmp: &C) -> &mut Self
    where
        C: KeyComparator<K>,
    {
        let mut link = self;
        loop {
            let ordering = match link.node() {
                Some(node) => cmp.compare(key, &node.key),
                None => return link,
            };
            if ordering == Ordering::Equal {
                return link;
            }
            link = match link.0 {
                Some(ref mut node) => {
                    if ordering == Ordering::Less {
                        &mut node.left
                    } else {
                        &mut node.right
                    }
                }
                None => return link,
            };
        }
    }

    /// Links a new node into the tree. Returns `false`, dropping `key` and `value`, if an
    /// equivalent key is already present.
    pub(crate) fn insert<C>(&mut self, key: K, value: V, cmp: &C) -> bool
    where
        C: KeyComparator<K>,
    {
        let slot = self.seek(&key, cmp);
        if slot.is_empty() {
            slot.0 = Some(Node::new_boxed(key, value));
            true
        } else {
            false
        }
    }

    /// Returns the value stored at `key`, linking in a node with `default()` if there is none.
    /// The flag is `true` when a node was created.
    pub(crate) fn get_or_insert_with<C, F>(
        &mut self,
        key: K,
        default: F,
        cmp: &C,
    ) -> (&mut V, bool)
    where
        C: KeyComparator<K>,
        F: FnOnce() -> V,
    {
        let slot = self.seek(&key, cmp);
        match slot.0 {
            Some(ref mut node) => (&mut node.value, false),
            None => {
                let node = slot.0.insert(Node::new_boxed(key, default()));
                (&mut node.value, true)
            }
        }
    }

    /// Unlinks the node holding `key` and hands it back detached from its children.
    pub(crate) fn erase<C>(&mut self, key: &K, cmp: &C) -> Option<Box<Node<K, V>>>
    where
        C: KeyComparator<K>,
    {
        self.seek(key, cmp).splice_out()
    }

    /// Removes the node in this link, replacing it with whatever should take its place.
    fn splice_out(&mut self) -> Option<Box<Node<K, V>>> {
        let mut removed = self.0.take()?;
        let left = removed.left.take();
        let right = removed.right.take();

        let (replacement, case) = match (left.0, right.0) {
            (left, None) => (left, Splice::NoRight),
            (None, right) => (right, Splice::NoLeft),
            (Some(left), Some(mut right)) => {
                right.left.push_leftmost(left);
                (Some(right), Splice::BothChildren)
            }
        };
        log::trace!("splicing out node: {:?}", case);

        self.0 = replacement;
        Some(removed)
    }

    /// Hangs `subtree` off the empty left slot of the leftmost node under this link.
    fn push_leftmost(&mut self, subtree: Box<Node<K, V>>) {
        let mut link = self;
        while let Some(ref mut node) = link.0 {
            link = &mut node.left;
        }
        link.0 = Some(subtree);
    }

    /// The number of nodes on the longest root-to-leaf path. An empty link has height 0.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<K, V>, usize)> =
            self.node().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.node().map(|n| (n, depth + 1)));
            stack.extend(node.right.node().map(|n| (n, depth + 1)));
        }
        height
    }

    /// Swaps the children of every node under this link.
    pub(crate) fn mirror(&mut self) {
        let mut stack: Vec<&mut Node<K, V>> = self.node_mut().into_iter().collect();
        while let Some(node) = stack.pop() {
            mem::swap(&mut node.left, &mut node.right);
            let Node { left, right, .. } = node;
            stack.extend(left.node_mut());
            stack.extend(right.node_mut());
        }
    }

    /// Copies the subtree node by node in pre-order (a parent is allocated before its left
    /// subtree, which is copied before its right subtree). The copy has the same shape.
    pub(crate) fn deep_clone(&self) -> Self
    where
        K: Clone,
        V: Clone,
    {
        let mut root = Link::new();
        {
            let mut stack: Vec<(&Node<K, V>, &mut Link<K, V>)> = Vec::new();
            if let Some(node) = self.node() {
                stack.push((node, &mut root));
            }
            while let Some((source, target)) = stack.pop() {
                let copy = target
                    .0
                    .insert(Node::new_boxed(source.key.clone(), source.value.clone()));
                let Node { left, right, .. } = &mut **copy;
                if let Some(source_right) = source.right.node() {
                    stack.push((source_right, right));
                }
                if let Some(source_left) = source.left.node() {
                    stack.push((source_left, left));
                }
            }
        }
        root
    }

    /// Frees every node under this link in post-order: both subtrees of a node are gone before
    /// the node itself is dropped. Returns how many nodes were freed.
    pub(crate) fn clear(&mut self) -> usize {
        let mut freed = 0;
        let mut stack: Vec<Box<Node<K, V>>> = self.0.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            match (node.left.0.take(), node.right.0.take()) {
                (None, None) => {
                    drop(node);
                    freed += 1;
                }
                (left, right) => {
                    stack.push(node);
                    stack.extend(right);
                    stack.extend(left);
                }
            }
        }
        freed
    }
}
