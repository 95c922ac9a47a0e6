//! The arena-backed ordered tree.
//!
//! # Examples
//!
//! ```
//! use ordtree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&50));
//!
//! tree.insert(50);
//! assert!(tree.contains(&50));
//!
//! // Equal keys are stored again, to the right.
//! tree.insert(50);
//! assert_eq!(tree.len(), 2);
//!
//! // Removing takes out one occurrence at a time.
//! assert_eq!(tree.take(&50), Some(50));
//! assert!(tree.contains(&50));
//! assert!(tree.remove(&50));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;

use generational_arena::{Arena, Index};
use tracing::{debug, trace};

use crate::node::Node;
use crate::util::Side;
use crate::{Error, Strategy};

/// An unbalanced Binary Search Tree over keys `K`. Keys are ordered with [`Ord`]; equal keys are
/// kept as separate nodes in the right subtree of the first one.
#[derive(Clone, Debug)]
pub struct Tree<K> {
    nodes: Arena<Node<K>>,
    root: Option<Index>,
    size: usize,
    strategy: Strategy,
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree` inserting with [`Strategy::Iterative`].
    pub fn new() -> Self {
        Self::with_strategy(Strategy::default())
    }

    /// Generates a new, empty `Tree` whose [`insert`](Self::insert) uses `strategy`.
    pub fn with_strategy(strategy: Strategy) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            size: 0,
            strategy,
        }
    }

    /// Generates a `Tree` holding just `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree = Tree::with_value(7);
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn with_value(key: K) -> Self {
        let mut tree = Self::new();
        tree.set_root(key);
        tree
    }

    /// How many keys are stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The strategy [`insert`](Self::insert) uses.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Number of nodes on the longest path from the root to a leaf. An empty tree has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), 0);
    ///
    /// tree.extend([2, 1, 3]);
    /// assert_eq!(tree.height(), 2);
    ///
    /// tree.insert(4);
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn height(&self) -> usize {
        let mut tallest = 0;
        let mut stack: Vec<(Index, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            tallest = tallest.max(depth);
            let node = self.node(idx);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        tallest
    }

    pub(crate) fn root(&self) -> Option<Index> {
        self.root
    }

    pub(crate) fn set_root_handle(&mut self, root: Option<Index>) {
        self.root = root;
    }

    pub(crate) fn node(&self, idx: Index) -> &Node<K> {
        &self.nodes[idx]
    }

    pub(crate) fn node_mut(&mut self, idx: Index) -> &mut Node<K> {
        &mut self.nodes[idx]
    }

    /// Frees a node without touching any links. The caller must already have unlinked it.
    pub(crate) fn free(&mut self, idx: Index) -> Option<Node<K>> {
        let node = self.nodes.remove(idx)?;
        self.size -= 1;
        Some(node)
    }

    fn set_root(&mut self, key: K) -> Index {
        let idx = self.nodes.insert(Node::new(key, None));
        self.root = Some(idx);
        self.size += 1;
        idx
    }

    /// Creates a node for `key` in the empty `side` slot of `parent`.
    fn attach(&mut self, parent: Index, side: Side, key: K) -> Index {
        debug_assert!(self.node(parent).child(side).is_none());
        let idx = self.nodes.insert(Node::new(key, Some(parent)));
        *self.node_mut(parent).child_mut(side) = Some(idx);
        self.size += 1;
        trace!(?side, size = self.size, "attached new node");
        idx
    }

    /// The leftmost node of the subtree rooted at `idx`.
    fn leftmost(&self, mut idx: Index) -> Index {
        while let Some(left) = self.node(idx).left {
            idx = left;
        }
        idx
    }

    fn leftmost_recursive(&self, idx: Index) -> Index {
        match self.node(idx).left {
            Some(left) => self.leftmost_recursive(left),
            None => idx,
        }
    }

    /// The node that follows `idx` in order, found by going down the right subtree or, failing
    /// that, up the parent links until we arrive from a left child.
    fn next_node(&self, idx: Index) -> Option<Index> {
        if let Some(right) = self.node(idx).right {
            return Some(self.leftmost(right));
        }

        let mut child = idx;
        let mut parent = self.node(idx).parent;
        while let Some(p) = parent {
            if self.node(p).left == Some(child) {
                return Some(p);
            }
            child = p;
            parent = self.node(p).parent;
        }
        None
    }

    /// Removes a node with at most one child from the tree, splicing that child (if any) into
    /// its slot, and returns the freed node.
    fn unlink(&mut self, idx: Index) -> Node<K> {
        let node = self.free(idx).expect("Unlinking implies a live node");
        debug_assert!(
            node.left.is_none() || node.right.is_none(),
            "Only nodes with at most one child can be unlinked"
        );

        let child = node.left.or(node.right);
        if let Some(child) = child {
            self.node_mut(child).parent = node.parent;
        }
        match node.parent {
            Some(parent) => {
                let parent = self.node_mut(parent);
                if parent.left == Some(idx) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
            }
            None => self.root = child,
        }

        node
    }
}

impl<K: Ord> Tree<K> {
    /// Inserts `key` using the tree's configured [`Strategy`]. Every call adds a node, even when
    /// an equal key is already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.list_in_order(), vec![1, 1]);
    /// ```
    pub fn insert(&mut self, key: K) {
        self.insert_with(key, self.strategy);
    }

    /// Inserts `key` descending with the given `strategy`. Both strategies produce the same
    /// tree for the same sequence of keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Strategy, Tree};
    ///
    /// let mut recursive = Tree::new();
    /// let mut iterative = Tree::new();
    /// for key in [5, 3, 8, 4] {
    ///     recursive.insert_with(key, Strategy::Recursive);
    ///     iterative.insert_with(key, Strategy::Iterative);
    /// }
    ///
    /// assert_eq!(recursive.list_pre_order(), iterative.list_pre_order());
    /// ```
    pub fn insert_with(&mut self, key: K, strategy: Strategy) {
        match (self.root, strategy) {
            (None, _) => {
                self.set_root(key);
            }
            (Some(root), Strategy::Recursive) => {
                self.insert_recursive(root, key);
            }
            (Some(root), Strategy::Iterative) => {
                self.insert_iterative(root, key);
            }
        }

        if cfg!(debug_assertions) {
            assert_eq!(self.size, self.nodes.len());
        }
    }

    fn insert_recursive(&mut self, at: Index, key: K) -> Index {
        let side = Side::route(&key, &self.node(at).key);
        match self.node(at).child(side) {
            Some(next) => self.insert_recursive(next, key),
            None => self.attach(at, side, key),
        }
    }

    fn insert_iterative(&mut self, root: Index, key: K) -> Index {
        let mut current = root;
        loop {
            let side = Side::route(&key, &self.node(current).key);
            match self.node(current).child(side) {
                Some(next) => current = next,
                None => return self.attach(current, side, key),
            }
        }
    }

    /// Whether some node holds a key equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(!tree.contains(&50));
    ///
    /// tree.insert(50);
    /// assert!(tree.contains(&50));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.find_node(key).is_some()
    }

    /// The first node holding `key` on the path insertion would take.
    fn find_node(&self, key: &K) -> Option<Index> {
        let mut current = self.root;
        while let Some(idx) = current {
            let node = self.node(idx);
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Equal => return Some(idx),
                Ordering::Greater => node.right,
            };
        }
        None
    }

    /// The smallest key in the tree, found iteratively.
    pub fn minimum(&self) -> Option<&K> {
        self.minimum_with(Strategy::Iterative)
    }

    /// The smallest key in the tree, descending with the given `strategy`.
    pub fn minimum_with(&self, strategy: Strategy) -> Option<&K> {
        let root = self.root?;
        let idx = match strategy {
            Strategy::Recursive => self.leftmost_recursive(root),
            Strategy::Iterative => self.leftmost(root),
        };
        Some(&self.node(idx).key)
    }

    /// Like [`minimum`](Self::minimum) but reports an empty tree as [`Error::EmptyTree`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Error, Tree};
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.try_minimum(), Err(Error::EmptyTree));
    ///
    /// tree.extend([3, 1, 2]);
    /// assert_eq!(tree.try_minimum(), Ok(&1));
    /// ```
    pub fn try_minimum(&self) -> Result<&K, Error> {
        self.minimum().ok_or(Error::EmptyTree)
    }

    /// The smallest key strictly greater than `key`. Returns `None` both when `key` is not in
    /// the tree and when nothing larger is.
    pub fn successor(&self, key: &K) -> Option<&K> {
        self.try_successor(key).ok().flatten()
    }

    /// The smallest key strictly greater than `key`, which must be in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Error, Tree};
    ///
    /// let tree: Tree<_> = [50, 30, 70, 40].into_iter().collect();
    ///
    /// // 40 has no right child, so its successor is an ancestor.
    /// assert_eq!(tree.try_successor(&40), Ok(Some(&50)));
    /// assert_eq!(tree.try_successor(&70), Ok(None));
    /// assert_eq!(tree.try_successor(&45), Err(Error::NotFound));
    /// ```
    pub fn try_successor(&self, key: &K) -> Result<Option<&K>, Error> {
        let start = self.find_node(key).ok_or(Error::NotFound)?;

        // Equal keys follow `start` in order; skip past them.
        let mut next = self.next_node(start);
        while let Some(idx) = next {
            let candidate = &self.node(idx).key;
            if candidate > key {
                return Ok(Some(candidate));
            }
            next = self.next_node(idx);
        }
        Ok(None)
    }

    /// Removes one node holding `key`. Returns whether anything was removed.
    pub fn remove(&mut self, key: &K) -> bool {
        self.take(key).is_some()
    }

    /// Removes one node holding `key` and returns the key it held. If the tree does not
    /// contain `key`, nothing happens.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree: Tree<_> = [50, 30, 70, 10, 40].into_iter().collect();
    ///
    /// assert_eq!(tree.take(&30), Some(30));
    /// assert_eq!(tree.take(&30), None);
    /// assert_eq!(tree.list_in_order(), vec![10, 40, 50, 70]);
    /// ```
    pub fn take(&mut self, key: &K) -> Option<K> {
        let target = self.find_node(key)?;

        let removed = match (self.node(target).left, self.node(target).right) {
            // The successor is the leftmost node of the right subtree, so it has no left child
            // and unlinking it is one of the simple cases. Its key moves into `target`.
            (Some(_), Some(right)) => {
                trace!("removing node with two children");
                let successor = self.leftmost(right);
                let successor = self.unlink(successor);
                std::mem::replace(&mut self.node_mut(target).key, successor.key)
            }
            _ => {
                trace!(leaf = self.node(target).is_leaf(), "removing node with at most one child");
                self.unlink(target).key
            }
        };

        debug!(size = self.size, "removed key");
        if cfg!(debug_assertions) {
            assert_eq!(self.size, self.nodes.len());
            assert_eq!(self.size == 0, self.root.is_none());
        }
        Some(removed)
    }

    /// Checks every structural invariant of the tree:
    ///
    /// 1. The root has no parent and every child's parent link points back at its parent.
    /// 2. Every key respects the ordering of all its ancestors.
    /// 3. The stored size equals both the number of reachable nodes and the number of
    ///    allocated nodes.
    ///
    /// A failure is always a bug in this crate.
    pub fn validate(&self) -> Result<(), Error> {
        let violation = |what: &str| Error::InvariantViolation(what.to_string());

        // Each entry carries the inclusive lower and exclusive upper bound for its key.
        let mut stack: Vec<(Index, Option<&K>, Option<&K>)> = Vec::new();
        if let Some(root) = self.root {
            let root_node = self.nodes.get(root).ok_or_else(|| violation("dangling root"))?;
            if root_node.parent.is_some() {
                return Err(violation("root has a parent"));
            }
            stack.push((root, None, None));
        }

        let mut reachable = 0;
        while let Some((idx, low, high)) = stack.pop() {
            reachable += 1;
            if reachable > self.nodes.len() {
                return Err(violation("cycle in child links"));
            }

            let node = self.node(idx);
            if low.map_or(false, |low| node.key < *low) {
                return Err(violation("key smaller than an ancestor it is right of"));
            }
            if high.map_or(false, |high| node.key >= *high) {
                return Err(violation("key not smaller than an ancestor it is left of"));
            }

            let children = [
                (node.left, low, Some(&node.key)),
                (node.right, Some(&node.key), high),
            ];
            for (child, low, high) in children {
                let Some(child) = child else { continue };
                let child_node = self
                    .nodes
                    .get(child)
                    .ok_or_else(|| violation("dangling child handle"))?;
                if child_node.parent != Some(idx) {
                    return Err(violation("child's parent link does not point at its parent"));
                }
                stack.push((child, low, high));
            }
        }

        if reachable != self.size {
            return Err(violation("size does not match reachable nodes"));
        }
        if self.nodes.len() != self.size {
            return Err(violation("size does not match allocated nodes"));
        }
        Ok(())
    }
}

impl<K: Ord> Extend<K> for Tree<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl<K: Ord> FromIterator<K> for Tree<K> {
    fn from_iter<I: IntoIterator<Item = K>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}
