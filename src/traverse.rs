//! Ordered walks over a [`Tree`]. Every walk keeps its own explicit stack so none of them
//! recurse, however tall the tree is.

use generational_arena::Index;

use crate::Tree;

/// Iterator over keys in order: left subtree, node, right subtree. For a valid tree this is
/// sorted. Created by [`Tree::in_order`].
pub struct InOrder<'a, K> {
    tree: &'a Tree<K>,
    stack: Vec<Index>,
    /// Next subtree whose left spine still needs pushing.
    pending: Option<Index>,
}

impl<'a, K> InOrder<'a, K> {
    fn new(tree: &'a Tree<K>) -> Self {
        Self {
            tree,
            stack: Vec::new(),
            pending: tree.root(),
        }
    }

    /// Advances and returns the handle of the next node instead of its key.
    pub(crate) fn next_handle(&mut self) -> Option<Index> {
        while let Some(idx) = self.pending {
            self.stack.push(idx);
            self.pending = self.tree.node(idx).left;
        }
        let idx = self.stack.pop()?;
        self.pending = self.tree.node(idx).right;
        Some(idx)
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        self.next_handle().map(|idx| &tree.node(idx).key)
    }
}

/// Iterator over keys node first, then left subtree, then right subtree. Created by
/// [`Tree::pre_order`].
pub struct PreOrder<'a, K> {
    tree: &'a Tree<K>,
    stack: Vec<Index>,
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.tree.node(self.stack.pop()?);
        // Right goes on first so left comes off first.
        self.stack.extend(node.right);
        self.stack.extend(node.left);
        Some(&node.key)
    }
}

/// Iterator over keys left subtree first, then right subtree, then node. Created by
/// [`Tree::post_order`].
pub struct PostOrder<'a, K> {
    tree: &'a Tree<K>,
    /// Each node is pushed twice: once to expand its children, once (`true`) to yield it.
    stack: Vec<(Index, bool)>,
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, expanded)) = self.stack.pop() {
            let node = self.tree.node(idx);
            if expanded {
                return Some(&node.key);
            }
            self.stack.push((idx, true));
            self.stack.extend(node.right.map(|right| (right, false)));
            self.stack.extend(node.left.map(|left| (left, false)));
        }
        None
    }
}

impl<K> Tree<K> {
    /// Iterates over the keys in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [50, 25, 3, 42].into_iter().collect();
    /// let keys: Vec<_> = tree.in_order().collect();
    ///
    /// assert_eq!(keys, vec![&3, &25, &42, &50]);
    /// ```
    pub fn in_order(&self) -> InOrder<'_, K> {
        InOrder::new(self)
    }

    /// Iterates over the keys visiting each node before its subtrees.
    pub fn pre_order(&self) -> PreOrder<'_, K> {
        PreOrder {
            tree: self,
            stack: self.root().into_iter().collect(),
        }
    }

    /// Iterates over the keys visiting each node after its subtrees.
    pub fn post_order(&self) -> PostOrder<'_, K> {
        PostOrder {
            tree: self,
            stack: self.root().map(|root| (root, false)).into_iter().collect(),
        }
    }

    /// Calls `visit` with every key in sorted order.
    pub fn visit_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&K),
    {
        for key in self.in_order() {
            visit(key);
        }
    }

    /// Collects the keys in sorted order.
    pub fn list_in_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.in_order().cloned().collect()
    }

    /// Collects the keys in pre-order.
    pub fn list_pre_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.pre_order().cloned().collect()
    }

    /// Collects the keys in post-order.
    pub fn list_post_order(&self) -> Vec<K>
    where
        K: Clone,
    {
        self.post_order().cloned().collect()
    }

    /// The keys at depth `level`, left to right. The root is at level 1, so level 0 and any
    /// level deeper than the tree are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [50, 25, 3, 42, 60, 75, 120].into_iter().collect();
    ///
    /// assert_eq!(tree.level(1), vec![&50]);
    /// assert_eq!(tree.level(2), vec![&25, &60]);
    /// assert_eq!(tree.level(3), vec![&3, &42, &75]);
    /// assert!(tree.level(5).is_empty());
    /// ```
    pub fn level(&self, level: usize) -> Vec<&K> {
        if level == 0 {
            return Vec::new();
        }

        let mut frontier: Vec<Index> = self.root().into_iter().collect();
        for _ in 1..level {
            if frontier.is_empty() {
                break;
            }
            frontier = frontier
                .into_iter()
                .flat_map(|idx| {
                    let node = self.node(idx);
                    node.left.into_iter().chain(node.right)
                })
                .collect();
        }
        frontier.into_iter().map(|idx| &self.node(idx).key).collect()
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}
