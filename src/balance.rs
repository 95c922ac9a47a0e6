//! Rebuilding a [`Tree`] at minimum height.
//!
//! The tree never balances itself. Instead, [`Tree::rebalance`] takes every node in order and
//! relinks them so that each subtree is rooted at the median of its keys. No key is cloned or
//! moved; only the links change.
//!
//! # Examples
//!
//! ```
//! use ordtree::Tree;
//!
//! // Sorted input makes a tree as tall as it is large.
//! let tree: Tree<_> = (1..=7).collect();
//! assert_eq!(tree.height(), 7);
//!
//! let balanced = tree.into_balanced();
//! assert_eq!(balanced.height(), 3);
//! assert_eq!(balanced.level(1), vec![&4]);
//! assert_eq!(balanced.level(2), vec![&2, &6]);
//! ```

use generational_arena::Index;
use tracing::{debug, instrument};

use crate::Tree;

impl<K: Ord> Tree<K> {
    /// Rebuilds this tree in place so its height is `ceil(lg (N + 1))` for `N` distinct keys.
    ///
    /// **Note** Duplicate keys are collapsed: only the first occurrence of each key (in order)
    /// survives, so [`len`](Tree::len) may shrink.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree: Tree<_> = [1, 2, 2, 3, 3, 3].into_iter().collect();
    /// tree.rebalance();
    ///
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.list_in_order(), vec![1, 2, 3]);
    /// assert_eq!(tree.height(), 2);
    /// ```
    #[instrument(level = "debug", skip_all)]
    pub fn rebalance(&mut self) {
        let before = self.len();

        let mut kept: Vec<Index> = Vec::with_capacity(before);
        let mut duplicates = Vec::new();
        {
            let mut walk = self.in_order();
            while let Some(idx) = walk.next_handle() {
                match kept.last() {
                    Some(&last) if self.node(last).key == self.node(idx).key => {
                        duplicates.push(idx)
                    }
                    _ => kept.push(idx),
                }
            }
        }

        // These are about to be dropped from the order entirely so their links don't matter.
        for idx in duplicates {
            self.free(idx);
        }
        let root = self.link_balanced(&kept, None);
        self.set_root_handle(root);

        debug!(
            nodes = self.len(),
            collapsed = before - self.len(),
            height = self.height(),
            "rebuilt tree at minimum height"
        );
        if cfg!(debug_assertions) {
            assert_eq!(self.len(), kept.len());
        }
    }

    /// Consumes this tree and returns it rebuilt at minimum height. See
    /// [`rebalance`](Tree::rebalance).
    pub fn into_balanced(mut self) -> Self {
        self.rebalance();
        self
    }

    /// Returns a minimum-height copy of this tree, leaving this one untouched. See
    /// [`rebalance`](Tree::rebalance).
    pub fn balanced(&self) -> Self
    where
        K: Clone,
    {
        self.clone().into_balanced()
    }

    /// Links the sorted, duplicate-free `nodes` into a subtree hanging from `parent` and returns
    /// its root. The median becomes the root, then the left half, then the right half. Recursion
    /// depth is `lg N`.
    fn link_balanced(&mut self, nodes: &[Index], parent: Option<Index>) -> Option<Index> {
        let mid = nodes.len() / 2;
        let &idx = nodes.get(mid)?;

        let left = self.link_balanced(&nodes[..mid], Some(idx));
        let right = self.link_balanced(&nodes[mid + 1..], Some(idx));

        let node = self.node_mut(idx);
        node.parent = parent;
        node.left = left;
        node.right = right;
        Some(idx)
    }
}

#[cfg(test)]
mod tests {
    use crate::test::assert_valid;
    use crate::Tree;

    /// `ceil(lg (n + 1))`, the height of a complete tree holding `n` nodes.
    fn min_height(n: usize) -> usize {
        (usize::BITS - n.leading_zeros()) as usize
    }

    #[test]
    fn min_height_matches_complete_trees() {
        assert_eq!(min_height(0), 0);
        assert_eq!(min_height(1), 1);
        assert_eq!(min_height(2), 2);
        assert_eq!(min_height(3), 2);
        assert_eq!(min_height(7), 3);
        assert_eq!(min_height(8), 4);
    }

    #[test]
    fn rebalance_empty() {
        let mut tree: Tree<i32> = Tree::new();
        tree.rebalance();

        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_valid(&tree);
    }

    #[test]
    fn rebalance_sorted_input() {
        for n in 0..64 {
            let mut tree: Tree<_> = (0..n).collect();
            tree.rebalance();

            assert_eq!(tree.height(), min_height(n as usize));
            assert_eq!(tree.list_in_order(), (0..n).collect::<Vec<_>>());
            assert_valid(&tree);
        }
    }

    #[test]
    fn rebalance_chooses_medians() {
        let tree: Tree<_> = [50, 25, 3, 42, 60, 75, 120].into_iter().collect();
        let tree = tree.into_balanced();

        assert_eq!(tree.list_pre_order(), vec![50, 25, 3, 42, 75, 60, 120]);
        assert_valid(&tree);
    }

    #[test]
    fn rebalance_even_count_takes_upper_median() {
        let tree: Tree<_> = [1, 2, 3, 4].into_iter().collect();
        let tree = tree.into_balanced();

        assert_eq!(tree.level(1), vec![&3]);
        assert_eq!(tree.level(2), vec![&2, &4]);
        assert_eq!(tree.level(3), vec![&1]);
    }

    #[test]
    fn rebalance_collapses_duplicates() {
        let tree: Tree<_> = [5, 5, 3, 9, 3, 5].into_iter().collect();
        assert_eq!(tree.len(), 6);

        let tree = tree.into_balanced();
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.list_in_order(), vec![3, 5, 9]);
        assert_valid(&tree);
    }

    #[test]
    fn balanced_leaves_original_alone() {
        let tree: Tree<_> = (0..10).collect();
        let balanced = tree.balanced();

        assert_eq!(tree.height(), 10);
        assert_eq!(balanced.height(), 4);
        assert_eq!(tree.list_in_order(), balanced.list_in_order());
        assert_valid(&tree);
        assert_valid(&balanced);
    }

    #[test]
    fn rebalanced_tree_keeps_working() {
        let mut tree: Tree<_> = (0..31).collect();
        tree.rebalance();

        assert!(tree.remove(&15));
        tree.insert(100);
        assert_eq!(tree.successor(&14), Some(&16));
        assert_eq!(tree.successor(&30), Some(&100));
        assert_valid(&tree);
    }
}
