//! Rendering a [`Tree`] as an indented, branch-annotated dump.

use std::fmt;

use generational_arena::Index;

use crate::util::Side;
use crate::Tree;

impl<K: fmt::Display> Tree<K> {
    /// Builds a printable [`termtree::Tree`] mirroring this tree's shape. Every child is
    /// labelled `L:` or `R:` so a lone child's side is still visible.
    ///
    /// This recurses once per level so it is meant for trees small enough to read.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// let rendered = tree.to_termtree().to_string();
    /// let lines: Vec<_> = rendered.lines().collect();
    ///
    /// assert_eq!(lines[0], "2");
    /// assert!(lines[1].ends_with("L: 1"));
    /// assert!(lines[2].ends_with("R: 3"));
    /// ```
    pub fn to_termtree(&self) -> termtree::Tree<String> {
        match self.root() {
            Some(root) => self.subtree(root, self.node(root).key.to_string()),
            None => termtree::Tree::new("(empty)".to_string()),
        }
    }

    fn subtree(&self, idx: Index, label: String) -> termtree::Tree<String> {
        let node = self.node(idx);
        let leaves = [(node.left, Side::Left), (node.right, Side::Right)]
            .into_iter()
            .filter_map(|(child, side)| {
                let child = child?;
                let label = format!("{}: {}", side.tag(), self.node(child).key);
                Some(self.subtree(child, label))
            })
            .collect::<Vec<_>>();

        termtree::Tree::new(label).with_leaves(leaves)
    }
}

impl<K: fmt::Display> fmt::Display for Tree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_termtree())
    }
}
