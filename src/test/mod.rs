//! Helpers shared by the unit tests.


use generational_arena::Index;

use crate::Tree;

/// Panics with the violated invariant unless `tree` is structurally sound.
pub(crate) fn assert_valid<K: Ord>(tree: &Tree<K>) {
    if let Err(e) = tree.validate() {
        panic!("{}", e);
    }
}

fn parent_key<K>(tree: &Tree<K>, idx: Index) -> Option<&K> {
    tree.node(idx).parent.map(|p| &tree.node(p).key)
}

/// Whether two trees have the same shape, the same keys in the same places, and the same
/// parent links.
pub(crate) fn same_shape<K: PartialEq>(a: &Tree<K>, b: &Tree<K>) -> bool {
    let mut stack = vec![(a.root(), b.root())];
    while let Some(pair) = stack.pop() {
        match pair {
            (None, None) => {}
            (Some(x), Some(y)) => {
                let (left, right) = (a.node(x), b.node(y));
                if left.key != right.key || parent_key(a, x) != parent_key(b, y) {
                    return false;
                }
                stack.push((left.left, right.left));
                stack.push((left.right, right.right));
            }
            _ => return false,
        }
    }
    true
}
