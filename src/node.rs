use generational_arena::Index;

use crate::util::Side;

/// A single key and its links. Ownership of every `Node` belongs to the tree's arena; the links
/// here are handles into that arena and never keep anything alive.
#[derive(Clone, Debug)]
pub(crate) struct Node<K> {
    pub(crate) key: K,
    pub(crate) left: Option<Index>,
    pub(crate) right: Option<Index>,
    /// `None` only for the root.
    pub(crate) parent: Option<Index>,
}

impl<K> Node<K> {
    pub(crate) fn new(key: K, parent: Option<Index>) -> Self {
        Self {
            key,
            left: None,
            right: None,
            parent,
        }
    }

    pub(crate) fn child(&self, side: Side) -> Option<Index> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Option<Index> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}
