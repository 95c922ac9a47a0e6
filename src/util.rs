use std::cmp::Ordering;

/// Which child slot of a parent a key belongs in.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// Routes `key` relative to a node holding `node_key`. Equal keys go right.
    pub(crate) fn route<K: Ord>(key: &K, node_key: &K) -> Self {
        match key.cmp(node_key) {
            Ordering::Less => Self::Left,
            Ordering::Equal | Ordering::Greater => Self::Right,
        }
    }

    /// Short tag used when rendering a branch.
    pub(crate) fn tag(self) -> &'static str {
        match self {
            Self::Left => "L",
            Self::Right => "R",
        }
    }
}
