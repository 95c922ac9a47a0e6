//! Property tests driving the public API with random operation sequences.

mod tree;

use ordtree::Strategy;
use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// a tree in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<K> {
    /// Insert the K into the tree with the given strategy
    Insert(K, Strategy),
    /// Remove one occurrence of K from the tree
    Remove(K),
    /// Compare the tree's in-order walk against the model
    Iter,
}

impl<K> Arbitrary for Op<K>
where
    K: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(K::arbitrary(g), Strategy::Iterative),
            1 => Op::Insert(K::arbitrary(g), Strategy::Recursive),
            2 => Op::Remove(K::arbitrary(g)),
            3 => Op::Iter,
            _ => unreachable!(),
        }
    }
}
