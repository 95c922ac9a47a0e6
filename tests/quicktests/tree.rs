use ordtree::{Strategy, Tree};

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a multiset model.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we hold the same keys, the same number of times.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, model: &mut BTreeMap<K, usize>)
where
    K: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(k, strategy) => {
                tree.insert_with(k.clone(), *strategy);
                *model.entry(k.clone()).or_insert(0) += 1;
            }
            Op::Remove(k) => {
                let before = tree.len();
                let removed = tree.remove(k);
                assert_eq!(removed, model.contains_key(k));
                if let Some(count) = model.get_mut(k) {
                    *count -= 1;
                    if *count == 0 {
                        model.remove(k);
                    }
                }
                assert_eq!(tree.len(), if removed { before - 1 } else { before });
            }
            Op::Iter => {
                assert_eq!(tree.list_in_order(), expand(model));
            }
        }
        tree.validate().unwrap();
    }
}

fn expand<K: Clone>(model: &BTreeMap<K, usize>) -> Vec<K> {
    model
        .iter()
        .flat_map(|(k, &count)| std::iter::repeat(k.clone()).take(count))
        .collect()
}

fn is_sorted<K: Ord>(keys: &[K]) -> bool {
    keys.windows(2).all(|pair| pair[0] <= pair[1])
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut model = BTreeMap::new();

        do_ops(&ops, &mut tree, &mut model);
        tree.len() == model.values().sum::<usize>()
            && model.keys().all(|key| tree.contains(key))
            && is_sorted(&tree.list_in_order())
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.contains(x))
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while tree.remove(delete) {}
        }

        let mut still_present = xs;
        still_present.retain(|x| !deletes.contains(x));

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && tree.len() == still_present.len()
    }

    fn in_order_is_sorted(xs: Vec<i32>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let mut sorted = xs;
        sorted.sort_unstable();

        tree.list_in_order() == sorted
    }

    fn strategies_build_identical_trees(xs: Vec<i16>) -> bool {
        let mut recursive = Tree::with_strategy(Strategy::Recursive);
        let mut iterative = Tree::with_strategy(Strategy::Iterative);
        recursive.extend(xs.iter().copied());
        iterative.extend(xs.iter().copied());

        // Reinserting a pre-order walk reproduces a tree exactly, so equal pre-orders mean
        // equal shapes.
        recursive.list_pre_order() == iterative.list_pre_order()
            && recursive.list_post_order() == iterative.list_post_order()
            && recursive.height() == iterative.height()
    }

    fn rebuild_round_trips(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let balanced = tree.balanced();

        let mut expected = tree.list_in_order();
        expected.dedup();
        balanced.validate().is_ok() && balanced.list_in_order() == expected
    }

    fn rebuild_reaches_minimum_height(xs: Vec<u16>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect::<Tree<_>>().into_balanced();
        let n = tree.len();

        // ceil(lg (n + 1))
        let bound = (usize::BITS - n.leading_zeros()) as usize;
        tree.height() <= bound
    }

    fn levels_partition_the_tree(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let per_level: usize = (1..=tree.height()).map(|level| tree.level(level).len()).sum();

        per_level == tree.len() && tree.level(tree.height() + 1).is_empty()
    }
}
