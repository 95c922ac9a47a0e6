//! Builds a small tree both ways and walks through every operation, printing as it goes.
//!
//! Run with `RUST_LOG=ordtree=debug cargo run --example walkthrough` to see the tree's own
//! events as well.

use ordtree::{Strategy, Tree};
use tracing_subscriber::EnvFilter;

const KEYS: [i32; 7] = [50, 25, 3, 42, 60, 75, 120];

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut recursive = Tree::with_strategy(Strategy::Recursive);
    let mut iterative = Tree::with_strategy(Strategy::Iterative);
    for key in KEYS {
        recursive.insert(key);
        iterative.insert(key);
    }
    tracing::info!(keys = KEYS.len(), "seeded trees");

    println!("Recursive insertion:\n{}", recursive);
    println!("Iterative insertion:\n{}", iterative);
    println!(
        "Same pre-order: {}",
        recursive.list_pre_order() == iterative.list_pre_order()
    );

    let tree = recursive;
    println!("In-order:   {:?}", tree.list_in_order());
    println!("Pre-order:  {:?}", tree.list_pre_order());
    println!("Post-order: {:?}", tree.list_post_order());
    for level in 1..=tree.height() + 1 {
        println!("Level {}: {:?}", level, tree.level(level));
    }
    println!("Height: {}", tree.height());
    println!("Minimum: {:?}", tree.minimum_with(Strategy::Recursive));
    for key in [3, 42, 120, 7] {
        match tree.try_successor(&key) {
            Ok(next) => println!("Successor of {}: {:?}", key, next),
            Err(e) => println!("Successor of {}: {}", key, e),
        }
    }

    let mut tree = tree;
    println!("Remove 25: {}", tree.remove(&25));
    println!("Remove 25 again: {}", tree.remove(&25));
    println!("{}", tree);

    let unbalanced: Tree<_> = (1..=15).collect();
    println!("Sorted input has height {}", unbalanced.height());
    let balanced = unbalanced.into_balanced();
    println!("Rebuilt at height {}:\n{}", balanced.height(), balanced);
}
