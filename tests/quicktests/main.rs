//! Property tests against the public API of the tree.

use linked_bst::Tree;
use quickcheck::{Arbitrary, Gen};

mod tree;

/// One step of a random workload: add, remove or rebalance. `do_ops` replays a list of them on a
/// tree and on a sorted `Vec` holding the same values.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Add the value to the tree
    Add(T),
    /// Remove one copy of the value from the tree
    Remove(T),
    /// Rebuild the tree into minimal height
    Rebalance,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Add(T::arbitrary(g)),
            1 => Op::Remove(T::arbitrary(g)),
            2 => Op::Rebalance,
            _ => unreachable!(),
        }
    }
}

/// Builds a tree by adding `xs` in order.
pub(crate) fn tree_of<T: Ord + Clone>(xs: &[T]) -> Tree<T> {
    xs.iter().cloned().collect()
}
