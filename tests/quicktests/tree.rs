use assert_matches::assert_matches;
use linked_bst::{Error, Tree};
use quickcheck::quickcheck;

use crate::{tree_of, Op};

/// Applies a set of operations to a tree and keeps a plain list of what should be in it.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, expected: &mut Vec<i8>) {
    for op in ops {
        match op {
            Op::Add(x) => {
                tree.add(*x);
                expected.push(*x);
            }
            Op::Remove(x) => match expected.iter().position(|y| y == x) {
                Some(pos) => {
                    expected.swap_remove(pos);
                    assert_eq!(tree.remove(x), Ok(*x));
                }
                None => assert_matches!(tree.remove(x), Err(Error::NotFound)),
            },
            Op::Rebalance => tree.rebalance(),
        }
    }
}

fn sorted(mut xs: Vec<i8>) -> Vec<i8> {
    xs.sort_unstable();
    xs
}

quickcheck! {
    fn size_matches_inorder(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut expected = Vec::new();
        do_ops(&ops, &mut tree, &mut expected);

        tree.size() == tree.inorder().count() && tree.size() == expected.len()
    }

    fn inorder_is_sorted_multiset(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut expected = Vec::new();
        do_ops(&ops, &mut tree, &mut expected);

        let inorder: Vec<i8> = tree.inorder().copied().collect();
        inorder.windows(2).all(|pair| pair[0] <= pair[1])
            && inorder == sorted(expected)
            && tree.is_ordered()
    }

    fn preorder_holds_same_values(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);

        sorted(tree.iter().copied().collect()) == sorted(xs)
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);

        xs.iter().all(|x| tree.find(x) == Some(x) && tree.contains(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = tree_of(&xs);

        nots.iter()
            .filter(|x| !xs.contains(*x))
            .all(|x| tree.find(x).is_none())
    }

    fn rebalance_round_trip(xs: Vec<u16>) -> bool {
        let mut tree = tree_of(&xs);
        let before: Vec<u16> = tree.inorder().copied().collect();

        tree.rebalance();

        let bound = ((tree.size() + 1) as f64).log2().ceil() as isize;
        let after: Vec<u16> = tree.inorder().copied().collect();
        before == after && tree.height() <= bound && tree.is_balanced() != tree.is_empty()
    }

    fn remove_takes_exactly_one(xs: Vec<i8>, x: i8) -> bool {
        let mut tree = tree_of(&xs);
        let copies = xs.iter().filter(|y| **y == x).count();

        match tree.remove(&x) {
            Ok(removed) => {
                removed == x
                    && copies > 0
                    && tree.size() == xs.len() - 1
                    && tree.inorder().filter(|y| **y == x).count() == copies - 1
            }
            Err(Error::NotFound) => {
                copies == 0
                    && tree.size() == xs.len()
                    && tree.iter().eq(tree_of(&xs).iter())
            }
        }
    }

    fn range_find_is_inclusive_filter(xs: Vec<i8>, low: i8, high: i8) -> bool {
        let tree = tree_of(&xs);
        let expected: Vec<i8> = sorted(xs)
            .into_iter()
            .filter(|x| low <= *x && *x <= high)
            .collect();

        tree.range_find(&low, &high).into_iter().copied().eq(expected)
    }

    fn neighbours(xs: Vec<i8>, probe: i8) -> bool {
        let tree = tree_of(&xs);
        let xs = sorted(xs);

        tree.successor(&probe) == xs.iter().find(|x| **x > probe)
            && tree.predecessor(&probe) == xs.iter().rev().find(|x| **x < probe)
    }
}

#[test]
fn successor_predecessor_boundaries() {
    let tree = tree_of(&[3, 1, 4, 1, 5, 9, 2, 6]);

    assert_eq!(tree.successor(&5), Some(&6));
    assert_eq!(tree.successor(&9), None);
    assert_eq!(tree.predecessor(&1), None);
    assert_eq!(tree.predecessor(&9), Some(&6));
}

#[test]
fn ascending_chain_needs_rebalance() {
    let mut tree = tree_of(&[1, 2, 3, 4, 5, 6, 7]);
    assert!(!tree.is_balanced());

    tree.rebalance();
    assert!(tree.is_balanced());
}

#[test]
fn range_find_between_stored_bounds() {
    let tree = tree_of(&[4, 2, 5, 1, 3]);

    assert_eq!(tree.range_find(&2, &4), [&2, &3, &4]);
}

#[test]
fn remove_absent_keeps_tree() {
    let mut tree = tree_of(&["b", "a", "c"]);

    assert_matches!(tree.remove(&"z"), Err(Error::NotFound));
    assert_eq!(tree.to_string(), "| c\nb\n| a\n");
    assert_eq!(Error::NotFound.to_string(), "item not in tree");
}

#[test]
fn words_load_sorted_then_rebalanced() {
    let words: Vec<String> = (0..5_000).map(|i| format!("word{i:05}")).collect();
    let mut tree: Tree<String> = words.iter().cloned().collect();
    assert_eq!(tree.height(), 4_999);

    tree.rebalance();
    assert_eq!(tree.height(), 12);
    assert!(words.iter().all(|word| tree.contains(word)));
    assert_eq!(tree.min().map(String::as_str), Some("word00000"));
    assert_eq!(tree.max().map(String::as_str), Some("word04999"));
}
