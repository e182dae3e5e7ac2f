use ordtree::{Balance, Tree};

use quickcheck_macros::quickcheck;

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::Op;

const POLICIES: [Balance; 2] = [Balance::Unbalanced, Balance::Avl];

fn numeric(a: &i8, b: &i8) -> Ordering {
    a.cmp(b)
}

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and removes we hold the same values in the same order.
fn do_ops<C>(ops: &[Op<i8>], tree: &mut Tree<i8, C>, set: &mut BTreeSet<i8>) -> bool
where
    C: Fn(&i8, &i8) -> Ordering,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(*x);
                set.insert(*x);
            }
            Op::Remove(x) => {
                let expected = set.take(x);
                if tree.remove(x) != expected {
                    return false;
                }
            }
            Op::Iter => {
                if !tree.in_order().eq(set.iter()) {
                    return false;
                }
            }
        }
        if tree.count() != set.len() {
            return false;
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    POLICIES.iter().all(|&balance| {
        let mut tree = Tree::with_balance(numeric, balance);
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set) && set.iter().all(|x| tree.search(x) == Some(x))
    })
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
    POLICIES.iter().all(|&balance| {
        let mut tree = Tree::with_balance(numeric, balance);
        tree.extend(xs.iter().copied());

        let values: Vec<_> = tree.in_order().collect();
        values.windows(2).all(|w| w[0] < w[1])
    })
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    POLICIES.iter().all(|&balance| {
        let mut tree = Tree::with_balance(numeric, balance);
        tree.extend(xs.iter().copied());

        let distinct: BTreeSet<_> = xs.iter().collect();
        xs.iter().all(|x| tree.search(x) == Some(x)) && tree.count() == distinct.len()
    })
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = Tree::ordered_balanced();
    tree.extend(xs.iter().copied());
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn duplicate_insert_is_idempotent(xs: Vec<i8>, x: i8) -> bool {
    POLICIES.iter().all(|&balance| {
        let mut tree = Tree::with_balance(numeric, balance);
        tree.extend(xs.iter().copied());
        tree.insert(x);

        let count = tree.count();
        let before: Vec<_> = tree.in_order().copied().collect();
        tree.insert(x);
        let after: Vec<_> = tree.in_order().copied().collect();

        tree.count() == count && before == after
    })
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    POLICIES.iter().all(|&balance| {
        let mut tree = Tree::with_balance(numeric, balance);
        tree.extend(xs.iter().copied());

        for delete in &deletes {
            let count = tree.count();
            match tree.remove(delete) {
                Some(removed) if removed != *delete || tree.count() != count - 1 => return false,
                None if tree.count() != count => return false,
                _ => {}
            }
        }

        let still_present: BTreeSet<_> = xs.iter().filter(|&x| !deletes.contains(x)).collect();
        deletes.iter().all(|x| tree.search(x).is_none())
            && still_present.iter().all(|x| tree.search(x).is_some())
            && tree.in_order().eq(still_present.into_iter())
    })
}

#[quickcheck]
fn level_order_visits_every_value_once(xs: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = Tree::ordered_balanced();
    tree.extend(xs.iter().copied());

    let mut level: Vec<_> = tree.level_order().copied().collect();
    level.sort_unstable();
    level.into_iter().eq(tree.in_order().copied())
}

#[quickcheck]
fn search_linear_agrees_with_search(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<i8> = Tree::ordered();
    tree.extend(xs.iter().copied());

    tree.search(&x) == tree.search_linear(|v| *v == x)
}

#[test]
fn degenerate_input() {
    let mut unbalanced = Tree::new(|a: &u32, b: &u32| a.cmp(b));
    let mut balanced = Tree::balanced(|a: &u32, b: &u32| a.cmp(b));
    unbalanced.extend(1..=1000);
    balanced.extend(1..=1000);

    assert_eq!(unbalanced.height(), Ok(999));
    assert!(balanced.height().unwrap() <= 13);
    assert_eq!(unbalanced.count(), balanced.count());
}
