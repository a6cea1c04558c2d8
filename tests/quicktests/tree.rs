use bintree::tree::Tree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of values as the model.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, set: &mut HashSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(*x);
                set.insert(*x);
            }
            Op::Remove(x) => {
                tree.remove(x);
                set.remove(x);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = HashSet::new();

        do_ops(&ops, &mut tree, &mut set);
        set.iter().all(|x| tree.find(x).is_some())
            && tree.is_empty() == set.is_empty()
    }
}

quickcheck::quickcheck! {
    fn contains(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }

        xs.iter().all(|x| tree.find(x).is_some())
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none())
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for delete in &deletes {
            tree.remove(delete);
        }

        let deleted: HashSet<_> = deletes.into_iter().collect();
        let still_present: HashSet<_> = xs
            .into_iter()
            .filter(|x| !deleted.contains(x))
            .collect();

        deleted.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
    }
}

quickcheck::quickcheck! {
    fn drains_to_empty(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        for x in &xs {
            tree.remove(x);
        }

        tree.is_empty()
    }
}
