//! Traversal engine against BSTs built by insertion

use algotty::engine::traversal::{traversal_order, TraversalKind, TraversalRun};
use algotty::snapshot::{join_order, Completion};
use algotty::tree::BinaryTree;
use proptest::prelude::*;

fn values(tree: &BinaryTree, kind: TraversalKind) -> Vec<i64> {
    traversal_order(tree, kind)
        .into_iter()
        .map(|id| tree.value(id))
        .collect()
}

#[test]
fn test_reference_tree_orders() {
    let tree = BinaryTree::from_values(&[5, 3, 8, 1, 4, 7, 9]);
    assert_eq!(values(&tree, TraversalKind::Preorder), [5, 3, 1, 4, 8, 7, 9]);
    assert_eq!(values(&tree, TraversalKind::Inorder), [1, 3, 4, 5, 7, 8, 9]);
    assert_eq!(values(&tree, TraversalKind::Postorder), [1, 4, 3, 7, 9, 8, 5]);
}

#[test]
fn test_complete_tree_orders() {
    let tree = BinaryTree::complete(2).unwrap();
    assert_eq!(values(&tree, TraversalKind::Preorder), [1, 2, 3]);
    assert_eq!(values(&tree, TraversalKind::Inorder), [2, 1, 3]);
    assert_eq!(values(&tree, TraversalKind::Postorder), [2, 3, 1]);
}

#[test]
fn test_kind_parsing() {
    assert_eq!("Inorder".parse::<TraversalKind>().unwrap(), TraversalKind::Inorder);
    assert!("levelorder".parse::<TraversalKind>().is_err());
}

proptest! {
    #[test]
    fn ticks_match_node_count(
        input in prop::collection::vec(-20i64..20, 1..30),
        kind in prop::sample::select(TraversalKind::ALL.to_vec()),
    ) {
        let tree = BinaryTree::from_values(&input);
        let mut run = TraversalRun::new(kind, &tree).unwrap();
        let snaps: Vec<_> = run.by_ref().collect();

        let highlights = snaps.iter().filter(|s| s.current.is_some()).count();
        prop_assert_eq!(highlights, tree.len());
        prop_assert_eq!(snaps.len(), tree.len() + 1);
        prop_assert!(snaps.last().unwrap().is_neutral());

        let order = values(&tree, kind);
        match run.completion() {
            Some(Completion::Traversed { order: done, summary }) => {
                prop_assert_eq!(&summary, &join_order(&order));
                prop_assert_eq!(done, order);
            }
            other => prop_assert!(false, "unexpected completion {:?}", other),
        }
    }

    #[test]
    fn inorder_of_bst_is_sorted(input in prop::collection::vec(-20i64..20, 0..30)) {
        let tree = BinaryTree::from_values(&input);
        let mut expected = input.clone();
        expected.sort();
        prop_assert_eq!(values(&tree, TraversalKind::Inorder), expected);
    }
}
