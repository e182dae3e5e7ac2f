//! Balancing policies. A [`Tree`][crate::Tree] runs the policy it was built with on every
//! ancestor of a freshly inserted value, from the bottom of the tree back up to the root.

use crate::node::Node;

/// How a [`Tree`][crate::Tree] keeps its shape as values are inserted.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Balance {
    /// A plain Binary Search Tree. Inserting already sorted values degenerates it into a list.
    #[default]
    Unbalanced,
    /// An AVL tree. After every insertion each node's subtrees differ in height by at most one.
    ///
    /// **Note** Only insertion rebalances. Removing values keeps every cached height correct but
    /// never rotates, so many removals can leave the tree lopsided.
    Avl,
}

impl Balance {
    /// Returns the root of `node`'s subtree after restoring balance. `node`'s cached height must
    /// already reflect its current children.
    pub(crate) fn rebalance<T>(self, node: Box<Node<T>>) -> Box<Node<T>> {
        match self {
            Self::Unbalanced => node,
            Self::Avl => avl_rebalance(node),
        }
    }
}

/// Picks one of the four AVL cases. The inserted value always lands in the taller grandchild
/// subtree, so the heavy child's own balance factor tells whether the value went to the outside
/// (single rotation) or the inside (double rotation) of the subtree.
fn avl_rebalance<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let balance = node.balance_factor();
    if balance > 1 {
        if node.left.as_ref().map_or(0, |left| left.balance_factor()) < 0 {
            // Left-right.
            node.left = node.left.take().map(rotate_left);
        }
        // Left-left.
        rotate_right(node)
    } else if balance < -1 {
        if node.right.as_ref().map_or(0, |right| right.balance_factor()) > 0 {
            // Right-left.
            node.right = node.right.take().map(rotate_right);
        }
        // Right-right.
        rotate_left(node)
    } else {
        node
    }
}

/// Rotates the left child up to become the subtree root. The old left child's right subtree
/// becomes the old root's left subtree. A node without a left child is returned untouched.
fn rotate_right<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    match old_root.left.take() {
        None => old_root,
        Some(mut new_root) => {
            old_root.left = new_root.right.take();
            old_root.update_height();
            new_root.right = Some(old_root);
            new_root.update_height();
            new_root
        }
    }
}

/// Rotates the right child up to become the subtree root. The old right child's left subtree
/// becomes the old root's right subtree. A node without a right child is returned untouched.
fn rotate_left<T>(mut old_root: Box<Node<T>>) -> Box<Node<T>> {
    match old_root.right.take() {
        None => old_root,
        Some(mut new_root) => {
            old_root.right = new_root.left.take();
            old_root.update_height();
            new_root.left = Some(old_root);
            new_root.update_height();
            new_root
        }
    }
}
