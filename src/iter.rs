//! Borrowing traversals over a [`Tree`][crate::Tree]. Both keep their own stack or queue of
//! pending nodes so a degenerate tree can be walked without deep recursion.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::node::{Link, Node};

/// Yields every value in ascending comparator order.
///
/// Created by [`Tree::in_order`][crate::Tree::in_order].
#[derive(Debug)]
pub struct InOrder<'a, T> {
    /// Nodes whose left subtree has been pushed but which haven't been yielded yet.
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut link: &'a Link<T>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = &node.left;
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {}
impl<T> FusedIterator for InOrder<'_, T> {}

/// Yields every value breadth first: the root, then its children left to right, and so on.
///
/// Created by [`Tree::level_order`][crate::Tree::level_order].
#[derive(Debug)]
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> LevelOrder<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, len: usize) -> Self {
        Self {
            queue: root.as_deref().into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LevelOrder<'_, T> {}
impl<T> FusedIterator for LevelOrder<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builds
    /// ```text
    ///     4
    ///    / \
    ///   2   5
    ///  / \
    /// 1   3
    /// ```
    fn sample() -> Link<i32> {
        let mut two = Node::new_boxed(2);
        two.left = Some(Node::new_boxed(1));
        two.right = Some(Node::new_boxed(3));
        let mut four = Node::new_boxed(4);
        four.left = Some(two);
        four.right = Some(Node::new_boxed(5));
        Some(four)
    }

    #[test]
    fn test_in_order() {
        let root = sample();
        let values: Vec<_> = InOrder::new(&root, 5).copied().collect();
        assert_eq!(values, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_level_order() {
        let root = sample();
        let values: Vec<_> = LevelOrder::new(&root, 5).copied().collect();
        assert_eq!(values, [4, 2, 5, 1, 3]);
    }

    #[test]
    fn test_empty() {
        let root: Link<i32> = None;
        assert_eq!(InOrder::new(&root, 0).next(), None);
        assert_eq!(LevelOrder::new(&root, 0).next(), None);
    }

    #[test]
    fn test_size_hint() {
        let root = sample();
        let mut iter = LevelOrder::new(&root, 5);
        iter.next();
        assert_eq!(iter.len(), 4);
    }
}
