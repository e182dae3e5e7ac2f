//! The tree engine. A [`Tree`] orders its values with a comparator supplied at construction and
//! keeps its shape with the [`Balance`] policy it was built with.
//!
//! # Examples
//!
//! ```
//! use ordtree::Tree;
//!
//! let mut tree = Tree::new(|a: &i32, b: &i32| a.cmp(b));
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//! assert!(tree.height().is_err());
//!
//! tree.insert(5);
//! tree.insert(3);
//! tree.insert(8);
//! assert_eq!(tree.search(&3), Some(&3));
//! assert_eq!(tree.level_order_string(), "[5 \n 3 \n 8]");
//!
//! // Inserting a duplicate does nothing.
//! tree.insert(3);
//! assert_eq!(tree.count(), 3);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&5), Some(5));
//! assert_eq!(tree.in_order_string(), "3 8");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use crate::balance::Balance;
use crate::error::TreeError;
use crate::iter::{InOrder, LevelOrder};
use crate::node::{Link, Node, Side};

/// Ancestors detached from the tree while descending, each with the side the descent took.
type Path<T> = Vec<(Box<Node<T>>, Side)>;

/// A Binary Search Tree over values of type `T`, ordered by the comparator `C`. Values that
/// compare equal are stored once.
///
/// Every mutating operation walks down with an explicit stack rather than recursion, so
/// degenerate trees (built from sorted input without balancing) can grow as deep as memory
/// allows.
///
/// **Note** The comparator must be a strict total order. A comparator that panics propagates the
/// panic to the caller. All comparisons happen before any node is moved, so the tree is left
/// exactly as it was.
pub struct Tree<T, C = fn(&T, &T) -> Ordering> {
    root: Link<T>,
    comparator: C,
    balance: Balance,
    len: usize,
}

impl<T: Ord> Tree<T> {
    /// Generates a new, empty, unbalanced `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn ordered() -> Self {
        Self::new(T::cmp)
    }

    /// Generates a new, empty, AVL-balanced `Tree` ordered by `T`'s [`Ord`] implementation.
    pub fn ordered_balanced() -> Self {
        Self::balanced(T::cmp)
    }
}

impl<T: Ord> Default for Tree<T> {
    fn default() -> Self {
        Self::ordered()
    }
}

impl<T, C> Tree<T, C> {
    /// Generates a new, empty, unbalanced `Tree` ordered by `comparator`.
    pub fn new(comparator: C) -> Self {
        Self::with_balance(comparator, Balance::Unbalanced)
    }

    /// Generates a new, empty AVL `Tree` ordered by `comparator`. Every insertion rebalances.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::balanced(|a: &u32, b: &u32| a.cmp(b));
    /// for x in 1..=1000 {
    ///     tree.insert(x);
    /// }
    ///
    /// assert_eq!(tree.count(), 1000);
    /// assert!(tree.height().unwrap() <= 13);
    /// ```
    pub fn balanced(comparator: C) -> Self {
        Self::with_balance(comparator, Balance::Avl)
    }

    /// Generates a new, empty `Tree` ordered by `comparator` and shaped by `balance`.
    pub fn with_balance(comparator: C, balance: Balance) -> Self {
        Self {
            root: None,
            comparator,
            balance,
            len: 0,
        }
    }

    /// The balancing policy this tree was built with.
    pub fn balance(&self) -> Balance {
        self.balance
    }

    /// How many values are stored in the tree.
    pub fn count(&self) -> usize {
        self.len
    }

    /// Alias for [`count`][Self::count].
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of edges on the longest path from the root to a leaf. A tree holding a single
    /// value has a height of 0.
    ///
    /// # Errors
    ///
    /// An empty tree has no height and yields [`TreeError::EmptyTree`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::{Tree, TreeError};
    ///
    /// let mut tree: Tree<i32> = Tree::ordered();
    /// assert_eq!(tree.height(), Err(TreeError::EmptyTree));
    ///
    /// for x in 0..10 {
    ///     tree.insert(x);
    /// }
    /// assert_eq!(tree.height(), Ok(9));
    /// ```
    pub fn height(&self) -> Result<usize, TreeError> {
        self.root
            .as_ref()
            .map(|root| root.height)
            .ok_or(TreeError::EmptyTree)
    }

    /// Iterates over the values in ascending comparator order.
    pub fn in_order(&self) -> InOrder<'_, T> {
        InOrder::new(&self.root, self.len)
    }

    /// Iterates over the values breadth first, left to right within each level.
    pub fn level_order(&self) -> LevelOrder<'_, T> {
        LevelOrder::new(&self.root, self.len)
    }

    /// The values in ascending order, separated by single spaces.
    pub fn in_order_string(&self) -> String
    where
        T: fmt::Display,
    {
        join(self.in_order(), " ")
    }

    /// The values in level order inside brackets, separated by `" \n "`. An empty tree renders
    /// as `[]`.
    pub fn level_order_string(&self) -> String
    where
        T: fmt::Display,
    {
        format!("[{}]", join(self.level_order(), " \n "))
    }

    /// Finds the first value, in level order, matching `predicate`. Every node may be visited,
    /// so this works for any predicate at all, not just ones that agree with the tree's order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::new(|a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0));
    /// tree.insert((2, 'b'));
    /// tree.insert((1, 'z'));
    /// tree.insert((3, 'a'));
    ///
    /// assert_eq!(tree.search_linear(|v| v.1 == 'z'), Some(&(1, 'z')));
    /// assert_eq!(tree.search_linear(|v| v.1 == 'q'), None);
    /// ```
    pub fn search_linear<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.level_order().find(|&value| predicate(value))
    }

    /// Drops every value in the tree.
    pub fn clear(&mut self) {
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }
}

impl<T, C> Tree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Inserts `value` into the tree. If a value comparing equal is already stored the tree is
    /// left untouched and `value` is dropped.
    pub fn insert(&mut self, value: T) {
        let (sides, found) = self.descend(&value);
        if found {
            return;
        }

        let (path, _) = detach(&mut self.root, &sides);
        self.len += 1;
        self.root = relink(path, Some(Node::new_boxed(value)), self.balance);
    }

    /// Walks down from the root comparing `value` against each node. Returns the sides taken and
    /// whether the walk stopped at a node comparing equal. Nothing is detached, so a panicking
    /// comparator leaves the tree as it was.
    fn descend(&self, value: &T) -> (Vec<Side>, bool) {
        let mut sides = Vec::new();
        let mut link = &self.root;
        while let Some(node) = link {
            let side = match (self.comparator)(value, &node.value) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return (sides, true),
            };
            sides.push(side);
            link = node.child(side);
        }
        (sides, false)
    }

    /// Finds the stored value comparing equal to `value` under the tree's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree: Tree<i32> = Tree::ordered();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1), Some(&1));
    /// assert_eq!(tree.search(&42), None);
    /// ```
    pub fn search(&self, value: &T) -> Option<&T> {
        self.search_by(value, &self.comparator)
    }

    /// Whether a value comparing equal to `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Removes the stored value comparing equal to `value` and returns it. A node with two
    /// children takes over its in-order successor's value and the successor's node is unlinked
    /// instead.
    ///
    /// **Note** Removal never rotates, even in an AVL tree. Cached heights stay correct, so later
    /// insertions still rebalance the nodes they pass through.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let (sides, found) = self.descend(value);
        if !found {
            return None;
        }

        let (path, target) = detach(&mut self.root, &sides);
        let (removed, replacement) = match target {
            Some(node) => splice(node),
            None => {
                self.root = relink(path, None, Balance::Unbalanced);
                return None;
            }
        };
        self.root = relink(path, replacement, Balance::Unbalanced);
        self.len -= 1;
        Some(removed)
    }
}

impl<T, C> Tree<T, C> {
    /// Finds a stored value comparing equal to `value` under `cmp` instead of the tree's own
    /// comparator. The descent still prunes by the tree's shape, so `cmp` must order values the
    /// same way the tree's comparator does: if it doesn't, a stored match may be missed. Use
    /// [`search_linear`][Self::search_linear] for an ordering the tree wasn't built with.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordtree::Tree;
    ///
    /// let mut tree = Tree::new(|a: &String, b: &String| a.cmp(b));
    /// tree.insert("Bruno".to_string());
    /// tree.insert("Caio".to_string());
    ///
    /// // Case-insensitive lookups agree with the tree's order for these names.
    /// let found = tree.search_by(&"bruno".to_string(), |a, b| {
    ///     a.to_lowercase().cmp(&b.to_lowercase())
    /// });
    /// assert_eq!(found.map(String::as_str), Some("Bruno"));
    /// ```
    pub fn search_by<F>(&self, value: &T, cmp: F) -> Option<&T>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match cmp(value, &node.value) {
                Ordering::Less => &node.left,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => &node.right,
            };
        }
        None
    }
}

impl<T, C> Drop for Tree<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T, C> fmt::Debug for Tree<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.in_order()).finish()
    }
}

impl<'a, T, C> IntoIterator for &'a Tree<T, C> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order()
    }
}

impl<T, C> Extend<T> for Tree<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::ordered();
        tree.extend(iter);
        tree
    }
}

/// Detaches the nodes along `sides` from `root`, top down. Returns them with the side taken
/// below each, and the subtree found at the end of the walk.
fn detach<T>(root: &mut Link<T>, sides: &[Side]) -> (Path<T>, Link<T>) {
    let mut path = Path::with_capacity(sides.len());
    let mut cursor = root.take();
    for &side in sides {
        match cursor.take() {
            Some(mut node) => {
                cursor = node.child_mut(side).take();
                path.push((node, side));
            }
            None => break,
        }
    }
    (path, cursor)
}

/// Re-attaches each detached ancestor to the subtree below it, from the bottom up, and returns
/// the new root. Each ancestor's height is refreshed and `balance` gets a chance to rotate it.
fn relink<T>(mut path: Path<T>, mut subtree: Link<T>, balance: Balance) -> Link<T> {
    while let Some((mut parent, side)) = path.pop() {
        *parent.child_mut(side) = subtree;
        parent.update_height();
        subtree = Some(balance.rebalance(parent));
    }
    subtree
}

/// Unlinks `node` from its subtree. Returns `node`'s value and the subtree that takes its place.
fn splice<T>(mut node: Box<Node<T>>) -> (T, Link<T>) {
    match (node.left.take(), node.right.take()) {
        (None, right) => (node.value, right),
        (left, None) => (node.value, left),
        (Some(left), Some(right)) => {
            let (successor, right) = take_min(right);
            node.left = Some(left);
            node.right = right;
            node.update_height();
            let removed = mem::replace(&mut node.value, successor);
            (removed, Some(node))
        }
    }
}

/// Removes the leftmost node of the subtree rooted at `root`. Returns its value and what's left
/// of the subtree.
fn take_min<T>(root: Box<Node<T>>) -> (T, Link<T>) {
    let mut path = Path::new();
    let mut node = root;
    while let Some(left) = node.left.take() {
        path.push((node, Side::Left));
        node = left;
    }
    let rest = node.right.take();
    (node.value, relink(path, rest, Balance::Unbalanced))
}

fn join<'a, T, I>(values: I, separator: &str) -> String
where
    T: fmt::Display + 'a,
    I: Iterator<Item = &'a T>,
{
    values
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(separator)
}
