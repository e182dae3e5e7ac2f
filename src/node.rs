/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Which child slot of a parent a subtree hangs from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A `Node` stores one value and exclusively owns its two children. There are no parent
/// pointers: whoever changes a subtree hands its (possibly new) root back to the parent, which
/// re-links it.
#[derive(Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,

    /// How many edges are on the longest path from this node down to a leaf.
    /// A node with no children has a height of 0.
    pub(crate) height: usize,
}

impl<T> Node<T> {
    /// Construct a new leaf holding `value`.
    pub(crate) fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            height: 0,
        })
    }

    pub(crate) fn child(&self, side: Side) -> &Link<T> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn child_mut(&mut self, side: Side) -> &mut Link<T> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    /// Recomputes this node's height from its children's cached heights.
    pub(crate) fn update_height(&mut self) {
        self.height = (height(&self.left).max(height(&self.right)) + 1) as usize;
    }

    /// Height of the left subtree minus height of the right subtree.
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) - height(&self.right)
    }
}

/// Height of a possibly absent subtree. An absent subtree has a height of -1.
pub(crate) fn height<T>(link: &Link<T>) -> isize {
    link.as_ref().map_or(-1, |n| n.height as isize)
}
