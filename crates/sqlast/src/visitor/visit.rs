//! The visitor protocol.

use crate::Node;

/// A notification delivered to a [`Visitor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// Entry call: the walker is about to descend into this node.
    Enter(Node<'a>),
    /// Exit call: every child of the most recently entered, unpruned node
    /// has been walked.
    Leave,
}

impl<'a> Event<'a> {
    /// Returns the entered node, or `None` for [`Event::Leave`].
    #[inline]
    pub fn node(&self) -> Option<Node<'a>> {
        match *self {
            Event::Enter(node) => Some(node),
            Event::Leave => None,
        }
    }

    #[inline]
    pub fn is_leave(&self) -> bool {
        matches!(self, Event::Leave)
    }
}

/// A consumer of traversal events.
///
/// On [`Event::Enter`] the visitor decides how the walk continues below the
/// entered node:
///
/// - `None` prunes the node: its children are skipped, and so is its
///   [`Event::Leave`].
/// - `Some(v)` walks the children with `v`. Returning `Some(self)` keeps the
///   same visitor; returning another visitor (typically one the implementor
///   owns) scopes it to this subtree.
///
/// The matching [`Event::Leave`] always goes back to the visitor that received
/// the [`Event::Enter`], not to the one it returned. Its return value is
/// ignored.
///
/// # Example
///
/// ```rust
/// use sqlast::{Event, Node, NodeKind, Visitor};
///
/// /// Tracks how deep the walk currently is.
/// #[derive(Default)]
/// struct DepthTracker {
///     depth: usize,
///     max_depth: usize,
/// }
///
/// impl<'a> Visitor<'a> for DepthTracker {
///     fn visit(&mut self, event: Event<'a>) -> Option<&mut dyn Visitor<'a>> {
///         match event {
///             Event::Enter(_) => {
///                 self.depth += 1;
///                 self.max_depth = self.max_depth.max(self.depth);
///                 Some(self)
///             }
///             Event::Leave => {
///                 self.depth -= 1;
///                 None
///             }
///         }
///     }
/// }
/// ```
pub trait Visitor<'a> {
    /// Receives one traversal event.
    fn visit(&mut self, event: Event<'a>) -> Option<&mut dyn Visitor<'a>>;
}
