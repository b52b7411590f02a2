//! Predicate-driven traversal.

use super::{Event, Visitor, WalkError, Walker};
use crate::Node;

/// Adapts a predicate into a [`Visitor`].
///
/// The predicate is called once per entered node. Returning `true` descends
/// into the node's children, `false` prunes them. Exit events are ignored.
pub struct Inspector<F> {
    predicate: F,
}

impl<F> Inspector<F> {
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> std::fmt::Debug for Inspector<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspector").finish_non_exhaustive()
    }
}

impl<'a, F> Visitor<'a> for Inspector<F>
where
    F: FnMut(Node<'a>) -> bool,
{
    fn visit(&mut self, event: Event<'a>) -> Option<&mut dyn Visitor<'a>> {
        match event {
            Event::Enter(node) if (self.predicate)(node) => Some(self),
            _ => None,
        }
    }
}

/// Walks `root`, calling `predicate` on every entered node, using a default
/// [`Walker`].
///
/// # Example
///
/// ```rust
/// use sqlast::{inspect, AstArena, BinaryExpr, Expr, Ident, Identifier, Node, NodeKind, Operator, Span, Value};
///
/// let arena = AstArena::new();
/// let a = arena.alloc(Identifier::new(Ident::new("a", Span::new(0, 1))));
/// let one = arena.alloc(Value::Long(1));
/// let eq = arena.alloc(BinaryExpr {
///     left: Expr::Identifier(a),
///     op: Operator::Eq,
///     right: Expr::Value(one),
/// });
///
/// let mut count = 0;
/// inspect(Node::BinaryExpr(eq), |node| {
///     count += 1;
///     node.kind() != NodeKind::Identifier
/// })
/// .unwrap();
///
/// // BinaryExpr, Identifier (pruned before its Ident), Operator, Value
/// assert_eq!(count, 4);
/// ```
pub fn inspect<'a, F>(root: impl Into<Node<'a>>, predicate: F) -> Result<(), WalkError>
where
    F: FnMut(Node<'a>) -> bool,
{
    Walker::default().inspect(root, predicate)
}
