//! # sqlast
//!
//! SQL abstract syntax tree and its depth-first traversal engine.
//!
//! This crate provides the node model produced by a SQL parser and a uniform
//! way to walk it. Consumers (symbol resolution, rewriting, linting) implement
//! the one-method [`Visitor`] trait and never re-encode the grammar: the order
//! in which each node kind's children are visited is owned by the walker.
//!
//! ## Architecture
//!
//! - Nodes are allocated in an [`AstArena`] (`bumpalo`) and borrow from it
//! - Every node type is `Copy`; fields holding other nodes use small category
//!   enums ([`Expr`], [`SetExpr`], [`TableReference`], ...)
//! - A visitor sees every node through the uniform [`Node`] handle
//! - Dialect-specific constructs plug in through [`DialectNode`] and a
//!   child-order registry on the [`Walker`]
//!
//! ## Example
//!
//! ```rust
//! use sqlast::{
//!     AstArena, BinaryExpr, Event, Expr, Ident, Identifier, Node, NodeKind, Operator, Span,
//!     Value, Visitor, walk,
//! };
//!
//! /// Records entered kinds, skipping everything below a binary expression's
//! /// left operand.
//! #[derive(Default)]
//! struct Kinds(Vec<NodeKind>);
//!
//! impl<'a> Visitor<'a> for Kinds {
//!     fn visit(&mut self, event: Event<'a>) -> Option<&mut dyn Visitor<'a>> {
//!         let node = event.node()?;
//!         self.0.push(node.kind());
//!         (node.kind() != NodeKind::Identifier).then_some(self as &mut dyn Visitor<'a>)
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let a = arena.alloc(Identifier::new(Ident::new("a", Span::new(0, 1))));
//! let one = arena.alloc(Value::Long(1));
//! let eq = arena.alloc(BinaryExpr {
//!     left: Expr::Identifier(a),
//!     op: Operator::Eq,
//!     right: Expr::Value(one),
//! });
//!
//! let mut kinds = Kinds::default();
//! walk(&mut kinds, Node::BinaryExpr(eq)).unwrap();
//! assert_eq!(
//!     kinds.0,
//!     vec![NodeKind::BinaryExpr, NodeKind::Identifier, NodeKind::Operator, NodeKind::Value]
//! );
//! ```

mod arena;
pub mod dialect;
pub mod node;
mod node_kind;
mod span;
pub mod visitor;

pub use arena::AstArena;
pub use dialect::{DialectNode, DialectRegistry, Field};
pub use node::*;
pub use node_kind::NodeKind;
pub use span::Span;
pub use visitor::{Event, Inspector, Visitor, WalkError, Walker, WalkerBuilder, inspect, walk};

#[cfg(test)]
pub mod test_utils;
