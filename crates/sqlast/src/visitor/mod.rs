//! Depth-first traversal of the SQL AST.
//!
//! # Overview
//!
//! - [`Visitor`] - the single-method visitor protocol
//! - [`Event`] - entry and exit notifications
//! - [`Walker`] / [`walk`] - the traversal engine
//! - [`Inspector`] / [`inspect`] - predicate-driven traversal
//!
//! # Examples
//!
//! ## Collecting column references
//!
//! ```rust
//! use sqlast::{inspect, AstArena, Expr, Ident, Identifier, Nested, Node, Span};
//!
//! let arena = AstArena::new();
//! let a = arena.alloc(Identifier::new(Ident::new("a", Span::new(1, 2))));
//! let nested = arena.alloc(Nested { expr: Expr::Identifier(a) });
//!
//! let mut columns = Vec::new();
//! inspect(Node::Nested(nested), |node| {
//!     if let Node::Identifier(id) = node {
//!         columns.push(id.ident.value);
//!     }
//!     true
//! })
//! .unwrap();
//!
//! assert_eq!(columns, vec!["a"]);
//! ```
//!
//! ## Tracking scope with entry and exit events
//!
//! Exit events carry no node: a visitor that needs to know which node is being
//! left keeps its own stack, pushing on [`Event::Enter`] and popping on
//! [`Event::Leave`].
//!
//! ```rust
//! use sqlast::{walk, AstArena, Event, Ident, Identifier, Node, NodeKind, Span, Visitor};
//!
//! #[derive(Default)]
//! struct Stack {
//!     open: Vec<NodeKind>,
//!     closed: Vec<NodeKind>,
//! }
//!
//! impl<'a> Visitor<'a> for Stack {
//!     fn visit(&mut self, event: Event<'a>) -> Option<&mut dyn Visitor<'a>> {
//!         match event {
//!             Event::Enter(node) => self.open.push(node.kind()),
//!             Event::Leave => {
//!                 if let Some(kind) = self.open.pop() {
//!                     self.closed.push(kind);
//!                 }
//!             }
//!         }
//!         Some(self)
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let a = arena.alloc(Identifier::new(Ident::new("a", Span::new(0, 1))));
//!
//! let mut stack = Stack::default();
//! walk(&mut stack, Node::Identifier(a)).unwrap();
//! assert_eq!(stack.closed, vec![NodeKind::Ident, NodeKind::Identifier]);
//! ```

mod children;
mod error;
mod inspect;
mod visit;
mod walk;

pub use error::WalkError;
pub use inspect::{Inspector, inspect};
pub use visit::{Event, Visitor};
pub use walk::{Walker, WalkerBuilder, walk};
