//! Dialect-specific nodes and their child-order registry.
//!
//! The built-in node kinds have their child order fixed at compile time. A
//! dialect crate that needs a construct the core grammar does not define
//! (a PostgreSQL `LATERAL` function, a MySQL index hint, ...) implements
//! [`DialectNode`] for it and registers the kind's child order on the
//! [`Walker`](crate::Walker) it traverses with. A dialect kind without a
//! registration is a traversal contract violation, see
//! [`WalkError::UnregisteredKind`](crate::WalkError::UnregisteredKind).
//!
//! # Example
//!
//! ```rust
//! use sqlast::{AstArena, DialectNode, Expr, Field, Ident, Identifier, Node, Span, Walker};
//!
//! /// `expr::type`, a PostgreSQL-style cast.
//! #[derive(Debug)]
//! struct DoubleColonCast<'a> {
//!     expr: Expr<'a>,
//!     type_name: Ident<'a>,
//! }
//!
//! impl<'a> DialectNode<'a> for DoubleColonCast<'a> {
//!     fn kind(&self) -> &'static str {
//!         "pg_double_colon_cast"
//!     }
//!
//!     fn field(&'a self, name: &str) -> Field<'a> {
//!         match name {
//!             "expr" => Field::One(self.expr.into()),
//!             "type_name" => Field::One(Node::Ident(&self.type_name)),
//!             _ => Field::Absent,
//!         }
//!     }
//! }
//!
//! let arena = AstArena::new();
//! let ident = arena.alloc(Identifier::new(Ident::new("x", Span::new(0, 1))));
//! let cast = arena.alloc(DoubleColonCast {
//!     expr: Expr::Identifier(ident),
//!     type_name: Ident::new("int", Span::new(3, 6)),
//! });
//!
//! let walker = Walker::builder()
//!     .register("pg_double_colon_cast", &["expr", "type_name"])
//!     .build();
//!
//! let children = walker.children(Node::Dialect(cast)).unwrap();
//! assert_eq!(children.len(), 2);
//! ```

use std::collections::HashMap;

use crate::Node;

/// A node whose shape is declared at run time by a dialect.
pub trait DialectNode<'a>: std::fmt::Debug {
    /// Stable name of this dialect kind, used as the registry key.
    fn kind(&self) -> &'static str;

    /// Returns the child (or children) held in the field called `name`.
    ///
    /// Field names that this node does not have, and optional fields that are
    /// not present, return [`Field::Absent`].
    fn field(&'a self, name: &str) -> Field<'a>;
}

/// The value of one field of a [`DialectNode`].
#[derive(Debug, Clone, Default)]
pub enum Field<'a> {
    /// No child: an optional field that is not present.
    #[default]
    Absent,
    /// A single child.
    One(Node<'a>),
    /// A list of children, in lexical order.
    Many(Vec<Node<'a>>),
}

impl<'a> Field<'a> {
    /// Returns the number of children in this field.
    pub fn len(&self) -> usize {
        match self {
            Field::Absent => 0,
            Field::One(_) => 1,
            Field::Many(nodes) => nodes.len(),
        }
    }

    /// Returns true if the field holds no child.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<'a> From<Option<Node<'a>>> for Field<'a> {
    fn from(node: Option<Node<'a>>) -> Self {
        node.map_or(Field::Absent, Field::One)
    }
}

/// Child orders of dialect node kinds, keyed by [`DialectNode::kind`].
///
/// Each entry lists the field names that hold children, in traversal order.
#[derive(Debug, Clone, Default)]
pub struct DialectRegistry {
    orders: HashMap<&'static str, &'static [&'static str]>,
}

impl DialectRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the child order of a dialect kind.
    ///
    /// Returns the previously registered order, if any.
    pub fn register(
        &mut self,
        kind: &'static str,
        order: &'static [&'static str],
    ) -> Option<&'static [&'static str]> {
        self.orders.insert(kind, order)
    }

    /// Returns the child order registered for `kind`.
    pub fn child_order(&self, kind: &str) -> Option<&'static [&'static str]> {
        self.orders.get(kind).copied()
    }

    /// Returns true if `kind` has a registered child order.
    pub fn contains(&self, kind: &str) -> bool {
        self.orders.contains_key(kind)
    }

    /// Returns the number of registered kinds.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Returns true if no dialect kind is registered.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Iterates over the registered kind names, in no particular order.
    pub fn kinds(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.orders.keys().copied()
    }
}
