//! The walk engine.
//!
//! [`Walker`] drives a [`Visitor`] over a tree depth-first: each node gets its
//! [`Event::Enter`] before any of its children and its [`Event::Leave`] after
//! all of them. The children of each kind and their order come from the
//! child-order table in [`children`](super::children).

use tracing::{debug, trace, warn};

use super::children::for_each_child;
use super::{Event, Inspector, Visitor, WalkError};
use crate::Node;
use crate::dialect::DialectRegistry;

/// A depth-first walker over SQL AST nodes.
///
/// A default walker knows every built-in node kind. Dialect node kinds must
/// be registered through [`Walker::builder`] before they can be walked.
///
/// The walker holds no traversal state, so one instance can serve any number
/// of walks, including concurrent ones on different threads.
#[derive(Debug, Clone, Default)]
pub struct Walker {
    registry: DialectRegistry,
}

impl Walker {
    /// Creates a walker that knows only the built-in node kinds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a builder for registering dialect node kinds.
    pub fn builder() -> WalkerBuilder {
        WalkerBuilder::default()
    }

    /// Returns the dialect registry of this walker.
    pub fn registry(&self) -> &DialectRegistry {
        &self.registry
    }

    /// Walks `root` and its whole subtree with `visitor`.
    ///
    /// Returns [`WalkError::UnregisteredKind`] if the tree contains a dialect
    /// node whose kind this walker does not know. The walk stops at that node:
    /// no further events are delivered, including pending [`Event::Leave`]s.
    pub fn walk<'a>(
        &self,
        visitor: &mut dyn Visitor<'a>,
        root: impl Into<Node<'a>>,
    ) -> Result<(), WalkError> {
        self.walk_node(visitor, root.into())
    }

    /// Walks `root`, calling `predicate` on every entered node.
    ///
    /// A node for which `predicate` returns `false` is not descended into.
    pub fn inspect<'a, F>(&self, root: impl Into<Node<'a>>, predicate: F) -> Result<(), WalkError>
    where
        F: FnMut(Node<'a>) -> bool,
    {
        self.walk(&mut Inspector::new(predicate), root)
    }

    /// Returns the immediate children of `node`, in walk order.
    pub fn children<'a>(&self, node: Node<'a>) -> Result<Vec<Node<'a>>, WalkError> {
        let mut children = Vec::new();
        for_each_child(&self.registry, node, &mut |child: Node<'a>| {
            children.push(child);
            Ok(())
        })?;
        Ok(children)
    }

    fn walk_node<'a>(&self, visitor: &mut dyn Visitor<'a>, node: Node<'a>) -> Result<(), WalkError> {
        let Some(child_visitor) = visitor.visit(Event::Enter(node)) else {
            trace!(kind = %node.kind(), "Pruned subtree");
            return Ok(());
        };

        for_each_child(&self.registry, node, &mut |child: Node<'a>| {
            self.walk_node(&mut *child_visitor, child)
        })?;

        let _ = visitor.visit(Event::Leave);
        Ok(())
    }
}

/// Builder for a [`Walker`] with dialect node kinds.
///
/// # Example
///
/// ```rust
/// use sqlast::Walker;
///
/// let walker = Walker::builder()
///     .register("pg_lateral_function", &["function", "alias"])
///     .register("mysql_index_hint", &["index_names"])
///     .build();
///
/// assert!(walker.registry().contains("mysql_index_hint"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WalkerBuilder {
    registry: DialectRegistry,
}

impl WalkerBuilder {
    /// Creates a builder with no dialect kinds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the child order of a dialect kind.
    ///
    /// `order` lists the names of the fields holding children, in walk order.
    /// Registering a kind twice keeps the last order.
    pub fn register(mut self, kind: &'static str, order: &'static [&'static str]) -> Self {
        if self.registry.register(kind, order).is_some() {
            warn!("Dialect kind `{}` registered twice; keeping the last child order", kind);
        }
        self
    }

    /// Replaces the whole dialect registry.
    pub fn registry(mut self, registry: DialectRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Builds the walker.
    pub fn build(self) -> Walker {
        if !self.registry.is_empty() {
            debug!("Built walker with {} dialect kinds", self.registry.len());
        }
        Walker {
            registry: self.registry,
        }
    }
}

/// Walks `root` and its whole subtree with `visitor`, using a default
/// [`Walker`].
///
/// # Example
///
/// ```rust
/// use sqlast::{walk, AstArena, Event, Ident, Identifier, Node, Span, Visitor};
///
/// #[derive(Default)]
/// struct Idents<'a> {
///     names: Vec<&'a str>,
/// }
///
/// impl<'a> Visitor<'a> for Idents<'a> {
///     fn visit(&mut self, event: Event<'a>) -> Option<&mut dyn Visitor<'a>> {
///         if let Some(ident) = event.node().and_then(|n| n.as_ident()) {
///             self.names.push(ident.value);
///         }
///         Some(self)
///     }
/// }
///
/// let arena = AstArena::new();
/// let ident = arena.alloc(Identifier::new(Ident::new("a", Span::new(0, 1))));
///
/// let mut idents = Idents::default();
/// walk(&mut idents, Node::Identifier(ident)).unwrap();
/// assert_eq!(idents.names, vec!["a"]);
/// ```
pub fn walk<'a>(visitor: &mut dyn Visitor<'a>, root: impl Into<Node<'a>>) -> Result<(), WalkError> {
    Walker::default().walk(visitor, root)
}
