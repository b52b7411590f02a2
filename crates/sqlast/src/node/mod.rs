//! SQL AST node model.
//!
//! Node types are grouped by grammar area:
//!
//! - [`ident`] - identifiers and object names
//! - [`expr`] - scalar expressions, literals, operators and windows
//! - [`data_type`] - data type markers
//! - [`query`] - queries, `SELECT` and projections
//! - [`table`] - table references and joins
//! - [`ddl`] - `CREATE`/`ALTER`/`DROP` statements and their fragments
//! - [`dml`] - `INSERT`/`UPDATE`/`DELETE`/`COPY`/`EXPLAIN` and [`Statement`]
//!
//! Every node type is `Copy` and borrows its children from an
//! [`AstArena`](crate::AstArena). Fields that hold another node kind use one of
//! the category enums ([`Expr`], [`SetExpr`], [`TableReference`], ...), each of
//! which converts into the uniform [`Node`] handle the visitor receives.

/// Defines a category enum whose variants each borrow one node type, together
/// with its conversion into [`Node`].
macro_rules! category {
    (
        $(#[$meta:meta])*
        pub enum $name:ident<$lt:lifetime> {
            $(
                $(#[$vmeta:meta])*
                $variant:ident(&$vlt:lifetime $ty:ty) => $node:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub enum $name<$lt> {
            $(
                $(#[$vmeta])*
                $variant(&$vlt $ty),
            )*
        }

        impl<$lt> From<$name<$lt>> for $crate::node::Node<$lt> {
            #[inline]
            fn from(value: $name<$lt>) -> Self {
                match value {
                    $( $name::$variant(n) => $crate::node::Node::$node(n), )*
                }
            }
        }
    };
}

pub mod data_type;
pub mod ddl;
pub mod dml;
pub mod expr;
pub mod ident;
pub mod query;
pub mod table;

use crate::NodeKind;
use crate::dialect::DialectNode;

pub use data_type::DataType;
pub use ddl::*;
pub use dml::*;
pub use expr::*;
pub use ident::*;
pub use query::*;
pub use table::*;

/// Defines [`Node`] from the list of `Kind(Type)` pairs, keeping
/// [`Node::kind`] in lockstep with the variant set.
macro_rules! node {
    ($lt:lifetime; $( $variant:ident($ty:ty) ),* $(,)?) => {
        /// A borrowed handle to any node of the AST.
        ///
        /// This is the value visitors receive on entry. It is `Copy` and
        /// compares by identity: two handles are equal when they point at the
        /// same arena node.
        #[derive(Debug, Clone, Copy)]
        pub enum Node<$lt> {
            $( $variant(&$lt $ty), )*
        }

        impl<$lt> Node<$lt> {
            /// Returns the kind tag of this node.
            pub fn kind(&self) -> NodeKind {
                match self {
                    $( Node::$variant(_) => NodeKind::$variant, )*
                }
            }

            fn addr(&self) -> *const () {
                match self {
                    $( Node::$variant(n) => *n as *const $ty as *const (), )*
                }
            }
        }
    };
}

node! { 'a;
    Ident(Ident<'a>),
    Identifier(Identifier<'a>),
    CompoundIdentifier(CompoundIdentifier<'a>),
    ObjectName(ObjectName<'a>),
    Wildcard(Wildcard),

    Value(Value<'a>),
    Operator(Operator),
    DataType(DataType<'a>),

    IsNull(IsNull<'a>),
    IsNotNull(IsNotNull<'a>),
    InList(InList<'a>),
    InSubquery(InSubquery<'a>),
    Between(Between<'a>),
    BinaryExpr(BinaryExpr<'a>),
    Unary(UnaryExpr<'a>),
    Cast(Cast<'a>),
    Nested(Nested<'a>),
    Function(Function<'a>),
    Case(Case<'a>),
    Exists(Exists<'a>),
    Subquery(Subquery<'a>),

    WindowSpec(WindowSpec<'a>),
    WindowFrame(WindowFrame),
    WindowFrameUnits(WindowFrameUnits),
    WindowFrameBound(WindowFrameBound),

    Query(Query<'a>),
    Cte(Cte<'a>),
    Select(Select<'a>),
    Where(Where<'a>),
    Values(Values<'a>),
    SetOperation(SetOperation<'a>),
    SetOperator(SetOperator),
    UnnamedExpression(UnnamedExpression<'a>),
    ExpressionWithAlias(ExpressionWithAlias<'a>),
    QualifiedWildcard(QualifiedWildcard<'a>),
    OrderByExpr(OrderByExpr<'a>),
    Limit(Limit<'a>),

    Table(Table<'a>),
    Derived(Derived<'a>),
    QualifiedJoin(QualifiedJoin<'a>),
    NaturalJoin(NaturalJoin<'a>),
    CrossJoin(CrossJoin<'a>),
    JoinType(JoinType),
    JoinCondition(JoinCondition<'a>),
    NamedColumnsJoin(NamedColumnsJoin<'a>),

    Insert(Insert<'a>),
    Copy(CopyStatement<'a>),
    Update(Update<'a>),
    Delete(Delete<'a>),
    Assignment(Assignment<'a>),
    Explain(Explain<'a>),

    CreateTable(CreateTable<'a>),
    CreateView(CreateView<'a>),
    CreateIndex(CreateIndex<'a>),
    AlterTable(AlterTable<'a>),
    DropTable(DropTable<'a>),
    DropView(DropView<'a>),
    DropIndex(DropIndex<'a>),

    ColumnDef(ColumnDef<'a>),
    ColumnConstraint(ColumnConstraint<'a>),
    NotNullColumnSpec(NotNullColumnSpec),
    UniqueColumnSpec(UniqueColumnSpec),
    ReferencesColumnSpec(ReferencesColumnSpec<'a>),
    CheckColumnSpec(CheckColumnSpec<'a>),

    TableConstraint(TableConstraint<'a>),
    UniqueTableConstraint(UniqueTableConstraint<'a>),
    ReferentialTableConstraint(ReferentialTableConstraint<'a>),
    ReferenceKeyExpr(ReferenceKeyExpr<'a>),
    CheckTableConstraint(CheckTableConstraint<'a>),

    AddColumnTableAction(AddColumnTableAction<'a>),
    AlterColumnTableAction(AlterColumnTableAction<'a>),
    RemoveColumnTableAction(RemoveColumnTableAction<'a>),
    AddConstraintTableAction(AddConstraintTableAction<'a>),
    DropConstraintTableAction(DropConstraintTableAction<'a>),

    SetDefaultColumnAction(SetDefaultColumnAction<'a>),
    DropDefaultColumnAction(DropDefaultColumnAction),
    AlterDataTypeColumnAction(AlterDataTypeColumnAction<'a>),
    SetNotNullColumnAction(SetNotNullColumnAction),
    DropNotNullColumnAction(DropNotNullColumnAction),

    Dialect(dyn DialectNode<'a> + 'a),
}

impl<'a> Node<'a> {
    /// Returns true if this node's kind never has children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.kind().is_leaf()
    }

    /// Returns the identifier if this node is an [`Ident`].
    #[inline]
    pub fn as_ident(&self) -> Option<&'a Ident<'a>> {
        match *self {
            Node::Ident(ident) => Some(ident),
            _ => None,
        }
    }

    /// Returns the dialect kind name if this node is a [`Node::Dialect`].
    #[inline]
    pub fn dialect_kind(&self) -> Option<&'static str> {
        match *self {
            Node::Dialect(d) => Some(d.kind()),
            _ => None,
        }
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.kind() == other.kind() && std::ptr::eq(self.addr(), other.addr())
    }
}

impl Eq for Node<'_> {}
