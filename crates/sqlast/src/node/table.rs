//! Table references and join forms.

use super::{Expr, Ident, ObjectName, Query};
use crate::dialect::DialectNode;

category! {
    /// An item of a `FROM` clause.
    pub enum TableReference<'a> {
        Table(&'a Table<'a>) => Table,
        Derived(&'a Derived<'a>) => Derived,
        QualifiedJoin(&'a QualifiedJoin<'a>) => QualifiedJoin,
        NaturalJoin(&'a NaturalJoin<'a>) => NaturalJoin,
        CrossJoin(&'a CrossJoin<'a>) => CrossJoin,
        /// A dialect-specific table factor.
        Dialect(&'a dyn DialectNode<'a>) => Dialect,
    }
}

/// `name [AS alias]`, optionally a table function call with hints.
#[derive(Debug, Clone, Copy)]
pub struct Table<'a> {
    pub name: ObjectName<'a>,
    pub alias: Option<Ident<'a>>,
    /// Table function arguments.
    pub args: &'a [Expr<'a>],
    /// `WITH (hints)`
    pub with_hints: &'a [Expr<'a>],
}

/// `[LATERAL] (subquery) [AS alias]`
#[derive(Debug, Clone, Copy)]
pub struct Derived<'a> {
    pub lateral: bool,
    pub subquery: &'a Query<'a>,
    pub alias: Option<Ident<'a>>,
}

/// `left [join_type] JOIN right ON ...|USING (...)`
#[derive(Debug, Clone, Copy)]
pub struct QualifiedJoin<'a> {
    pub left: TableReference<'a>,
    pub join_type: JoinType,
    pub right: TableReference<'a>,
    pub spec: JoinSpec<'a>,
}

/// `left NATURAL [join_type] JOIN right`
#[derive(Debug, Clone, Copy)]
pub struct NaturalJoin<'a> {
    pub left: TableReference<'a>,
    pub join_type: JoinType,
    pub right: TableReference<'a>,
}

/// `left CROSS JOIN right`
#[derive(Debug, Clone, Copy)]
pub struct CrossJoin<'a> {
    pub left: TableReference<'a>,
    pub right: TableReference<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
}

category! {
    /// The join specification of a [`QualifiedJoin`].
    pub enum JoinSpec<'a> {
        On(&'a JoinCondition<'a>) => JoinCondition,
        Using(&'a NamedColumnsJoin<'a>) => NamedColumnsJoin,
    }
}

/// `ON search_condition`
#[derive(Debug, Clone, Copy)]
pub struct JoinCondition<'a> {
    pub search_condition: Expr<'a>,
}

/// `USING (columns)`
#[derive(Debug, Clone, Copy)]
pub struct NamedColumnsJoin<'a> {
    pub columns: &'a [Ident<'a>],
}
