//! Queries, `SELECT` blocks, projections and their clauses.

use super::{Expr, Ident, ObjectName, TableReference, Wildcard};

/// A complete query: `[WITH ctes] body [ORDER BY ...] [LIMIT ...]`.
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    pub ctes: &'a [Cte<'a>],
    pub body: SetExpr<'a>,
    pub order_by: &'a [OrderByExpr<'a>],
    pub limit: Option<Limit<'a>>,
}

/// `alias AS (query)`
#[derive(Debug, Clone, Copy)]
pub struct Cte<'a> {
    pub alias: Ident<'a>,
    pub query: &'a Query<'a>,
}

category! {
    /// The body of a [`Query`].
    pub enum SetExpr<'a> {
        Select(&'a Select<'a>) => Select,
        /// A parenthesized query used as an operand of a set operation.
        Query(&'a Query<'a>) => Query,
        SetOperation(&'a SetOperation<'a>) => SetOperation,
        Values(&'a Values<'a>) => Values,
    }
}

/// `left UNION|EXCEPT|INTERSECT [ALL] right`
#[derive(Debug, Clone, Copy)]
pub struct SetOperation<'a> {
    pub left: SetExpr<'a>,
    pub op: SetOperator,
    pub right: SetExpr<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetOperator {
    Union { all: bool },
    Except { all: bool },
    Intersect { all: bool },
}

/// A `SELECT` block.
#[derive(Debug, Clone, Copy)]
pub struct Select<'a> {
    pub distinct: bool,
    pub projection: &'a [SelectItem<'a>],
    pub from: &'a [TableReference<'a>],
    pub selection: Option<Where<'a>>,
    pub group_by: &'a [Expr<'a>],
    pub having: Option<Expr<'a>>,
}

/// `WHERE condition`, shared by `SELECT`, `UPDATE`, `DELETE` and partial
/// indexes.
#[derive(Debug, Clone, Copy)]
pub struct Where<'a> {
    pub condition: Expr<'a>,
}

/// `VALUES (row), (row), ...`
#[derive(Debug, Clone, Copy)]
pub struct Values<'a> {
    pub rows: &'a [&'a [Expr<'a>]],
}

category! {
    /// One item of a `SELECT` projection.
    pub enum SelectItem<'a> {
        Unnamed(&'a UnnamedExpression<'a>) => UnnamedExpression,
        WithAlias(&'a ExpressionWithAlias<'a>) => ExpressionWithAlias,
        QualifiedWildcard(&'a QualifiedWildcard<'a>) => QualifiedWildcard,
        Wildcard(&'a Wildcard) => Wildcard,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct UnnamedExpression<'a> {
    pub expr: Expr<'a>,
}

/// `expr AS alias`
#[derive(Debug, Clone, Copy)]
pub struct ExpressionWithAlias<'a> {
    pub expr: Expr<'a>,
    pub alias: Ident<'a>,
}

/// `prefix.*`
#[derive(Debug, Clone, Copy)]
pub struct QualifiedWildcard<'a> {
    pub prefix: ObjectName<'a>,
}

/// `expr [ASC|DESC] [NULLS FIRST|LAST]`
#[derive(Debug, Clone, Copy)]
pub struct OrderByExpr<'a> {
    pub expr: Expr<'a>,
    pub asc: Option<bool>,
    pub nulls_first: Option<bool>,
}

/// `LIMIT n|ALL [OFFSET m]`
///
/// `limit_value` is `None` for `LIMIT ALL` and for a bare `OFFSET`.
#[derive(Debug, Clone, Copy)]
pub struct Limit<'a> {
    pub all: bool,
    pub limit_value: Option<Expr<'a>>,
    pub offset: Option<Expr<'a>>,
}
