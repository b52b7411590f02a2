//! Scalar expressions, literals, operators and window specifications.

use super::{CompoundIdentifier, DataType, Identifier, ObjectName, OrderByExpr, Query, Wildcard};
use crate::dialect::DialectNode;

category! {
    /// A scalar expression.
    pub enum Expr<'a> {
        Identifier(&'a Identifier<'a>) => Identifier,
        CompoundIdentifier(&'a CompoundIdentifier<'a>) => CompoundIdentifier,
        Wildcard(&'a Wildcard) => Wildcard,
        Value(&'a Value<'a>) => Value,
        IsNull(&'a IsNull<'a>) => IsNull,
        IsNotNull(&'a IsNotNull<'a>) => IsNotNull,
        InList(&'a InList<'a>) => InList,
        InSubquery(&'a InSubquery<'a>) => InSubquery,
        Between(&'a Between<'a>) => Between,
        Binary(&'a BinaryExpr<'a>) => BinaryExpr,
        Unary(&'a UnaryExpr<'a>) => Unary,
        Cast(&'a Cast<'a>) => Cast,
        Nested(&'a Nested<'a>) => Nested,
        Function(&'a Function<'a>) => Function,
        Case(&'a Case<'a>) => Case,
        Exists(&'a Exists<'a>) => Exists,
        Subquery(&'a Subquery<'a>) => Subquery,
        /// A dialect-specific expression.
        Dialect(&'a dyn DialectNode<'a>) => Dialect,
    }
}

/// A literal value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Null,
    Long(i64),
    Double(f64),
    SingleQuotedString(&'a str),
    /// `N'...'`
    NationalStringLiteral(&'a str),
    Boolean(bool),
    /// `DATE '...'`
    Date(&'a str),
    /// `TIME '...'`
    Time(&'a str),
    /// `DATETIME '...'`
    DateTime(&'a str),
    /// `TIMESTAMP '...'`
    Timestamp(&'a str),
}

/// Unary and binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Modulus,
    Gt,
    Lt,
    GtEq,
    LtEq,
    Eq,
    NotEq,
    And,
    Or,
    Not,
    Like,
    NotLike,
}

impl Operator {
    /// Returns the SQL spelling of the operator.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulus => "%",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::GtEq => ">=",
            Operator::LtEq => "<=",
            Operator::Eq => "=",
            Operator::NotEq => "<>",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::Like => "LIKE",
            Operator::NotLike => "NOT LIKE",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `expr IS NULL`
#[derive(Debug, Clone, Copy)]
pub struct IsNull<'a> {
    pub expr: Expr<'a>,
}

/// `expr IS NOT NULL`
#[derive(Debug, Clone, Copy)]
pub struct IsNotNull<'a> {
    pub expr: Expr<'a>,
}

/// `expr [NOT] IN (list)`
#[derive(Debug, Clone, Copy)]
pub struct InList<'a> {
    pub expr: Expr<'a>,
    pub list: &'a [Expr<'a>],
    pub negated: bool,
}

/// `expr [NOT] IN (subquery)`
#[derive(Debug, Clone, Copy)]
pub struct InSubquery<'a> {
    pub expr: Expr<'a>,
    pub subquery: &'a Query<'a>,
    pub negated: bool,
}

/// `expr [NOT] BETWEEN low AND high`
#[derive(Debug, Clone, Copy)]
pub struct Between<'a> {
    pub expr: Expr<'a>,
    pub negated: bool,
    pub low: Expr<'a>,
    pub high: Expr<'a>,
}

/// `left op right`
#[derive(Debug, Clone, Copy)]
pub struct BinaryExpr<'a> {
    pub left: Expr<'a>,
    pub op: Operator,
    pub right: Expr<'a>,
}

/// `op expr`
#[derive(Debug, Clone, Copy)]
pub struct UnaryExpr<'a> {
    pub op: Operator,
    pub expr: Expr<'a>,
}

/// `CAST(expr AS data_type)`
#[derive(Debug, Clone, Copy)]
pub struct Cast<'a> {
    pub expr: Expr<'a>,
    pub data_type: DataType<'a>,
}

/// `(expr)`
#[derive(Debug, Clone, Copy)]
pub struct Nested<'a> {
    pub expr: Expr<'a>,
}

/// A function call, optionally with an `OVER` window.
#[derive(Debug, Clone, Copy)]
pub struct Function<'a> {
    pub name: ObjectName<'a>,
    pub args: &'a [Expr<'a>],
    pub over: Option<WindowSpec<'a>>,
    pub distinct: bool,
}

/// `CASE [operand] WHEN ... THEN ... [ELSE ...] END`
#[derive(Debug, Clone, Copy)]
pub struct Case<'a> {
    pub operand: Option<Expr<'a>>,
    pub whens: &'a [CaseWhen<'a>],
    pub else_result: Option<Expr<'a>>,
}

/// One `WHEN condition THEN result` arm of a [`Case`].
///
/// Not a node itself: its two expressions are children of the `Case`.
#[derive(Debug, Clone, Copy)]
pub struct CaseWhen<'a> {
    pub condition: Expr<'a>,
    pub result: Expr<'a>,
}

/// `[NOT] EXISTS (query)`
#[derive(Debug, Clone, Copy)]
pub struct Exists<'a> {
    pub query: &'a Query<'a>,
    pub negated: bool,
}

/// A parenthesized subquery used as a scalar expression.
#[derive(Debug, Clone, Copy)]
pub struct Subquery<'a> {
    pub query: &'a Query<'a>,
}

/// `OVER (PARTITION BY ... ORDER BY ... frame)`
#[derive(Debug, Clone, Copy)]
pub struct WindowSpec<'a> {
    pub partition_by: &'a [Expr<'a>],
    pub order_by: &'a [OrderByExpr<'a>],
    pub window_frame: Option<WindowFrame>,
}

/// `units BETWEEN start_bound AND end_bound`, or `units start_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowFrame {
    pub units: WindowFrameUnits,
    pub start_bound: WindowFrameBound,
    pub end_bound: Option<WindowFrameBound>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowFrameUnits {
    Rows,
    Range,
    Groups,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WindowFrameBound {
    /// `CURRENT ROW`
    CurrentRow,
    /// `UNBOUNDED PRECEDING`
    UnboundedPreceding,
    /// `UNBOUNDED FOLLOWING`
    UnboundedFollowing,
    /// `n PRECEDING`
    Preceding(u64),
    /// `n FOLLOWING`
    Following(u64),
}
