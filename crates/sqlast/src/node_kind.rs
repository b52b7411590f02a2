//! Node kind tags.
//!
//! Every [`Node`](crate::Node) variant has exactly one [`NodeKind`]. The tag
//! is what visitors usually match on when they only care about the shape of a
//! node and not its fields.

use serde::{Deserialize, Serialize};

/// The kind of a SQL AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum NodeKind {
    // Identifiers
    /// A single, possibly quoted, identifier.
    Ident,
    /// An identifier used as an expression.
    Identifier,
    /// A dotted identifier used as an expression (`t.a`).
    CompoundIdentifier,
    /// A dotted object name (`schema.table`).
    ObjectName,
    /// `*`, either in a projection or as a function argument.
    Wildcard,

    // Scalar leaves
    /// A literal value.
    Value,
    /// A unary or binary operator.
    Operator,
    /// A data type marker.
    DataType,

    // Scalar expressions
    /// `expr IS NULL`.
    IsNull,
    /// `expr IS NOT NULL`.
    IsNotNull,
    /// `expr [NOT] IN (list)`.
    InList,
    /// `expr [NOT] IN (subquery)`.
    InSubquery,
    /// `expr [NOT] BETWEEN low AND high`.
    Between,
    /// `left op right`.
    BinaryExpr,
    /// `op expr`.
    Unary,
    /// `CAST(expr AS type)`.
    Cast,
    /// A parenthesized expression.
    Nested,
    /// A function call.
    Function,
    /// `CASE ... END`.
    Case,
    /// `[NOT] EXISTS (query)`.
    Exists,
    /// A scalar subquery.
    Subquery,

    // Windows
    /// `OVER (...)`.
    WindowSpec,
    /// `ROWS|RANGE|GROUPS ...` inside a window spec.
    WindowFrame,
    /// `ROWS`, `RANGE` or `GROUPS`.
    WindowFrameUnits,
    /// A frame bound such as `CURRENT ROW` or `3 PRECEDING`.
    WindowFrameBound,

    // Queries
    /// A complete query with optional CTEs, ORDER BY and LIMIT.
    Query,
    /// A common table expression.
    Cte,
    /// A `SELECT` block.
    Select,
    /// A `WHERE` clause.
    Where,
    /// A `VALUES` list.
    Values,
    /// `left UNION|EXCEPT|INTERSECT right`.
    SetOperation,
    /// `UNION`, `EXCEPT` or `INTERSECT`.
    SetOperator,
    /// A projection item without alias.
    UnnamedExpression,
    /// A projection item with alias.
    ExpressionWithAlias,
    /// `prefix.*` in a projection.
    QualifiedWildcard,
    /// One `ORDER BY` item.
    OrderByExpr,
    /// `LIMIT ... OFFSET ...`.
    Limit,

    // Table references and joins
    /// A named table reference.
    Table,
    /// A derived table (subquery in `FROM`).
    Derived,
    /// `left [type] JOIN right ON|USING ...`.
    QualifiedJoin,
    /// `left NATURAL [type] JOIN right`.
    NaturalJoin,
    /// `left CROSS JOIN right`.
    CrossJoin,
    /// The join type (`INNER`, `LEFT`, ...).
    JoinType,
    /// `ON condition`.
    JoinCondition,
    /// `USING (columns)`.
    NamedColumnsJoin,

    // DML
    /// `INSERT INTO`.
    Insert,
    /// `COPY ... FROM STDIN`.
    Copy,
    /// `UPDATE`.
    Update,
    /// `DELETE FROM`.
    Delete,
    /// `column = value` in `UPDATE ... SET`.
    Assignment,
    /// `EXPLAIN statement`.
    Explain,

    // DDL statements
    /// `CREATE TABLE`.
    CreateTable,
    /// `CREATE [MATERIALIZED] VIEW`.
    CreateView,
    /// `CREATE [UNIQUE] INDEX`.
    CreateIndex,
    /// `ALTER TABLE`.
    AlterTable,
    /// `DROP TABLE`.
    DropTable,
    /// `DROP VIEW`.
    DropView,
    /// `DROP INDEX`.
    DropIndex,

    // Column definitions
    /// A column definition in `CREATE TABLE` or `ADD COLUMN`.
    ColumnDef,
    /// `[CONSTRAINT name] spec` on a column.
    ColumnConstraint,
    /// `NOT NULL`.
    NotNullColumnSpec,
    /// `UNIQUE` or `PRIMARY KEY` on a column.
    UniqueColumnSpec,
    /// `REFERENCES table (columns)` on a column.
    ReferencesColumnSpec,
    /// `CHECK (expr)` on a column.
    CheckColumnSpec,

    // Table constraints
    /// `[CONSTRAINT name] spec` on a table.
    TableConstraint,
    /// `UNIQUE (columns)` or `PRIMARY KEY (columns)`.
    UniqueTableConstraint,
    /// `FOREIGN KEY (columns) REFERENCES ...`.
    ReferentialTableConstraint,
    /// The `REFERENCES table (columns)` part of a foreign key.
    ReferenceKeyExpr,
    /// `CHECK (expr)` on a table.
    CheckTableConstraint,

    // ALTER TABLE actions
    /// `ADD COLUMN`.
    AddColumnTableAction,
    /// `ALTER COLUMN`.
    AlterColumnTableAction,
    /// `DROP COLUMN`.
    RemoveColumnTableAction,
    /// `ADD CONSTRAINT`.
    AddConstraintTableAction,
    /// `DROP CONSTRAINT`.
    DropConstraintTableAction,

    // ALTER COLUMN actions
    /// `SET DEFAULT expr`.
    SetDefaultColumnAction,
    /// `DROP DEFAULT`.
    DropDefaultColumnAction,
    /// `TYPE data_type`.
    AlterDataTypeColumnAction,
    /// `SET NOT NULL`.
    SetNotNullColumnAction,
    /// `DROP NOT NULL`.
    DropNotNullColumnAction,

    /// A dialect-specific node, see [`DialectNode`](crate::DialectNode).
    Dialect,
}

impl NodeKind {
    /// Returns true if nodes of this kind never have children.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::Ident
                | NodeKind::Wildcard
                | NodeKind::Value
                | NodeKind::Operator
                | NodeKind::DataType
                | NodeKind::WindowFrameUnits
                | NodeKind::WindowFrameBound
                | NodeKind::SetOperator
                | NodeKind::JoinType
                | NodeKind::NotNullColumnSpec
                | NodeKind::UniqueColumnSpec
                | NodeKind::DropDefaultColumnAction
                | NodeKind::SetNotNullColumnAction
                | NodeKind::DropNotNullColumnAction
        )
    }

    /// Returns true if this kind is a top-level statement.
    #[inline]
    pub const fn is_statement(&self) -> bool {
        matches!(
            self,
            NodeKind::Query
                | NodeKind::Insert
                | NodeKind::Copy
                | NodeKind::Update
                | NodeKind::Delete
                | NodeKind::Explain
                | NodeKind::CreateTable
                | NodeKind::CreateView
                | NodeKind::CreateIndex
                | NodeKind::AlterTable
                | NodeKind::DropTable
                | NodeKind::DropView
                | NodeKind::DropIndex
        )
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Variant names already match the serde casing.
        std::fmt::Debug::fmt(self, f)
    }
}
