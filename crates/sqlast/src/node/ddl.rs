//! DDL statements and their fragments: column definitions, constraints and
//! `ALTER TABLE` actions.

use super::{DataType, Expr, Ident, ObjectName, Query, Where};

/// `CREATE TABLE [IF NOT EXISTS] name (elements)`
#[derive(Debug, Clone, Copy)]
pub struct CreateTable<'a> {
    pub name: ObjectName<'a>,
    pub elements: &'a [TableElement<'a>],
    pub if_not_exists: bool,
}

category! {
    /// A column or a table constraint inside `CREATE TABLE (...)`.
    pub enum TableElement<'a> {
        Column(&'a ColumnDef<'a>) => ColumnDef,
        Constraint(&'a TableConstraint<'a>) => TableConstraint,
    }
}

/// `CREATE [MATERIALIZED] VIEW name AS query`
#[derive(Debug, Clone, Copy)]
pub struct CreateView<'a> {
    pub name: ObjectName<'a>,
    pub query: &'a Query<'a>,
    pub materialized: bool,
}

/// `CREATE [UNIQUE] INDEX [name] ON table [USING method] (columns) [WHERE ...]`
#[derive(Debug, Clone, Copy)]
pub struct CreateIndex<'a> {
    pub index_name: Option<Ident<'a>>,
    pub table_name: ObjectName<'a>,
    pub method_name: Option<Ident<'a>>,
    pub column_names: &'a [Ident<'a>],
    pub unique: bool,
    pub selection: Option<Where<'a>>,
}

/// `ALTER TABLE table_name action`
#[derive(Debug, Clone, Copy)]
pub struct AlterTable<'a> {
    pub table_name: ObjectName<'a>,
    pub action: AlterTableAction<'a>,
}

/// `DROP TABLE [IF EXISTS] names [CASCADE]`
#[derive(Debug, Clone, Copy)]
pub struct DropTable<'a> {
    pub names: &'a [ObjectName<'a>],
    pub if_exists: bool,
    pub cascade: bool,
}

/// `DROP VIEW [IF EXISTS] names [CASCADE]`
#[derive(Debug, Clone, Copy)]
pub struct DropView<'a> {
    pub names: &'a [ObjectName<'a>],
    pub if_exists: bool,
    pub cascade: bool,
}

/// `DROP INDEX index_names`
#[derive(Debug, Clone, Copy)]
pub struct DropIndex<'a> {
    pub index_names: &'a [Ident<'a>],
}

/// `name data_type [DEFAULT expr] [constraints]`
#[derive(Debug, Clone, Copy)]
pub struct ColumnDef<'a> {
    pub name: Ident<'a>,
    pub data_type: DataType<'a>,
    pub default: Option<Expr<'a>>,
    pub constraints: &'a [ColumnConstraint<'a>],
}

/// `[CONSTRAINT name] spec` attached to a column.
#[derive(Debug, Clone, Copy)]
pub struct ColumnConstraint<'a> {
    pub name: Option<Ident<'a>>,
    pub spec: ColumnConstraintSpec<'a>,
}

category! {
    pub enum ColumnConstraintSpec<'a> {
        NotNull(&'a NotNullColumnSpec) => NotNullColumnSpec,
        Unique(&'a UniqueColumnSpec) => UniqueColumnSpec,
        References(&'a ReferencesColumnSpec<'a>) => ReferencesColumnSpec,
        Check(&'a CheckColumnSpec<'a>) => CheckColumnSpec,
    }
}

/// `NOT NULL`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NotNullColumnSpec;

/// `UNIQUE` or `PRIMARY KEY`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UniqueColumnSpec {
    pub is_primary: bool,
}

/// `REFERENCES table_name [(columns)]`
#[derive(Debug, Clone, Copy)]
pub struct ReferencesColumnSpec<'a> {
    pub table_name: ObjectName<'a>,
    pub columns: &'a [Ident<'a>],
}

/// `CHECK (expr)` on a column.
#[derive(Debug, Clone, Copy)]
pub struct CheckColumnSpec<'a> {
    pub expr: Expr<'a>,
}

/// `[CONSTRAINT name] spec` inside `CREATE TABLE` or `ADD CONSTRAINT`.
#[derive(Debug, Clone, Copy)]
pub struct TableConstraint<'a> {
    pub name: Option<Ident<'a>>,
    pub spec: TableConstraintSpec<'a>,
}

category! {
    pub enum TableConstraintSpec<'a> {
        Unique(&'a UniqueTableConstraint<'a>) => UniqueTableConstraint,
        Referential(&'a ReferentialTableConstraint<'a>) => ReferentialTableConstraint,
        Check(&'a CheckTableConstraint<'a>) => CheckTableConstraint,
    }
}

/// `UNIQUE (columns)` or `PRIMARY KEY (columns)`
#[derive(Debug, Clone, Copy)]
pub struct UniqueTableConstraint<'a> {
    pub is_primary: bool,
    pub columns: &'a [Ident<'a>],
}

/// `FOREIGN KEY (columns) REFERENCES key_expr`
#[derive(Debug, Clone, Copy)]
pub struct ReferentialTableConstraint<'a> {
    pub columns: &'a [Ident<'a>],
    pub key_expr: ReferenceKeyExpr<'a>,
}

/// `table_name (columns)` after `REFERENCES`.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceKeyExpr<'a> {
    pub table_name: Ident<'a>,
    pub columns: &'a [Ident<'a>],
}

/// `CHECK (expr)` on a table.
#[derive(Debug, Clone, Copy)]
pub struct CheckTableConstraint<'a> {
    pub expr: Expr<'a>,
}

category! {
    /// The action of an `ALTER TABLE` statement.
    pub enum AlterTableAction<'a> {
        AddColumn(&'a AddColumnTableAction<'a>) => AddColumnTableAction,
        AlterColumn(&'a AlterColumnTableAction<'a>) => AlterColumnTableAction,
        RemoveColumn(&'a RemoveColumnTableAction<'a>) => RemoveColumnTableAction,
        AddConstraint(&'a AddConstraintTableAction<'a>) => AddConstraintTableAction,
        DropConstraint(&'a DropConstraintTableAction<'a>) => DropConstraintTableAction,
    }
}

/// `ADD [COLUMN] column`
#[derive(Debug, Clone, Copy)]
pub struct AddColumnTableAction<'a> {
    pub column: ColumnDef<'a>,
}

/// `ALTER [COLUMN] column_name action`
#[derive(Debug, Clone, Copy)]
pub struct AlterColumnTableAction<'a> {
    pub column_name: Ident<'a>,
    pub action: AlterColumnAction<'a>,
}

/// `DROP [COLUMN] name [CASCADE]`
#[derive(Debug, Clone, Copy)]
pub struct RemoveColumnTableAction<'a> {
    pub name: Ident<'a>,
    pub cascade: bool,
}

/// `ADD constraint`
#[derive(Debug, Clone, Copy)]
pub struct AddConstraintTableAction<'a> {
    pub constraint: TableConstraint<'a>,
}

/// `DROP CONSTRAINT name [CASCADE]`
#[derive(Debug, Clone, Copy)]
pub struct DropConstraintTableAction<'a> {
    pub name: Ident<'a>,
    pub cascade: bool,
}

category! {
    /// The action of an `ALTER COLUMN`.
    pub enum AlterColumnAction<'a> {
        SetDefault(&'a SetDefaultColumnAction<'a>) => SetDefaultColumnAction,
        DropDefault(&'a DropDefaultColumnAction) => DropDefaultColumnAction,
        AlterDataType(&'a AlterDataTypeColumnAction<'a>) => AlterDataTypeColumnAction,
        SetNotNull(&'a SetNotNullColumnAction) => SetNotNullColumnAction,
        DropNotNull(&'a DropNotNullColumnAction) => DropNotNullColumnAction,
    }
}

/// `SET DEFAULT expr`
#[derive(Debug, Clone, Copy)]
pub struct SetDefaultColumnAction<'a> {
    pub default: Expr<'a>,
}

/// `DROP DEFAULT`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropDefaultColumnAction;

/// `[SET DATA] TYPE data_type`
#[derive(Debug, Clone, Copy)]
pub struct AlterDataTypeColumnAction<'a> {
    pub data_type: DataType<'a>,
}

/// `SET NOT NULL`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SetNotNullColumnAction;

/// `DROP NOT NULL`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropNotNullColumnAction;
