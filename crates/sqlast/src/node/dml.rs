//! DML statements and the top-level [`Statement`] enum.

use super::{
    AlterTable, CreateIndex, CreateTable, CreateView, DropIndex, DropTable, DropView, Expr, Ident,
    ObjectName, Query, Where,
};
use crate::dialect::DialectNode;

category! {
    /// A top-level SQL statement.
    pub enum Statement<'a> {
        Query(&'a Query<'a>) => Query,
        Insert(&'a Insert<'a>) => Insert,
        Copy(&'a CopyStatement<'a>) => Copy,
        Update(&'a Update<'a>) => Update,
        Delete(&'a Delete<'a>) => Delete,
        CreateView(&'a CreateView<'a>) => CreateView,
        CreateTable(&'a CreateTable<'a>) => CreateTable,
        CreateIndex(&'a CreateIndex<'a>) => CreateIndex,
        AlterTable(&'a AlterTable<'a>) => AlterTable,
        DropTable(&'a DropTable<'a>) => DropTable,
        DropView(&'a DropView<'a>) => DropView,
        DropIndex(&'a DropIndex<'a>) => DropIndex,
        Explain(&'a Explain<'a>) => Explain,
        /// A dialect-specific statement.
        Dialect(&'a dyn DialectNode<'a>) => Dialect,
    }
}

/// `INSERT INTO table_name [(columns)] source`
///
/// `source` is a query, which covers both `SELECT ...` and `VALUES ...`.
#[derive(Debug, Clone, Copy)]
pub struct Insert<'a> {
    pub table_name: ObjectName<'a>,
    pub columns: &'a [Ident<'a>],
    pub source: Option<&'a Query<'a>>,
}

/// `COPY table_name [(columns)] FROM STDIN`
///
/// The inline data rows are raw text and not part of the traversal.
#[derive(Debug, Clone, Copy)]
pub struct CopyStatement<'a> {
    pub table_name: ObjectName<'a>,
    pub columns: &'a [Ident<'a>],
    pub values: &'a [Option<&'a str>],
}

/// `UPDATE table_name SET assignments [WHERE ...]`
#[derive(Debug, Clone, Copy)]
pub struct Update<'a> {
    pub table_name: ObjectName<'a>,
    pub assignments: &'a [Assignment<'a>],
    pub selection: Option<Where<'a>>,
}

/// `id = value`
#[derive(Debug, Clone, Copy)]
pub struct Assignment<'a> {
    pub id: Ident<'a>,
    pub value: Expr<'a>,
}

/// `DELETE FROM table_name [WHERE ...]`
#[derive(Debug, Clone, Copy)]
pub struct Delete<'a> {
    pub table_name: ObjectName<'a>,
    pub selection: Option<Where<'a>>,
}

/// `EXPLAIN stmt`
#[derive(Debug, Clone, Copy)]
pub struct Explain<'a> {
    pub stmt: Statement<'a>,
}
