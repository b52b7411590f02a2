//! The child-order table.
//!
//! [`for_each_child`] is the single place that knows, for every node kind,
//! which children it has and in which order they are walked. The order is
//! lexical: children come in the order their source text appears in the
//! statement. Optional children that are absent are skipped, list children
//! are walked element by element.

use tracing::{error, trace};

use super::WalkError;
use crate::dialect::{DialectRegistry, Field};
use crate::Node;

/// Receives each child of a node, in walk order.
pub(crate) type ChildSink<'s, 'a> = dyn FnMut(Node<'a>) -> Result<(), WalkError> + 's;

/// Calls `f` with every child of `node`, in walk order.
///
/// Stops at the first error returned by `f`. Dialect nodes are resolved
/// through `registry`; an unregistered dialect kind is reported as
/// [`WalkError::UnregisteredKind`] before any child is produced.
pub(crate) fn for_each_child<'a>(
    registry: &DialectRegistry,
    node: Node<'a>,
    f: &mut ChildSink<'_, 'a>,
) -> Result<(), WalkError> {
    match node {
        Node::Ident(_)
        | Node::Wildcard(_)
        | Node::Value(_)
        | Node::Operator(_)
        | Node::DataType(_)
        | Node::WindowFrameUnits(_)
        | Node::WindowFrameBound(_)
        | Node::SetOperator(_)
        | Node::JoinType(_)
        | Node::NotNullColumnSpec(_)
        | Node::UniqueColumnSpec(_)
        | Node::DropDefaultColumnAction(_)
        | Node::SetNotNullColumnAction(_)
        | Node::DropNotNullColumnAction(_) => {}

        Node::Identifier(n) => f(Node::Ident(&n.ident))?,
        Node::CompoundIdentifier(n) => each_ref(f, n.idents, Node::Ident)?,
        Node::ObjectName(n) => each_ref(f, n.idents, Node::Ident)?,

        Node::IsNull(n) => f(n.expr.into())?,
        Node::IsNotNull(n) => f(n.expr.into())?,
        Node::InList(n) => {
            f(n.expr.into())?;
            each(f, n.list)?;
        }
        Node::InSubquery(n) => {
            f(n.expr.into())?;
            f(Node::Query(n.subquery))?;
        }
        Node::Between(n) => {
            f(n.expr.into())?;
            f(n.low.into())?;
            f(n.high.into())?;
        }
        Node::BinaryExpr(n) => {
            f(n.left.into())?;
            f(Node::Operator(&n.op))?;
            f(n.right.into())?;
        }
        Node::Unary(n) => {
            f(Node::Operator(&n.op))?;
            f(n.expr.into())?;
        }
        Node::Cast(n) => {
            f(n.expr.into())?;
            f(Node::DataType(&n.data_type))?;
        }
        Node::Nested(n) => f(n.expr.into())?,
        Node::Function(n) => {
            f(Node::ObjectName(&n.name))?;
            each(f, n.args)?;
            if let Some(over) = &n.over {
                f(Node::WindowSpec(over))?;
            }
        }
        Node::Case(n) => {
            maybe(f, n.operand)?;
            for when in n.whens {
                f(when.condition.into())?;
                f(when.result.into())?;
            }
            maybe(f, n.else_result)?;
        }
        Node::Exists(n) => f(Node::Query(n.query))?,
        Node::Subquery(n) => f(Node::Query(n.query))?,

        Node::WindowSpec(n) => {
            each(f, n.partition_by)?;
            each_ref(f, n.order_by, Node::OrderByExpr)?;
            if let Some(frame) = &n.window_frame {
                f(Node::WindowFrame(frame))?;
            }
        }
        Node::WindowFrame(n) => {
            f(Node::WindowFrameUnits(&n.units))?;
            f(Node::WindowFrameBound(&n.start_bound))?;
            if let Some(end) = &n.end_bound {
                f(Node::WindowFrameBound(end))?;
            }
        }

        Node::Query(n) => {
            each_ref(f, n.ctes, Node::Cte)?;
            f(n.body.into())?;
            each_ref(f, n.order_by, Node::OrderByExpr)?;
            if let Some(limit) = &n.limit {
                f(Node::Limit(limit))?;
            }
        }
        Node::Cte(n) => {
            f(Node::Ident(&n.alias))?;
            f(Node::Query(n.query))?;
        }
        Node::Select(n) => {
            each(f, n.projection)?;
            each(f, n.from)?;
            if let Some(selection) = &n.selection {
                f(Node::Where(selection))?;
            }
            each(f, n.group_by)?;
            maybe(f, n.having)?;
        }
        Node::Where(n) => f(n.condition.into())?,
        Node::Values(n) => {
            for row in n.rows {
                each(f, *row)?;
            }
        }
        Node::SetOperation(n) => {
            f(n.left.into())?;
            f(Node::SetOperator(&n.op))?;
            f(n.right.into())?;
        }
        Node::UnnamedExpression(n) => f(n.expr.into())?,
        Node::ExpressionWithAlias(n) => {
            f(n.expr.into())?;
            f(Node::Ident(&n.alias))?;
        }
        Node::QualifiedWildcard(n) => f(Node::ObjectName(&n.prefix))?,
        Node::OrderByExpr(n) => f(n.expr.into())?,
        Node::Limit(n) => {
            maybe(f, n.limit_value)?;
            maybe(f, n.offset)?;
        }

        Node::Table(n) => {
            f(Node::ObjectName(&n.name))?;
            if let Some(alias) = &n.alias {
                f(Node::Ident(alias))?;
            }
            each(f, n.args)?;
            each(f, n.with_hints)?;
        }
        Node::Derived(n) => {
            f(Node::Query(n.subquery))?;
            if let Some(alias) = &n.alias {
                f(Node::Ident(alias))?;
            }
        }
        Node::QualifiedJoin(n) => {
            f(n.left.into())?;
            f(Node::JoinType(&n.join_type))?;
            f(n.right.into())?;
            f(n.spec.into())?;
        }
        Node::NaturalJoin(n) => {
            f(n.left.into())?;
            f(Node::JoinType(&n.join_type))?;
            f(n.right.into())?;
        }
        Node::CrossJoin(n) => {
            f(n.left.into())?;
            f(n.right.into())?;
        }
        Node::JoinCondition(n) => f(n.search_condition.into())?,
        Node::NamedColumnsJoin(n) => each_ref(f, n.columns, Node::Ident)?,

        Node::Insert(n) => {
            f(Node::ObjectName(&n.table_name))?;
            each_ref(f, n.columns, Node::Ident)?;
            if let Some(source) = n.source {
                f(Node::Query(source))?;
            }
        }
        Node::Copy(n) => {
            f(Node::ObjectName(&n.table_name))?;
            each_ref(f, n.columns, Node::Ident)?;
        }
        Node::Update(n) => {
            f(Node::ObjectName(&n.table_name))?;
            each_ref(f, n.assignments, Node::Assignment)?;
            if let Some(selection) = &n.selection {
                f(Node::Where(selection))?;
            }
        }
        Node::Delete(n) => {
            f(Node::ObjectName(&n.table_name))?;
            if let Some(selection) = &n.selection {
                f(Node::Where(selection))?;
            }
        }
        Node::Assignment(n) => {
            f(Node::Ident(&n.id))?;
            f(n.value.into())?;
        }
        Node::Explain(n) => f(n.stmt.into())?,

        Node::CreateTable(n) => {
            f(Node::ObjectName(&n.name))?;
            each(f, n.elements)?;
        }
        Node::CreateView(n) => {
            f(Node::ObjectName(&n.name))?;
            f(Node::Query(n.query))?;
        }
        Node::CreateIndex(n) => {
            if let Some(index_name) = &n.index_name {
                f(Node::Ident(index_name))?;
            }
            f(Node::ObjectName(&n.table_name))?;
            if let Some(method_name) = &n.method_name {
                f(Node::Ident(method_name))?;
            }
            each_ref(f, n.column_names, Node::Ident)?;
            if let Some(selection) = &n.selection {
                f(Node::Where(selection))?;
            }
        }
        Node::AlterTable(n) => {
            f(Node::ObjectName(&n.table_name))?;
            f(n.action.into())?;
        }
        Node::DropTable(n) => each_ref(f, n.names, Node::ObjectName)?,
        Node::DropView(n) => each_ref(f, n.names, Node::ObjectName)?,
        Node::DropIndex(n) => each_ref(f, n.index_names, Node::Ident)?,

        Node::ColumnDef(n) => {
            f(Node::Ident(&n.name))?;
            f(Node::DataType(&n.data_type))?;
            maybe(f, n.default)?;
            each_ref(f, n.constraints, Node::ColumnConstraint)?;
        }
        Node::ColumnConstraint(n) => {
            if let Some(name) = &n.name {
                f(Node::Ident(name))?;
            }
            f(n.spec.into())?;
        }
        Node::ReferencesColumnSpec(n) => {
            f(Node::ObjectName(&n.table_name))?;
            each_ref(f, n.columns, Node::Ident)?;
        }
        Node::CheckColumnSpec(n) => f(n.expr.into())?,

        Node::TableConstraint(n) => {
            if let Some(name) = &n.name {
                f(Node::Ident(name))?;
            }
            f(n.spec.into())?;
        }
        Node::UniqueTableConstraint(n) => each_ref(f, n.columns, Node::Ident)?,
        Node::ReferentialTableConstraint(n) => {
            each_ref(f, n.columns, Node::Ident)?;
            f(Node::ReferenceKeyExpr(&n.key_expr))?;
        }
        Node::ReferenceKeyExpr(n) => {
            f(Node::Ident(&n.table_name))?;
            each_ref(f, n.columns, Node::Ident)?;
        }
        Node::CheckTableConstraint(n) => f(n.expr.into())?,

        Node::AddColumnTableAction(n) => f(Node::ColumnDef(&n.column))?,
        Node::AlterColumnTableAction(n) => {
            f(Node::Ident(&n.column_name))?;
            f(n.action.into())?;
        }
        Node::RemoveColumnTableAction(n) => f(Node::Ident(&n.name))?,
        Node::AddConstraintTableAction(n) => f(Node::TableConstraint(&n.constraint))?,
        Node::DropConstraintTableAction(n) => f(Node::Ident(&n.name))?,

        Node::SetDefaultColumnAction(n) => f(n.default.into())?,
        Node::AlterDataTypeColumnAction(n) => f(Node::DataType(&n.data_type))?,

        Node::Dialect(n) => {
            let kind = n.kind();
            let Some(order) = registry.child_order(kind) else {
                error!(kind, "Dialect node kind has no registered child order");
                return Err(WalkError::unregistered(kind));
            };
            trace!(kind, fields = order.len(), "Dispatching dialect node");
            for name in order {
                match n.field(name) {
                    Field::Absent => {}
                    Field::One(child) => f(child)?,
                    Field::Many(children) => {
                        for child in children {
                            f(child)?;
                        }
                    }
                }
            }
        }
    }
    Ok(())
}

/// Walks a list of category values (`Expr`, `SelectItem`, ...).
#[inline]
fn each<'a, T>(f: &mut ChildSink<'_, 'a>, items: &'a [T]) -> Result<(), WalkError>
where
    T: Copy + Into<Node<'a>>,
{
    for item in items {
        f((*item).into())?;
    }
    Ok(())
}

/// Walks a list of inline node structs, wrapping each with `wrap`.
#[inline]
fn each_ref<'a, T>(
    f: &mut ChildSink<'_, 'a>,
    items: &'a [T],
    wrap: impl Fn(&'a T) -> Node<'a>,
) -> Result<(), WalkError> {
    for item in items {
        f(wrap(item))?;
    }
    Ok(())
}

#[inline]
fn maybe<'a, T>(f: &mut ChildSink<'_, 'a>, item: Option<T>) -> Result<(), WalkError>
where
    T: Into<Node<'a>>,
{
    match item {
        Some(item) => f(item.into()),
        None => Ok(()),
    }
}
