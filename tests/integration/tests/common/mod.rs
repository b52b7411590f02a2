//! Shared helpers for building ASTs and rendering traversals.

#![allow(dead_code)]

use sqlast::{
    AstArena, BinaryExpr, Event, Expr, Ident, Identifier, Node, ObjectName, Operator, OrderByExpr,
    Query, Select, SelectItem, SetExpr, Span, Table, TableReference, UnnamedExpression, Value,
    Visitor, Where,
};

/// Builds nodes in an arena, the way a parser would.
pub struct Builder<'a> {
    pub arena: &'a AstArena,
}

impl<'a> Builder<'a> {
    pub fn new(arena: &'a AstArena) -> Self {
        Self { arena }
    }

    pub fn ident(&self, value: &str) -> Ident<'a> {
        Ident::new(self.arena.alloc_str(value), Span::default())
    }

    pub fn col(&self, value: &str) -> Expr<'a> {
        Expr::Identifier(self.arena.alloc(Identifier::new(self.ident(value))))
    }

    pub fn long(&self, n: i64) -> Expr<'a> {
        Expr::Value(self.arena.alloc(Value::Long(n)))
    }

    pub fn binary(&self, left: Expr<'a>, op: Operator, right: Expr<'a>) -> Expr<'a> {
        Expr::Binary(self.arena.alloc(BinaryExpr { left, op, right }))
    }

    pub fn name(&self, parts: &[&str]) -> ObjectName<'a> {
        let idents: Vec<_> = parts.iter().map(|p| self.ident(p)).collect();
        ObjectName::new(self.arena.alloc_slice_copy(&idents))
    }

    pub fn table(&self, name: &str) -> TableReference<'a> {
        TableReference::Table(self.arena.alloc(Table {
            name: self.name(&[name]),
            alias: None,
            args: &[],
            with_hints: &[],
        }))
    }

    pub fn columns(&self, names: &[&str]) -> &'a [SelectItem<'a>] {
        let items: Vec<_> = names
            .iter()
            .map(|n| SelectItem::Unnamed(self.arena.alloc(UnnamedExpression { expr: self.col(n) })))
            .collect();
        self.arena.alloc_slice_copy(&items)
    }

    /// `SELECT projection FROM from [WHERE condition]`
    pub fn select(
        &self,
        projection: &'a [SelectItem<'a>],
        from: &[TableReference<'a>],
        condition: Option<Expr<'a>>,
    ) -> &'a Select<'a> {
        self.arena.alloc(Select {
            distinct: false,
            projection,
            from: self.arena.alloc_slice_copy(from),
            selection: condition.map(|condition| Where { condition }),
            group_by: &[],
            having: None,
        })
    }

    pub fn query(&self, body: SetExpr<'a>, order_by: &[Expr<'a>]) -> &'a Query<'a> {
        let order_by: Vec<_> = order_by
            .iter()
            .map(|&expr| OrderByExpr {
                expr,
                asc: None,
                nulls_first: None,
            })
            .collect();
        self.arena.alloc(Query {
            ctes: &[],
            body,
            order_by: self.arena.alloc_slice_copy(&order_by),
            limit: None,
        })
    }

    /// `SELECT a, b FROM t WHERE a = 1 ORDER BY b`
    pub fn sample_select(&self) -> &'a Query<'a> {
        let condition = self.binary(self.col("a"), Operator::Eq, self.long(1));
        let select = self.select(self.columns(&["a", "b"]), &[self.table("t")], Some(condition));
        self.query(SetExpr::Select(select), &[self.col("b")])
    }
}

/// Renders every event as one indented line: `> Kind` on entry, `< Kind` on
/// exit.
#[derive(Debug, Default)]
pub struct TraceWriter {
    open: Vec<String>,
    lines: Vec<String>,
}

impl TraceWriter {
    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}

fn label(node: Node<'_>) -> String {
    match node {
        Node::Ident(ident) => format!("Ident({})", ident.value),
        Node::Operator(op) => format!("Operator({op})"),
        Node::Value(value) => format!("Value({value:?})"),
        Node::Dialect(_) => format!("Dialect({})", node.dialect_kind().unwrap_or_default()),
        _ => node.kind().to_string(),
    }
}

impl<'a> Visitor<'a> for TraceWriter {
    fn visit(&mut self, event: Event<'a>) -> Option<&mut dyn Visitor<'a>> {
        match event {
            Event::Enter(node) => {
                let indent = "  ".repeat(self.open.len());
                self.lines.push(format!("{indent}> {}", label(node)));
                self.open.push(node.kind().to_string());
                Some(self)
            }
            Event::Leave => {
                let kind = self.open.pop().unwrap_or_default();
                let indent = "  ".repeat(self.open.len());
                self.lines.push(format!("{indent}< {kind}"));
                None
            }
        }
    }
}
