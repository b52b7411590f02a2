use crate::{
    AstArena, BinaryExpr, Event, Expr, Ident, Identifier, NodeKind, ObjectName, Operator,
    OrderByExpr, Query, Select, SelectItem, SetExpr, Span, Table, TableReference,
    UnnamedExpression, Value, Visitor, Where,
};

/// One recorded traversal event, reduced to the node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trace {
    Enter(NodeKind),
    Leave,
}

/// A visitor that records every event it receives.
///
/// Descends into every node, except nodes of the `prune` kind.
#[derive(Debug, Default)]
pub struct Recorder {
    pub events: Vec<Trace>,
    pub prune: Option<NodeKind>,
}

impl Recorder {
    pub fn pruning(kind: NodeKind) -> Self {
        Self {
            events: Vec::new(),
            prune: Some(kind),
        }
    }

    /// Kinds of the entered nodes, in order.
    pub fn entered(&self) -> Vec<NodeKind> {
        self.events
            .iter()
            .filter_map(|event| match event {
                Trace::Enter(kind) => Some(*kind),
                Trace::Leave => None,
            })
            .collect()
    }

    pub fn leave_count(&self) -> usize {
        self.events.iter().filter(|e| **e == Trace::Leave).count()
    }
}

impl<'a> Visitor<'a> for Recorder {
    fn visit(&mut self, event: Event<'a>) -> Option<&mut dyn Visitor<'a>> {
        match event {
            Event::Enter(node) => {
                self.events.push(Trace::Enter(node.kind()));
                if self.prune == Some(node.kind()) {
                    return None;
                }
                Some(self)
            }
            Event::Leave => {
                self.events.push(Trace::Leave);
                None
            }
        }
    }
}

fn column<'a>(arena: &'a AstArena, name: &str, start: u32) -> Expr<'a> {
    let name = arena.alloc_str(name);
    let span = Span::new(start, start + name.len() as u32);
    Expr::Identifier(arena.alloc(Identifier::new(Ident::new(name, span))))
}

/// Builds `SELECT a, b FROM t WHERE a = 1 ORDER BY b`.
pub fn sample_select(arena: &AstArena) -> &Query<'_> {
    let projection = arena.alloc_slice_copy(&[
        SelectItem::Unnamed(arena.alloc(UnnamedExpression {
            expr: column(arena, "a", 7),
        })),
        SelectItem::Unnamed(arena.alloc(UnnamedExpression {
            expr: column(arena, "b", 10),
        })),
    ]);

    let table_idents = arena.alloc_slice_copy(&[Ident::new("t", Span::new(17, 18))]);
    let from = arena.alloc_slice_copy(&[TableReference::Table(arena.alloc(Table {
        name: ObjectName::new(table_idents),
        alias: None,
        args: &[],
        with_hints: &[],
    }))]);

    let condition = Expr::Binary(arena.alloc(BinaryExpr {
        left: column(arena, "a", 25),
        op: Operator::Eq,
        right: Expr::Value(arena.alloc(Value::Long(1))),
    }));

    let select = arena.alloc(Select {
        distinct: false,
        projection,
        from,
        selection: Some(Where { condition }),
        group_by: &[],
        having: None,
    });

    let order_by = arena.alloc_slice_copy(&[OrderByExpr {
        expr: column(arena, "b", 40),
        asc: None,
        nulls_first: None,
    }]);

    arena.alloc(Query {
        ctes: &[],
        body: SetExpr::Select(select),
        order_by,
        limit: None,
    })
}
