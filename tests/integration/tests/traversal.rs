//! End-to-end traversal tests.
//!
//! Each test builds the AST a parser would produce for a statement and checks
//! the complete event sequence a visitor receives.

mod common;

use common::{Builder, TraceWriter};
use sqlast::{
    AstArena, Cte, Derived, Event, Exists, Expr, Insert, JoinCondition, JoinSpec, JoinType, Node,
    NodeKind, Operator, QualifiedJoin, Query, SetExpr, SetOperation, SetOperator, Statement,
    TableReference, Values, Visitor, Walker, inspect, walk,
};

mod select_statement {
    use super::*;
    use pretty_assertions::assert_eq;

    /// ORDER BY is a child of the query, not of the SELECT block, so its
    /// items are entered after `< Select` and before `< Query`.
    #[test]
    fn traces_every_node_in_lexical_order() {
        let arena = AstArena::new();
        let query = Builder::new(&arena).sample_select();

        let mut writer = TraceWriter::default();
        walk(&mut writer, Node::Query(query)).unwrap();

        insta::assert_snapshot!(writer.finish(), @r"
        > Query
          > Select
            > UnnamedExpression
              > Identifier
                > Ident(a)
                < Ident
              < Identifier
            < UnnamedExpression
            > UnnamedExpression
              > Identifier
                > Ident(b)
                < Ident
              < Identifier
            < UnnamedExpression
            > Table
              > ObjectName
                > Ident(t)
                < Ident
              < ObjectName
            < Table
            > Where
              > BinaryExpr
                > Identifier
                  > Ident(a)
                  < Ident
                < Identifier
                > Operator(=)
                < Operator
                > Value(Long(1))
                < Value
              < BinaryExpr
            < Where
          < Select
          > OrderByExpr
            > Identifier
              > Ident(b)
              < Ident
            < Identifier
          < OrderByExpr
        < Query
        ");
    }

    /// Records the entered kinds of the statement's skeleton, skipping
    /// identifier internals.
    #[derive(Default)]
    struct Skeleton {
        events: Vec<String>,
        stack: Vec<NodeKind>,
    }

    impl<'a> Visitor<'a> for Skeleton {
        fn visit(&mut self, event: Event<'a>) -> Option<&mut dyn Visitor<'a>> {
            match event {
                Event::Enter(node) if node.kind() == NodeKind::Identifier => {
                    let ident = Walker::new().children(node).ok()?[0].as_ident()?;
                    self.events.push(format!("column {}", ident.value));
                    None
                }
                Event::Enter(node) => {
                    self.events.push(format!("enter {}", node.kind()));
                    self.stack.push(node.kind());
                    Some(self)
                }
                Event::Leave => {
                    let kind = self.stack.pop()?;
                    self.events.push(format!("exit {kind}"));
                    None
                }
            }
        }
    }

    #[test]
    fn where_clause_is_its_own_scope() {
        let arena = AstArena::new();
        let query = Builder::new(&arena).sample_select();

        let mut skeleton = Skeleton::default();
        walk(&mut skeleton, Node::Query(query)).unwrap();

        let where_at = skeleton
            .events
            .iter()
            .position(|e| e == "enter Where")
            .unwrap();
        assert_eq!(
            skeleton.events[where_at..where_at + 9].to_vec(),
            vec![
                "enter Where",
                "enter BinaryExpr",
                "column a",
                "enter Operator",
                "exit Operator",
                "enter Value",
                "exit Value",
                "exit BinaryExpr",
                "exit Where",
            ]
        );
        assert_eq!(skeleton.events.first().map(String::as_str), Some("enter Query"));
        assert_eq!(skeleton.events.last().map(String::as_str), Some("exit Query"));
        assert!(skeleton.stack.is_empty());
    }

    #[test]
    fn total_entries_match_node_count() {
        let arena = AstArena::new();
        let query = Builder::new(&arena).sample_select();

        let mut entries = 0;
        inspect(Statement::Query(query), |_| {
            entries += 1;
            true
        })
        .unwrap();

        assert_eq!(entries, 20);
    }
}

mod nested_queries {
    use super::*;
    use pretty_assertions::assert_eq;

    /// `WITH r AS (VALUES (1)) SELECT x FROM r JOIN s ON r.x = s.x
    ///  WHERE EXISTS (SELECT y FROM u)`
    fn build(arena: &AstArena) -> &Query<'_> {
        let b = Builder::new(arena);

        let row = arena.alloc_slice_copy(&[b.long(1)]);
        let values = arena.alloc(Values {
            rows: arena.alloc_slice_copy(&[row]),
        });
        let cte_query = b.query(SetExpr::Values(values), &[]);

        let on = arena.alloc(JoinCondition {
            search_condition: b.binary(b.col("x"), Operator::Eq, b.col("x")),
        });
        let join = TableReference::QualifiedJoin(arena.alloc(QualifiedJoin {
            left: b.table("r"),
            join_type: JoinType::Inner,
            right: b.table("s"),
            spec: JoinSpec::On(on),
        }));

        let inner = b.select(b.columns(&["y"]), &[b.table("u")], None);
        let exists = Expr::Exists(arena.alloc(Exists {
            query: b.query(SetExpr::Select(inner), &[]),
            negated: false,
        }));

        let outer = b.select(b.columns(&["x"]), &[join], Some(exists));
        arena.alloc(Query {
            ctes: arena.alloc_slice_copy(&[Cte {
                alias: b.ident("r"),
                query: cte_query,
            }]),
            ..*b.query(SetExpr::Select(outer), &[])
        })
    }

    #[test]
    fn pruning_subqueries_keeps_the_outer_scope() {
        let arena = AstArena::new();
        let query = build(&arena);

        let mut tables = Vec::new();
        let mut depth = 0;
        inspect(Node::Query(query), |node| {
            if node.kind() == NodeKind::Query {
                depth += 1;
                return depth == 1;
            }
            if let Node::Table(table) = node {
                tables.push(table.name.to_string());
            }
            true
        })
        .unwrap();

        // `u` lives in the EXISTS subquery; the CTE body has no tables.
        assert_eq!(tables, vec!["r", "s"]);
        assert_eq!(depth, 3);
    }

    #[test]
    fn every_entry_has_one_exit() {
        let arena = AstArena::new();
        let query = build(&arena);

        let mut writer = TraceWriter::default();
        walk(&mut writer, Node::Query(query)).unwrap();
        let trace = writer.finish();

        let enters = trace.lines().filter(|l| l.trim_start().starts_with('>')).count();
        let exits = trace.lines().filter(|l| l.trim_start().starts_with('<')).count();
        assert_eq!(enters, exits);
        assert!(trace.starts_with("> Query\n  > Cte\n    > Ident(r)"));
        assert!(trace.ends_with("< Query"));
    }
}

mod statements {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insert_walks_target_columns_then_source() {
        let arena = AstArena::new();
        let b = Builder::new(&arena);

        let left = b.query(SetExpr::Select(b.select(b.columns(&["a"]), &[b.table("t1")], None)), &[]);
        let right = b.query(SetExpr::Select(b.select(b.columns(&["a"]), &[b.table("t2")], None)), &[]);
        let union = arena.alloc(SetOperation {
            left: SetExpr::Query(left),
            op: SetOperator::Union { all: false },
            right: SetExpr::Query(right),
        });
        let insert = arena.alloc(Insert {
            table_name: b.name(&["archive"]),
            columns: arena.alloc_slice_copy(&[b.ident("a")]),
            source: Some(b.query(SetExpr::SetOperation(union), &[])),
        });

        let mut tables = Vec::new();
        inspect(Statement::Insert(insert), |node| {
            match node {
                Node::ObjectName(name) => tables.push(name.to_string()),
                Node::SetOperator(op) => tables.push(format!("{op:?}")),
                _ => {}
            }
            true
        })
        .unwrap();

        assert_eq!(tables, vec!["archive", "t1", "Union { all: false }", "t2"]);
    }

    #[test]
    fn derived_table_alias_follows_subquery() {
        let arena = AstArena::new();
        let b = Builder::new(&arena);

        let sub = b.query(SetExpr::Select(b.select(b.columns(&["id"]), &[b.table("users")], None)), &[]);
        let derived = TableReference::Derived(arena.alloc(Derived {
            lateral: false,
            subquery: sub,
            alias: Some(b.ident("u")),
        }));

        let walker = Walker::new();
        let kinds: Vec<_> = walker
            .children(derived.into())
            .unwrap()
            .iter()
            .map(Node::kind)
            .collect();
        assert_eq!(kinds, vec![NodeKind::Query, NodeKind::Ident]);
    }
}
