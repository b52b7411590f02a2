//! Dialect extension tests.
//!
//! A dialect node is walked by the order registered on the walker; without a
//! registration the walk must stop with an error instead of skipping it.

mod common;

use common::{Builder, TraceWriter};
use pretty_assertions::assert_eq;
use rstest::rstest;
use sqlast::{
    AstArena, DialectNode, Expr, Field, Ident, Node, NodeKind, Query, SetExpr, WalkError, Walker,
    walk,
};

/// `expr[index]`, PostgreSQL array subscript.
#[derive(Debug)]
struct ArrayIndex<'a> {
    expr: Expr<'a>,
    index: Expr<'a>,
}

impl<'a> DialectNode<'a> for ArrayIndex<'a> {
    fn kind(&self) -> &'static str {
        "pg_array_index"
    }

    fn field(&'a self, name: &str) -> Field<'a> {
        match name {
            "expr" => Field::One(self.expr.into()),
            "index" => Field::One(self.index.into()),
            _ => Field::Absent,
        }
    }
}

/// `DISTINCT ON (exprs)`, held beside the projection.
#[derive(Debug)]
struct DistinctOn<'a> {
    exprs: &'a [Expr<'a>],
    alias: Option<Ident<'a>>,
}

impl<'a> DialectNode<'a> for DistinctOn<'a> {
    fn kind(&self) -> &'static str {
        "pg_distinct_on"
    }

    fn field(&'a self, name: &str) -> Field<'a> {
        match name {
            "exprs" => Field::Many(self.exprs.iter().map(|&e| Node::from(e)).collect()),
            "alias" => self.alias.as_ref().map(Node::Ident).into(),
            _ => Field::Absent,
        }
    }
}

/// `SELECT tags[1] FROM posts WHERE tags[1] = 1`
fn build<'a>(b: &Builder<'a>) -> &'a Query<'a> {
    let subscript = |b: &Builder<'a>| {
        Expr::Dialect(b.arena.alloc(ArrayIndex {
            expr: b.col("tags"),
            index: b.long(1),
        }))
    };
    let projection = b.arena.alloc_slice_copy(&[sqlast::SelectItem::Unnamed(b.arena.alloc(
        sqlast::UnnamedExpression {
            expr: subscript(b),
        },
    ))]);
    let condition = b.binary(subscript(b), sqlast::Operator::Eq, b.long(1));
    let select = b.select(projection, &[b.table("posts")], Some(condition));
    b.query(SetExpr::Select(select), &[])
}

fn pg_walker() -> Walker {
    Walker::builder()
        .register("pg_array_index", &["expr", "index"])
        .register("pg_distinct_on", &["exprs", "alias"])
        .build()
}

#[test]
fn registered_kind_is_walked_in_registered_order() {
    let arena = AstArena::new();
    let b = Builder::new(&arena);
    let query = build(&b);

    let mut writer = TraceWriter::default();
    pg_walker().walk(&mut writer, Node::Query(query)).unwrap();

    insta::assert_snapshot!(writer.finish(), @r"
    > Query
      > Select
        > UnnamedExpression
          > Dialect(pg_array_index)
            > Identifier
              > Ident(tags)
              < Ident
            < Identifier
            > Value(Long(1))
            < Value
          < Dialect
        < UnnamedExpression
        > Table
          > ObjectName
            > Ident(posts)
            < Ident
          < ObjectName
        < Table
        > Where
          > BinaryExpr
            > Dialect(pg_array_index)
              > Identifier
                > Ident(tags)
                < Ident
              < Identifier
              > Value(Long(1))
              < Value
            < Dialect
            > Operator(=)
            < Operator
            > Value(Long(1))
            < Value
          < BinaryExpr
        < Where
      < Select
    < Query
    ");
}

#[test]
fn unregistered_kind_stops_the_walk() {
    let arena = AstArena::new();
    let b = Builder::new(&arena);
    let query = build(&b);

    let mut writer = TraceWriter::default();
    let err = walk(&mut writer, Node::Query(query)).unwrap_err();

    assert_eq!(err, WalkError::unregistered("pg_array_index"));
    assert_eq!(
        err.to_string(),
        "Traversal contract violation: node kind `pg_array_index` has no registered child order"
    );
    // The first subscript is entered, then nothing else: no children, no
    // exits, no FROM clause.
    let trace = writer.finish();
    assert_eq!(
        trace.lines().last(),
        Some("      > Dialect(pg_array_index)")
    );
    assert!(!trace.contains("posts"));
    assert!(!trace.contains('<'));
}

#[rstest]
#[case::with_alias(Some("d"), vec![NodeKind::Identifier, NodeKind::Identifier, NodeKind::Ident])]
#[case::without_alias(None, vec![NodeKind::Identifier, NodeKind::Identifier])]
fn optional_dialect_fields_are_skipped_when_absent(
    #[case] alias: Option<&str>,
    #[case] expected: Vec<NodeKind>,
) {
    let arena = AstArena::new();
    let b = Builder::new(&arena);
    let distinct = arena.alloc(DistinctOn {
        exprs: arena.alloc_slice_copy(&[b.col("author"), b.col("day")]),
        alias: alias.map(|a| b.ident(a)),
    });

    let kinds: Vec<_> = pg_walker()
        .children(Node::Dialect(distinct))
        .unwrap()
        .iter()
        .map(Node::kind)
        .collect();
    assert_eq!(kinds, expected);
}

#[test]
fn one_walker_serves_many_walks() {
    let arena = AstArena::new();
    let b = Builder::new(&arena);
    let query = build(&b);
    let walker = pg_walker();

    let traces: Vec<String> = (0..3)
        .map(|_| {
            let mut writer = TraceWriter::default();
            walker.walk(&mut writer, Node::Query(query)).unwrap();
            writer.finish()
        })
        .collect();

    assert_eq!(traces[0], traces[1]);
    assert_eq!(traces[1], traces[2]);
}

#[test]
fn walker_is_shared_across_threads() {
    let walker = pg_walker();

    std::thread::scope(|scope| {
        for _ in 0..2 {
            scope.spawn(|| {
                let arena = AstArena::new();
                let b = Builder::new(&arena);
                let query = build(&b);

                let mut dialect_nodes = 0;
                walker
                    .inspect(Node::Query(query), |node| {
                        if node.dialect_kind() == Some("pg_array_index") {
                            dialect_nodes += 1;
                        }
                        true
                    })
                    .unwrap();
                assert_eq!(dialect_nodes, 2);
            });
        }
    });
}
