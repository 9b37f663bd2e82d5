use super::*;
use crate::ast::node::NodeKind;
use crate::ast::ops::{CompareOp, MathOp};
use crate::eval::context::Context;
use crate::foundation::core::Value;
use crate::rewrite::tile::walk;

fn eq(l: Node, r: Node) -> Node {
    Node::compare(CompareOp::Eq, l, r)
}

#[test]
fn named_operand_moves_left() {
    let out = canonicalize(eq(Node::string("X"), Node::literal("a")));
    assert_eq!(out, eq(Node::literal("a"), Node::string("X")));
}

#[test]
fn commutative_symmetry() {
    let a = canonicalize(eq(Node::literal("a"), Node::string("X")));
    let b = canonicalize(eq(Node::string("X"), Node::literal("a")));
    assert_eq!(a, b);
}

#[test]
fn static_pairs_are_ascending() {
    let out = canonicalize(Node::and(
        eq(Node::number(9.0), Node::number(2.0)),
        Node::compare(CompareOp::Ne, Node::string("b"), Node::string("a")),
    ));
    assert_eq!(out.to_string(), "((2 = 9) and ('a' != 'b'))");

    walk(&out, &mut |n: &Node| {
        if let Some(c) = n.as_compare()
            && let (Some(l), Some(r)) = (c.left.static_value(), c.right.static_value())
        {
            assert!(l.static_cmp(&r).is_le());
        }
    });
}

#[test]
fn static_value_moves_right_of_other_expressions() {
    let sum = Node::math(MathOp::Add, Node::literal("a"), Node::number(1.0));
    let out = canonicalize(eq(Node::number(5.0), sum.clone()));
    assert_eq!(out, eq(sum.clone(), Node::number(5.0)));

    let out = canonicalize(eq(sum.clone(), Node::literal("b")));
    assert_eq!(out, eq(Node::literal("b"), sum));
}

#[test]
fn two_named_operands_keep_their_order() {
    let tree = eq(Node::literal("b"), Node::literal("a"));
    assert_eq!(canonicalize(tree.clone()), tree);
}

#[test]
fn idempotent() {
    let tree = Node::or(
        Node::and(
            eq(Node::number(3.0), Node::literal("x")),
            Node::compare(CompareOp::Gt, Node::number(7.0), Node::number(1.0)),
        ),
        Node::negate(Node::compare(
            CompareOp::Le,
            Node::string("m"),
            Node::literal("name"),
        )),
    );
    let once = canonicalize(tree);
    let twice = canonicalize(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn idempotent_with_nan_statics() {
    let tree = eq(Node::number(f64::NAN), Node::number(1.0));
    let once = canonicalize(tree);
    let twice = canonicalize(once.clone());
    assert_eq!(once, twice);
    // NaN sorts after every other number.
    assert_eq!(once.to_string(), "(1 = NaN)");
}

#[test]
fn swap_keeps_operator_by_default() {
    let tree = Node::compare(CompareOp::Gt, Node::number(5.0), Node::literal("a"));
    let ctx = Context::new().with("a", 1.0);
    assert_eq!(tree.eval(&ctx).unwrap(), Value::Bool(true));

    let out = canonicalize(tree);
    let NodeKind::Compare(c) = &out.kind else {
        unreachable!()
    };
    assert_eq!(c.op, CompareOp::Gt);
    assert_eq!(*c.left, Node::literal("a"));
    // Same operator, exchanged operands: direct evaluation now answers a different question.
    assert_eq!(out.eval(&ctx).unwrap(), Value::Bool(false));
}

#[test]
fn mirror_option_preserves_evaluation() {
    let tree = Node::compare(CompareOp::Gt, Node::number(5.0), Node::literal("a"));
    let opts = CanonicalizeOpts {
        mirror_order_operators: true,
    };
    let out = canonicalize_with(tree.clone(), &opts);
    assert_eq!(
        out,
        Node::compare(CompareOp::Lt, Node::literal("a"), Node::number(5.0))
    );

    for a in [1.0, 5.0, 9.0] {
        let ctx = Context::new().with("a", a);
        assert_eq!(out.eval(&ctx).unwrap(), tree.eval(&ctx).unwrap());
    }

    // Equality operators are symmetric already.
    let out = canonicalize_with(eq(Node::number(1.0), Node::literal("a")), &opts);
    assert_eq!(out, eq(Node::literal("a"), Node::number(1.0)));
}

#[test]
fn positions_travel_with_operands() {
    let tree = eq(
        Node::string("X").with_position(crate::foundation::core::Position::new(1, 1)),
        Node::literal("a").with_position(crate::foundation::core::Position::new(1, 7)),
    );
    let out = canonicalize(tree);
    let NodeKind::Compare(c) = &out.kind else {
        unreachable!()
    };
    assert_eq!(c.left.position.column, 7);
    assert_eq!(c.right.position.column, 1);
}
