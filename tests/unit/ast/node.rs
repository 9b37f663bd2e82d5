use super::*;

fn cmp(op: CompareOp, l: Node, r: Node) -> CompareOperator {
    match Node::compare(op, l, r).kind {
        NodeKind::Compare(c) => c,
        _ => unreachable!(),
    }
}

#[test]
fn equality_ignores_positions() {
    let a = Node::literal("a").with_position(Position::new(1, 1));
    let b = Node::literal("a").with_position(Position::new(9, 4));
    assert_eq!(a, b);
    assert_ne!(Node::literal("a"), Node::string("a"));
}

#[test]
fn static_and_named_classification() {
    assert!(Node::number(1.0).is_static());
    assert!(Node::string("x").is_static());
    assert!(Node::constant(true).is_static());
    assert!(!Node::undefined().is_static());
    assert!(!Node::literal("a").is_static());
    assert_eq!(Node::literal("a").named(), Some("a"));
    assert_eq!(Node::string("a").named(), None);
    assert_eq!(Node::number(2.0).static_value(), Some(Value::Number(2.0)));
    assert_eq!(Node::literal("a").static_value(), None);
}

#[test]
fn static_side_requires_exactly_one_static_operand() {
    let c = cmp(CompareOp::Eq, Node::literal("a"), Node::number(5.0));
    assert_eq!(c.static_side(), Some(Side::Right));
    let c = cmp(CompareOp::Eq, Node::number(5.0), Node::literal("a"));
    assert_eq!(c.static_side(), Some(Side::Left));
    let c = cmp(CompareOp::Eq, Node::number(5.0), Node::number(6.0));
    assert_eq!(c.static_side(), None);
    let c = cmp(CompareOp::Eq, Node::literal("a"), Node::literal("b"));
    assert_eq!(c.static_side(), None);
}

#[test]
fn compare_reverse_keeps_operator() {
    let mut c = cmp(CompareOp::Gt, Node::number(5.0), Node::literal("a"));
    c.reverse();
    assert_eq!(c.op, CompareOp::Gt);
    assert_eq!(*c.left, Node::literal("a"));
    assert_eq!(*c.right, Node::number(5.0));
}

#[test]
fn math_reverse_is_limited_to_commutative_operators() {
    let mut node = Node::math(MathOp::Add, Node::literal("a"), Node::number(1.0));
    let NodeKind::Math(m) = &mut node.kind else {
        unreachable!()
    };
    m.reverse().unwrap();
    assert_eq!(*m.left, Node::number(1.0));

    let mut node = Node::math(MathOp::Sub, Node::literal("a"), Node::number(1.0));
    let NodeKind::Math(m) = &mut node.kind else {
        unreachable!()
    };
    assert!(matches!(
        m.reverse(),
        Err(RewriteError::InvariantViolation(_))
    ));
    assert_eq!(*m.left, Node::literal("a"));
}

#[test]
fn display_is_infix() {
    let tree = Node::and(
        Node::compare(CompareOp::Eq, Node::literal("gender"), Node::string("Male")),
        Node::negate(Node::compare(
            CompareOp::Gt,
            Node::math(MathOp::Mul, Node::literal("age"), Node::number(2.0)),
            Node::number(40.0),
        )),
    );
    assert_eq!(
        tree.to_string(),
        "((gender = 'Male') and not ((age * 2) > 40))"
    );
}

#[test]
fn describe_mentions_position() {
    let n = Node::math(MathOp::Div, Node::number(1.0), Node::number(2.0))
        .with_position(Position::new(2, 5));
    assert_eq!(n.describe(), "/ operator at line 2, col 5");
}

#[test]
fn number_equality_is_bitwise() {
    assert_eq!(Node::number(f64::NAN), Node::number(f64::NAN));
    assert_ne!(Node::number(0.0), Node::number(-0.0));
    assert_eq!(
        Node::compare(CompareOp::Lt, Node::literal("a"), Node::number(f64::NAN)),
        Node::compare(CompareOp::Lt, Node::literal("a"), Node::number(f64::NAN)),
    );
    assert_ne!(Node::number(1.0), Node::string("1"));
}
