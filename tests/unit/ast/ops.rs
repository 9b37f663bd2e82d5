use super::*;

#[test]
fn math_symbols_round_trip() {
    for op in MathOp::ALL {
        assert_eq!(MathOp::from_symbol(op.symbol()), Some(op));
    }
    assert_eq!(MathOp::from_symbol("%"), None);
}

#[test]
fn compare_symbols_round_trip() {
    for op in CompareOp::ALL {
        assert_eq!(CompareOp::from_symbol(op.symbol()), Some(op));
    }
    assert_eq!(CompareOp::from_symbol("=="), None);
}

#[test]
fn compare_classes() {
    for op in [CompareOp::Eq, CompareOp::Ne, CompareOp::Is, CompareOp::IsNot] {
        assert_eq!(op.class(), CompareClass::Equality);
    }
    for op in [CompareOp::Lt, CompareOp::Le, CompareOp::Gt, CompareOp::Ge] {
        assert_eq!(op.class(), CompareClass::Order);
    }
    assert!(CompareOp::Eq.is_affirmative());
    assert!(CompareOp::Is.is_affirmative());
    assert!(!CompareOp::Ne.is_affirmative());
    assert!(!CompareOp::IsNot.is_affirmative());
}

#[test]
fn mirrored_swaps_direction_only() {
    assert_eq!(CompareOp::Lt.mirrored(), CompareOp::Gt);
    assert_eq!(CompareOp::Ge.mirrored(), CompareOp::Le);
    assert_eq!(CompareOp::Eq.mirrored(), CompareOp::Eq);
    for op in CompareOp::ALL {
        assert_eq!(op.mirrored().mirrored(), op);
    }
}

#[test]
fn apply_arithmetic() {
    assert_eq!(MathOp::Add.apply(2.0, 3.0).unwrap(), 5.0);
    assert_eq!(MathOp::Sub.apply(2.0, 3.0).unwrap(), -1.0);
    assert_eq!(MathOp::Mul.apply(2.0, 3.0).unwrap(), 6.0);
    assert_eq!(MathOp::Div.apply(3.0, 2.0).unwrap(), 1.5);
}

#[test]
fn division_by_zero_is_an_error() {
    let err = MathOp::Div.apply(5.0, 0.0).unwrap_err();
    assert!(matches!(err, RewriteError::Arithmetic(_)));
    assert!(err.to_string().contains("division by zero"));
    assert!(MathOp::Div.apply(0.0, -0.0).is_err());
}

#[test]
fn only_add_and_mul_commute() {
    assert!(MathOp::Add.is_commutative());
    assert!(MathOp::Mul.is_commutative());
    assert!(!MathOp::Sub.is_commutative());
    assert!(!MathOp::Div.is_commutative());
}

#[test]
fn logical_symbols() {
    assert_eq!(LogicalOp::from_symbol("and"), Some(LogicalOp::And));
    assert_eq!(LogicalOp::from_symbol("or"), Some(LogicalOp::Or));
    assert_eq!(LogicalOp::from_symbol("xor"), None);
    assert_eq!(LogicalOp::Or.to_string(), "or");
}
