use super::*;

#[test]
fn as_number_narrows_only_numbers() {
    assert_eq!(Value::Number(2.5).as_number().unwrap(), 2.5);

    let err = Value::from("x").as_number().unwrap_err();
    match err {
        RewriteError::NotANumber { value, type_name } => {
            assert_eq!(value, "x");
            assert_eq!(type_name, "string");
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(Value::Bool(true).as_number().is_err());
    assert!(Value::Undefined.as_number().is_err());
}

#[test]
fn as_bool_rejects_other_types() {
    assert!(Value::Bool(false).as_bool().is_ok());
    assert!(matches!(
        Value::Number(1.0).as_bool(),
        Err(RewriteError::Evaluation(_))
    ));
}

#[test]
fn static_cmp_orders_within_and_across_types() {
    assert_eq!(
        Value::Number(1.0).static_cmp(&Value::Number(2.0)),
        Ordering::Less
    );
    assert_eq!(Value::from("b").static_cmp(&Value::from("a")), Ordering::Greater);
    assert_eq!(
        Value::Bool(true).static_cmp(&Value::Number(-5.0)),
        Ordering::Less
    );
    assert_eq!(
        Value::Number(100.0).static_cmp(&Value::from("a")),
        Ordering::Less
    );
    assert_eq!(
        Value::Number(f64::NAN).static_cmp(&Value::Number(f64::NAN)),
        Ordering::Equal
    );
}

#[test]
fn partial_order_is_none_for_mixed_operands() {
    assert_eq!(
        Value::Number(1.0).partial_order(&Value::Number(1.0)),
        Some(Ordering::Equal)
    );
    assert_eq!(Value::Number(1.0).partial_order(&Value::from("1")), None);
    assert_eq!(Value::Undefined.partial_order(&Value::Undefined), None);
}

#[test]
fn truthiness() {
    assert!(Value::Number(3.0).truthy());
    assert!(!Value::Number(0.0).truthy());
    assert!(!Value::from("").truthy());
    assert!(Value::from("x").truthy());
    assert!(!Value::Undefined.truthy());
}

#[test]
fn serde_is_untagged_with_null_as_undefined() {
    let v: Vec<Value> = serde_json::from_str(r#"[1.5, "s", true, null]"#).unwrap();
    assert_eq!(
        v,
        vec![
            Value::Number(1.5),
            Value::from("s"),
            Value::Bool(true),
            Value::Undefined
        ]
    );
    assert_eq!(serde_json::to_string(&Value::Undefined).unwrap(), "null");
}

#[test]
fn position_display() {
    assert_eq!(Position::new(3, 7).to_string(), "line 3, col 7");
}
