use super::*;

#[test]
fn absent_keys_are_undefined() {
    let ctx = Context::new().with("a", 1.0);
    assert_eq!(ctx.lookup("a"), Value::Number(1.0));
    assert_eq!(ctx.lookup("missing"), Value::Undefined);
    assert_eq!(ctx.len(), 1);
    assert!(!ctx.is_empty());
}

#[test]
fn from_json_reads_scalars() {
    let ctx = Context::from_json(r#"{"a": 2, "name": "Bob", "flag": false, "gone": null}"#)
        .unwrap();
    assert_eq!(ctx.lookup("a"), Value::Number(2.0));
    assert_eq!(ctx.lookup("name"), Value::from("Bob"));
    assert_eq!(ctx.lookup("flag"), Value::Bool(false));
    assert_eq!(ctx.lookup("gone"), Value::Undefined);
}

#[test]
fn from_json_rejects_nested_values() {
    assert!(Context::from_json(r#"{"a": [1, 2]}"#).is_err());
    assert!(Context::from_json("[]").is_err());
}
