use super::*;

#[test]
fn defaults_keep_identity_inference_and_operators() {
    let opts = RewriteOpts::default();
    assert_eq!(opts.order_inference, OrderInference::Identity);
    assert!(!opts.canonicalize.mirror_order_operators);
}

#[test]
fn from_json_fills_missing_fields() {
    let opts = RewriteOpts::from_json(r#"{"order_inference": "implication"}"#).unwrap();
    assert_eq!(opts.order_inference, OrderInference::Implication);
    assert!(!opts.canonicalize.mirror_order_operators);

    let opts =
        RewriteOpts::from_json(r#"{"canonicalize": {"mirror_order_operators": true}}"#).unwrap();
    assert_eq!(opts.order_inference, OrderInference::Identity);
    assert!(opts.canonicalize.mirror_order_operators);

    assert_eq!(RewriteOpts::from_json("{}").unwrap(), RewriteOpts::default());
}

#[test]
fn from_json_rejects_unknown_inference() {
    assert!(RewriteOpts::from_json(r#"{"order_inference": "magic"}"#).is_err());
}
