use pretty_assertions::assert_eq;

use crate::{Environment, Value};

#[test]
fn test_bind_and_lookup() {
    let mut env = Environment::new();
    assert!(env.is_empty());
    assert_eq!(env.bind("x", 1_i64), None);
    assert_eq!(env.lookup("x"), Some(&Value::int(1)));
    assert!(env.contains("x"));
    assert!(!env.contains("y"));
    assert_eq!(env.lookup("y"), None);
}

#[test]
fn test_rebind_returns_previous() {
    let mut env = Environment::with_capacity(1);
    env.bind("x", 1_i64);
    assert_eq!(env.bind("x", "one"), Some(Value::int(1)));
    assert_eq!(env.lookup("x"), Some(&Value::string("one")));
    assert_eq!(env.len(), 1);
}

#[test]
fn test_collect_from_pairs() {
    let env: Environment = [("x", 5_i64), ("y", 2), ("z", 3)].into_iter().collect();
    assert_eq!(env.len(), 3);
    assert_eq!(env.lookup("y"), Some(&Value::int(2)));
}

#[test]
fn test_extend() {
    let mut env = Environment::new().with("a", "my ");
    env.extend([("b", Value::string("little")), ("c", Value::string(" pony"))]);
    assert_eq!(env.len(), 3);
}

#[test]
fn test_debug_is_sorted() {
    let env = Environment::new().with("b", 2_i64).with("a", 1_i64);
    assert_eq!(format!("{env:?}"), r#"{"a": Int(1), "b": Int(2)}"#);
}
