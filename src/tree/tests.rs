//! Tests for the tree model.

use super::*;

fn string_key(text: &str, line: usize) -> Key {
    Key::new(text, Scalar::String(text.to_string()), Position::new(line, 1))
}

#[test]
fn test_plain_scalar_resolution() {
    assert_eq!(Scalar::resolve_plain("42"), Scalar::Integer(42));
    assert_eq!(Scalar::resolve_plain("-7"), Scalar::Integer(-7));
    assert_eq!(Scalar::resolve_plain("0x1f"), Scalar::Integer(31));
    assert_eq!(Scalar::resolve_plain("1.5"), Scalar::Float(1.5));
    assert_eq!(Scalar::resolve_plain("1e3"), Scalar::Float(1000.0));
    assert_eq!(Scalar::resolve_plain("true"), Scalar::Bool(true));
    assert_eq!(Scalar::resolve_plain("False"), Scalar::Bool(false));
    assert_eq!(Scalar::resolve_plain("~"), Scalar::Null);
    assert_eq!(Scalar::resolve_plain(""), Scalar::Null);
    assert_eq!(
        Scalar::resolve_plain("echam"),
        Scalar::String("echam".to_string())
    );
}

#[test]
fn test_word_infinity_stays_a_string() {
    assert_eq!(
        Scalar::resolve_plain("inf"),
        Scalar::String("inf".to_string())
    );
    assert_eq!(
        Scalar::resolve_plain("infinity"),
        Scalar::String("infinity".to_string())
    );
    assert_eq!(Scalar::resolve_plain(".inf"), Scalar::Float(f64::INFINITY));
}

#[test]
fn test_version_like_strings_stay_strings() {
    assert_eq!(
        Scalar::resolve_plain("6.3.05"),
        Scalar::String("6.3.05".to_string())
    );
    assert_eq!(
        Scalar::resolve_plain("1-2"),
        Scalar::String("1-2".to_string())
    );
}

#[test]
fn test_mapping_insert_rejects_duplicate() {
    let mut mapping = Mapping::new();
    mapping
        .insert(string_key("a", 1), Node::Scalar(Scalar::Integer(1)))
        .unwrap();

    let rejected = mapping
        .insert(string_key("a", 2), Node::Scalar(Scalar::Integer(2)))
        .unwrap_err();

    assert_eq!(rejected.position.line, 2);
    assert_eq!(mapping.len(), 1);
    assert_eq!(
        mapping.get("a"),
        Some(&Node::Scalar(Scalar::Integer(1)))
    );
}

#[test]
fn test_mapping_keys_compare_by_resolved_value() {
    let mut mapping = Mapping::new();
    mapping
        .insert(
            Key::new("1", Scalar::Integer(1), Position::new(1, 1)),
            Node::Scalar(Scalar::Null),
        )
        .unwrap();

    // Quoted "1" is a string, so it is a different key.
    mapping
        .insert(
            Key::new("1", Scalar::String("1".to_string()), Position::new(2, 1)),
            Node::Scalar(Scalar::Null),
        )
        .unwrap();

    // `True` resolves to the same boolean as `true`.
    mapping
        .insert(
            Key::new("true", Scalar::Bool(true), Position::new(3, 1)),
            Node::Scalar(Scalar::Null),
        )
        .unwrap();
    assert!(
        mapping
            .insert(
                Key::new("True", Scalar::Bool(true), Position::new(4, 1)),
                Node::Scalar(Scalar::Null),
            )
            .is_err()
    );
    assert_eq!(mapping.len(), 3);
}

#[test]
fn test_mapping_set_replaces_or_appends() {
    let mut mapping = Mapping::new();
    mapping
        .insert(string_key("a", 1), Node::Scalar(Scalar::Integer(1)))
        .unwrap();

    mapping.set("a", Node::Scalar(Scalar::Integer(2)));
    mapping.set("b", Node::Scalar(Scalar::Integer(3)));

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping.get("a"), Some(&Node::Scalar(Scalar::Integer(2))));
    assert_eq!(mapping.entries()[1].key.position, Position::default());
}

#[test]
fn test_key_path_prefix_is_segment_based() {
    let outer = KeyPath::new(["choose_a"]);
    let inner = KeyPath::new(["choose_a", "x", "choose_b"]);
    let lookalike = KeyPath::new(["choose_ab"]);

    assert!(inner.starts_with(&outer));
    assert!(outer.starts_with(&outer));
    assert!(!lookalike.starts_with(&outer));
    assert!(!outer.starts_with(&inner));
}

#[test]
fn test_key_path_with_separator_in_segment() {
    let path = KeyPath::new(["a,b", "c"]);
    assert_eq!(path.len(), 2);
    assert_eq!(path.last(), Some("c"));
    assert_eq!(path.to_string(), "a,b.c");
}

#[test]
fn test_node_serializes_in_document_order() {
    let mut inner = Mapping::new();
    inner
        .insert(string_key("z", 2), Node::Scalar(Scalar::Integer(1)))
        .unwrap();
    inner
        .insert(string_key("a", 3), Node::Scalar(Scalar::Bool(true)))
        .unwrap();
    let mut root = Mapping::new();
    root.insert(string_key("outer", 1), Node::Mapping(inner))
        .unwrap();

    let yaml = serde_yaml::to_string(&Node::Mapping(root)).unwrap();

    assert_eq!(yaml, "outer:\n  z: 1\n  a: true\n");
}
