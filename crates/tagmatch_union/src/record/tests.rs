use super::*;
use pretty_assertions::assert_eq;

fn foo_shape() -> RecordShape {
    RecordShape::new("Foo")
        .required("name")
        .default("colour", "Red")
        .optional("size")
}

#[test]
fn defaults_fill_absent_fields() {
    let foo = foo_shape().build([("name", Value::from("Foo"))]).unwrap();
    assert_eq!(foo.tag(), "Foo");
    assert_eq!(foo.get_str("name"), Some("Foo"));
    assert_eq!(foo.get_str("colour"), Some("Red"));
    assert_eq!(foo.field("size"), None);
    assert_eq!(foo.len(), 2);
}

#[test]
fn arguments_override_defaults() {
    let foo = foo_shape()
        .build([
            ("colour", Value::from("Blue")),
            ("name", Value::from("Foo")),
            ("size", Value::from(3_i64)),
        ])
        .unwrap();
    let fields: Vec<(&str, String)> = foo.fields().map(|(n, v)| (n, v.to_string())).collect();
    assert_eq!(
        fields,
        vec![
            ("name", "Foo".to_string()),
            ("colour", "Blue".to_string()),
            ("size", "3".to_string()),
        ]
    );
}

#[test]
fn missing_required_field() {
    let err = foo_shape()
        .build(Vec::<(&str, Value)>::new())
        .unwrap_err();
    assert_eq!(
        err,
        RecordError::MissingField {
            tag: "Foo".to_string(),
            field: "name".to_string()
        }
    );
}

#[test]
fn unknown_field_rejected() {
    let err = RecordShape::new("Bar")
        .required("label")
        .build([("label", Value::from("Bar")), ("colour", Value::from("Red"))])
        .unwrap_err();
    assert_eq!(
        err,
        RecordError::UnknownField {
            tag: "Bar".to_string(),
            field: "colour".to_string()
        }
    );
}

#[test]
fn duplicate_declaration_rejected() {
    let err = RecordShape::new("Foo")
        .required("name")
        .optional("name")
        .build([("name", Value::from("x"))])
        .unwrap_err();
    assert_eq!(err, duplicate_field("Foo", "name"));
}

#[test]
fn empty_tag_rejected() {
    let err = RecordShape::new("")
        .build(Vec::<(String, Value)>::new())
        .unwrap_err();
    assert_eq!(err, RecordError::EmptyTag);
}

#[test]
fn last_argument_wins() {
    let bar = RecordShape::new("Bar")
        .required("label")
        .build([("label", Value::from("a")), ("label", Value::from("b"))])
        .unwrap();
    assert_eq!(bar.get_str("label"), Some("b"));
}

#[test]
fn hand_built_record_replaces_fields() {
    let rec = Record::new("Some").with("value", "a").with("value", "b");
    assert_eq!(rec.len(), 1);
    assert_eq!(rec.get_str("value"), Some("b"));
    assert_eq!(rec.tag(), "Some");
}

#[test]
fn value_accessors() {
    assert_eq!(Value::from(7_i64).as_int(), Some(7));
    assert_eq!(Value::from("x").as_int(), None);
    assert_eq!(Value::from(true).type_name(), "bool");
    assert_eq!(Value::from(1.5).to_string(), "1.5");
}

#[test]
fn shape_reports_declared_fields() {
    let shape = foo_shape();
    assert_eq!(shape.tag(), "Foo");
    assert_eq!(
        shape.field_names().collect::<Vec<_>>(),
        vec!["name", "colour", "size"]
    );
}
