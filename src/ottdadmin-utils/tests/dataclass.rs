use ottdadmin_utils::{dataclass::SimpleDataclass, simple_dataclass, Error};
use serde_json::{json, Value};

simple_dataclass! {
    #[derive(Clone, PartialEq)]
    pub struct Pair {
        pub a: i64 = 10,
        pub b: String = "default".to_owned(),
    }
}

simple_dataclass! {
    pub struct ClientInfo {
        pub id: u32 = 0,
        pub name: Option<String> = None,
        pub company: u8 = 255,
    }
}

#[test]
fn construction_skips_unknown_fields() -> Result<(), Error> {
    let pair = Pair::from_fields([("a", json!(1)), ("c", json!(2))])?;

    assert_eq!(pair.a, 1);
    assert_eq!(pair.b, "default");
    assert!(Pair::has_field("a"));
    assert!(!Pair::has_field("c"));

    Ok(())
}

#[test]
fn defaults_without_fields() -> Result<(), Error> {
    let pair = Pair::from_fields(Vec::<(&str, Value)>::new())?;
    assert_eq!(pair, Pair::default());

    Ok(())
}

#[test]
fn update_assigns_existing_fields() -> Result<(), Error> {
    let mut info = ClientInfo::default();
    info.update([("name", json!("Alice")), ("company", json!(3))])?;

    assert_eq!(info.id, 0);
    assert_eq!(info.name.as_deref(), Some("Alice"));
    assert_eq!(info.company, 3);

    info.update([("name", Value::Null), ("unknown", json!(true))])?;
    assert_eq!(info.name, None);

    Ok(())
}

#[test]
fn update_from_json_object() -> Result<(), Error> {
    let object = json!({ "id": 7, "name": "Bob", "extra": [1, 2, 3] });
    let Value::Object(map) = object else {
        unreachable!()
    };

    let info = ClientInfo::from_fields(map)?;
    assert_eq!(info.id, 7);
    assert_eq!(info.name.as_deref(), Some("Bob"));
    assert_eq!(info.company, 255);

    Ok(())
}

#[test]
fn mistyped_value_fails() {
    let mut pair = Pair::default();
    let result = pair.update([("b", json!("set")), ("a", json!("not a number"))]);

    assert!(matches!(result, Err(Error::Field { name: "a", .. })));
    assert_eq!(pair.b, "set");
    assert_eq!(pair.a, 10);
}

#[test]
fn field_table_order() {
    let table = ClientInfo::fields();

    assert_eq!(table.type_name(), "ClientInfo");
    assert_eq!(table.len(), 3);
    assert_eq!(table.names().collect::<Vec<_>>(), ["id", "name", "company"]);
}

#[test]
fn repr_reflects_current_state() -> Result<(), Error> {
    let mut pair = Pair::from_fields([("a", 1)])?;
    assert_eq!(pair.repr().to_string(), r#"<Pair(**{"a": 1, "b": "default"})>"#);

    pair.b = "changed".to_owned();
    assert_eq!(format!("{pair:?}"), r#"<Pair(**{"a": 1, "b": "changed"})>"#);

    Ok(())
}
