//! Layered configuration built from several bags.

use databag::{databag, deep_merge, Bag, DataBag, Map, Value};

fn defaults() -> DataBag {
    databag! {
        "server.host" => "localhost",
        "server.port" => 80i64,
        "server.tls.enabled" => false,
        "log.level" => "info",
        "features" => vec!["search", "upload"],
    }
}

fn site() -> DataBag {
    databag! {
        "server.port" => 8080i64,
        "server.tls.enabled" => true,
        "server.tls.cert" => "/etc/site.pem",
    }
}

fn computed() -> DataBag {
    databag! {
        "log.level" => "debug",
        "features" => vec!["search"],
    }
}

#[test]
fn later_layers_win_on_leaves() {
    let mut config = defaults();
    config.merge(&site());
    config.merge(&computed());

    assert_eq!(config.get("server.host"), Some(&Value::from("localhost")));
    assert_eq!(config.get("server.port"), Some(&Value::from(8080i64)));
    assert_eq!(config.get("server.tls.enabled"), Some(&Value::from(true)));
    assert_eq!(
        config.get("server.tls.cert"),
        Some(&Value::from("/etc/site.pem"))
    );
    assert_eq!(config.get("log.level"), Some(&Value::from("debug")));
    assert_eq!(config.get("features"), Some(&Value::from(vec!["search"])));
}

#[test]
fn merge_all_equals_free_deep_merge() {
    let mut config = DataBag::new();
    config.merge_all(&[defaults(), site(), computed()]);

    let (d, s, c) = (defaults(), site(), computed());
    let merged: Map = deep_merge([d.all(), s.all(), c.all()]);

    assert_eq!(config.all(), &merged);
}

#[test]
fn merging_sibling_leaves_from_separate_bags() {
    let mut a = DataBag::new();
    a.set("a.b.c.d", Value::from("this is d value"));
    a.set("a.b.c.f", Value::from("this is f value"));
    a.set("foo.bar", Value::from("this is bar value"));

    let mut b = DataBag::new();
    b.set("a.b.c.f", Value::from("this is the other f value"));
    b.set("foo.bar", Value::from("this is the other bar value"));

    a.merge(&b);

    let leaves: Vec<(String, Value)> = a
        .leaves()
        .map(|(name, value)| (name, value.clone()))
        .collect();
    assert_eq!(
        leaves,
        vec![
            ("a.b.c.d".to_string(), Value::from("this is d value")),
            ("a.b.c.f".to_string(), Value::from("this is the other f value")),
            ("foo.bar".to_string(), Value::from("this is the other bar value")),
        ]
    );
}

#[test]
fn bags_with_different_separators_merge_by_structure() {
    let mut dotted = databag! { "a.b" => 1i64 };
    let mut slashed = DataBag::with_separator("/").unwrap();
    slashed.set("a/c", Value::from(2i64));

    dotted.merge(&slashed);
    assert_eq!(dotted.get("a.b"), Some(&Value::from(1i64)));
    assert_eq!(dotted.get("a.c"), Some(&Value::from(2i64)));
}

#[test]
fn merge_through_trait_objects() {
    let layers: Vec<Box<dyn Bag>> = vec![Box::new(defaults()), Box::new(site())];

    let mut config = DataBag::new();
    for layer in &layers {
        config.merge(&**layer);
    }
    assert_eq!(config.get("server.port"), Some(&Value::from(8080i64)));
    assert_eq!(config.get("log.level"), Some(&Value::from("info")));
}
