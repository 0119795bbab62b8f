//! Tagmatch demo
//!
//! Dispatches an option-like enum and two record shapes through handler
//! tables, then classifies a few integers with a pattern matcher.

use tagmatch::{
    patternmatch, HandlerTable, Pattern, PatternTable, Record, RecordShape, ResultMapping,
    Tagged, TaggedUnion, Value,
};

enum Maybe<A> {
    Some(A),
    None,
}

impl<A> Maybe<A> {
    fn into_value(self) -> Option<A> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<A> Tagged for Maybe<A> {
    fn tag(&self) -> &str {
        match self {
            Maybe::Some(_) => "Some",
            Maybe::None => "None",
        }
    }
}

impl<A> TaggedUnion for Maybe<A> {
    const TAGS: &'static [&'static str] = &["Some", "None"];
}

fn main() -> Result<(), tagmatch::Error> {
    tagmatch::init_tracing();

    let value_or_empty = HandlerTable::new()
        .on("Some", |m: Maybe<String>| m.into_value().unwrap_or_default())
        .on("None", |_| "Empty".to_string())
        .seal()?;
    println!("{}", value_or_empty.apply(Maybe::Some("text".to_string()))?);
    println!("{}", value_or_empty.apply(Maybe::None)?);

    let foo = RecordShape::new("Foo")
        .required("name")
        .default("colour", "Red")
        .optional("size");
    let bar = RecordShape::new("Bar").required("label");
    let records = [
        foo.build([("name", Value::from("Foo"))])?,
        bar.build([("label", Value::from("Bar"))])?,
    ];

    let get_label = HandlerTable::new()
        .on("Foo", |r: &Record| {
            let colour = r.field("colour").map(Value::to_string).unwrap_or_default();
            let name = r.field("name").map(Value::to_string).unwrap_or_default();
            format!("{colour} {name}")
        })
        .on("Bar", |r| r.get_str("label").unwrap_or_default().to_string())
        .seal_for(&[foo.tag(), bar.tag()])?;

    for record in &records {
        println!("{}", get_label.apply(record)?);
    }

    let patterns = PatternTable::new()
        .with("isEven", Pattern::predicate(|x: &i64| x % 2 == 0))
        .with("isPositive", Pattern::predicate(|x: &i64| *x > 0));
    let results = ResultMapping::new()
        .on("isEven", |_: i64| "even")
        .on("isPositive", |_| "positive");
    let classify = patternmatch(patterns).results(results)?;
    for x in [4, 3, -4, -3] {
        println!("{x}: {}", classify.run(&x).unwrap_or("no match"));
    }

    Ok(())
}
