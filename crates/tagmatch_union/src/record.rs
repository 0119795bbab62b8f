//! Tagged records built from declared shapes.
//!
//! A `RecordShape` names a variant tag and declares its fields as required,
//! optional, or defaulted. `build()` validates the arguments against the
//! shape, fills in defaults for absent fields and produces a `Record` that
//! can be dispatched through a handler table like any other tagged value.

use std::fmt;

use crate::errors::{duplicate_field, empty_tag, missing_field, unknown_field};
use crate::{RecordError, Tagged};

/// Dynamic field value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Value {
    /// Borrow the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Str(_) => "str",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

/// A tag plus named fields, in declaration order.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    tag: String,
    fields: Vec<(String, Value)>,
}

impl Record {
    /// Create a record with no fields.
    ///
    /// Records made this way skip shape validation; they stand in for values
    /// constructed on the far side of a boundary.
    pub fn new(tag: impl Into<String>) -> Self {
        Record {
            tag: tag.into(),
            fields: Vec::new(),
        }
    }

    /// Set a field, replacing any existing value under the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name.into(), value.into());
        self
    }

    fn set(&mut self, name: String, value: Value) {
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find_map(|(n, v)| (n == name).then_some(v))
    }

    /// Shorthand for `field(name)` narrowed to a string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Tagged for Record {
    fn tag(&self) -> &str {
        &self.tag
    }
}

#[derive(Clone, Debug, PartialEq)]
enum FieldKind {
    Required,
    Optional,
    Default(Value),
}

#[derive(Clone, Debug, PartialEq)]
struct FieldSpec {
    name: String,
    kind: FieldKind,
}

/// Declared shape of one record variant.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordShape {
    tag: String,
    fields: Vec<FieldSpec>,
}

impl RecordShape {
    pub fn new(tag: impl Into<String>) -> Self {
        RecordShape {
            tag: tag.into(),
            fields: Vec::new(),
        }
    }

    /// Declare a field every record must be given.
    #[must_use]
    pub fn required(self, name: impl Into<String>) -> Self {
        self.declare(name.into(), FieldKind::Required)
    }

    /// Declare a field that may be left out entirely.
    #[must_use]
    pub fn optional(self, name: impl Into<String>) -> Self {
        self.declare(name.into(), FieldKind::Optional)
    }

    /// Declare a field filled with `value` when not given.
    #[must_use]
    pub fn default(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.declare(name.into(), FieldKind::Default(value.into()))
    }

    fn declare(mut self, name: String, kind: FieldKind) -> Self {
        self.fields.push(FieldSpec { name, kind });
        self
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Declared field names, in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Build a record from `args`, applying defaults for absent fields.
    ///
    /// Fields appear in declaration order. When a name is given more than
    /// once in `args` the last value wins.
    pub fn build<K, I>(&self, args: I) -> Result<Record, RecordError>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Value)>,
    {
        if self.tag.is_empty() {
            return Err(empty_tag());
        }
        for (i, spec) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == spec.name) {
                return Err(duplicate_field(&self.tag, &spec.name));
            }
        }

        let mut given = Record::new(self.tag.clone());
        for (name, value) in args {
            let name = name.as_ref();
            if !self.fields.iter().any(|f| f.name == name) {
                return Err(unknown_field(&self.tag, name));
            }
            given.set(name.to_string(), value);
        }

        let mut record = Record::new(self.tag.clone());
        for spec in &self.fields {
            let value = match (given.field(&spec.name), &spec.kind) {
                (Some(value), _) => value.clone(),
                (None, FieldKind::Default(value)) => value.clone(),
                (None, FieldKind::Optional) => continue,
                (None, FieldKind::Required) => {
                    return Err(missing_field(&self.tag, &spec.name));
                }
            };
            record.fields.push((spec.name.clone(), value));
        }
        tracing::trace!(tag = %self.tag, fields = record.len(), "built record");
        Ok(record)
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
