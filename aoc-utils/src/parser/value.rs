//! Dynamically typed parse results for registry and template parsing.

use crate::error::ParseError;
use crate::vec::{Vec2, Vec3};

/// A value produced by a parser resolved at runtime from a type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    Int(i64),
    Str(String),
    Vec2(Vec2),
    Vec3(Vec3),
    /// Result of an `T[]` parser
    List(Vec<Value>),
    /// Result of an `(A,B,..)` parser
    Tuple(Vec<Value>),
}

impl Value {
    /// Name of the variant, used in type mismatch errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "str",
            Value::Vec2(_) => "vec",
            Value::Vec3(_) => "vec3",
            Value::List(_) => "list",
            Value::Tuple(_) => "tuple",
        }
    }

    fn mismatch(&self, expected: &'static str) -> ParseError {
        ParseError::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<Vec2> for Value {
    fn from(value: Vec2) -> Self {
        Value::Vec2(value)
    }
}

impl From<Vec3> for Value {
    fn from(value: Vec3) -> Self {
        Value::Vec3(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}

impl<A: Into<Value>, B: Into<Value>> From<(A, B)> for Value {
    fn from((a, b): (A, B)) -> Self {
        Value::Tuple(vec![a.into(), b.into()])
    }
}

impl<A: Into<Value>, B: Into<Value>, C: Into<Value>> From<(A, B, C)> for Value {
    fn from((a, b, c): (A, B, C)) -> Self {
        Value::Tuple(vec![a.into(), b.into(), c.into()])
    }
}

impl TryFrom<Value> for i64 {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Int(n) => Ok(n),
            other => Err(other.mismatch("int")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Str(s) => Ok(s),
            other => Err(other.mismatch("str")),
        }
    }
}

impl TryFrom<Value> for Vec2 {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Vec2(v) => Ok(v),
            other => Err(other.mismatch("vec")),
        }
    }
}

impl TryFrom<Value> for Vec3 {
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Vec3(v) => Ok(v),
            other => Err(other.mismatch("vec3")),
        }
    }
}

impl<T> TryFrom<Value> for Vec<T>
where
    T: TryFrom<Value, Error = ParseError>,
{
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::List(items) => items.into_iter().map(T::try_from).collect(),
            other => Err(other.mismatch("list")),
        }
    }
}

fn tuple_items<const N: usize>(value: Value) -> Result<[Value; N], ParseError> {
    match value {
        Value::Tuple(items) => {
            let actual = items.len();
            items.try_into().map_err(|_| ParseError::Arity {
                kind: "tuple",
                expected: N,
                actual,
                input: String::new(),
            })
        }
        other => Err(other.mismatch("tuple")),
    }
}

impl<A, B> TryFrom<Value> for (A, B)
where
    A: TryFrom<Value, Error = ParseError>,
    B: TryFrom<Value, Error = ParseError>,
{
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let [a, b] = tuple_items(value)?;
        Ok((a.try_into()?, b.try_into()?))
    }
}

impl<A, B, C> TryFrom<Value> for (A, B, C)
where
    A: TryFrom<Value, Error = ParseError>,
    B: TryFrom<Value, Error = ParseError>,
    C: TryFrom<Value, Error = ParseError>,
{
    type Error = ParseError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let [a, b, c] = tuple_items(value)?;
        Ok((a.try_into()?, b.try_into()?, c.try_into()?))
    }
}

/// Named fields produced by a [`Template`](super::Template), in template order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<(String, Value)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing an earlier one with the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.fields.iter_mut().find(|(field, _)| *field == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Converts a field to a concrete type.
    ///
    /// ```rust
    /// use aoc_utils::parser::{Record, Value};
    ///
    /// let mut record = Record::new();
    /// record.insert("count", Value::Int(3));
    /// assert_eq!(record.field::<i64>("count").unwrap(), 3);
    /// assert!(record.field::<String>("count").is_err());
    /// assert!(record.field::<i64>("missing").is_err());
    /// ```
    pub fn field<T>(&self, name: &str) -> Result<T, ParseError>
    where
        T: TryFrom<Value, Error = ParseError>,
    {
        self.get(name)
            .cloned()
            .ok_or_else(|| ParseError::MissingField(name.to_string()))?
            .try_into()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl IntoIterator for Record {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vec::vec2;

    #[test]
    fn test_nested_conversions() {
        let value = Value::from(vec![(vec2(1, 2), 3i64), (vec2(4, 5), 6)]);
        let back: Vec<(Vec2, i64)> = value.try_into().unwrap();
        assert_eq!(back, vec![(vec2(1, 2), 3), (vec2(4, 5), 6)]);
    }

    #[test]
    fn test_mismatch_reports_kinds() {
        let err = i64::try_from(Value::Str("x".into())).unwrap_err();
        assert_eq!(
            err,
            ParseError::TypeMismatch {
                expected: "int",
                found: "str"
            }
        );
        assert!(<(i64, i64)>::try_from(Value::Tuple(vec![Value::Int(1)])).is_err());
    }

    #[test]
    fn test_record_insert_replaces() {
        let mut record = Record::new();
        record.insert("a", Value::Int(1));
        record.insert("b", Value::Int(2));
        record.insert("a", Value::Int(3));
        assert_eq!(record.len(), 2);
        assert_eq!(record.field::<i64>("a").unwrap(), 3);
        let names: Vec<&str> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
