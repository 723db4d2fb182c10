// SPDX-License-Identifier: Apache-2.0

//! The owned JSON value tree.
//!
//! A [`Value`] holds exactly one variant at a time and exclusively owns its
//! payload: cloning is a deep copy, dropping releases the whole subtree, and
//! there is no way to share or alias a node. Typed access goes through
//! fallible accessors that report [`ValueError::TypeMismatch`] rather than
//! panicking.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::parse_error::ParseError;
use crate::value_error::ValueError;

/// Payload of [`Value::Array`].
pub type Array = Vec<Value>;
/// Payload of [`Value::Object`]. Keys are unique; iteration order is by key.
pub type Object = BTreeMap<String, Value>;

/// Discriminant of a [`Value`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Array,
    Object,
    String,
    Bool,
    Integer,
    Number,
    Null,
}

impl ValueType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueType::Array => "array",
            ValueType::Object => "object",
            ValueType::String => "string",
            ValueType::Bool => "bool",
            ValueType::Integer => "integer",
            ValueType::Number => "number",
            ValueType::Null => "null",
        }
    }
}

impl core::fmt::Display for ValueType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A JSON value.
///
/// Textual parsing produces `Integer` for number tokens without a fraction or
/// exponent that fit in an `i64`, and `Number` for everything else.
///
/// Equality is structural. Unlike plain `f64` comparison, a `NaN` number
/// equals another `NaN`, so every value (and its clone) is equal to itself.
/// `0.0` and `-0.0` compare equal.
#[derive(Debug, Clone, Default)]
pub enum Value {
    Array(Array),
    Object(Object),
    String(String),
    Bool(bool),
    Integer(i64),
    Number(f64),
    #[default]
    Null,
}

impl Value {
    /// An empty array.
    pub fn array() -> Self {
        Value::Array(Vec::new())
    }

    /// An empty object.
    pub fn object() -> Self {
        Value::Object(BTreeMap::new())
    }

    /// An array built from anything convertible into values.
    ///
    /// ```
    /// use jsontree::Value;
    /// let list = Value::array_from(["abc", "def"]);
    /// assert_eq!(list.len(), Ok(2));
    /// ```
    pub fn array_from<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        Value::Array(items.into_iter().map(Into::into).collect())
    }

    /// An object built from key/value pairs. A repeated key keeps the last value.
    pub fn object_from<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Parses lenient JSON; see [`crate::parse`].
    pub fn parse<B: AsRef<[u8]> + ?Sized>(input: &B) -> Result<Value, ParseError> {
        crate::parse(input)
    }

    /// Parses strict JSON; see [`crate::parse_strict`].
    pub fn parse_strict<B: AsRef<[u8]> + ?Sized>(input: &B) -> Result<Value, ParseError> {
        crate::parse_strict(input)
    }

    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
            Value::String(_) => ValueType::String,
            Value::Bool(_) => ValueType::Bool,
            Value::Integer(_) => ValueType::Integer,
            Value::Number(_) => ValueType::Number,
            Value::Null => ValueType::Null,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn as_bool(&self) -> Result<bool, ValueError> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => ValueError::mismatch(ValueType::Bool, other.value_type()),
        }
    }

    pub fn as_bool_mut(&mut self) -> Result<&mut bool, ValueError> {
        match self {
            Value::Bool(b) => Ok(b),
            other => ValueError::mismatch(ValueType::Bool, other.value_type()),
        }
    }

    pub fn as_integer(&self) -> Result<i64, ValueError> {
        match self {
            Value::Integer(i) => Ok(*i),
            other => ValueError::mismatch(ValueType::Integer, other.value_type()),
        }
    }

    pub fn as_integer_mut(&mut self) -> Result<&mut i64, ValueError> {
        match self {
            Value::Integer(i) => Ok(i),
            other => ValueError::mismatch(ValueType::Integer, other.value_type()),
        }
    }

    pub fn as_number(&self) -> Result<f64, ValueError> {
        match self {
            Value::Number(n) => Ok(*n),
            other => ValueError::mismatch(ValueType::Number, other.value_type()),
        }
    }

    pub fn as_number_mut(&mut self) -> Result<&mut f64, ValueError> {
        match self {
            Value::Number(n) => Ok(n),
            other => ValueError::mismatch(ValueType::Number, other.value_type()),
        }
    }

    pub fn as_str(&self) -> Result<&str, ValueError> {
        match self {
            Value::String(s) => Ok(s),
            other => ValueError::mismatch(ValueType::String, other.value_type()),
        }
    }

    pub fn as_string_mut(&mut self) -> Result<&mut String, ValueError> {
        match self {
            Value::String(s) => Ok(s),
            other => ValueError::mismatch(ValueType::String, other.value_type()),
        }
    }

    pub fn as_array(&self) -> Result<&Array, ValueError> {
        match self {
            Value::Array(a) => Ok(a),
            other => ValueError::mismatch(ValueType::Array, other.value_type()),
        }
    }

    pub fn as_array_mut(&mut self) -> Result<&mut Array, ValueError> {
        match self {
            Value::Array(a) => Ok(a),
            other => ValueError::mismatch(ValueType::Array, other.value_type()),
        }
    }

    pub fn as_object(&self) -> Result<&Object, ValueError> {
        match self {
            Value::Object(o) => Ok(o),
            other => ValueError::mismatch(ValueType::Object, other.value_type()),
        }
    }

    pub fn as_object_mut(&mut self) -> Result<&mut Object, ValueError> {
        match self {
            Value::Object(o) => Ok(o),
            other => ValueError::mismatch(ValueType::Object, other.value_type()),
        }
    }

    /// Appends to an array.
    pub fn push<T: Into<Value>>(&mut self, value: T) -> Result<(), ValueError> {
        self.as_array_mut()?.push(value.into());
        Ok(())
    }

    /// Appends a `Null` to an array and returns the new slot for in-place filling.
    pub fn push_default(&mut self) -> Result<&mut Value, ValueError> {
        let array = self.as_array_mut()?;
        let index = array.len();
        array.push(Value::Null);
        Ok(&mut array[index])
    }

    pub fn at(&self, index: usize) -> Result<&Value, ValueError> {
        let array = self.as_array()?;
        array.get(index).ok_or(ValueError::IndexOutOfBounds {
            index,
            len: array.len(),
        })
    }

    pub fn at_mut(&mut self, index: usize) -> Result<&mut Value, ValueError> {
        let array = self.as_array_mut()?;
        let len = array.len();
        array
            .get_mut(index)
            .ok_or(ValueError::IndexOutOfBounds { index, len })
    }

    pub fn get(&self, key: &str) -> Result<&Value, ValueError> {
        self.as_object()?.get(key).ok_or(ValueError::MissingKey)
    }

    pub fn get_mut(&mut self, key: &str) -> Result<&mut Value, ValueError> {
        self.as_object_mut()?
            .get_mut(key)
            .ok_or(ValueError::MissingKey)
    }

    /// Keyed write access: returns the member, inserting `Null` first if absent.
    pub fn entry<K: Into<String>>(&mut self, key: K) -> Result<&mut Value, ValueError> {
        Ok(self.as_object_mut()?.entry(key.into()).or_default())
    }

    /// Sets an object member, returning the value it replaced.
    pub fn insert<K, V>(&mut self, key: K, value: V) -> Result<Option<Value>, ValueError>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        Ok(self.as_object_mut()?.insert(key.into(), value.into()))
    }

    /// Number of elements or members of a container.
    pub fn len(&self) -> Result<usize, ValueError> {
        match self {
            Value::Array(a) => Ok(a.len()),
            Value::Object(o) => Ok(o.len()),
            other => ValueError::mismatch(ValueType::Array, other.value_type()),
        }
    }

    pub fn is_empty(&self) -> Result<bool, ValueError> {
        self.len().map(|len| len == 0)
    }

    /// Moves the payload out, leaving `Null` in its place.
    pub fn take(&mut self) -> Value {
        core::mem::take(self)
    }

    /// Orders two values of the same variant.
    ///
    /// `Ok(None)` means the pair is incomparable (`Null`s, `NaN`s); every
    /// relational predicate is then `false`. Arrays compare lexicographically,
    /// treating incomparable elements as equivalent. Objects have no ordering.
    pub fn try_cmp(&self, other: &Value) -> Result<Option<Ordering>, ValueError> {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => compare_arrays(a, b),
            (Value::Object(_), Value::Object(_)) => Err(ValueError::Unordered(ValueType::Object)),
            (Value::String(a), Value::String(b)) => Ok(Some(a.as_bytes().cmp(b.as_bytes()))),
            (Value::Bool(a), Value::Bool(b)) => Ok(Some(a.cmp(b))),
            (Value::Integer(a), Value::Integer(b)) => Ok(Some(a.cmp(b))),
            (Value::Number(a), Value::Number(b)) => Ok(a.partial_cmp(b)),
            (Value::Null, Value::Null) => Ok(None),
            _ => ValueError::mismatch(self.value_type(), other.value_type()),
        }
    }

    pub fn try_lt(&self, other: &Value) -> Result<bool, ValueError> {
        Ok(matches!(self.try_cmp(other)?, Some(Ordering::Less)))
    }

    pub fn try_le(&self, other: &Value) -> Result<bool, ValueError> {
        Ok(matches!(
            self.try_cmp(other)?,
            Some(Ordering::Less | Ordering::Equal)
        ))
    }

    pub fn try_gt(&self, other: &Value) -> Result<bool, ValueError> {
        Ok(matches!(self.try_cmp(other)?, Some(Ordering::Greater)))
    }

    pub fn try_ge(&self, other: &Value) -> Result<bool, ValueError> {
        Ok(matches!(
            self.try_cmp(other)?,
            Some(Ordering::Greater | Ordering::Equal)
        ))
    }
}

fn compare_arrays(a: &[Value], b: &[Value]) -> Result<Option<Ordering>, ValueError> {
    for (left, right) in a.iter().zip(b) {
        match left.try_cmp(right)? {
            Some(Ordering::Equal) | None => continue,
            decided => return Ok(decided),
        }
    }
    Ok(Some(a.len().cmp(&b.len())))
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

impl core::str::FromStr for Value {
    type Err = ParseError;

    /// Strict parse of a single document.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_strict(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Self {
        Value::Integer(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(String::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::array_from(items)
    }
}

impl From<Object> for Value {
    fn from(object: Object) -> Self {
        Value::Object(object)
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Value {
    fn from(entries: [(K, V); N]) -> Self {
        Value::object_from(entries)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

impl FromIterator<(String, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Value::Object(iter.into_iter().collect())
    }
}
