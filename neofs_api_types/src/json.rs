//! # JSON mapping
//!
//! Follows the protobuf JSON mapping, emitting unpopulated fields:
//!
//! | field                  | JSON                                  | default     |
//! |------------------------|---------------------------------------|-------------|
//! | uint32, bool           | number, boolean                       | `0`, `false`|
//! | uint64, int64, fixed64 | decimal string                        | `"0"`       |
//! | string                 | string                                | `""`        |
//! | bytes                  | standard base64 string                | `""`        |
//! | enum                   | protobuf identifier, or number if unknown | zero value's identifier |
//! | message                | object                                | `null`      |
//! | repeated               | array                                 | `[]`        |
//! | oneof                  | only the member that is set           | omitted     |
//!
//! Keys are lowerCamelCase. On input, the snake_case key is also accepted,
//! integers may be numbers or strings, enums may be identifiers or numbers,
//! and missing or `null` fields take their defaults.
//!
//! The binary encoding omits every default. The JSON encoding omits none of them.

use crate::enums::ProtoEnum;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use neofs_api_proto::{Error, Result};
use serde_json::{Map, Value};
use std::any;
use std::str::FromStr;

pub trait ToJson {
    fn to_json(&self) -> Value;

    fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

pub trait FromJson: Sized {
    fn from_json(value: &Value) -> Result<Self>;

    fn from_json_str(s: &str) -> Result<Self> {
        let value = serde_json::from_str::<Value>(s).map_err(|e| Error::json(e.to_string()))?;
        Self::from_json(&value)
    }
}

impl<T: ToJson> ToJson for Box<T> {
    fn to_json(&self) -> Value {
        (**self).to_json()
    }
}
impl<T: FromJson> FromJson for Box<T> {
    fn from_json(value: &Value) -> Result<Self> {
        T::from_json(value).map(Box::new)
    }
}

/// `container_id` -> `containerId`.
pub fn field_name(snake: &str) -> String {
    let mut out = String::with_capacity(snake.len());
    let mut upper_next = false;
    for c in snake.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// The key of a field: its proto name, and the JSON name when the schema sets one.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Key {
    proto: &'static str,
    json: Option<&'static str>,
}

impl Key {
    pub const fn new(proto: &'static str) -> Self {
        Self { proto, json: None }
    }

    pub const fn renamed(self, json: &'static str) -> Self {
        Self {
            json: Some(json),
            ..self
        }
    }

    /// The key written on output.
    pub fn json_name(&self) -> String {
        match self.json {
            Some(json) => json.to_owned(),
            None => field_name(self.proto),
        }
    }
}

impl From<&'static str> for Key {
    fn from(proto: &'static str) -> Self {
        Self::new(proto)
    }
}

/// The value under the JSON name or the proto name. `null` reads as absent.
pub fn lookup<'a>(obj: &'a Map<String, Value>, key: impl Into<Key>) -> Option<&'a Value> {
    let key = key.into();
    obj.get(&key.json_name())
        .or_else(|| obj.get(key.proto))
        .filter(|v| !v.is_null())
}

pub fn expect_object<'a>(value: &'a Value, what: &str) -> Result<&'a Map<String, Value>> {
    value
        .as_object()
        .ok_or_else(|| Error::json(format!("{what}: expected object, got {value}")))
}

pub fn expect_array<'a>(value: Option<&'a Value>) -> Result<&'a [Value]> {
    match value {
        None => Ok(&[]),
        Some(Value::Array(values)) => Ok(values),
        Some(other) => Err(Error::json(format!("expected array, got {other}"))),
    }
}

/* Scalars. */

fn integer_from<T>(value: Option<&Value>) -> Result<T>
where
    T: FromStr + TryFrom<u64> + TryFrom<i64> + Default,
{
    let invalid = |v: &Value| Error::json(format!("invalid {}: {v}", any::type_name::<T>()));
    match value {
        None => Ok(T::default()),
        Some(v @ Value::Number(n)) => {
            if let Some(u) = n.as_u64() {
                T::try_from(u).map_err(|_| invalid(v))
            } else if let Some(i) = n.as_i64() {
                T::try_from(i).map_err(|_| invalid(v))
            } else {
                Err(invalid(v))
            }
        }
        Some(v @ Value::String(s)) => s.parse::<T>().map_err(|_| invalid(v)),
        Some(v) => Err(invalid(v)),
    }
}

pub fn u32_from(value: Option<&Value>) -> Result<u32> {
    integer_from(value)
}

pub fn u64_from(value: Option<&Value>) -> Result<u64> {
    integer_from(value)
}

pub fn i64_from(value: Option<&Value>) -> Result<i64> {
    integer_from(value)
}

pub fn bool_from(value: Option<&Value>) -> Result<bool> {
    match value {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(*b),
        Some(v) => Err(Error::json(format!("invalid bool: {v}"))),
    }
}

pub fn string_from(value: Option<&Value>) -> Result<String> {
    match value {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(v) => Err(Error::json(format!("invalid string: {v}"))),
    }
}

pub fn bytes_to(v: &[u8]) -> Value {
    Value::String(STANDARD.encode(v))
}

pub fn bytes_from(value: Option<&Value>) -> Result<Vec<u8>> {
    match value {
        None => Ok(vec![]),
        Some(Value::String(s)) => STANDARD
            .decode(s)
            .map_err(|e| Error::json(format!("invalid base64 {s:?}: {e}"))),
        Some(v) => Err(Error::json(format!("invalid bytes: {v}"))),
    }
}

pub fn enum_to<E: ProtoEnum>(v: E) -> Value {
    match v.as_str_name() {
        Some(name) => Value::String(name.to_owned()),
        None => Value::from(v.value()),
    }
}

pub fn enum_from<E: ProtoEnum>(value: Option<&Value>) -> Result<E> {
    match value {
        None => Ok(E::default()),
        Some(Value::String(s)) => E::from_str_name(s)
            .ok_or_else(|| Error::json(format!("unknown {} identifier {s:?}", E::NAME))),
        Some(v @ Value::Number(_)) => {
            let int = v
                .as_i64()
                .and_then(|i| i32::try_from(i).ok())
                .ok_or_else(|| Error::json(format!("invalid {} value {v}", E::NAME)))?;
            Ok(E::from_value(int))
        }
        Some(v) => Err(Error::json(format!("invalid {}: {v}", E::NAME))),
    }
}
