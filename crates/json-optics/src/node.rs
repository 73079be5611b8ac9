//! Accessors that project a JSON value onto one structural shape.
//!
//! Every accessor here follows the same contract: a read misses when the
//! runtime tag of the value does not match the shape, and a write against a
//! mismatched value returns it unchanged. Numeric shapes additionally require
//! the number to convert to the target width without loss.

use std::sync::Arc;

use json_optics_core::{Every, Lens, Optional};
use serde_json::{Map, Number, Value};

fn as_int(value: &Value) -> Option<i32> {
    value.as_i64().and_then(|n| i32::try_from(n).ok())
}

fn as_float(value: &Value) -> Option<f32> {
    let wide = value.as_f64()?;
    let narrow = wide as f32;
    narrow.is_finite().then_some(narrow)
}

/// Focus the `bool` inside a JSON boolean.
pub fn boolean() -> Optional<Value, bool> {
    Optional::new(
        |source: &Value| source.as_bool(),
        |source, focus| match source {
            Value::Bool(_) => Value::Bool(focus),
            other => other,
        },
    )
}

/// Focus the text inside a JSON string.
pub fn string() -> Optional<Value, String> {
    Optional::new(
        |source: &Value| source.as_str().map(str::to_owned),
        |source, focus| match source {
            Value::String(_) => Value::String(focus),
            other => other,
        },
    )
}

/// Focus a JSON number representable as an `i32`.
pub fn int() -> Optional<Value, i32> {
    Optional::new(as_int, |source, focus| {
        if as_int(&source).is_some() {
            Value::from(focus)
        } else {
            source
        }
    })
}

/// Focus a JSON number representable as an `i64`.
pub fn long() -> Optional<Value, i64> {
    Optional::new(
        |source: &Value| source.as_i64(),
        |source, focus| {
            if source.as_i64().is_some() {
                Value::from(focus)
            } else {
                source
            }
        },
    )
}

/// Focus a JSON number whose `f32` view is finite.
pub fn float() -> Optional<Value, f32> {
    Optional::new(as_float, |source, focus| {
        if as_float(&source).is_some() {
            Number::from_f64(f64::from(focus))
                .map(Value::Number)
                .unwrap_or(source)
        } else {
            source
        }
    })
}

/// Focus any JSON number as an `f64`.
pub fn double() -> Optional<Value, f64> {
    Optional::new(
        |source: &Value| source.as_f64(),
        |source, focus| {
            if source.as_f64().is_some() {
                Number::from_f64(focus).map(Value::Number).unwrap_or(source)
            } else {
                source
            }
        },
    )
}

/// Focus JSON `null`.
pub fn null_value() -> Optional<Value, ()> {
    Optional::new(|source: &Value| source.as_null(), |source, _focus| source)
}

/// Focus the elements of a JSON array, as a sequence.
pub fn array() -> Optional<Value, Vec<Value>> {
    Optional::new(
        |source: &Value| source.as_array().cloned(),
        |source, focus| match source {
            Value::Array(_) => Value::Array(focus),
            other => other,
        },
    )
}

/// Focus the members of a JSON object, as an order-preserving map.
pub fn object() -> Optional<Value, Map<String, Value>> {
    Optional::new(
        |source: &Value| source.as_object().cloned(),
        |source, focus| match source {
            Value::Object(_) => Value::Object(focus),
            other => other,
        },
    )
}

/// Visit every child of a JSON value: each element of an array, each member
/// value of an object, and the value itself for a scalar.
pub fn every() -> Every<Value, Value> {
    Every::new(
        |source: &Value, f: &mut dyn FnMut(&Value)| match source {
            Value::Array(items) => {
                for item in items {
                    f(item);
                }
            }
            Value::Object(members) => {
                for member in members.values() {
                    f(member);
                }
            }
            scalar => f(scalar),
        },
        |source: Value, f: &mut dyn FnMut(Value) -> Value| match source {
            Value::Null => Value::Null,
            Value::Array(items) => Value::Array(items.into_iter().map(|item| f(item)).collect()),
            Value::Object(members) => Value::Object(
                members
                    .into_iter()
                    .map(|(key, member)| (key, f(member)))
                    .collect(),
            ),
            scalar => f(scalar),
        },
    )
}

/// Focus the element at `index`. Out-of-range reads miss; out-of-range
/// writes are no-ops (the array never grows).
pub fn array_index(index: usize) -> Optional<Vec<Value>, Value> {
    Optional::new(
        move |source: &Vec<Value>| source.get(index).cloned(),
        move |mut source, focus| {
            if let Some(slot) = source.get_mut(index) {
                *slot = focus;
            }
            source
        },
    )
}

/// Visit the elements whose index satisfies `predicate`, in array order.
pub fn array_filter(
    predicate: impl Fn(usize) -> bool + Send + Sync + 'static,
) -> Every<Vec<Value>, Value> {
    let predicate = Arc::new(predicate);
    let keep = predicate.clone();
    Every::new(
        move |source: &Vec<Value>, f: &mut dyn FnMut(&Value)| {
            for (index, item) in source.iter().enumerate() {
                if keep(index) {
                    f(item);
                }
            }
        },
        move |source: Vec<Value>, f: &mut dyn FnMut(Value) -> Value| {
            source
                .into_iter()
                .enumerate()
                .map(|(index, item)| if predicate(index) { f(item) } else { item })
                .collect()
        },
    )
}

/// Focus the value under `key`. A write replaces only that member and keeps
/// the insertion order of the rest; writing to an absent key is a no-op.
pub fn object_index(key: impl Into<String>) -> Optional<Map<String, Value>, Value> {
    let key = key.into();
    let read_key = key.clone();
    Optional::new(
        move |source: &Map<String, Value>| source.get(&read_key).cloned(),
        move |mut source, focus| {
            if let Some(slot) = source.get_mut(&key) {
                *slot = focus;
            }
            source
        },
    )
}

/// Focus the presence of `key` as a whole: the focus is `Some(value)` when
/// the member exists and `None` otherwise. Setting `Some` inserts or
/// overwrites the member; setting `None` deletes it. Unlike
/// [`object_index`], this accessor can create and erase keys.
pub fn object_at(key: impl Into<String>) -> Lens<Map<String, Value>, Option<Value>> {
    let key = key.into();
    let read_key = key.clone();
    Lens::new(
        move |source: &Map<String, Value>| source.get(&read_key).cloned(),
        move |mut source, focus| {
            match focus {
                Some(member) => {
                    source.insert(key.clone(), member);
                }
                None => {
                    source.shift_remove(&key);
                }
            }
            source
        },
    )
}

/// Visit the member values whose key satisfies `predicate`, in insertion
/// order.
pub fn object_filter(
    predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
) -> Every<Map<String, Value>, Value> {
    let predicate = Arc::new(predicate);
    let keep = predicate.clone();
    Every::new(
        move |source: &Map<String, Value>, f: &mut dyn FnMut(&Value)| {
            for (key, member) in source {
                if keep(key) {
                    f(member);
                }
            }
        },
        move |source: Map<String, Value>, f: &mut dyn FnMut(Value) -> Value| {
            source
                .into_iter()
                .map(|(key, member)| {
                    let member = if predicate(&key) { f(member) } else { member };
                    (key, member)
                })
                .collect()
        },
    )
}
