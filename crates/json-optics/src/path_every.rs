//! Multi-result path DSL over bulk accessors.
//!
//! Mirrors the single-result DSL in [`crate::path`] at the Many kind: every
//! operation here keeps zero-or-more semantics, so a selector that misses
//! simply contributes no foci.

use json_optics_core::Every;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::extract::decoded;
use crate::node;
use crate::path::{indexed, keyed, FIELD_DELIMITER, INDEX_DELIMITER};
use crate::selector::{split_path, Selector};

/// Navigation and projection methods for multi-result accessors into a JSON
/// value.
pub trait JsonEveryExt {
    /// Focus the `bool` inside each focused JSON boolean.
    fn boolean(&self) -> Every<Value, bool>;
    /// Focus the text inside each focused JSON string.
    fn string(&self) -> Every<Value, String>;
    /// Focus each focused JSON number representable as an `i32`.
    fn int(&self) -> Every<Value, i32>;
    /// Focus each focused JSON number representable as an `i64`.
    fn long(&self) -> Every<Value, i64>;
    /// Focus each focused JSON number whose `f32` view is finite.
    fn float(&self) -> Every<Value, f32>;
    /// Focus each focused JSON number as an `f64`.
    fn double(&self) -> Every<Value, f64>;
    /// Focus each focused JSON `null`.
    fn null_value(&self) -> Every<Value, ()>;
    /// Focus the elements of each focused JSON array.
    fn array(&self) -> Every<Value, Vec<Value>>;
    /// Focus the members of each focused JSON object.
    fn object(&self) -> Every<Value, serde_json::Map<String, Value>>;

    /// Select every child of each focused value.
    fn every(&self) -> Every<Value, Value>;

    /// Select the value at `selector` under each focus; see
    /// [`crate::JsonPathExt::select`] for the supported syntax.
    fn select(&self, selector: &str) -> Every<Value, Value>;

    /// Select the values at `selector` under each focus; see
    /// [`crate::JsonPathExt::select_multiple`] for the supported syntax.
    fn select_every(&self, selector: &str) -> Every<Value, Value>;

    /// Select a path with dot or bracket notation under each focus.
    fn path(&self, path: &str) -> Every<Value, Value>;

    /// [`path`] with custom delimiters.
    ///
    /// [`path`]: JsonEveryExt::path
    fn path_with(&self, path: &str, field_delim: &str, index_delim: &str) -> Every<Value, Value>;

    /// Select a multi-result path under each focus.
    fn path_every(&self, path: &str) -> Every<Value, Value>;

    /// [`path_every`] with custom delimiters.
    ///
    /// [`path_every`]: JsonEveryExt::path_every
    fn path_every_with(
        &self,
        path: &str,
        field_delim: &str,
        index_delim: &str,
    ) -> Every<Value, Value>;

    /// Select the property `name` of each focused object as a presence,
    /// erasable by setting `None`.
    fn at(&self, name: &str) -> Every<Value, Option<Value>>;

    /// Select the property `name` out of each focused JSON object.
    fn at_key(&self, name: &str) -> Every<Value, Value>;

    /// Select the element at `index` out of each focused JSON array.
    fn at_index(&self, index: usize) -> Every<Value, Value>;

    /// Select the object members whose key satisfies `predicate`.
    fn filter_keys(
        &self,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Every<Value, Value>;

    /// Select the array elements whose index satisfies `predicate`.
    fn filter_index(
        &self,
        predicate: impl Fn(usize) -> bool + Send + Sync + 'static,
    ) -> Every<Value, Value>;

    /// Focus a value of type `A` through its serde codec under each focus.
    fn extract<A>(&self) -> Every<Value, A>
    where
        A: Serialize + DeserializeOwned + 'static;
}

impl JsonEveryExt for Every<Value, Value> {
    fn boolean(&self) -> Every<Value, bool> {
        self.compose_optional(&node::boolean())
    }

    fn string(&self) -> Every<Value, String> {
        self.compose_optional(&node::string())
    }

    fn int(&self) -> Every<Value, i32> {
        self.compose_optional(&node::int())
    }

    fn long(&self) -> Every<Value, i64> {
        self.compose_optional(&node::long())
    }

    fn float(&self) -> Every<Value, f32> {
        self.compose_optional(&node::float())
    }

    fn double(&self) -> Every<Value, f64> {
        self.compose_optional(&node::double())
    }

    fn null_value(&self) -> Every<Value, ()> {
        self.compose_optional(&node::null_value())
    }

    fn array(&self) -> Every<Value, Vec<Value>> {
        self.compose_optional(&node::array())
    }

    fn object(&self) -> Every<Value, serde_json::Map<String, Value>> {
        self.compose_optional(&node::object())
    }

    fn every(&self) -> Every<Value, Value> {
        self.compose(&node::every())
    }

    fn select(&self, selector: &str) -> Every<Value, Value> {
        match Selector::parse(selector) {
            Selector::BracketField(name) | Selector::Field(name) => {
                self.compose_optional(&keyed(name))
            }
            Selector::Index(index) => self.compose_optional(&indexed(index)),
            _ => self.compose_optional(&keyed(selector)),
        }
    }

    fn select_every(&self, selector: &str) -> Every<Value, Value> {
        match Selector::parse(selector) {
            Selector::BracketField(name) | Selector::Field(name) => {
                self.compose_optional(&keyed(name))
            }
            Selector::Wildcard => self.every(),
            Selector::Index(index) => self.filter_index(move |i| i == index),
            Selector::IndexSet(indices) => self.filter_index(move |i| indices.contains(&i)),
            Selector::RangeFrom(start) => self.filter_index(move |i| i >= start),
            Selector::RangeBetween(start, end) => {
                self.filter_index(move |i| i >= start && i < end)
            }
        }
    }

    fn path(&self, path: &str) -> Every<Value, Value> {
        self.path_with(path, FIELD_DELIMITER, INDEX_DELIMITER)
    }

    fn path_with(&self, path: &str, field_delim: &str, index_delim: &str) -> Every<Value, Value> {
        split_path(path, field_delim, index_delim)
            .into_iter()
            .fold(self.clone(), |acc, segment| acc.select(&segment))
    }

    fn path_every(&self, path: &str) -> Every<Value, Value> {
        self.path_every_with(path, FIELD_DELIMITER, INDEX_DELIMITER)
    }

    fn path_every_with(
        &self,
        path: &str,
        field_delim: &str,
        index_delim: &str,
    ) -> Every<Value, Value> {
        split_path(path, field_delim, index_delim)
            .into_iter()
            .fold(self.clone(), |acc, segment| acc.select_every(&segment))
    }

    fn at(&self, name: &str) -> Every<Value, Option<Value>> {
        self.object().compose_lens(&node::object_at(name))
    }

    fn at_key(&self, name: &str) -> Every<Value, Value> {
        self.compose_optional(&keyed(name))
    }

    fn at_index(&self, index: usize) -> Every<Value, Value> {
        self.compose_optional(&indexed(index))
    }

    fn filter_keys(
        &self,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Every<Value, Value> {
        self.object().compose(&node::object_filter(predicate))
    }

    fn filter_index(
        &self,
        predicate: impl Fn(usize) -> bool + Send + Sync + 'static,
    ) -> Every<Value, Value> {
        self.array().compose(&node::array_filter(predicate))
    }

    fn extract<A>(&self) -> Every<Value, A>
    where
        A: Serialize + DeserializeOwned + 'static,
    {
        self.compose_optional(&decoded())
    }
}
