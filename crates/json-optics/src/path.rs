//! Single-result path DSL over partial accessors.

use json_optics_core::{Every, Optional};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::extract::decoded;
use crate::node;
use crate::path_every::JsonEveryExt;
use crate::selector::{split_path, Selector, SelectorError};

/// Default delimiter between field segments in a path string.
pub const FIELD_DELIMITER: &str = ".";
/// Default delimiter opening a bracket group in a path string.
pub const INDEX_DELIMITER: &str = "[";

/// The starting point of a path: the identity accessor over a JSON value.
pub fn root() -> Optional<Value, Value> {
    Optional::id()
}

pub(crate) fn keyed(name: impl Into<String>) -> Optional<Value, Value> {
    node::object().compose(&node::object_index(name))
}

pub(crate) fn indexed(index: usize) -> Optional<Value, Value> {
    node::array().compose(&node::array_index(index))
}

/// Navigation and projection methods for single-result accessors into a
/// JSON value.
pub trait JsonPathExt {
    /// Focus the `bool` inside a JSON boolean.
    fn boolean(&self) -> Optional<Value, bool>;
    /// Focus the text inside a JSON string.
    fn string(&self) -> Optional<Value, String>;
    /// Focus a JSON number representable as an `i32`.
    fn int(&self) -> Optional<Value, i32>;
    /// Focus a JSON number representable as an `i64`.
    fn long(&self) -> Optional<Value, i64>;
    /// Focus a JSON number whose `f32` view is finite.
    fn float(&self) -> Optional<Value, f32>;
    /// Focus any JSON number as an `f64`.
    fn double(&self) -> Optional<Value, f64>;
    /// Focus JSON `null`.
    fn null_value(&self) -> Optional<Value, ()>;
    /// Focus the elements of a JSON array.
    fn array(&self) -> Optional<Value, Vec<Value>>;
    /// Focus the members of a JSON object.
    fn object(&self) -> Optional<Value, serde_json::Map<String, Value>>;

    /// Select every child of the focused value.
    fn every(&self) -> Every<Value, Value>;

    /// Select the value at `selector`. Supported syntax:
    /// - a bare name selects that property,
    /// - `['name']` selects that property,
    /// - `[i]` selects index `i` in an array.
    ///
    /// Anything else is looked up as a literal property name.
    fn select(&self, selector: &str) -> Optional<Value, Value>;

    /// Select the values at `selector`. In addition to the [`select`]
    /// syntax this accepts `*` (every child), `[i,j,...]` (an index set),
    /// `[start:]` and `[start:end]` (index ranges, end exclusive).
    ///
    /// [`select`]: JsonPathExt::select
    fn select_multiple(&self, selector: &str) -> Every<Value, Value>;

    /// Select a path with dot or bracket notation, e.g.
    /// `addresses[0].street.name`.
    fn path(&self, path: &str) -> Optional<Value, Value>;

    /// [`path`] with custom delimiters.
    ///
    /// [`path`]: JsonPathExt::path
    fn path_with(&self, path: &str, field_delim: &str, index_delim: &str)
        -> Optional<Value, Value>;

    /// Select a multi-result path, e.g. `addresses.*.street.name`.
    fn path_multiple(&self, path: &str) -> Every<Value, Value>;

    /// [`path_multiple`] with custom delimiters.
    ///
    /// [`path_multiple`]: JsonPathExt::path_multiple
    fn path_multiple_with(
        &self,
        path: &str,
        field_delim: &str,
        index_delim: &str,
    ) -> Every<Value, Value>;

    /// Strict [`path`]: malformed bracket groups and multi-result selectors
    /// are reported instead of degrading to literal field lookups.
    ///
    /// [`path`]: JsonPathExt::path
    fn try_path(&self, path: &str) -> Result<Optional<Value, Value>, SelectorError>;

    /// Strict [`path_multiple`]: malformed bracket groups are reported
    /// instead of degrading to literal field lookups.
    ///
    /// [`path_multiple`]: JsonPathExt::path_multiple
    fn try_path_multiple(&self, path: &str) -> Result<Every<Value, Value>, SelectorError>;

    /// Select the property `name` as a presence: the focus is `Some` when
    /// the property exists, `None` otherwise. Setting `None` erases the
    /// property; setting `Some` inserts or overwrites it.
    fn at(&self, name: &str) -> Optional<Value, Option<Value>>;

    /// Select the property `name` out of a JSON object.
    fn at_key(&self, name: &str) -> Optional<Value, Value>;

    /// Select the element at `index` out of a JSON array.
    fn at_index(&self, index: usize) -> Optional<Value, Value>;

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

    /// Focus a value of type `A` through its serde codec. Values that fail
    /// to decode are absent; writing re-encodes the focus.
    fn extract<A>(&self) -> Optional<Value, A>
    where
        A: Serialize + DeserializeOwned + 'static;
}

impl JsonPathExt for Optional<Value, Value> {
    fn boolean(&self) -> Optional<Value, bool> {
        self.compose(&node::boolean())
    }

    fn string(&self) -> Optional<Value, String> {
        self.compose(&node::string())
    }

    fn int(&self) -> Optional<Value, i32> {
        self.compose(&node::int())
    }

    fn long(&self) -> Optional<Value, i64> {
        self.compose(&node::long())
    }

    fn float(&self) -> Optional<Value, f32> {
        self.compose(&node::float())
    }

    fn double(&self) -> Optional<Value, f64> {
        self.compose(&node::double())
    }

    fn null_value(&self) -> Optional<Value, ()> {
        self.compose(&node::null_value())
    }

    fn array(&self) -> Optional<Value, Vec<Value>> {
        self.compose(&node::array())
    }

    fn object(&self) -> Optional<Value, serde_json::Map<String, Value>> {
        self.compose(&node::object())
    }

    fn every(&self) -> Every<Value, Value> {
        self.compose_every(&node::every())
    }

    fn select(&self, selector: &str) -> Optional<Value, Value> {
        match Selector::parse(selector) {
            Selector::BracketField(name) | Selector::Field(name) => self.compose(&keyed(name)),
            Selector::Index(index) => self.compose(&indexed(index)),
            // Multi-result selectors are not valid here; fall back to a
            // literal property lookup like any other unrecognized segment.
            _ => self.compose(&keyed(selector)),
        }
    }

    fn select_multiple(&self, selector: &str) -> Every<Value, Value> {
        match Selector::parse(selector) {
            Selector::BracketField(name) | Selector::Field(name) => {
                self.compose_every(&keyed(name).to_every())
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

    fn path(&self, path: &str) -> Optional<Value, Value> {
        self.path_with(path, FIELD_DELIMITER, INDEX_DELIMITER)
    }

    fn path_with(
        &self,
        path: &str,
        field_delim: &str,
        index_delim: &str,
    ) -> Optional<Value, Value> {
        split_path(path, field_delim, index_delim)
            .into_iter()
            .fold(self.clone(), |acc, segment| acc.select(&segment))
    }

    fn path_multiple(&self, path: &str) -> Every<Value, Value> {
        self.path_multiple_with(path, FIELD_DELIMITER, INDEX_DELIMITER)
    }

    fn path_multiple_with(
        &self,
        path: &str,
        field_delim: &str,
        index_delim: &str,
    ) -> Every<Value, Value> {
        split_path(path, field_delim, index_delim)
            .into_iter()
            .fold(self.to_every(), |acc, segment| acc.select_every(&segment))
    }

    fn try_path(&self, path: &str) -> Result<Optional<Value, Value>, SelectorError> {
        let mut acc = self.clone();
        for segment in split_path(path, FIELD_DELIMITER, INDEX_DELIMITER) {
            acc = match Selector::parse_strict(&segment)? {
                Selector::BracketField(name) | Selector::Field(name) => acc.compose(&keyed(name)),
                Selector::Index(index) => acc.compose(&indexed(index)),
                _ => return Err(SelectorError::NotSingular(segment)),
            };
        }
        Ok(acc)
    }

    fn try_path_multiple(&self, path: &str) -> Result<Every<Value, Value>, SelectorError> {
        let mut acc = self.to_every();
        for segment in split_path(path, FIELD_DELIMITER, INDEX_DELIMITER) {
            Selector::parse_strict(&segment)?;
            acc = acc.select_every(&segment);
        }
        Ok(acc)
    }

    fn at(&self, name: &str) -> Optional<Value, Option<Value>> {
        self.object().compose_lens(&node::object_at(name))
    }

    fn at_key(&self, name: &str) -> Optional<Value, Value> {
        self.compose(&keyed(name))
    }

    fn at_index(&self, index: usize) -> Optional<Value, Value> {
        self.compose(&indexed(index))
    }

    fn filter_keys(
        &self,
        predicate: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Every<Value, Value> {
        self.object().compose_every(&node::object_filter(predicate))
    }

    fn filter_index(
        &self,
        predicate: impl Fn(usize) -> bool + Send + Sync + 'static,
    ) -> Every<Value, Value> {
        self.array().compose_every(&node::array_filter(predicate))
    }

    fn extract<A>(&self) -> Optional<Value, A>
    where
        A: Serialize + DeserializeOwned + 'static,
    {
        self.compose(&decoded())
    }
}
