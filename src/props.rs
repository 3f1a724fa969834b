//! Lazy, navigable views over decoded JSON responses.
//!
//! Every endpoint call returns a [`Document`] owning the decoded
//! [`serde_json::Value`]; [`Document::props`] borrows a [`Props`] view into it.
//! Views are created on access, never eagerly, and never copy the underlying
//! document: an object child becomes a [`PropObject`], an array child a
//! [`PropArray`], and scalar leaves pass through as raw values.
//!
//! # Example
//!
//! ```
//! use nhl_stats_client::props::Document;
//!
//! # fn example() -> nhl_stats_client::Result<()> {
//! let doc = Document::new(serde_json::json!({
//!     "teams": [{"id": 1, "name": "New Jersey Devils"}]
//! }));
//!
//! let teams = doc.props().field("teams")?;
//! for team in teams.as_array().into_iter().flatten() {
//!     let name = team.field("name")?;
//!     assert_eq!(name.as_str(), Some("New Jersey Devils"));
//! }
//! # Ok(())
//! # }
//! ```

use std::slice;

use serde_json::{Map, Value};

use crate::Result;
use crate::error::Error;

/// Wraps a JSON node into the matching view.
///
/// This is the only wrapping path in the crate; field access, indexing,
/// iteration, and defaulting access all go through it, so every route to a
/// nested node yields the same kind of view. Wrapping the raw node of an
/// existing view produces an equal view.
#[must_use]
pub fn wrap(value: &Value) -> Props<'_> {
    match value {
        Value::Object(map) => Props::Object(PropObject { raw: value, map }),
        Value::Array(items) => Props::Array(PropArray { raw: value, items }),
        other => Props::Scalar(other),
    }
}

/// Owns one decoded JSON response.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    #[must_use]
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Borrows the navigable view of the root node.
    #[must_use]
    pub fn props(&self) -> Props<'_> {
        wrap(&self.root)
    }

    #[must_use]
    pub fn root(&self) -> &Value {
        &self.root
    }

    #[must_use]
    pub fn into_inner(self) -> Value {
        self.root
    }

    /// Serializes the raw document as compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.root)?)
    }

    /// Serializes the raw document as indented JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Document::new(root)
    }
}

/// A wrapped JSON node: an object view, an array view, or a raw scalar leaf.
///
/// The typed [`PropObject`] and [`PropArray`] views rule out calling
/// object-only operations on arrays (and vice versa) at compile time; the
/// [`field`](Props::field) and [`index`](Props::index) forwarders here are the
/// dynamic alternative for chained navigation and fail with
/// [`UnsupportedOperation`](crate::error::UnsupportedOperation) on the wrong
/// node kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Props<'doc> {
    Object(PropObject<'doc>),
    Array(PropArray<'doc>),
    Scalar(&'doc Value),
}

impl<'doc> Props<'doc> {
    /// The underlying document node.
    #[must_use]
    pub fn raw(self) -> &'doc Value {
        match self {
            Props::Object(object) => object.raw,
            Props::Array(array) => array.raw,
            Props::Scalar(value) => value,
        }
    }

    fn node_kind(self) -> &'static str {
        match self {
            Props::Object(_) => "object",
            Props::Array(_) => "array",
            Props::Scalar(_) => "scalar",
        }
    }

    /// Looks up `key`, failing on non-objects and missing keys.
    pub fn field(self, key: &str) -> Result<Props<'doc>> {
        match self {
            Props::Object(object) => object.field(key),
            other => Err(Error::unsupported_operation("field access", other.node_kind())),
        }
    }

    /// Looks up `index`, failing on non-arrays and out-of-range indices.
    pub fn index(self, index: usize) -> Result<Props<'doc>> {
        match self {
            Props::Array(array) => array.index(index),
            other => Err(Error::unsupported_operation("index access", other.node_kind())),
        }
    }

    #[must_use]
    pub fn as_object(self) -> Option<PropObject<'doc>> {
        match self {
            Props::Object(object) => Some(object),
            Props::Array(_) | Props::Scalar(_) => None,
        }
    }

    #[must_use]
    pub fn as_array(self) -> Option<PropArray<'doc>> {
        match self {
            Props::Array(array) => Some(array),
            Props::Object(_) | Props::Scalar(_) => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> Option<&'doc str> {
        self.raw().as_str()
    }

    #[must_use]
    pub fn as_i64(self) -> Option<i64> {
        self.raw().as_i64()
    }

    #[must_use]
    pub fn as_f64(self) -> Option<f64> {
        self.raw().as_f64()
    }

    #[must_use]
    pub fn as_bool(self) -> Option<bool> {
        self.raw().as_bool()
    }

    #[must_use]
    pub fn is_null(self) -> bool {
        self.raw().is_null()
    }

    /// Serializes the raw node as compact JSON.
    pub fn to_json(self) -> Result<String> {
        Ok(serde_json::to_string(self.raw())?)
    }

    /// Serializes the raw node as indented JSON.
    pub fn to_json_pretty(self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.raw())?)
    }
}

/// View over a JSON object. Children are wrapped on access via [`wrap`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropObject<'doc> {
    raw: &'doc Value,
    map: &'doc Map<String, Value>,
}

impl<'doc> PropObject<'doc> {
    /// Looks up `key`, failing with
    /// [`KeyNotFound`](crate::error::KeyNotFound) when absent.
    pub fn field(self, key: &str) -> Result<Props<'doc>> {
        self.map
            .get(key)
            .map(wrap)
            .ok_or_else(|| Error::key_not_found(key))
    }

    /// The defaulting form of [`field`](Self::field): `None` when absent.
    #[must_use]
    pub fn get(self, key: &str) -> Option<Props<'doc>> {
        self.map.get(key).map(wrap)
    }

    #[must_use]
    pub fn contains_key(self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.map.len()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over raw keys.
    pub fn keys(self) -> impl Iterator<Item = &'doc str> {
        self.map.keys().map(String::as_str)
    }

    /// Iterates over wrapped values.
    pub fn values(self) -> impl Iterator<Item = Props<'doc>> {
        self.map.values().map(wrap)
    }

    /// Iterates over `(key, wrapped value)` pairs.
    pub fn items(self) -> impl Iterator<Item = (&'doc str, Props<'doc>)> {
        self.map.iter().map(|(key, value)| (key.as_str(), wrap(value)))
    }

    /// The underlying document node.
    #[must_use]
    pub fn raw(self) -> &'doc Value {
        self.raw
    }
}

/// View over a JSON array. Elements are wrapped on access via [`wrap`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PropArray<'doc> {
    raw: &'doc Value,
    items: &'doc Vec<Value>,
}

impl<'doc> PropArray<'doc> {
    /// Looks up `index`, failing with
    /// [`IndexOutOfRange`](crate::error::IndexOutOfRange) past the end.
    pub fn index(self, index: usize) -> Result<Props<'doc>> {
        self.items
            .get(index)
            .map(wrap)
            .ok_or_else(|| Error::index_out_of_range(index, self.items.len()))
    }

    /// The defaulting form of [`index`](Self::index): `None` past the end.
    #[must_use]
    pub fn get(self, index: usize) -> Option<Props<'doc>> {
        self.items.get(index).map(wrap)
    }

    /// Reports whether the raw value appears in the array, without wrapping.
    #[must_use]
    pub fn contains(self, value: &Value) -> bool {
        self.items.contains(value)
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over wrapped elements. The iterator is double-ended, so
    /// `.rev()` walks the array backwards; each call starts a fresh pass.
    #[must_use]
    pub fn iter(self) -> Iter<'doc> {
        Iter {
            inner: self.items.iter(),
        }
    }

    /// The underlying document node.
    #[must_use]
    pub fn raw(self) -> &'doc Value {
        self.raw
    }
}

impl<'doc> IntoIterator for PropArray<'doc> {
    type Item = Props<'doc>;
    type IntoIter = Iter<'doc>;

    fn into_iter(self) -> Iter<'doc> {
        self.iter()
    }
}

/// Iterator over the wrapped elements of a [`PropArray`].
#[derive(Debug, Clone)]
pub struct Iter<'doc> {
    inner: slice::Iter<'doc, Value>,
}

impl<'doc> Iterator for Iter<'doc> {
    type Item = Props<'doc>;

    fn next(&mut self) -> Option<Props<'doc>> {
        self.inner.next().map(wrap)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'doc> DoubleEndedIterator for Iter<'doc> {
    fn next_back(&mut self) -> Option<Props<'doc>> {
        self.inner.next_back().map(wrap)
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl std::iter::FusedIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::{IndexOutOfRange, Kind, KeyNotFound, UnsupportedOperation};

    fn sample() -> Document {
        Document::new(json!({
            "name": "abcdef",
            "info": {"age": 28, "height": 180},
            "qualities": ["nice", "funny"]
        }))
    }

    #[test]
    fn field_access_returns_scalars_unwrapped() {
        let doc = sample();
        let name = doc.props().field("name").expect("present");
        assert_eq!(name.as_str(), Some("abcdef"));
    }

    #[test]
    fn nested_objects_and_arrays_are_wrapped() {
        let doc = sample();
        let root = doc.props().as_object().expect("object root");

        let info = root.field("info").expect("present");
        assert!(info.as_object().is_some());
        assert_eq!(info.field("age").expect("present").as_i64(), Some(28));

        let qualities = root.field("qualities").expect("present");
        let qualities = qualities.as_array().expect("array");
        assert_eq!(qualities.len(), 2);
        assert_eq!(
            qualities.index(0).expect("in range").as_str(),
            Some("nice")
        );
    }

    #[test]
    fn missing_key_fails_and_get_defaults() {
        let doc = sample();
        let root = doc.props().as_object().expect("object root");

        let error = root.field("missing").unwrap_err();
        assert_eq!(error.kind(), Kind::Navigation);
        assert_eq!(
            error.downcast_ref::<KeyNotFound>().expect("source").key,
            "missing"
        );

        assert!(root.get("missing").is_none());
        assert!(root.get("name").is_some());
    }

    #[test]
    fn out_of_range_index_fails_and_get_defaults() {
        let doc = sample();
        let qualities = doc
            .props()
            .field("qualities")
            .expect("present")
            .as_array()
            .expect("array");

        let error = qualities.index(2).unwrap_err();
        let source = error.downcast_ref::<IndexOutOfRange>().expect("source");
        assert_eq!(source.index, 2);
        assert_eq!(source.len, 2);

        assert!(qualities.get(2).is_none());
        assert!(qualities.get(1).is_some());
    }

    #[test]
    fn containment_checks() {
        let doc = sample();
        let root = doc.props().as_object().expect("object root");
        assert!(root.contains_key("info"));
        assert!(!root.contains_key("venue"));

        let qualities = root.field("qualities").expect("present").as_array().expect("array");
        assert!(qualities.contains(&json!("nice")));
        assert!(!qualities.contains(&json!("grumpy")));
    }

    #[test]
    fn iteration_wraps_and_restarts() {
        let doc = sample();
        let qualities = doc
            .props()
            .field("qualities")
            .expect("present")
            .as_array()
            .expect("array");

        let forward: Vec<_> = qualities.iter().map(|p| p.as_str()).collect();
        assert_eq!(forward, [Some("nice"), Some("funny")]);

        // A fresh call yields a new, independent pass.
        let again: Vec<_> = qualities.iter().map(|p| p.as_str()).collect();
        assert_eq!(again, forward);

        let reversed: Vec<_> = qualities.iter().rev().map(|p| p.as_str()).collect();
        assert_eq!(reversed, [Some("funny"), Some("nice")]);
    }

    #[test]
    fn iteration_wraps_nested_containers() {
        let doc = Document::new(json!([1, {}, []]));
        let array = doc.props().as_array().expect("array root");

        let items: Vec<_> = array.iter().collect();
        assert_eq!(items[0].as_i64(), Some(1));
        assert!(items[1].as_object().is_some());
        assert!(items[2].as_array().is_some());
    }

    #[test]
    fn object_keys_values_items() {
        let doc = sample();
        let root = doc.props().as_object().expect("object root");

        let mut keys: Vec<_> = root.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["info", "name", "qualities"]);

        assert!(root.values().any(|v| v.as_object().is_some()));
        assert!(root.values().any(|v| v.as_array().is_some()));

        let (key, value) = root
            .items()
            .find(|(key, _)| *key == "name")
            .expect("present");
        assert_eq!(key, "name");
        assert_eq!(value.as_str(), Some("abcdef"));
    }

    #[test]
    fn wrong_node_kind_is_unsupported() {
        let doc = sample();

        let error = doc.props().index(0).unwrap_err();
        assert_eq!(error.kind(), Kind::Navigation);
        let source = error.downcast_ref::<UnsupportedOperation>().expect("source");
        assert_eq!(source.actual, "object");

        let qualities = doc.props().field("qualities").expect("present");
        qualities.field("name").unwrap_err();

        let scalar = doc.props().field("name").expect("present");
        scalar.field("anything").unwrap_err();
    }

    #[test]
    fn wrapping_is_idempotent() {
        let doc = sample();
        let info = doc.props().field("info").expect("present");
        assert_eq!(wrap(info.raw()), info);
        assert_eq!(wrap(doc.props().raw()), doc.props());
    }

    #[test]
    fn serialization_uses_raw_document() {
        let doc = Document::new(json!({"a": [1, 2]}));
        assert_eq!(doc.to_json().expect("serializable"), r#"{"a":[1,2]}"#);
        assert!(doc.to_json_pretty().expect("serializable").contains('\n'));

        let inner = doc.props().field("a").expect("present");
        assert_eq!(inner.to_json().expect("serializable"), "[1,2]");
    }
}
