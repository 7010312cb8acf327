//! The JSON value tree.
//!
//! [`Value`] is a closed tagged union over the six JSON value kinds. Objects
//! are backed by `BTreeMap`, so iteration order is deterministic and duplicate
//! keys resolve to the last occurrence. Path lookup descends nested objects
//! only; arrays are reachable solely as terminal values.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// A parsed JSON value.
///
/// The tree is acyclic and finite; every object and array exclusively owns
/// its children.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// JSON `null`.
    #[default]
    Null,
    /// JSON `true` or `false`.
    Bool(bool),
    /// JSON number as a 64-bit float.
    Number(f64),
    /// JSON string.
    String(String),
    /// JSON array.
    Array(Vec<Value>),
    /// JSON object. Insertion order is not semantically significant.
    Object(BTreeMap<String, Value>),
}

impl Value {
    /// Returns true if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if this is a boolean value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns true if this is a number value.
    pub fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns true if this is a string value.
    pub fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns true if this is an array value.
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns true if this is an object value.
    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns the boolean value if this is a `Bool`, `None` otherwise.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number value if this is a `Number`, `None` otherwise.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns a reference to the string if this is a `String`, `None` otherwise.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns a reference to the elements if this is an `Array`, `None` otherwise.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Returns a reference to the entries if this is an `Object`, `None` otherwise.
    pub fn as_object(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    /// Get a value from an object by key. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    /// Resolve a sequence of object keys against nested objects.
    ///
    /// Each segment is resolved against the current object's keys; an absent
    /// key fails with [`Error::KeyNotFound`], and descending through a value
    /// that is not itself an object fails with [`Error::NotAnObject`]. An
    /// empty path fails with [`Error::EmptyPath`].
    ///
    /// # Examples
    ///
    /// ```
    /// use jsonpick::parse;
    ///
    /// let root = parse(r#"{"B": {"D": 2}}"#).unwrap();
    /// let d = root.get_path(&["B", "D"]).unwrap();
    /// assert_eq!(d.as_f64(), Some(2.0));
    /// ```
    pub fn get_path(&self, path: &[&str]) -> Result<&Value> {
        if path.is_empty() {
            return Err(Error::EmptyPath);
        }

        let mut current = self;
        // Name of the key `current` was resolved from, for diagnostics.
        let mut resolved: Option<&str> = None;

        for &segment in path {
            let map = match current {
                Value::Object(map) => map,
                _ => {
                    return Err(match resolved {
                        Some(key) => Error::NotAnObject(key.to_string()),
                        None => Error::RootNotObject,
                    })
                }
            };
            current = map
                .get(segment)
                .ok_or_else(|| Error::KeyNotFound(segment.to_string()))?;
            resolved = Some(segment);
        }

        Ok(current)
    }

    /// Resolve a dot-joined key path, e.g. `"a.b.c"`.
    pub fn get_dotted(&self, path: &str) -> Result<&Value> {
        if path.is_empty() {
            return Err(Error::EmptyPath);
        }
        let segments: Vec<&str> = path.split('.').collect();
        self.get_path(&segments)
    }
}
