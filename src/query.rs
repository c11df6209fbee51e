//! Query strings and path suffixes for GET requests.
//!
//! Keys and values are interpolated into the URL as-is: nothing is percent-encoded, so a
//! value containing `&`, `=`, `#` or whitespace will corrupt the resulting URL. Callers
//! passing free-form text must encode it themselves.

use std::fmt::Display;

use serde::Serialize;
use serde_json::{Number, Value};

use crate::errors::{Error, Result};

/// A scalar query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    String(String),
    Number(Number),
    Bool(bool),
}

impl Display for QueryValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryValue::String(s) => f.write_str(s),
            QueryValue::Number(n) => write!(f, "{n}"),
            QueryValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::String(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::String(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for QueryValue {
                fn from(value: $t) -> Self {
                    QueryValue::Number(Number::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// Query parameters plus an optional literal path suffix.
///
/// Keys are unique; inserting an existing key replaces its value in place. Pairs render in
/// insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    path: Option<String>,
    params: Vec<(String, QueryValue)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing the value of an existing key.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a literal path suffix, e.g. `/SUB_123`, appended before the query string.
    pub fn path(mut self, suffix: impl Into<String>) -> Self {
        self.path = Some(suffix.into());
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.params.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn path_suffix(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn params(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_none() && self.params.is_empty()
    }

    /// Builds a query from a struct of scalar fields.
    ///
    /// Fields keep their declaration order and `null` fields are skipped. Nested objects and
    /// arrays are rejected.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let map = match serde_json::to_value(value).map_err(Error::Encode)? {
            Value::Object(map) => map,
            Value::Null => return Ok(Query::new()),
            _ => {
                return Err(Error::Encode(serde::ser::Error::custom(
                    "query parameters must serialize to a JSON object",
                )));
            }
        };

        let mut query = Query::new();
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => query.insert(key, s),
                Value::Number(n) => query.insert(key, QueryValue::Number(n)),
                Value::Bool(b) => query.insert(key, b),
                Value::Array(_) | Value::Object(_) => return Err(Error::Query { key }),
            }
        }
        Ok(query)
    }

    /// Appends the path suffix and the query string to `url`.
    pub(crate) fn append_to(&self, url: &mut String) {
        if let Some(suffix) = &self.path {
            url.push_str(suffix);
        }
        for (i, (key, value)) in self.params.iter().enumerate() {
            url.push(if i == 0 { '?' } else { '&' });
            url.push_str(key);
            url.push('=');
            url.push_str(&value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(query: &Query) -> String {
        let mut url = String::new();
        query.append_to(&mut url);
        url
    }

    #[test]
    fn test_render_in_insertion_order() {
        let query = Query::new().param("perPage", 10).param("page", 2).param("from", "2023-04-01");
        assert_eq!(render(&query), "?perPage=10&page=2&from=2023-04-01");
    }

    #[test]
    fn test_insert_replaces_existing_key() {
        let query = Query::new().param("a", 1).param("b", 2).param("a", 3);
        assert_eq!(render(&query), "?a=3&b=2");
        assert_eq!(query.get("a"), Some(&QueryValue::from(3)));
    }

    #[test]
    fn test_path_suffix_precedes_params() {
        let query = Query::new().param("status", true).path("/SUB_123");
        assert_eq!(render(&query), "/SUB_123?status=true");
        assert_eq!(query.path_suffix(), Some("/SUB_123"));
    }

    #[test]
    fn test_values_are_not_encoded() {
        let query = Query::new().param("country", "south africa");
        assert_eq!(render(&query), "?country=south africa");
    }

    #[test]
    fn test_from_serialize_skips_nulls() {
        #[derive(Serialize)]
        struct Params {
            #[serde(rename = "perPage")]
            per_page: Option<u32>,
            page: Option<u32>,
            status: Option<&'static str>,
            settled: Option<bool>,
        }

        let query = Query::from_serialize(&Params {
            per_page: Some(50),
            page: None,
            status: Some("success"),
            settled: Some(false),
        })
        .unwrap();

        assert_eq!(render(&query), "?perPage=50&status=success&settled=false");
    }

    #[test]
    fn test_from_serialize_rejects_nested_values() {
        let err = Query::from_serialize(&serde_json::json!({ "channels": ["card"] })).unwrap_err();
        assert!(matches!(err, Error::Query { ref key } if key == "channels"));
    }

    #[test]
    fn test_from_serialize_rejects_non_objects() {
        let err = Query::from_serialize(&42).unwrap_err();
        assert!(matches!(err, Error::Encode(_)));
        assert!(Query::from_serialize(&Option::<u8>::None).unwrap().is_empty());
    }
}
