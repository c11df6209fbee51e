//! Response envelopes shared by every endpoint.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    errors::{Error, Result},
    types::AnyJson,
};

/// Decodes a successful response body into `T`.
///
/// Every response passes through here; the shape is trusted, not validated.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(Error::Decode)
}

/// Decodes a field that holds either an id or the expanded object.
///
/// Returns `None` for ids and nulls, and `Some(Err(Error::Decode))` for an object that does not
/// match `T`.
pub fn expand<T: DeserializeOwned>(value: Option<&AnyJson>) -> Option<Result<T>> {
    value
        .filter(|v| v.is_object())
        .map(|v| T::deserialize(v).map_err(Error::Decode))
}

/// Envelope for endpoints that return no data, e.g. deletes and toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub status: bool,
    pub message: String,
}

/// Envelope for single-resource endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseData<T> {
    pub status: bool,
    pub message: String,
    pub data: T,
}

/// Pagination block of list endpoints.
///
/// Offset-paginated lists fill `total`, `skipped`, `page` and `page_count`; cursor-paginated
/// lists fill `next` and `previous`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: Option<u64>,
    pub skipped: Option<u64>,
    pub per_page: Option<AnyJson>,
    pub page: Option<u64>,
    pub page_count: Option<u64>,
    pub next: Option<AnyJson>,
    pub previous: Option<AnyJson>,
}

/// Envelope for list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub status: bool,
    pub message: String,
    pub data: Vec<T>,
    pub meta: Option<PageMeta>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_paginated() {
        let body = br#"{
            "status": true,
            "message": "Plans retrieved",
            "data": [{ "id": 1 }, { "id": 2 }],
            "meta": { "total": 2, "skipped": 0, "perPage": 50, "page": 1, "pageCount": 1 }
        }"#;

        let page: Paginated<AnyJson> = decode(body).unwrap();
        assert!(page.status);
        assert_eq!(page.data.len(), 2);
        let meta = page.meta.unwrap();
        assert_eq!(meta.total, Some(2));
        assert_eq!(meta.page_count, Some(1));
        assert_eq!(meta.next, None);
    }

    #[test]
    fn test_decode_cursor_meta() {
        let body = br#"{
            "status": true,
            "message": "Banks retrieved",
            "data": [],
            "meta": { "next": "YmFuazoxNjAz", "previous": null, "perPage": 5 }
        }"#;

        let page: Paginated<AnyJson> = decode(body).unwrap();
        let meta = page.meta.unwrap();
        assert_eq!(meta.next, Some(AnyJson::from("YmFuazoxNjAz")));
        assert_eq!(meta.previous, None);
    }

    #[test]
    fn test_decode_rejects_invalid_json() {
        let err = decode::<StatusMessage>(b"<html>Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_expand() {
        let id = AnyJson::from(1173);
        assert!(expand::<StatusMessage>(Some(&id)).is_none());
        assert!(expand::<StatusMessage>(None).is_none());

        let object = serde_json::json!({ "status": true, "message": "ok" });
        assert!(expand::<StatusMessage>(Some(&object)).unwrap().unwrap().status);

        let mismatched = serde_json::json!({ "status": "yes" });
        assert!(matches!(
            expand::<StatusMessage>(Some(&mismatched)),
            Some(Err(Error::Decode(_)))
        ));
    }
}
