use crate::collection::{
    HEADER_PAGINATION_LIMIT, HEADER_PAGINATION_PAGE, HEADER_PAGINATION_PAGE_COUNT,
    HEADER_PAGINATION_TOTAL_COUNT,
};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Collect the `X-Pagination-*` headers of a list response.
///
/// Returns `None` when the response carried none of them.
pub(super) fn pagination_from_headers(
    headers: &reqwest::header::HeaderMap,
) -> Option<Map<String, Value>> {
    let mut pagination = Map::new();

    for name in &[
        HEADER_PAGINATION_TOTAL_COUNT,
        HEADER_PAGINATION_PAGE_COUNT,
        HEADER_PAGINATION_LIMIT,
        HEADER_PAGINATION_PAGE,
    ] {
        if let Some(value) = headers.get(*name).and_then(|h| h.to_str().ok()) {
            pagination.insert((*name).to_owned(), Value::String(value.to_owned()));
        }
    }

    if pagination.is_empty() {
        None
    } else {
        Some(pagination)
    }
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct PaginationOptions {
    /// Items per page, at most 5000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl PaginationOptions {
    pub fn page(page: u32, limit: u32) -> Self {
        Self {
            limit: Some(limit),
            page: Some(page),
        }
    }
}

// Lokalise takes boolean switches as `0`/`1`.
pub(crate) fn serialize_flag<S>(flag: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match flag {
        Some(flag) => serializer.serialize_u8(*flag as u8),
        None => serializer.serialize_none(),
    }
}
