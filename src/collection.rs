//! Paginated collections of models.

use crate::{
    client::{Error, Result},
    common::{decode, inherit_project_id, into_object, json_type, Model, RawObject},
};
use serde_json::Value;
use std::{ops::Index, slice, vec};

/// Key under which the transport stores the pagination headers of a response.
pub const PAGINATION_KEY: &str = "_pagination";

pub const HEADER_PAGINATION_TOTAL_COUNT: &str = "x-pagination-total-count";
pub const HEADER_PAGINATION_PAGE_COUNT: &str = "x-pagination-page-count";
pub const HEADER_PAGINATION_LIMIT: &str = "x-pagination-limit";
pub const HEADER_PAGINATION_PAGE: &str = "x-pagination-page";

/// One page of a list response.
///
/// The pagination counters are all zero when the response carried no
/// pagination data, in which case the page reports itself as both the first
/// and the last one.
#[derive(Clone, Debug)]
pub struct Collection<M> {
    pub items: Vec<M>,
    pub total_count: i64,
    pub page_count: i64,
    pub limit: i64,
    pub current_page: i64,
}

impl<M: Model> Collection<M> {
    pub fn from_raw(raw: Value) -> Result<Self> {
        let mut page = into_object(raw, M::COLLECTION_KEY)?;

        let raw_items = match page.remove(M::COLLECTION_KEY) {
            Some(Value::Array(items)) => items,
            Some(other) => {
                return Err(Error::malformed(format!(
                    "`{}` should be an array, found {}",
                    M::COLLECTION_KEY,
                    json_type(&other)
                )))
            }
            None => {
                return Err(Error::malformed(format!(
                    "response is missing `{}`",
                    M::COLLECTION_KEY
                )))
            }
        };

        let items = raw_items
            .into_iter()
            .map(|item| {
                let mut object = into_object(item, M::DATA_KEY)?;
                inherit_project_id(&page, &mut object);
                decode(object, M::DATA_KEY)
            })
            .collect::<Result<Vec<M>>>()?;

        let mut collection = Self {
            items,
            total_count: 0,
            page_count: 0,
            limit: 0,
            current_page: 0,
        };

        match page.get(PAGINATION_KEY) {
            Some(Value::Object(pagination)) if !pagination.is_empty() => {
                collection.total_count = pagination_field(pagination, HEADER_PAGINATION_TOTAL_COUNT)?;
                collection.page_count = pagination_field(pagination, HEADER_PAGINATION_PAGE_COUNT)?;
                collection.limit = pagination_field(pagination, HEADER_PAGINATION_LIMIT)?;
                collection.current_page = pagination_field(pagination, HEADER_PAGINATION_PAGE)?;
            }
            Some(Value::Object(_)) | Some(Value::Null) | None => {}
            Some(other) => {
                return Err(Error::malformed(format!(
                    "`{}` should be an object, found {}",
                    PAGINATION_KEY,
                    json_type(other)
                )))
            }
        }

        Ok(collection)
    }
}

impl<M> Collection<M> {
    pub fn has_next_page(&self) -> bool {
        self.current_page > 0 && self.current_page < self.page_count
    }

    pub fn has_prev_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn is_last_page(&self) -> bool {
        !self.has_next_page()
    }

    pub fn is_first_page(&self) -> bool {
        !self.has_prev_page()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, M> {
        self.items.iter()
    }
}

// Header values arrive as strings; numbers are accepted as well.
fn pagination_field(pagination: &RawObject, key: &str) -> Result<i64> {
    match pagination.get(key) {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| Error::malformed(format!("`{}` is not an integer: {}", key, n))),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|_| Error::malformed(format!("`{}` is not an integer: {:?}", key, s))),
        Some(other) => Err(Error::malformed(format!(
            "`{}` should be an integer, found {}",
            key,
            json_type(other)
        ))),
    }
}

impl<M> Index<usize> for Collection<M> {
    type Output = M;

    fn index(&self, index: usize) -> &M {
        &self.items[index]
    }
}

impl<M> IntoIterator for Collection<M> {
    type Item = M;
    type IntoIter = vec::IntoIter<M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, M> IntoIterator for &'a Collection<M> {
    type Item = &'a M;
    type IntoIter = slice::Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
