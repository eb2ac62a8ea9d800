use crate::client::{Error, Result};
use chrono::{offset::LocalResult, TimeZone};
use serde::{de, de::DeserializeOwned, ser, Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// A raw JSON object returned by action endpoints (deletes, downloads, ...)
/// that have no model of their own.
pub type RawObject = Map<String, Value>;

pub(crate) const PROJECT_ID_KEY: &str = "project_id";

/// A read-only view over a single Lokalise resource.
///
/// Every field of an implementor is optional so that a field missing from the
/// response stays distinguishable from one that is present but falsy.
pub trait Model: DeserializeOwned + Sized {
    /// Key under which the API nests a single instance, e.g. `"branch"`.
    const DATA_KEY: &'static str;

    /// Key holding the item array of a page of instances, e.g. `"branches"`.
    const COLLECTION_KEY: &'static str;

    /// Wrap a single-resource response.
    ///
    /// Responses of the form `{"project_id": "..", "branch": {..}}` are
    /// unwrapped to the inner object, carrying `project_id` along.
    fn from_raw(raw: Value) -> Result<Self> {
        let mut outer = into_object(raw, Self::DATA_KEY)?;

        let object = match outer.remove(Self::DATA_KEY) {
            Some(Value::Object(mut inner)) => {
                inherit_project_id(&outer, &mut inner);
                inner
            }
            Some(other) => {
                // Not a nested instance, just a field that shares the key.
                outer.insert(Self::DATA_KEY.to_owned(), other);
                outer
            }
            None => outer,
        };

        decode(object, Self::DATA_KEY)
    }
}

pub(crate) fn into_object(raw: Value, what: &str) -> Result<RawObject> {
    match raw {
        Value::Object(object) => Ok(object),
        other => Err(Error::malformed(format!(
            "expected a JSON object for `{}`, found {}",
            what,
            json_type(&other)
        ))),
    }
}

pub(crate) fn inherit_project_id(outer: &RawObject, inner: &mut RawObject) {
    if let Some(project_id) = outer.get(PROJECT_ID_KEY) {
        inner
            .entry(PROJECT_ID_KEY)
            .or_insert_with(|| project_id.clone());
    }
}

pub(crate) fn decode<M: DeserializeOwned>(object: RawObject, what: &str) -> Result<M> {
    serde_json::from_value(Value::Object(object))
        .map_err(|e| Error::malformed(format!("could not decode `{}`: {}", what, e)))
}

pub(crate) fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A point in time reported by the API.
///
/// Lokalise sends `*_timestamp` fields as unix epoch seconds; RFC 3339 strings
/// are accepted too.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(chrono::DateTime<chrono::Utc>);

impl Timestamp {
    pub fn as_datetime(&self) -> chrono::DateTime<chrono::Utc> {
        self.0
    }

    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_i64(self.0.timestamp())
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        chrono::DateTime::parse_from_rfc3339(s).map(|dt| Timestamp(dt.with_timezone(&chrono::Utc)))
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        // Epoch seconds outside the `i64` range fail both variants.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Seconds(i64),
            Text(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Seconds(secs) => match chrono::Utc.timestamp_opt(secs, 0) {
                LocalResult::Single(datetime) => Ok(Timestamp(datetime)),
                _ => Err(de::Error::custom(format!(
                    "{} seconds is out of range for a timestamp",
                    secs
                ))),
            },
            Wire::Text(text) => text
                .parse()
                .map_err(|e| de::Error::custom(format!("invalid timestamp {:?}: {}", text, e))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Timestamp;

    #[test]
    fn timestamp_from_epoch() {
        let ts: Timestamp = serde_json::from_str("1545782400").unwrap();
        assert_eq!(ts.unix_seconds(), 1545782400);
    }

    #[test]
    fn timestamp_from_rfc3339() {
        let ts: Timestamp = serde_json::from_str(r#""2018-12-26T00:00:00Z""#).unwrap();
        assert_eq!(ts.unix_seconds(), 1545782400);
    }

    #[test]
    fn timestamp_rejects_garbage() {
        assert!(serde_json::from_str::<Timestamp>(r#""yesterday""#).is_err());
        assert!(serde_json::from_str::<Timestamp>("true").is_err());
    }

    #[test]
    fn timestamp_rejects_out_of_range_seconds() {
        assert!(serde_json::from_str::<Timestamp>("18446744073709551615").is_err());
        assert!(serde_json::from_str::<Timestamp>("9223372036854775807").is_err());
    }
}
