//! Error type for the Lokalise client

use serde::Deserialize;
use std::{borrow::Cow, fmt, io};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// No endpoint is registered under the requested name.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("endpoint `{endpoint}` does not support `{action}`")]
    UnsupportedAction {
        endpoint: &'static str,
        action: &'static str,
    },

    #[error("endpoint `{endpoint}` requires `{parameter}`")]
    MissingPathParameter {
        endpoint: &'static str,
        parameter: &'static str,
    },

    /// An identifier that cannot be sent as a single path segment.
    #[error("`{value}` is not a valid `{parameter}` for endpoint `{endpoint}`")]
    InvalidPathParameter {
        endpoint: &'static str,
        parameter: &'static str,
        value: String,
    },

    /// A successful response lacked an expected key or could not be decoded.
    #[error("malformed response: {0}")]
    MalformedResponse(Cow<'static, str>),

    #[error("api error `{0}`: {1}")]
    Api(reqwest::StatusCode, ApiErrorBody),

    #[error("Io error")]
    Io(#[from] io::Error),

    #[error("reqwest error")]
    Reqwest(#[from] reqwest::Error),

    #[error("json error")]
    Json(#[from] serde_json::Error),

    #[error("invalid url")]
    Url(#[from] url::ParseError),

    #[error("toml parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("`{0}`")]
    Message(Cow<'static, str>),
}

impl Error {
    pub(crate) fn malformed<S: Into<Cow<'static, str>>>(reason: S) -> Self {
        Error::MalformedResponse(reason.into())
    }

    /// HTTP status of an API error, if this is one.
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Error::Api(status, _) => Some(*status),
            _ => None,
        }
    }
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}

// Lokalise error responses
// https://developers.lokalise.com/reference/api-errors
//
// Usually nested under an `error` key, some endpoints put the fields at the top level.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub code: Option<u16>,
    pub details: Option<serde_json::Value>,
}

impl ApiErrorBody {
    pub(crate) fn from_slice(body: &[u8]) -> Self {
        #[derive(Deserialize)]
        struct Wrapped {
            error: ApiErrorBody,
        }

        if let Ok(wrapped) = serde_json::from_slice::<Wrapped>(body) {
            return wrapped.error;
        }

        match serde_json::from_slice::<ApiErrorBody>(body) {
            Ok(error) => error,
            Err(_) => ApiErrorBody {
                message: Some(String::from_utf8_lossy(body).into_owned()),
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_deref().unwrap_or("no message"))
    }
}

#[cfg(test)]
mod test {
    use super::ApiErrorBody;

    #[test]
    fn nested_error_body() {
        let body = br#"{"error": {"message": "Not Found", "code": 404}}"#;
        let error = ApiErrorBody::from_slice(body);
        assert_eq!(error.message.as_deref(), Some("Not Found"));
        assert_eq!(error.code, Some(404));
    }

    #[test]
    fn flat_error_body() {
        let body = br#"{"message": "Invalid `X-Api-Token` header", "code": 401}"#;
        let error = ApiErrorBody::from_slice(body);
        assert_eq!(error.code, Some(401));
    }

    #[test]
    fn non_json_error_body() {
        let error = ApiErrorBody::from_slice(b"Bad Gateway");
        assert_eq!(error.message.as_deref(), Some("Bad Gateway"));
        assert_eq!(error.code, None);
    }
}
