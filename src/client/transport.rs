use crate::{
    client::{pagination::pagination_from_headers, ApiErrorBody, Error, Result},
    collection::PAGINATION_KEY,
};
use log::debug;
use reqwest::{header, Client as ReqwestClient, Method};
use serde_json::{Map, Value};
use std::{fmt::Debug, time::Duration};
use url::Url;

pub const HEADER_API_TOKEN: &str = "X-Api-Token";
const MEDIA_TYPE_JSON: &str = "application/json";

/// A single call against the API, relative to the transport's base URL.
#[derive(Clone, Debug)]
pub struct Request {
    pub method: Method,
    pub path: String,
    /// Sent as the query string for `GET`, as the JSON body otherwise.
    pub params: Option<Value>,
    /// Attach pagination headers to the body. Off for responses handed back
    /// to the caller untouched.
    pub paginated: bool,
    pub token: Option<String>,
    pub read_timeout: Option<Duration>,
}

/// Executes requests built by the endpoint handlers.
///
/// Implementations return the decoded JSON body of a successful response and
/// fail with [`Error::Api`] for any non-2xx status. For a [`Request`] marked
/// `paginated`, pagination response headers, when present, are exposed as a
/// `_pagination` object in the body.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn send(&self, request: Request) -> Result<Value>;
}

/// [`Transport`] talking to the Lokalise API over HTTPS.
#[derive(Debug)]
pub struct HttpTransport {
    base_url: Url,
    client: ReqwestClient,
}

impl HttpTransport {
    pub fn new(base_url: &Url, user_agent: &str, connect_timeout: Option<Duration>) -> Result<Self> {
        let mut client_builder = ReqwestClient::builder().user_agent(user_agent);

        if let Some(timeout) = connect_timeout {
            client_builder = client_builder.connect_timeout(timeout);
        }

        Ok(Self {
            base_url: base_url.clone(),
            client: client_builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: Request) -> Result<Value> {
        let url = self.base_url.join(&request.path)?;
        debug!("Lokalise Request: {} {}", request.method, url);

        let is_get = request.method == Method::GET;
        let paginated = request.paginated;
        let mut builder = self
            .client
            .request(request.method, url)
            .header(header::ACCEPT, MEDIA_TYPE_JSON);

        if let Some(token) = &request.token {
            builder = builder.header(HEADER_API_TOKEN, token.as_str());
        }

        if let Some(timeout) = request.read_timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(params) = &request.params {
            builder = if is_get {
                builder.query(&query_pairs(params)?)
            } else {
                builder.json(params)
            };
        }

        let response = builder.send().await?;
        process_response(response, paginated).await
    }
}

// Checks the status of a response, then decodes its body and, for pages,
// attaches the pagination headers.
async fn process_response(response: reqwest::Response, paginated: bool) -> Result<Value> {
    debug!("Lokalise Response: {} {}", response.status(), response.url());

    let status = response.status();
    let pagination = if paginated {
        pagination_from_headers(response.headers())
    } else {
        None
    };
    let body = response.bytes().await?;

    if !status.is_success() {
        return Err(Error::Api(status, ApiErrorBody::from_slice(&body)));
    }

    let mut payload = if body.is_empty() {
        Value::Object(Map::new())
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| Error::malformed(format!("response body is not JSON: {}", e)))?
    };

    if let (Some(pagination), Value::Object(object)) = (pagination, &mut payload) {
        object.insert(PAGINATION_KEY.to_owned(), Value::Object(pagination));
    }

    Ok(payload)
}

/// Flatten query parameters into string pairs.
///
/// Arrays become comma separated lists, the way Lokalise expects its
/// `filter_*` parameters; `null` values are dropped.
pub(crate) fn query_pairs(params: &Value) -> Result<Vec<(String, String)>> {
    let object = match params {
        Value::Null => return Ok(Vec::new()),
        Value::Object(object) => object,
        _ => return Err("query parameters must be a JSON object".into()),
    };

    let mut pairs = Vec::with_capacity(object.len());
    for (key, value) in object {
        let value = match value {
            Value::Null => continue,
            Value::Array(values) => values
                .iter()
                .map(|v| query_scalar(key, v))
                .collect::<Result<Vec<_>>>()?
                .join(","),
            other => query_scalar(key, other)?,
        };
        pairs.push((key.clone(), value));
    }

    Ok(pairs)
}

fn query_scalar(key: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(if *b { "1" } else { "0" }.to_owned()),
        _ => Err(format!("query parameter `{}` cannot be sent as a string", key).into()),
    }
}

#[cfg(test)]
mod test {
    use super::query_pairs;
    use serde_json::json;

    #[test]
    fn query() {
        let params = json!({
            "filter_names": ["TheApp", "Other"],
            "include_statistics": true,
            "limit": 100,
            "page": null,
        });

        let mut pairs = query_pairs(&params).unwrap();
        pairs.sort();
        assert_eq!(
            pairs,
            vec![
                ("filter_names".to_owned(), "TheApp,Other".to_owned()),
                ("include_statistics".to_owned(), "1".to_owned()),
                ("limit".to_owned(), "100".to_owned()),
            ]
        );
    }

    #[test]
    fn query_from_nothing() {
        assert!(query_pairs(&serde_json::Value::Null).unwrap().is_empty());
    }

    #[test]
    fn nested_query_is_rejected() {
        assert!(query_pairs(&json!({"filter": {"a": 1}})).is_err());
        assert!(query_pairs(&json!(["a"])).is_err());
    }
}
