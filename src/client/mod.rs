//! The Lokalise API client.
//!
//! `Client` resolves endpoint handlers by resource name and memoizes them for
//! its lifetime (until [`Client::reset_client`]). The per-resource methods
//! live next to their option types in the submodules of this module.

use crate::config::Config;
use log::{info, trace};
use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};
use url::Url;

mod branches;
mod comments;
mod contributors;
mod endpoint;
mod error;
mod files;
mod languages;
mod pagination;
mod processes;
mod projects;
mod transport;

pub use branches::{CreateBranchRequest, MergeBranchOptions};
pub use comments::{CreateCommentsRequest, NewComment};
pub use endpoint::{Action, Endpoint, EndpointKind, PathIds};
pub use error::{ApiErrorBody, Error, Result};
pub use files::{DownloadFilesRequest, UploadFileRequest};
pub use pagination::PaginationOptions;
pub use projects::{CreateProjectRequest, ListProjectsOptions, NewProjectLanguage};
pub use transport::{HttpTransport, Request, Transport, HEADER_API_TOKEN};

use endpoint::Session;

// Constants
pub const DEFAULT_BASE_URL: &str = "https://api.lokalise.com/api2/";
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    user_agent: Option<String>,
    token: Option<String>,
    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let mut builder = Self::new().token(config.token.as_str());

        if let Some(base_url) = &config.base_url {
            builder = builder.base_url(base_url.as_str());
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        builder.connect_timeout = config.connect_timeout()?;
        builder.read_timeout = config.read_timeout()?;

        Ok(builder)
    }

    pub fn token<S: Into<String>>(mut self, token: S) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    pub fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Send requests through `transport` instead of the built-in HTTP one.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<Client> {
        let mut base_url = Url::parse(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        // `Url::join` drops the last path segment unless it ends with a slash
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Client {
            base_url,
            user_agent: self.user_agent.unwrap_or_else(|| USER_AGENT.to_owned()),
            token: self.token,
            connect_timeout: self.connect_timeout,
            read_timeout: self.read_timeout,
            custom_transport: self.transport,
            state: Mutex::new(State::default()),
        })
    }
}

pub struct Client {
    /// Base URL to use for API requests. Always terminated with a trailing slash.
    base_url: Url,

    user_agent: String,

    /// API token sent as `X-Api-Token`
    token: Option<String>,

    connect_timeout: Option<Duration>,
    read_timeout: Option<Duration>,

    custom_transport: Option<Arc<dyn Transport>>,

    state: Mutex<State>,
}

// Everything built lazily from the credentials; dropped as a whole on reset.
#[derive(Debug, Default)]
struct State {
    session: Option<Arc<Session>>,
    endpoints: HashMap<EndpointKind, Arc<Endpoint>>,
}

impl Client {
    pub fn new<S: Into<String>>(token: S) -> Result<Self> {
        ClientBuilder::new().token(token).build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        ClientBuilder::from_config(config)?.build()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    pub fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    /// Forget the token, the timeouts and every endpoint handler created so far.
    ///
    /// Handlers are rebuilt on next use without credentials, so further
    /// requests fail with an authentication error from the API.
    pub fn reset_client(&mut self) {
        self.token = None;
        self.connect_timeout = None;
        self.read_timeout = None;
        *self
            .state
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner) = State::default();

        info!("Lokalise client reset");
    }

    /// Resolve the endpoint handler registered as `name`, e.g. `"projects"` or
    /// `"key_comments"`.
    ///
    /// The handler is created on first use; later calls return the same
    /// instance until the client is reset.
    pub fn get_endpoint(&self, name: &str) -> Result<Arc<Endpoint>> {
        let kind = name.parse()?;
        self.endpoint(kind)
    }

    pub fn endpoint(&self, kind: EndpointKind) -> Result<Arc<Endpoint>> {
        let mut state = self.lock_state();

        if let Some(endpoint) = state.endpoints.get(&kind) {
            trace!("reusing {}_endpoint", kind);
            return Ok(Arc::clone(endpoint));
        }

        let session = match state.session.clone() {
            Some(session) => session,
            None => {
                let session = Arc::new(self.new_session()?);
                state.session = Some(Arc::clone(&session));
                session
            }
        };

        trace!("creating {}_endpoint", kind);
        let endpoint = Arc::new(Endpoint::new(kind, session));
        state.endpoints.insert(kind, Arc::clone(&endpoint));

        Ok(endpoint)
    }

    fn new_session(&self) -> Result<Session> {
        let transport: Arc<dyn Transport> = match &self.custom_transport {
            Some(transport) => Arc::clone(transport),
            None => Arc::new(HttpTransport::new(
                &self.base_url,
                &self.user_agent,
                self.connect_timeout,
            )?),
        };

        Ok(Session {
            token: self.token.clone(),
            read_timeout: self.read_timeout,
            transport,
        })
    }

    fn lock_state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url.as_str())
            .field("user_agent", &self.user_agent)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::{Client, EndpointKind, Error, Request, Result, Transport};
    use serde_json::Value;
    use std::{
        collections::VecDeque,
        sync::{Arc, Barrier, Mutex},
        thread,
        time::Duration,
    };

    /// Transport replaying canned responses and recording what was sent.
    #[derive(Debug, Default)]
    pub(crate) struct StubTransport {
        responses: Mutex<VecDeque<Value>>,
        pub(crate) requests: Mutex<Vec<Request>>,
    }

    impl StubTransport {
        pub(crate) fn respond_with(responses: Vec<Value>) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(responses.into()),
                requests: Mutex::default(),
            })
        }

        pub(crate) fn last_request(&self) -> Request {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl Transport for StubTransport {
        async fn send(&self, request: Request) -> Result<Value> {
            self.requests.lock().unwrap().push(request);
            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| "no response left".into())
        }
    }

    pub(crate) fn stub_client(transport: Arc<StubTransport>) -> Client {
        Client::builder()
            .token("secret")
            .read_timeout(Duration::from_secs(5))
            .transport(transport)
            .build()
            .unwrap()
    }

    #[test]
    fn unknown_endpoint() {
        let client = stub_client(StubTransport::respond_with(vec![]));

        let err = client.get_endpoint("translations").unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
        assert!(client.lock_state().endpoints.is_empty());
        assert!(client.lock_state().session.is_none());
    }

    #[test]
    fn endpoints_are_memoized() {
        let client = stub_client(StubTransport::respond_with(vec![]));

        let first = client.get_endpoint("projects").unwrap();
        let second = client.get_endpoint("projects").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.kind(), EndpointKind::Projects);

        let typed = client.endpoint(EndpointKind::Projects).unwrap();
        assert!(Arc::ptr_eq(&first, &typed));

        let comments = client.get_endpoint("key_comments").unwrap();
        assert!(!Arc::ptr_eq(&first, &comments));
        assert_eq!(client.lock_state().endpoints.len(), 2);
    }

    #[test]
    fn concurrent_lookups_share_one_endpoint() {
        const THREADS: usize = 8;
        let client = stub_client(StubTransport::respond_with(vec![]));
        let barrier = Barrier::new(THREADS);

        let endpoints: Vec<_> = thread::scope(|s| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    s.spawn(|| {
                        barrier.wait();
                        client.get_endpoint("branches").unwrap()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(endpoints.iter().all(|e| Arc::ptr_eq(e, &endpoints[0])));
        assert_eq!(client.lock_state().endpoints.len(), 1);
    }

    #[test]
    fn reset_drops_endpoints_and_credentials() {
        let mut client = Client::builder()
            .token("secret")
            .connect_timeout(Duration::from_secs(1))
            .read_timeout(Duration::from_secs(2))
            .transport(StubTransport::respond_with(vec![]))
            .build()
            .unwrap();

        let before = client.get_endpoint("branches").unwrap();
        client.reset_client();

        assert_eq!(client.token(), None);
        assert_eq!(client.connect_timeout(), None);
        assert_eq!(client.read_timeout(), None);
        assert!(client.lock_state().endpoints.is_empty());

        let after = client.get_endpoint("branches").unwrap();
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[tokio::test]
    async fn reset_clears_token_on_requests() {
        let transport = StubTransport::respond_with(vec![
            serde_json::json!({"projects": []}),
            serde_json::json!({"projects": []}),
        ]);
        let mut client = stub_client(transport.clone());

        client.projects(&()).await.unwrap();
        let request = transport.last_request();
        assert!(request.paginated);
        assert_eq!(request.token.as_deref(), Some("secret"));
        assert_eq!(request.read_timeout, Some(Duration::from_secs(5)));

        client.reset_client();
        client.projects(&()).await.unwrap();
        let request = transport.last_request();
        assert_eq!(request.token, None);
        assert_eq!(request.read_timeout, None);
    }

    #[test]
    fn base_url_gets_trailing_slash() {
        let client = Client::builder()
            .base_url("http://localhost:8080/api2")
            .build()
            .unwrap();
        assert_eq!(client.base_url().as_str(), "http://localhost:8080/api2/");

        let client = Client::new("secret").unwrap();
        assert_eq!(client.base_url().as_str(), super::DEFAULT_BASE_URL);
    }

    #[test]
    fn invalid_base_url() {
        let err = Client::builder().base_url("not a url").build().unwrap_err();
        assert!(matches!(err, Error::Url(_)));
    }

    #[test]
    fn debug_hides_token() {
        let client = Client::new("secret").unwrap();
        assert!(!format!("{:?}", client).contains("secret"));
    }
}
