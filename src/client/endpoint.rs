//! Endpoint handlers, one per Lokalise resource kind.
//!
//! `EndpointKind` is the registry: it maps resource names to URL templates and
//! the actions each resource supports. An `Endpoint` turns an action plus path
//! identifiers into a [`Request`] for the client's transport.

use crate::client::{Error, Request, Result, Transport};
use log::debug;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use std::{borrow::Cow, fmt, str::FromStr, sync::Arc, time::Duration};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Projects,
    Branches,
    Comments,
    KeyComments,
    Contributors,
    Files,
    Languages,
    SystemLanguages,
    QueuedProcesses,
}

impl EndpointKind {
    pub const ALL: [EndpointKind; 9] = [
        EndpointKind::Projects,
        EndpointKind::Branches,
        EndpointKind::Comments,
        EndpointKind::KeyComments,
        EndpointKind::Contributors,
        EndpointKind::Files,
        EndpointKind::Languages,
        EndpointKind::SystemLanguages,
        EndpointKind::QueuedProcesses,
    ];

    /// Resource name the endpoint is registered under.
    pub fn name(self) -> &'static str {
        match self {
            EndpointKind::Projects => "projects",
            EndpointKind::Branches => "branches",
            EndpointKind::Comments => "comments",
            EndpointKind::KeyComments => "key_comments",
            EndpointKind::Contributors => "contributors",
            EndpointKind::Files => "files",
            EndpointKind::Languages => "languages",
            EndpointKind::SystemLanguages => "system_languages",
            EndpointKind::QueuedProcesses => "queued_processes",
        }
    }

    fn path_template(self) -> &'static str {
        match self {
            EndpointKind::Projects => "projects/{resource_id}",
            EndpointKind::Branches => "projects/{parent_id}/branches/{resource_id}",
            EndpointKind::Comments => "projects/{parent_id}/comments",
            EndpointKind::KeyComments => {
                "projects/{parent_id}/keys/{resource_id}/comments/{subresource_id}"
            }
            EndpointKind::Contributors => "projects/{parent_id}/contributors/{resource_id}",
            EndpointKind::Files => "projects/{parent_id}/files/{resource_id}",
            EndpointKind::Languages => "projects/{parent_id}/languages/{resource_id}",
            EndpointKind::SystemLanguages => "system/languages",
            EndpointKind::QueuedProcesses => "projects/{parent_id}/processes/{resource_id}",
        }
    }

    pub fn supports(self, action: Action) -> bool {
        use Action::*;

        match self {
            EndpointKind::Projects => {
                matches!(action, All | Find | Create | Update | Delete | Empty)
            }
            EndpointKind::Branches => {
                matches!(action, All | Find | Create | Update | Delete | Merge)
            }
            EndpointKind::Comments | EndpointKind::SystemLanguages => action == All,
            EndpointKind::KeyComments => matches!(action, All | Find | Create | Delete),
            EndpointKind::Contributors | EndpointKind::Languages => {
                matches!(action, All | Find | Create | Update | Delete)
            }
            EndpointKind::Files => matches!(action, All | Upload | Download),
            EndpointKind::QueuedProcesses => matches!(action, All | Find),
        }
    }

    /// Expand the URL template for `action`.
    ///
    /// Actions on a collection may leave the trailing identifier out, which
    /// truncates the path before it. Any other missing identifier is an error.
    /// Identifiers are percent-encoded so each one stays a single segment.
    fn path(self, action: Action, ids: PathIds<'_>) -> Result<String> {
        let segments: Vec<&str> = self.path_template().split('/').collect();
        let last_placeholder = segments.iter().rposition(|s| s.starts_with('{'));

        let mut path: Vec<Cow<'_, str>> = Vec::with_capacity(segments.len() + 1);
        for (i, segment) in segments.iter().enumerate() {
            let (parameter, value) = match *segment {
                "{parent_id}" => ("parent_id", ids.parent_id),
                "{resource_id}" => ("resource_id", ids.resource_id),
                "{subresource_id}" => ("subresource_id", ids.subresource_id),
                literal => {
                    path.push(Cow::Borrowed(literal));
                    continue;
                }
            };

            match value {
                Some(invalid @ ("" | "." | "..")) => {
                    return Err(Error::InvalidPathParameter {
                        endpoint: self.name(),
                        parameter,
                        value: invalid.to_owned(),
                    })
                }
                Some(value) => path.push(urlencoding::encode(value)),
                None if Some(i) == last_placeholder && !action.targets_instance() => break,
                None => {
                    return Err(Error::MissingPathParameter {
                        endpoint: self.name(),
                        parameter,
                    })
                }
            }
        }

        if let Some(suffix) = action.suffix() {
            path.push(Cow::Borrowed(suffix));
        }

        Ok(path.join("/"))
    }
}

impl FromStr for EndpointKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        EndpointKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| Error::Configuration(format!("no endpoint registered as `{}`", name)))
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    All,
    Find,
    Create,
    Update,
    Delete,
    Merge,
    Upload,
    Download,
    Empty,
}

impl Action {
    pub fn name(self) -> &'static str {
        match self {
            Action::All => "all",
            Action::Find => "find",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Merge => "merge",
            Action::Upload => "upload",
            Action::Download => "download",
            Action::Empty => "empty",
        }
    }

    fn method(self) -> Method {
        match self {
            Action::All | Action::Find => Method::GET,
            Action::Create | Action::Merge | Action::Upload | Action::Download => Method::POST,
            Action::Update | Action::Empty => Method::PUT,
            Action::Delete => Method::DELETE,
        }
    }

    fn suffix(self) -> Option<&'static str> {
        match self {
            Action::Merge => Some("merge"),
            Action::Upload => Some("upload"),
            Action::Download => Some("download"),
            Action::Empty => Some("empty"),
            _ => None,
        }
    }

    // Whether the action addresses one existing resource rather than a collection.
    fn targets_instance(self) -> bool {
        matches!(
            self,
            Action::Find | Action::Update | Action::Delete | Action::Merge | Action::Empty
        )
    }

    // Whether the response may be a page of items, which needs the
    // pagination headers.
    fn returns_page(self) -> bool {
        matches!(self, Action::All | Action::Create)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifiers filling the placeholders of an endpoint's URL template.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathIds<'a> {
    pub parent_id: Option<&'a str>,
    pub resource_id: Option<&'a str>,
    pub subresource_id: Option<&'a str>,
}

impl<'a> PathIds<'a> {
    pub fn parent(parent_id: &'a str) -> Self {
        Self {
            parent_id: Some(parent_id),
            ..Default::default()
        }
    }

    pub fn resource(mut self, resource_id: &'a str) -> Self {
        self.resource_id = Some(resource_id);
        self
    }

    pub fn subresource(mut self, subresource_id: &'a str) -> Self {
        self.subresource_id = Some(subresource_id);
        self
    }
}

/// Credentials and transport shared by the endpoints of one client.
#[derive(Debug)]
pub(crate) struct Session {
    pub(crate) token: Option<String>,
    pub(crate) read_timeout: Option<Duration>,
    pub(crate) transport: Arc<dyn Transport>,
}

/// Handler for one resource kind. Returns raw JSON; wrapping into models is
/// left to the [`Client`](crate::Client) methods.
#[derive(Debug)]
pub struct Endpoint {
    kind: EndpointKind,
    session: Arc<Session>,
}

impl Endpoint {
    pub(crate) fn new(kind: EndpointKind, session: Arc<Session>) -> Self {
        Self { kind, session }
    }

    pub fn kind(&self) -> EndpointKind {
        self.kind
    }

    pub async fn all<P>(&self, ids: PathIds<'_>, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        self.perform(Action::All, ids, Some(params)).await
    }

    pub async fn find(&self, ids: PathIds<'_>) -> Result<Value> {
        self.perform::<()>(Action::Find, ids, None).await
    }

    pub async fn create<P>(&self, ids: PathIds<'_>, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        self.perform(Action::Create, ids, Some(params)).await
    }

    pub async fn update<P>(&self, ids: PathIds<'_>, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        self.perform(Action::Update, ids, Some(params)).await
    }

    pub async fn delete(&self, ids: PathIds<'_>) -> Result<Value> {
        self.perform::<()>(Action::Delete, ids, None).await
    }

    pub async fn merge<P>(&self, ids: PathIds<'_>, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        self.perform(Action::Merge, ids, Some(params)).await
    }

    pub async fn upload<P>(&self, ids: PathIds<'_>, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        self.perform(Action::Upload, ids, Some(params)).await
    }

    pub async fn download<P>(&self, ids: PathIds<'_>, params: &P) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        self.perform(Action::Download, ids, Some(params)).await
    }

    pub async fn empty(&self, ids: PathIds<'_>) -> Result<Value> {
        self.perform::<()>(Action::Empty, ids, None).await
    }

    /// Send `action` against this endpoint's resource.
    pub async fn perform<P>(&self, action: Action, ids: PathIds<'_>, params: Option<&P>) -> Result<Value>
    where
        P: Serialize + ?Sized,
    {
        if !self.kind.supports(action) {
            return Err(Error::UnsupportedAction {
                endpoint: self.kind.name(),
                action: action.name(),
            });
        }

        let path = self.kind.path(action, ids)?;
        let params = match params.map(serde_json::to_value).transpose()? {
            Some(Value::Null) | None => None,
            params => params,
        };

        debug!("{} endpoint: {} {}", self.kind, action, path);

        let request = Request {
            method: action.method(),
            path,
            params,
            paginated: action.returns_page(),
            token: self.session.token.clone(),
            read_timeout: self.session.read_timeout,
        };

        self.session.transport.send(request).await
    }
}
