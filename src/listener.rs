//! High-level entry point mirroring the CourtListener service.
//!
//! [`CourtListener`] owns a [`CourtSession`] and forwards queries to it.
//! [`CourtListener::from_env`] is a composition-root helper: it is the only
//! place in the library that reads the process environment.

use thiserror::Error;

use crate::clients::{HttpError, HttpResponse, PreparedRequest, RequestArguments};
use crate::config::{
    resolve_api_key_from_env, Endpoint, SessionDescriptor, DEFAULT_API_KEY_ENV,
};
use crate::error::ConfigError;
use crate::session::{CourtSession, PageResultSet};

/// Errors from building or using a [`CourtListener`].
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Configuration or credential resolution failed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

/// Client for the CourtListener REST API.
///
/// # Example
///
/// ```rust,ignore
/// use titanium_white::{ApiKey, CourtListener, Endpoint, SessionDescriptor};
///
/// let descriptor = SessionDescriptor::builder()
///     .endpoint(Endpoint::new("https://www.courtlistener.com/api/rest/v3/people/")?)
///     .api_key(ApiKey::new("my-token")?)
///     .parameter("name_first", "Cynthia")
///     .parameter("name_last", "Freeland")
///     .build()?;
///
/// let listener = CourtListener::new(descriptor)?;
/// let (response, _request) = listener.get_query().await?;
/// println!("{}", response.body);
/// ```
#[derive(Debug)]
pub struct CourtListener {
    court_session: CourtSession,
}

impl CourtListener {
    /// Creates a listener over `descriptor` with default session settings.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::Http`] if the transport cannot be created.
    pub fn new(descriptor: SessionDescriptor) -> Result<Self, ListenerError> {
        Ok(Self::with_session(CourtSession::new(descriptor)?))
    }

    /// Creates a listener over an already configured session.
    #[must_use]
    pub fn with_session(court_session: CourtSession) -> Self {
        Self { court_session }
    }

    /// Creates a listener for the default endpoint, reading the API key from
    /// the `COURTLISTENER` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::Config`] with
    /// [`ConfigError::MissingCredential`] if the variable is unset.
    pub fn from_env() -> Result<Self, ListenerError> {
        let api_key = resolve_api_key_from_env(None, DEFAULT_API_KEY_ENV)?;
        let descriptor = SessionDescriptor::builder()
            .endpoint(Endpoint::courtlistener())
            .api_key(api_key)
            .build()?;
        tracing::debug!(endpoint = %descriptor.endpoint(), "Using default court session");
        Self::new(descriptor)
    }

    /// Returns the session queries are sent through.
    #[must_use]
    pub const fn court_session(&self) -> &CourtSession {
        &self.court_session
    }

    /// Sends a GET to the session endpoint with its headers and parameters.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] on any request failure.
    pub async fn get_query(&self) -> Result<(HttpResponse, PreparedRequest), HttpError> {
        self.court_session.get_query().await
    }

    /// Fetches up to `page_depth` pages; see [`CourtSession::fetch_all`].
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`]; no partial result is returned.
    pub async fn fetch_all(
        &self,
        args: RequestArguments,
        page_depth: u32,
    ) -> Result<PageResultSet, HttpError> {
        self.court_session.fetch_all(args, page_depth).await
    }

    /// Consumes the listener and closes its session.
    pub fn close(self) {
        self.court_session.close();
    }
}
