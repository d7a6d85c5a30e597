//! Sessions against the CourtListener API.
//!
//! A [`CourtSession`] pairs a [`SessionDescriptor`] with a pooled
//! [`HttpClient`]. Every request it sends carries the descriptor's headers
//! and parameters plus the `Authorization` token.
//!
//! # Resource lifetime
//!
//! The connection pool is acquired when the session is built and released
//! when the session is dropped, on every exit path including `?` and panics.
//! [`CourtSession::close`] releases it explicitly.
//!
//! # Example
//!
//! ```rust,ignore
//! use titanium_white::{ApiKey, CourtSession, RequestArguments, SessionDescriptor};
//!
//! let descriptor = SessionDescriptor::builder()
//!     .api_key(ApiKey::new("my-token")?)
//!     .build()?;
//! let session = CourtSession::new(descriptor)?;
//!
//! let args = RequestArguments::builder()
//!     .url("people/")
//!     .param("name_last", "Freeland")
//!     .build();
//!
//! // Single request
//! let (response, prepared) = session.get(args.clone()).await?;
//!
//! // Up to 5 pages of results
//! let pages = session.fetch_all(args, 5).await?;
//! println!("{} matches", pages.count());
//! ```

mod pagination;

pub use pagination::{
    effective_depth, num_pages, PageResultSet, COUNT_KEY, DEFAULT_PAGE_DEPTH, PAGE_PARAM,
    PAGE_SIZE,
};

use std::collections::BTreeMap;
use std::time::Duration;

use tokio::task::JoinSet;
use url::Url;

use crate::auth::{inject_authorization, AuthorizationPolicy};
use crate::clients::{
    HttpClient, HttpError, HttpResponse, InvalidHttpRequestError, PreparedRequest,
    RequestArguments, DEFAULT_TIMEOUT,
};
use crate::config::{Endpoint, SessionDescriptor};

/// An open session against the CourtListener API.
///
/// # Thread Safety
///
/// `CourtSession` is `Send + Sync`; concurrent calls share the connection pool.
#[derive(Debug)]
pub struct CourtSession {
    descriptor: SessionDescriptor,
    http_client: HttpClient,
    authorization_policy: AuthorizationPolicy,
}

// Verify CourtSession is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CourtSession>();
};

impl CourtSession {
    /// Opens a session with default transport settings.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be created.
    pub fn new(descriptor: SessionDescriptor) -> Result<Self, HttpError> {
        Self::builder(descriptor).build()
    }

    /// Creates a builder for a session over `descriptor`.
    #[must_use]
    pub fn builder(descriptor: SessionDescriptor) -> CourtSessionBuilder {
        CourtSessionBuilder::new(descriptor)
    }

    /// Returns the descriptor this session was built from.
    #[must_use]
    pub const fn descriptor(&self) -> &SessionDescriptor {
        &self.descriptor
    }

    /// Returns how a caller-supplied `Authorization` header is treated.
    #[must_use]
    pub const fn authorization_policy(&self) -> AuthorizationPolicy {
        self.authorization_policy
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Resolves `args` into the request that would be sent.
    ///
    /// Descriptor headers and parameters apply first; values in `args` win
    /// on conflict. Header names conflict case-insensitively. Authorization is injected last, per the session policy.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the URL cannot be resolved or a
    /// header is invalid.
    pub fn prepare(
        &self,
        args: RequestArguments,
    ) -> Result<PreparedRequest, InvalidHttpRequestError> {
        let mut headers = self.descriptor.headers().clone();
        for (key, value) in args.headers.unwrap_or_default() {
            headers.retain(|existing, _| !existing.eq_ignore_ascii_case(&key));
            headers.insert(key, value);
        }

        let mut params = self.descriptor.parameters().clone();
        params.extend(args.params.unwrap_or_default());

        let args = inject_authorization(
            RequestArguments {
                url: args.url,
                headers: Some(headers),
                params: Some(params),
                timeout: args.timeout,
            },
            self.descriptor.api_key(),
            self.authorization_policy,
        );

        let url = resolve_url(
            self.descriptor.endpoint(),
            args.url.as_deref(),
            args.params.as_ref(),
        )?;

        self.http_client.prepare(url, args.headers, args.timeout)
    }

    /// Sends a GET request and returns the response with the request that
    /// produced it.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request is invalid, the transport fails,
    /// the status is not 2xx, or the body is not JSON.
    pub async fn get(
        &self,
        args: RequestArguments,
    ) -> Result<(HttpResponse, PreparedRequest), HttpError> {
        let prepared = self.prepare(args)?;
        let response = self.http_client.send(&prepared).await?;
        Ok((response, prepared))
    }

    /// Sends a GET to the descriptor's endpoint with its headers and parameters.
    ///
    /// # Errors
    ///
    /// Same as [`CourtSession::get`].
    pub async fn get_query(&self) -> Result<(HttpResponse, PreparedRequest), HttpError> {
        self.get(RequestArguments::default()).await
    }

    /// Fetches up to `page_depth` pages of a list endpoint, one after another.
    ///
    /// Page 1 is always fetched; its `count` decides how many pages exist at
    /// [`PAGE_SIZE`] items each. Pages `2..=min(page_depth, pages)` follow,
    /// each with the `page` parameter set. Each page's `results` is stored
    /// under the URL that served it.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`]; pages already fetched are discarded.
    pub async fn fetch_all(
        &self,
        args: RequestArguments,
        page_depth: u32,
    ) -> Result<PageResultSet, HttpError> {
        let (mut results, depth, mut args) = self.fetch_first_page(args, page_depth).await?;

        for page_index in 2..=depth {
            args.set_param(PAGE_PARAM, page_index.to_string());
            let (response, _) = self.get(args.clone()).await?;
            tracing::info!("GET {}", response.url);
            results.insert(response.url.to_string(), response.into_results());
        }

        Ok(results)
    }

    /// Like [`CourtSession::fetch_all`], but pages after the first are
    /// requested concurrently over the shared connection pool.
    ///
    /// The result is identical to the sequential fetch; merge order does not
    /// matter because every page has its own URL.
    ///
    /// # Errors
    ///
    /// Returns the first [`HttpError`] observed. Requests still in flight are
    /// cancelled and no partial result is returned.
    pub async fn fetch_all_concurrent(
        &self,
        args: RequestArguments,
        page_depth: u32,
    ) -> Result<PageResultSet, HttpError> {
        let (mut results, depth, mut args) = self.fetch_first_page(args, page_depth).await?;

        let mut in_flight = JoinSet::new();
        for page_index in 2..=depth {
            args.set_param(PAGE_PARAM, page_index.to_string());
            let prepared = self.prepare(args.clone())?;
            let client = self.http_client.clone();
            in_flight.spawn(async move { client.send(&prepared).await });
        }

        while let Some(joined) = in_flight.join_next().await {
            let response = match joined {
                Ok(response) => response?,
                Err(join_error) => std::panic::resume_unwind(join_error.into_panic()),
            };
            tracing::info!("GET {}", response.url);
            results.insert(response.url.to_string(), response.into_results());
        }

        Ok(results)
    }

    /// Releases the connection pool.
    ///
    /// Dropping the session has the same effect.
    pub fn close(self) {
        drop(self);
    }

    async fn fetch_first_page(
        &self,
        args: RequestArguments,
        page_depth: u32,
    ) -> Result<(PageResultSet, u32, RequestArguments), HttpError> {
        tracing::debug!(url = ?args.url, params = ?args.params, page_depth, "Querying CourtListener");

        let (response, _) = self.get(args.clone()).await?;
        let count = response.count();
        let depth = effective_depth(count, page_depth);
        tracing::debug!(count, pages = num_pages(count), depth, "Resolved page depth");

        let mut results = PageResultSet::new(count);
        tracing::info!("GET {}", response.url);
        results.insert(response.url.to_string(), response.into_results());

        Ok((results, depth, args))
    }
}

impl Drop for CourtSession {
    fn drop(&mut self) {
        tracing::debug!(endpoint = %self.descriptor.endpoint(), "Closing CourtListener session");
    }
}

/// Resolves a request URL against `endpoint` and applies `params`.
///
/// Query pairs already in the URL are kept unless `params` sets the same key.
fn resolve_url(
    endpoint: &Endpoint,
    url: Option<&str>,
    params: Option<&BTreeMap<String, String>>,
) -> Result<Url, InvalidHttpRequestError> {
    let mut resolved = match url {
        Some(url) => endpoint
            .join(url)
            .map_err(|e| InvalidHttpRequestError::InvalidUrl {
                url: url.to_string(),
                reason: e.to_string(),
            })?,
        None => endpoint.url().clone(),
    };

    if let Some(params) = params.filter(|params| !params.is_empty()) {
        let kept: Vec<(String, String)> = resolved
            .query_pairs()
            .filter(|(key, _)| !params.contains_key(key.as_ref()))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        resolved
            .query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .extend_pairs(params);
    }

    Ok(resolved)
}

/// Builder for [`CourtSession`].
///
/// # Defaults
///
/// - `timeout`: [`DEFAULT_TIMEOUT`] per call
/// - `authorization_policy`: [`AuthorizationPolicy::Overwrite`]
/// - `user_agent_prefix`: `None`
#[derive(Debug)]
pub struct CourtSessionBuilder {
    descriptor: SessionDescriptor,
    timeout: Duration,
    authorization_policy: AuthorizationPolicy,
    user_agent_prefix: Option<String>,
}

impl CourtSessionBuilder {
    fn new(descriptor: SessionDescriptor) -> Self {
        Self {
            descriptor,
            timeout: DEFAULT_TIMEOUT,
            authorization_policy: AuthorizationPolicy::default(),
            user_agent_prefix: None,
        }
    }

    /// Sets the default per-call timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets how a caller-supplied `Authorization` header is treated.
    #[must_use]
    pub const fn authorization_policy(mut self, policy: AuthorizationPolicy) -> Self {
        self.authorization_policy = policy;
        self
    }

    /// Shorthand for [`AuthorizationPolicy::from_overwrite_flag`].
    #[must_use]
    pub const fn overwrite_existing_auth(self, overwrite: bool) -> Self {
        self.authorization_policy(AuthorizationPolicy::from_overwrite_flag(overwrite))
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Opens the session, acquiring the connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the transport cannot be created.
    pub fn build(self) -> Result<CourtSession, HttpError> {
        let http_client = HttpClient::new(self.timeout, self.user_agent_prefix.as_deref())?;
        tracing::debug!(endpoint = %self.descriptor.endpoint(), "Opened CourtListener session");

        Ok(CourtSession {
            descriptor: self.descriptor,
            http_client,
            authorization_policy: self.authorization_policy,
        })
    }
}
