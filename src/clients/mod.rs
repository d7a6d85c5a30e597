//! HTTP client types for CourtListener API communication.
//!
//! This module provides the transport layer under [`crate::CourtSession`].
//!
//! # Overview
//!
//! - [`HttpClient`]: pooled async transport with default headers and timeout
//! - [`RequestArguments`]: per-call request options assembled by the caller
//! - [`PreparedRequest`]: the request as it is put on the wire
//! - [`HttpResponse`]: a decoded JSON response
//! - [`HttpError`]: unified error type for requests
//!
//! # Timeouts
//!
//! Every call gets [`DEFAULT_TIMEOUT`] (5 seconds) unless the session or the
//! request overrides it. The timeout applies to one HTTP call, never to a
//! whole paginated fetch.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError, MalformedResponseError};
pub use http_client::{HttpClient, DEFAULT_TIMEOUT, SDK_VERSION};
pub use http_request::{PreparedRequest, RequestArguments, RequestArgumentsBuilder};
pub use http_response::HttpResponse;
