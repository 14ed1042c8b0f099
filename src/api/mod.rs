//! HTTP access to the registry API.
//!
//! Every call funnels through [`ApiClient::issue_request`], which attaches the
//! JSON content type and the credential header and turns non-success statuses
//! into a structured [`ApiError`].

mod client;
mod error;
mod models;
mod transport;

#[cfg(test)]
mod client_test;
#[cfg(test)]
pub(crate) mod test_support;

pub use client::{API_KEY_HEADER, ApiClient, ApiConfig, DEFAULT_API_BASE, DEFAULT_API_KEY};
pub use error::ApiError;
pub use models::{Client, NewClient, NewProgram, Program};
pub use transport::{ApiRequest, HttpTransport, Method, RawResponse, Transport};
