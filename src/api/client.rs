use std::thread;
use std::time::Duration;

use reqwest::Url;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::error::ApiError;
use super::models::{Client, NewClient, NewProgram, Program};
use super::transport::{ApiRequest, HttpTransport, Method, Transport};

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
/// Placeholder credential; it has to match one of the server's configured keys.
pub const DEFAULT_API_KEY: &str = "your-secret-key-123";
pub const API_KEY_HEADER: &str = "X-API-KEY";

#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_key: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

pub struct ApiClient<T = HttpTransport> {
    config: ApiConfig,
    transport: T,
}

impl ApiClient<HttpTransport> {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::with_transport(config, transport))
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn with_transport(config: ApiConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn url(&self, endpoint: &str) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.config.base_url.trim_end_matches('/'), endpoint);
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl(format!("{raw}: {e}")))
    }

    /// Sends `method` to `endpoint` (relative to the configured base) and
    /// returns the parsed JSON body of a success response.
    pub fn issue_request(
        &self,
        endpoint: &str,
        method: Method,
        body: Option<&Value>,
    ) -> Result<Value, ApiError> {
        let url = self.url(endpoint)?;
        self.send(method, url, body)
    }

    fn send(&self, method: Method, url: Url, body: Option<&Value>) -> Result<Value, ApiError> {
        debug!(%method, %url, "issuing request");

        let request = ApiRequest {
            method,
            url,
            headers: vec![
                ("Content-Type", "application/json".to_string()),
                (API_KEY_HEADER, self.config.api_key.clone()),
            ],
            body: body.map(Value::to_string),
        };

        let response = self
            .transport
            .execute(request)
            .inspect_err(|e| warn!(error = %e, "request failed before a response arrived"))?;

        if !response.is_success() {
            let err = ApiError::from_status(response.status, &response.body);
            debug!(status = response.status, error = %err, "request rejected");
            return Err(err);
        }

        if response.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub fn list_programs(&self) -> Result<Vec<Program>, ApiError> {
        decode(self.issue_request("/programs", Method::Get, None)?)
    }

    pub fn create_program(&self, name: &str) -> Result<Program, ApiError> {
        let body = encode(&NewProgram {
            name: name.to_string(),
        })?;
        decode(self.issue_request("/programs", Method::Post, Some(&body))?)
    }

    pub fn delete_program(&self, id: i64) -> Result<(), ApiError> {
        self.issue_request(&format!("/programs/{id}"), Method::Delete, None)
            .map(|_| ())
    }

    pub fn list_clients(&self) -> Result<Vec<Client>, ApiError> {
        decode(self.issue_request("/clients", Method::Get, None)?)
    }

    pub fn create_client(&self, client: &NewClient) -> Result<Client, ApiError> {
        let body = encode(client)?;
        decode(self.issue_request("/clients", Method::Post, Some(&body))?)
    }

    pub fn delete_client(&self, id: i64) -> Result<(), ApiError> {
        self.issue_request(&format!("/clients/{id}"), Method::Delete, None)
            .map(|_| ())
    }

    /// Searches clients by name. The query is sent as-is, empty included.
    pub fn search_clients(&self, query: &str) -> Result<Vec<Client>, ApiError> {
        let mut url = self.url("/clients/search")?;
        url.query_pairs_mut().append_pair("query", query);
        decode(self.send(Method::Get, url, None)?)
    }

    /// Fetches programs and clients concurrently and waits for both.
    ///
    /// When both fail the programs error is returned.
    pub fn load_all(&self) -> Result<(Vec<Program>, Vec<Client>), ApiError> {
        let (programs, clients) = thread::scope(|scope| {
            let programs = scope.spawn(|| self.list_programs());
            let clients = scope.spawn(|| self.list_clients());
            (join_request(programs), join_request(clients))
        });
        Ok((programs?, clients?))
    }
}

fn join_request<R>(handle: thread::ScopedJoinHandle<'_, Result<R, ApiError>>) -> Result<R, ApiError> {
    handle
        .join()
        .unwrap_or_else(|_| Err(ApiError::Network("request thread panicked".to_string())))
}

fn encode<B: Serialize>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ApiError> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
