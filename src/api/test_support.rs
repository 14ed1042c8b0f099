use std::sync::Mutex;

use super::client::{ApiClient, ApiConfig};
use super::error::ApiError;
use super::transport::{ApiRequest, Method, RawResponse, Transport};

pub(crate) const TEST_API_BASE: &str = "http://registry.test/api";

struct Route {
    method: Method,
    path: String,
    outcome: Result<RawResponse, ApiError>,
}

/// Transport that answers from canned routes and records every request.
#[derive(Default)]
pub(crate) struct FakeTransport {
    routes: Vec<Route>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn respond(mut self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.routes.push(Route {
            method,
            path: path.to_string(),
            outcome: Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
        });
        self
    }

    pub(crate) fn fail(mut self, method: Method, path: &str, error: ApiError) -> Self {
        self.routes.push(Route {
            method,
            path: path.to_string(),
            outcome: Err(error),
        });
        self
    }

    pub(crate) fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn count(&self, method: Method, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && relative_path(r) == path)
            .count()
    }
}

fn relative_path(request: &ApiRequest) -> &str {
    let path = request.url.path();
    path.strip_prefix("/api").unwrap_or(path)
}

impl Transport for FakeTransport {
    fn execute(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        let path = relative_path(&request).to_string();
        let method = request.method;
        self.requests.lock().unwrap().push(request);

        self.routes
            .iter()
            .find(|route| route.method == method && route.path == path)
            .map(|route| route.outcome.clone())
            .unwrap_or_else(|| {
                Ok(RawResponse {
                    status: 404,
                    body: r#"{"error": "Not Found"}"#.to_string(),
                })
            })
    }
}

pub(crate) fn test_config() -> ApiConfig {
    ApiConfig {
        base_url: TEST_API_BASE.to_string(),
        api_key: "test-key".to_string(),
        ..ApiConfig::default()
    }
}

pub(crate) fn fake_client(transport: FakeTransport) -> ApiClient<FakeTransport> {
    ApiClient::with_transport(test_config(), transport)
}

pub(crate) const PROGRAMS_JSON: &str = r#"[{"id": 1, "name": "TB"}, {"id": 2, "name": "Malaria"}]"#;

pub(crate) const CLIENTS_JSON: &str = r#"[
    {"id": 7, "name": "Ann", "email": "ann@example.com", "programs": [{"id": 1, "name": "TB"}]},
    {"id": 8, "name": "Bob", "email": "bob@example.com", "programs": []}
]"#;
