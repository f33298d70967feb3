//! HTTP execution abstraction.
//!
//! The protocol state machines (token refresh, retry-on-rejection) run
//! against this trait, so they can be exercised in tests without a network.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::redirect::Policy;

use crate::error::Error;
use crate::types::{HttpRequest, HttpResponse};

/// Trait for executing HTTP requests.
pub trait HttpExecutor: Send + Sync {
    /// Execute an HTTP request and return the response.
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Error>;
}

/// Production HTTP executor using a blocking reqwest client.
///
/// Redirects are never followed: token acquisition must observe the
/// repository's own response headers, not a login redirect's. The client
/// keeps a per-process cookie store so session cookies set by the service
/// ride along on later calls; nothing is persisted across processes.
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    /// Create a new executor with the given request timeout.
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::none())
            .cookie_store(true)
            .build()?;

        Ok(Self { client })
    }

    /// Create with default timeout of 30 seconds.
    pub fn with_default_timeout() -> Result<Self, Error> {
        Self::new(Duration::from_secs(30))
    }
}

impl HttpExecutor for ReqwestExecutor {
    fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
        let method: http::Method = request.method.into();

        let mut headers = HeaderMap::new();
        for (name, value) in &request.headers {
            let header_name = HeaderName::try_from(name.as_str())?;
            let header_value = HeaderValue::try_from(value.as_str())?;
            headers.insert(header_name, header_value);
        }

        let mut req_builder = self.client.request(method, request.url.as_str());
        req_builder = req_builder.headers(headers);

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.clone());
        }

        let response = req_builder.send()?;

        let status = response.status().as_u16();
        let status_text = response
            .status()
            .canonical_reason()
            .unwrap_or("Unknown")
            .to_string();

        let mut resp_headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                resp_headers.insert(name.to_string(), v.to_string());
            }
        }

        let body = response.bytes()?.to_vec();

        Ok(HttpResponse {
            status,
            status_text,
            headers: resp_headers,
            body,
        })
    }
}

/// Mock HTTP executor for testing.
///
/// Returns predefined responses keyed by request URL.
#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// A mock HTTP executor that replays canned responses.
    ///
    /// Responses are keyed by full request URL. Multiple responses for the
    /// same URL form a sequence; the last one repeats once the sequence is
    /// exhausted.
    #[derive(Clone, Default)]
    pub struct MockExecutor {
        responses: Arc<Mutex<HashMap<String, VecDeque<HttpResponse>>>>,
        default_response: Arc<Mutex<Option<HttpResponse>>>,
        recorded_requests: Arc<Mutex<Vec<HttpRequest>>>,
        fail_message: Arc<Mutex<Option<String>>>,
    }

    impl MockExecutor {
        pub fn new() -> Self {
            Self::default()
        }

        /// Queue a response for a URL.
        pub fn with_response(self, url: impl Into<String>, response: HttpResponse) -> Self {
            self.responses
                .lock()
                .unwrap()
                .entry(url.into())
                .or_default()
                .push_back(response);
            self
        }

        /// Set a response used when no URL matches.
        pub fn with_default_response(self, response: HttpResponse) -> Self {
            *self.default_response.lock().unwrap() = Some(response);
            self
        }

        /// Fail every request with a transport error.
        pub fn fail_with(self, message: impl Into<String>) -> Self {
            *self.fail_message.lock().unwrap() = Some(message.into());
            self
        }

        /// All requests seen so far.
        pub fn recorded_requests(&self) -> Vec<HttpRequest> {
            self.recorded_requests.lock().unwrap().clone()
        }

        /// A bare response with the given status.
        pub fn status_response(status: u16) -> HttpResponse {
            HttpResponse {
                status,
                status_text: String::new(),
                headers: HashMap::new(),
                body: Vec::new(),
            }
        }

        /// A 200 response with a raw body.
        pub fn body_response(body: &[u8]) -> HttpResponse {
            HttpResponse {
                status: 200,
                status_text: "OK".to_string(),
                headers: HashMap::new(),
                body: body.to_vec(),
            }
        }

        /// A 200 response with a JSON body.
        pub fn json_response(body: serde_json::Value) -> HttpResponse {
            HttpResponse {
                status: 200,
                status_text: "OK".to_string(),
                headers: HashMap::new(),
                body: body.to_string().into_bytes(),
            }
        }

        /// Attach a response header.
        pub fn with_resp_header(
            mut response: HttpResponse,
            name: &str,
            value: &str,
        ) -> HttpResponse {
            response
                .headers
                .insert(name.to_ascii_lowercase(), value.to_string());
            response
        }
    }

    impl HttpExecutor for MockExecutor {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, Error> {
            self.recorded_requests.lock().unwrap().push(request.clone());

            if let Some(message) = self.fail_message.lock().unwrap().clone() {
                return Err(Error::Transport { message });
            }

            let mut responses = self.responses.lock().unwrap();
            if let Some(queue) = responses.get_mut(&request.url) {
                if queue.len() > 1 {
                    return Ok(queue.pop_front().unwrap());
                }
                if let Some(response) = queue.front() {
                    return Ok(response.clone());
                }
            }

            if let Some(ref response) = *self.default_response.lock().unwrap() {
                return Ok(response.clone());
            }

            Ok(Self::status_response(404))
        }
    }
}
