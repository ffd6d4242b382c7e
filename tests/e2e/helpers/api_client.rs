use anyhow::{Context, Result};
use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::header::{HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use hyper::{HeaderMap, Method, Request, Response, StatusCode};
use hyper_util::client::legacy::{connect::HttpConnector, Client};
use hyper_util::rt::TokioExecutor;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Thin HTTP client bound to one spawned test server
#[derive(Clone)]
pub struct TestClient {
    base_url: String,
    client: Client<HttpConnector, Full<Bytes>>,
}

/// A request being assembled before it is sent
struct Outgoing {
    method: Method,
    path: String,
    headers: HeaderMap,
    body: Bytes,
}

impl Outgoing {
    fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }

    fn bearer(self, token: &str) -> Result<Self> {
        self.header(AUTHORIZATION.as_str(), &format!("Bearer {}", token))
    }

    fn header(mut self, name: &str, value: &str) -> Result<Self> {
        self.headers.insert(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
        Ok(self)
    }

    fn json<T: Serialize>(mut self, body: &T) -> Result<Self> {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Bytes::from(serde_json::to_vec(body)?);
        Ok(self)
    }
}

impl TestClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder(TokioExecutor::new()).build_http(),
        }
    }

    pub async fn get(&self, path: &str) -> Result<ApiResponse> {
        self.send(Outgoing::new(Method::GET, path)).await
    }

    pub async fn get_with_auth(&self, path: &str, token: &str) -> Result<ApiResponse> {
        self.send(Outgoing::new(Method::GET, path).bearer(token)?)
            .await
    }

    pub async fn get_with_header(&self, path: &str, name: &str, value: &str) -> Result<ApiResponse> {
        self.send(Outgoing::new(Method::GET, path).header(name, value)?)
            .await
    }

    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<ApiResponse> {
        self.send(Outgoing::new(Method::POST, path).json(body)?)
            .await
    }

    /// POST without a body, as sent by webhooks
    pub async fn post_empty(&self, path: &str) -> Result<ApiResponse> {
        self.send(Outgoing::new(Method::POST, path)).await
    }

    pub async fn post_with_auth<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        token: &str,
    ) -> Result<ApiResponse> {
        self.send(Outgoing::new(Method::POST, path).bearer(token)?.json(body)?)
            .await
    }

    pub async fn put_with_auth<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        token: &str,
    ) -> Result<ApiResponse> {
        self.send(Outgoing::new(Method::PUT, path).bearer(token)?.json(body)?)
            .await
    }

    pub async fn delete_with_auth(&self, path: &str, token: &str) -> Result<ApiResponse> {
        self.send(Outgoing::new(Method::DELETE, path).bearer(token)?)
            .await
    }

    async fn send(&self, outgoing: Outgoing) -> Result<ApiResponse> {
        let mut request = Request::builder()
            .method(outgoing.method)
            .uri(format!("{}{}", self.base_url, outgoing.path))
            .body(Full::new(outgoing.body))?;
        *request.headers_mut() = outgoing.headers;

        let response = self
            .client
            .request(request)
            .await
            .context("test server did not answer")?;

        ApiResponse::read(response).await
    }
}

/// Fully buffered response; `body` is set when the payload parses as JSON
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
    pub body_bytes: Vec<u8>,
    headers: HeaderMap,
}

impl ApiResponse {
    async fn read(response: Response<Incoming>) -> Result<Self> {
        let (parts, body) = response.into_parts();
        let body_bytes = body.collect().await?.to_bytes().to_vec();
        let body = serde_json::from_slice(&body_bytes).ok();

        Ok(Self {
            status: parts.status,
            body,
            body_bytes,
            headers: parts.headers,
        })
    }

    pub fn assert_status(&self, expected: StatusCode) -> &Self {
        assert_eq!(
            self.status, expected,
            "unexpected status, body: {}",
            String::from_utf8_lossy(&self.body_bytes)
        );
        self
    }

    /// The error body's `message` must contain `expected`
    pub fn assert_error_message(&self, expected: &str) -> &Self {
        let message = self.body()["message"]
            .as_str()
            .unwrap_or_else(|| panic!("no message in error body: {}", self.body()));

        assert!(
            message.contains(expected),
            "error message {:?} does not contain {:?}",
            message,
            expected
        );
        self
    }

    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_slice(&self.body_bytes).context("response body did not match type")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &Value {
        self.body.as_ref().expect("Response has no JSON body")
    }
}
