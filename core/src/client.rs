//! The single choke point for every outbound call.
//!
//! # Design
//! `ApiClient` splits a call in three steps, mirroring the host-does-IO
//! layout of the data types in [`crate::http`]:
//!
//! 1. [`ApiClient::build_request`] turns an endpoint and [`RequestOptions`]
//!    into an `HttpRequest` (absolute URL, bearer token, content type).
//! 2. The injected [`Transport`] performs the round-trip.
//! 3. [`normalize_response`] turns the `HttpResponse` into an [`ApiResult`].
//!
//! Side effects that belong to the client rather than to the response (the
//! login redirect and clearing the session on 401) happen between steps 2
//! and 3, so `normalize_response` stays a pure function.

use std::fmt;
use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, DOWNLOAD_ERROR_MESSAGE, UNAUTHORIZED_MESSAGE};
use crate::http::{
    FilePart, HttpMethod, HttpRequest, HttpResponse, MultipartForm, RequestBody, APPLICATION_JSON,
    AUTHORIZATION, CONTENT_TYPE,
};
use crate::result::ApiResult;
use crate::session::Session;
use crate::transport::{ReqwestTransport, Transport};

/// Status reported when a request body cannot be encoded and nothing is sent.
const ENCODE_FAILURE_STATUS: u16 = 400;
/// Status reported when no response was received, or a 2xx body is unreadable.
const NETWORK_FAILURE_STATUS: u16 = 500;

/// Called when the server answers 401.
///
/// Any `Fn(&str) + Send + Sync` closure works; it receives the configured
/// login route.
pub trait LoginRedirect: Send + Sync {
    fn redirect_to_login(&self, route: &str);
}

impl<F> LoginRedirect for F
where
    F: Fn(&str) + Send + Sync,
{
    fn redirect_to_login(&self, route: &str) {
        self(route)
    }
}

/// Default handler: there is no view to navigate, so just record it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogRedirect;

impl LoginRedirect for LogRedirect {
    fn redirect_to_login(&self, route: &str) {
        warn!(route, "session rejected, login required");
    }
}

/// Per-call options for [`ApiClient::request`].
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub body: Option<RequestBody>,
    /// Extra headers, applied last so they override the defaults.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new(method: HttpMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    pub fn json<B: Serialize + ?Sized>(method: HttpMethod, body: &B) -> Result<Self, ApiError> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(Self {
            method,
            body: Some(RequestBody::Json(json)),
            headers: Vec::new(),
        })
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// HTTP client core shared by every entity service.
///
/// Cheap to clone; clones share the session, transport and redirect handler.
#[derive(Clone)]
pub struct ApiClient {
    config: Arc<ClientConfig>,
    session: Arc<Session>,
    transport: Arc<dyn Transport>,
    redirect: Arc<dyn LoginRedirect>,
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("authenticated", &self.session.is_authenticated())
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Client over `reqwest` with an empty session and the logging redirect.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: Arc::new(config),
            session: Arc::new(Session::new()),
            transport: Arc::new(ReqwestTransport::new()),
            redirect: Arc::new(LogRedirect),
        }
    }

    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    pub fn with_login_redirect(mut self, redirect: impl LoginRedirect + 'static) -> Self {
        self.redirect = Arc::new(redirect);
        self
    }

    pub fn with_session(mut self, session: Arc<Session>) -> Self {
        self.session = session;
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    /// Build the wire request for `endpoint` without sending it.
    pub fn build_request(&self, endpoint: &str, options: RequestOptions) -> HttpRequest {
        let mut headers = Vec::new();
        if matches!(options.body, Some(RequestBody::Json(_))) {
            headers.push((CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string()));
        }
        if let Some(token) = self.session.token() {
            headers.push((AUTHORIZATION.to_string(), format!("Bearer {token}")));
        }
        for (name, value) in options.headers {
            let name = name.to_ascii_lowercase();
            headers.retain(|(k, _)| *k != name);
            headers.push((name, value));
        }

        HttpRequest {
            method: options.method,
            url: self.config.url(endpoint),
            headers,
            body: options.body,
        }
    }

    /// Execute a request and normalize the response.
    pub async fn request<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        let request = self.build_request(endpoint, options);
        match self.round_trip(request).await {
            Ok(response) => normalize_response(response),
            Err(error) => ApiResult::failure(error, NETWORK_FAILURE_STATUS),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(endpoint, RequestOptions::new(HttpMethod::Get)).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        match RequestOptions::json(HttpMethod::Post, body) {
            Ok(options) => self.request(endpoint, options).await,
            Err(error) => ApiResult::failure(error, ENCODE_FAILURE_STATUS),
        }
    }

    /// POST with no body at all.
    pub async fn post_empty<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(endpoint, RequestOptions::new(HttpMethod::Post)).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> ApiResult<T> {
        match RequestOptions::json(HttpMethod::Put, body) {
            Ok(options) => self.request(endpoint, options).await,
            Err(error) => ApiResult::failure(error, ENCODE_FAILURE_STATUS),
        }
    }

    /// PUT with no body, for state transitions addressed by path alone.
    pub async fn put_empty<T: DeserializeOwned>(&self, endpoint: &str) -> ApiResult<T> {
        self.request(endpoint, RequestOptions::new(HttpMethod::Put)).await
    }

    /// DELETE never carries a payload back. A 404 counts as success (status
    /// kept) so retrying a delete does not turn into a new failure.
    pub async fn delete(&self, endpoint: &str) -> ApiResult<()> {
        let result = self
            .request::<serde::de::IgnoredAny>(endpoint, RequestOptions::new(HttpMethod::Delete))
            .await;
        match result {
            ApiResult::Success { status, .. } => ApiResult::empty(status),
            ApiResult::Failure { status: 404, .. } => {
                debug!(endpoint, "delete target already gone");
                ApiResult::empty(404)
            }
            ApiResult::Failure { error, status } => ApiResult::failure(error, status),
        }
    }

    /// Multipart POST: `file` part plus each flat field, in order. No JSON
    /// content type is set; the transport supplies the boundary.
    pub async fn upload_file<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        file: FilePart,
        fields: Vec<(String, String)>,
    ) -> ApiResult<T> {
        if let Err(reason) = file.check_content_type() {
            warn!(endpoint, %reason, "upload rejected before sending");
            return ApiResult::failure(ApiError::Encode(reason), ENCODE_FAILURE_STATUS);
        }
        let options = RequestOptions {
            method: HttpMethod::Post,
            body: Some(RequestBody::Multipart(MultipartForm { file, fields })),
            headers: Vec::new(),
        };
        self.request(endpoint, options).await
    }

    /// Raw binary GET; the body is returned untouched on success.
    pub async fn download(&self, endpoint: &str) -> ApiResult<Bytes> {
        let request = self.build_request(endpoint, RequestOptions::new(HttpMethod::Get));
        match self.round_trip(request).await {
            Ok(response) if response.status == 401 => ApiResult::failure(
                ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()),
                401,
            ),
            Ok(response) if !response.is_success() => ApiResult::failure(
                ApiError::from_status(response.status, DOWNLOAD_ERROR_MESSAGE),
                response.status,
            ),
            Ok(response) => ApiResult::success(response.body, response.status),
            Err(error) => ApiResult::failure(error, NETWORK_FAILURE_STATUS),
        }
    }

    async fn round_trip(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method.as_str();
        let url = request.url.clone();
        debug!(method, url = %url, "sending request");

        let response = self.transport.execute(request).await.map_err(|e| {
            error!(method, url = %url, error = %e, "API request failed");
            ApiError::Network
        })?;

        debug!(method, url = %url, status = response.status, "received response");
        if response.status == 401 {
            self.session.clear();
            self.redirect.redirect_to_login(&self.config.login_route);
        }
        Ok(response)
    }
}

/// Turn a raw response into an `ApiResult`.
///
/// - 401 → `Unauthorized("Unauthorized")`
/// - other non-2xx → the body's `message` field, or `HTTP error <status>`
/// - 204 or an empty body → success without payload
/// - otherwise the body must decode into `T`
pub fn normalize_response<T: DeserializeOwned>(response: HttpResponse) -> ApiResult<T> {
    let status = response.status;

    if status == 401 {
        return ApiResult::failure(ApiError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string()), 401);
    }

    if !response.is_success() {
        let message = serde_json::from_slice::<ErrorBody>(&response.body)
            .ok()
            .and_then(|b| b.message)
            .unwrap_or_else(|| format!("HTTP error {status}"));
        return ApiResult::failure(ApiError::from_status(status, message), status);
    }

    if status == 204 || response.body.iter().all(u8::is_ascii_whitespace) {
        return ApiResult::empty(status);
    }

    match serde_json::from_slice(&response.body) {
        Ok(payload) => ApiResult::success(payload, status),
        Err(e) => {
            error!(status, error = %e, "response body did not match the expected shape");
            ApiResult::failure(ApiError::Decode(e.to_string()), NETWORK_FAILURE_STATUS)
        }
    }
}
