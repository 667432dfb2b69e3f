//! Scripted transport and redirect recorder for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use crate::client::{ApiClient, LoginRedirect};
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

pub const TEST_BASE_URL: &str = "http://rh.test/api";

#[derive(Debug, Clone)]
pub enum Reply {
    Response(HttpResponse),
    Refused(String),
}

impl Reply {
    pub fn status(status: u16) -> Self {
        Reply::Response(HttpResponse::new(status, Bytes::new()))
    }

    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Reply::Response(HttpResponse::new(status, body.to_string()))
    }

    pub fn text(status: u16, body: &str) -> Self {
        Reply::Response(HttpResponse::new(status, body.to_string()))
    }

    pub fn bytes(status: u16, body: Vec<u8>) -> Self {
        Reply::Response(HttpResponse::new(status, body))
    }

    pub fn refused(reason: &str) -> Self {
        Reply::Refused(reason.to_string())
    }
}

/// Requests seen by a `ScriptedTransport`, shared with the test body.
#[derive(Debug, Clone, Default)]
pub struct RequestLog(Arc<Mutex<Vec<HttpRequest>>>);

impl RequestLog {
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.0.lock().unwrap().clone()
    }
}

/// Replies keyed by method and endpoint (URL minus the base). Replies queued
/// for the same key are served in order; the last one repeats.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    routes: Mutex<HashMap<(HttpMethod, String), VecDeque<Reply>>>,
    log: RequestLog,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, method: HttpMethod, endpoint: &str, reply: Reply) -> Self {
        self.routes
            .lock()
            .unwrap()
            .entry((method, endpoint.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn log(&self) -> RequestLog {
        self.log.clone()
    }
}

#[async_trait]
impl crate::transport::Transport for ScriptedTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let endpoint = request
            .url
            .strip_prefix(TEST_BASE_URL)
            .unwrap_or(&request.url)
            .to_string();
        let key = (request.method, endpoint);
        self.log.0.lock().unwrap().push(request);

        let reply = {
            let mut routes = self.routes.lock().unwrap();
            match routes.get_mut(&key) {
                Some(queue) if queue.len() > 1 => queue.pop_front(),
                Some(queue) => queue.front().cloned(),
                None => None,
            }
        };

        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Refused(reason)) => Err(TransportError::Connection(reason)),
            None => Ok(HttpResponse::new(
                404,
                format!(r#"{{"message":"unscripted {} {}"}}"#, key.0.as_str(), key.1),
            )),
        }
    }
}

/// Records every login redirect it receives.
#[derive(Debug, Clone, Default)]
pub struct CountingRedirect(Arc<Mutex<Vec<String>>>);

impl CountingRedirect {
    pub fn calls(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl LoginRedirect for CountingRedirect {
    fn redirect_to_login(&self, route: &str) {
        self.0.lock().unwrap().push(route.to_string());
    }
}

pub fn client_with(transport: ScriptedTransport) -> (ApiClient, CountingRedirect, RequestLog) {
    let redirect = CountingRedirect::default();
    let log = transport.log();
    let config = ClientConfig::new(TEST_BASE_URL).unwrap();
    let client = ApiClient::new(config)
        .with_transport(transport)
        .with_login_redirect(redirect.clone());
    (client, redirect, log)
}
