//! Scripted in-memory transport for unit tests

use super::{HttpRequest, Session, Transport};
use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::Bytes;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replays queued responses and records every request it receives
#[derive(Default)]
pub(crate) struct ScriptedTransport {
    responses: Mutex<VecDeque<Result<Bytes>>>,
    requests: Mutex<Vec<HttpRequest>>,
    session: Session,
}

impl ScriptedTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a successful JSON body
    pub(crate) fn respond(self, body: serde_json::Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(Bytes::from(body.to_string())));
        self
    }

    /// Queue a raw body
    pub(crate) fn respond_raw(self, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(Bytes::from(body.to_string())));
        self
    }

    /// Queue a failure
    pub(crate) fn fail(self, error: Error) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: &HttpRequest) -> Result<Bytes> {
        self.requests.lock().unwrap().push(request.clone());
        let next = self.responses.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(Error::http_status(599, "no scripted response")))
    }

    fn session(&self) -> &Session {
        &self.session
    }
}
