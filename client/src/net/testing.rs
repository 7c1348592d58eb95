//! In-memory transport that records requests and replays canned responses.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::error::ApiError;
use super::transport::{HttpRequest, HttpResponse, Method, Transport};

#[derive(Debug, Default)]
pub struct RecordingTransport {
    requests: RefCell<Vec<HttpRequest>>,
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response with `status` and raw `body`.
    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(HttpResponse { status, body: body.to_owned() }));
        self
    }

    /// Queue a transport-level failure.
    pub fn fail(self, err: ApiError) -> Self {
        self.responses.borrow_mut().push_back(Err(err));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn methods(&self) -> Vec<Method> {
        self.requests.borrow().iter().map(|r| r.method).collect()
    }

    /// JSON body of the request at `index`.
    pub fn body_json(&self, index: usize) -> serde_json::Value {
        let requests = self.requests.borrow();
        let body = requests[index].body.as_deref().expect("request has no body");
        serde_json::from_str(body).expect("body is not JSON")
    }
}

impl Transport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse { status: 200, body: "[]".to_owned() }))
    }
}
