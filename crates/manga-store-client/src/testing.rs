use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use manga_store_lib::error::Error;
use reqwest::Method;
use serde_json::Value;

use crate::api::Api;
use crate::navigation::Navigator;
use crate::route::Route;
use crate::session::Session;
use crate::transport::{ApiRequest, ApiResponse, Transport};

/// Transport answering from a fixed table and recording every request
#[derive(Default)]
pub struct MockTransport {
    responses: HashMap<String, Result<ApiResponse, Error>>,
    requests: RefCell<Vec<ApiRequest>>,
}

fn key(method: &Method, path: &str) -> String {
    format!("{method} {path}")
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, method: Method, path: &str, status: u16, body: Value) -> Self {
        self.on_text(method, path, status, &body.to_string())
    }

    pub fn on_text(mut self, method: Method, path: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            key(&method, path),
            Ok(ApiResponse {
                status,
                body: body.to_string(),
            }),
        );
        self
    }

    pub fn fail(mut self, method: Method, path: &str, error: Error) -> Self {
        self.responses.insert(key(&method, path), Err(error));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn request(&self, method: Method, path: &str) -> Option<ApiRequest> {
        self.requests
            .borrow()
            .iter()
            .find(|request| request.method == method && request.path == path)
            .cloned()
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        // behave like a network call and let other futures run
        tokio::task::yield_now().await;

        let response = self
            .responses
            .get(&key(&request.method, &request.path))
            .cloned()
            .unwrap_or_else(|| {
                Ok(ApiResponse {
                    status: 404,
                    body: r#"{"error":"Not Found"}"#.to_string(),
                })
            });
        self.requests.borrow_mut().push(request);
        response
    }
}

pub fn mock_api(transport: MockTransport) -> Api<MockTransport> {
    Api::new(transport, Session::new())
}

#[derive(Default)]
pub struct RecordingNavigator {
    visited: RefCell<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn visited(&self) -> Vec<Route> {
        self.visited.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to(&self, route: &Route) {
        self.visited.borrow_mut().push(route.clone());
    }
}
