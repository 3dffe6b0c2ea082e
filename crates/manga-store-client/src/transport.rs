use std::rc::Rc;

use async_trait::async_trait;
use manga_store_lib::error::Error;
use reqwest::Method;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: Method::POST,
            path: path.into(),
            body: None,
        }
    }

    pub fn json(self, body: Value) -> Self {
        Self {
            body: Some(body),
            ..self
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues one request against the store API, exactly once.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error>;
}

pub struct HttpTransport {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: ClientConfig, session: &Rc<Session>) -> Result<Self, Error> {
        let builder = reqwest::Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.cookie_provider(session.cookie_store());
        #[cfg(target_arch = "wasm32")]
        let _ = session;

        let client = builder
            .build()
            .map_err(|e| Error::Transport(format!("error build http client: {e}")))?;

        Ok(Self { config, client })
    }
}

#[async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        let url = self.config.url(&request.path);
        let mut req = self.client.request(request.method, url);

        // the browser keeps the session cookie, it has to be told to send it
        #[cfg(target_arch = "wasm32")]
        {
            req = req.fetch_credentials_include();
        }

        if let Some(body) = &request.body {
            req = req.json(body);
        }

        let res = req
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;
        let status = res.status().as_u16();
        let body = res
            .text()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
