use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    pub manga_id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RateRequest {
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub genres: Vec<String>,
    pub author: String,
    pub limit: i64,
}

impl Default for SearchRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            genres: vec![],
            author: String::new(),
            limit: crate::input::DEFAULT_SEARCH_LIMIT,
        }
    }
}
