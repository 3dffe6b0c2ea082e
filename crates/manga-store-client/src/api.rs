use std::rc::Rc;

use manga_store_lib::error::Error;
use manga_store_lib::input::clamp_score;
use manga_store_lib::models::{
    Credentials, ErrorBody, Manga, MessageResponse, PurchaseRequest, RateRequest, SearchRequest,
    User,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::session::Session;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Transport};

/// Typed access to the store API. Every call goes through the same
/// transport, and so the same session.
pub struct Api<T: Transport> {
    transport: T,
    session: Rc<Session>,
}

impl Api<HttpTransport> {
    /// Api over http with a fresh session
    pub fn http(config: ClientConfig) -> Result<Self, Error> {
        let session = Session::new();
        let transport = HttpTransport::new(config, &session)?;
        Ok(Self::new(transport, session))
    }
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T, session: Rc<Session>) -> Self {
        Self { transport, session }
    }

    pub fn session(&self) -> &Rc<Session> {
        &self.session
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<(), Error> {
        self.execute(ApiRequest::post("/auth/login").json(to_json(credentials)?))
            .await?;
        self.session.begin();
        Ok(())
    }

    pub async fn register(&self, credentials: &Credentials) -> Result<(), Error> {
        self.execute(ApiRequest::post("/auth/register").json(to_json(credentials)?))
            .await?;
        Ok(())
    }

    /// The session is dropped on the client side even when the server
    /// rejects the logout.
    pub async fn logout(&self) -> Result<(), Error> {
        let result = self.execute(ApiRequest::post("/auth/logout")).await;
        self.session.end();
        result.map(|_| ())
    }

    pub async fn popular_manga(&self) -> Result<Vec<Manga>, Error> {
        self.fetch_list(ApiRequest::get("/manga/popular")).await
    }

    pub async fn recommendations_by_preferences(&self) -> Result<Vec<Manga>, Error> {
        self.fetch_list(ApiRequest::get("/user/recs/preferences")).await
    }

    pub async fn recommendations_by_similar_users(&self) -> Result<Vec<Manga>, Error> {
        self.fetch_list(ApiRequest::get("/user/recs/similar_users")).await
    }

    pub async fn newest_manga(&self) -> Result<Vec<Manga>, Error> {
        self.fetch_list(ApiRequest::get("/manga")).await
    }

    pub async fn manga(&self, id: &str) -> Result<Manga, Error> {
        self.fetch(ApiRequest::get(format!("/manga/{id}"))).await
    }

    pub async fn purchase(&self, manga_id: &str) -> Result<MessageResponse, Error> {
        let body = PurchaseRequest {
            manga_id: manga_id.to_string(),
        };
        self.fetch(ApiRequest::post("/manga/purchase").json(to_json(&body)?))
            .await
    }

    /// Score is clamped into the accepted range before it is sent
    pub async fn rate(&self, manga_id: &str, score: f64) -> Result<MessageResponse, Error> {
        let body = RateRequest {
            score: clamp_score(score),
        };
        self.fetch(ApiRequest::post(format!("/manga/{manga_id}/rate")).json(to_json(&body)?))
            .await
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<Manga>, Error> {
        self.fetch_list(ApiRequest::post("/manga/search").json(to_json(request)?))
            .await
    }

    pub async fn user(&self) -> Result<User, Error> {
        self.fetch(ApiRequest::get("/user")).await
    }

    async fn fetch<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R, Error> {
        let response = self.execute(request).await?;
        serde_json::from_str(&response.body).map_err(|e| Error::Decode(e.to_string()))
    }

    /// A `null` body is an empty list
    async fn fetch_list<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<Vec<R>, Error> {
        let list: Option<Vec<R>> = self.fetch(request).await?;
        Ok(list.unwrap_or_default())
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, Error> {
        let method = request.method.clone();
        let path = request.path.clone();
        debug!("{method} {path}");

        let response = match self.transport.send(request).await {
            Ok(response) => response,
            Err(e) => {
                warn!("{method} {path} failed: {e}");
                return Err(e);
            }
        };

        if response.is_success() {
            Ok(response)
        } else {
            let e = server_error(response);
            warn!("{method} {path} failed: {e}");
            Err(e)
        }
    }
}

fn to_json<B: Serialize>(body: &B) -> Result<serde_json::Value, Error> {
    serde_json::to_value(body).map_err(|e| Error::InvalidInput(e.to_string()))
}

fn server_error(response: ApiResponse) -> Error {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(ErrorBody::into_message)
        .unwrap_or_else(|| format!("Request failed with status code {}", response.status));

    Error::Server {
        status: response.status,
        message,
    }
}

#[cfg(test)]
mod test {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::testing::{MockTransport, mock_api};

    #[tokio::test]
    async fn test_login_sends_credentials_and_starts_session() {
        let api = mock_api(MockTransport::new().on(
            Method::POST,
            "/auth/login",
            200,
            json!({"message": "Logged in successfully"}),
        ));

        api.login(&Credentials::new("reader@example.com", "12345678"))
            .await
            .unwrap();

        assert!(api.session().is_active());
        let request = api.transport().request(Method::POST, "/auth/login").unwrap();
        assert_eq!(
            request.body,
            Some(json!({"email": "reader@example.com", "password": "12345678"}))
        );
    }

    #[tokio::test]
    async fn test_server_error_message_is_surfaced() {
        let api = mock_api(MockTransport::new().on(
            Method::POST,
            "/auth/login",
            401,
            json!({"error": "Invalid email or password"}),
        ));

        let err = api
            .login(&Credentials::new("reader@example.com", "wrong"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            Error::Server {
                status: 401,
                message: "Invalid email or password".to_string()
            }
        );
        assert!(!api.session().is_active());
    }

    #[tokio::test]
    async fn test_server_error_without_body() {
        let api = mock_api(MockTransport::new().on_text(Method::GET, "/user", 502, "Bad Gateway"));

        let err = api.user().await.unwrap_err();

        assert_eq!(err.status(), Some(502));
        assert_eq!(err.to_string(), "Request failed with status code 502");
    }

    #[tokio::test]
    async fn test_transport_error_propagates_unmodified() {
        let api = mock_api(MockTransport::new().fail(
            Method::GET,
            "/manga/popular",
            Error::Transport("connection refused".to_string()),
        ));

        let err = api.popular_manga().await.unwrap_err();

        assert_eq!(err, Error::Transport("connection refused".to_string()));
        assert_eq!(api.transport().requests().len(), 1);
    }

    #[tokio::test]
    async fn test_decode_error() {
        let api = mock_api(MockTransport::new().on(Method::GET, "/manga/1", 200, json!([1, 2])));

        let err = api.manga("1").await.unwrap_err();

        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_rate_clamps_score() {
        let api = mock_api(MockTransport::new().on(
            Method::POST,
            "/manga/42/rate",
            200,
            json!({"message": "Manga rated successfully"}),
        ));

        let response = api.rate("42", 7.0).await.unwrap();

        assert_eq!(response.message, "Manga rated successfully");
        let request = api.transport().request(Method::POST, "/manga/42/rate").unwrap();
        assert_eq!(request.body, Some(json!({"score": 5.0})));
    }

    #[tokio::test]
    async fn test_purchase_body() {
        let api = mock_api(MockTransport::new().on(
            Method::POST,
            "/manga/purchase",
            200,
            json!({"message": "Purchase successful"}),
        ));

        let response = api.purchase("42").await.unwrap();

        assert_eq!(response.message, "Purchase successful");
        let request = api.transport().request(Method::POST, "/manga/purchase").unwrap();
        assert_eq!(request.body, Some(json!({"mangaId": "42"})));
    }

    #[tokio::test]
    async fn test_search_body() {
        let api = mock_api(MockTransport::new().on(
            Method::POST,
            "/manga/search",
            200,
            json!([{"id": "1", "title": "Monster"}]),
        ));

        let result = api
            .search(&SearchRequest {
                query: "mon".to_string(),
                genres: vec!["Thriller".to_string()],
                author: "Urasawa".to_string(),
                limit: 5,
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        let request = api.transport().request(Method::POST, "/manga/search").unwrap();
        assert_eq!(
            request.body,
            Some(json!({"query": "mon", "genres": ["Thriller"], "author": "Urasawa", "limit": 5}))
        );
    }

    #[tokio::test]
    async fn test_logout_ends_session_even_on_failure() {
        let api = mock_api(MockTransport::new().on(
            Method::POST,
            "/auth/logout",
            500,
            json!({"error": "Failed to log out"}),
        ));
        api.session().begin();

        let err = api.logout().await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to log out");
        assert!(!api.session().is_active());
        let request = api.transport().request(Method::POST, "/auth/logout").unwrap();
        assert_eq!(request.body, None);
    }
}
