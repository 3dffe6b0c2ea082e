use manga_store_lib::error::Error;
use manga_store_lib::input::{validate_email, validate_password};
use manga_store_lib::models::Credentials;

use crate::api::Api;
use crate::navigation::Navigator;
use crate::route::Route;
use crate::transport::Transport;

fn validate(credentials: &Credentials) -> Result<(), Error> {
    validate_email(&credentials.email)?;
    validate_password(&credentials.password)
}

/// Log in and go to the home feed
pub async fn login<T, N>(api: &Api<T>, navigator: &N, credentials: Credentials) -> Result<(), Error>
where
    T: Transport,
    N: Navigator + ?Sized,
{
    validate(&credentials)?;
    api.login(&credentials).await?;
    info!("logged in as {}", credentials.email);
    navigator.go_to(&Route::Home);
    Ok(())
}

/// Create an account and go to the login screen
pub async fn register<T, N>(
    api: &Api<T>,
    navigator: &N,
    credentials: Credentials,
) -> Result<(), Error>
where
    T: Transport,
    N: Navigator + ?Sized,
{
    validate(&credentials)?;
    api.register(&credentials).await?;
    info!("registered {}", credentials.email);
    navigator.go_to(&Route::Login);
    Ok(())
}

#[cfg(test)]
mod test {
    use reqwest::Method;
    use serde_json::json;

    use super::*;
    use crate::testing::{MockTransport, RecordingNavigator, mock_api};

    #[tokio::test]
    async fn test_login_navigates_home() {
        let api = mock_api(MockTransport::new().on(
            Method::POST,
            "/auth/login",
            200,
            json!({"message": "Logged in successfully"}),
        ));
        let navigator = RecordingNavigator::default();

        login(&api, &navigator, Credentials::new("reader@example.com", "12345678"))
            .await
            .unwrap();

        assert_eq!(navigator.visited(), vec![Route::Home]);
    }

    #[tokio::test]
    async fn test_login_failure_stays() {
        let api = mock_api(MockTransport::new().on(
            Method::POST,
            "/auth/login",
            401,
            json!({"error": "Invalid email or password"}),
        ));
        let navigator = RecordingNavigator::default();

        let err = login(&api, &navigator, Credentials::new("reader@example.com", "nope"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Invalid email or password");
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_input_sends_nothing() {
        let api = mock_api(MockTransport::new());
        let navigator = RecordingNavigator::default();

        let err = login(&api, &navigator, Credentials::new("reader", "12345678"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = register(&api, &navigator, Credentials::new("reader@example.com", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        assert!(api.transport().requests().is_empty());
        assert!(navigator.visited().is_empty());
    }

    #[tokio::test]
    async fn test_register_navigates_to_login() {
        let api = mock_api(MockTransport::new().on(
            Method::POST,
            "/auth/register",
            201,
            json!({"message": "User registered successfully"}),
        ));
        let navigator = RecordingNavigator::default();

        register(&api, &navigator, Credentials::new("new@example.com", "12345678"))
            .await
            .unwrap();

        assert_eq!(navigator.visited(), vec![Route::Login]);
        assert!(!api.session().is_active());
    }
}
