use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, cookie::Jar};
use tracing::{debug, info};

use crate::types::{CurrentUser, SessionError};

/// Trait for session backends (HTTP transport, test mocks)
#[async_trait]
pub trait SessionClient: Send + Sync {
    /// The signed-in user, or `None` when no session is active.
    async fn current_user(&self) -> Result<Option<CurrentUser>, SessionError>;

    /// Ends the session server-side.
    ///
    /// Callers are responsible for the client-side half of the boundary:
    /// clearing every cached catalog/selection and reloading the view.
    async fn logout(&self) -> Result<(), SessionError>;
}

/// Configuration for the HTTP session client.
#[derive(Debug, Clone)]
pub struct HttpSessionConfig {
    /// Base URL of the session backend
    pub base_url: String,

    /// Request timeout (default: 30 seconds)
    pub timeout: Duration,
}

impl Default for HttpSessionConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Session client that talks to the backend with a cookie-holding client,
/// so the session cookie set at login rides along on every call.
pub struct HttpSessionClient {
    client: Client,
    config: HttpSessionConfig,
}

impl HttpSessionClient {
    /// Creates a new HTTP session client.
    pub fn new(config: Option<HttpSessionConfig>) -> Result<Self, SessionError> {
        let config = config.unwrap_or_default();

        // Cookie jar keeps the session cookie across calls
        let jar = Arc::new(Jar::default());

        let client = Client::builder()
            .cookie_provider(jar)
            .timeout(config.timeout)
            .build()
            .map_err(|e| SessionError::Network(format!("Failed to create session client: {}", e)))?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl SessionClient for HttpSessionClient {
    async fn current_user(&self) -> Result<Option<CurrentUser>, SessionError> {
        let url = format!("{}/api/auth/me", self.config.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SessionError::Network(format!("HTTP request failed: {}", e)))?;

        if response.status().as_u16() == 401 {
            debug!("No active session");
            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(SessionError::Api(format!("HTTP {}", response.status())));
        }

        let user: Option<CurrentUser> = response
            .json()
            .await
            .map_err(|e| SessionError::DataFormat(format!("Failed to parse user: {}", e)))?;

        Ok(user)
    }

    async fn logout(&self) -> Result<(), SessionError> {
        let url = format!("{}/api/auth/logout", self.config.base_url);

        let response = self
            .client
            .post(&url)
            .send()
            .await
            .map_err(|e| SessionError::Network(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(SessionError::Api(format!("HTTP {}", response.status())));
        }

        info!("Session ended");
        Ok(())
    }
}

/// Mock session client for development/testing
pub struct MockSessionClient {
    user: Mutex<Option<CurrentUser>>,
}

impl MockSessionClient {
    /// Creates a mock session for the given user (`None` = signed out).
    pub fn new(user: Option<CurrentUser>) -> Self {
        Self {
            user: Mutex::new(user),
        }
    }
}

#[async_trait]
impl SessionClient for MockSessionClient {
    async fn current_user(&self) -> Result<Option<CurrentUser>, SessionError> {
        Ok(self.user.lock().unwrap().clone())
    }

    async fn logout(&self) -> Result<(), SessionError> {
        info!("[MOCK SESSION] Logging out");
        *self.user.lock().unwrap() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;

    #[tokio::test]
    async fn mock_session_reports_and_clears_the_user() {
        let client = MockSessionClient::new(Some(CurrentUser {
            id: Uuid::new_v4(),
            email: "camper@example.com".to_string(),
        }));

        let user = client.current_user().await.unwrap();
        assert_eq!(user.unwrap().email, "camper@example.com");

        client.logout().await.unwrap();
        assert!(client.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn http_session_client_builds_with_defaults() {
        let client = HttpSessionClient::new(None);
        assert!(client.is_ok());
    }
}
