//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers and posting webhook
//! updates.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use rollcall_bot::{create_app, create_app_state};
use rollcall_common::{
    AppConfig, AppSettings, DatabaseConfig, Environment, ServerConfig, TelegramConfig,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use crate::fixtures::TEST_WEBHOOK_SECRET;

/// Header Telegram sends the webhook secret in
pub const SECRET_HEADER: &str = "x-telegram-bot-api-secret-token";

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind to an ephemeral port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Wait for server to be ready
        tokio::time::sleep(Duration::from_millis(100)).await;

        // Create HTTP client
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// POST an update to the webhook with the correct secret header
    pub async fn post_update(&self, update: &serde_json::Value) -> Result<Response> {
        self.post_update_with_secret(update, TEST_WEBHOOK_SECRET).await
    }

    /// POST an update with an arbitrary secret header value
    pub async fn post_update_with_secret(
        &self,
        update: &serde_json::Value,
        secret: &str,
    ) -> Result<Response> {
        let url = format!("{}/telegram/webhook", self.base_url());
        Ok(self
            .client
            .post(&url)
            .header(SECRET_HEADER, secret)
            .json(update)
            .send()
            .await?)
    }

    /// POST an update without the secret header
    pub async fn post_update_unauthenticated(
        &self,
        update: &serde_json::Value,
    ) -> Result<Response> {
        let url = format!("{}/telegram/webhook", self.base_url());
        Ok(self.client.post(&url).json(update).send().await?)
    }
}

/// Create a test configuration.
///
/// The Bot API base points at a closed local port so outgoing calls
/// fail fast instead of reaching Telegram with a bogus token.
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL is required for integration tests"))?;

    Ok(AppConfig {
        app: AppSettings {
            name: "rollcall-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: database_url,
            max_connections: 5,
            min_connections: 1,
        },
        telegram: TelegramConfig {
            bot_token: "000000:integration-test".to_string(),
            webhook_secret: TEST_WEBHOOK_SECRET.to_string(),
            api_base: "http://127.0.0.1:9".to_string(),
        },
    })
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }
    true
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
