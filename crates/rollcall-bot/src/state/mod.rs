//! Application state
//!
//! Holds the shared state for the Axum application: the service
//! context, configuration, the Bot API client, and pending admin
//! sessions.

use std::sync::Arc;

use rollcall_common::AppConfig;
use rollcall_service::ServiceContext;

use crate::sessions::AdminSessionStore;
use crate::telegram::TelegramClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Telegram Bot API client
    telegram: Arc<TelegramClient>,
    /// Pending admin interactions (capacity prompts, vote overrides)
    sessions: Arc<AdminSessionStore>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: ServiceContext,
        config: AppConfig,
        telegram: Arc<TelegramClient>,
    ) -> Self {
        Self {
            service_context: Arc::new(service_context),
            config: Arc::new(config),
            telegram,
            sessions: Arc::new(AdminSessionStore::new()),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the Bot API client
    pub fn telegram(&self) -> &TelegramClient {
        &self.telegram
    }

    /// Get the admin session store
    pub fn sessions(&self) -> &AdminSessionStore {
        &self.sessions
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("telegram", &"TelegramClient")
            .finish()
    }
}
