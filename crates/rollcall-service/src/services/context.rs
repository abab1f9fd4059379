//! Service context - dependency container for services
//!
//! Holds the repositories and the admin gate needed by services.

use std::sync::Arc;

use rollcall_core::traits::{AdminGate, EventRepository, VoteRepository};
use rollcall_db::PgPool;

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The admin gate (chat admin lookup, provided by the transport layer)
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    event_repo: Arc<dyn EventRepository>,
    vote_repo: Arc<dyn VoteRepository>,

    admin_gate: Arc<dyn AdminGate>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: PgPool,
        event_repo: Arc<dyn EventRepository>,
        vote_repo: Arc<dyn VoteRepository>,
        admin_gate: Arc<dyn AdminGate>,
    ) -> Self {
        Self {
            pool,
            event_repo,
            vote_repo,
            admin_gate,
        }
    }

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the vote repository
    pub fn vote_repo(&self) -> &dyn VoteRepository {
        self.vote_repo.as_ref()
    }

    /// Get the admin gate
    pub fn admin_gate(&self) -> &dyn AdminGate {
        self.admin_gate.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("admin_gate", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    event_repo: Option<Arc<dyn EventRepository>>,
    vote_repo: Option<Arc<dyn VoteRepository>>,
    admin_gate: Option<Arc<dyn AdminGate>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            event_repo: None,
            vote_repo: None,
            admin_gate: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn vote_repo(mut self, repo: Arc<dyn VoteRepository>) -> Self {
        self.vote_repo = Some(repo);
        self
    }

    pub fn admin_gate(mut self, gate: Arc<dyn AdminGate>) -> Self {
        self.admin_gate = Some(gate);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.event_repo
                .ok_or_else(|| super::error::ServiceError::validation("event_repo is required"))?,
            self.vote_repo
                .ok_or_else(|| super::error::ServiceError::validation("vote_repo is required"))?,
            self.admin_gate
                .ok_or_else(|| super::error::ServiceError::validation("admin_gate is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
