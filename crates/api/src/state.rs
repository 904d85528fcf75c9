use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is the only channel through which handlers reach their
/// collaborators; there is no process-wide registry. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: taskline_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
