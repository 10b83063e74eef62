use std::sync::Arc;

use crate::config::ServerConfig;
use crate::responder::ApiResponder;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). Handlers format
/// responses through its [`ApiResponder`] methods.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl ApiResponder for AppState {}
