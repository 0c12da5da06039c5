use std::sync::Arc;

use crate::config::ServerConfig;

/// State shared by every handler through `State<AppState>`.
///
/// Cloning is cheap: the pool is reference-counted internally and the
/// config sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub pool: plantpulse_db::DbPool,
    pub config: Arc<ServerConfig>,
}
