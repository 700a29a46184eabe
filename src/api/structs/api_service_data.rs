//! Shared data context for API request handlers.

use crate::config::structs::api_server_config::ApiServerConfig;
use crate::tracker::structs::game_tracker::GameTracker;
use std::sync::Arc;

/// Shared application data available to all API request handlers.
///
/// This struct is injected into Actix-web's application data and provides
/// request handlers with access to the tracker instance and the
/// configuration of the listener that received the request.
///
/// # Thread Safety
///
/// Both fields are wrapped in `Arc` for safe sharing across multiple
/// worker threads in the Actix-web runtime.
#[derive(Debug)]
pub struct ApiServiceData {
    /// Reference to the main tracker instance.
    pub game_tracker: Arc<GameTracker>,

    /// Configuration for this API server instance.
    pub api_server_config: Arc<ApiServerConfig>,
}
