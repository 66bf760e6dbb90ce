use std::sync::Arc;

use advisor_core::generation::TextGenerator;

use crate::config::ServerConfig;
use crate::views::Views;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// External text generator (Gemini in production, fakes in tests).
    pub generator: Arc<dyn TextGenerator>,
    /// Compiled HTML views.
    pub views: Arc<Views>,
}
