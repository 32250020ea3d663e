use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
/// Rendering is stateless; only configuration is shared.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
