use registrar_core::{AppConfig, Registry};

/// Application state for one interactive session
///
/// Constructed once at startup and passed to the menu handlers; there is
/// no global state.
#[derive(Debug)]
pub struct Session {
    pub registry: Registry,
    pub config: AppConfig,
}

impl Session {
    /// Create a session with an empty registry
    pub fn new(config: AppConfig) -> Self {
        Self {
            registry: Registry::new(),
            config,
        }
    }
}
