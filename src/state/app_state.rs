// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::config::AppConfig;
use crate::state::AuthState;

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthState,
    pub config: AppConfig,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            auth: AuthState::new(),
            config: AppConfig::default(),
        }
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            auth: AuthState::new(),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
