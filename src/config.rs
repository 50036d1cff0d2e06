use serde::{Deserialize, Serialize};

use crate::utils::API_URL;

/// Inactividad permitida por defecto antes del logout forzado (5 minutos)
pub const DEFAULT_INACTIVITY_TIMEOUT_MS: u32 = 300_000;

/// Configuración de la aplicación
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    /// Milisegundos de inactividad antes del logout forzado
    pub inactivity_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: API_URL.to_string(),
            inactivity_timeout_ms: DEFAULT_INACTIVITY_TIMEOUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_por_defecto_es_cinco_minutos() {
        let config = AppConfig::default();
        assert_eq!(config.inactivity_timeout_ms, 300_000);
    }
}
