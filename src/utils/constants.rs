/// URL base del backend de cuentas
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:8000/api/accounts (por defecto)
/// - Producción: via API_URL env var (ver build.rs)
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:8000/api/accounts",
};

/// Claves de localStorage. Dos valores independientes (perfil serializado y
/// token crudo) que se guardan y se limpian SIEMPRE juntos.
pub const STORAGE_KEY_USER: &str = "hr_user";
pub const STORAGE_KEY_TOKEN: &str = "hr_access_token";
