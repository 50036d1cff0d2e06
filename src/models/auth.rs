use serde::{Deserialize, Serialize};

/// Cuerpo del POST /login/
#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub mot_de_passe: String,
}

/// Respuesta del backend al login. Todos los campos de identidad son
/// opcionales en el wire: la validación de completitud ocurre en el
/// Authenticator, nunca construyendo una sesión parcial.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<ApiUser>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ApiUser {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nom: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Respuesta de GET /me/ (vista de perfil)
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct MeResponse {
    pub success: bool,
    #[serde(default)]
    pub user: Option<ApiUser>,
}
