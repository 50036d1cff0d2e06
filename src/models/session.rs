// ============================================================================
// SESIÓN - identidad autenticada del navegador
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Perfil de usuario tal como se persiste bajo la clave de usuario.
/// El rol se guarda como string: un valor manipulado debe sobrevivir a la
/// deserialización para que el guard lo detecte y fuerce el logout, en vez
/// de degradar silenciosamente a "sesión ausente".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub nom: String,
    pub email: String,
    pub role: String,
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Sello del momento en que se persistió el perfil
    pub saved_at: DateTime<Utc>,
}

/// Sesión completa: o está entera (perfil + token) o está ausente.
/// Propiedad exclusiva del SessionStore; el resto de componentes solo
/// leen/limpian a través de él.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user: UserProfile,
    pub token: String,
}

impl Session {
    /// Rol validado; None = sesión manipulada o corrupta
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.user.role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(role: &str) -> UserProfile {
        UserProfile {
            id: 1,
            nom: "A".to_string(),
            email: "a@b.com".to_string(),
            role: role.to_string(),
            photo_url: None,
            saved_at: Utc::now(),
        }
    }

    #[test]
    fn role_valida_el_string_almacenado() {
        let session = Session { user: profile("EMPLOYE"), token: "T".to_string() };
        assert_eq!(session.role(), Some(Role::Employe));

        let tampered = Session { user: profile("SUPERUSER"), token: "T".to_string() };
        assert_eq!(tampered.role(), None);
    }

    #[test]
    fn perfil_sin_photo_url_deserializa() {
        let json = r#"{"id":1,"nom":"A","email":"a@b.com","role":"ADMIN","saved_at":"2026-01-01T00:00:00Z"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.photo_url, None);
        assert_eq!(profile.role, "ADMIN");
    }
}
