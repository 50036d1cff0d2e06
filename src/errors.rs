// ============================================================================
// ERRORES DE AUTENTICACIÓN
// ============================================================================
// Los mensajes de Display son los únicos que llegan al usuario; el detalle
// técnico queda en los campos (Debug) para la consola.
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Rechazo de credenciales: el backend respondió pero no aceptó el login.
    /// El SessionStore no se toca.
    #[error("{0}")]
    Identifiants(String),

    /// Fallo de transporte: red caída o endpoint inaccesible.
    /// El SessionStore no se toca.
    #[error("Erreur de connexion")]
    Connexion(String),

    /// El backend rechazó el token (401). Cuando este error llega al caller,
    /// el gateway ya limpió la sesión y redirigió al login.
    #[error("Session expirée. Veuillez vous reconnecter.")]
    SessionExpiree,

    /// Respuesta HTTP de error que no es de autenticación
    #[error("Erreur HTTP {0}")]
    Http(u16),
}

impl AuthError {
    pub fn identifiants_par_defaut() -> Self {
        AuthError::Identifiants("Email ou mot de passe incorrect".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mensajes_visibles_en_frances() {
        assert_eq!(
            AuthError::identifiants_par_defaut().to_string(),
            "Email ou mot de passe incorrect"
        );
        assert_eq!(
            AuthError::Connexion("dns".to_string()).to_string(),
            "Erreur de connexion"
        );
        assert_eq!(
            AuthError::SessionExpiree.to_string(),
            "Session expirée. Veuillez vous reconnecter."
        );
    }
}
