// ============================================================================
// AUTHENTICATOR - único componente que crea o destruye la sesión
// ============================================================================

use chrono::Utc;

use crate::errors::AuthError;
use crate::models::{LoginRequest, LoginResponse, Role, Session, UserProfile};
use crate::services::{HttpGateway, SessionStore};

#[derive(Clone)]
pub struct AuthService {
    store: SessionStore,
    http: HttpGateway,
}

impl AuthService {
    pub fn new(store: SessionStore, http: HttpGateway) -> Self {
        Self { store, http }
    }

    /// Login contra el backend. En caso de éxito la sesión queda persistida
    /// en el store; en caso de rechazo o fallo de red el store NO se toca.
    pub async fn login(&self, email: &str, mot_de_passe: &str) -> Result<Session, AuthError> {
        log::info!("🔐 [AUTH] Tentative de connexion: {}", email);

        let body = LoginRequest {
            email: email.to_string(),
            mot_de_passe: mot_de_passe.to_string(),
        };
        let response: LoginResponse = self.http.post_json("/login/", &body).await?;

        let session = build_session(response)?;
        self.store.save(&session);
        log::info!(
            "✅ [AUTH] Connexion réussie: {} ({})",
            session.user.nom,
            session.user.role
        );
        Ok(session)
    }

    /// Logout local: sin red, siempre tiene éxito, idempotente
    pub fn logout(&self) {
        self.store.clear();
        log::info!("👋 [AUTH] Logout");
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.load().is_some()
    }

    /// Detecta datos de sesión corruptos o manipulados
    pub fn is_valid_role(role: &str) -> bool {
        Role::parse(role).is_some()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }
}

/// Validación pura de la respuesta de login. Una respuesta con campos de
/// identidad faltantes es un fallo, nunca una sesión parcial.
fn build_session(response: LoginResponse) -> Result<Session, AuthError> {
    if !response.success {
        return Err(match response.message {
            Some(message) if !message.is_empty() => AuthError::Identifiants(message),
            _ => AuthError::identifiants_par_defaut(),
        });
    }

    let user = response.user.ok_or_else(AuthError::identifiants_par_defaut)?;
    let id = user.id.ok_or_else(AuthError::identifiants_par_defaut)?;
    let email = user
        .email
        .filter(|e| !e.is_empty())
        .ok_or_else(AuthError::identifiants_par_defaut)?;
    let role = user
        .role
        .filter(|r| Role::parse(r).is_some())
        .ok_or_else(AuthError::identifiants_par_defaut)?;
    let token = response
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(AuthError::identifiants_par_defaut)?;

    // El nombre cae al email si el backend no lo manda, como el resto de la
    // identidad es obligatoria
    let nom = user.nom.filter(|n| !n.is_empty()).unwrap_or_else(|| email.clone());

    Ok(Session {
        user: UserProfile {
            id,
            nom,
            email,
            role,
            photo_url: user.photo_url,
            saved_at: Utc::now(),
        },
        token,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> LoginResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn respuesta_completa_construye_la_sesion() {
        let response = parse(
            r#"{"success":true,"user":{"id":1,"nom":"A","email":"a@b.com","role":"EMPLOYE"},"token":"T"}"#,
        );
        let session = build_session(response).unwrap();
        assert_eq!(session.user.id, 1);
        assert_eq!(session.user.nom, "A");
        assert_eq!(session.user.email, "a@b.com");
        assert_eq!(session.role(), Some(Role::Employe));
        assert_eq!(session.token, "T");
    }

    #[test]
    fn rechazo_del_backend_conserva_su_mensaje() {
        let response = parse(r#"{"success":false,"message":"Compte désactivé"}"#);
        assert_eq!(
            build_session(response),
            Err(AuthError::Identifiants("Compte désactivé".to_string()))
        );
    }

    #[test]
    fn rechazo_sin_mensaje_usa_el_texto_por_defecto() {
        let response = parse(r#"{"success":false}"#);
        assert_eq!(
            build_session(response),
            Err(AuthError::identifiants_par_defaut())
        );
    }

    #[test]
    fn exito_sin_usuario_es_un_fallo() {
        let response = parse(r#"{"success":true,"token":"T"}"#);
        assert!(build_session(response).is_err());
    }

    #[test]
    fn exito_sin_token_es_un_fallo() {
        let response = parse(
            r#"{"success":true,"user":{"id":1,"nom":"A","email":"a@b.com","role":"EMPLOYE"}}"#,
        );
        assert!(build_session(response).is_err());
    }

    #[test]
    fn campos_de_identidad_faltantes_nunca_dan_sesion_parcial() {
        // Sin id
        let response = parse(
            r#"{"success":true,"user":{"nom":"A","email":"a@b.com","role":"EMPLOYE"},"token":"T"}"#,
        );
        assert!(build_session(response).is_err());
        // Sin email
        let response =
            parse(r#"{"success":true,"user":{"id":1,"nom":"A","role":"EMPLOYE"},"token":"T"}"#);
        assert!(build_session(response).is_err());
        // Sin rol
        let response =
            parse(r#"{"success":true,"user":{"id":1,"nom":"A","email":"a@b.com"},"token":"T"}"#);
        assert!(build_session(response).is_err());
    }

    #[test]
    fn rol_desconocido_en_la_respuesta_es_un_fallo() {
        let response = parse(
            r#"{"success":true,"user":{"id":1,"nom":"A","email":"a@b.com","role":"SUPERUSER"},"token":"T"}"#,
        );
        assert!(build_session(response).is_err());
    }

    #[test]
    fn nom_ausente_cae_al_email() {
        let response = parse(
            r#"{"success":true,"user":{"id":7,"email":"a@b.com","role":"ADMIN"},"token":"T"}"#,
        );
        let session = build_session(response).unwrap();
        assert_eq!(session.user.nom, "a@b.com");
    }
}
