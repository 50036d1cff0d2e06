// ============================================================================
// SESSION STORE - persistencia de la sesión (localStorage)
// ============================================================================
// Dos valores independientes: el perfil serializado y el token crudo.
// Se escriben y se limpian siempre juntos; "conectado" exige AMBOS.
// ============================================================================

use crate::models::{Session, UserProfile};
use crate::utils::{
    load_from_storage, load_raw, remove_from_storage, save_raw, save_to_storage,
    STORAGE_KEY_TOKEN, STORAGE_KEY_USER,
};

#[derive(Clone, Default)]
pub struct SessionStore;

impl SessionStore {
    pub fn new() -> Self {
        Self
    }

    /// Guardar la sesión, sobrescribiendo cualquier valor anterior.
    /// El fallo de storage se registra pero no se propaga: la sesión en
    /// memoria sigue siendo válida para la pestaña actual.
    pub fn save(&self, session: &Session) {
        if let Err(e) = save_to_storage(STORAGE_KEY_USER, &session.user) {
            log::error!("❌ Error guardando usuario en storage: {}", e);
        }
        if let Err(e) = save_raw(STORAGE_KEY_TOKEN, &session.token) {
            log::error!("❌ Error guardando token en storage: {}", e);
        }
        log::info!("💾 Sesión guardada para {}", session.user.email);
    }

    /// Cargar la sesión actual. Ausente si falta cualquiera de las dos claves
    /// o si el perfil no parsea: los datos corruptos se tratan exactamente
    /// igual que "nunca hubo login", jamás como error.
    pub fn load(&self) -> Option<Session> {
        let user: UserProfile = load_from_storage(STORAGE_KEY_USER)?;
        let token = load_raw(STORAGE_KEY_TOKEN)?;
        Some(Session { user, token })
    }

    /// Token crudo para el gateway HTTP
    pub fn load_token(&self) -> Option<String> {
        load_raw(STORAGE_KEY_TOKEN)
    }

    /// Limpiar ambas claves. Idempotente: limpiar un store ya vacío es un
    /// no-op (el monitor de inactividad y el gateway pueden dispararlo casi
    /// a la vez).
    pub fn clear(&self) {
        let _ = remove_from_storage(STORAGE_KEY_USER);
        let _ = remove_from_storage(STORAGE_KEY_TOKEN);
    }
}
