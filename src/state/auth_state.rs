// ============================================================================
// AUTH STATE - estado de autenticación en memoria (espejo del SessionStore)
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use crate::models::Session;

/// Estado de autenticación para la UI. La verdad persistida vive en el
/// SessionStore; esto solo refleja la última lectura y los flags de vista.
#[derive(Clone)]
pub struct AuthState {
    pub session: Rc<RefCell<Option<Session>>>,
    /// La sesión terminó de forma forzada (401 o inactividad); el login
    /// muestra el aviso una sola vez
    pub session_expired: Rc<RefCell<bool>>,
    pub login_error: Rc<RefCell<Option<String>>>,
    pub loading: Rc<RefCell<bool>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Rc::new(RefCell::new(None)),
            session_expired: Rc::new(RefCell::new(false)),
            login_error: Rc::new(RefCell::new(None)),
            loading: Rc::new(RefCell::new(false)),
        }
    }

    pub fn set_session(&self, session: Option<Session>) {
        *self.session.borrow_mut() = session;
    }

    pub fn get_session(&self) -> Option<Session> {
        self.session.borrow().clone()
    }

    pub fn set_expired(&self, expired: bool) {
        *self.session_expired.borrow_mut() = expired;
    }

    /// Consumir el flag de expiración (el aviso se muestra una sola vez)
    pub fn take_expired(&self) -> bool {
        self.session_expired.replace(false)
    }

    pub fn set_login_error(&self, error: Option<String>) {
        *self.login_error.borrow_mut() = error;
    }

    pub fn set_loading(&self, loading: bool) {
        *self.loading.borrow_mut() = loading;
    }

    /// Reset completo tras un logout
    pub fn reset(&self) {
        self.set_session(None);
        self.set_login_error(None);
        self.set_loading(false);
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_expired_consume_el_flag() {
        let state = AuthState::new();
        assert!(!state.take_expired());
        state.set_expired(true);
        assert!(state.take_expired());
        assert!(!state.take_expired());
    }
}
