// ============================================================================
// PORTAIL RH - FRONTEND MVVM ESTRICTO (RUST PURO)
// ============================================================================
// Arquitectura:
// - Views: Funciones que renderizan DOM (sin lógica)
// - Services: autenticación, persistencia de sesión, gateway HTTP, inactividad
// - Routing: guard de acceso por rol sobre rutas hash
// - State: State Management con Rc<RefCell>
// - Models: Rol, perfil, sesión y tipos de la API
// ============================================================================

mod app;
mod config;
mod dom;
mod errors;
mod models;
mod routing;
mod services;
mod state;
mod utils;
mod views;

pub use config::AppConfig;
pub use errors::AuthError;
pub use models::{Role, Session, UserProfile};
pub use routing::{check_access, AccessDecision, AuthStatus, Route};
pub use services::{AuthService, HttpGateway, InactivityMonitor, SessionStore};
pub use state::{AppState, AuthState};

use crate::app::App;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// Variable estática global para mantener la instancia de App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🚀 Portail RH - Rust puro + MVVM");

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    if let Some(win) = web_sys::window() {
        // Listener global de hashchange: cada navegación vuelve a pasar por el
        // guard de acceso. Solo se registra UNA VEZ en init(), por lo que
        // closure.forget() es seguro (ver InactivityMonitor para listeners que
        // se montan y desmontan).
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            rerender_app();
        }) as Box<dyn FnMut(web_sys::Event)>);
        win.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())?;
        closure.forget();

        // Listener de "sessionExpired": lo disparan el gateway HTTP (401) y el
        // monitor de inactividad; la vista de login muestra el aviso una vez.
        let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
            APP.with(|app_cell| {
                if let Some(ref app) = *app_cell.borrow() {
                    app.state().auth.set_expired(true);
                }
            });
        }) as Box<dyn FnMut(web_sys::Event)>);
        win.add_event_listener_with_callback("sessionExpired", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    Ok(())
}

/// Re-render completo: se invoca tras cada navegación (hashchange)
pub fn rerender_app() {
    APP.with(|app_cell| {
        if let Some(ref mut app) = *app_cell.borrow_mut() {
            if let Err(e) = app.render() {
                log::error!("❌ Error re-renderizando: {:?}", e);
            }
        }
    });
}

/// Señalizar expiración de sesión. Se emite como evento global para que
/// cualquier componente (gateway, monitor) pueda dispararlo sin conocer App.
pub fn notify_session_expired() {
    if let Some(win) = web_sys::window() {
        if let Ok(event) = web_sys::Event::new("sessionExpired") {
            let _ = win.dispatch_event(&event);
        }
    }
}
