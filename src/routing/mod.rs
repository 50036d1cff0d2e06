// ============================================================================
// ROUTING - rutas hash + guard de acceso
// ============================================================================

pub mod guard;
pub mod routes;

pub use guard::*;
pub use routes::*;

/// Navegar cambiando el hash. El listener global de hashchange hace pasar la
/// nueva ruta por el guard; si el hash ya es el pedido no se re-dispara nada
/// y el render queda en manos del caller.
pub fn navigate(route: Route) {
    if let Some(win) = web_sys::window() {
        let location = win.location();
        let current = location.hash().unwrap_or_default();
        if current == route.hash() {
            return;
        }
        if let Err(e) = location.set_hash(route.hash()) {
            log::error!("❌ Error navegando a {:?}: {:?}", route, e);
        }
    }
}

/// Ruta correspondiente al hash actual de la barra de direcciones
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::from_hash(&hash))
        .unwrap_or(Route::Login)
}
