// ============================================================================
// APP - Aplicación principal
// ============================================================================
// Cada navegación (carga inicial y cada hashchange) relee la sesión del
// store, pasa por el guard de acceso y pinta SOLO la vista permitida. La
// vista pedida no se monta nunca cuando la decisión es redirigir.
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_inner_html, ElementBuilder};
use crate::models::Session;
use crate::routing::{self, check_access, AccessDecision, Route};
use crate::services::{AuthService, HttpGateway, InactivityMonitor, SessionStore};
use crate::state::AppState;
use crate::views;

pub struct App {
    state: AppState,
    store: SessionStore,
    auth: AuthService,
    http: HttpGateway,
    root: Element,
    /// Como mucho UNA instancia viva: se monta con la primera vista protegida
    /// y se desmonta (Drop) al volver al login
    inactivity: Option<InactivityMonitor>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let store = SessionStore::new();
        let http = HttpGateway::new(store.clone());
        let auth = AuthService::new(store.clone(), http.clone());
        let state = AppState::new();

        // Restaurar la sesión persistida si existe (se revalida en render)
        if let Some(session) = store.load() {
            log::info!("💾 [APP] Sesión encontrada en storage: {}", session.user.email);
            state.auth.set_session(Some(session));
        }

        Ok(Self {
            state,
            store,
            auth,
            http,
            root,
            inactivity: None,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Evaluar el guard para el hash actual y pintar la vista permitida
    pub fn render(&mut self) -> Result<(), JsValue> {
        let route = routing::current_route();
        let session = self.store.load();
        self.state.auth.set_session(session.clone());

        match check_access(session.as_ref(), route) {
            AccessDecision::Render(route) => self.draw(route, session),
            AccessDecision::RedirectLogin { purge } => {
                if purge {
                    log::warn!("⚠️ [GUARD] Rol inválido en la sesión almacenada, logout forzado");
                    self.auth.logout();
                    self.state.auth.reset();
                }
                if route == Route::Login {
                    self.draw(Route::Login, None)
                } else {
                    log::info!("🔒 [GUARD] Sin sesión, redirigiendo al login");
                    routing::navigate(Route::Login);
                    Ok(())
                }
            }
            AccessDecision::RedirectHome(role) => {
                let home = Route::home_for(role);
                log::info!("🔀 [GUARD] Acceso denegado a {:?}, redirigiendo a {:?}", route, home);
                if home == route {
                    self.draw(home, session)
                } else {
                    routing::navigate(home);
                    Ok(())
                }
            }
        }
    }

    fn draw(&mut self, route: Route, session: Option<Session>) -> Result<(), JsValue> {
        self.sync_inactivity_monitor(route);
        set_inner_html(&self.root, "");

        if route == Route::Login {
            let view = views::render_login(&self.state, &self.auth)?;
            return append_child(&self.root, &view);
        }

        // El guard garantiza sesión para las rutas protegidas; si aun así
        // falta, se vuelve al login sin pintar nada
        let Some(session) = session else {
            routing::navigate(Route::Login);
            return Ok(());
        };

        let layout = ElementBuilder::new("div")?.class("app-layout").build();
        append_child(&layout, &views::render_header(&self.state, &session, &self.auth)?)?;

        let view = match route {
            Route::Home => views::render_home(&session)?,
            Route::Profile => views::render_profile(&session, &self.http)?,
            Route::AdminDashboard => views::render_admin_dashboard(&session)?,
            Route::ManagerDashboard => views::render_manager_dashboard(&session)?,
            Route::EmployeeDashboard => views::render_employee_dashboard(&session)?,
            Route::ResponsableDashboard => views::render_responsable_dashboard(&session)?,
            Route::Login => return Ok(()), // cubierto arriba
        };
        append_child(&layout, &view)?;
        append_child(&layout, &views::render_inactivity_banner()?)?;
        append_child(&self.root, &layout)
    }

    /// Montar/desmontar el monitor según la vista sea protegida. Vistas
    /// protegidas solapadas comparten esta única instancia: nunca hay dos
    /// cuentas atrás forzando logout por separado.
    fn sync_inactivity_monitor(&mut self, route: Route) {
        let is_protected = !route.is_public();

        if is_protected && self.inactivity.is_none() {
            let auth = self.auth.clone();
            let monitor = InactivityMonitor::start(
                self.state.config.inactivity_timeout_ms,
                views::hide_inactivity_warning,
                views::show_inactivity_warning,
                move || {
                    log::warn!("⏱️ [APP] Session expirée par inactivité");
                    // El clear queda persistido por completo antes de redirigir
                    auth.logout();
                    crate::notify_session_expired();
                    routing::navigate(Route::Login);
                },
            );
            match monitor {
                Ok(monitor) => self.inactivity = Some(monitor),
                Err(e) => log::error!("❌ [APP] Error armando el monitor de inactividad: {:?}", e),
            }
        } else if !is_protected && self.inactivity.is_some() {
            // Drop cancela la cuenta atrás y retira los listeners
            self.inactivity = None;
        }
    }
}
