// ============================================================================
// GUARD DE ACCESO - máquina de decisión por navegación
// ============================================================================
// Función pura: se evalúa en cada intento de navegación con la sesión recién
// leída del store. La vista pedida no se monta nunca si la decisión es
// redirigir.
// ============================================================================

use crate::models::{Role, Session};
use crate::routing::Route;

/// Estado de autenticación observado en la sesión almacenada
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Unauthenticated,
    ValidRole(Role),
    /// Sesión presente pero con un rol fuera del conjunto cerrado:
    /// equivale a sesión manipulada y es fatal.
    InvalidRole,
}

/// Resultado de un intento de navegación
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Render(Route),
    /// purge = la sesión almacenada es inválida y debe destruirse antes de
    /// redirigir (logout forzado)
    RedirectLogin { purge: bool },
    /// Rol válido pero sin permiso para la ruta pedida: se redirige al
    /// dashboard PROPIO del rol, nunca a una página de error, para no
    /// revelar la forma de las vistas restringidas.
    RedirectHome(Role),
}

pub fn classify(session: Option<&Session>) -> AuthStatus {
    match session {
        None => AuthStatus::Unauthenticated,
        Some(session) => match session.role() {
            Some(role) => AuthStatus::ValidRole(role),
            None => AuthStatus::InvalidRole,
        },
    }
}

pub fn check_access(session: Option<&Session>, route: Route) -> AccessDecision {
    match classify(session) {
        AuthStatus::Unauthenticated => {
            if route.is_public() {
                AccessDecision::Render(route)
            } else {
                AccessDecision::RedirectLogin { purge: false }
            }
        }
        AuthStatus::InvalidRole => AccessDecision::RedirectLogin { purge: true },
        AuthStatus::ValidRole(role) => {
            if route.is_public() {
                // Usuario ya conectado visitando el login: a su dashboard
                return AccessDecision::RedirectHome(role);
            }
            match route.allowed_roles() {
                Some(allowed) if !allowed.contains(&role) => AccessDecision::RedirectHome(role),
                _ => AccessDecision::Render(route),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserProfile;
    use chrono::Utc;

    fn session(role: &str) -> Session {
        Session {
            user: UserProfile {
                id: 1,
                nom: "A".to_string(),
                email: "a@b.com".to_string(),
                role: role.to_string(),
                photo_url: None,
                saved_at: Utc::now(),
            },
            token: "T".to_string(),
        }
    }

    #[test]
    fn sin_sesion_toda_ruta_protegida_redirige_al_login() {
        for route in [
            Route::Home,
            Route::Profile,
            Route::AdminDashboard,
            Route::ManagerDashboard,
            Route::EmployeeDashboard,
            Route::ResponsableDashboard,
        ] {
            assert_eq!(
                check_access(None, route),
                AccessDecision::RedirectLogin { purge: false }
            );
        }
    }

    #[test]
    fn sin_sesion_el_login_se_renderiza() {
        assert_eq!(check_access(None, Route::Login), AccessDecision::Render(Route::Login));
    }

    #[test]
    fn rol_manipulado_fuerza_logout() {
        let tampered = session("SUPERUSER");
        assert_eq!(
            check_access(Some(&tampered), Route::Home),
            AccessDecision::RedirectLogin { purge: true }
        );
        // También si intenta volver al login
        assert_eq!(
            check_access(Some(&tampered), Route::Login),
            AccessDecision::RedirectLogin { purge: true }
        );
    }

    #[test]
    fn cada_rol_entra_en_su_propio_dashboard() {
        for role in Role::ALL {
            let session = session(role.as_str());
            let home = Route::home_for(role);
            assert_eq!(check_access(Some(&session), home), AccessDecision::Render(home));
        }
    }

    #[test]
    fn ruta_de_otro_rol_redirige_al_home_propio() {
        // Escenario de extremo a extremo: un EMPLOYE pide el dashboard admin
        let employe = session("EMPLOYE");
        let decision = check_access(Some(&employe), Route::AdminDashboard);
        assert_eq!(decision, AccessDecision::RedirectHome(Role::Employe));
        // y el home del rol es el dashboard de empleado, nunca la vista pedida
        assert_eq!(Route::home_for(Role::Employe), Route::EmployeeDashboard);
    }

    #[test]
    fn rutas_sin_lista_blanca_admiten_cualquier_rol_valido() {
        for role in Role::ALL {
            let session = session(role.as_str());
            assert_eq!(
                check_access(Some(&session), Route::Home),
                AccessDecision::Render(Route::Home)
            );
            assert_eq!(
                check_access(Some(&session), Route::Profile),
                AccessDecision::Render(Route::Profile)
            );
        }
    }

    #[test]
    fn usuario_conectado_en_login_rebota_a_su_dashboard() {
        let manager = session("MANAGER");
        assert_eq!(
            check_access(Some(&manager), Route::Login),
            AccessDecision::RedirectHome(Role::Manager)
        );
    }
}
