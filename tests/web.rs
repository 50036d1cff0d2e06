// Tests de navegador (wasm-pack test --headless). Compilan solo para wasm32:
// necesitan el localStorage real del navegador.
#![cfg(target_arch = "wasm32")]

use chrono::Utc;
use wasm_bindgen_test::*;

use portail_rh::{check_access, AccessDecision, Role, Route, Session, SessionStore, UserProfile};

wasm_bindgen_test_configure!(run_in_browser);

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

fn raw_storage() -> web_sys::Storage {
    web_sys::window().unwrap().local_storage().unwrap().unwrap()
}

#[wasm_bindgen_test]
fn guardar_y_cargar_la_sesion() {
    let store = SessionStore::new();
    store.clear();

    store.save(&session("EMPLOYE"));
    let loaded = store.load().expect("la sesión debería estar presente");
    assert_eq!(loaded.user.email, "a@b.com");
    assert_eq!(loaded.token, "T");
    assert_eq!(loaded.role(), Some(Role::Employe));

    store.clear();
}

#[wasm_bindgen_test]
fn clear_es_idempotente() {
    let store = SessionStore::new();
    store.save(&session("ADMIN"));

    store.clear();
    assert!(store.load().is_none());

    // Limpiar un store ya vacío es un no-op, no un error
    store.clear();
    store.clear();
    assert!(store.load().is_none());
    assert!(store.load_token().is_none());
}

#[wasm_bindgen_test]
fn json_corrupto_se_trata_como_ausente() {
    let store = SessionStore::new();
    store.clear();

    raw_storage().set_item("hr_user", "{not json!!").unwrap();
    raw_storage().set_item("hr_access_token", "T").unwrap();
    assert!(store.load().is_none());

    store.clear();
}

#[wasm_bindgen_test]
fn conectado_exige_las_dos_claves() {
    let store = SessionStore::new();
    store.clear();

    // Solo token, sin perfil
    raw_storage().set_item("hr_access_token", "T").unwrap();
    assert!(store.load().is_none());
    store.clear();

    // Solo perfil, sin token
    let s = session("MANAGER");
    store.save(&s);
    raw_storage().remove_item("hr_access_token").unwrap();
    assert!(store.load().is_none());

    store.clear();
}

#[wasm_bindgen_test]
fn sobrescribir_reemplaza_la_sesion_anterior() {
    let store = SessionStore::new();
    store.clear();

    store.save(&session("EMPLOYE"));
    let mut other = session("ADMIN");
    other.user.email = "b@c.com".to_string();
    other.token = "T2".to_string();
    store.save(&other);

    let loaded = store.load().unwrap();
    assert_eq!(loaded.user.email, "b@c.com");
    assert_eq!(loaded.token, "T2");
    assert_eq!(loaded.role(), Some(Role::Admin));

    store.clear();
}

#[wasm_bindgen_test]
fn el_guard_con_storage_real() {
    let store = SessionStore::new();
    store.clear();

    // Sin sesión: toda ruta protegida redirige al login
    assert_eq!(
        check_access(store.load().as_ref(), Route::EmployeeDashboard),
        AccessDecision::RedirectLogin { purge: false }
    );

    // Con sesión EMPLOYE: su dashboard se renderiza, el de admin rebota al suyo
    store.save(&session("EMPLOYE"));
    let loaded = store.load();
    assert_eq!(
        check_access(loaded.as_ref(), Route::EmployeeDashboard),
        AccessDecision::Render(Route::EmployeeDashboard)
    );
    assert_eq!(
        check_access(loaded.as_ref(), Route::AdminDashboard),
        AccessDecision::RedirectHome(Role::Employe)
    );

    // Rol manipulado en el storage: logout forzado
    store.save(&session("SUPERUSER"));
    assert_eq!(
        check_access(store.load().as_ref(), Route::Home),
        AccessDecision::RedirectLogin { purge: true }
    );

    store.clear();
}
