// ============================================================================
// LOGIN VIEW
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlInputElement};

use crate::dom::{
    add_class, append_child, create_element, on_input, on_submit, remove_attribute,
    set_attribute, set_class_name, set_text_content, ElementBuilder,
};
use crate::routing::{navigate, Route};
use crate::services::AuthService;
use crate::state::AppState;

/// Renderizar la vista de login
pub fn render_login(state: &AppState, auth: &AuthService) -> Result<Element, JsValue> {
    log::info!("🎬 [LOGIN] render_login() llamado");

    // Estado local del formulario (en closures)
    let email = Rc::new(RefCell::new(String::new()));
    let mot_de_passe = Rc::new(RefCell::new(String::new()));

    let login_screen = ElementBuilder::new("div")?
        .class("login-screen")
        .build();

    let login_container = ElementBuilder::new("div")?
        .class("login-container")
        .build();

    // Header
    let login_header = ElementBuilder::new("div")?
        .class("login-header")
        .build();

    let title = ElementBuilder::new("h1")?
        .text("Bienvenue")
        .build();

    let subtitle = ElementBuilder::new("p")?
        .text("Veuillez vous connecter pour continuer")
        .build();

    append_child(&login_header, &title)?;
    append_child(&login_header, &subtitle)?;

    // Aviso de sesión expirada (se consume: solo se muestra una vez)
    if state.auth.take_expired() {
        let banner = ElementBuilder::new("div")?
            .class("session-expired-banner")
            .text("Session expirée. Veuillez vous reconnecter.")
            .build();
        append_child(&login_header, &banner)?;
    }

    // Formulario
    let form = create_element("form")?;
    set_class_name(&form, "login-form");

    let email_group = create_input_group(
        "email",
        "email",
        "Adresse email",
        email.clone(),
    )?;

    let password_group = create_input_group(
        "mot_de_passe",
        "password",
        "Mot de passe",
        mot_de_passe.clone(),
    )?;

    // Línea de error (vacía hasta que haga falta)
    let error_line = ElementBuilder::new("div")?
        .class("login-error")
        .id("login-error")?
        .build();

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn-login")
        .text("Connexion")
        .build();

    // Submit: validar, llamar al Authenticator y navegar al dashboard del rol
    {
        let email = email.clone();
        let mot_de_passe = mot_de_passe.clone();
        let auth = auth.clone();
        let state = state.clone();
        let error_line = error_line.clone();
        let submit_btn = submit_btn.clone();

        on_submit(&form, move |e: web_sys::Event| {
            e.prevent_default();

            let email_val = email.borrow().clone();
            let password_val = mot_de_passe.borrow().clone();

            if email_val.is_empty() || password_val.is_empty() {
                set_text_content(&error_line, "Veuillez remplir tous les champs");
                return;
            }

            set_text_content(&error_line, "");
            state.auth.set_loading(true);
            let _ = set_attribute(&submit_btn, "disabled", "true");

            let auth = auth.clone();
            let state = state.clone();
            let error_line = error_line.clone();
            let submit_btn = submit_btn.clone();

            spawn_local(async move {
                match auth.login(&email_val, &password_val).await {
                    Ok(session) => {
                        state.auth.set_session(Some(session.clone()));
                        state.auth.set_login_error(None);
                        state.auth.set_loading(false);

                        // Al dashboard propio del rol (validado en el login)
                        match session.role() {
                            Some(role) => navigate(Route::home_for(role)),
                            None => navigate(Route::Home),
                        }
                    }
                    Err(e) => {
                        log::error!("❌ [LOGIN] Login fallido: {:?}", e);
                        let message = e.to_string();
                        state.auth.set_login_error(Some(message.clone()));
                        state.auth.set_loading(false);
                        set_text_content(&error_line, &message);
                        let _ = remove_attribute(&submit_btn, "disabled");
                        let _ = add_class(&error_line, "shake");
                    }
                }
            });
        })?;
    }

    append_child(&form, &email_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &error_line)?;
    append_child(&form, &submit_btn)?;

    append_child(&login_container, &login_header)?;
    append_child(&login_container, &form)?;
    append_child(&login_screen, &login_container)?;

    Ok(login_screen)
}

/// Helper para crear un form group con su input controlado
fn create_input_group(
    id: &str,
    input_type: &str,
    placeholder: &str,
    value: Rc<RefCell<String>>,
) -> Result<Element, JsValue> {
    let group = ElementBuilder::new("div")?
        .class("form-group")
        .build();

    let input = create_element("input")?;
    set_attribute(&input, "type", input_type)?;
    set_attribute(&input, "id", id)?;
    set_attribute(&input, "name", id)?;
    set_attribute(&input, "placeholder", placeholder)?;
    set_attribute(&input, "required", "true")?;
    set_class_name(&input, "form-input");

    {
        let value = value.clone();
        on_input(&input, move |e: web_sys::InputEvent| {
            if let Some(target) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                *value.borrow_mut() = target.value();
            }
        })?;
    }

    append_child(&group, &input)?;
    Ok(group)
}
