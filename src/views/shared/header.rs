// ============================================================================
// HEADER COMPARTIDO - título, identidad del usuario y logout
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::Session;
use crate::routing::{navigate, Route};
use crate::services::AuthService;
use crate::state::AppState;

pub fn render_header(
    state: &AppState,
    session: &Session,
    auth: &AuthService,
) -> Result<Element, JsValue> {
    let header = ElementBuilder::new("header")?
        .class("app-header")
        .build();

    let title = ElementBuilder::new("h1")?
        .text("Portail RH")
        .build();
    append_child(&header, &title)?;

    let user_chip = ElementBuilder::new("div")?
        .class("user-chip")
        .build();

    // Foto si hay referencia; inicial del nombre si no
    match &session.user.photo_url {
        Some(url) => {
            let photo = ElementBuilder::new("img")?
                .class("user-photo")
                .attr("src", url)?
                .attr("alt", &session.user.nom)?
                .build();
            append_child(&user_chip, &photo)?;
        }
        None => {
            let initial = session
                .user
                .nom
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_else(|| "?".to_string());
            let avatar = ElementBuilder::new("div")?
                .class("user-avatar")
                .text(&initial)
                .build();
            append_child(&user_chip, &avatar)?;
        }
    }

    let user_name = ElementBuilder::new("span")?
        .class("user-name")
        .text(&session.user.nom)
        .build();
    append_child(&user_chip, &user_name)?;

    // Etiqueta de rol (el guard ya validó el string)
    if let Some(role) = session.role() {
        let role_badge = ElementBuilder::new("span")?
            .class("user-role")
            .text(role.label())
            .build();
        append_child(&user_chip, &role_badge)?;
    }

    let logout_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-logout")
        .text("Déconnexion")
        .build();

    {
        let auth = auth.clone();
        let state = state.clone();
        on_click(&logout_btn, move |_| {
            log::info!("👋 [HEADER] Logout iniciado");
            auth.logout();
            state.auth.reset();
            navigate(Route::Login);
        })?;
    }
    append_child(&user_chip, &logout_btn)?;

    append_child(&header, &user_chip)?;
    Ok(header)
}
