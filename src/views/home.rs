// ============================================================================
// HOME - vista de bienvenida común a todos los roles
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, on_click, ElementBuilder};
use crate::models::Session;
use crate::routing::{navigate, Route};

pub fn render_home(session: &Session) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("main")?
        .class("home-view")
        .build();

    let greeting = ElementBuilder::new("h2")?
        .text(&format!("Bienvenue, {}", session.user.nom))
        .build();
    append_child(&container, &greeting)?;

    let actions = ElementBuilder::new("div")?
        .class("home-actions")
        .build();

    // Acceso directo al dashboard propio del rol
    if let Some(role) = session.role() {
        let dashboard_btn = ElementBuilder::new("button")?
            .attr("type", "button")?
            .class("btn-primary")
            .text("Mon tableau de bord")
            .build();
        on_click(&dashboard_btn, move |_| {
            navigate(Route::home_for(role));
        })?;
        append_child(&actions, &dashboard_btn)?;
    }

    let profile_btn = ElementBuilder::new("button")?
        .attr("type", "button")?
        .class("btn-secondary")
        .text("Mon profil")
        .build();
    on_click(&profile_btn, move |_| {
        navigate(Route::Profile);
    })?;
    append_child(&actions, &profile_btn)?;

    append_child(&container, &actions)?;
    Ok(container)
}
