// ============================================================================
// PROFIL - ficha del usuario conectado
// ============================================================================
// Pinta primero la copia local de la sesión y refresca después contra el
// backend via el gateway (llamada autenticada; un 401 aquí limpia la sesión
// y redirige sin que esta vista haga nada).
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{append_child, get_element_by_id, set_text_content, ElementBuilder};
use crate::errors::AuthError;
use crate::models::{MeResponse, Session};
use crate::services::HttpGateway;

pub fn render_profile(session: &Session, http: &HttpGateway) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("main")?
        .class("profile-view")
        .build();

    let title = ElementBuilder::new("h2")?
        .text("Mon profil")
        .build();
    append_child(&container, &title)?;

    let card = ElementBuilder::new("div")?
        .class("profile-card")
        .build();

    append_child(&card, &field_row("Nom", "profile-nom", &session.user.nom)?)?;
    append_child(&card, &field_row("Email", "profile-email", &session.user.email)?)?;
    let role_label = session
        .role()
        .map(|r| r.label().to_string())
        .unwrap_or_else(|| session.user.role.clone());
    append_child(&card, &field_row("Rôle", "profile-role", &role_label)?)?;
    append_child(&container, &card)?;

    // Refresco contra el backend
    {
        let http = http.clone();
        spawn_local(async move {
            match http.get_json::<MeResponse>("/me/").await {
                Ok(response) => {
                    if let Some(user) = response.user.filter(|_| response.success) {
                        log::info!("✅ [PROFILE] Perfil refrescado desde el backend");
                        if let (Some(el), Some(nom)) = (get_element_by_id("profile-nom"), user.nom) {
                            set_text_content(&el, &nom);
                        }
                        if let (Some(el), Some(email)) = (get_element_by_id("profile-email"), user.email) {
                            set_text_content(&el, &email);
                        }
                    }
                }
                // El gateway ya limpió la sesión y redirigió
                Err(AuthError::SessionExpiree) => {}
                Err(e) => log::error!("❌ [PROFILE] Error refrescando perfil: {:?}", e),
            }
        });
    }

    Ok(container)
}

fn field_row(label: &str, value_id: &str, value: &str) -> Result<Element, JsValue> {
    let row = ElementBuilder::new("div")?
        .class("profile-row")
        .build();
    let label_el = ElementBuilder::new("span")?
        .class("profile-label")
        .text(label)
        .build();
    let value_el = ElementBuilder::new("span")?
        .class("profile-value")
        .id(value_id)?
        .text(value)
        .build();
    append_child(&row, &label_el)?;
    append_child(&row, &value_el)?;
    Ok(row)
}
