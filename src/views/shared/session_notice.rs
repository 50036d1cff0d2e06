// ============================================================================
// AVISO DE INACTIVIDAD - banner de expiración inminente
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{add_class, get_element_by_id, remove_class, set_text_content, ElementBuilder};

const WARNING_ID: &str = "inactivity-warning";

/// Banner oculto que acompaña a toda vista protegida; el monitor de
/// inactividad lo muestra cuando queda poco para el logout forzado.
pub fn render_inactivity_banner() -> Result<Element, JsValue> {
    let banner = ElementBuilder::new("div")?
        .class("inactivity-warning")
        .id(WARNING_ID)?
        .build();
    Ok(banner)
}

/// Mostrar el aviso con los segundos restantes
pub fn show_inactivity_warning(remaining_secs: u32) {
    if let Some(banner) = get_element_by_id(WARNING_ID) {
        set_text_content(
            &banner,
            &format!("Attention : session inactive. Déconnexion dans {} secondes", remaining_secs),
        );
        let _ = add_class(&banner, "show");
    }
}

/// Ocultar el aviso (el usuario volvió a dar señales de vida)
pub fn hide_inactivity_warning() {
    if let Some(banner) = get_element_by_id(WARNING_ID) {
        let _ = remove_class(&banner, "show");
    }
}
