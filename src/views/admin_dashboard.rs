// ============================================================================
// ADMIN DASHBOARD
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::Session;

pub fn render_admin_dashboard(session: &Session) -> Result<Element, JsValue> {
    log::info!("🎬 [ADMIN] Dashboard admin para {}", session.user.email);

    let container = ElementBuilder::new("main")?
        .class("dashboard dashboard-admin")
        .build();

    let title = ElementBuilder::new("h2")?
        .text("Tableau de bord administrateur")
        .build();
    append_child(&container, &title)?;

    let grid = ElementBuilder::new("div")?
        .class("dashboard-grid")
        .build();

    for (icon, label) in [
        ("👥", "Utilisateurs"),
        ("🏢", "Équipes"),
        ("📄", "Documents"),
        ("🔧", "Maintenance"),
    ] {
        append_child(&grid, &section_card(icon, label)?)?;
    }

    append_child(&container, &grid)?;
    Ok(container)
}

fn section_card(icon: &str, label: &str) -> Result<Element, JsValue> {
    let card = ElementBuilder::new("div")?
        .class("dashboard-card")
        .build();
    let icon_el = ElementBuilder::new("div")?
        .class("card-icon")
        .text(icon)
        .build();
    let label_el = ElementBuilder::new("div")?
        .class("card-label")
        .text(label)
        .build();
    append_child(&card, &icon_el)?;
    append_child(&card, &label_el)?;
    Ok(card)
}
