// ============================================================================
// RESPONSABLE DASHBOARD
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::Session;

pub fn render_responsable_dashboard(session: &Session) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("main")?
        .class("dashboard dashboard-responsable")
        .build();

    let title = ElementBuilder::new("h2")?
        .text("Tableau de bord responsable")
        .build();
    append_child(&container, &title)?;

    let subtitle = ElementBuilder::new("p")?
        .class("dashboard-subtitle")
        .text(&format!("Suivi de {}", session.user.nom))
        .build();
    append_child(&container, &subtitle)?;

    let sections = ElementBuilder::new("div")?
        .class("dashboard-sections")
        .build();

    for section_title in ["Suivi d'équipe", "Validations en attente"] {
        let section = ElementBuilder::new("section")?
            .class("dashboard-section")
            .build();
        let heading = ElementBuilder::new("h3")?.text(section_title).build();
        append_child(&section, &heading)?;
        append_child(&sections, &section)?;
    }

    append_child(&container, &sections)?;
    Ok(container)
}
