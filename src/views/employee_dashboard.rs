// ============================================================================
// EMPLOYEE DASHBOARD
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::Session;

pub fn render_employee_dashboard(session: &Session) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("main")?
        .class("dashboard dashboard-employee")
        .build();

    let title = ElementBuilder::new("h2")?
        .text("Tableau de bord employé")
        .build();
    append_child(&container, &title)?;

    let greeting = ElementBuilder::new("p")?
        .class("dashboard-subtitle")
        .text(&format!("Bonjour, {}", session.user.nom))
        .build();
    append_child(&container, &greeting)?;

    let sections = ElementBuilder::new("div")?
        .class("dashboard-sections")
        .build();

    for section_title in ["Mes tâches", "Mes documents", "Ma feuille de temps"] {
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
