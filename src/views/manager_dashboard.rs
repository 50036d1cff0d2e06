// ============================================================================
// MANAGER DASHBOARD
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, ElementBuilder};
use crate::models::Session;

pub fn render_manager_dashboard(session: &Session) -> Result<Element, JsValue> {
    let container = ElementBuilder::new("main")?
        .class("dashboard dashboard-manager")
        .build();

    let title = ElementBuilder::new("h2")?
        .text("Tableau de bord manager")
        .build();
    append_child(&container, &title)?;

    let subtitle = ElementBuilder::new("p")?
        .class("dashboard-subtitle")
        .text(&format!("Équipe de {}", session.user.nom))
        .build();
    append_child(&container, &subtitle)?;

    let sections = ElementBuilder::new("div")?
        .class("dashboard-sections")
        .build();

    let team = ElementBuilder::new("section")?
        .class("dashboard-section")
        .build();
    let team_title = ElementBuilder::new("h3")?.text("Mon équipe").build();
    append_child(&team, &team_title)?;
    append_child(&sections, &team)?;

    let tasks = ElementBuilder::new("section")?
        .class("dashboard-section")
        .build();
    let tasks_title = ElementBuilder::new("h3")?.text("Tâches en cours").build();
    append_child(&tasks, &tasks_title)?;
    append_child(&sections, &tasks)?;

    append_child(&container, &sections)?;
    Ok(container)
}
