pub mod header;
pub mod session_notice;

pub use header::render_header;
pub use session_notice::{
    hide_inactivity_warning, render_inactivity_banner, show_inactivity_warning,
};
