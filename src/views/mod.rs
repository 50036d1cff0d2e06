pub mod admin_dashboard;
pub mod employee_dashboard;
pub mod home;
pub mod login;
pub mod manager_dashboard;
pub mod profile;
pub mod responsable_dashboard;
pub mod shared;

pub use admin_dashboard::render_admin_dashboard;
pub use employee_dashboard::render_employee_dashboard;
pub use home::render_home;
pub use login::render_login;
pub use manager_dashboard::render_manager_dashboard;
pub use profile::render_profile;
pub use responsable_dashboard::render_responsable_dashboard;
pub use shared::{
    hide_inactivity_warning, render_header, render_inactivity_banner, show_inactivity_warning,
};
