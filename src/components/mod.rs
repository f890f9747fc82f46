//! Reusable UI components and portal panels.

pub mod admin_panel;
pub mod cloud_status;
pub mod donations_panel;
pub mod home_panel;
pub mod papers_panel;
pub mod settings_panel;
pub mod sidebar;
