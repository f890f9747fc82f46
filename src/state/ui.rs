//! Tab router and transient UI state.
//!
//! Tabs are a closed enum so adding or removing one is a compile-checked
//! change; there is no unrecognized-tab case at runtime. Selection is
//! unconditional: any tab may follow any other.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::session::Role;

/// The fixed set of selectable tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Home,
    EighthPapers,
    NinthPapers,
    Donations,
    Settings,
}

impl Tab {
    /// Sidebar order.
    pub const ALL: [Tab; 5] = [
        Tab::Home,
        Tab::EighthPapers,
        Tab::NinthPapers,
        Tab::Donations,
        Tab::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::EighthPapers => "8th Papers",
            Tab::NinthPapers => "9th Papers",
            Tab::Donations => "Donate",
            Tab::Settings => "Vault",
        }
    }
}

/// Paper category a vault entry belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaperCategory {
    Eighth,
    Ninth,
}

impl PaperCategory {
    /// Storage label used in persisted vault records.
    pub fn as_str(self) -> &'static str {
        match self {
            PaperCategory::Eighth => "8th",
            PaperCategory::Ninth => "9th",
        }
    }
}

/// What the portal renders for the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    AdminDashboard,
    Home,
    Papers(PaperCategory),
    Donations,
    Settings,
}

/// Map the current role and tab to a panel. Admins land on the admin
/// dashboard instead of the default home panel; everything else is
/// tab-directed regardless of role.
pub fn active_panel(role: Role, tab: Tab) -> Panel {
    match (role, tab) {
        (Role::Admin, Tab::Home) => Panel::AdminDashboard,
        (Role::Student, Tab::Home) => Panel::Home,
        (_, Tab::EighthPapers) => Panel::Papers(PaperCategory::Eighth),
        (_, Tab::NinthPapers) => Panel::Papers(PaperCategory::Ninth),
        (_, Tab::Donations) => Panel::Donations,
        (_, Tab::Settings) => Panel::Settings,
    }
}

/// Shared UI state: the selected tab and the transient post-login syncing
/// indicator. Logout resets both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub active_tab: Tab,
    pub syncing: bool,
}
