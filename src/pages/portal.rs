//! Authenticated portal: sidebar plus the panel selected by role and tab.

use leptos::prelude::*;

use crate::components::admin_panel::AdminPanel;
use crate::components::donations_panel::DonationsPanel;
use crate::components::home_panel::HomePanel;
use crate::components::papers_panel::PapersPanel;
use crate::components::settings_panel::SettingsPanel;
use crate::components::sidebar::Sidebar;
use crate::state::AppSessionStore;
use crate::state::session::Role;
use crate::state::ui::{Panel, UiState, active_panel};

/// Portal layout for an authenticated session.
///
/// Panel choice is the exhaustive `active_panel` dispatch: admins get the
/// admin dashboard on the home tab, everything else is tab-directed.
#[component]
pub fn PortalPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSessionStore>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let role = move || {
        session
            .with(|s| s.session().user.as_ref().map(|u| u.role))
            .unwrap_or(Role::Student)
    };
    let panel = move || active_panel(role(), ui.get().active_tab);

    view! {
        <div class="portal">
            <Sidebar/>
            <main class="portal__content">
                {move || match panel() {
                    Panel::AdminDashboard => view! { <AdminPanel/> }.into_any(),
                    Panel::Home => view! { <HomePanel/> }.into_any(),
                    Panel::Papers(category) => view! { <PapersPanel category=category/> }.into_any(),
                    Panel::Donations => view! { <DonationsPanel/> }.into_any(),
                    Panel::Settings => view! { <SettingsPanel/> }.into_any(),
                }}
            </main>

            <Show when=move || ui.get().syncing>
                <div class="portal__sync-toast">"Syncing with cloud..."</div>
            </Show>
        </div>
    }
}
