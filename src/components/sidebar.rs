//! Sidebar with tab navigation, user identity, and logout.

use leptos::prelude::*;

use crate::state::AppSessionStore;
use crate::state::login::LoginForm;
use crate::state::session::{Role, SessionStore};
use crate::state::ui::{Tab, UiState};

/// Portal sidebar.
///
/// Tab selection is unconditional. Logout runs the full contract: cancel
/// any in-flight login attempt, drop the password buffer, clear the session
/// through the store, and reset the tab to home.
#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSessionStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let form = expect_context::<RwSignal<LoginForm>>();

    let user_name = move || {
        session.with(|s| {
            s.session()
                .user
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_default()
        })
    };
    let role_label = move || {
        session.with(|s| match s.session().user.as_ref().map(|u| u.role) {
            Some(Role::Admin) => "Admin",
            _ => "Student",
        })
    };

    let on_logout = move |_| {
        form.update(|f| {
            f.cancel_pending();
            f.clear_password();
        });
        session.update(SessionStore::logout);
        ui.update(|u| {
            u.active_tab = Tab::Home;
            u.syncing = false;
        });
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"paperslol"</div>

            <nav class="sidebar__nav">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="sidebar__tab"
                                class:sidebar__tab--active=move || ui.get().active_tab == tab
                                on:click=move |_| ui.update(|u| u.active_tab = tab)
                            >
                                <TabIcon tab=tab/>
                                <span>{tab.label()}</span>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <footer class="sidebar__footer">
                <div class="sidebar__identity">
                    <span class="sidebar__name">{user_name}</span>
                    <span class="sidebar__role">{role_label}</span>
                </div>
                <button class="btn sidebar__logout" on:click=on_logout>
                    "Log out"
                </button>
            </footer>
        </aside>
    }
}

/// Small line-art icon for a tab.
#[component]
fn TabIcon(tab: Tab) -> impl IntoView {
    view! {
        <svg class="sidebar__icon" viewBox="0 0 20 20" aria-hidden="true">
            {match tab {
                Tab::Home => view! {
                    <path d="M3 10 L10 3 L17 10 M5 9 V17 H15 V9"></path>
                }
                    .into_any(),
                Tab::EighthPapers | Tab::NinthPapers => view! {
                    <path d="M5 3 H13 L16 6 V17 H5 Z M13 3 V6 H16"></path>
                }
                    .into_any(),
                Tab::Donations => view! {
                    <path d="M10 17 L3 10 A4 4 0 0 1 10 5 A4 4 0 0 1 17 10 Z"></path>
                }
                    .into_any(),
                Tab::Settings => view! {
                    <rect x="4" y="9" width="12" height="8" rx="1"></rect>
                    <path d="M7 9 V6 A3 3 0 0 1 13 6 V9"></path>
                }
                    .into_any(),
            }}
        </svg>
    }
}
