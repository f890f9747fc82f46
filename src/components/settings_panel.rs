//! Account settings panel.

use leptos::prelude::*;

use crate::components::cloud_status::CloudStatus;
use crate::state::AppSessionStore;
use crate::state::session::{Role, User};

/// Read-only account details plus the cloud status pill. Session mutation
/// stays with the sidebar's logout; this panel only displays.
#[component]
pub fn SettingsPanel() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSessionStore>>();

    let field = move |pick: fn(&User) -> String| {
        session.with(move |s| s.session().user.as_ref().map(pick).unwrap_or_default())
    };

    view! {
        <section class="panel settings-panel">
            <h2>"Vault Settings"</h2>

            <dl class="settings-panel__fields">
                <dt>"Username"</dt>
                <dd>{move || field(|u| u.username.clone())}</dd>
                <dt>"User id"</dt>
                <dd>{move || field(|u| u.id.clone())}</dd>
                <dt>"Email"</dt>
                <dd>{move || field(|u| u.email.clone())}</dd>
                <dt>"Role"</dt>
                <dd>
                    {move || {
                        session.with(|s| match s.session().user.as_ref().map(|u| u.role) {
                            Some(Role::Admin) => "admin",
                            _ => "student",
                        })
                    }}
                </dd>
            </dl>

            <div class="settings-panel__cloud">
                <CloudStatus/>
            </div>
        </section>
    }
}
