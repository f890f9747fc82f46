//! Login page: mode toggle, credential fields, and the stubbed submit flow.

use leptos::prelude::*;

use crate::components::cloud_status::CloudStatus;
use crate::state::AppSessionStore;
use crate::state::login::{LoginDelays, LoginError, LoginForm};
use crate::state::session::Role;
use crate::state::ui::UiState;

/// Login page shown while no session is active.
///
/// Submit opens a login attempt, waits out the simulated round trip, then
/// completes through the form controller and hands the synthesized user to
/// the session store. The submit button is disabled while an attempt is in
/// flight, and a stale attempt (cancelled by logout) completes as a no-op.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSessionStore>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let form = expect_context::<RwSignal<LoginForm>>();

    let pending = move || form.with(|f| f.pending);
    let mode = move || form.with(|f| f.mode);
    let error_message = move || form.with(|f| f.error.map(LoginError::message));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(token) = form.try_update(|f| f.begin_attempt()).flatten() else {
            return;
        };

        let delays = LoginDelays::default();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::util::delay::sleep(delays.login).await;
                let Some(user) = form.try_update(|f| f.finish_attempt(token)).flatten() else {
                    return;
                };
                session.update(|s| s.login(user));
                ui.update(|u| u.syncing = true);
                crate::util::delay::sleep(delays.sync).await;
                let _ = ui.try_update(|u| u.syncing = false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, delays, session, ui);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <header class="login-card__header">
                    <CloudStatus/>
                    <h1>"paperslol"</h1>
                    <p class="login-card__tagline">"Secure Academic Cloud"</p>
                </header>

                <form class="login-card__form" on:submit=on_submit>
                    <div class="login-card__modes">
                        <button
                            type="button"
                            class="login-card__mode"
                            class:login-card__mode--active=move || mode() == Role::Student
                            on:click=move |_| form.update(|f| f.mode = Role::Student)
                        >
                            "Student"
                        </button>
                        <button
                            type="button"
                            class="login-card__mode"
                            class:login-card__mode--active=move || mode() == Role::Admin
                            on:click=move |_| form.update(|f| f.mode = Role::Admin)
                        >
                            "Admin"
                        </button>
                    </div>

                    <label class="login-card__label">
                        "Username"
                        <input
                            class="login-card__input"
                            type="text"
                            placeholder="e.g. sparsh_rathore"
                            prop:value=move || form.with(|f| f.username.clone())
                            on:input=move |ev| {
                                form.update(|f| f.username = event_target_value(&ev));
                            }
                        />
                    </label>

                    <label class="login-card__label">
                        "Cloud Email"
                        <input
                            class="login-card__input"
                            type="email"
                            placeholder="name@college.edu"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| {
                                form.update(|f| f.email = event_target_value(&ev));
                            }
                        />
                    </label>

                    <label class="login-card__label">
                        "Vault Password"
                        <input
                            class="login-card__input"
                            type="password"
                            placeholder="********"
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| {
                                form.update(|f| f.password = event_target_value(&ev));
                            }
                        />
                    </label>

                    <Show when=move || error_message().is_some()>
                        <p class="login-card__error">{move || error_message().unwrap_or_default()}</p>
                    </Show>

                    <button class="btn btn--primary login-card__submit" type="submit" disabled=pending>
                        {move || if pending() { "Unlocking..." } else { "Unlock Vault" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
