//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::pages::{login::LoginPage, portal::PortalPage};
use crate::state::login::LoginForm;
use crate::state::session::SessionStore;
use crate::state::ui::UiState;
use crate::state::vault::VaultStore;
use crate::util::storage::LocalStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session store, paper vault, UI state, and login form as
/// reactive contexts, rehydrates persisted state on mount, and dispatches
/// between the login page and the portal. The session store is the single
/// source of truth for authentication; everything below only reads it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::new(LocalStorage));
    let vault = RwSignal::new(VaultStore::new(LocalStorage));
    let ui = RwSignal::new(UiState::default());
    let form = RwSignal::new(LoginForm::default());

    provide_context(session);
    provide_context(vault);
    provide_context(ui);
    provide_context(form);

    // Rehydrate persisted state once the browser is driving; effects do not
    // run during SSR, so server output stays deterministic.
    Effect::new(move || {
        session.update(SessionStore::load);
        vault.update(VaultStore::load);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/paperslol.css"/>
        <Title text="paperslol"/>

        <Show
            when=move || session.with(|s| s.session().is_authenticated())
            fallback=|| view! { <LoginPage/> }
        >
            <PortalPage/>
        </Show>
    }
}
