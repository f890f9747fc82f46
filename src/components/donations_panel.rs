//! Donations panel.

use leptos::prelude::*;

/// Static support/donation information.
#[component]
pub fn DonationsPanel() -> impl IntoView {
    view! {
        <section class="panel donations-panel">
            <h2>"Support paperslol"</h2>
            <p>
                "Hosting the vault and the sync service costs money. If the "
                "papers helped you, consider chipping in."
            </p>
            <a class="btn btn--primary" href="https://buymeacoffee.com/paperslol" target="_blank">
                "Donate"
            </a>
        </section>
    }
}
