//! Passive cloud collaborator indicator.

use leptos::prelude::*;

use crate::net::supabase;

/// Status pill showing whether the hosted sync service is linked.
///
/// Starts from the compile-time configured check and upgrades to a live
/// reachability probe once the browser is driving. Informational only; the
/// rest of the app never consults it.
#[component]
pub fn CloudStatus() -> impl IntoView {
    let reachable = RwSignal::new(supabase::is_configured());

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if supabase::is_configured() {
                leptos::task::spawn_local(async move {
                    reachable.set(supabase::check_reachable().await);
                });
            }
        }
    });

    view! {
        <span class="cloud-status">
            <span
                class="cloud-status__dot"
                class:cloud-status__dot--online=move || reachable.get()
                class:cloud-status__dot--offline=move || !reachable.get()
            ></span>
            {move || if reachable.get() { "Cloud Linked" } else { "Cloud Offline" }}
        </span>
    }
}
