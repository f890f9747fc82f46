//! Admin dashboard: whole-vault management.

use leptos::prelude::*;

use crate::state::AppVaultStore;

/// Every vault entry across all students, with removal. Shown to admins in
/// place of the home panel.
#[component]
pub fn AdminPanel() -> impl IntoView {
    let vault = expect_context::<RwSignal<AppVaultStore>>();

    let total = move || vault.with(|v| v.photos().len());

    view! {
        <section class="panel admin-panel">
            <h2>"Admin Dashboard"</h2>
            <p class="admin-panel__total">{move || format!("{} papers in the vault", total())}</p>

            {move || {
                let photos = vault.with(|v| v.photos().to_vec());
                if photos.is_empty() {
                    view! { <p class="admin-panel__empty">"The vault is empty."</p> }.into_any()
                } else {
                    view! {
                        <table class="admin-panel__table">
                            <thead>
                                <tr>
                                    <th>"Student"</th>
                                    <th>"Category"</th>
                                    <th>"File"</th>
                                    <th>"Uploaded"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {photos
                                    .into_iter()
                                    .map(|photo| {
                                        let id = photo.id.clone();
                                        view! {
                                            <tr>
                                                <td>{photo.student_id.clone()}</td>
                                                <td>{photo.category.clone()}</td>
                                                <td>
                                                    <a href=photo.image_url.clone() target="_blank">
                                                        {photo
                                                            .file_name
                                                            .clone()
                                                            .unwrap_or(photo.image_url.clone())}
                                                    </a>
                                                </td>
                                                <td>{photo.timestamp}</td>
                                                <td>
                                                    <button
                                                        class="btn admin-panel__remove"
                                                        on:click=move |_| {
                                                            vault.update(|v| {
                                                                v.remove(&id);
                                                            });
                                                        }
                                                    >
                                                        "Remove"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
