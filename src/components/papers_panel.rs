//! Per-category paper list with add and remove actions.

use leptos::prelude::*;

use crate::state::ui::PaperCategory;
use crate::state::vault::{ExamPhoto, FileType};
use crate::state::{AppSessionStore, AppVaultStore};
use crate::util::clock;

/// Vault entries for one paper category, scoped to the signed-in student.
/// All mutation goes through the vault store, which persists synchronously.
#[component]
pub fn PapersPanel(category: PaperCategory) -> impl IntoView {
    let session = expect_context::<RwSignal<AppSessionStore>>();
    let vault = expect_context::<RwSignal<AppVaultStore>>();

    let url_input = RwSignal::new(String::new());

    let own_id = move || {
        session.with(|s| {
            s.session()
                .user
                .as_ref()
                .map(|u| u.id.clone())
                .unwrap_or_default()
        })
    };
    let photos = move || {
        let id = own_id();
        vault.with(|v| {
            v.photos_for(category.as_str())
                .into_iter()
                .filter(|p| p.student_id == id)
                .collect::<Vec<_>>()
        })
    };

    let on_add = move |_| {
        let url = url_input.get();
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        let id = own_id();
        if id.is_empty() {
            return;
        }
        let file_type = if url.to_lowercase().ends_with(".pdf") {
            FileType::Pdf
        } else {
            FileType::Image
        };
        let photo = ExamPhoto::new(&id, category.as_str(), url, file_type, clock::now_iso());
        vault.update(|v| v.add(photo));
        url_input.set(String::new());
    };

    view! {
        <section class="panel papers-panel">
            <h2>{format!("{} Papers", category.as_str())}</h2>

            <div class="papers-panel__add">
                <input
                    class="papers-panel__url"
                    type="text"
                    placeholder="Paste a photo or PDF link"
                    prop:value=move || url_input.get()
                    on:input=move |ev| url_input.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            on_add(());
                        }
                    }
                />
                <button class="btn btn--primary" on:click=move |_| on_add(())>
                    "Add"
                </button>
            </div>

            {move || {
                let list = photos();
                if list.is_empty() {
                    view! { <p class="papers-panel__empty">"No papers here yet."</p> }.into_any()
                } else {
                    view! {
                        <ul class="papers-panel__list">
                            {list
                                .into_iter()
                                .map(|photo| {
                                    let id = photo.id.clone();
                                    view! {
                                        <li class="papers-panel__item">
                                            <a href=photo.image_url.clone() target="_blank">
                                                {photo.file_name.clone().unwrap_or(photo.image_url.clone())}
                                            </a>
                                            <span class="papers-panel__stamp">{photo.timestamp}</span>
                                            <button
                                                class="btn papers-panel__remove"
                                                on:click=move |_| {
                                                    vault.update(|v| {
                                                        v.remove(&id);
                                                    });
                                                }
                                            >
                                                "Remove"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
