//! Default home panel for students.

use leptos::prelude::*;

use crate::state::{AppSessionStore, AppVaultStore};
use crate::state::vault::mock_exams;

/// Greeting, upcoming exams, and a count of the user's own vault entries.
#[component]
pub fn HomePanel() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSessionStore>>();
    let vault = expect_context::<RwSignal<AppVaultStore>>();

    let name = move || {
        session.with(|s| {
            s.session()
                .user
                .as_ref()
                .map(|u| u.name.clone())
                .unwrap_or_default()
        })
    };
    let own_count = move || {
        let id = session.with(|s| {
            s.session()
                .user
                .as_ref()
                .map(|u| u.id.clone())
                .unwrap_or_default()
        });
        vault.with(|v| v.photos_by(&id).len())
    };

    view! {
        <section class="panel home-panel">
            <h2>{move || format!("Welcome back, {}", name())}</h2>
            <p class="home-panel__count">
                {move || format!("{} papers in your vault", own_count())}
            </p>

            <h3>"Exam schedule"</h3>
            <ul class="home-panel__exams">
                {mock_exams()
                    .into_iter()
                    .map(|exam| {
                        view! {
                            <li class="home-panel__exam">
                                <span class="home-panel__exam-code">{exam.code}</span>
                                <span>{exam.name}</span>
                                <span class="home-panel__exam-date">{exam.date}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
