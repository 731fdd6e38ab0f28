//! Stats Counter Component
//!
//! Animated counters and the "updated" toast.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos_viewport::AnimationHandle;
use log::debug;
use reactive_stores::Store;

use crate::config::{COMPLETED_PROJECTS, EXPERIENCE_YEARS, HAPPY_CLIENTS, STATS_ANIMATION_MS, TOAST_MS};
use crate::state::stats::CounterSpec;
use crate::store::{
    store_push_toast, store_remove_toast, store_set_completed, store_set_experience, StatsBoard,
    StatsBoardStoreFields,
};

/// Always restarts from `spec.start`, not from the displayed value
fn animate_counter<F>(spec: CounterSpec, set_text: F) -> Option<AnimationHandle>
where
    F: Fn(String) + 'static,
{
    leptos_viewport::animate(STATS_ANIMATION_MS, move |progress| {
        set_text(spec.display(spec.value_at_progress(progress)));
    })
}

#[component]
pub fn StatsCounter() -> impl IntoView {
    let store = Store::new(StatsBoard::new());
    let running = StoredValue::new_local(Vec::<AnimationHandle>::new());

    let update_stats = move |_| {
        running.update_value(|handles| handles.drain(..).for_each(|h| h.cancel()));

        let handles: Vec<AnimationHandle> = [
            animate_counter(COMPLETED_PROJECTS, move |text| store_set_completed(&store, text)),
            animate_counter(EXPERIENCE_YEARS, move |text| store_set_experience(&store, text)),
        ]
        .into_iter()
        .flatten()
        .collect();
        running.set_value(handles);

        let id = store_push_toast(&store);
        Timeout::new(TOAST_MS, move || store_remove_toast(&store, id)).forget();
        debug!("[STATS] Update started, toast #{}", id);
    };

    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <span class="stat-number" id="completedProjects">{move || store.completed_projects().get()}</span>
                <span class="stat-label">"Завершённых проектов"</span>
            </div>
            <div class="stat-card">
                <span class="stat-number" id="experienceYears">{move || store.experience_years().get()}</span>
                <span class="stat-label">"Года опыта"</span>
            </div>
            <div class="stat-card">
                <span class="stat-number" id="happyClients">{HAPPY_CLIENTS}</span>
                <span class="stat-label">"Довольных клиентов"</span>
            </div>
        </div>
        <button id="updateStatsBtn" class="btn" on:click=update_stats>"Обновить статистику"</button>

        <For
            each=move || store.toasts().get().toasts().to_vec()
            key=|toast| toast.id
            children=|toast| view! { <div class="stats-toast">{toast.text}</div> }
        />
    }
}
