//! Feedback Form Component
//!
//! Contact form with client-side validation and a self-fading message.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use crate::config::{MESSAGE_FADE_MS, MESSAGE_VISIBLE_MS};
use crate::models::FeedbackEntry;
use crate::state::feedback::{self, MessageBoard, MessageKind, SUCCESS_TEXT};
use crate::storage::{append_feedback, LocalStore};

fn persist(entry: FeedbackEntry) {
    match LocalStore::open().and_then(|store| append_feedback(&store, entry)) {
        Ok(count) => info!("[FEEDBACK] Saved submission, {} stored", count),
        Err(e) => warn!("[FEEDBACK] Could not save submission: {}", e),
    }
}

#[component]
pub fn FeedbackForm() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let board = RwSignal::new(MessageBoard::default());

    // Visible, then fading, then neutral; stale generations are ignored
    let show_message = move |text: String, kind: MessageKind| {
        let mut generation = 0;
        board.update(|b| generation = b.show(text, kind));
        spawn_local(async move {
            TimeoutFuture::new(MESSAGE_VISIBLE_MS).await;
            board.update(|b| b.begin_fade(generation));
            TimeoutFuture::new(MESSAGE_FADE_MS).await;
            board.update(|b| b.clear(generation));
        });
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let (n, e, m) = (name.get_untracked(), email.get_untracked(), message.get_untracked());

        match feedback::accept(&n, &e, &m, feedback::timestamp_now()) {
            Ok(entry) => {
                show_message(SUCCESS_TEXT.to_string(), MessageKind::Success);
                set_name.set(String::new());
                set_email.set(String::new());
                set_message.set(String::new());
                persist(entry);
            }
            Err(err) => {
                info!("[FEEDBACK] Rejected: {:?}", err);
                show_message(err.to_string(), MessageKind::Error);
            }
        }
    };

    view! {
        <form id="feedbackForm" class="feedback-form" on:submit=on_submit>
            <div class="form-group">
                <label for="name">"Имя"</label>
                <input
                    type="text"
                    id="name"
                    name="name"
                    placeholder="Ваше имя"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="email">"Email"</label>
                <input
                    type="text"
                    autocomplete="email"
                    id="email"
                    name="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="message">"Сообщение"</label>
                <textarea
                    id="message"
                    name="message"
                    rows="5"
                    placeholder="Ваше сообщение"
                    prop:value=move || message.get()
                    on:input=move |ev| set_message.set(event_target_value(&ev))
                ></textarea>
            </div>
            <button type="submit" class="btn">"Отправить"</button>
        </form>

        <div
            id="formMessage"
            class=move || board.with(|b| b.class())
            style=move || board.with(|b| b.opacity())
        >
            {move || board.with(|b| b.text())}
        </div>
    }
}
