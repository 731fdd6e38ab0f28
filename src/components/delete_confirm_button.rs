//! Delete Confirm Button Component
//!
//! Inline two-step delete for a table row.

use leptos::prelude::*;

pub const CONFIRM_TEXT: &str = "Вы уверены, что хотите удалить этот проект?";

/// "Удалить" arms the button; ✓ runs `on_confirm`, ✗ disarms without touching state.
///
/// # Arguments
/// * `button_class` - CSS class for the unarmed delete button
/// * `row_id` - Rendered as `data-id` on the unarmed button
/// * `on_confirm` - Runs only after the visitor confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(optional)] row_id: Option<u32>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let data_id = row_id.map(|id| id.to_string());

    let unarmed = move || {
        view! {
            <button
                class=button_class.clone()
                data-id=data_id.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    armed.set(true);
                }
            >
                "Удалить"
            </button>
        }
    };

    view! {
        <Show when=move || armed.get() fallback=unarmed>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{CONFIRM_TEXT}</span>
                <button
                    class="confirm-btn"
                    title="Удалить"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    title="Отмена"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
