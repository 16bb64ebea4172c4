//! Delete Confirm Button Component
//!
//! Two-step delete: the first click arms, the second confirms.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `title` - Tooltip of the initial button, e.g. "Delete tag"
/// * `on_confirm` - Runs when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] title: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    view! {
        <Show
            when=move || armed.get()
            fallback=move || {
                let title = title.clone();
                view! {
                    <button
                        class="delete-btn"
                        title=title
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_armed.set(true);
                        }
                    >
                        "×"
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "Delete"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_armed.set(false);
                    }
                >
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}
