use leptos::prelude::*;

/// Confirmation dialog for destructive actions
#[component]
pub fn ConfirmModal(
    /// Dialog is shown while this is true
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: Signal<String>,
    /// Disables both buttons while the action runs
    #[prop(optional, into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class="modal" role="dialog">
                    <h3 class="modal__title">{title.clone()}</h3>
                    <p class="modal__text">{move || message.get()}</p>
                    <div class="modal__actions">
                        <button
                            class="button button--secondary"
                            disabled=move || busy.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="button button--danger"
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {move || if busy.get() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
