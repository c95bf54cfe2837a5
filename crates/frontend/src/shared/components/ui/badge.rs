use contracts::domain::a003_order::StatusTone;
use leptos::prelude::*;

/// Order status badge, coloured by status
#[component]
pub fn StatusBadge(
    /// Raw status text as stored on the order
    #[prop(into)]
    status: Signal<String>,
) -> impl IntoView {
    let status_class = move || StatusTone::of(&status.get()).css_class();

    view! {
        <span class=status_class>
            {move || status.get()}
        </span>
    }
}
