use leptos::prelude::*;

const APP_NAME: &str = "Vendor Dashboard";

/// Browser tab title for a dashboard page
pub fn document_title(page: &str) -> String {
    let page = page.trim();
    if page.is_empty() {
        APP_NAME.to_string()
    } else {
        format!("{page} | {APP_NAME}")
    }
}

/// Page heading with an optional subtitle and actions on the right.
///
/// Also keeps the browser tab title in sync with the heading.
#[component]
pub fn PageHeader(
    #[prop(into)]
    title: Signal<String>,

    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Action buttons (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    Effect::new(move |_| {
        let text = document_title(&title.get());
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&text);
        }
    });

    view! {
        <div class="page-header">
            <div class="page-header__text">
                <h1 class="page-header__title">{move || title.get()}</h1>
                {move || subtitle.get().map(|s| view! {
                    <p class="page-header__subtitle">{s}</p>
                })}
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}
