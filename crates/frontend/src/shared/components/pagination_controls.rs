use crate::shared::icons::icon;
use leptos::prelude::*;

/// "Page X of Y" text for a 1-based page
pub fn page_label(page: usize, total_pages: usize, total: usize) -> String {
    format!("Page {} of {} ({} total)", page.max(1), total_pages.max(1), total)
}

/// Pagination for server-paged lists
#[component]
pub fn PaginationControls(
    /// Current page (1-based, as the backend counts)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    /// Total count of items
    #[prop(into)]
    total_count: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let at_first = move || current_page.get() <= 1;
    let at_last = move || current_page.get() >= total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=at_first
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || page_label(current_page.get(), total_pages.get(), total_count.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=at_last
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::page_label;

    #[test]
    fn empty_list_still_shows_one_page() {
        assert_eq!(page_label(1, 0, 0), "Page 1 of 1 (0 total)");
        assert_eq!(page_label(2, 3, 25), "Page 2 of 3 (25 total)");
    }
}
