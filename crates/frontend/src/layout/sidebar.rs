use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// (path, label, icon)
const MENU: [(&str, &str, &str); 9] = [
    ("/dashboard", "Dashboard", "dashboard"),
    ("/dashboard/categories", "Categories", "categories"),
    ("/dashboard/products", "Products", "products"),
    ("/dashboard/orders", "Orders", "orders"),
    ("/dashboard/customers", "Customers", "customers"),
    ("/dashboard/coupons", "Coupons", "coupons"),
    ("/dashboard/earnings", "Earnings", "earnings"),
    ("/dashboard/subscription", "Subscription", "subscription"),
    ("/dashboard/account", "Account", "account"),
];

/// Menu item is active on its own path and below it (except the dashboard root)
fn is_active(item_path: &str, current: &str) -> bool {
    if item_path == "/dashboard" {
        return current.trim_end_matches('/') == item_path;
    }
    current == item_path || current.starts_with(&format!("{item_path}/"))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Vendor Dashboard"</div>
            <nav class="sidebar__nav">
                {MENU
                    .iter()
                    .map(|&(path, label, icon_name)| {
                        view! {
                            <A href=path>
                                <span
                                    class="sidebar__item"
                                    class:sidebar__item--active=move || is_active(path, &location.pathname.get())
                                >
                                    {icon(icon_name)}
                                    <span class="sidebar__label">{label}</span>
                                </span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::is_active;

    #[test]
    fn nested_pages_keep_their_section_active() {
        assert!(is_active("/dashboard/products", "/dashboard/products/edit/prod-1"));
        assert!(!is_active("/dashboard", "/dashboard/products"));
        assert!(is_active("/dashboard", "/dashboard/"));
        assert!(!is_active("/dashboard/orders", "/dashboard/ordersx"));
    }
}
