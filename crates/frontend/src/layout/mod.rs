pub mod header;
pub mod sidebar;

use header::Header;
use leptos::prelude::*;
use leptos_router::components::Outlet;
use sidebar::Sidebar;

/// Dashboard frame: sidebar on the left, header and page on the right
#[component]
pub fn DashboardShell() -> impl IntoView {
    view! {
        <div class="app-shell">
            <Sidebar />
            <div class="app-shell__main">
                <Header />
                <main class="app-shell__content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}
