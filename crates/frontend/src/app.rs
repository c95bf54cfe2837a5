use crate::routes::routes::AppRoutes;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::AuthProvider;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    // Toasts are the only place where form and request errors are shown
    provide_context(ToastService::new());

    view! {
        <AuthProvider>
            <Router>
                <AppRoutes />
            </Router>
            <ToastHost />
        </AuthProvider>
    }
}
