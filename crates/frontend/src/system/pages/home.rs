use crate::system::auth::context::use_auth;
use leptos::prelude::*;
use leptos_router::components::A;

/// Public start page
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Vendor Dashboard"</h1>
                <p>"Manage your products, orders, customers and coupons."</p>
                <Show
                    when=move || auth.is_authenticated()
                    fallback=|| view! { <A href="/auth/login">"Log in"</A> }
                >
                    <A href="/dashboard">"Open dashboard"</A>
                </Show>
            </div>
        </div>
    }
}

const SECTIONS: [(&str, &str); 7] = [
    ("/dashboard/products", "Products"),
    ("/dashboard/categories", "Categories"),
    ("/dashboard/orders", "Orders"),
    ("/dashboard/customers", "Customers"),
    ("/dashboard/coupons", "Coupons"),
    ("/dashboard/earnings", "Earnings"),
    ("/dashboard/subscription", "Subscription"),
];

/// `/dashboard` landing
#[component]
pub fn WelcomePage() -> impl IntoView {
    let auth = use_auth();
    let name = move || {
        auth.session
            .with(|s| s.as_ref().map(|s| s.display_name().to_string()))
            .unwrap_or_default()
    };

    view! {
        <div class="page">
            <div class="header">
                <h1 class="header__title">{move || format!("Welcome, {}", name())}</h1>
            </div>
            <div class="welcome-grid">
                {SECTIONS
                    .iter()
                    .map(|&(href, label)| view! {
                        <A href=href>
                            <span class="welcome-grid__card">{label}</span>
                        </A>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
