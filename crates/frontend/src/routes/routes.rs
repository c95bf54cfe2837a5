use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::details::{ProductCreatePage, ProductEditPage};
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a002_product::ui::view::ProductView;
use crate::domain::a003_order::ui::list::OrderList;
use crate::domain::a004_customer::ui::list::CustomerList;
use crate::domain::a005_coupon::ui::list::CouponList;
use crate::domain::a006_earning::ui::list::EarningsPage;
use crate::domain::a007_subscription::ui::list::SubscriptionPlans;
use crate::layout::DashboardShell;
use crate::routes::guard::{decide, RouteDecision};
use crate::system::auth::context::use_auth;
use crate::system::pages::account::AccountPage;
use crate::system::pages::forgot_password::ForgotPasswordPage;
use crate::system::pages::home::{HomePage, WelcomePage};
use crate::system::pages::login::LoginPage;
use crate::system::pages::reset_password::ResetPasswordPage;
use crate::system::pages::verify_code::VerifyCodePage;
use leptos::prelude::*;
use leptos_router::components::{ParentRoute, Route, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{path, NavigateOptions};

/// Redirects on every navigation and on login/logout
#[component]
fn RouteGuard() -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let path = location.pathname.get();
        if let RouteDecision::Redirect(target) = decide(&path, auth.is_authenticated()) {
            log::debug!("guard: {path} -> {target}");
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="header__title">"Page not found"</h1>
            <a href="/">"Back to start"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RouteGuard />
        <Routes fallback=|| view! { <NotFound /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/auth/login") view=LoginPage />
            <Route path=path!("/auth/forgot-password") view=ForgotPasswordPage />
            <Route path=path!("/auth/verify-code") view=VerifyCodePage />
            <Route path=path!("/auth/reset-password") view=ResetPasswordPage />
            <ParentRoute path=path!("/dashboard") view=DashboardShell>
                <Route path=path!("") view=WelcomePage />
                <Route path=path!("categories") view=CategoryList />
                <Route path=path!("products") view=ProductList />
                <Route path=path!("products/new") view=ProductCreatePage />
                <Route path=path!("products/edit/:id") view=ProductEditPage />
                <Route path=path!("products/view/:id") view=ProductView />
                <Route path=path!("orders") view=OrderList />
                <Route path=path!("customers") view=CustomerList />
                <Route path=path!("coupons") view=CouponList />
                <Route path=path!("earnings") view=EarningsPage />
                <Route path=path!("subscription") view=SubscriptionPlans />
                <Route path=path!("account") view=AccountPage />
            </ParentRoute>
        </Routes>
    }
}
