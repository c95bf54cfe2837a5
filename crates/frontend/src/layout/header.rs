use crate::shared::api_utils::asset_url;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn Header() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let display_name = move || {
        auth.session
            .with(|s| s.as_ref().map(|s| s.display_name().to_string()))
            .unwrap_or_default()
    };
    let avatar = move || auth.session.with(|s| s.as_ref().and_then(|s| s.image.clone()));

    let on_logout = move |_| {
        auth.logout();
        navigate("/auth/login", Default::default());
    };

    view! {
        <header class="top-header">
            <div class="top-header__spacer"></div>
            <div class="top-header__user">
                {move || avatar().map(|src| view! {
                    <img class="top-header__avatar" src=asset_url(&src) alt="avatar" />
                })}
                <span class="top-header__name">{display_name}</span>
                <button class="button button--secondary" on:click=on_logout>
                    {icon("logout")}
                    "Logout"
                </button>
            </div>
        </header>
    }
}
