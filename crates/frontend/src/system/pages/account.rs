use contracts::system::auth::validate_change_password;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::asset_url;
use crate::shared::components::page_header::PageHeader;
use crate::shared::toast::use_toast;
use crate::system::auth::{api, context::use_auth};

/// Current user info and change-password form
#[component]
pub fn AccountPage() -> impl IntoView {
    let auth = use_auth();
    let toast = use_toast();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let field = move |pick: fn(&contracts::system::auth::Session) -> Option<String>| {
        move || {
            auth.session
                .with(|s| s.as_ref().and_then(pick))
                .unwrap_or_else(|| "-".to_string())
        }
    };
    let name = field(|s| Some(s.display_name().to_string()));
    let email = field(|s| Some(s.email.clone()));
    let role = field(|s| s.role.clone());
    let store = field(|s| s.store_id.clone());
    let image = move || auth.session.with(|s| s.as_ref().and_then(|s| s.image.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let old_val = old_password.get_untracked();
        let new_val = new_password.get_untracked();
        if let Err(e) = validate_change_password(&old_val, &new_val, &confirm.get_untracked()) {
            toast.error(e.to_string());
            return;
        }

        saving.set(true);
        spawn_local(async move {
            match api::change_password(old_val, new_val).await {
                Ok(message) => {
                    toast.success(message.unwrap_or_else(|| "Password changed successfully".to_string()));
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirm.set(String::new());
                }
                Err(e) => toast.error(e),
            }
            saving.set(false);
        });
    };

    let password_input = move |id: &'static str, label: &'static str, value: RwSignal<String>| {
        view! {
            <div class="form__group">
                <label class="form__label" for=id>{label}</label>
                <input
                    type="password"
                    id=id
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                    disabled=move || saving.get()
                />
            </div>
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Account">
                {()}
            </PageHeader>

            <div class="card account-info">
                {move || image().map(|src| view! {
                    <img class="account-info__avatar" src=asset_url(&src) alt="avatar" />
                })}
                <dl class="details-list">
                    <dt>"Name"</dt><dd>{name}</dd>
                    <dt>"Email"</dt><dd>{email}</dd>
                    <dt>"Role"</dt><dd>{role}</dd>
                    <dt>"Store"</dt><dd>{store}</dd>
                </dl>
            </div>

            <form class="card form" on:submit=on_submit>
                <h3>"Change password"</h3>
                {password_input("old-password", "Current password", old_password)}
                {password_input("new-password", "New password", new_password)}
                {password_input("confirm-password", "Confirm new password", confirm)}
                <button type="submit" class="button button--primary" disabled=move || saving.get()>
                    {move || if saving.get() { "Saving..." } else { "Change password" }}
                </button>
            </form>
        </div>
    }
}
