use contracts::system::auth::validate_new_password;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::shared::toast::use_toast;
use crate::system::auth::api;

/// Step 3: choose a new password
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let query = use_query_map();
    let email = Memo::new(move |_| query.with(|q| q.get("email")).unwrap_or_default());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let toast = use_toast();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let email_val = email.get_untracked();
        if email_val.is_empty() {
            toast.error("Email is missing, start again from Forgot password");
            return;
        }
        let password_val = password.get_untracked();
        if let Err(e) = validate_new_password(&password_val, &confirm.get_untracked()) {
            toast.error(e.to_string());
            return;
        }

        set_is_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::reset_password(email_val, password_val).await {
                Ok(message) => {
                    toast.success(message.unwrap_or_else(|| "Password reset successfully".to_string()));
                    navigate("/auth/login", Default::default());
                }
                Err(e) => toast.error(e),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Reset password"</h2>
                <form on:submit=on_submit>
                    <div class="form__group">
                        <label class="form__label" for="password">"New password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>
                    <div class="form__group">
                        <label class="form__label" for="confirm">"Confirm password"</label>
                        <input
                            type="password"
                            id="confirm"
                            prop:value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>
                    <button type="submit" class="button button--primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Saving..." } else { "Reset password" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
