use contracts::system::auth::validate_email;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::email_query;
use crate::shared::toast::use_toast;
use crate::system::auth::api;

/// Step 1 of the reset: send a code to the email
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);
    let toast = use_toast();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let email_val = email.get_untracked().trim().to_string();
        if let Err(e) = validate_email(&email_val) {
            toast.error(e.to_string());
            return;
        }

        set_is_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::forgot_password(email_val.clone()).await {
                Ok(message) => {
                    toast.success(message.unwrap_or_else(|| "OTP sent to your email".to_string()));
                    navigate(
                        &format!("/auth/verify-code?{}", email_query(&email_val)),
                        Default::default(),
                    );
                }
                Err(e) => toast.error(e),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Forgot password"</h2>
                <p>"Enter your email and we will send you a verification code."</p>
                <form on:submit=on_submit>
                    <div class="form__group">
                        <label class="form__label" for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>
                    <button type="submit" class="button button--primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Sending..." } else { "Send code" }}
                    </button>
                </form>
                <div class="login-info">
                    <A href="/auth/login">"Back to login"</A>
                </div>
            </div>
        </div>
    }
}
