use contracts::system::auth::{validate_otp, OTP_LEN};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use super::email_query;
use crate::shared::toast::use_toast;
use crate::system::auth::api;

/// Step 2: check the emailed code
#[component]
pub fn VerifyCodePage() -> impl IntoView {
    let query = use_query_map();
    let email = Memo::new(move |_| query.with(|q| q.get("email")).unwrap_or_default());
    let (otp, set_otp) = signal(String::new());
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
        let otp_val = otp.get_untracked().trim().to_string();
        if let Err(e) = validate_otp(&otp_val) {
            toast.error(e.to_string());
            return;
        }

        set_is_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::verify_code(email_val.clone(), otp_val).await {
                Ok(message) => {
                    toast.success(message.unwrap_or_else(|| "Code verified".to_string()));
                    navigate(
                        &format!("/auth/reset-password?{}", email_query(&email_val)),
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
                <h2>"Verify code"</h2>
                <p>{move || format!("Enter the {}-digit code sent to {}", OTP_LEN, email.get())}</p>
                <form on:submit=on_submit>
                    <div class="form__group">
                        <label class="form__label" for="otp">"Code"</label>
                        <input
                            type="text"
                            id="otp"
                            inputmode="numeric"
                            maxlength=OTP_LEN.to_string()
                            prop:value=move || otp.get()
                            on:input=move |ev| set_otp.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>
                    <button type="submit" class="button button--primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Verifying..." } else { "Verify" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
