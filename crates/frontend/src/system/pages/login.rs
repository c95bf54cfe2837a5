use contracts::system::auth::validate_login;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::shared::toast::use_toast;
use crate::system::auth::{api, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let auth = use_auth();
    let toast = use_toast();
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let email_val = email.get_untracked().trim().to_string();
        let password_val = password.get_untracked();
        if let Err(e) = validate_login(&email_val, &password_val) {
            toast.error(e.to_string());
            return;
        }

        set_is_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(email_val, password_val).await {
                Ok(session) => {
                    auth.login(session);
                    toast.success("Login successful");
                    navigate("/dashboard", Default::default());
                }
                Err(e) => toast.error(e),
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Vendor Dashboard"</h1>
                <h2>"Sign in"</h2>

                <form on:submit=on_submit>
                    <div class="form__group">
                        <label class="form__label" for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="vendor@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form__group">
                        <label class="form__label" for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>

                <div class="login-info">
                    <A href="/auth/forgot-password">"Forgot password?"</A>
                </div>
            </div>
        </div>
    }
}
