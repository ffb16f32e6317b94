//! Signup Page Component
//!
//! Name/email/password form gated by a terms checkbox. Mirrors the login
//! flow: validate locally, then store the token and resolve the session
//! from the signup response.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, auth::SignupArgs};
use crate::context::{AppContext, Page};
use crate::session::use_session;
use crate::storage;
use crate::toast::use_toasts;

#[component]
pub fn SignupPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let toasts = use_toasts();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (terms_accepted, set_terms_accepted) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);

    // Already signed in: skip straight to the dashboard
    Effect::new(move |_| {
        if session.user().is_some() {
            ctx.navigate(Page::Dashboard);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name_value = name.get();
        let email_value = email.get();
        let password_value = password.get();

        if name_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            toasts.error("Please fill all the fields");
            return;
        }
        if !terms_accepted.get() {
            toasts.error("Please accept terms and conditions");
            return;
        }

        spawn_local(async move {
            let args = SignupArgs {
                name: &name_value,
                email: &email_value,
                password: &password_value,
            };
            match api::auth::signup(&args).await {
                Ok(res) if res.success && res.token.is_some() => {
                    if let Some(token) = &res.token {
                        storage::save_token(token);
                    }
                    session.set_user(res.user);
                    toasts.success("Signup successful!");
                    ctx.navigate(Page::Dashboard);
                }
                Ok(res) => {
                    let message = if res.message.is_empty() {
                        "Signup failed".to_string()
                    } else {
                        res.message
                    };
                    toasts.error(message.clone());
                    set_error.set(Some(message));
                }
                Err(e) => {
                    toasts.error(e.clone());
                    set_error.set(Some(e));
                }
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-headers">
                    <p class="auth-title">"Join the Fastest Growing"</p>
                    <p class="auth-subtitle"><span class="accent">"Community"</span></p>
                </div>

                <p class=move || if error.get().is_some() { "auth-hint error" } else { "auth-hint" }>
                    {move || {
                        error
                            .get()
                            .unwrap_or_else(|| {
                                "Name, Email and Password are required to register".to_string()
                            })
                    }}
                </p>

                <form class="auth-form" on:submit=on_submit>
                    <input
                        type="text"
                        placeholder="Enter name"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            set_name.set(event_target_value(&ev));
                            set_error.set(None);
                        }
                    />
                    <input
                        type="email"
                        placeholder="Enter email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            set_email.set(event_target_value(&ev));
                            set_error.set(None);
                        }
                    />
                    <input
                        type="password"
                        placeholder="Enter password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            set_password.set(event_target_value(&ev));
                            set_error.set(None);
                        }
                    />

                    <label class="terms-row">
                        <input
                            type="checkbox"
                            prop:checked=move || terms_accepted.get()
                            on:change=move |ev| set_terms_accepted.set(event_target_checked(&ev))
                        />
                        <span>"Accept Terms and Conditions"</span>
                    </label>

                    <button type="submit" class="btn primary">"Sign up"</button>
                </form>

                <div class="auth-switch">
                    "Already have an account? "
                    <a class="auth-link" on:click=move |_| ctx.navigate(Page::Login)>"Sign in"</a>
                </div>
            </div>
        </div>
    }
}
