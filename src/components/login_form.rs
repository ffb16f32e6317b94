//! Login Page Component
//!
//! Email/password form. Validation happens locally before any network
//! call; backend and transport failures both surface as toasts plus an
//! inline error line.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, auth::LoginArgs};
use crate::context::{AppContext, Page};
use crate::session::use_session;
use crate::storage;
use crate::toast::use_toasts;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let toasts = use_toasts();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    // Already signed in: skip straight to the dashboard
    Effect::new(move |_| {
        if session.user().is_some() {
            ctx.navigate(Page::Dashboard);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_value = email.get();
        let password_value = password.get();

        if email_value.is_empty() || password_value.is_empty() {
            toasts.error("Please enter email and password");
            return;
        }

        spawn_local(async move {
            let args = LoginArgs {
                email: &email_value,
                password: &password_value,
            };
            match api::auth::login(&args).await {
                Ok(res) if res.success && res.token.is_some() => {
                    if let Some(token) = &res.token {
                        storage::save_token(token);
                    }
                    session.set_user(res.user);
                    toasts.success("Login successful!");
                    ctx.navigate(Page::Dashboard);
                }
                Ok(res) => {
                    let message = if res.message.is_empty() {
                        "Login failed".to_string()
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
                    <p class="auth-title">"Welcome back to the"</p>
                    <p class="auth-subtitle"><span class="accent">"Community"</span></p>
                </div>

                <p class=move || if error.get().is_some() { "auth-hint error" } else { "auth-hint" }>
                    {move || error.get().unwrap_or_else(|| "Enter your login credentials".to_string())}
                </p>

                <form class="auth-form" on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            set_email.set(event_target_value(&ev));
                            set_error.set(None);
                        }
                    />
                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            set_password.set(event_target_value(&ev));
                            set_error.set(None);
                        }
                    />
                    <button type="submit" class="btn primary">"Sign in"</button>
                </form>

                <div class="auth-switch">
                    "Don't have an account? "
                    <a class="auth-link" on:click=move |_| ctx.navigate(Page::Signup)>"Sign up"</a>
                </div>
            </div>
        </div>
    }
}
