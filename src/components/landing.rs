//! Landing Page Component
//!
//! Marketing page with session-aware calls to action.

use leptos::prelude::*;

use crate::context::{AppContext, Page};
use crate::session::use_session;

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <Show
            when=move || !session.session.with(|s| s.is_loading())
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            <div class="landing">
                <header class="landing-header">
                    <h1 class="brand">"Mango"</h1>
                    {move || match session.user() {
                        Some(_) => view! {
                            <button class="btn" on:click=move |_| ctx.navigate(Page::Dashboard)>
                                "Go to Dashboard"
                            </button>
                        }
                        .into_any(),
                        None => view! {
                            <div class="landing-actions">
                                <button class="btn" on:click=move |_| ctx.navigate(Page::Login)>
                                    "Login"
                                </button>
                                <button class="btn" on:click=move |_| ctx.navigate(Page::Signup)>
                                    "Sign Up"
                                </button>
                            </div>
                        }
                        .into_any(),
                    }}
                </header>

                <main class="landing-hero">
                    <h2>"Manage Tasks & Analytics Effortlessly with Mango"</h2>
                    <p class="hero-sub">
                        "Centralize your workflow, track tasks, and gain insights with our modern management dashboard."
                    </p>
                    <button
                        class="btn primary"
                        on:click=move |_| {
                            let target = if session.user().is_some() {
                                Page::Dashboard
                            } else {
                                Page::Signup
                            };
                            ctx.navigate(target);
                        }
                    >
                        {move || if session.user().is_some() { "Go to Dashboard" } else { "Get Started" }}
                    </button>
                </main>

                <section class="landing-features">
                    <div class="feature-card">
                        <h3>"Task Management"</h3>
                        <p>"Create, update, and track all your tasks seamlessly with our interactive dashboard."</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Analytics Dashboard"</h3>
                        <p>"Visualize productivity and performance metrics using interactive charts and tables."</p>
                    </div>
                    <div class="feature-card">
                        <h3>"Real-time Updates"</h3>
                        <p>"Tasks and data are updated instantly so your team can stay aligned and productive."</p>
                    </div>
                </section>

                <footer class="landing-footer">
                    {format!("© {} Mango – The Management App. All rights reserved.", year)}
                </footer>
            </div>
        </Show>
    }
}
