//! Dashboard Page Component
//!
//! Session-gated shell. Seeds the task collection from the profile payload,
//! fetches the product catalog once per mount, and renders the analytics
//! and task sections side by side.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{AnalyticsBars, ProductTable, Sidebar, StatCards, TaskPanel};
use crate::context::{AppContext, Page};
use crate::session::{use_session, Session};
use crate::store::{store_set_products, store_set_tasks, use_app_store};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();
    let store = use_app_store();

    let (sidebar_open, set_sidebar_open) = signal(true);
    let (products_loading, set_products_loading) = signal(true);

    // Anonymous visitors belong on the login page
    Effect::new(move |_| {
        if session.session.with(|s| matches!(s, Session::Anonymous)) {
            ctx.navigate(Page::Login);
        }
    });

    // Seed the task collection from the profile payload once resolved
    Effect::new(move |_| {
        if let Some(user) = session.user() {
            web_sys::console::log_1(
                &format!("[DASHBOARD] Seeding {} tasks from profile", user.tasks.len()).into(),
            );
            store_set_tasks(&store, user.tasks);
        }
    });

    // Fetch the catalog once per mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::products::fetch_products().await {
                Ok(products) => {
                    web_sys::console::log_1(
                        &format!("[DASHBOARD] Loaded {} products", products.len()).into(),
                    );
                    store_set_products(&store, products);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[DASHBOARD] Product fetch failed: {}", e).into(),
                    );
                }
            }
            set_products_loading.set(false);
        });
    });

    view! {
        <Show
            when=move || !session.session.with(|s| s.is_loading())
            fallback=|| view! { <div class="page-loading">"Loading..."</div> }
        >
            <div class="dashboard-layout">
                <Show when=move || sidebar_open.get()>
                    <Sidebar set_sidebar_open=set_sidebar_open />
                </Show>

                <main class="dashboard-main">
                    <div class="dashboard-title-row">
                        <button
                            class="sidebar-toggle"
                            on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
                        >
                            "»"
                        </button>
                        <h1>"Dashboard"</h1>
                    </div>

                    <StatCards />
                    <AnalyticsBars />
                    <ProductTable loading=products_loading />
                    <TaskPanel />
                </main>
            </div>
        </Show>
    }
}
