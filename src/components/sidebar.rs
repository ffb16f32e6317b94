//! Sidebar Component
//!
//! Dashboard navigation rail with profile summary and logout.

use leptos::prelude::*;

use crate::context::{AppContext, Page};
use crate::session::use_session;

#[component]
pub fn Sidebar(set_sidebar_open: WriteSignal<bool>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let on_logout = move |_| {
        session.logout();
        ctx.navigate(Page::Login);
    };

    view! {
        <aside class="sidebar">
            <div class="sidebar-top">
                <a class="sidebar-brand" on:click=move |_| ctx.navigate(Page::Landing)>
                    "Dashboard Inc."
                </a>
                <button
                    class="sidebar-collapse"
                    on:click=move |_| set_sidebar_open.set(false)
                >
                    "«"
                </button>
            </div>

            <nav class="sidebar-nav">
                <p class="nav-section">"Dashboard"</p>
                <a href="#analytics">"Analytics"</a>
                <a href="#products">"Products"</a>
                <a href="#tasks">"Tasks"</a>

                <p class="nav-section">"Profile"</p>
                <a href="#">"Settings"</a>
                <button class="sidebar-logout" on:click=on_logout>"Logout"</button>
            </nav>

            <div class="sidebar-profile">
                <span class="avatar"></span>
                <span class="profile-name">
                    {move || session.user().map(|user| user.name).unwrap_or_default()}
                </span>
            </div>
        </aside>
    }
}
