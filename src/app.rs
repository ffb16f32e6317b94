//! Mango Frontend App
//!
//! Root component: constructs and provides the store, navigation, toast and
//! session contexts, then renders the current page.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{DashboardPage, LandingPage, LoginPage, SignupPage, ToastHost};
use crate::context::{AppContext, Page};
use crate::session;
use crate::store::AppState;
use crate::toast;

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Landing);

    // Provide shared state to all children
    provide_context(AppContext::new((page, set_page)));
    provide_context(Store::new(AppState::new()));
    toast::provide_toasts();
    session::provide_session();

    view! {
        <ToastHost />
        {move || match page.get() {
            Page::Landing => view! { <LandingPage /> }.into_any(),
            Page::Login => view! { <LoginPage /> }.into_any(),
            Page::Signup => view! { <SignupPage /> }.into_any(),
            Page::Dashboard => view! { <DashboardPage /> }.into_any(),
        }}
    }
}
