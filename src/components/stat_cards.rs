//! Stat Cards Component
//!
//! Headline metrics over the product catalog.

use leptos::prelude::*;

use crate::stats;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatCards() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="stat-grid">
            <div class="stat-card">
                <div class="stat-label">"Total Revenue"</div>
                <div class="stat-value">
                    {move || format!("${:.2}", stats::total_revenue(&store.products().get()))}
                </div>
                <div class="stat-note green">"Price × Stock"</div>
            </div>
            <div class="stat-card">
                <div class="stat-label">"Avg. Rating"</div>
                <div class="stat-value">
                    {move || format!("{:.2}", stats::average_rating(&store.products().get()))}
                </div>
                <div class="stat-note blue">"Customer Score"</div>
            </div>
            <div class="stat-card">
                <div class="stat-label">"Total Stock"</div>
                <div class="stat-value">
                    {move || stats::total_stock(&store.products().get())}
                </div>
                <div class="stat-note yellow">"Inventory"</div>
            </div>
            <div class="stat-card">
                <div class="stat-label">"Categories"</div>
                <div class="stat-value">
                    {move || stats::category_count(&store.products().get())}
                </div>
                <div class="stat-note purple">"Segmented"</div>
            </div>
        </div>
    }
}
