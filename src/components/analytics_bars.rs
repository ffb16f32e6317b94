//! Analytics Bars Component
//!
//! Per-category stock breakdown rendered as proportional bars, largest
//! category first.

use leptos::prelude::*;

use crate::stats;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn AnalyticsBars() -> impl IntoView {
    let store = use_app_store();

    // (category, stock, percent-of-largest) rows for rendering
    let rows = move || {
        let breakdown = stats::category_stock(&store.products().get());
        let max = breakdown.first().map(|(_, stock)| *stock).unwrap_or(0).max(1);
        breakdown
            .into_iter()
            .map(|(category, stock)| {
                let percent = stock * 100 / max;
                (category, stock, percent)
            })
            .collect::<Vec<_>>()
    };

    view! {
        <div id="analytics" class="panel">
            <p class="panel-title">"Analytics"</p>
            <div class="category-bars">
                <For
                    each=rows
                    key=|(category, stock, _)| (category.clone(), *stock)
                    children=move |(category, stock, percent)| {
                        view! {
                            <div class="category-row">
                                <span class="category-name">{category}</span>
                                <div class="category-bar-track">
                                    <div
                                        class="category-bar"
                                        style=format!("width: {}%", percent)
                                    ></div>
                                </div>
                                <span class="category-stock">{stock}</span>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
