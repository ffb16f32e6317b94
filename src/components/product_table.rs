//! Product Table Component
//!
//! Paginated catalog table with row selection, column visibility and a
//! local-only bulk delete. Pagination and selection state reset when the
//! dashboard remounts.

use leptos::prelude::*;

use crate::models::Product;
use crate::store::{store_remove_products, use_app_store, AppStateStoreFields};
use crate::table::{self, PageNav};

/// Column key/label pairs in display order
const COLUMNS: &[(&str, &str)] = &[
    ("id", "ID"),
    ("title", "Title"),
    ("brand", "Brand"),
    ("category", "Category"),
    ("price", "Price"),
    ("stock", "Stock"),
    ("rating", "Rating"),
];

/// Rows-per-page presets for the footer selector
const ROWS_PER_PAGE_OPTIONS: &[usize] = &[10, 20, 30];

#[component]
pub fn ProductTable(loading: ReadSignal<bool>) -> impl IntoView {
    let store = use_app_store();

    let (page, set_page) = signal(1usize);
    let (rows_per_page, set_rows_per_page) = signal(10usize);
    let (selected, set_selected) = signal(Vec::<u32>::new());
    let (visible_columns, set_visible_columns) =
        signal(COLUMNS.iter().map(|(key, _)| *key).collect::<Vec<&'static str>>());
    let (column_menu_open, set_column_menu_open) = signal(false);

    let total_pages = move || {
        table::total_pages(store.products().read().len(), rows_per_page.get())
    };

    let paginated = move || {
        table::page_slice(&store.products().get(), page.get(), rows_per_page.get())
    };

    let on_nav = move |nav: PageNav| {
        set_page.update(|page| *page = table::navigate(*page, total_pages(), nav));
    };

    let on_delete_selected = move |_| {
        let ids = selected.get();
        if ids.is_empty() {
            return;
        }
        store_remove_products(&store, &ids);
        set_selected.set(Vec::new());
    };

    view! {
        <div id="products" class="panel">
            <p class="panel-title">"Products"</p>

            <div class="table-actions">
                <div class="column-menu">
                    <button
                        class="btn"
                        on:click=move |_| set_column_menu_open.update(|open| *open = !*open)
                    >
                        "Customize Columns"
                    </button>
                    <Show when=move || column_menu_open.get()>
                        <div class="column-menu-list">
                            {COLUMNS.iter().map(|(key, label)| {
                                let key = *key;
                                let label = *label;
                                view! {
                                    <label class="column-option">
                                        <input
                                            type="checkbox"
                                            prop:checked=move || visible_columns.get().contains(&key)
                                            on:change=move |_| {
                                                set_visible_columns.update(|columns| {
                                                    table::toggle_membership(columns, key);
                                                });
                                            }
                                        />
                                        {label}
                                    </label>
                                }
                            }).collect_view()}
                        </div>
                    </Show>
                </div>

                <button
                    class="btn danger"
                    disabled=move || selected.get().is_empty()
                    on:click=on_delete_selected
                >
                    {move || {
                        let count = selected.get().len();
                        if count > 0 {
                            format!("Delete {} Selected", count)
                        } else {
                            "Delete Selected".to_string()
                        }
                    }}
                </button>
            </div>

            <Show when=move || loading.get()>
                <p class="table-loading">"Loading products..."</p>
            </Show>

            <table class="product-table">
                <thead>
                    <tr>
                        <th><input type="checkbox" disabled /></th>
                        {COLUMNS.iter().map(|(key, label)| {
                            let key = *key;
                            let label = *label;
                            view! {
                                <Show when=move || visible_columns.get().contains(&key)>
                                    <th>{label}</th>
                                </Show>
                            }
                        }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=paginated
                        key=|product| product.id
                        children=move |product: Product| {
                            let id = product.id;
                            let is_selected = move || selected.get().contains(&id);

                            let cells = COLUMNS.iter().map(|(key, _)| {
                                let key = *key;
                                let value = match key {
                                    "id" => id.to_string(),
                                    "title" => product.title.clone(),
                                    "brand" => product.brand.clone(),
                                    "category" => product.category.clone(),
                                    "price" => format!("${}", product.price),
                                    "stock" => product.stock.to_string(),
                                    "rating" => product.rating.to_string(),
                                    _ => String::new(),
                                };
                                view! {
                                    <Show when=move || visible_columns.get().contains(&key)>
                                        <td>{value.clone()}</td>
                                    </Show>
                                }
                            }).collect_view();

                            view! {
                                <tr>
                                    <td>
                                        <input
                                            type="checkbox"
                                            prop:checked=is_selected
                                            on:change=move |_| {
                                                set_selected.update(|selected| {
                                                    table::toggle_membership(selected, id);
                                                });
                                            }
                                        />
                                    </td>
                                    {cells}
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <div class="table-footer">
                <div class="selection-summary">
                    {move || {
                        format!(
                            "{} of {} row(s) selected.",
                            selected.get().len(),
                            store.products().read().len(),
                        )
                    }}
                </div>

                <div class="pagination-controls">
                    <span>"Rows per page"</span>
                    <select
                        prop:value=move || rows_per_page.get().to_string()
                        on:change=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<usize>() {
                                set_rows_per_page.set(value);
                                set_page.set(1);
                            }
                        }
                    >
                        {ROWS_PER_PAGE_OPTIONS.iter().map(|value| {
                            let value = *value;
                            view! { <option value=value.to_string()>{value}</option> }
                        }).collect_view()}
                    </select>

                    <span>
                        {move || format!("Page {} of {}", page.get(), total_pages().max(1))}
                    </span>

                    <div class="page-buttons">
                        <button on:click=move |_| on_nav(PageNav::First)>"«"</button>
                        <button on:click=move |_| on_nav(PageNav::Prev)>"‹"</button>
                        <button on:click=move |_| on_nav(PageNav::Next)>"›"</button>
                        <button on:click=move |_| on_nav(PageNav::Last)>"»"</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
