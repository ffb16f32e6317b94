//! Toast Host Component
//!
//! Renders the transient notification stack in a fixed overlay.

use leptos::prelude::*;

use crate::toast::{use_toasts, ToastKind};

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-stack">
            <For
                each=move || toasts.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast success",
                        ToastKind::Error => "toast error",
                    };
                    view! { <div class=class>{toast.message}</div> }
                }
            />
        </div>
    }
}
