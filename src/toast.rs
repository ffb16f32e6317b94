//! Transient Notifications
//!
//! Toast stack for success/error feedback; each toast dismisses itself
//! after a short delay. Failures never alter application state, so a toast
//! is the whole error surface for a rejected call.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long a toast stays visible
const TOAST_DURATION_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast signals provided via context
#[derive(Clone, Copy)]
pub struct ToastContext {
    /// Visible toasts, oldest first - read
    pub toasts: ReadSignal<Vec<Toast>>,
    set_toasts: WriteSignal<Vec<Toast>>,
    next_id: ReadSignal<u32>,
    set_next_id: WriteSignal<u32>,
}

impl ToastContext {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.set_next_id.set(id + 1);
        self.set_toasts.update(|toasts| {
            toasts.push(Toast { id, kind, message });
        });

        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            set_toasts.update(|toasts| toasts.retain(|toast| toast.id != id));
        });
    }
}

/// Create the toast context and provide it to all children
pub fn provide_toasts() -> ToastContext {
    let (toasts, set_toasts) = signal(Vec::<Toast>::new());
    let (next_id, set_next_id) = signal(0u32);

    let ctx = ToastContext {
        toasts,
        set_toasts,
        next_id,
        set_next_id,
    };
    provide_context(ctx);
    ctx
}

/// Get the toast context from context
pub fn use_toasts() -> ToastContext {
    expect_context::<ToastContext>()
}
