//! Session Provider
//!
//! Resolves the stored bearer token to a user profile and exposes the
//! result as a three-state session. `Loading` gates protected content, so
//! "loading and authenticated" is not representable.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::User;
use crate::storage;

/// Authentication state for the current browser session
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Loading,
    Authenticated(User),
    Anonymous,
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Session::Loading)
    }
}

/// Session signals provided via context
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current session state - read
    pub session: ReadSignal<Session>,
    set_session: WriteSignal<Session>,
    /// Trigger to re-run token resolution - read
    refetch_trigger: ReadSignal<u32>,
    set_refetch_trigger: WriteSignal<u32>,
}

impl SessionContext {
    /// Current user, if authenticated
    pub fn user(&self) -> Option<User> {
        self.session.with(|session| session.user().cloned())
    }

    /// Set the session directly from a login/signup response
    pub fn set_user(&self, user: Option<User>) {
        match user {
            Some(user) => self.set_session.set(Session::Authenticated(user)),
            None => self.set_session.set(Session::Anonymous),
        }
    }

    /// Re-run token resolution
    pub fn refetch(&self) {
        self.set_refetch_trigger.update(|v| *v += 1);
    }

    /// Drop the stored token and resolve back to anonymous
    pub fn logout(&self) {
        storage::clear_token();
        self.refetch();
    }
}

/// Create the session context, start token resolution and provide the
/// context to all children. Called once from the root component.
pub fn provide_session() -> SessionContext {
    let (session, set_session) = signal(Session::Loading);
    let (refetch_trigger, set_refetch_trigger) = signal(0u32);

    let ctx = SessionContext {
        session,
        set_session,
        refetch_trigger,
        set_refetch_trigger,
    };

    // Resolve the stored token to a profile; re-runs on every refetch
    Effect::new(move |_| {
        let _ = refetch_trigger.get();
        set_session.set(Session::Loading);

        // No token: resolve without a network round-trip
        if storage::load_token().is_none() {
            set_session.set(Session::Anonymous);
            return;
        }

        spawn_local(async move {
            match api::auth::get_profile().await {
                Ok(profile) => {
                    web_sys::console::log_1(
                        &format!("[SESSION] Resolved user {}", profile.user.email).into(),
                    );
                    set_session.set(Session::Authenticated(profile.user));
                }
                Err(e) => {
                    web_sys::console::warn_1(
                        &format!("[SESSION] Profile fetch failed: {}", e).into(),
                    );
                    set_session.set(Session::Anonymous);
                }
            }
        });
    });

    provide_context(ctx);
    ctx
}

/// Get the session context from context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
