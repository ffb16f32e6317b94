//! Application Context
//!
//! Shared navigation state provided via Leptos Context API.

use leptos::prelude::*;

/// In-app page selector; stands in for router paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Login,
    Signup,
    Dashboard,
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Currently displayed page - read
    pub page: ReadSignal<Page>,
    /// Currently displayed page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Switch the displayed page
    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }
}
