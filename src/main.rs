#![allow(warnings)]
//! Mango Frontend Entry Point

mod models;
mod storage;
mod api;
mod context;
mod session;
mod store;
mod toast;
mod tasks;
mod table;
mod stats;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
