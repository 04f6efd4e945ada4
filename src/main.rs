#![allow(warnings)]
//! User List Frontend Entry Point

mod app;
mod components;
mod debounce;
mod models;
mod names;
mod state;
mod watch;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
