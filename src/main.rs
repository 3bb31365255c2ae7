#![allow(warnings)]
//! Checkfine Admin Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod datetime;
mod download;
mod models;
mod permissions;
mod requirements;
mod routes;
mod session;
mod tree;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
