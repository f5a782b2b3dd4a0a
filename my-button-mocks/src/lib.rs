//! my-button mocks - Story catalog for the button component
//!
//! Lists every registered scenario for visual review, plus an interactive
//! page with controls and presets synced to the URL.

pub mod catalog;
pub mod mocks;
pub mod pages;
pub mod ui;

#[cfg(test)]
mod test_utils;

use dioxus::prelude::*;
use my_button::STYLESHEET;
use pages::{MockButton, StoryIndex};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    // Story catalog at root
    #[route("/")]
    StoryIndex {},
    // Mock pages with controls
    #[route("/button?:state")]
    MockButton { state: Option<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Style { "{STYLESHEET}" }
        div { class: "mocks-root", Router::<Route> {} }
    }
}
