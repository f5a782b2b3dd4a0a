//! Root tree and the component bindings this app registers

use crate::registry::{coerce_bool, ComponentFactory, Tag, TagProps};
use dioxus::prelude::*;
use my_button::{MyButton, STYLESHEET};

pub const MY_BUTTON_TAG: &str = "my-button";

/// Adapter binding the `my-button` tag to [`MyButton`]
pub fn my_button(props: TagProps) -> Element {
    let rounded = coerce_bool(props.attr("rounded"));
    rsx! {
        MyButton { rounded, {props.children} }
    }
}

/// Components handed to the shell at startup
pub fn components() -> Vec<(&'static str, ComponentFactory)> {
    vec![(MY_BUTTON_TAG, my_button as ComponentFactory)]
}

/// Root component mounted onto the anchor node
#[component]
pub fn App() -> Element {
    rsx! {
        document::Title { "my-app" }
        document::Style { "{STYLESHEET}" }
        ShellView {}
    }
}

/// Page body, rendered from registered tags only
#[component]
pub fn ShellView() -> Element {
    rsx! {
        main { class: "my-app",
            Tag { name: MY_BUTTON_TAG, "Hello from my-app" }
        }
    }
}
