//! Button component with an optional rounded style

use dioxus::prelude::*;

/// Stylesheet for [`MyButton`]. Hosts inject it into the document head.
pub const STYLESHEET: &str = include_str!("../assets/my-button.css");

const BASE_CLASS: &str = "my-button";
const ROUNDED_CLASS: &str = "my-button rounded";

/// Class list for a button with the given shape
pub fn button_class(rounded: bool) -> &'static str {
    if rounded {
        ROUNDED_CLASS
    } else {
        BASE_CLASS
    }
}

/// Clickable label. Renders `children` as-is; `rounded` only adds a style.
#[component]
pub fn MyButton(
    #[props(default)] rounded: bool,
    #[props(default)] onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: button_class(rounded),
            r#type: "button",
            onclick: move |e| {
                if let Some(ref handler) = onclick {
                    handler.call(e);
                }
            },
            {children}
        }
    }
}
