//! Auto-generated control panel UI

use super::registry::{ControlRegistry, ControlValue};
use crate::Route;
use dioxus::prelude::*;

/// Main mock panel component that renders controls, presets, and content
#[component]
pub fn MockPanel(title: String, registry: ControlRegistry, children: Element) -> Element {
    rsx! {
        div { class: "mock-page",
            div { class: "mock-controls",
                MockHeader { title }

                if !registry.presets.is_empty() {
                    PresetBar { registry: registry.clone() }
                }

                ControlsRow { registry: registry.clone() }
            }

            div { class: "mock-content", {children} }
        }
    }
}

#[component]
fn MockHeader(title: String) -> Element {
    rsx! {
        div { class: "mock-header",
            Link { to: Route::StoryIndex {}, class: "mock-back", "← Stories" }
            h1 { "{title}" }
        }
    }
}

/// Preset buttons bar; the preset matching the current controls is highlighted
#[component]
fn PresetBar(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "mock-presets",
            span { class: "mock-muted", "Presets:" }
            for preset in registry.presets.clone() {
                button {
                    class: if preset.matches(&registry) { "mock-chip active" } else { "mock-chip" },
                    onclick: {
                        let preset = preset.clone();
                        let registry = registry.clone();
                        move |_| registry.apply_preset(&preset)
                    },
                    "{preset.name}"
                }
            }
        }
    }
}

/// One input per control, typed by its default value
#[component]
fn ControlsRow(registry: ControlRegistry) -> Element {
    rsx! {
        div { class: "mock-control-row",
            for control in registry.controls.clone() {
                {match &control.default {
                    ControlValue::Bool(_) => rsx! {
                        BoolCheckbox {
                            registry: registry.clone(),
                            control_key: control.key,
                            label: control.label,
                            doc: control.doc,
                        }
                    },
                    ControlValue::String(_) => rsx! {
                        TextField {
                            registry: registry.clone(),
                            control_key: control.key,
                            label: control.label,
                            doc: control.doc,
                        }
                    },
                }}
            }
        }
    }
}

/// Individual bool checkbox - reads signal reactively
#[component]
fn BoolCheckbox(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    // Reading inside component body creates reactive subscription
    let current = registry.get_bool(control_key);

    rsx! {
        label { class: "mock-field", title: doc.unwrap_or(""),
            input {
                r#type: "checkbox",
                checked: current,
                onchange: move |e| registry.set_bool(control_key, e.checked()),
            }
            "{label}"
        }
    }
}

/// Individual text input - reads signal reactively
#[component]
fn TextField(
    registry: ControlRegistry,
    control_key: &'static str,
    label: &'static str,
    doc: Option<&'static str>,
) -> Element {
    let current = registry.get_string(control_key);

    rsx! {
        label { class: "mock-field", title: doc.unwrap_or(""),
            "{label}"
            input {
                r#type: "text",
                value: current,
                oninput: move |e| registry.set_string(control_key, e.value()),
            }
        }
    }
}
