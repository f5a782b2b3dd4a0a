//! Explicit tag → component registry
//!
//! Tags are only rendered through a registry supplied as root context.
//! Nothing is resolved implicitly: an unregistered tag renders an error box.

use crate::error::ShellError;
use dioxus::prelude::*;
use std::collections::BTreeMap;
use tracing::{debug, error};

/// Renders the component bound to a tag
pub type ComponentFactory = fn(TagProps) -> Element;

/// Props handed to a registered component: string attributes plus children
#[derive(Props, Clone, PartialEq)]
pub struct TagProps {
    #[props(into)]
    pub name: String,
    #[props(default)]
    pub attrs: Vec<(String, String)>,
    pub children: Element,
}

impl TagProps {
    /// Value of an attribute, if it was set
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Coerce an attribute into a boolean prop.
///
/// Absent means `false`. Present means `true` unless it spells `"false"` or `"0"`,
/// so a bare attribute (`""`) turns the flag on.
pub fn coerce_bool(value: Option<&str>) -> bool {
    match value {
        None => false,
        Some(v) => !matches!(v.trim(), "false" | "0"),
    }
}

fn validate_tag(tag: &str) -> Result<(), ShellError> {
    let valid = tag.starts_with(|c: char| c.is_ascii_lowercase())
        && !tag.ends_with('-')
        && !tag.contains("--")
        && tag
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(ShellError::InvalidTag(tag.to_string()))
    }
}

/// Components known to one application, keyed by tag name
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    components: BTreeMap<String, ComponentFactory>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `factory` to `tag`. Each tag can be bound once.
    pub fn register(&mut self, tag: &str, factory: ComponentFactory) -> Result<(), ShellError> {
        validate_tag(tag)?;
        if self.components.contains_key(tag) {
            return Err(ShellError::DuplicateTag(tag.to_string()));
        }
        debug!("Registered component <{tag}>");
        self.components.insert(tag.to_string(), factory);
        Ok(())
    }

    pub fn resolve(&self, tag: &str) -> Option<ComponentFactory> {
        self.components.get(tag).copied()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

/// Render the component registered under `props.name`
#[allow(non_snake_case)]
pub fn Tag(props: TagProps) -> Element {
    let registry = use_context::<ComponentRegistry>();

    match registry.resolve(&props.name) {
        Some(factory) => factory(props),
        None => {
            let err = ShellError::MissingRegistration(props.name.clone());
            error!("{err}");
            rsx! {
                UnregisteredTag { message: err.to_string() }
            }
        }
    }
}

#[component]
fn UnregisteredTag(message: String) -> Element {
    rsx! {
        div { class: "shell-error", role: "alert",
            p { "{message}" }
        }
    }
}
