//! Static story catalog
//!
//! A story group is an ordered list of named scenarios. Each scenario is a
//! render descriptor (props plus slot text) for one visual state.

use dioxus::prelude::*;
use my_button::MyButton;

/// Props and slot content for one render of the button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Args {
    /// `None` renders without passing the flag at all
    pub rounded: Option<bool>,
    pub content: &'static str,
}

impl Args {
    pub const fn text(content: &'static str) -> Self {
        Self {
            rounded: None,
            content,
        }
    }

    pub const fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = Some(rounded);
        self
    }

    /// Flag the component will actually see
    pub fn is_rounded(&self) -> bool {
        self.rounded.unwrap_or(false)
    }
}

/// A named scenario inside a story group
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub args: Args,
}

/// Ordered scenarios for one component
#[derive(Clone, Debug, PartialEq)]
pub struct Stories {
    kind: &'static str,
    scenarios: Vec<Scenario>,
}

impl Stories {
    pub fn of(kind: &'static str) -> Self {
        Self {
            kind,
            scenarios: Vec::new(),
        }
    }

    /// Append a scenario. Names are unique within a group.
    pub fn add(mut self, name: &'static str, args: Args) -> Self {
        if self.scenarios.iter().any(|s| s.name == name) {
            panic!("story '{}' is registered twice in '{}'", name, self.kind);
        }
        self.scenarios.push(Scenario { name, args });
        self
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn find(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }
}

pub fn button_stories() -> Stories {
    Stories::of("Button")
        .add("as a component", Args::text("with text"))
        .add("with emoji", Args::text("😀 😎 👍 💯"))
        .add("with text", Args::text("rounded").rounded(true))
}

/// Every story group shown in the catalog
pub fn all_stories() -> Vec<Stories> {
    vec![button_stories()]
}

/// Render a scenario's descriptor
#[component]
pub fn ScenarioPreview(args: Args) -> Element {
    match args.rounded {
        Some(rounded) => rsx! {
            MyButton { rounded, "{args.content}" }
        },
        None => rsx! {
            MyButton { "{args.content}" }
        },
    }
}
