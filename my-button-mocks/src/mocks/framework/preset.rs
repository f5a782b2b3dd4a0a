//! State presets for quick configuration switching

use super::registry::{ControlRegistry, ControlValue};
use crate::catalog::Scenario;
use dioxus::prelude::*;
use std::collections::HashMap;

/// A named preset with predefined control values
#[derive(Clone, Debug, PartialEq)]
pub struct Preset {
    pub name: &'static str,
    pub values: HashMap<&'static str, ControlValue>,
}

impl Preset {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            values: HashMap::new(),
        }
    }

    /// Preset reproducing a catalog scenario on the button controls
    pub fn from_scenario(scenario: &Scenario) -> Self {
        Self::new(scenario.name)
            .set_bool("rounded", scenario.args.is_rounded())
            .set_string("label", scenario.args.content)
    }

    pub fn set_bool(mut self, key: &'static str, value: bool) -> Self {
        self.values.insert(key, ControlValue::Bool(value));
        self
    }

    pub fn set_string(mut self, key: &'static str, value: &str) -> Self {
        self.values
            .insert(key, ControlValue::String(value.to_string()));
        self
    }

    /// Expected value for a control: the preset's own, else the control default
    pub fn expected<'a>(&'a self, key: &str, default: &'a ControlValue) -> &'a ControlValue {
        self.values.get(key).unwrap_or(default)
    }

    /// True when every control holds the value this preset would set.
    /// Controls the preset leaves out must sit at their default.
    pub fn matches(&self, registry: &ControlRegistry) -> bool {
        registry.controls.iter().all(|control| {
            registry
                .values
                .get(control.key)
                .is_some_and(|signal| *signal.read() == *self.expected(control.key, &control.default))
        })
    }
}
