//! Control registry for typed control management with URL sync

use super::preset::Preset;
use crate::mocks::url_state::{parse_state, StateBuilder};
use crate::Route;
use dioxus::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Value stored in the control registry
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    Bool(bool),
    String(String),
}

impl ControlValue {
    /// Parse a URL state value against the type of `self`
    fn parse_like(&self, raw: &str) -> ControlValue {
        match self {
            ControlValue::Bool(_) => ControlValue::Bool(raw == "1" || raw == "true"),
            ControlValue::String(_) => ControlValue::String(raw.to_string()),
        }
    }
}

/// Definition of a control with metadata
#[derive(Clone, Debug, PartialEq)]
pub struct ControlDef {
    pub key: &'static str,
    pub label: &'static str,
    pub default: ControlValue,
    pub doc: Option<&'static str>,
}

/// Builder for creating a ControlRegistry
#[derive(Default)]
pub struct ControlRegistryBuilder {
    controls: Vec<ControlDef>,
    presets: Vec<Preset>,
}

impl ControlRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(mut self, key: &'static str, label: &'static str, default: ControlValue) -> Self {
        if self.controls.iter().any(|c| c.key == key) {
            panic!("control '{}' is defined twice", key);
        }
        self.controls.push(ControlDef {
            key,
            label,
            default,
            doc: None,
        });
        self
    }

    /// Add a boolean control
    pub fn bool_control(self, key: &'static str, label: &'static str, default: bool) -> Self {
        self.push(key, label, ControlValue::Bool(default))
    }

    /// Add a free-form string control
    pub fn string_control(self, key: &'static str, label: &'static str, default: &str) -> Self {
        self.push(key, label, ControlValue::String(default.to_string()))
    }

    /// Add documentation to the last control
    pub fn doc(mut self, doc: &'static str) -> Self {
        if let Some(last) = self.controls.last_mut() {
            last.doc = Some(doc);
        }
        self
    }

    pub fn with_presets(mut self, presets: Vec<Preset>) -> Self {
        self.presets = presets;
        self
    }

    /// Initial values: URL state where present, defaults otherwise
    fn initial_values(&self, initial_state: Option<&str>) -> Vec<ControlValue> {
        let state_pairs = initial_state.map(parse_state).unwrap_or_default();

        self.controls
            .iter()
            .map(|def| {
                state_pairs
                    .iter()
                    .find(|(k, _)| k == def.key)
                    .map(|(_, v)| def.default.parse_like(v))
                    .unwrap_or_else(|| def.default.clone())
            })
            .collect()
    }

    /// Build the registry - must be called inside a component (uses hooks)
    pub fn build(self, initial_state: Option<String>) -> ControlRegistry {
        // Presets may only reference known controls
        for preset in &self.presets {
            for key in preset.values.keys() {
                if !self.controls.iter().any(|c| c.key == *key) {
                    panic!(
                        "preset '{}' references unknown control '{}'",
                        preset.name, key
                    );
                }
            }
        }

        let initial = self.initial_values(initial_state.as_deref());

        let mut values: HashMap<&'static str, Signal<ControlValue>> = HashMap::new();
        for (def, value) in self.controls.iter().zip(initial) {
            // One hook per control; the control list is fixed for the page's lifetime
            let signal = use_signal(|| value);
            values.insert(def.key, signal);
        }

        ControlRegistry {
            controls: self.controls,
            values,
            presets: self.presets,
        }
    }
}

/// Registry holding all controls and their current values
#[derive(Clone, PartialEq)]
pub struct ControlRegistry {
    pub controls: Vec<ControlDef>,
    pub values: HashMap<&'static str, Signal<ControlValue>>,
    pub presets: Vec<Preset>,
}

impl ControlRegistry {
    /// Get a boolean value (reads signal, creating subscription)
    pub fn get_bool(&self, key: &'static str) -> bool {
        self.values
            .get(key)
            .map(|s| matches!(&*s.read(), ControlValue::Bool(true)))
            .unwrap_or(false)
    }

    /// Get a string value (reads signal, creating subscription)
    pub fn get_string(&self, key: &'static str) -> String {
        self.values
            .get(key)
            .and_then(|s| match &*s.read() {
                ControlValue::String(s) => Some(s.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    pub fn set_bool(&self, key: &'static str, value: bool) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::Bool(value));
        }
    }

    pub fn set_string(&self, key: &'static str, value: String) {
        if let Some(mut signal) = self.values.get(key).copied() {
            signal.set(ControlValue::String(value));
        }
    }

    /// Apply a preset: every control goes to the preset's value or its default
    pub fn apply_preset(&self, preset: &Preset) {
        debug!("Applying preset '{}'", preset.name);
        for control in &self.controls {
            if let Some(mut signal) = self.values.get(control.key).copied() {
                signal.set(preset.expected(control.key, &control.default).clone());
            }
        }
    }

    /// Build URL state string from current values
    pub fn build_state(&self) -> Option<String> {
        let mut builder = StateBuilder::new();

        for def in &self.controls {
            if let Some(signal) = self.values.get(def.key) {
                match (&*signal.read(), &def.default) {
                    (ControlValue::Bool(v), ControlValue::Bool(default)) => {
                        builder.set_bool(def.key, *v, *default);
                    }
                    (ControlValue::String(v), ControlValue::String(default)) => {
                        builder.set_string(def.key, v, default);
                    }
                    _ => {}
                }
            }
        }

        builder.build()
    }

    /// Keep the page URL in sync with the controls. `to_route` builds the
    /// page's route from an encoded state.
    pub fn use_url_sync(&self, to_route: fn(Option<String>) -> Route) {
        let registry = self.clone();
        let mut is_mounted = use_signal(|| false);

        use_effect(move || {
            // Read all values to subscribe to changes
            for signal in registry.values.values() {
                let _ = signal.read();
            }

            // The URL already reflects the initial state
            if !*is_mounted.peek() {
                is_mounted.set(true);
                return;
            }

            navigator().replace(to_route(registry.build_state()));
        });
    }
}
