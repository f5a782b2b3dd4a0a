//! URL state persistence for mock pages
//!
//! Control state travels as base64url-encoded JSON in the `state` query
//! parameter, so keys never collide with other query parameters.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use std::collections::BTreeMap;

/// Decode a `state` query value into key-value pairs. Malformed input yields no pairs.
pub fn parse_state(encoded: &str) -> Vec<(String, String)> {
    if encoded.is_empty() {
        return Vec::new();
    }

    URL_SAFE_NO_PAD
        .decode(encoded)
        .ok()
        .and_then(|bytes| serde_json::from_slice::<BTreeMap<String, String>>(&bytes).ok())
        .map(|map| map.into_iter().collect())
        .unwrap_or_default()
}

/// Encode key-value pairs as a `state` query value. Keys come out sorted.
pub fn build_state(pairs: &[(String, String)]) -> String {
    let map: BTreeMap<&str, &str> = pairs
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    let json = serde_json::to_string(&map).unwrap_or_else(|_| "{}".to_string());
    URL_SAFE_NO_PAD.encode(json.as_bytes())
}

/// Collects non-default control values
#[derive(Default)]
pub struct StateBuilder {
    pairs: Vec<(String, String)>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_bool(&mut self, key: &str, value: bool, default: bool) {
        if value != default {
            self.pairs
                .push((key.to_string(), if value { "1" } else { "0" }.to_string()));
        }
    }

    pub fn set_string(&mut self, key: &str, value: &str, default: &str) {
        if value != default {
            self.pairs.push((key.to_string(), value.to_string()));
        }
    }

    /// `None` when everything is at its default
    pub fn build(self) -> Option<String> {
        if self.pairs.is_empty() {
            None
        } else {
            Some(build_state(&self.pairs))
        }
    }
}
