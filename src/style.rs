//! Style maps and inline-style resolution
//!
//! A block's `style` is an ordered map of camelCase CSS-like keys to JSON
//! values, exactly as the editor stores it. [`resolve_style`] turns such a
//! map into an inline `style` attribute:
//!
//! ```
//! use blockforge::style::{Style, resolve_style};
//!
//! let style: Style = [("backgroundColor", "#fff"), ("padding", "20px")].into_iter().collect();
//! assert_eq!(resolve_style(Some(&style)), "background-color: #fff; padding: 20px");
//! assert_eq!(resolve_style(None), "");
//! ```
//!
//! Resolution is total: missing, null or non-object styles resolve to an
//! empty string. Values are not validated; whatever the editor stored is
//! what the browser gets. Per-key defaults are applied by the renderers, not
//! here.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Style
// =============================================================================

/// Ordered style map: camelCase key → string or number value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style(IndexMap<String, Value>);

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a style from arbitrary JSON; anything but an object is empty
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map.into_iter().collect()),
            _ => Self::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Raw value for a key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// CSS text of a key, if it holds a usable value
    pub fn get_str(&self, key: &str) -> Option<Cow<'_, str>> {
        self.0.get(key).and_then(css_value)
    }

    /// CSS text of a key, or `default` when absent, null or empty
    pub fn or<'a>(&'a self, key: &str, default: &'a str) -> Cow<'a, str> {
        self.get_str(key).unwrap_or(Cow::Borrowed(default))
    }

    /// Insert or replace a key, keeping its position if it existed
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Shallow merge: keys in `patch` overwrite, all other keys are kept
    pub fn merge(&mut self, patch: &Map<String, Value>) {
        for (key, value) in patch {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Resolve to an inline style string
    pub fn resolve(&self) -> String {
        write_declarations(self.iter())
    }

    /// Resolve with per-key defaults, leaving out keys consumed elsewhere
    ///
    /// Keys present in the style keep their order; defaults for missing keys
    /// follow in the order given. Keys in `skip` are neither emitted nor
    /// defaulted; a renderer lists there the keys it applies to inner
    /// elements (e.g. `buttonColor`).
    pub fn resolve_with(&self, defaults: &[(&str, &str)], skip: &[&str]) -> String {
        let own = self
            .0
            .iter()
            .filter(|(k, _)| !skip.contains(&k.as_str()))
            .filter_map(|(k, v)| css_value(v).map(|v| (k.as_str(), v)));
        let fallback = defaults
            .iter()
            .filter(|(k, _)| !skip.contains(k) && self.get_str(k).is_none())
            .map(|&(k, v)| (k, Cow::Borrowed(v)));

        join_declarations(own.chain(fallback))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Resolve an optional style map to an inline style string
pub fn resolve_style(style: Option<&Style>) -> String {
    style.map(Style::resolve).unwrap_or_default()
}

/// Resolve any JSON value as a style map; non-objects resolve to `""`
pub fn resolve_style_value(value: &Value) -> String {
    match value {
        Value::Object(map) => write_declarations(map.iter().map(|(k, v)| (k.as_str(), v))),
        _ => String::new(),
    }
}

/// Convert a camelCase property name to kebab-case
///
/// `backgroundColor` → `background-color`, `WebkitBoxShadow` →
/// `-webkit-box-shadow`. Names already in kebab-case pass through.
pub fn to_kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// CSS text for a style value: scalars only, empty strings count as absent
pub fn css_value(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

fn write_declarations<'a>(entries: impl Iterator<Item = (&'a str, &'a Value)>) -> String {
    join_declarations(entries.filter_map(|(k, v)| css_value(v).map(|v| (k, v))))
}

fn join_declarations<'a>(entries: impl Iterator<Item = (&'a str, Cow<'a, str>)>) -> String {
    let mut out = String::new();
    for (key, value) in entries {
        if !out.is_empty() {
            out.push_str("; ");
        }
        out.push_str(&to_kebab_case(key));
        out.push_str(": ");
        out.push_str(&value);
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
