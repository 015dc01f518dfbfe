//! Design token bundle.
//!
//! The final output of the engine: an ordered, duplicate-free set of CSS
//! class names plus a CSS variable map. Names come only from the fixed
//! vocabulary in `aura-tokens`; bundles are consumed immediately by the
//! presentation layer and never retained here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// CSS classes and variables for one personalized render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DesignTokenBundle {
    /// Class names, unique, in deterministic insertion order.
    pub classes: Vec<String>,
    /// CSS custom property name → value.
    pub variables: BTreeMap<String, String>,
}

impl DesignTokenBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class, keeping the first occurrence on duplicates.
    pub fn add_class(&mut self, class: impl Into<String>) {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
    }

    /// Set a variable, replacing any prior value.
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(String::as_str)
    }

    /// Classes carrying the given prefix (e.g. `theme-`).
    pub fn classes_with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a str> {
        self.classes
            .iter()
            .map(String::as_str)
            .filter(move |c| c.starts_with(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_class_deduplicates_preserving_order() {
        let mut bundle = DesignTokenBundle::new();
        bundle.add_class("theme-dark");
        bundle.add_class("density-compact");
        bundle.add_class("theme-dark");
        assert_eq!(bundle.classes, vec!["theme-dark", "density-compact"]);
    }

    #[test]
    fn set_var_replaces() {
        let mut bundle = DesignTokenBundle::new();
        bundle.set_var("--aura-spacing-unit", "8px");
        bundle.set_var("--aura-spacing-unit", "12px");
        assert_eq!(bundle.var("--aura-spacing-unit"), Some("12px"));
    }
}
