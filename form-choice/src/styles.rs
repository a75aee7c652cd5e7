//! Style configuration for choice components
//!
//! Components ask for semantic style names (`Choice`, `Control`, `fullWidth`,
//! `alignmentCenter`, ...) and [`ChoiceStyles`] maps them to concrete class
//! tokens. Hosts provide a configured instance through Dioxus context; without
//! one the default Polaris-style naming is used.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, warn};

/// Semantic name of the root label element
pub const ROOT: &str = "Choice";

const DEFAULT_PREFIX: &str = "Polaris-Choice";

/// Failure to load a [`ChoiceStyles`] configuration
#[derive(Error, Debug)]
pub enum StylesError {
    #[error("invalid styles config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("styles prefix must not be empty")]
    EmptyPrefix,
}

/// Maps semantic style names to class tokens
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChoiceStyles {
    /// Block prefix; elements become `{prefix}__{Name}`, modifiers `{prefix}--{name}`
    pub prefix: String,
    /// Explicit class tokens that replace the derived ones
    pub overrides: BTreeMap<String, String>,
}

impl Default for ChoiceStyles {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            overrides: BTreeMap::new(),
        }
    }
}

impl ChoiceStyles {
    /// Parse a JSON config such as `{"prefix": "choice", "overrides": {"Error": "text-red"}}`
    pub fn from_json(json: &str) -> Result<Self, StylesError> {
        let styles: Self = serde_json::from_str(json).inspect_err(|e| {
            warn!("Rejected choice styles config: {e}");
        })?;

        if styles.prefix.is_empty() {
            warn!("Rejected choice styles config: empty prefix");
            return Err(StylesError::EmptyPrefix);
        }

        debug!(
            prefix = %styles.prefix,
            overrides = styles.overrides.len(),
            "Loaded choice styles"
        );
        Ok(styles)
    }

    /// Class token for a semantic style name
    pub fn resolve(&self, name: &str) -> String {
        if let Some(token) = self.overrides.get(name) {
            return token.clone();
        }

        if name == ROOT {
            return self.prefix.clone();
        }

        match name.chars().next() {
            Some(first) if first.is_uppercase() => format!("{}__{name}", self.prefix),
            _ => format!("{}--{name}", self.prefix),
        }
    }
}

/// Styles provided by an ancestor, or the defaults
pub fn use_choice_styles() -> ChoiceStyles {
    try_use_context::<ChoiceStyles>().unwrap_or_default()
}
