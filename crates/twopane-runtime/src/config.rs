#![forbid(unsafe_code)]

//! Configuration for a two-pane host, loaded from TOML or JSON.
//!
//! # Loading
//!
//! ```toml
//! # twopane.toml
//! [layout]
//! pane_mode = "two_pane"
//! pane1_weight = 0.4
//! layout_direction = "rtl"
//!
//! [size_classes]
//! width_expanded = 900
//!
//! [navigation]
//! pane1_start = "inbox"
//! pane2_start = "message"
//! destinations = ["home", "inbox", "message"]
//! ```
//!
//! ```rust,ignore
//! let config = TwoPaneConfig::from_toml_file("twopane.toml")?;
//! let config = TwoPaneConfig::from_json_str(json)?.validated()?;
//! ```
//!
//! # Defaults
//!
//! Every section is optional. Defaults reproduce the fixed constants:
//! pane-1 weight 0.5, width thresholds 600/840, height thresholds 480/900.

use std::path::Path;

use serde::{Deserialize, Serialize};
use twopane_core::{LayoutDirection, PaneMode, SizeClassPolicy, SizeClassThresholds};
use twopane_layout::DEFAULT_PANE1_WEIGHT;
use twopane_nav::{NavigationEngine, NavigationError, RouteSet, StartDestinations};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// Top-level TwoPaneConfig
// ---------------------------------------------------------------------------

/// Everything a host can tune without recompiling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoPaneConfig {
    pub layout: LayoutConfig,
    pub size_classes: SizeClassConfig,
    pub navigation: NavigationConfig,
}

impl TwoPaneConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }

    /// Validate all parameters.
    ///
    /// Returns a list of validation errors. An empty list means the config
    /// is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        let weight = self.layout.pane1_weight;
        if !(weight.is_finite() && weight > 0.0 && weight < 1.0) {
            errors.push(format!("layout.pane1_weight must be in (0, 1), got {weight}"));
        }

        let sc = &self.size_classes;
        if sc.width_medium > sc.width_expanded {
            errors.push(format!(
                "size_classes.width_medium ({}) must not exceed width_expanded ({})",
                sc.width_medium, sc.width_expanded
            ));
        }
        if sc.height_medium > sc.height_expanded {
            errors.push(format!(
                "size_classes.height_medium ({}) must not exceed height_expanded ({})",
                sc.height_medium, sc.height_expanded
            ));
        }

        let nav = &self.navigation;
        for (key, route) in nav.start_fields() {
            if route.is_empty() {
                errors.push(format!("navigation.{key} must not be empty"));
            } else if !nav.destinations.iter().any(|d| d == route) {
                errors.push(format!(
                    "navigation.{key} '{route}' is not listed in navigation.destinations"
                ));
            }
        }
        if nav.destinations.iter().any(String::is_empty) {
            errors.push("navigation.destinations must not contain empty routes".into());
        }

        errors
    }

    /// Return `self` if it validates, else [`ConfigError::Invalid`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            tracing::warn!(count = errors.len(), "configuration rejected");
            Err(ConfigError::Invalid { errors })
        }
    }

    /// Size-class thresholds for the classifier.
    #[must_use]
    pub fn size_class_policy(&self) -> SizeClassPolicy {
        self.size_classes.to_policy()
    }

    /// Build a navigation engine from the `[navigation]` section.
    pub fn build_navigation_engine(&self) -> Result<NavigationEngine, NavigationError> {
        NavigationEngine::new(
            self.navigation.route_set(),
            self.navigation.start_destinations(),
        )
    }

    /// Format as a JSONL line for structured logging.
    #[must_use]
    pub fn to_jsonl(&self) -> String {
        serde_json::json!({
            "schema": "twopane-config-v1",
            "pane_mode": self.layout.pane_mode,
            "pane1_weight": self.layout.pane1_weight,
            "layout_direction": self.layout.layout_direction,
            "width_expanded": self.size_classes.width_expanded,
            "destinations": self.navigation.destinations.len(),
        })
        .to_string()
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// `[layout]`: pane collapse policy and large-screen split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// When two panes collapse into one. Default: `two_pane`.
    pub pane_mode: PaneMode,
    /// Share of the window given to pane 1 on large screens. Default: 0.5.
    pub pane1_weight: f32,
    /// Mirrors vertical hinge splits when `rtl`. Default: `ltr`.
    pub layout_direction: LayoutDirection,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pane_mode: PaneMode::default(),
            pane1_weight: DEFAULT_PANE1_WEIGHT,
            layout_direction: LayoutDirection::default(),
        }
    }
}

/// `[size_classes]`: minimum extents for `medium` and `expanded`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeClassConfig {
    pub width_medium: u16,
    pub width_expanded: u16,
    pub height_medium: u16,
    pub height_expanded: u16,
}

impl Default for SizeClassConfig {
    fn default() -> Self {
        let policy = SizeClassPolicy::DEFAULT;
        Self {
            width_medium: policy.width.medium,
            width_expanded: policy.width.expanded,
            height_medium: policy.height.medium,
            height_expanded: policy.height.expanded,
        }
    }
}

impl SizeClassConfig {
    /// Thresholds, sanitized to be monotonic.
    #[must_use]
    pub fn to_policy(&self) -> SizeClassPolicy {
        SizeClassPolicy {
            width: SizeClassThresholds::new(self.width_medium, self.width_expanded),
            height: SizeClassThresholds::new(self.height_medium, self.height_expanded),
        }
    }
}

/// `[navigation]`: valid destinations and the start route of each pane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub single_pane_start: String,
    pub pane1_start: String,
    pub pane2_start: String,
    pub destinations: Vec<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            single_pane_start: "home".into(),
            pane1_start: "list".into(),
            pane2_start: "detail".into(),
            destinations: vec!["home".into(), "list".into(), "detail".into()],
        }
    }
}

impl NavigationConfig {
    fn start_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("single_pane_start", self.single_pane_start.as_str()),
            ("pane1_start", self.pane1_start.as_str()),
            ("pane2_start", self.pane2_start.as_str()),
        ]
    }

    #[must_use]
    pub fn route_set(&self) -> RouteSet {
        self.destinations.iter().map(String::as_str).collect()
    }

    #[must_use]
    pub fn start_destinations(&self) -> StartDestinations {
        StartDestinations::new(
            self.single_pane_start.as_str(),
            self.pane1_start.as_str(),
            self.pane2_start.as_str(),
        )
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
