//! Sidebar configuration
//!
//! Everything presentation-specific (element ids, class names, indentation
//! geometry) lives here so the core never hard-codes it. The config can be
//! read from JSON or, in the browser, from a plain JS object.

use serde::{Deserialize, Serialize};

use crate::error::{SidebarError, SidebarResult};
use crate::hit_zone::HitZone;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarConfig {
    /// Element containing the sidebar rows
    #[serde(default = "default_sidebar_id")]
    pub sidebar_id: String,
    /// Element whose contents are replaced on navigation
    #[serde(default = "default_content_id")]
    pub content_slot_id: String,
    /// Element looked up inside each fetched fragment
    #[serde(default = "default_content_id")]
    pub fragment_container_id: String,
    /// Element receiving load failure messages
    #[serde(default = "default_status_id")]
    pub status_id: String,
    /// Suffix of the clickable label element paired with each row
    #[serde(default = "default_text_suffix")]
    pub text_suffix: String,
    #[serde(default = "default_expanded_class")]
    pub expanded_class: String,
    #[serde(default = "default_collapsed_class")]
    pub collapsed_class: String,
    #[serde(default = "default_selected_class")]
    pub selected_class: String,
    #[serde(default)]
    pub hit_zone: HitZone,
    /// 0 disables the timeout
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u32,
    /// Fragment loaded (and revealed) right after mounting
    #[serde(default)]
    pub initial_path: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_sidebar_id() -> String { "sidebar".to_string() }
fn default_content_id() -> String { "content".to_string() }
fn default_status_id() -> String { "content-status".to_string() }
fn default_text_suffix() -> String { "-text".to_string() }
fn default_expanded_class() -> String { "expanded".to_string() }
fn default_collapsed_class() -> String { "collapsed".to_string() }
fn default_selected_class() -> String { "selected".to_string() }
fn default_fetch_timeout_ms() -> u32 { 10_000 }
fn default_log_level() -> String { "info".to_string() }

impl Default for SidebarConfig {
    fn default() -> Self {
        Self {
            sidebar_id: default_sidebar_id(),
            content_slot_id: default_content_id(),
            fragment_container_id: default_content_id(),
            status_id: default_status_id(),
            text_suffix: default_text_suffix(),
            expanded_class: default_expanded_class(),
            collapsed_class: default_collapsed_class(),
            selected_class: default_selected_class(),
            hit_zone: HitZone::default(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
            initial_path: None,
            log_level: default_log_level(),
        }
    }
}

impl SidebarConfig {
    /// Parse and validate a JSON config; missing fields take their defaults
    pub fn from_json(json: &str) -> SidebarResult<Self> {
        let config: SidebarConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SidebarResult<()> {
        let ids = [
            ("sidebar_id", &self.sidebar_id),
            ("content_slot_id", &self.content_slot_id),
            ("fragment_container_id", &self.fragment_container_id),
            ("status_id", &self.status_id),
            ("text_suffix", &self.text_suffix),
        ];
        for (field, value) in ids {
            if value.trim().is_empty() {
                return Err(SidebarError::InvalidConfig(format!("{field} must not be empty")));
            }
        }
        self.hit_zone.validate()?;
        self.log_level_filter()?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> SidebarResult<log::LevelFilter> {
        self.log_level.parse().map_err(|_| {
            SidebarError::InvalidConfig(format!("unknown log level '{}'", self.log_level))
        })
    }

    /// Id of the label element paired with the row for `path`
    pub fn text_id(&self, path: &str) -> String {
        format!("{path}{}", self.text_suffix)
    }
}
