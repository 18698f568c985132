use serde::{Deserialize, Serialize};

/// Error reading or writing display configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not parse filter config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialize filter config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Display toggles and free-text filter consumed by the visibility filter.
///
/// Every field defaults to off / absent, so an empty TOML document is a valid
/// config that shows only open, unhidden, non-future tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub show_closed: bool,
    #[serde(default)]
    pub show_hidden: bool,
    /// Show tasks whose `due:` date is after today
    #[serde(default)]
    pub show_future: bool,
    /// Case-sensitive substring the raw line must contain.
    /// An empty string behaves like `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter_text: Option<String>,
}

impl FilterConfig {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn toggle_show_closed(&mut self) {
        self.show_closed = !self.show_closed;
    }

    pub fn toggle_show_hidden(&mut self) {
        self.show_hidden = !self.show_hidden;
    }

    pub fn toggle_show_future(&mut self) {
        self.show_future = !self.show_future;
    }

    pub fn set_filter_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.filter_text = if text.is_empty() { None } else { Some(text) };
    }

    pub fn clear_filter(&mut self) {
        self.filter_text = None;
    }

    /// The filter string if it would actually restrict anything
    pub fn active_filter(&self) -> Option<&str> {
        self.filter_text.as_deref().filter(|f| !f.is_empty())
    }
}
