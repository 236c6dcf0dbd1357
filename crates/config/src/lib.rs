//! Configuration for the stck playground.
//!
//! Configuration is written in TOML. Every field is optional:
//!
//! ```toml
//! # Quiet period after the last edit before publishing.
//! debounce_ms = 500
//! # Minimum spacing between share-token writes to the URL.
//! share_interval_ms = 5000
//! # Namespace for per-device storage keys.
//! storage_prefix = "stck-"
//!
//! # Replace the built-in starter documents.
//! [defaults]
//! html = "<h1>Hello</h1>"
//! ```
//!
//! The debounce window and the share interval are independent: neither is
//! derived from the other.

pub mod error;

use std::path::Path;

use serde::{Deserialize, Deserializer};
use stck_document::{DocumentKey, DocumentSet, defaults};
pub use stck_primitives::{DEFAULT_DEBOUNCE, DEFAULT_SHARE_INTERVAL, DEFAULT_STORAGE_PREFIX};
use stck_primitives::Duration;

pub use error::{ConfigError, Result};

/// Parsed playground configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlaygroundConfig {
	#[serde(rename = "debounce_ms", deserialize_with = "millis")]
	debounce: Duration,
	#[serde(rename = "share_interval_ms", deserialize_with = "millis")]
	share_interval: Duration,
	storage_prefix: String,
	defaults: DefaultOverrides,
}

/// Per-document replacements for the built-in starter content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DefaultOverrides {
	pub html: Option<String>,
	pub css: Option<String>,
	pub js: Option<String>,
}

impl Default for PlaygroundConfig {
	fn default() -> Self {
		Self {
			debounce: DEFAULT_DEBOUNCE,
			share_interval: DEFAULT_SHARE_INTERVAL,
			storage_prefix: DEFAULT_STORAGE_PREFIX.to_owned(),
			defaults: DefaultOverrides::default(),
		}
	}
}

fn millis<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Duration, D::Error> {
	u64::deserialize(deserializer).map(Duration::from_millis)
}

impl PlaygroundConfig {
	/// Parse a TOML string into a [`PlaygroundConfig`].
	pub fn parse(input: &str) -> Result<Self> {
		let config: Self = toml::from_str(input)?;
		if config.storage_prefix.is_empty() {
			return Err(ConfigError::EmptyPrefix);
		}
		Ok(config)
	}

	/// Load and parse a configuration file.
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&content)
	}

	/// Quiet period after the last edit before a publish.
	pub fn debounce(&self) -> Duration {
		self.debounce
	}

	/// Minimum spacing between share-token writes.
	pub fn share_interval(&self) -> Duration {
		self.share_interval
	}

	pub fn storage_prefix(&self) -> &str {
		&self.storage_prefix
	}

	/// Default text for `key`: the configured override, else the built-in one.
	pub fn default_text(&self, key: DocumentKey) -> &str {
		let configured = match key {
			DocumentKey::Html => &self.defaults.html,
			DocumentKey::Css => &self.defaults.css,
			DocumentKey::Js => &self.defaults.js,
		};
		configured.as_deref().unwrap_or(defaults::text(key))
	}

	/// The complete default document set.
	pub fn default_documents(&self) -> DocumentSet {
		DocumentSet::from_fn(|key| self.default_text(key).to_owned())
	}
}
