//! Client configuration.
//!
//! Every field has a default, so an empty TOML file is a valid config.
//! The web UI accepts the same fields as JSON.
//!
//! ```toml
//! method = "get"          # or "post" for older servers
//! layout = "list"         # or "table"
//! max_definitions = 3
//! split_path = "/split/"
//! dictionary_url = "http://dict.leo.org/englisch-deutsch/"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_SPLIT_PATH: &str = "/split/";
pub const DEFAULT_DICTIONARY_URL: &str = "http://dict.leo.org/englisch-deutsch/";
pub const DEFAULT_MAX_DEFINITIONS: usize = 3;

/// HTTP method used for `/split/<word>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RequestMethod {
    #[default]
    Get,
    Post,
}

impl RequestMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// How child splits are laid out under their parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Nested `<ul>`/`<li>` lists.
    #[default]
    List,
    /// One `<table>` row with a `<td>` per half.
    Table,
}

/// Settings shared by the web UI and the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub method: RequestMethod,
    pub layout: Layout,
    /// Definition lines shown per word.
    pub max_definitions: usize,
    /// Path prefix the encoded word is appended to.
    pub split_path: String,
    /// Dictionary page prefix for word links.
    pub dictionary_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            method: RequestMethod::default(),
            layout: Layout::default(),
            max_definitions: DEFAULT_MAX_DEFINITIONS,
            split_path: DEFAULT_SPLIT_PATH.to_string(),
            dictionary_url: DEFAULT_DICTIONARY_URL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validated()
    }

    /// Same fields as the TOML form, for configs embedded in a page.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validated()
    }

    fn validated(self) -> Result<Self, ConfigError> {
        if self.max_definitions == 0 {
            return Err(ConfigError::NoDefinitions);
        }
        Ok(self)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }
}
