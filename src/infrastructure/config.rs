//! Configuration management

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default markup parser command
pub const DEFAULT_PARSER: &str = "npx --yes -q @djot/djot -t ast";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Command line used to invoke the markup parser
    #[serde(default = "default_parser")]
    pub parser: String,
}

fn default_parser() -> String {
    DEFAULT_PARSER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            parser: default_parser(),
        }
    }
}

impl Config {
    /// Load config from an optional TOML file; no file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let contents = fs::read_to_string(path)?;
                Ok(toml::from_str(&contents)?)
            }
            None => Ok(Config::default()),
        }
    }

    /// Get the parser command, with the environment taking precedence
    pub fn parser_command(&self) -> String {
        std::env::var("DLOG_PARSER").unwrap_or_else(|_| self.parser.clone())
    }
}
