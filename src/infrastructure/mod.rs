//! Infrastructure layer - External collaborators

pub mod config;
pub mod parser;

pub use config::Config;
pub use parser::DjotParser;
