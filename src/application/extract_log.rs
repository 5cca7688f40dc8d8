//! Log extraction use case
//!
//! Orchestrates the full pipeline: read the input, obtain the generic AST
//! (subprocess or pre-parsed file), type the tree, extract the log.

use crate::domain::{extract, Day, Document};
use crate::error::Result;
use crate::infrastructure::{Config, DjotParser};
use std::fs;
use std::path::Path;

/// Input flavor accepted by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Djot markup, handed to the external parser
    Markup,
    /// A JSON AST produced by an earlier parser run
    Ast,
}

/// Service for extracting a work log from a document
pub struct ExtractLogService {
    config: Config,
}

impl ExtractLogService {
    pub fn new(config: Config) -> Self {
        ExtractLogService { config }
    }

    /// Execute the extraction and return the days in document order.
    pub fn execute(&self, input: &Path, kind: InputKind) -> Result<Vec<Day>> {
        let text = fs::read_to_string(input)?;

        let ast = match kind {
            InputKind::Markup => {
                let parser = DjotParser::new(&self.config.parser_command())?;
                parser.parse(&text)?
            }
            InputKind::Ast => serde_json::from_str(&text)?,
        };

        let doc = Document::from_value(&ast)?;
        extract(&doc)
    }
}
