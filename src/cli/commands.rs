//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dlog")]
#[command(about = "Extract a work log from a djot journal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input document (djot markup, or a JSON AST with --ast)
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Treat the input as a pre-parsed JSON AST instead of invoking the parser
    #[arg(long)]
    pub ast: bool,

    /// Path to a TOML config file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
