//! Domain layer - Typed document tree and log extraction

pub mod ast;
pub mod extract;
pub mod log;

pub use ast::{Block, Document, Heading, Inline, Section};
pub use extract::extract;
pub use log::{Day, Entry, TagPath};
