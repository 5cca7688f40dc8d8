//! Application layer - Use cases and orchestration

pub mod extract_log;

pub use extract_log::{ExtractLogService, InputKind};
