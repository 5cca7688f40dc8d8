//! Error types for dlog

use thiserror::Error;

/// Main error type for the dlog application
#[derive(Debug, Error)]
pub enum DlogError {
    #[error("Unknown node tag: {0}")]
    UnknownTag(String),

    #[error("Invalid date in section id: {section}")]
    InvalidDate { section: String },

    #[error("Invalid time '{token}' (section {section}, pair {pair})")]
    TimeParse {
        section: String,
        pair: usize,
        token: String,
    },

    #[error("Malformed tag list at position {position} (section {section}, pair {pair})")]
    MalformedTagList {
        section: String,
        pair: usize,
        position: usize,
    },

    #[error("Unexpected document shape: {context}")]
    Shape { context: String },

    #[error("Markup parser failed: {0}")]
    Parser(String),

    #[error("Malformed parser output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl DlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DlogError::UnknownTag(_) => 2,
            DlogError::InvalidDate { .. } => 3,
            DlogError::TimeParse { .. } => 4,
            DlogError::MalformedTagList { .. } => 5,
            DlogError::Shape { .. } => 6,
            DlogError::Parser(_) => 7,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DlogError::InvalidDate { section } => {
                format!(
                    "Invalid date in section id: '{}'\n\n\
                    Each day heading must be an ISO calendar date so the section\n\
                    id parses as YYYY-MM-DD, for example:\n\
                    # 2023-12-03",
                    section
                )
            }
            DlogError::TimeParse {
                section,
                pair,
                token,
            } => {
                format!(
                    "Invalid time '{}' in day {} (entry pair {})\n\n\
                    Boundary headings must be a time of day:\n\
                    • HH:MM (e.g., 09:00)\n\
                    • HH:MM:SS (e.g., 09:00:30)",
                    token, section, pair
                )
            }
            DlogError::MalformedTagList {
                section,
                pair,
                position,
            } => {
                format!(
                    "Malformed tag list in day {} (entry pair {}, token {})\n\n\
                    Tags go one per line inside the tag block, each line\n\
                    using ' / ' to separate hierarchy levels:\n\
                    - Work / MyOrg / MyDept\n\
                      Coding",
                    section, pair, position
                )
            }
            DlogError::Parser(msg) => {
                format!(
                    "Markup parser failed: {}\n\n\
                    Suggestions:\n\
                    • Check that the djot CLI is installed (npm install -g @djot/djot)\n\
                    • Override the parser command: set DLOG_PARSER or the `parser`\n\
                      key in your config file\n\
                    • If you already have a JSON AST, pass it with --ast",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DlogError
pub type Result<T> = std::result::Result<T, DlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let errors = [
            DlogError::UnknownTag("para".to_string()),
            DlogError::InvalidDate {
                section: "not-a-date".to_string(),
            },
            DlogError::TimeParse {
                section: "2023-12-03".to_string(),
                pair: 0,
                token: "9am".to_string(),
            },
            DlogError::MalformedTagList {
                section: "2023-12-03".to_string(),
                pair: 0,
                position: 1,
            },
            DlogError::Shape {
                context: "root".to_string(),
            },
            DlogError::Parser("exit status 1".to_string()),
        ];

        let mut codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_invalid_date_suggestion() {
        let err = DlogError::InvalidDate {
            section: "not-a-date".to_string(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("not-a-date"));
        assert!(msg.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_time_parse_context() {
        let err = DlogError::TimeParse {
            section: "2023-12-03".to_string(),
            pair: 2,
            token: "9am".to_string(),
        };
        let msg = err.display_with_suggestions();
        assert!(msg.contains("9am"));
        assert!(msg.contains("2023-12-03"));
        assert!(msg.contains("HH:MM"));
    }

    #[test]
    fn test_parser_error_suggestions() {
        let err = DlogError::Parser("exit status 127".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("DLOG_PARSER"));
        assert!(msg.contains("--ast"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = DlogError::Config("bad parser command".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Configuration error: bad parser command");
    }
}
