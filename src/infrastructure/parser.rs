//! External markup parser invocation
//!
//! The djot-to-AST conversion is delegated to an external CLI run once per
//! document: the full text goes to its stdin, the complete JSON AST comes
//! back on stdout. No streaming, retries, or timeouts; a non-zero exit or
//! unparseable output fails the whole run.

use crate::error::{DlogError, Result};
use serde_json::Value;
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use std::thread;

/// One-shot subprocess wrapper around the markup parser
#[derive(Debug)]
pub struct DjotParser {
    program: String,
    args: Vec<String>,
}

impl DjotParser {
    /// Build from a whitespace-separated command line.
    pub fn new(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or_else(|| {
            DlogError::Config("parser command is empty".to_string())
        })?;

        Ok(DjotParser {
            program,
            args: parts.collect(),
        })
    }

    /// Parse a document, returning the generic JSON AST.
    pub fn parse(&self, input: &str) -> Result<Value> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                DlogError::Parser(format!("failed to launch '{}': {}", self.program, e))
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| DlogError::Parser("parser stdin unavailable".to_string()))?;

        // Feed stdin from its own thread while the main thread drains stdout,
        // otherwise an input larger than the pipe buffers deadlocks. A child
        // that exits without reading stdin closes the pipe; that is judged by
        // its exit status, not by the broken write.
        let input = input.to_string();
        let writer = thread::spawn(move || match stdin.write_all(input.as_bytes()) {
            Err(e) if e.kind() != ErrorKind::BrokenPipe => Err(e),
            _ => Ok(()),
        });

        let output = child.wait_with_output()?;
        let written = writer
            .join()
            .map_err(|_| DlogError::Parser("parser stdin writer panicked".to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DlogError::Parser(format!(
                "'{}' exited with {} ({})",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        written?;

        Ok(serde_json::from_slice(&output.stdout)?)
    }
}
