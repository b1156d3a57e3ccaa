//! Tool result type
//!
//! What the list, recommend and categories operations hand back to the caller.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result of one tool invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Tool name that was executed
    pub tool: String,

    /// Rendered output text
    pub output: String,

    /// Whether execution was successful
    pub success: bool,

    /// Execution duration in milliseconds
    pub duration_ms: u64,

    /// Error message if failed
    pub error: Option<String>,
}

impl ToolResult {
    /// Create successful result
    pub fn success(tool: &str, output: String, duration: Duration) -> Self {
        Self {
            tool: tool.to_string(),
            output,
            success: true,
            duration_ms: duration.as_millis() as u64,
            error: None,
        }
    }

    /// Create failed result
    pub fn failure(tool: &str, error: String, duration: Duration) -> Self {
        Self {
            tool: tool.to_string(),
            output: String::new(),
            success: false,
            duration_ms: duration.as_millis() as u64,
            error: Some(error),
        }
    }

    /// Output on success, error message otherwise
    pub fn text(&self) -> &str {
        match &self.error {
            Some(error) if !self.success => error,
            _ => &self.output,
        }
    }
}
