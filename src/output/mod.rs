//! Output driver: repeated generation into a byte sink.
mod writer;


use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::generator::GenerateParams;

pub use writer::{emit_requests, write_request};

/// Requests emitted when no iteration count is given.
pub const DEFAULT_ITERATIONS: u64 = 10_000;

#[derive(Debug, Clone, Copy, Default, ValueEnum, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `name: value` lines, one blank line between requests
    #[default]
    Text,
    /// One JSON object per line: `{"headers":[{"name":..,"value":..}]}`
    Jsonl,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitPlan {
    pub iterations: u64,
    pub params: GenerateParams,
    pub format: OutputFormat,
}

impl Default for EmitPlan {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            params: GenerateParams::default(),
            format: OutputFormat::Text,
        }
    }
}
