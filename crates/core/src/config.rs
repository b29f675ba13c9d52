//! Configuration for program runs.
//!
//! This module defines the configuration consumed by [`Machine::from_config`](crate::sim::Machine::from_config).
//! It provides:
//! 1. **Defaults:** The demo sequence, a zero accumulator and a zero second operand.
//! 2. **Structures:** `general` (tracing) and `program` (codes and operands) sections.
//!
//! Configuration is supplied as JSON; every field is optional and falls back to its default.
//!
//! ```json
//! {
//!   "general": { "trace": true },
//!   "program": { "codes": ["0001", "1001", "1101"], "initial": 7, "operand2": 255 }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::common::error::Result;
use crate::isa::opcode::Opcode;
use crate::sim::program::Program;

/// Default configuration constants.
mod defaults {
    /// Whether a per-step trace is recorded.
    pub const TRACE: bool = false;

    /// Initial accumulator value.
    pub const INITIAL: u8 = 0;

    /// Second operand fed to binary operations.
    pub const OPERAND2: u8 = 0;
}

/// Root configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General run options.
    pub general: GeneralConfig,
    /// Program and operand settings.
    pub program: ProgramConfig,
}

/// General run options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Record every executed step.
    pub trace: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: defaults::TRACE,
        }
    }
}

/// Program and operand settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramConfig {
    /// Opcodes to execute, each four binary digits.
    pub codes: Vec<String>,
    /// Initial accumulator value.
    pub initial: u8,
    /// Second operand for AND, OR, XOR, XNOR and ADD.
    pub operand2: u8,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            codes: Program::demo().ops().iter().map(Opcode::to_string).collect(),
            initial: defaults::INITIAL,
            operand2: defaults::OPERAND2,
        }
    }
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`](crate::CoreError::Config) if the text is
    /// not valid JSON or a field has the wrong type.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Serializes the configuration as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Config`](crate::CoreError::Config) if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
