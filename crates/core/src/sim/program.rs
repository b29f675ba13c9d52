//! Programs: ordered sequences of opcodes.

use std::str::FromStr;

use crate::common::error::{CoreError, Result};
use crate::isa::codebook;
use crate::isa::opcode::Opcode;

/// An ordered list of opcodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program {
    ops: Vec<Opcode>,
}

impl Program {
    /// Creates a program from already-validated opcodes.
    pub const fn new(ops: Vec<Opcode>) -> Self {
        Self { ops }
    }

    /// Parses whitespace- or comma-separated opcodes, e.g. `"0001 1001,1101"`.
    ///
    /// Unlike the lenient decoder, a malformed code is an error here.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidOpcode`] for the first malformed code.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_codes(
            text.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|s| !s.is_empty()),
        )
    }

    /// Builds a program from individual code strings.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidOpcode`] for the first malformed code.
    pub fn from_codes<I, S>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        codes
            .into_iter()
            .map(|s| Opcode::from_str(s.as_ref()))
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// Builds a program from signed codebook values.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownCodebookValue`] for the first value with no entry.
    pub fn from_values(values: &[i8]) -> Result<Self> {
        values
            .iter()
            .map(|&v| codebook::encode(v).ok_or(CoreError::UnknownCodebookValue(v)))
            .collect::<Result<Vec<_>>>()
            .map(Self::new)
    }

    /// The demonstration sequence, encoded through the codebook.
    pub fn demo() -> Self {
        Self::new(codebook::DEMO_PROGRAM.to_vec())
    }

    /// Opcodes in execution order.
    pub fn ops(&self) -> &[Opcode] {
        &self.ops
    }

    /// Number of opcodes.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns `true` if the program has no opcodes.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl FromStr for Program {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
