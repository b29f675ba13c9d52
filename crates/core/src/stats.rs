//! Execution statistics collection and reporting.
//!
//! This module tracks what a program run did. It provides:
//! 1. **Step count:** Total executed steps.
//! 2. **Operation mix:** Counts by class (nop, arithmetic, logic, shift/rotate) and by mnemonic.
//! 3. **Accumulator activity:** How many steps actually changed the accumulator.

use std::io::{self, Write};

use crate::isa::signals::AluOp;

/// Per-run statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Total steps executed.
    pub steps: u64,
    /// Steps that left the accumulator unchanged.
    pub unchanged: u64,

    /// Count of NOP steps.
    pub op_nop: u64,
    /// Count of INC/DEC/ADD steps.
    pub op_arith: u64,
    /// Count of AND/OR/XOR/XNOR/NOT steps.
    pub op_logic: u64,
    /// Count of SHL/SHR/ROL/ROR steps.
    pub op_shift: u64,

    per_op: [u64; AluOp::ALL.len()],
}

impl RunStats {
    /// Records one executed step.
    pub fn record(&mut self, op: AluOp, before: u8, after: u8) {
        self.steps += 1;
        if before == after {
            self.unchanged += 1;
        }
        match op {
            AluOp::Nop => self.op_nop += 1,
            AluOp::Inc | AluOp::Dec | AluOp::Add => self.op_arith += 1,
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Xnor | AluOp::Not => self.op_logic += 1,
            AluOp::Shl | AluOp::Shr | AluOp::Rol | AluOp::Ror => self.op_shift += 1,
        }
        self.per_op[op as usize] += 1;
    }

    /// Number of times `op` was executed.
    pub const fn count(&self, op: AluOp) -> u64 {
        self.per_op[op as usize]
    }

    /// Writes a plain-text report.
    ///
    /// Operations that never ran are omitted from the per-op table.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    pub fn write_report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "==========================================================")?;
        writeln!(out, "NIBBLE ALU RUN STATISTICS")?;
        writeln!(out, "==========================================================")?;
        writeln!(out, "steps                    {}", self.steps)?;
        writeln!(out, "unchanged                {}", self.unchanged)?;
        writeln!(out, "----------------------------------------------------------")?;
        writeln!(out, "OP MIX")?;
        writeln!(out, "  nop                    {}", self.op_nop)?;
        writeln!(out, "  arith                  {}", self.op_arith)?;
        writeln!(out, "  logic                  {}", self.op_logic)?;
        writeln!(out, "  shift                  {}", self.op_shift)?;
        writeln!(out, "----------------------------------------------------------")?;
        for op in AluOp::ALL {
            let n = self.count(op);
            if n > 0 {
                writeln!(out, "  {:<22} {}", op.mnemonic(), n)?;
            }
        }
        writeln!(out, "==========================================================")
    }

    /// Prints the report to stdout.
    ///
    /// # Errors
    ///
    /// Propagates any error writing to stdout.
    pub fn print(&self) -> io::Result<()> {
        self.write_report(&mut io::stdout().lock())
    }
}
