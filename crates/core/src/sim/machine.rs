//! Accumulator machine.
//!
//! A [`Machine`] owns all state a run touches: the accumulator, the fixed
//! second operand, statistics, and an optional trace. Nothing is shared
//! between machines, so independent runs never interfere.

use tracing::{info, trace};

use crate::common::error::Result;
use crate::config::Config;
use crate::isa::opcode::Opcode;
use crate::isa::signals::AluOp;
use crate::sim::program::Program;
use crate::stats::RunStats;
use crate::units::alu::Alu;

/// One executed step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Position in the program.
    pub index: usize,
    /// Opcode executed.
    pub opcode: Opcode,
    /// Operation it decoded to.
    pub op: AluOp,
    /// Accumulator before the step.
    pub before: u8,
    /// Accumulator after the step.
    pub after: u8,
}

/// Accumulator machine that executes [`Program`]s.
#[derive(Clone, Debug, Default)]
pub struct Machine {
    acc: u8,
    operand2: u8,
    executed: usize,
    /// Statistics for everything executed so far.
    pub stats: RunStats,
    trace: Option<Vec<Step>>,
}

impl Machine {
    /// Creates a machine with the given accumulator and second operand.
    pub fn new(initial: u8, operand2: u8) -> Self {
        Self {
            acc: initial,
            operand2,
            ..Self::default()
        }
    }

    /// Builds a machine and its program from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidOpcode`](crate::CoreError::InvalidOpcode)
    /// if any configured code is malformed.
    pub fn from_config(config: &Config) -> Result<(Self, Program)> {
        let program = Program::from_codes(&config.program.codes)?;
        let mut machine = Self::new(config.program.initial, config.program.operand2);
        if config.general.trace {
            machine.enable_trace();
        }
        Ok((machine, program))
    }

    /// Starts recording a trace of every subsequent step.
    pub fn enable_trace(&mut self) {
        if self.trace.is_none() {
            self.trace = Some(Vec::new());
        }
    }

    /// Current accumulator value.
    pub const fn acc(&self) -> u8 {
        self.acc
    }

    /// Second operand fed to binary operations.
    pub const fn operand2(&self) -> u8 {
        self.operand2
    }

    /// Replaces the second operand.
    pub const fn set_operand2(&mut self, operand2: u8) {
        self.operand2 = operand2;
    }

    /// Recorded steps, if tracing is enabled.
    pub fn trace(&self) -> Option<&[Step]> {
        self.trace.as_deref()
    }

    /// Executes one opcode against the accumulator.
    pub fn step(&mut self, opcode: Opcode) -> Step {
        let op = opcode.op();
        let before = self.acc;
        let after = Alu::execute(op, before, self.operand2);
        let step = Step {
            index: self.executed,
            opcode,
            op,
            before,
            after,
        };

        trace!(index = step.index, %opcode, %op, before, after, "step");
        self.acc = after;
        self.executed += 1;
        self.stats.record(op, before, after);
        if let Some(t) = self.trace.as_mut() {
            t.push(step);
        }
        step
    }

    /// Executes every opcode in `program` and returns the final accumulator.
    pub fn run(&mut self, program: &Program) -> u8 {
        let start = self.acc;
        for &opcode in program.ops() {
            let _ = self.step(opcode);
        }
        info!(
            steps = program.len(),
            start,
            end = self.acc,
            "program finished"
        );
        self.acc
    }
}
