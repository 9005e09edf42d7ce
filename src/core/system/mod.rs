// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Reference host
//!
//! Ties the CPU, the memory bus, the catalog and a syscall handler together
//! and provides the fetch/execute loop the extension expects from its host.

#[cfg(test)]
mod tests;

use super::config::SystemConfig;
use super::cpu::{Catalog, ExecContext, CPU, EN_REG, INSTRUCTION_WIDTH, MS_REG, SR_REG};
use super::error::Result;
use super::memory::{Bus, Memory};
use super::syscall::{ConsoleSyscalls, SyscallHandler};

/// Why [`System::run`] stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The program requested exit with this code
    Exited(i32),
    /// The instruction limit was reached
    LimitReached,
}

/// Simulated machine
///
/// # Example
/// ```
/// use gundam_asm::core::system::{RunOutcome, System};
///
/// let mut system = System::new().unwrap();
/// // chargeup $2, $0, 10 ; syscall
/// system.load_program(&[0x2002_000A, 0x0000_000C]).unwrap();
/// assert_eq!(system.run(10).unwrap(), RunOutcome::Exited(0));
/// ```
pub struct System {
    /// CPU instance
    cpu: CPU,
    /// Memory bus
    bus: Bus,
    /// Extension instruction set
    catalog: Catalog,
    /// System call services
    syscalls: ConsoleSyscalls,
    /// Host settings
    config: SystemConfig,
    /// Instructions retired since reset
    instructions: u64,
}

impl System {
    /// Create a system with default settings
    pub fn new() -> Result<Self> {
        Self::with_config(SystemConfig::default())
    }

    /// Create a system from a configuration
    ///
    /// # Errors
    ///
    /// `EmulatorError::InvalidLayout` if the configured segments wrap,
    /// overlap or are too large.
    pub fn with_config(config: SystemConfig) -> Result<Self> {
        config.validate()?;

        let mut system = Self {
            cpu: CPU::with_pc(config.entry_point()),
            bus: Bus::with_layout(config.layout()),
            catalog: Catalog::new()?,
            syscalls: ConsoleSyscalls::new(),
            config,
            instructions: 0,
        };
        system.apply_cockpit();
        Ok(system)
    }

    fn apply_cockpit(&mut self) {
        let cockpit = self.config.cockpit;
        self.cpu.set_reg(EN_REG, cockpit.energy);
        self.cpu.set_reg(MS_REG, cockpit.suit_status);
        self.cpu.set_reg(SR_REG, cockpit.status as i32);
    }

    /// Reset CPU state, syscall state and counters
    ///
    /// Memory is left as is so a loaded program can be run again.
    pub fn reset(&mut self) {
        self.cpu.reset(self.config.entry_point());
        self.apply_cockpit();
        self.syscalls.reset();
        self.instructions = 0;
    }

    /// Write a program at the entry point
    pub fn load_program(&mut self, words: &[u32]) -> Result<()> {
        self.bus.load_program(self.config.entry_point(), words)
    }

    /// Execute one instruction
    ///
    /// Fetches the word at PC, runs it, then moves PC to the redirect
    /// target or to the next word. On error the PC keeps pointing at the
    /// faulting instruction.
    pub fn step(&mut self) -> Result<()> {
        let pc = self.cpu.pc();
        let word = self.bus.read_word(pc)? as u32;

        let result = {
            let mut ctx = ExecContext::new(&mut self.bus, &mut self.syscalls);
            self.catalog.execute(word, &mut self.cpu, &mut ctx)
        };

        if let Err(e) = result {
            // Drop any half-recorded transfer
            self.cpu.take_redirect();
            log::warn!("Fault at PC=0x{:08X} (0x{:08X}): {}", pc, word, e);
            return Err(e);
        }

        let next = self
            .cpu
            .take_redirect()
            .unwrap_or_else(|| pc.wrapping_add(INSTRUCTION_WIDTH));
        self.cpu.set_pc(next);
        self.instructions += 1;
        Ok(())
    }

    /// Execute `n` instructions, stopping at the first error
    pub fn step_n(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            self.step()?;
        }
        Ok(())
    }

    /// Run until the program exits or `limit` instructions have executed
    ///
    /// Once the program has exited, further calls return the same outcome
    /// without executing anything until [`System::reset`].
    pub fn run(&mut self, limit: usize) -> Result<RunOutcome> {
        if let Some(code) = self.syscalls.exit_status() {
            return Ok(RunOutcome::Exited(code));
        }
        for _ in 0..limit {
            self.step()?;
            if let Some(code) = self.syscalls.exit_status() {
                log::info!(
                    "Program exited with code {} after {} instructions",
                    code,
                    self.instructions
                );
                return Ok(RunOutcome::Exited(code));
            }
        }
        Ok(RunOutcome::LimitReached)
    }

    /// Run with the configured instruction limit
    pub fn run_to_completion(&mut self) -> Result<RunOutcome> {
        self.run(self.config.max_instructions)
    }

    /// Get current PC value
    pub fn pc(&self) -> u32 {
        self.cpu.pc()
    }

    /// Instructions executed since reset
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    pub fn cpu(&self) -> &CPU {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut CPU {
        &mut self.cpu
    }

    pub fn bus(&self) -> &Bus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut Bus {
        &mut self.bus
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Console output produced by syscalls
    pub fn output(&self) -> &str {
        self.syscalls.output()
    }
}
