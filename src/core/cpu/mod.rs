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

use serde::Serialize;

/// Processor state seen by the extension instructions
///
/// # Layout
/// - Machine: 32-bit MIPS-style load/store machine
/// - Registers: 32 general-purpose registers, all writable (r0 included)
/// - Cockpit registers: EN (r25), MS (r26), SR (r27), link (r7)
///
/// The CPU does not fetch on its own. The host reads the word at `pc()`,
/// hands it to the [`Catalog`], then moves the PC to the redirect target
/// recorded by the routine or to the next word.
///
/// # Example
/// ```
/// use gundam_asm::core::cpu::CPU;
///
/// let mut cpu = CPU::new();
/// cpu.set_reg(0, 42);
/// assert_eq!(cpu.reg(0), 42); // r0 is an ordinary register here
/// ```
#[derive(Debug, Clone)]
pub struct CPU {
    /// General purpose registers (r0-r31)
    regs: [i32; 32],

    /// Address of the instruction being executed
    pc: u32,

    /// Control transfer requested by the current instruction
    redirect: Option<u32>,

    /// Current instruction (for debugging)
    current_instruction: u32,
}

/// Width of one instruction word in bytes
pub const INSTRUCTION_WIDTH: u32 = 4;

/// Energy counter register
pub const EN_REG: u8 = 25;
/// Mobile-suit status register
pub const MS_REG: u8 = 26;
/// Status flags register
pub const SR_REG: u8 = 27;
/// Return address register written by calls
pub const LINK_REG: u8 = 7;
/// System call number register ($v0)
pub const SYSCALL_REG: u8 = 2;

/// Default program counter (MARS text segment base)
pub const RESET_PC: u32 = 0x0040_0000;

// Module declarations
pub mod alu;
mod catalog;
mod cause;
mod control;
mod decode;
mod instructions;
mod status;
#[cfg(test)]
mod tests;

// Re-exports
pub use catalog::{Catalog, ExecFn, InstructionDef};
pub use cause::ExceptionCause;
pub use decode::{EncodingTemplate, Format, Operands};
pub use instructions::ExecContext;
pub use status::StatusFlags;

impl CPU {
    /// Create a new CPU instance with initial state
    ///
    /// - All general purpose registers: 0
    /// - PC: 0x00400000
    pub fn new() -> Self {
        Self::with_pc(RESET_PC)
    }

    /// Create a CPU starting at the given address
    pub fn with_pc(pc: u32) -> Self {
        Self {
            regs: [0i32; 32],
            pc,
            redirect: None,
            current_instruction: 0,
        }
    }

    /// Reset CPU to initial state
    ///
    /// Clears all registers and moves the PC to `pc`.
    pub fn reset(&mut self, pc: u32) {
        self.regs = [0i32; 32];
        self.pc = pc;
        self.redirect = None;
        self.current_instruction = 0;
    }

    /// Read from general purpose register
    ///
    /// # Arguments
    /// - `index`: Register number (0-31)
    ///
    /// # Panics
    /// Panics if `index` is 32 or larger.
    #[inline(always)]
    pub fn reg(&self, index: u8) -> i32 {
        self.regs[index as usize]
    }

    /// Write to general purpose register
    ///
    /// # Arguments
    /// - `index`: Register number (0-31)
    /// - `value`: Value to write
    ///
    /// # Panics
    /// Panics if `index` is 32 or larger.
    #[inline(always)]
    pub fn set_reg(&mut self, index: u8, value: i32) {
        self.regs[index as usize] = value;
    }

    /// Get current PC value
    #[inline(always)]
    pub fn pc(&self) -> u32 {
        self.pc
    }

    /// Move the PC; used by the host between instructions
    #[inline(always)]
    pub fn set_pc(&mut self, pc: u32) {
        self.pc = pc;
    }

    /// Request a control transfer to `target`
    ///
    /// The host applies it once the current routine returns successfully.
    #[inline(always)]
    pub fn redirect_control(&mut self, target: u32) {
        self.redirect = Some(target);
    }

    /// Take the pending control transfer, if any
    #[inline(always)]
    pub fn take_redirect(&mut self) -> Option<u32> {
        self.redirect.take()
    }

    /// Record the word about to execute (for diagnostics)
    pub fn set_current_instruction(&mut self, word: u32) {
        self.current_instruction = word;
    }

    /// Word most recently handed to the CPU
    pub fn current_instruction(&self) -> u32 {
        self.current_instruction
    }

    /// Copy of the architectural state, suitable for serialization
    pub fn snapshot(&self) -> CpuSnapshot {
        CpuSnapshot {
            pc: self.pc,
            regs: self.regs,
            energy: self.reg(EN_REG),
            suit_status: self.reg(MS_REG),
            status: self.status().bits(),
        }
    }

    /// Dump all CPU registers for debugging
    ///
    /// Prints the PC, the cockpit registers and all 32 general-purpose
    /// registers.
    pub fn dump_registers(&self) {
        println!("CPU Registers:");
        println!("PC: 0x{:08X}  Instruction: 0x{:08X}", self.pc, self.current_instruction);
        println!(
            "EN: {}  MS: 0x{:08X}  SR: {:?}",
            self.reg(EN_REG),
            self.reg(MS_REG),
            self.status()
        );
        println!();

        // Print general-purpose registers in rows of 4
        for i in 0..32u8 {
            if i % 4 == 0 && i > 0 {
                println!();
            }
            print!("r{:2}: 0x{:08X}  ", i, self.reg(i) as u32);
        }
        println!("\n");
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable view of the CPU state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpuSnapshot {
    pub pc: u32,
    pub regs: [i32; 32],
    pub energy: i32,
    pub suit_status: i32,
    pub status: u32,
}
