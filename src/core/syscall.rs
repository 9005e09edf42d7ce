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

//! System call dispatch
//!
//! The `syscall` instruction only reads the service number from `$v0` and
//! hands it to a [`SyscallHandler`]. What the services do is up to the host.
//! [`ConsoleSyscalls`] implements the basic console services of the MARS
//! simulator and buffers their output.

use crate::core::cpu::CPU;
use crate::core::error::{Fault, Result};
use crate::core::memory::Memory;

/// Host-side system call behavior
pub trait SyscallHandler {
    /// Execute service `number`
    ///
    /// Unknown services should return a Syscall-cause fault.
    fn dispatch(&mut self, number: i32, cpu: &mut CPU, memory: &mut dyn Memory) -> Result<()>;

    /// Exit code once the program has requested termination
    fn exit_status(&self) -> Option<i32> {
        None
    }
}

/// Handler that rejects every service
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSyscalls;

impl SyscallHandler for NoSyscalls {
    fn dispatch(&mut self, number: i32, _cpu: &mut CPU, _memory: &mut dyn Memory) -> Result<()> {
        Err(Fault::unknown_syscall(number).into())
    }
}

/// Argument register for services
const A0_REG: u8 = 4;

/// Longest string `print_string` will read before giving up
const MAX_STRING_LEN: u32 = 4096;

/// MARS console services
///
/// | $v0 | Service      | Arguments          |
/// |-----|--------------|--------------------|
/// | 1   | print int    | $a0 = integer      |
/// | 4   | print string | $a0 = address      |
/// | 10  | exit         |                    |
/// | 11  | print char   | $a0 = character    |
/// | 17  | exit2        | $a0 = exit code    |
#[derive(Debug, Default, Clone)]
pub struct ConsoleSyscalls {
    output: String,
    exit_code: Option<i32>,
}

impl ConsoleSyscalls {
    pub const PRINT_INT: i32 = 1;
    pub const PRINT_STRING: i32 = 4;
    pub const EXIT: i32 = 10;
    pub const PRINT_CHAR: i32 = 11;
    pub const EXIT2: i32 = 17;

    pub fn new() -> Self {
        Self::default()
    }

    /// Everything printed so far
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Drain the output buffer
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Forget output and exit state
    pub fn reset(&mut self) {
        self.output.clear();
        self.exit_code = None;
    }

    fn print_string(&mut self, address: u32, memory: &dyn Memory) -> Result<()> {
        let mut bytes = Vec::new();
        for i in 0..MAX_STRING_LEN {
            let byte = memory.read_byte(address.wrapping_add(i))?;
            if byte == 0 {
                break;
            }
            bytes.push(byte);
        }
        self.output.push_str(&String::from_utf8_lossy(&bytes));
        Ok(())
    }
}

impl SyscallHandler for ConsoleSyscalls {
    fn dispatch(&mut self, number: i32, cpu: &mut CPU, memory: &mut dyn Memory) -> Result<()> {
        let a0 = cpu.reg(A0_REG);
        log::debug!("syscall {} ($a0=0x{:08X})", number, a0 as u32);

        match number {
            Self::PRINT_INT => self.output.push_str(&a0.to_string()),
            Self::PRINT_STRING => self.print_string(a0 as u32, memory)?,
            Self::PRINT_CHAR => self.output.push((a0 as u8) as char),
            Self::EXIT => self.exit_code = Some(0),
            Self::EXIT2 => self.exit_code = Some(a0),
            _ => return Err(Fault::unknown_syscall(number).into()),
        }
        Ok(())
    }

    fn exit_status(&self) -> Option<i32> {
        self.exit_code
    }
}
