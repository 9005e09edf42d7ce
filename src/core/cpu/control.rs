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

//! Control-flow unit
//!
//! Branch, jump and call target computation. None of these write the PC
//! directly; they record a redirect that the host applies after the
//! routine returns.

use super::alu::sign_extend16;
use super::{StatusFlags, CPU, INSTRUCTION_WIDTH, LINK_REG};

impl CPU {
    /// Target of a J-format transfer
    ///
    /// Upper 4 bits of the PC, low 28 bits from the 26-bit field shifted
    /// left by 2.
    ///
    /// # Example
    /// ```
    /// use gundam_asm::core::cpu::CPU;
    ///
    /// let cpu = CPU::with_pc(0x0040_0000);
    /// assert_eq!(cpu.jump_target(0x100), 0x0000_0400);
    /// ```
    #[inline(always)]
    pub fn jump_target(&self, target: u32) -> u32 {
        (self.pc & 0xF000_0000) | ((target & 0x03FF_FFFF) << 2)
    }

    /// Target of a taken branch
    ///
    /// The offset counts words from the instruction after the branch.
    #[inline(always)]
    pub fn branch_target(&self, imm: u16) -> u32 {
        let offset = sign_extend16(imm as u32) << 2;
        self.pc
            .wrapping_add(INSTRUCTION_WIDTH)
            .wrapping_add(offset as u32)
    }

    /// Branch if `condition` holds, otherwise do nothing
    pub(crate) fn branch_if(&mut self, condition: bool, imm: u16) {
        if condition {
            let target = self.branch_target(imm);
            self.redirect_control(target);
        }
    }

    /// Unconditional J-format jump
    pub(crate) fn jump(&mut self, target: u32) {
        let addr = self.jump_target(target);
        self.redirect_control(addr);
    }

    /// Jump to a register value, used verbatim
    pub(crate) fn jump_register(&mut self, address: i32) {
        self.redirect_control(address as u32);
    }

    /// J-format call
    ///
    /// Writes the return address to the link register first, then (for
    /// call-base) raises the Call-base flag, then transfers control.
    pub(crate) fn call(&mut self, target: u32, mark_base: bool) {
        let return_addr = self.pc.wrapping_add(INSTRUCTION_WIDTH);
        self.set_reg(LINK_REG, return_addr as i32);

        if mark_base {
            self.set_flag(StatusFlags::CALL_BASE, true);
        }

        self.jump(target);
    }
}
