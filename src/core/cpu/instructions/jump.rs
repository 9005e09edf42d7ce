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

use super::super::{Operands, StatusFlags, CPU};
use crate::core::error::Result;

impl CPU {
    // === Jump Instructions ===

    /// JUMPBASE: Jump
    ///
    /// Format: jumpbase target
    /// Operation: PC = (PC & 0xF0000000) | (target << 2)
    pub(crate) fn op_jumpbase(&mut self, ops: Operands) -> Result<()> {
        self.jump(ops.target);
        Ok(())
    }

    /// CALLPILOT: Jump and Link
    ///
    /// Saves the return address in r7. Does not touch the status register.
    ///
    /// Format: callpilot target
    /// Operation: r7 = PC + 4; PC = (PC & 0xF0000000) | (target << 2)
    pub(crate) fn op_callpilot(&mut self, ops: Operands) -> Result<()> {
        self.call(ops.target, false);
        Ok(())
    }

    /// CALLBASE: Jump and Link, recording the call in SR
    ///
    /// Format: callbase target
    /// Operation: r7 = PC + 4; SR.callbase = 1; PC = (PC & 0xF0000000) | (target << 2)
    pub(crate) fn op_callbase(&mut self, ops: Operands) -> Result<()> {
        self.call(ops.target, true);
        Ok(())
    }

    /// DOCK: Jump Register
    ///
    /// Format: dock rs
    /// Operation: PC = rs
    pub(crate) fn op_dock(&mut self, ops: Operands) -> Result<()> {
        let address = self.reg(ops.rs);
        self.jump_register(address);
        Ok(())
    }

    /// AUTOEVADE: Jump if the Danger flag is set
    ///
    /// Format: autoevade target
    pub(crate) fn op_autoevade(&mut self, ops: Operands) -> Result<()> {
        if self.flag(StatusFlags::DANGER) {
            self.jump(ops.target);
        }
        Ok(())
    }
}
