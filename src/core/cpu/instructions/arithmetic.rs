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

use super::super::alu;
use super::super::{Operands, CPU};
use crate::core::error::Result;

impl CPU {
    // === Arithmetic Instructions ===

    /// BEAMFUSE: Add (with overflow fault)
    ///
    /// Adds two registers with signed overflow detection.
    ///
    /// Format: beamfuse rd, rs, rt
    /// Operation: rd = rs + rt
    ///
    /// # Returns
    ///
    /// Ok(()) on success, an Overflow fault with rd untouched otherwise
    pub(crate) fn op_beamfuse(&mut self, ops: Operands) -> Result<()> {
        let sum = alu::checked_add(self.reg(ops.rs), self.reg(ops.rt))?;
        self.set_reg(ops.rd, sum);
        Ok(())
    }

    /// SABERCUT: Subtract (with overflow fault)
    ///
    /// Format: sabercut rd, rs, rt
    /// Operation: rd = rs - rt
    ///
    /// # Returns
    ///
    /// Ok(()) on success, an Overflow fault with rd untouched otherwise
    pub(crate) fn op_sabercut(&mut self, ops: Operands) -> Result<()> {
        let dif = alu::checked_sub(self.reg(ops.rs), self.reg(ops.rt))?;
        self.set_reg(ops.rd, dif);
        Ok(())
    }

    /// OVERDRIVE: Multiply, low word
    ///
    /// Keeps the low 32 bits of the 64-bit signed product. Never faults.
    ///
    /// Format: overdrive rd, rs, rt
    /// Operation: rd = low32(rs * rt)
    pub(crate) fn op_overdrive(&mut self, ops: Operands) -> Result<()> {
        let product = alu::truncating_mul(self.reg(ops.rs), self.reg(ops.rt));
        self.set_reg(ops.rd, product);
        Ok(())
    }

    /// PRIORITYLOCK: Set on Less Than (signed)
    ///
    /// Format: prioritylock rd, rs, rt
    /// Operation: rd = (rs < rt) ? 1 : 0
    pub(crate) fn op_prioritylock(&mut self, ops: Operands) -> Result<()> {
        let result = if self.reg(ops.rs) < self.reg(ops.rt) {
            1
        } else {
            0
        };
        self.set_reg(ops.rd, result);
        Ok(())
    }

    /// CHARGEUP: Add Immediate (with overflow fault)
    ///
    /// Adds a sign-extended immediate to a register with overflow detection.
    ///
    /// Format: chargeup rt, rs, imm
    /// Operation: rt = rs + sign_extend(imm)
    ///
    /// # Returns
    ///
    /// Ok(()) on success, an Overflow fault with rt untouched otherwise
    pub(crate) fn op_chargeup(&mut self, ops: Operands) -> Result<()> {
        let imm = alu::sign_extend16(ops.imm as u32);
        let sum = alu::checked_add(self.reg(ops.rs), imm)?;
        self.set_reg(ops.rt, sum);
        Ok(())
    }
}
