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

//! Suit state instructions
//!
//! These operate on the cockpit registers (EN, MS, SR) on top of the
//! ordinary register file. Where the destination may alias EN or SR, the
//! order of writes below is part of the observable behavior.

use super::super::alu;
use super::super::{Operands, StatusFlags, CPU, EN_REG, MS_REG, SR_REG};
use crate::core::error::Result;

/// `scan` selector values
const SCAN_SR: i32 = 0;
const SCAN_EN: i32 = 1;
const SCAN_MS: i32 = 2;

impl CPU {
    /// LOCKON: Compare and lock
    ///
    /// Format: lockon rd, rs, rt
    /// Operation: rd = (rs == rt) ? 1 : 0; SR.lockon = (rs == rt); update Z/N
    pub(crate) fn op_lockon(&mut self, ops: Operands) -> Result<()> {
        let locked = self.reg(ops.rs) == self.reg(ops.rt);
        self.set_flag(StatusFlags::LOCK_ON, locked);

        let value = locked as i32;
        self.set_reg(ops.rd, value);
        self.update_zn(value);
        Ok(())
    }

    /// SHIELDUP: Shield flag from a register
    ///
    /// Z/N are left alone.
    ///
    /// Format: shieldup rs
    /// Operation: SR.shield = (rs != 0)
    pub(crate) fn op_shieldup(&mut self, ops: Operands) -> Result<()> {
        let raised = self.reg(ops.rs) != 0;
        self.set_flag(StatusFlags::SHIELD, raised);
        Ok(())
    }

    /// TRANSAM: Triple output while energy lasts
    ///
    /// With EN > 0 the source is multiplied by 3 (wrapping), EN drops by
    /// one and Trans-am is raised. Otherwise the source passes through and
    /// Trans-am is cleared.
    ///
    /// Format: transam rd, rs
    pub(crate) fn op_transam(&mut self, ops: Operands) -> Result<()> {
        let rs = self.reg(ops.rs);
        let energy = self.reg(EN_REG);

        let value = if energy > 0 {
            self.set_reg(EN_REG, energy - 1);
            self.set_flag(StatusFlags::TRANS_AM, true);
            rs.wrapping_mul(3)
        } else {
            self.set_flag(StatusFlags::TRANS_AM, false);
            rs
        };

        self.set_reg(ops.rd, value);
        self.update_zn(value);
        log::debug!("transam: rd={} EN={}", value, self.reg(EN_REG));
        Ok(())
    }

    /// DEPLOYBITS: Divide, clearing Danger on a non-zero quotient
    ///
    /// Danger is only ever cleared here, never set.
    ///
    /// Format: deploybits rd, rs, rt
    /// Operation: rd = rs / rt; update Z/N; if rd != 0 { SR.danger = 0 }
    ///
    /// # Returns
    ///
    /// Ok(()) on success, a DivideByZero fault with nothing written otherwise
    pub(crate) fn op_deploybits(&mut self, ops: Operands) -> Result<()> {
        let quotient = alu::checked_div(self.reg(ops.rs), self.reg(ops.rt))?;

        self.set_reg(ops.rd, quotient);
        self.update_zn(quotient);
        if quotient != 0 {
            self.set_flag(StatusFlags::DANGER, false);
        }
        Ok(())
    }

    /// THRUST: Add a word-scaled immediate
    ///
    /// Wraps silently.
    ///
    /// Format: thrust rt, rs, imm
    /// Operation: rt = rs + (sign_extend(imm) << 2); update Z/N
    pub(crate) fn op_thrust(&mut self, ops: Operands) -> Result<()> {
        let imm = alu::sign_extend16(ops.imm as u32);
        let value = self.reg(ops.rs).wrapping_add(imm << 2);
        self.set_reg(ops.rt, value);
        self.update_zn(value);
        Ok(())
    }

    /// ENERGIZE: EN = rs
    pub(crate) fn op_energize(&mut self, ops: Operands) -> Result<()> {
        let value = self.reg(ops.rs);
        self.set_reg(EN_REG, value);
        Ok(())
    }

    /// SCAN: Read suit state
    ///
    /// Selector 0 reads SR, 1 reads EN, 2 reads MS; anything else yields 0.
    ///
    /// Format: scan rt, selector
    pub(crate) fn op_scan(&mut self, ops: Operands) -> Result<()> {
        let value = match alu::sign_extend16(ops.imm as u32) {
            SCAN_SR => self.reg(SR_REG),
            SCAN_EN => self.reg(EN_REG),
            SCAN_MS => self.reg(MS_REG),
            _ => 0,
        };
        self.set_reg(ops.rt, value);
        self.update_zn(value);
        Ok(())
    }

    /// BOOST: Double output
    ///
    /// Format: boost rd, rs
    /// Operation: rd = rs << 1 (wrapping); update Z/N
    pub(crate) fn op_boost(&mut self, ops: Operands) -> Result<()> {
        let value = self.reg(ops.rs).wrapping_shl(1);
        self.set_reg(ops.rd, value);
        self.update_zn(value);
        Ok(())
    }
}
