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

use super::super::{Operands, CPU};
use crate::core::error::Result;

impl CPU {
    // === Logical Instructions ===

    /// PHASEJAM: Bitwise XOR
    ///
    /// Format: phasejam rd, rs, rt
    /// Operation: rd = rs ^ rt
    pub(crate) fn op_phasejam(&mut self, ops: Operands) -> Result<()> {
        let result = self.reg(ops.rs) ^ self.reg(ops.rt);
        self.set_reg(ops.rd, result);
        Ok(())
    }

    /// FULLBURST: Bitwise OR
    ///
    /// Format: fullburst rd, rs, rt
    /// Operation: rd = rs | rt
    pub(crate) fn op_fullburst(&mut self, ops: Operands) -> Result<()> {
        let result = self.reg(ops.rs) | self.reg(ops.rt);
        self.set_reg(ops.rd, result);
        Ok(())
    }

    /// SENSORLOCK: Bitwise AND
    ///
    /// Format: sensorlock rd, rs, rt
    /// Operation: rd = rs & rt
    pub(crate) fn op_sensorlock(&mut self, ops: Operands) -> Result<()> {
        let result = self.reg(ops.rs) & self.reg(ops.rt);
        self.set_reg(ops.rd, result);
        Ok(())
    }
}
