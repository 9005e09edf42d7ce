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
    // === Branch Instructions ===

    /// FORMUP: Branch on Equal
    ///
    /// The branch target is PC + 4 + (sign_extend(offset) << 2).
    ///
    /// Format: formup rs, rt, offset
    /// Operation: if (rs == rt) branch
    pub(crate) fn op_formup(&mut self, ops: Operands) -> Result<()> {
        let taken = self.reg(ops.rs) == self.reg(ops.rt);
        self.branch_if(taken, ops.imm);
        Ok(())
    }

    /// SCATTER: Branch on Not Equal
    ///
    /// Format: scatter rs, rt, offset
    /// Operation: if (rs != rt) branch
    pub(crate) fn op_scatter(&mut self, ops: Operands) -> Result<()> {
        let taken = self.reg(ops.rs) != self.reg(ops.rt);
        self.branch_if(taken, ops.imm);
        Ok(())
    }
}
