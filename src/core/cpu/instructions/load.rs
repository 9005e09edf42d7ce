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

use super::super::alu::sign_extend16;
use super::super::{Operands, CPU};
use super::ExecContext;
use crate::core::error::{Fault, Result};

impl CPU {
    // === Load Instructions ===

    /// HANGARLOAD: Load Word (32-bit)
    ///
    /// Loads a word and derives Z/N from it. There is no load delay slot.
    ///
    /// Format: hangarload rt, offset(rs)
    /// Operation: rt = memory[rs + sign_extend(offset)]
    ///
    /// # Returns
    ///
    /// Ok(()) on success, an AddressErrorLoad fault carrying the memory
    /// error's message on misalignment or unmapped addresses
    pub(crate) fn op_hangarload(&mut self, ops: Operands, ctx: &mut ExecContext<'_>) -> Result<()> {
        let offset = sign_extend16(ops.imm as u32);
        let addr = self.reg(ops.rs).wrapping_add(offset) as u32;

        let value = ctx
            .memory
            .read_word(addr)
            .map_err(|e| Fault::address_load(&e))?;

        self.set_reg(ops.rt, value);
        self.update_zn(value);
        Ok(())
    }
}
