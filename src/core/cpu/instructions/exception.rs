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

//! Exception-triggering instructions

use super::super::{CPU, SYSCALL_REG};
use super::ExecContext;
use crate::core::error::Result;

impl CPU {
    /// SYSCALL: System Call
    ///
    /// Hands the service number in `$v0` to the host's handler. Whatever
    /// the handler returns, fault included, is passed through.
    ///
    /// # Example
    ///
    /// ```text
    /// SYSCALL  # $v0 = 10 exits under the console handler
    /// ```
    pub(crate) fn op_syscall(&mut self, ctx: &mut ExecContext<'_>) -> Result<()> {
        let number = self.reg(SYSCALL_REG);
        ctx.syscalls.dispatch(number, self, &mut *ctx.memory)
    }
}
