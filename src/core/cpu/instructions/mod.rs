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

//! Extension instruction implementations
//!
//! Routines are grouped by instruction type. Each one receives the decoded
//! operand fields and returns `Err` with a processing fault when the
//! instruction has to be aborted.

use crate::core::memory::Memory;
use crate::core::syscall::SyscallHandler;

// Instruction modules organized by type
mod arithmetic;
mod branch;
mod exception;
mod jump;
mod load;
mod logical;
mod suit;

/// Host collaborators available to a routine
pub struct ExecContext<'a> {
    /// Data memory
    pub memory: &'a mut dyn Memory,
    /// System call dispatcher
    pub syscalls: &'a mut dyn SyscallHandler,
}

impl<'a> ExecContext<'a> {
    pub fn new(memory: &'a mut dyn Memory, syscalls: &'a mut dyn SyscallHandler) -> Self {
        Self { memory, syscalls }
    }
}
