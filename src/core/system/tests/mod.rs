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

//! System module tests
//!
//! - `basic`: construction, reset and configuration
//! - `execution`: stepping, control flow and faults
//! - `syscalls`: console services through the `syscall` instruction


use crate::core::cpu::Operands;
use crate::core::system::System;

/// Encode one instruction with the system's catalog
fn asm(system: &System, mnemonic: &str, ops: Operands) -> u32 {
    system
        .catalog()
        .get(mnemonic)
        .unwrap_or_else(|| panic!("{} not registered", mnemonic))
        .encode(&ops)
}

/// chargeup rt, rs, imm
fn li(system: &System, rt: u8, imm: i32) -> u32 {
    asm(system, "chargeup", Operands::i(rt, 0, imm))
}

fn syscall(system: &System) -> u32 {
    asm(system, "syscall", Operands::default())
}
