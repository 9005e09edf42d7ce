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

//! CPU test modules
//!
//! Tests are organized into the following categories:
//! - `basic`: CPU initialization, reset, register access, redirects
//! - `status`: Status register flags
//! - `alu`: Checked arithmetic properties
//! - `decode`: Operand fields and encoding templates
//! - `catalog`: Registration, lookup and dispatch
//! - `control`: Branches, jumps and calls
//! - `instructions`: Arithmetic, logical, load and syscall routines
//! - `suit`: Cockpit register instructions

mod alu;
mod decode;

use super::{Catalog, ExecContext, Operands, CPU};
use crate::core::error::Result;
use crate::core::memory::Bus;
use crate::core::syscall::{ConsoleSyscalls, NoSyscalls};

/// Encode and execute one instruction on a fresh bus
fn exec(cpu: &mut CPU, mnemonic: &str, ops: Operands) -> Result<()> {
    let mut bus = Bus::new();
    exec_on(cpu, &mut bus, mnemonic, ops)
}

/// Encode and execute one instruction against `bus`
fn exec_on(cpu: &mut CPU, bus: &mut Bus, mnemonic: &str, ops: Operands) -> Result<()> {
    let catalog = Catalog::new().unwrap();
    let word = catalog
        .get(mnemonic)
        .unwrap_or_else(|| panic!("{} not registered", mnemonic))
        .encode(&ops);
    let mut syscalls = NoSyscalls;
    let mut ctx = ExecContext::new(bus, &mut syscalls);
    catalog.execute(word, cpu, &mut ctx)
}

/// Execute `syscall` with the console handler
fn exec_syscall(cpu: &mut CPU, bus: &mut Bus, console: &mut ConsoleSyscalls) -> Result<()> {
    let catalog = Catalog::new().unwrap();
    let mut ctx = ExecContext::new(bus, console);
    catalog.execute(0x0000_000C, cpu, &mut ctx)
}
