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

//! Gundam instruction-set extension for a MIPS-style simulator
//!
//! This library provides the extension instruction catalog (bit-exact
//! encoding templates plus execution routines), the CPU state the routines
//! act on, and a small reference host to run programs built from them.
//!
//! # Example
//!
//! ```
//! use gundam_asm::core::cpu::{Catalog, ExecContext, Operands, CPU};
//! use gundam_asm::core::memory::Bus;
//! use gundam_asm::core::syscall::NoSyscalls;
//!
//! let catalog = Catalog::new().unwrap();
//! let mut cpu = CPU::new();
//! let mut bus = Bus::new();
//! let mut syscalls = NoSyscalls;
//!
//! cpu.set_reg(1, 2);
//! cpu.set_reg(2, 3);
//! let word = catalog.get("beamfuse").unwrap().encode(&Operands::r(3, 1, 2));
//!
//! let mut ctx = ExecContext::new(&mut bus, &mut syscalls);
//! catalog.execute(word, &mut cpu, &mut ctx).unwrap();
//! assert_eq!(cpu.reg(3), 5);
//! ```

pub mod core;
