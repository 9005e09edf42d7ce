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

//! Custom assertions for simulator testing

use gundam_asm::core::cpu::{StatusFlags, CPU};
use gundam_asm::core::error::EmulatorError;
use gundam_asm::core::cpu::ExceptionCause;

/// Assert CPU register has expected value
#[allow(dead_code)]
pub fn assert_cpu_reg(cpu: &CPU, reg: u8, expected: i32) {
    let actual = cpu.reg(reg);
    assert_eq!(
        actual, expected,
        "Register ${} mismatch: expected {}, got {}",
        reg, expected, actual
    );
}

/// Assert CPU PC is at expected address
#[allow(dead_code)]
pub fn assert_cpu_pc(cpu: &CPU, expected: u32) {
    let actual = cpu.pc();
    assert_eq!(
        actual, expected,
        "PC mismatch: expected 0x{:08X}, got 0x{:08X}",
        expected, actual
    );
}

/// Assert the status register holds exactly these flags
#[allow(dead_code)]
pub fn assert_status(cpu: &CPU, expected: StatusFlags) {
    assert_eq!(
        cpu.status(),
        expected,
        "SR mismatch: expected {:?}, got {:?}",
        expected,
        cpu.status()
    );
}

/// Assert an error is a fault with the given cause
#[allow(dead_code)]
pub fn assert_fault(err: &EmulatorError, expected: ExceptionCause) {
    match err.as_fault() {
        Some(fault) => assert_eq!(fault.cause, expected, "unexpected fault: {}", fault),
        None => panic!("expected {:?} fault, got {}", expected, err),
    }
}
