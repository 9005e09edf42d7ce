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

//! Status register (SR) flag handling
//!
//! The status flags are not stored separately: they live in general purpose
//! register 27 so that programs can read them back with `scan` or move them
//! around like any other word. Bits above 8 are reserved and are carried
//! through every update untouched.

use bitflags::bitflags;

use super::{CPU, SR_REG};

bitflags! {
    /// Bit layout of the status register
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StatusFlags: u32 {
        /// Last result was zero
        const ZERO = 1 << 0;
        /// Last result was negative
        const NEGATIVE = 1 << 1;
        /// Reserved, never set by the catalog
        const CARRY = 1 << 2;
        /// Reserved, never set by the catalog
        const OVERFLOW = 1 << 3;
        /// Shield raised
        const SHIELD = 1 << 4;
        /// Target locked
        const LOCK_ON = 1 << 5;
        /// Trans-am engaged
        const TRANS_AM = 1 << 6;
        /// Danger detected
        const DANGER = 1 << 7;
        /// A call-base transfer occurred
        const CALL_BASE = 1 << 8;
    }
}

impl CPU {
    /// Read the status register as flags
    ///
    /// Reserved bits are retained in the returned value.
    #[inline(always)]
    pub fn status(&self) -> StatusFlags {
        StatusFlags::from_bits_retain(self.reg(SR_REG) as u32)
    }

    #[inline(always)]
    fn set_status(&mut self, flags: StatusFlags) {
        self.set_reg(SR_REG, flags.bits() as i32);
    }

    /// Check whether a status flag is set
    ///
    /// # Example
    /// ```
    /// use gundam_asm::core::cpu::{StatusFlags, CPU};
    ///
    /// let mut cpu = CPU::new();
    /// cpu.set_flag(StatusFlags::SHIELD, true);
    /// assert!(cpu.flag(StatusFlags::SHIELD));
    /// assert!(!cpu.flag(StatusFlags::DANGER));
    /// ```
    pub fn flag(&self, flag: StatusFlags) -> bool {
        self.status().contains(flag)
    }

    /// Set or clear a status flag
    ///
    /// Read-modify-write of the status register; every other bit,
    /// reserved ones included, keeps its value.
    pub fn set_flag(&mut self, flag: StatusFlags, value: bool) {
        let mut sr = self.status();
        sr.set(flag, value);
        self.set_status(sr);
    }

    /// Derive Zero and Negative from a produced value
    ///
    /// Both bits are written in a single register update.
    ///
    /// # Example
    /// ```
    /// use gundam_asm::core::cpu::{StatusFlags, CPU};
    ///
    /// let mut cpu = CPU::new();
    /// cpu.update_zn(-7);
    /// assert!(cpu.flag(StatusFlags::NEGATIVE));
    /// assert!(!cpu.flag(StatusFlags::ZERO));
    /// ```
    pub fn update_zn(&mut self, result: i32) {
        let mut sr = self.status();
        sr.set(StatusFlags::ZERO, result == 0);
        sr.set(StatusFlags::NEGATIVE, result < 0);
        self.set_status(sr);
    }
}
