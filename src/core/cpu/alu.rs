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

//! Integer arithmetic with the catalog's overflow rules
//!
//! All operations work on signed 32-bit two's complement values. Checked
//! operations return a fault instead of a value; callers write their
//! destination only after the check passed.

use crate::core::error::{Fault, Result};

/// Signed add, faulting on overflow
///
/// Overflow happens when both operands share a sign and the sum does not.
///
/// # Example
/// ```
/// use gundam_asm::core::cpu::alu;
///
/// assert_eq!(alu::checked_add(2, 3).unwrap(), 5);
/// assert!(alu::checked_add(i32::MAX, 1).is_err());
/// ```
pub fn checked_add(a: i32, b: i32) -> Result<i32> {
    a.checked_add(b).ok_or_else(|| Fault::overflow().into())
}

/// Signed subtract, faulting on overflow
///
/// Overflow happens when the operands differ in sign and the difference
/// takes the subtrahend's sign.
pub fn checked_sub(a: i32, b: i32) -> Result<i32> {
    a.checked_sub(b).ok_or_else(|| Fault::overflow().into())
}

/// Low 32 bits of the full 64-bit signed product
///
/// Never faults.
#[inline]
pub fn truncating_mul(a: i32, b: i32) -> i32 {
    ((a as i64) * (b as i64)) as i32
}

/// Signed division truncating toward zero
///
/// Faults only on a zero divisor. `i32::MIN / -1` wraps to `i32::MIN`.
pub fn checked_div(a: i32, b: i32) -> Result<i32> {
    if b == 0 {
        return Err(Fault::divide_by_zero().into());
    }
    Ok(a.wrapping_div(b))
}

/// Sign-extend the low 16 bits of an encoded field
///
/// # Example
/// ```
/// use gundam_asm::core::cpu::alu::sign_extend16;
///
/// assert_eq!(sign_extend16(0xFF9C), -100);
/// assert_eq!(sign_extend16(0x0064), 100);
/// ```
#[inline(always)]
pub fn sign_extend16(field: u32) -> i32 {
    ((field as i32) << 16) >> 16
}
