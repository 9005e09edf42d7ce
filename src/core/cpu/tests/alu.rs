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

use super::super::alu::*;
use super::super::ExceptionCause;
use proptest::prelude::*;

fn cause(err: crate::core::error::EmulatorError) -> ExceptionCause {
    err.as_fault().expect("expected a fault").cause
}

#[test]
fn test_checked_add_boundaries() {
    assert_eq!(checked_add(i32::MAX, 0).unwrap(), i32::MAX);
    assert_eq!(checked_add(i32::MIN, -0).unwrap(), i32::MIN);
    assert_eq!(checked_add(i32::MAX, i32::MIN).unwrap(), -1);
    assert_eq!(cause(checked_add(i32::MAX, 1).unwrap_err()), ExceptionCause::Overflow);
    assert_eq!(cause(checked_add(i32::MIN, -1).unwrap_err()), ExceptionCause::Overflow);
}

#[test]
fn test_checked_sub_boundaries() {
    assert_eq!(checked_sub(0, i32::MAX).unwrap(), -i32::MAX);
    assert_eq!(checked_sub(-1, i32::MAX).unwrap(), i32::MIN);
    assert!(checked_sub(0, i32::MIN).is_err());
    assert!(checked_sub(i32::MIN, 1).is_err());
}

#[test]
fn test_truncating_mul() {
    assert_eq!(truncating_mul(6, 7), 42);
    assert_eq!(truncating_mul(0x0001_0000, 0x0001_0000), 0);
    assert_eq!(truncating_mul(i32::MIN, -1), i32::MIN);
    assert_eq!(truncating_mul(-3, 5), -15);
}

#[test]
fn test_checked_div() {
    assert_eq!(checked_div(7, 2).unwrap(), 3);
    assert_eq!(checked_div(-7, 2).unwrap(), -3);
    assert_eq!(checked_div(7, -2).unwrap(), -3);
    assert_eq!(checked_div(i32::MIN, -1).unwrap(), i32::MIN);
    assert_eq!(cause(checked_div(1, 0).unwrap_err()), ExceptionCause::DivideByZero);
}

#[test]
fn test_sign_extend16() {
    assert_eq!(sign_extend16(0x7FFF), 32767);
    assert_eq!(sign_extend16(0x8000), -32768);
    assert_eq!(sign_extend16(0xFFFF), -1);
    // Only the low half counts
    assert_eq!(sign_extend16(0xABCD_0001), 1);
}

proptest! {
    #[test]
    fn prop_add_faults_exactly_on_overflow(a in any::<i32>(), b in any::<i32>()) {
        let exact = a as i64 + b as i64;
        let fits = exact >= i32::MIN as i64 && exact <= i32::MAX as i64;
        match checked_add(a, b) {
            Ok(sum) => {
                prop_assert!(fits);
                prop_assert_eq!(sum as i64, exact);
            }
            Err(_) => {
                prop_assert!(!fits);
                // Overflow needs operands of the same sign
                prop_assert_eq!(a < 0, b < 0);
            }
        }
    }

    #[test]
    fn prop_sub_faults_exactly_on_overflow(a in any::<i32>(), b in any::<i32>()) {
        let exact = a as i64 - b as i64;
        let fits = exact >= i32::MIN as i64 && exact <= i32::MAX as i64;
        match checked_sub(a, b) {
            Ok(diff) => {
                prop_assert!(fits);
                prop_assert_eq!(diff, a.wrapping_sub(b));
            }
            Err(_) => {
                prop_assert!(!fits);
                prop_assert_ne!(a < 0, b < 0);
            }
        }
    }

    #[test]
    fn prop_mul_is_low_word(a in any::<i32>(), b in any::<i32>()) {
        prop_assert_eq!(truncating_mul(a, b), ((a as i64) * (b as i64)) as i32);
    }

    #[test]
    fn prop_div_faults_only_on_zero(a in any::<i32>(), b in any::<i32>()) {
        match checked_div(a, b) {
            Ok(q) => {
                prop_assert_ne!(b, 0);
                prop_assert_eq!(q, a.wrapping_div(b));
            }
            Err(_) => prop_assert_eq!(b, 0),
        }
    }
}
