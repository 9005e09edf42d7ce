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

//! Small test programs
//!
//! All programs assume the default text base 0x00400000.

/// Count r8 down from 3, then exit
#[allow(dead_code)]
pub fn countdown() -> Vec<u32> {
    vec![
        0x20080003, // chargeup   $8, $0, 3
        0x2108FFFF, // chargeup   $8, $8, -1
        0x1500FFFE, // scatter    $8, $0, -2
        0x2002000A, // chargeup   $2, $0, 10
        0x0000000C, // syscall
    ]
}

/// Trans-am three times on two units of energy, print the result
#[allow(dead_code)]
pub fn transam_burst() -> Vec<u32> {
    vec![
        0x20190002, // chargeup   $25, $0, 2     ; EN = 2
        0x2009000A, // chargeup   $9, $0, 10
        0x01205033, // transam    $10, $9        ; 30, EN = 1
        0x01405833, // transam    $11, $10       ; 90, EN = 0
        0x01606033, // transam    $12, $11       ; 90, no energy
        0x44080001, // scan       $8, 1          ; r8 = EN
        0x01802025, // fullburst  $4, $12, $0
        0x20020001, // chargeup   $2, $0, 1
        0x0000000C, // syscall                    ; print 90
        0x2002000A, // chargeup   $2, $0, 10
        0x0000000C, // syscall
    ]
}

/// Evade while in danger, deploy bits to clear it, lock on and raise the shield
#[allow(dead_code)]
pub fn danger_drill() -> Vec<u32> {
    vec![
        0x48100005, // autoevade  0x00400014
        0x2002000A, // chargeup   $2, $0, 10
        0x0000000C, // syscall
        0x00000000,
        0x00000000,
        0x20080009, // chargeup   $8, $0, 9
        0x20090003, // chargeup   $9, $0, 3
        0x01095034, // deploybits $10, $8, $9    ; 3, danger cleared
        0x01495831, // lockon     $11, $10, $9   ; 1
        0x01600032, // shieldup   $11
        0x48100000, // autoevade  0x00400000     ; not taken
        0x08100001, // jumpbase   0x00400004
    ]
}

/// Call a doubling routine with callbase and print its result
#[allow(dead_code)]
pub fn callbase_routine() -> Vec<u32> {
    vec![
        0x20040015, // chargeup   $4, $0, 21
        0xF0100006, // callbase   0x00400018
        0x20020001, // chargeup   $2, $0, 1
        0x0000000C, // syscall                    ; print 42
        0x2002000A, // chargeup   $2, $0, 10
        0x0000000C, // syscall
        0x00802030, // boost      $4, $4
        0x00E00008, // dock       $7
    ]
}

/// Load from a data segment at 0x2000, print it, then load misaligned
#[allow(dead_code)]
pub fn hangar_access() -> Vec<u32> {
    vec![
        0x20052000, // chargeup   $5, $0, 0x2000
        0x8CA60004, // hangarload $6, 4($5)
        0x00C02025, // fullburst  $4, $6, $0
        0x20020001, // chargeup   $2, $0, 1
        0x0000000C, // syscall
        0x8CA60002, // hangarload $6, 2($5)     ; address error
    ]
}

/// Print 42 and exit with code 3
#[allow(dead_code)]
pub fn exit_with_code() -> Vec<u32> {
    vec![
        0x2004002A, // chargeup   $4, $0, 42
        0x20020001, // chargeup   $2, $0, 1
        0x0000000C, // syscall
        0x20040003, // chargeup   $4, $0, 3
        0x20020011, // chargeup   $2, $0, 17
        0x0000000C, // syscall
    ]
}
