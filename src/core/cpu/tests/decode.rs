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

use super::super::*;
use crate::core::error::EmulatorError;

#[test]
fn test_operands_decode_r_type() {
    // beamfuse r3, r1, r2
    let ops = Operands::decode(0x0022_1820);
    assert_eq!(ops.rs, 1);
    assert_eq!(ops.rt, 2);
    assert_eq!(ops.rd, 3);
    assert_eq!(ops.shamt, 0);
}

#[test]
fn test_operands_decode_i_type() {
    // chargeup r2, r0, -1
    let ops = Operands::decode(0x2002_FFFF);
    assert_eq!(ops.rs, 0);
    assert_eq!(ops.rt, 2);
    assert_eq!(ops.imm, 0xFFFF);
}

#[test]
fn test_operands_decode_j_type() {
    let ops = Operands::decode(0x0810_0004);
    assert_eq!(ops.target, 0x0010_0004);
}

#[test]
fn test_operand_constructors_truncate() {
    assert_eq!(Operands::i(1, 2, -100).imm, 0xFF9C);
    assert_eq!(Operands::j(0xFFFF_FFFF).target, 0x03FF_FFFF);
}

#[test]
fn test_template_parse() {
    let t = EncodingTemplate::parse("000010 ffffffffffffffffffffffffff").unwrap();
    assert_eq!(t.mask(), 0xFC00_0000);
    assert_eq!(t.fixed_bits(), 0x0800_0000);
    assert_eq!(t.pattern(), "000010 ffffffffffffffffffffffffff");
}

#[test]
fn test_template_parse_fully_fixed() {
    let t = EncodingTemplate::parse("000000 00000 00000 00000 00000 001100").unwrap();
    assert_eq!(t.mask(), 0xFFFF_FFFF);
    assert!(t.matches(0x0000_000C));
    assert!(!t.matches(0x0000_010C));
}

#[test]
fn test_template_rejects_short_pattern() {
    let err = EncodingTemplate::parse("000000 sssss").unwrap_err();
    assert!(matches!(err, EmulatorError::InvalidTemplate { .. }));
}

#[test]
fn test_template_rejects_long_pattern() {
    assert!(EncodingTemplate::parse("000000 sssss ttttt fffff 00000 1000001").is_err());
}

#[test]
fn test_template_rejects_unknown_letter() {
    let err = EncodingTemplate::parse("000000 sssss ttttt fffff 00000 10000x").unwrap_err();
    assert!(err.to_string().contains("'x'"));
}

#[test]
fn test_template_matches_ignores_operand_bits() {
    let t = EncodingTemplate::parse("000000 sssss ttttt fffff 00000 100000").unwrap();
    assert!(t.matches(0x0000_0020));
    assert!(t.matches(0x03FF_F820));
    assert!(!t.matches(0x0000_0022));
    assert!(!t.matches(0x0000_0060)); // shamt must be zero
}

#[test]
fn test_template_overlaps() {
    let add = EncodingTemplate::parse("000000 sssss ttttt fffff 00000 100000").unwrap();
    let sub = EncodingTemplate::parse("000000 sssss ttttt fffff 00000 100010").unwrap();
    let any_r = EncodingTemplate::parse("000000 ssssssssssssssssssssssssss").unwrap();

    assert!(!add.overlaps(&sub));
    assert!(add.overlaps(&any_r));
    assert!(any_r.overlaps(&sub));
    assert!(add.overlaps(&add));
}

#[test]
fn test_template_encode() {
    let add = EncodingTemplate::parse("000000 sssss ttttt fffff 00000 100000").unwrap();
    assert_eq!(add.encode(Format::R, &Operands::r(3, 1, 2)), 0x0022_1820);

    let addi = EncodingTemplate::parse("001000 sssss fffff tttttttttttttttt").unwrap();
    assert_eq!(addi.encode(Format::I, &Operands::i(2, 0, 10)), 0x2002_000A);

    let lw = EncodingTemplate::parse("100011 sssss fffff tttttttttttttttt").unwrap();
    assert_eq!(lw.encode(Format::I, &Operands::i(6, 5, 4)), 0x8CA6_0004);

    let j = EncodingTemplate::parse("000010 ffffffffffffffffffffffffff").unwrap();
    assert_eq!(j.encode(Format::J, &Operands::j(0x0010_0000)), 0x0810_0000);
}

#[test]
fn test_template_encode_drops_fixed_fields() {
    // scan has rs fixed to zero
    let scan = EncodingTemplate::parse("010001 00000 fffff ssssssssssssssss").unwrap();
    assert_eq!(scan.encode(Format::I, &Operands::i(8, 3, 1)), 0x4408_0001);
}

#[test]
fn test_encode_then_decode_fields() {
    let t = EncodingTemplate::parse("000000 sssss ttttt fffff 00000 110100").unwrap();
    let word = t.encode(Format::R, &Operands::r(31, 17, 9));
    let ops = Operands::decode(word);
    assert_eq!((ops.rd, ops.rs, ops.rt), (31, 17, 9));
    assert!(t.matches(word));
}
