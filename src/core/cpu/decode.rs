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

//! Instruction word decoding and encoding templates

use crate::core::error::{EmulatorError, Result};

/// Decode R-type instruction
///
/// Format: | op (6) | rs (5) | rt (5) | rd (5) | shamt (5) | funct (6) |
///
/// # Returns
///
/// Tuple of (rs, rt, rd, shamt, funct)
#[inline(always)]
pub(super) fn decode_r_type(instr: u32) -> (u8, u8, u8, u8, u8) {
    let rs = ((instr >> 21) & 0x1F) as u8;
    let rt = ((instr >> 16) & 0x1F) as u8;
    let rd = ((instr >> 11) & 0x1F) as u8;
    let shamt = ((instr >> 6) & 0x1F) as u8;
    let funct = (instr & 0x3F) as u8;
    (rs, rt, rd, shamt, funct)
}

/// Decode I-type instruction
///
/// Format: | op (6) | rs (5) | rt (5) | immediate (16) |
///
/// # Returns
///
/// Tuple of (op, rs, rt, imm)
#[inline(always)]
pub(super) fn decode_i_type(instr: u32) -> (u8, u8, u8, u16) {
    let op = ((instr >> 26) & 0x3F) as u8;
    let rs = ((instr >> 21) & 0x1F) as u8;
    let rt = ((instr >> 16) & 0x1F) as u8;
    let imm = (instr & 0xFFFF) as u16;
    (op, rs, rt, imm)
}

/// Decode J-type instruction
///
/// Format: | op (6) | target (26) |
///
/// # Returns
///
/// Tuple of (op, target)
#[inline(always)]
pub(super) fn decode_j_type(instr: u32) -> (u8, u32) {
    let op = ((instr >> 26) & 0x3F) as u8;
    let target = instr & 0x03FFFFFF;
    (op, target)
}

/// Instruction word layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Register-register, opcode 000000, selected by funct
    R,
    /// Immediate, load and branch, selected by opcode
    I,
    /// Jump and call, selected by opcode
    J,
}

impl Format {
    /// Place operand fields at their bit positions for this layout
    fn pack(self, ops: &Operands) -> u32 {
        match self {
            Format::R => {
                ((ops.rs as u32 & 0x1F) << 21)
                    | ((ops.rt as u32 & 0x1F) << 16)
                    | ((ops.rd as u32 & 0x1F) << 11)
                    | ((ops.shamt as u32 & 0x1F) << 6)
            }
            Format::I => {
                ((ops.rs as u32 & 0x1F) << 21)
                    | ((ops.rt as u32 & 0x1F) << 16)
                    | ops.imm as u32
            }
            Format::J => ops.target & 0x03FF_FFFF,
        }
    }
}

/// Operand fields extracted from an instruction word
///
/// Every field is decoded regardless of format; routines only look at the
/// ones their layout defines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Operands {
    /// Bits 25..21
    pub rs: u8,
    /// Bits 20..16
    pub rt: u8,
    /// Bits 15..11
    pub rd: u8,
    /// Bits 10..6
    pub shamt: u8,
    /// Bits 15..0, raw (not sign-extended)
    pub imm: u16,
    /// Bits 25..0
    pub target: u32,
}

impl Operands {
    /// Extract all fields from a 32-bit word
    ///
    /// # Example
    /// ```
    /// use gundam_asm::core::cpu::Operands;
    ///
    /// // beamfuse r3, r1, r2
    /// let ops = Operands::decode(0x0022_1820);
    /// assert_eq!((ops.rs, ops.rt, ops.rd), (1, 2, 3));
    /// ```
    pub fn decode(word: u32) -> Self {
        let (rs, rt, rd, shamt, _) = decode_r_type(word);
        let (_, _, _, imm) = decode_i_type(word);
        let (_, target) = decode_j_type(word);
        Self {
            rs,
            rt,
            rd,
            shamt,
            imm,
            target,
        }
    }

    /// Register-register operands
    pub fn r(rd: u8, rs: u8, rt: u8) -> Self {
        Self {
            rs,
            rt,
            rd,
            ..Self::default()
        }
    }

    /// Register-immediate operands; `imm` is truncated to 16 bits
    pub fn i(rt: u8, rs: u8, imm: i32) -> Self {
        Self {
            rs,
            rt,
            imm: imm as u16,
            ..Self::default()
        }
    }

    /// Jump target operand; `target` is truncated to 26 bits
    pub fn j(target: u32) -> Self {
        Self {
            target: target & 0x03FF_FFFF,
            ..Self::default()
        }
    }
}

/// Fixed/variable bit layout identifying one instruction
///
/// Written as 32 characters (spaces ignored), most significant bit first:
/// `0`/`1` are fixed bits, `f`, `s` and `t` mark operand fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingTemplate {
    pattern: &'static str,
    mask: u32,
    bits: u32,
}

impl EncodingTemplate {
    /// Parse a template string
    ///
    /// # Errors
    ///
    /// `EmulatorError::InvalidTemplate` if the pattern is not 32 bits long
    /// or contains characters other than `0`, `1`, `f`, `s`, `t`.
    ///
    /// # Example
    /// ```
    /// use gundam_asm::core::cpu::EncodingTemplate;
    ///
    /// let t = EncodingTemplate::parse("000000 sssss ttttt fffff 00000 100000").unwrap();
    /// assert_eq!(t.mask(), 0xFC00_07FF);
    /// assert_eq!(t.fixed_bits(), 0x0000_0020);
    /// ```
    pub fn parse(pattern: &'static str) -> Result<Self> {
        let invalid = |reason: String| EmulatorError::InvalidTemplate {
            template: pattern.to_string(),
            reason,
        };

        let mut mask = 0u32;
        let mut bits = 0u32;
        let mut width = 0u32;

        for c in pattern.chars().filter(|c| !c.is_whitespace()) {
            if width == 32 {
                return Err(invalid("more than 32 bits".to_string()));
            }
            mask <<= 1;
            bits <<= 1;
            match c {
                '0' => mask |= 1,
                '1' => {
                    mask |= 1;
                    bits |= 1;
                }
                'f' | 's' | 't' => {}
                other => return Err(invalid(format!("unexpected character '{}'", other))),
            }
            width += 1;
        }

        if width != 32 {
            return Err(invalid(format!("{} bits, expected 32", width)));
        }

        Ok(Self {
            pattern,
            mask,
            bits,
        })
    }

    /// Template text as written
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Mask of the fixed bits
    pub fn mask(&self) -> u32 {
        self.mask
    }

    /// Values of the fixed bits
    pub fn fixed_bits(&self) -> u32 {
        self.bits
    }

    /// Check whether a word carries this template's fixed bits
    #[inline(always)]
    pub fn matches(&self, word: u32) -> bool {
        word & self.mask == self.bits
    }

    /// Check whether some word would match both templates
    pub fn overlaps(&self, other: &EncodingTemplate) -> bool {
        (self.bits ^ other.bits) & self.mask & other.mask == 0
    }

    /// Build a word from operand fields
    ///
    /// Field values that would land on fixed bits are dropped.
    pub fn encode(&self, format: Format, ops: &Operands) -> u32 {
        self.bits | (format.pack(ops) & !self.mask)
    }
}
