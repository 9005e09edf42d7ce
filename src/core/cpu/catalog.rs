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

//! Instruction catalog
//!
//! The catalog is the set of extension instructions: each entry pairs a
//! bit-exact encoding template with the routine that executes it. Entries
//! are added once while the catalog is built and never change afterwards.

use super::decode::{EncodingTemplate, Format, Operands};
use super::instructions::ExecContext;
use super::CPU;
use crate::core::error::{EmulatorError, Result};

/// Execution routine of one instruction
pub type ExecFn = fn(&mut CPU, Operands, &mut ExecContext<'_>) -> Result<()>;

/// One catalog entry
#[derive(Clone)]
pub struct InstructionDef {
    mnemonic: &'static str,
    syntax: &'static str,
    description: &'static str,
    format: Format,
    template: EncodingTemplate,
    exec: ExecFn,
}

impl InstructionDef {
    /// Build a definition, parsing its template
    ///
    /// # Errors
    ///
    /// `EmulatorError::InvalidTemplate` if the template is malformed.
    pub fn new(
        syntax: &'static str,
        description: &'static str,
        format: Format,
        template: &'static str,
        exec: ExecFn,
    ) -> Result<Self> {
        let mnemonic = syntax.split_whitespace().next().unwrap_or(syntax);
        Ok(Self {
            mnemonic,
            syntax,
            description,
            format,
            template: EncodingTemplate::parse(template)?,
            exec,
        })
    }

    /// Mnemonic, e.g. `beamfuse`
    pub fn mnemonic(&self) -> &'static str {
        self.mnemonic
    }

    /// Mnemonic with example operands, e.g. `beamfuse $R0,$R1,$R2`
    pub fn syntax(&self) -> &'static str {
        self.syntax
    }

    /// One-line summary
    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn template(&self) -> &EncodingTemplate {
        &self.template
    }

    /// Build the instruction word for the given operand fields
    pub fn encode(&self, ops: &Operands) -> u32 {
        self.template.encode(self.format, ops)
    }

    /// Run the routine on already decoded operands
    pub fn execute(&self, cpu: &mut CPU, ops: Operands, ctx: &mut ExecContext<'_>) -> Result<()> {
        (self.exec)(cpu, ops, ctx)
    }
}

impl std::fmt::Debug for InstructionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstructionDef")
            .field("syntax", &self.syntax)
            .field("format", &self.format)
            .field("template", &self.template.pattern())
            .finish()
    }
}

/// The extension instruction set
///
/// # Example
/// ```
/// use gundam_asm::core::cpu::Catalog;
///
/// let catalog = Catalog::new().unwrap();
/// let def = catalog.lookup(0x0022_1820).unwrap();
/// assert_eq!(def.mnemonic(), "beamfuse");
/// ```
#[derive(Debug, Clone)]
pub struct Catalog {
    instructions: Vec<InstructionDef>,
}

impl Catalog {
    /// Build the full extension catalog
    ///
    /// # Errors
    ///
    /// Whatever [`InstructionDef::new`] or [`Catalog::from_definitions`]
    /// reports for a malformed or overlapping row.
    pub fn new() -> Result<Self> {
        let defs = STANDARD
            .iter()
            .map(|&(syntax, description, format, template, exec)| {
                InstructionDef::new(syntax, description, format, template, exec)
            })
            .collect::<Result<Vec<_>>>()?;

        let catalog = Self::from_definitions(defs)?;
        log::debug!("Catalog populated with {} instructions", catalog.len());
        Ok(catalog)
    }

    /// Build a catalog from custom definitions
    ///
    /// # Errors
    ///
    /// `EmulatorError::DuplicateEncoding` if two definitions could match the
    /// same word.
    pub fn from_definitions(defs: impl IntoIterator<Item = InstructionDef>) -> Result<Self> {
        let mut catalog = Self {
            instructions: Vec::new(),
        };
        for def in defs {
            catalog.add(def)?;
        }
        Ok(catalog)
    }

    /// Append a definition, rejecting encoding overlaps
    fn add(&mut self, def: InstructionDef) -> Result<()> {
        if let Some(existing) = self
            .instructions
            .iter()
            .find(|d| d.template.overlaps(&def.template))
        {
            return Err(EmulatorError::DuplicateEncoding {
                mnemonic: def.mnemonic,
                existing: existing.mnemonic,
            });
        }
        self.instructions.push(def);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// All definitions in registration order
    pub fn iter(&self) -> impl Iterator<Item = &InstructionDef> {
        self.instructions.iter()
    }

    /// Find the definition whose template matches `word`
    pub fn lookup(&self, word: u32) -> Option<&InstructionDef> {
        self.instructions.iter().find(|d| d.template.matches(word))
    }

    /// Find a definition by mnemonic
    pub fn get(&self, mnemonic: &str) -> Option<&InstructionDef> {
        self.instructions.iter().find(|d| d.mnemonic == mnemonic)
    }

    /// Decode and execute one instruction word
    ///
    /// # Errors
    ///
    /// `EmulatorError::UnsupportedInstruction` if no template matches, or
    /// whatever fault the routine raised.
    pub fn execute(&self, word: u32, cpu: &mut CPU, ctx: &mut ExecContext<'_>) -> Result<()> {
        let def = self.lookup(word).ok_or_else(|| {
            log::warn!(
                "Unsupported instruction 0x{:08X} at PC=0x{:08X}",
                word,
                cpu.pc()
            );
            EmulatorError::UnsupportedInstruction(word)
        })?;

        log::trace!(
            "PC=0x{:08X} 0x{:08X} {}",
            cpu.pc(),
            word,
            def.mnemonic
        );
        cpu.set_current_instruction(word);
        def.execute(cpu, Operands::decode(word), ctx)
    }
}

type Row = (&'static str, &'static str, Format, &'static str, ExecFn);

/// Standard extension instruction table
const STANDARD: &[Row] = &[
    (
        "beamfuse $R0,$R1,$R2",
        "Beamfuse : Add two registers",
        Format::R,
        "000000 sssss ttttt fffff 00000 100000",
        |cpu, ops, _| cpu.op_beamfuse(ops),
    ),
    (
        "sabercut $R0,$R1,$R2",
        "Sabercut : Subtract two registers",
        Format::R,
        "000000 sssss ttttt fffff 00000 100010",
        |cpu, ops, _| cpu.op_sabercut(ops),
    ),
    (
        "overdrive $R0,$R1,$R2",
        "Overdrive : Multiply two registers (low 32 bits)",
        Format::R,
        "000000 sssss ttttt fffff 00000 011000",
        |cpu, ops, _| cpu.op_overdrive(ops),
    ),
    (
        "scatter $R0,$R1,label",
        "Scatter : Branch to label if ($R0 != $R1)",
        Format::I,
        "000101 fffff sssss tttttttttttttttt",
        |cpu, ops, _| cpu.op_scatter(ops),
    ),
    (
        "callpilot target",
        "Callpilot : Jump and link to target (R7 = return address)",
        Format::J,
        "000011 ffffffffffffffffffffffffff",
        |cpu, ops, _| cpu.op_callpilot(ops),
    ),
    (
        "phasejam $R0,$R1,$R2",
        "Phasejam : Bitwise XOR",
        Format::R,
        "000000 sssss ttttt fffff 00000 100110",
        |cpu, ops, _| cpu.op_phasejam(ops),
    ),
    (
        "prioritylock $R0,$R1,$R2",
        "Prioritylock : Set less than",
        Format::R,
        "000000 sssss ttttt fffff 00000 101010",
        |cpu, ops, _| cpu.op_prioritylock(ops),
    ),
    (
        "dock $R0",
        "Dock : Jump to address in ($R0)",
        Format::R,
        "000000 fffff 00000 00000 00000 001000",
        |cpu, ops, _| cpu.op_dock(ops),
    ),
    (
        "chargeup $R0,$R1,-100",
        "Chargeup : Add immediate to ($R1) and store in ($R0)",
        Format::I,
        "001000 sssss fffff tttttttttttttttt",
        |cpu, ops, _| cpu.op_chargeup(ops),
    ),
    (
        "fullburst $R0,$R1,$R2",
        "Fullburst : Bitwise OR",
        Format::R,
        "000000 sssss ttttt fffff 00000 100101",
        |cpu, ops, _| cpu.op_fullburst(ops),
    ),
    (
        "lockon $R0,$R1,$R2",
        "Lockon : Set rd and lockon flag if ($R1 == $R2)",
        Format::R,
        "000000 sssss ttttt fffff 00000 110001",
        |cpu, ops, _| cpu.op_lockon(ops),
    ),
    (
        "shieldup $R0",
        "Shieldup : Set shield flag from ($R0 != 0)",
        Format::R,
        "000000 fffff 00000 00000 00000 110010",
        |cpu, ops, _| cpu.op_shieldup(ops),
    ),
    (
        "transam $R0,$R1",
        "Transam : Multiply power by 3 if EN > 0 (and drain EN)",
        Format::R,
        "000000 sssss 00000 fffff 00000 110011",
        |cpu, ops, _| cpu.op_transam(ops),
    ),
    (
        "deploybits $R0,$R1,$R2",
        "Deploybits : rd = rs/rt; clears danger flag if result != 0",
        Format::R,
        "000000 sssss ttttt fffff 00000 110100",
        |cpu, ops, _| cpu.op_deploybits(ops),
    ),
    (
        "thrust $R0,$R1,-100",
        "Thrust : rt = rs + (imm << 2)",
        Format::I,
        "000001 sssss fffff tttttttttttttttt",
        |cpu, ops, _| cpu.op_thrust(ops),
    ),
    (
        "energize $R0",
        "Energize : Load EN (energy) from ($R0)",
        Format::I,
        "010000 fffff 00000 0000000000000000",
        |cpu, ops, _| cpu.op_energize(ops),
    ),
    (
        "scan $R0,0",
        "Scan : Read internal suit state (0=SR, 1=EN, 2=MS) into ($R0)",
        Format::I,
        "010001 00000 fffff ssssssssssssssss",
        |cpu, ops, _| cpu.op_scan(ops),
    ),
    (
        "autoevade label",
        "Autoevade : Jump to label if danger flag is set",
        Format::J,
        "010010 ffffffffffffffffffffffffff",
        |cpu, ops, _| cpu.op_autoevade(ops),
    ),
    (
        "callbase label",
        "Callbase : Jump to base routine and set callbase flag (R7 = return address)",
        Format::J,
        "111100 ffffffffffffffffffffffffff",
        |cpu, ops, _| cpu.op_callbase(ops),
    ),
    (
        "boost $R0,$R1",
        "Boost : Double power output (rd = rs << 1)",
        Format::R,
        "000000 sssss 00000 fffff 00000 110000",
        |cpu, ops, _| cpu.op_boost(ops),
    ),
    (
        "sensorlock $R0,$R1,$R2",
        "Sensorlock : Bitwise AND (rd = rs & rt)",
        Format::R,
        "000000 sssss ttttt fffff 00000 100100",
        |cpu, ops, _| cpu.op_sensorlock(ops),
    ),
    (
        "formup $R0,$R1,label",
        "Formup : Branch to label if ($R0 == $R1)",
        Format::I,
        "000100 fffff sssss tttttttttttttttt",
        |cpu, ops, _| cpu.op_formup(ops),
    ),
    (
        "hangarload $R0,100($R1)",
        "Hangarload : Load word (like lw)",
        Format::I,
        "100011 sssss fffff tttttttttttttttt",
        |cpu, ops, ctx| cpu.op_hangarload(ops, ctx),
    ),
    (
        "jumpbase label",
        "Jumpbase : Unconditional jump to label",
        Format::J,
        "000010 ffffffffffffffffffffffffff",
        |cpu, ops, _| cpu.op_jumpbase(ops),
    ),
    (
        "syscall",
        "Issue a system call : Execute the system call specified by value in $v0",
        Format::R,
        "000000 00000 00000 00000 00000 001100",
        |cpu, _, ctx| cpu.op_syscall(ctx),
    ),
];
