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

//! Program image loading
//!
//! Two image formats are accepted:
//!
//! - Binary: consecutive 32-bit little-endian words, as dumped by MARS
//!   with "Binary" output
//! - Text: one hexadecimal word per line, as dumped by MARS with
//!   "Hexadecimal Text" output
//!
//! In text images blank lines are skipped and everything after `#` is a
//! comment. A `0x` prefix is allowed.
//!
//! ```text
//! 2002000a   # chargeup $2, $0, 10
//! 0x0000000c # syscall
//! ```
//!
//! # Example
//!
//! ```
//! use gundam_asm::core::loader::ProgramImage;
//!
//! let image = ProgramImage::parse_hex("2002000a\n0x0000000c # syscall\n").unwrap();
//! assert_eq!(image.words(), &[0x2002_000A, 0x0000_000C]);
//! ```

use std::path::Path;

use super::error::{EmulatorError, Result};

/// Sequence of instruction words ready for [`Bus::load_program`](crate::core::memory::Bus::load_program)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgramImage {
    words: Vec<u32>,
}

impl ProgramImage {
    /// Wrap already decoded words
    pub fn new(words: Vec<u32>) -> Self {
        Self { words }
    }

    /// Parse a hexadecimal text image
    ///
    /// # Errors
    ///
    /// `EmulatorError::Parse` naming the first bad line.
    pub fn parse_hex(text: &str) -> Result<Self> {
        let mut words = Vec::new();

        for (number, line) in text.lines().enumerate() {
            let line = match line.split_once('#') {
                Some((code, _)) => code,
                None => line,
            }
            .trim();

            if line.is_empty() {
                continue;
            }

            let digits = line
                .strip_prefix("0x")
                .or_else(|| line.strip_prefix("0X"))
                .unwrap_or(line);
            let word = u32::from_str_radix(digits, 16).map_err(|e| {
                EmulatorError::Parse(format!("line {}: \"{}\": {}", number + 1, line, e))
            })?;
            words.push(word);
        }

        Ok(Self { words })
    }

    /// Decode a binary image of little-endian words
    ///
    /// # Errors
    ///
    /// `EmulatorError::LoaderError` if the length is not a multiple of 4.
    pub fn from_le_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 4 != 0 {
            return Err(EmulatorError::LoaderError(format!(
                "image size {} is not a multiple of 4 bytes",
                bytes.len()
            )));
        }

        let words = bytes
            .chunks_exact(4)
            .map(|b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
            .collect();
        Ok(Self { words })
    }

    /// Load an image file
    ///
    /// Files ending in `.hex` or `.txt` are read as text, anything else
    /// as binary.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let is_text = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("hex") || e.eq_ignore_ascii_case("txt"));

        let image = if is_text {
            Self::parse_hex(&std::fs::read_to_string(path)?)?
        } else {
            Self::from_le_bytes(&std::fs::read(path)?)?
        };

        log::info!(
            "Loaded {} words from {}",
            image.len(),
            path.display()
        );
        Ok(image)
    }

    pub fn words(&self) -> &[u32] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
