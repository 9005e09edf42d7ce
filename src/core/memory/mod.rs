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

//! Memory contract and the reference memory bus
//!
//! Instruction routines only see the [`Memory`] trait. [`Bus`] is the
//! implementation used by the reference host: two flat little-endian
//! segments laid out like the MARS simulator's default memory map.
//!
//! # Memory Map (defaults)
//!
//! | Address Range          | Region | Size   | Access |
//! |------------------------|--------|--------|--------|
//! | 0x00400000-0x0040FFFF  | Text   | 64KB   | R/W    |
//! | 0x10010000-0x1001FFFF  | Data   | 64KB   | R/W    |
//!
//! # Example
//!
//! ```
//! use gundam_asm::core::memory::{Bus, Memory};
//!
//! let mut bus = Bus::new();
//! bus.write_word(0x10010000, -5).unwrap();
//! assert_eq!(bus.read_word(0x10010000).unwrap(), -5);
//!
//! // Unaligned word access fails
//! assert!(bus.read_word(0x10010002).is_err());
//! ```

use crate::core::error::{EmulatorError, Result};


/// Word-addressable store consumed by instruction routines
///
/// Word accesses must be 4-byte aligned. Every access is fallible; errors
/// are reported as `InvalidMemoryAccess` or `UnalignedAccess`.
pub trait Memory {
    /// Read a 32-bit word
    fn read_word(&self, address: u32) -> Result<i32>;

    /// Write a 32-bit word
    fn write_word(&mut self, address: u32, value: i32) -> Result<()>;

    /// Read a single byte
    fn read_byte(&self, address: u32) -> Result<u8>;
}

/// Segment sizes and bases for a [`Bus`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusLayout {
    pub text_base: u32,
    pub text_size: u32,
    pub data_base: u32,
    pub data_size: u32,
}

impl Default for BusLayout {
    fn default() -> Self {
        Self {
            text_base: Bus::TEXT_BASE,
            text_size: Bus::DEFAULT_SEGMENT_SIZE,
            data_base: Bus::DATA_BASE,
            data_size: Bus::DEFAULT_SEGMENT_SIZE,
        }
    }
}

impl BusLayout {
    /// Check that both segments fit the address space and do not overlap
    ///
    /// # Errors
    ///
    /// `EmulatorError::InvalidLayout` if a segment wraps past 0xFFFFFFFF,
    /// is larger than [`Bus::MAX_SEGMENT_SIZE`], or overlaps the other one.
    ///
    /// # Example
    ///
    /// ```
    /// use gundam_asm::core::memory::BusLayout;
    ///
    /// assert!(BusLayout::default().validate().is_ok());
    ///
    /// let wrapping = BusLayout { text_base: 0xFFFF_0000, text_size: 0x2_0000, ..Default::default() };
    /// assert!(wrapping.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let segments = [
            ("text", self.text_base, self.text_size),
            ("data", self.data_base, self.data_size),
        ];
        for (name, base, size) in segments {
            if size > Bus::MAX_SEGMENT_SIZE {
                return Err(EmulatorError::InvalidLayout(format!(
                    "{} segment size {} exceeds {} bytes",
                    name,
                    size,
                    Bus::MAX_SEGMENT_SIZE
                )));
            }
            if base.checked_add(size).is_none() {
                return Err(EmulatorError::InvalidLayout(format!(
                    "{} segment 0x{:08X}+0x{:X} wraps past the end of the address space",
                    name, base, size
                )));
            }
        }

        // Both ends fit in u32 here
        let text_end = self.text_base + self.text_size;
        let data_end = self.data_base + self.data_size;
        if self.text_base < data_end && self.data_base < text_end {
            return Err(EmulatorError::InvalidLayout(format!(
                "text segment 0x{:08X}-0x{:08X} overlaps data segment 0x{:08X}-0x{:08X}",
                self.text_base, text_end, self.data_base, data_end
            )));
        }
        Ok(())
    }
}

/// Memory region identification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemoryRegion {
    /// Program text
    Text,
    /// Static data
    Data,
    /// Unmapped region
    Unmapped,
}

/// Reference memory bus
///
/// Holds the text and data segments. Both are writable so that tests can
/// poke words anywhere.
#[derive(Debug, Clone)]
pub struct Bus {
    layout: BusLayout,

    /// Text segment
    text: Vec<u8>,

    /// Data segment
    data: Vec<u8>,
}

impl Bus {
    /// Default text segment base
    pub const TEXT_BASE: u32 = 0x0040_0000;

    /// Default data segment base
    pub const DATA_BASE: u32 = 0x1001_0000;

    /// Default size of each segment (64KB)
    pub const DEFAULT_SEGMENT_SIZE: u32 = 64 * 1024;

    /// Largest segment a layout may request (64MB)
    pub const MAX_SEGMENT_SIZE: u32 = 64 * 1024 * 1024;

    /// Create a bus with the default layout
    pub fn new() -> Self {
        Self::with_layout(BusLayout::default())
    }

    /// Create a bus with a custom layout
    ///
    /// Segments are zero-filled.
    pub fn with_layout(layout: BusLayout) -> Self {
        Self {
            layout,
            text: vec![0u8; layout.text_size as usize],
            data: vec![0u8; layout.data_size as usize],
        }
    }

    /// Layout this bus was built with
    pub fn layout(&self) -> BusLayout {
        self.layout
    }

    /// Clear both segments to zero
    pub fn reset(&mut self) {
        self.text.fill(0);
        self.data.fill(0);
    }

    /// Identify memory region for an address
    ///
    /// # Example
    ///
    /// ```
    /// use gundam_asm::core::memory::{Bus, MemoryRegion};
    ///
    /// let bus = Bus::new();
    ///
    /// assert_eq!(bus.identify_region(0x00400000), MemoryRegion::Text);
    /// assert_eq!(bus.identify_region(0x10010010), MemoryRegion::Data);
    /// assert_eq!(bus.identify_region(0x00000000), MemoryRegion::Unmapped);
    /// ```
    pub fn identify_region(&self, address: u32) -> MemoryRegion {
        let l = &self.layout;
        if address.wrapping_sub(l.text_base) < l.text_size {
            MemoryRegion::Text
        } else if address.wrapping_sub(l.data_base) < l.data_size {
            MemoryRegion::Data
        } else {
            MemoryRegion::Unmapped
        }
    }

    /// Resolve `len` bytes at `address` to a segment slice
    fn slice(&self, address: u32, len: u32) -> Result<&[u8]> {
        let (segment, base) = match self.identify_region(address) {
            MemoryRegion::Text => (&self.text, self.layout.text_base),
            MemoryRegion::Data => (&self.data, self.layout.data_base),
            MemoryRegion::Unmapped => return Err(EmulatorError::InvalidMemoryAccess { address }),
        };
        let offset = address.wrapping_sub(base) as usize;
        segment
            .get(offset..offset + len as usize)
            .ok_or(EmulatorError::InvalidMemoryAccess { address })
    }

    fn slice_mut(&mut self, address: u32, len: u32) -> Result<&mut [u8]> {
        let (segment, base) = match self.identify_region(address) {
            MemoryRegion::Text => (&mut self.text, self.layout.text_base),
            MemoryRegion::Data => (&mut self.data, self.layout.data_base),
            MemoryRegion::Unmapped => return Err(EmulatorError::InvalidMemoryAccess { address }),
        };
        let offset = address.wrapping_sub(base) as usize;
        segment
            .get_mut(offset..offset + len as usize)
            .ok_or(EmulatorError::InvalidMemoryAccess { address })
    }

    /// Write a single byte
    pub fn write_byte(&mut self, address: u32, value: u8) -> Result<()> {
        self.slice_mut(address, 1)?[0] = value;
        Ok(())
    }

    /// Copy a byte string into memory, e.g. a NUL-terminated message
    pub fn write_bytes(&mut self, address: u32, bytes: &[u8]) -> Result<()> {
        self.slice_mut(address, bytes.len() as u32)?
            .copy_from_slice(bytes);
        Ok(())
    }

    /// Load a program image as consecutive words starting at `address`
    ///
    /// # Example
    ///
    /// ```
    /// use gundam_asm::core::memory::{Bus, Memory};
    ///
    /// let mut bus = Bus::new();
    /// bus.load_program(0x00400000, &[0x0000000C, 0x08100000]).unwrap();
    /// assert_eq!(bus.read_word(0x00400004).unwrap() as u32, 0x08100000);
    /// ```
    pub fn load_program(&mut self, address: u32, words: &[u32]) -> Result<()> {
        for (i, &word) in words.iter().enumerate() {
            let addr = address.wrapping_add(i as u32 * 4);
            self.write_word(addr, word as i32)?;
        }
        log::debug!(
            "Loaded {} words at 0x{:08X}",
            words.len(),
            address
        );
        Ok(())
    }
}

impl Default for Bus {
    fn default() -> Self {
        Self::new()
    }
}

impl Memory for Bus {
    fn read_word(&self, address: u32) -> Result<i32> {
        // Check alignment
        if address & 0x3 != 0 {
            return Err(EmulatorError::UnalignedAccess { address, size: 4 });
        }
        let bytes = self.slice(address, 4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn write_word(&mut self, address: u32, value: i32) -> Result<()> {
        if address & 0x3 != 0 {
            return Err(EmulatorError::UnalignedAccess { address, size: 4 });
        }
        self.slice_mut(address, 4)?
            .copy_from_slice(&value.to_le_bytes());
        Ok(())
    }

    fn read_byte(&self, address: u32) -> Result<u8> {
        Ok(self.slice(address, 1)?[0])
    }
}
