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

//! Reference host configuration
//!
//! Loaded from TOML. Every key is optional:
//!
//! ```toml
//! text_base = 0x00400000
//! text_size = 65536
//! data_base = 0x10010000
//! data_size = 65536
//! max_instructions = 100000
//!
//! [cockpit]
//! energy = 3
//! suit_status = 0x0000_0078
//! status = 0x80          # start in danger
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::core::error::Result;
use crate::core::memory::{Bus, BusLayout};

/// Host settings for [`System`](crate::core::system::System)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SystemConfig {
    /// Text segment base address
    pub text_base: u32,
    /// Text segment size in bytes
    pub text_size: u32,
    /// Data segment base address
    pub data_base: u32,
    /// Data segment size in bytes
    pub data_size: u32,
    /// First instruction executed; defaults to `text_base`
    pub entry: Option<u32>,
    /// Step limit for [`System::run`](crate::core::system::System::run)
    pub max_instructions: usize,
    /// Initial cockpit register values
    pub cockpit: CockpitConfig,
}

/// Initial values of EN, MS and SR
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CockpitConfig {
    pub energy: i32,
    pub suit_status: i32,
    pub status: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            text_base: Bus::TEXT_BASE,
            text_size: Bus::DEFAULT_SEGMENT_SIZE,
            data_base: Bus::DATA_BASE,
            data_size: Bus::DEFAULT_SEGMENT_SIZE,
            entry: None,
            max_instructions: 100_000,
            cockpit: CockpitConfig::default(),
        }
    }
}

impl SystemConfig {
    /// Parse a TOML document
    ///
    /// # Example
    /// ```
    /// use gundam_asm::core::config::SystemConfig;
    ///
    /// let config = SystemConfig::from_toml_str("[cockpit]\nenergy = 2\n").unwrap();
    /// assert_eq!(config.cockpit.energy, 2);
    /// assert_eq!(config.text_base, 0x00400000);
    /// ```
    ///
    /// # Errors
    ///
    /// `EmulatorError::Config` for malformed TOML and
    /// `EmulatorError::InvalidLayout` for segments that wrap, overlap or
    /// exceed [`Bus::MAX_SEGMENT_SIZE`].
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the memory layout
    pub fn validate(&self) -> Result<()> {
        self.layout().validate()
    }

    /// Read and parse a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Memory layout for the bus
    pub fn layout(&self) -> BusLayout {
        BusLayout {
            text_base: self.text_base,
            text_size: self.text_size,
            data_base: self.data_base,
            data_size: self.data_size,
        }
    }

    /// Address execution starts at
    pub fn entry_point(&self) -> u32 {
        self.entry.unwrap_or(self.text_base)
    }
}
