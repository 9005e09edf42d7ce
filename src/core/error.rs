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

//! Error types

use thiserror::Error;

use crate::core::cpu::ExceptionCause;

/// Result type for emulator operations
pub type Result<T> = std::result::Result<T, EmulatorError>;

/// Main error type for the emulator
#[derive(Error, Debug)]
pub enum EmulatorError {
    #[error("Invalid memory access at 0x{address:08X}")]
    InvalidMemoryAccess { address: u32 },

    #[error("Unaligned memory access: {size}-byte access at 0x{address:08X}")]
    UnalignedAccess { address: u32, size: u8 },

    #[error("Unsupported instruction: 0x{0:08X}")]
    UnsupportedInstruction(u32),

    #[error("Processing fault: {0}")]
    Fault(#[from] Fault),

    #[error("Invalid encoding template \"{template}\": {reason}")]
    InvalidTemplate { template: String, reason: String },

    #[error("Encoding of {mnemonic} overlaps with {existing}")]
    DuplicateEncoding {
        mnemonic: &'static str,
        existing: &'static str,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid memory layout: {0}")]
    InvalidLayout(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Loader error: {0}")]
    LoaderError(String),
}

impl EmulatorError {
    /// Returns the fault carried by this error, if it is a processing fault
    pub fn as_fault(&self) -> Option<&Fault> {
        match self {
            EmulatorError::Fault(fault) => Some(fault),
            _ => None,
        }
    }
}

/// A processing fault raised while executing an instruction
///
/// Faults abort the current instruction and are handed back to the host,
/// which decides whether to halt or continue.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message} (cause {})", .cause.code())]
pub struct Fault {
    /// Reason code
    pub cause: ExceptionCause,
    /// Human-readable description
    pub message: String,
}

impl Fault {
    /// Create a fault with an arbitrary cause and message
    pub fn new(cause: ExceptionCause, message: impl Into<String>) -> Self {
        Self {
            cause,
            message: message.into(),
        }
    }

    /// Signed 32-bit arithmetic overflow
    pub fn overflow() -> Self {
        Self::new(ExceptionCause::Overflow, "arithmetic overflow")
    }

    /// Integer division with a zero divisor
    pub fn divide_by_zero() -> Self {
        Self::new(ExceptionCause::DivideByZero, "division by zero")
    }

    /// Wrap a memory subsystem error raised by a load
    ///
    /// The memory error's message is kept as-is.
    pub fn address_load(source: &EmulatorError) -> Self {
        Self::new(ExceptionCause::AddressErrorLoad, source.to_string())
    }

    /// System call number the host cannot dispatch
    pub fn unknown_syscall(number: i32) -> Self {
        Self::new(
            ExceptionCause::Syscall,
            format!("invalid or unimplemented syscall service: {}", number),
        )
    }
}
