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

/// Fault reason codes
///
/// The numbering follows the exception codes of the MIPS simulator the
/// catalog plugs into, so hosts can forward them to their own exception
/// handlers unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ExceptionCause {
    /// Address error on load
    AddressErrorLoad = 4,
    /// System call could not be dispatched
    Syscall = 8,
    /// Arithmetic overflow
    Overflow = 12,
    /// Integer division by zero
    DivideByZero = 15,
}

impl ExceptionCause {
    /// Numeric reason code
    #[inline]
    pub fn code(self) -> u32 {
        self as u32
    }
}
