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

//! Core components
//!
//! - CPU state, status flags and the extension instruction catalog
//! - Memory bus with text and data segments
//! - System call dispatch
//! - Reference host and its configuration

pub mod config;
pub mod cpu;
pub mod error;
pub mod loader;
pub mod memory;
pub mod syscall;
pub mod system;

// Re-export commonly used types
pub use config::SystemConfig;
pub use cpu::{Catalog, CPU};
pub use error::{EmulatorError, Fault, Result};
pub use loader::ProgramImage;
pub use memory::Bus;
pub use system::System;
