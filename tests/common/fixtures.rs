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

//! Test fixtures for common test scenarios

use gundam_asm::core::config::SystemConfig;
use gundam_asm::core::system::System;

/// Create a System with the given program loaded at the entry point
#[allow(dead_code)]
pub fn system_with_program(program: &[u32]) -> System {
    system_with_config(SystemConfig::default(), program)
}

/// Create a configured System with a program loaded
#[allow(dead_code)]
pub fn system_with_config(config: SystemConfig, program: &[u32]) -> System {
    let mut system = System::with_config(config).expect("Invalid config");
    system
        .load_program(program)
        .expect("Failed to load program");
    system
}

/// Render a program as a hex text image
#[allow(dead_code)]
pub fn hex_image(program: &[u32]) -> String {
    program
        .iter()
        .map(|word| format!("{:08x}\n", word))
        .collect()
}
