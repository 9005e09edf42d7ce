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

use clap::Parser;
use log::{error, info};
use gundam_asm::core::config::SystemConfig;
use gundam_asm::core::error::Result;
use gundam_asm::core::loader::ProgramImage;
use gundam_asm::core::system::{RunOutcome, System};

/// Run a program built from the Gundam extension instructions
#[derive(Parser)]
#[command(name = "gundam-run")]
#[command(about = "Gundam instruction-set simulator", long_about = None)]
struct Args {
    /// Program image (.hex/.txt for one hex word per line, otherwise binary)
    program: String,

    /// TOML configuration file
    #[arg(short = 'c', long, env = "GUNDAM_CONFIG")]
    config: Option<String>,

    /// Maximum number of instructions to execute
    #[arg(short = 'n', long)]
    instructions: Option<usize>,

    /// Print the final CPU state as JSON
    #[arg(long)]
    json: bool,

    /// Dump registers when the program stops
    #[arg(short = 'd', long)]
    dump: bool,
}

fn main() -> Result<()> {
    // Pick up RUST_LOG and GUNDAM_CONFIG from a .env file if present
    dotenvy::dotenv().ok();

    // Initialize logger with default level INFO
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("gundam-run v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SystemConfig::load(path)?,
        None => SystemConfig::default(),
    };
    let limit = args.instructions.unwrap_or(config.max_instructions);

    let image = match ProgramImage::load(&args.program) {
        Ok(image) => image,
        Err(e) => {
            error!("Failed to load {}: {}", args.program, e);
            return Err(e);
        }
    };

    let mut system = System::with_config(config)?;
    system.load_program(image.words())?;

    info!(
        "Running {} words from 0x{:08X} (limit {})",
        image.len(),
        system.pc(),
        limit
    );

    let outcome = system.run(limit);

    print!("{}", system.output());
    if !system.output().is_empty() && !system.output().ends_with('\n') {
        println!();
    }

    if args.dump {
        system.cpu().dump_registers();
    }

    if args.json {
        match serde_json::to_string_pretty(&system.cpu().snapshot()) {
            Ok(json) => println!("{}", json),
            Err(e) => error!("Failed to serialize CPU state: {}", e),
        }
    }

    match outcome {
        Ok(RunOutcome::Exited(code)) => {
            info!("Exited with code {} after {} instructions", code, system.instructions());
            std::process::exit(code);
        }
        Ok(RunOutcome::LimitReached) => {
            info!("Instruction limit reached at PC=0x{:08X}", system.pc());
            Ok(())
        }
        Err(e) => {
            error!("Error at PC=0x{:08X}: {}", system.pc(), e);
            error!("Instruction count: {}", system.instructions());
            Err(e)
        }
    }
}
