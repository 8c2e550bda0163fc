// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod cli;
mod cmd_generate_completion;
mod cmd_open;
mod config;
mod event_formatter;
mod pdf;
mod table;
mod tui;
mod util;

use std::error::Error;

use colored::Colorize;

pub use crate::cli::{Cli, Commands};

/// Run the roadmap command-line interface.
pub fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run() {
                println!("{} {}", "Error:".red(), e);
                std::process::exit(1);
            }
        }
        Err(e) => {
            println!("{} {}", "Error:".red(), e);
            std::process::exit(2);
        }
    }
    Ok(())
}
