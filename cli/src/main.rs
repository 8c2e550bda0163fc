// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Roadmap - plan your year on a twelve-month timeline

use std::error::Error;

use roadmap_cli::run;

fn main() -> Result<(), Box<dyn Error>> {
    run()
}
