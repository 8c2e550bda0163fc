// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf};

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use colored::Colorize;

use crate::config::parse_config;
use crate::event_formatter::{EventFormatter, SessionEvent};
use crate::pdf::DEFAULT_OUTPUT;
use crate::tui;
use crate::util::OutputFormat;

/// The interactive timeline session; runs when no subcommand is given, so
/// its arguments live on the root command.
#[derive(Debug, Clone)]
pub struct CmdOpen {
    pub name: Option<String>,
    pub output: Option<PathBuf>,
    pub output_format: OutputFormat,
}

impl CmdOpen {
    pub fn args() -> [Arg; 3] {
        [
            arg!(--name [NAME] "Display name used in the document title"),
            arg!(--output [FILE] "Path the exported PDF is written to")
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
            OutputFormat::arg(),
        ]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            name: matches.get_one("name").cloned(),
            output: matches.get_one("output").cloned(),
            output_format: OutputFormat::from(matches),
        }
    }

    pub fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "opening timeline session...");
        let mut config = parse_config(config)?;
        config.normalize()?;

        // flags beat the config file, the config file beats the defaults
        let name = self.name.or(config.name).unwrap_or_default();
        let output = self
            .output
            .or(config.output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

        let report = tui::run_session(name, output.clone())?;

        if report.store.is_empty() && self.output_format == OutputFormat::Table {
            println!("{}", "No events added this session".italic());
        } else {
            let rows = SessionEvent::collect(&report.store);
            let formatter = EventFormatter::new().with_output_format(self.output_format);
            println!("{}", formatter.format(&rows));
        }

        if report.exported {
            println!("{} {}", "Exported:".green().bold(), output.display());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    fn parse(args: &[&str]) -> CmdOpen {
        let cmd = Command::new("test").args(CmdOpen::args());
        let matches = cmd.try_get_matches_from(args).unwrap();
        CmdOpen::from(&matches)
    }

    #[test]
    fn test_parse_defaults() {
        let parsed = parse(&["test"]);
        assert_eq!(parsed.name, None);
        assert_eq!(parsed.output, None);
        assert_eq!(parsed.output_format, OutputFormat::Table);
    }

    #[test]
    fn test_parse_all_args() {
        let parsed = parse(&[
            "test",
            "--name",
            "Ben",
            "--output",
            "/tmp/plan.pdf",
            "--output-format",
            "json",
        ]);
        assert_eq!(parsed.name, Some("Ben".to_string()));
        assert_eq!(parsed.output, Some(PathBuf::from("/tmp/plan.pdf")));
        assert_eq!(parsed.output_format, OutputFormat::Json);
    }
}
