// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

/// The name of the roadmap application.
pub const APP_NAME: &str = "roadmap";

/// Configuration for the roadmap application.
///
/// Everything is optional; a missing config file behaves like an empty one.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Default display name used in the document title.
    #[serde(default)]
    pub name: Option<String>,

    /// Default path the exported PDF is written to.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        if let Some(output) = &self.output {
            self.output = Some(
                expand_path(output)
                    .map_err(|e| format!("Failed to expand output path: {e}"))?,
            );
        }
        Ok(())
    }
}

/// Handle tilde (~) and home environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or_else(|| "User-specific home directory not found".into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let config: Config = toml::from_str(
            r#"
name = "Ben"
output = "plan.pdf"
"#,
        )
        .unwrap();
        assert_eq!(config.name.as_deref(), Some("Ben"));
        assert_eq!(config.output, Some(PathBuf::from("plan.pdf")));
    }

    #[test]
    fn test_deserialize_empty_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.name, None);
        assert_eq!(config.output, None);
    }

    #[test]
    fn test_expand_path_home_prefix() {
        let home = get_home_dir().unwrap();
        let result = expand_path(&PathBuf::from("~/plan.pdf")).unwrap();
        assert_eq!(result, home.join("plan.pdf"));
        assert!(result.is_absolute());
    }

    #[test]
    fn test_expand_path_keeps_relative_paths() {
        let result = expand_path(&PathBuf::from("out/plan.pdf")).unwrap();
        assert_eq!(result, PathBuf::from("out/plan.pdf"));
    }

    #[test]
    fn test_normalize_expands_output() {
        let mut config = Config {
            name: None,
            output: Some(PathBuf::from("~/plan.pdf")),
        };
        config.normalize().unwrap();
        assert!(config.output.unwrap().is_absolute());
    }
}
