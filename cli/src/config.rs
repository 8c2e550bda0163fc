// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf};

use roadmap_core::{APP_NAME, Config};

const ROADMAP_CONFIG_ENV: &str = "ROADMAP_CONFIG";

/// Resolve and parse the configuration file.
///
/// Precedence: the `--config` flag, then `ROADMAP_CONFIG`, then
/// `config.toml` in the platform config directory. A missing default file
/// is not an error since everything in the config is optional; a path
/// given explicitly must exist.
#[tracing::instrument]
pub fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(ROADMAP_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::debug!(path = %config.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        config
    };

    let content = fs::read_to_string(&path)
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?;
    let config = toml::from_str(&content)
        .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?;
    Ok(config)
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}

#[cfg(test)]
#[allow(unsafe_code)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    #[test]
    fn test_cli_flag_overrides_env_var() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, r#"name = "Flag""#).unwrap();

        let env_path = temp_dir.path().join("env_config.toml");
        fs::write(&env_path, r#"name = "Env""#).unwrap();

        {
            let _guard = env_lock().lock().unwrap();
            unsafe {
                std::env::set_var(ROADMAP_CONFIG_ENV, env_path.to_str().unwrap());
            }

            let config = parse_config(Some(config_path)).unwrap();
            assert_eq!(config.name.as_deref(), Some("Flag"));

            unsafe {
                std::env::remove_var(ROADMAP_CONFIG_ENV);
            }
        }
    }

    #[test]
    fn test_env_var_is_used_without_flag() {
        let temp_dir = TempDir::new().unwrap();
        let env_path = temp_dir.path().join("env_config.toml");
        fs::write(&env_path, r#"name = "Env""#).unwrap();

        {
            let _guard = env_lock().lock().unwrap();
            unsafe {
                std::env::set_var(ROADMAP_CONFIG_ENV, env_path.to_str().unwrap());
            }

            let config = parse_config(None).unwrap();
            assert_eq!(config.name.as_deref(), Some("Env"));

            unsafe {
                std::env::remove_var(ROADMAP_CONFIG_ENV);
            }
        }
    }

    #[test]
    fn test_explicit_missing_path_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let _guard = env_lock().lock().unwrap();
        let result = parse_config(Some(missing));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "name = [not toml").unwrap();

        let _guard = env_lock().lock().unwrap();
        let result = parse_config(Some(config_path));
        assert!(result.is_err());
    }
}
