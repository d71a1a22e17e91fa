//! Process configuration for promptsmith.
//!
//! Values come from three places, highest priority first: the existing process
//! environment, a project `.env`, then the `[env]` table of
//! `$XDG_CONFIG_HOME/<app>/config.toml`. [`load_and_apply`] merges them into the process
//! environment once at startup; readers then use [`env_string`] / [`env_parse`].
//!
//! With feature `tracing-init`, [`logging::init`] installs the tracing subscriber.

mod env_file;
#[cfg(feature = "tracing-init")]
pub mod logging;
mod xdg_toml;

use std::collections::BTreeSet;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    Dotenv(#[from] dotenv::Error),
}

/// Loads `.env` and XDG `config.toml`, then sets only the keys that are **not** already in
/// the process environment. Returns the keys that were set, sorted.
///
/// * `app_name`: e.g. `"promptsmith"`, giving `~/.config/promptsmith/config.toml`.
/// * `override_dir`: look for `.env` here instead of the current directory.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<Vec<String>, LoadError> {
    let xdg_map = xdg_toml::load_env_map(app_name)?;
    let dotenv_map = env_file::load_env_map(override_dir)?;

    let keys: BTreeSet<&String> = xdg_map.keys().chain(dotenv_map.keys()).collect();
    let mut applied = Vec::new();
    for key in keys {
        if std::env::var_os(key).is_some() {
            continue;
        }
        if let Some(v) = dotenv_map.get(key).or_else(|| xdg_map.get(key)) {
            std::env::set_var(key, v);
            applied.push(key.clone());
        }
    }
    Ok(applied)
}

/// Non-blank value of `key`, trimmed; `None` when unset or blank.
pub fn env_string(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parsed value of `key`, or `default` when unset, blank, or unparsable.
pub fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env_string(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
