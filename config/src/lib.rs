//! Load configuration from XDG `config.toml` and project `.env`, then apply to the process
//! environment with priority: **existing env > .env > XDG**.
//!
//! The advisor reads everything through env vars (`API_KEY`, `GEMINI_MODEL`,
//! `GEMINI_BASE_URL`, `GEMINI_TEMPERATURE`, `LOG_FILE`, `RUST_LOG`), so this crate only
//! has to decide which source fills each one.

mod dotenv_file;
mod xdg_toml;

use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("xdg config path: {0}")]
    XdgPath(String),
    #[error("read xdg config: {0}")]
    XdgRead(std::io::Error),
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    Dotenv(#[from] dotenv::Error),
}

/// Merges two sources: `.env` entries win over XDG entries.
fn merge(
    dotenv_map: HashMap<String, String>,
    xdg_map: HashMap<String, String>,
) -> HashMap<String, String> {
    let mut merged = xdg_map;
    merged.extend(dotenv_map);
    merged
}

/// Loads XDG `config.toml` and optional project `.env`, then sets environment variables
/// only for keys that are **not** already set.
///
/// * `app_name`: e.g. `"estate-advisor"`; XDG path `~/.config/<app_name>/config.toml`.
/// * `override_dir`: if `Some`, look for `.env` there instead of the current directory.
///
/// Returns the keys that were applied.
pub fn load_and_apply(
    app_name: &str,
    override_dir: Option<&Path>,
) -> Result<Vec<String>, LoadError> {
    let xdg_map = xdg_toml::load_env_map(app_name)?;
    let dotenv_map = dotenv_file::load_env_map(override_dir)?;

    let mut applied = Vec::new();
    for (key, value) in merge(dotenv_map, xdg_map) {
        if std::env::var_os(&key).is_some() {
            continue;
        }
        std::env::set_var(&key, value);
        applied.push(key);
    }
    applied.sort();
    Ok(applied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // XDG_CONFIG_HOME is process-wide; tests that point it at a temp dir run one at a time.
    static XDG_LOCK: Mutex<()> = Mutex::new(());

    fn restore_var(key: &str, prev: Option<String>) {
        match prev {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn merge_prefers_dotenv() {
        let merged = merge(
            map(&[("GEMINI_MODEL", "dotenv")]),
            map(&[("GEMINI_MODEL", "xdg"), ("LOG_FILE", "/tmp/x.log")]),
        );
        assert_eq!(merged.get("GEMINI_MODEL").map(String::as_str), Some("dotenv"));
        assert_eq!(merged.get("LOG_FILE").map(String::as_str), Some("/tmp/x.log"));
    }

    #[test]
    fn existing_env_wins() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "ADVISOR_CFG_TEST_EXISTING=from_dotenv\n").unwrap();
        env::set_var("ADVISOR_CFG_TEST_EXISTING", "from_env");

        let applied = load_and_apply("advisor-config-nonexistent-app", Some(dir.path())).unwrap();
        let val = env::var("ADVISOR_CFG_TEST_EXISTING");
        env::remove_var("ADVISOR_CFG_TEST_EXISTING");

        assert_eq!(val.as_deref(), Ok("from_env"));
        assert!(!applied.contains(&"ADVISOR_CFG_TEST_EXISTING".to_string()));
    }

    #[test]
    fn no_config_anywhere_is_ok() {
        let empty = tempfile::tempdir().unwrap();
        let r = load_and_apply("advisor-config-nonexistent-app", Some(empty.path()));
        assert!(r.is_ok());
    }

    #[test]
    fn dotenv_overrides_xdg_and_advisor_section_applies() {
        let _lock = XDG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let xdg_dir = tempfile::tempdir().unwrap();
        let app_dir = xdg_dir.path().join("estate-advisor-cfg-test");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(
            app_dir.join("config.toml"),
            "[env]\nADVISOR_CFG_TEST_PRIORITY = \"from_xdg\"\n\n[advisor]\nbase_url = \"http://xdg.test\"\n",
        )
        .unwrap();

        let dotenv_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dotenv_dir.path().join(".env"),
            "ADVISOR_CFG_TEST_PRIORITY=from_dotenv\n",
        )
        .unwrap();

        let prev_xdg = env::var("XDG_CONFIG_HOME").ok();
        let prev_base = env::var("GEMINI_BASE_URL").ok();
        env::set_var("XDG_CONFIG_HOME", xdg_dir.path());
        env::remove_var("ADVISOR_CFG_TEST_PRIORITY");
        env::remove_var("GEMINI_BASE_URL");

        let result = load_and_apply("estate-advisor-cfg-test", Some(dotenv_dir.path()));
        let priority = env::var("ADVISOR_CFG_TEST_PRIORITY").ok();
        let base = env::var("GEMINI_BASE_URL").ok();
        env::remove_var("ADVISOR_CFG_TEST_PRIORITY");
        restore_var("GEMINI_BASE_URL", prev_base);
        restore_var("XDG_CONFIG_HOME", prev_xdg);

        assert!(result.is_ok());
        assert_eq!(priority.as_deref(), Some("from_dotenv"));
        assert_eq!(base.as_deref(), Some("http://xdg.test"));
    }

    #[test]
    fn invalid_xdg_toml_fails_with_xdg_parse_error() {
        let _lock = XDG_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let xdg_dir = tempfile::tempdir().unwrap();
        let app_dir = xdg_dir.path().join("estate-advisor-bad-toml");
        std::fs::create_dir_all(&app_dir).unwrap();
        std::fs::write(app_dir.join("config.toml"), "invalid [[[\n").unwrap();

        let prev_xdg = env::var("XDG_CONFIG_HOME").ok();
        env::set_var("XDG_CONFIG_HOME", xdg_dir.path());
        let empty = tempfile::tempdir().unwrap();
        let result = load_and_apply("estate-advisor-bad-toml", Some(empty.path()));
        restore_var("XDG_CONFIG_HOME", prev_xdg);

        assert!(matches!(result, Err(LoadError::XdgParse(_))));
    }
}
