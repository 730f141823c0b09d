//! Load `$XDG_CONFIG_HOME/<app>/config.toml` into env key-value pairs.
//!
//! Two sections are read:
//!
//! ```toml
//! [env]
//! RUST_LOG = "advisor=debug"
//!
//! [advisor]
//! api_key = "..."
//! model = "gemini-2.5-flash"
//! base_url = "https://generativelanguage.googleapis.com"
//! temperature = 0.4
//! log_file = "/tmp/estate-advisor.log"
//! ```
//!
//! `[advisor]` keys are mapped to their env names; `[env]` entries win on conflict.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Deserialize;

use crate::LoadError;

fn xdg_config_path(app_name: &str) -> Result<Option<PathBuf>, LoadError> {
    let base = cross_xdg::BaseDirs::new().map_err(|e| LoadError::XdgPath(e.to_string()))?;
    let path = base.config_home().join(app_name).join("config.toml");
    Ok(path.exists().then_some(path))
}

#[derive(Deserialize, Default)]
struct AdvisorSection {
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    temperature: Option<f32>,
    log_file: Option<String>,
}

impl AdvisorSection {
    fn into_env_pairs(self) -> Vec<(&'static str, String)> {
        let mut out = Vec::new();
        if let Some(v) = self.api_key {
            out.push(("API_KEY", v));
        }
        if let Some(v) = self.model {
            out.push(("GEMINI_MODEL", v));
        }
        if let Some(v) = self.base_url {
            out.push(("GEMINI_BASE_URL", v));
        }
        if let Some(v) = self.temperature {
            out.push(("GEMINI_TEMPERATURE", v.to_string()));
        }
        if let Some(v) = self.log_file {
            out.push(("LOG_FILE", v));
        }
        out
    }
}

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
    #[serde(default)]
    advisor: AdvisorSection,
}

impl ConfigFile {
    fn into_env_map(self) -> HashMap<String, String> {
        let mut map: HashMap<String, String> = self
            .advisor
            .into_env_pairs()
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect();
        map.extend(self.env);
        map
    }
}

/// Env key-value pairs from the XDG config file. Missing file returns an empty map.
pub fn load_env_map(app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    let Some(path) = xdg_config_path(app_name)? else {
        return Ok(HashMap::new());
    };
    let content = std::fs::read_to_string(&path).map_err(LoadError::XdgRead)?;
    let config: ConfigFile = toml::from_str(&content)?;
    Ok(config.into_env_map())
}
