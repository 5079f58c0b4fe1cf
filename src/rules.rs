use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::robots::RobotsRule;

// Include default rules at compile time
const DEFAULT_RULES_BYTES: &[u8] = include_bytes!("../default_robots_rules.json");

pub const DEFAULT_RULES_FILE: &str = "robots_rules.json";

/// A robots.txt rule set as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RobotsConfig {
    #[serde(default)]
    pub rules: Vec<RobotsRule>,
    #[serde(default)]
    pub sitemap: Option<String>,
}

pub fn parse_robots_config(content: &str) -> Result<RobotsConfig> {
    serde_json::from_str(content).context("Invalid robots rule file")
}

pub fn embedded_robots_config() -> Result<RobotsConfig> {
    let default_content = std::str::from_utf8(DEFAULT_RULES_BYTES)
        .context("Failed to decode embedded default rules")?;
    parse_robots_config(default_content)
}

/// Loads rules from `rule_file_path`, else `robots_rules.json` in the working
/// directory, else the embedded defaults.
///
/// A missing or broken explicit file is an error. A broken default file is
/// only warned about.
pub fn load_robots_config(rule_file_path: Option<&Path>) -> Result<RobotsConfig> {
    load_robots_config_from(rule_file_path, Path::new(DEFAULT_RULES_FILE))
}

pub fn load_robots_config_from(
    rule_file_path: Option<&Path>,
    default_file: &Path,
) -> Result<RobotsConfig> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "rule_loading",
        "Starting robots rule loading"
    );

    let config = if let Some(path) = rule_file_path {
        info!(action = "load", component = "rule_file", file_path = ?path, "Loading rules from specified file");
        if !path.exists() {
            anyhow::bail!("Rule file not found: {:?}", path);
        }

        let content = fs::read_to_string(path)?;
        let config = parse_robots_config(&content)
            .with_context(|| format!("Failed to parse rule file {:?}", path))?;
        info!(action = "loaded", component = "rule_file", rule_count = config.rules.len(), file_path = ?path, "Loaded rules from file");
        config
    } else {
        let mut loaded = None;

        if default_file.exists() {
            info!(action = "load", component = "default_rule_file", file_path = ?default_file, "Loading rules from default file");
            let content = fs::read_to_string(default_file)?;
            match parse_robots_config(&content) {
                Ok(config) => {
                    info!(action = "loaded", component = "default_rule_file", rule_count = config.rules.len(), file_path = ?default_file, "Loaded rules from default file");
                    loaded = Some(config);
                }
                Err(e) => {
                    warn!(action = "parse", component = "default_rule_file", file_path = ?default_file, error = %e, "Invalid rule file, ignoring")
                }
            }
        }

        match loaded {
            Some(config) => config,
            None => {
                info!(
                    action = "load",
                    component = "embedded_rules",
                    "Using embedded default rules"
                );
                embedded_robots_config()?
            }
        }
    };

    let load_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "rule_loading",
        rule_count = config.rules.len(),
        duration_ms = load_time.as_millis(),
        "Robots rules ready"
    );
    Ok(config)
}

pub fn init_default_rules() -> Result<()> {
    init_default_rules_at(Path::new(DEFAULT_RULES_FILE))
}

pub fn init_default_rules_at(default_file: &Path) -> Result<()> {
    if default_file.exists() {
        anyhow::bail!(
            "{} already exists. Remove it first if you want to reinitialize.",
            default_file.display()
        );
    }

    let default_content = std::str::from_utf8(DEFAULT_RULES_BYTES)
        .context("Failed to decode embedded default rules")?;

    fs::write(default_file, default_content)?;
    info!(action = "init", component = "rule_file", file_path = ?default_file, "Wrote default robots rules");

    Ok(())
}
