//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{SwatchError, SwatchResult};

use super::types::{Config, LogFormat};

/// File name looked up in the project directory
pub const PROJECT_CONFIG_FILE: &str = "swatch.toml";

/// Non-fatal configuration warning surfaced at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SwatchResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SwatchError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => SwatchError::Io(e),
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SwatchError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `<project_root>/swatch.toml` when present, else the user config, else
/// defaults. Environment overrides apply last.
///
/// The project config is strict: a malformed file is an error. The user
/// config is lenient and falls back to defaults.
pub fn load_layered(project_root: &Path) -> SwatchResult<(Config, Vec<ConfigWarning>)> {
    let project_config = project_root.join(PROJECT_CONFIG_FILE);
    if project_config.exists() {
        let (config, warnings) = load_with_warnings(&project_config)?;
        return Ok((with_env_overrides(config), warnings));
    }

    Ok((load_user_or_default(), Vec::new()))
}

/// Load the user config, or defaults
pub fn load_user_or_default() -> Config {
    if let Some(user_config_dir) = dirs::config_dir() {
        let user_config = user_config_dir.join("swatch/config.toml");
        if user_config.exists() {
            if let Ok(config) = Config::load(&user_config) {
                return with_env_overrides(config);
            }
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (SWATCH_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply `SWATCH_*` overrides read through `lookup`.
pub fn with_overrides_from(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // SWATCH_BIND
    if let Some(bind) = lookup("SWATCH_BIND") {
        config.server.bind = bind;
    }

    // SWATCH_SNAPSHOT (empty disables the snapshot)
    if let Some(snapshot) = lookup("SWATCH_SNAPSHOT") {
        config.store.snapshot = if snapshot.is_empty() {
            None
        } else {
            Some(PathBuf::from(snapshot))
        };
    }

    // SWATCH_CACHE_MAX_AGE
    if let Some(max_age) = lookup("SWATCH_CACHE_MAX_AGE") {
        if let Ok(secs) = max_age.trim().parse() {
            config.cache.max_age_secs = secs;
        }
    }

    // SWATCH_LOG
    if let Some(filter) = lookup("SWATCH_LOG") {
        config.logging.filter = filter;
    }

    // SWATCH_LOG_FORMAT
    if let Some(format) = lookup("SWATCH_LOG_FORMAT") {
        config.logging.format = match format.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Text,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "server",
        "bind",
        "store",
        "snapshot",
        "cache",
        "max_age_secs",
        "logging",
        "filter",
        "format",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
