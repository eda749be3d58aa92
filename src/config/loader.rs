//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ProjkitError, ProjkitResult};
use crate::icon::PackMode;

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ProjkitResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ProjkitError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config.validate(path)?;

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

/// Load `projkit.toml` from the project root, falling back to defaults.
///
/// Environment overrides are applied in both cases. A file that exists but
/// fails to parse is an error, not a silent fallback.
pub fn load_or_default(project_root: &Path) -> ProjkitResult<(Config, Vec<ConfigWarning>)> {
    let path = project_root.join(Config::FILE_NAME);
    if path.exists() {
        let (config, warnings) = load_with_warnings(&path)?;
        tracing::debug!(path = %path.display(), "loaded project config");
        return Ok((with_env_overrides(config), warnings));
    }

    tracing::debug!(path = %path.display(), "no project config, using defaults");
    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (PROJKIT_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // PROJKIT_ICON_DIR
    if let Ok(dir) = std::env::var("PROJKIT_ICON_DIR") {
        if !dir.trim().is_empty() {
            config.icon.dir = PathBuf::from(dir);
        }
    }

    // PROJKIT_ICON_PACK
    if let Ok(pack) = std::env::var("PROJKIT_ICON_PACK") {
        match pack.trim().to_lowercase().as_str() {
            "all" => config.icon.pack = PackMode::All,
            "largest" => config.icon.pack = PackMode::Largest,
            other => tracing::warn!(value = other, "ignoring unknown PROJKIT_ICON_PACK"),
        }
    }

    // PROJKIT_BUILD_TYPE
    if let Ok(build_type) = std::env::var("PROJKIT_BUILD_TYPE") {
        if !build_type.trim().is_empty() {
            config.settings.build_type = build_type;
        }
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
        "icon",
        "dir",
        "name",
        "sizes",
        "pack",
        "rasterizers",
        "inkscape",
        "rsvg_convert",
        "package",
        "version",
        "settings",
        "build_type",
        "arch",
        "layout",
        "build",
        "generators",
        "toolchain",
        "user_presets",
        "requires",
        "visible",
        "tool_requires",
        "test_requires",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
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
