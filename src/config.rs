//! Configuration loading from drudge.toml.
//!
//! The tree walker itself takes a fixed exclusion set and reads no config;
//! this is how the CLI builds that set. A `drudge.toml` in the target
//! directory (or the nearest ancestor carrying one) can replace or extend
//! the default exclusions. A missing or malformed file is not an error:
//! the defaults apply.
//!
//! ## Example
//!
//! ```toml
//! exclude = [".git", "node_modules"]
//! extend-exclude = ["target"]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::ExclusionSet;

/// Directory names pruned by default.
///
/// These are the two names the tool has always skipped: version control
/// metadata and RStudio project state. `extend-exclude` adds to this list;
/// `exclude` replaces it.
pub const DEFAULT_EXCLUDES: &[&str] = &[".git", ".Rproj.user"];

/// Resolved drudge configuration.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// File this config came from (for display). None means defaults.
    pub source: Option<PathBuf>,

    /// Exclusion names that replace the defaults if non-empty.
    pub exclude: Vec<String>,

    /// Additional exclusion names (extends the defaults).
    pub extend_exclude: Vec<String>,
}

/// Raw config as deserialized from TOML.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
struct RawConfig {
    exclude: Option<Vec<String>>,
    extend_exclude: Option<Vec<String>>,
}

impl Config {
    /// Load configuration for a walk rooted at `directory`.
    ///
    /// Search order:
    /// 1. drudge.toml in the directory itself
    /// 2. drudge.toml in the nearest ancestor
    /// 3. Default config if nothing found
    pub fn load(directory: &Path) -> Self {
        let candidate = directory.join("drudge.toml");
        if candidate.exists() {
            if let Some(config) = Self::load_file(&candidate) {
                return config;
            }
        }

        let mut current = directory.to_path_buf();
        while let Some(parent) = current.parent() {
            let candidate = parent.join("drudge.toml");
            if candidate.exists() {
                if let Some(config) = Self::load_file(&candidate) {
                    return config;
                }
            }
            current = parent.to_path_buf();
        }

        Self::default()
    }

    fn load_file(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        let raw: RawConfig = toml::from_str(&content).ok()?;
        Some(Self::from_raw(raw, path.to_path_buf()))
    }

    fn from_raw(raw: RawConfig, source: PathBuf) -> Self {
        Self {
            source: Some(source),
            exclude: raw.exclude.unwrap_or_default(),
            extend_exclude: raw.extend_exclude.unwrap_or_default(),
        }
    }

    /// Effective exclusion names (defaults + extend-exclude, or custom exclude).
    pub fn effective_excludes(&self) -> Vec<String> {
        if !self.exclude.is_empty() {
            // Custom exclude replaces defaults
            self.exclude.clone()
        } else {
            let mut names: Vec<String> = DEFAULT_EXCLUDES.iter().map(|s| s.to_string()).collect();
            names.extend(self.extend_exclude.clone());
            names
        }
    }

    /// Build the exclusion set for a walk, with any extra names from the
    /// command line merged in.
    pub fn exclusion_set(&self, extra: &[String]) -> ExclusionSet {
        let mut set: ExclusionSet = self.effective_excludes().into_iter().collect();
        set.extend(extra.iter().cloned());
        set
    }

    /// Format config for verbose display.
    pub fn display_summary(&self) -> String {
        let mut lines = Vec::new();

        if let Some(ref source) = self.source {
            lines.push(format!("   Config: {}", source.display()));
        } else {
            lines.push("   Config: (defaults)".to_string());
        }

        let excludes = self.effective_excludes();
        if !excludes.is_empty() {
            lines.push(format!("   Exclude: {}", excludes.join(", ")));
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_excludes() {
        let config = Config::default();
        let names = config.effective_excludes();
        assert!(names.contains(&".git".to_string()));
        assert!(names.contains(&".Rproj.user".to_string()));
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_extend_exclude_keeps_defaults() {
        let config = Config {
            extend_exclude: vec!["node_modules".to_string()],
            ..Default::default()
        };
        let names = config.effective_excludes();
        assert!(names.contains(&".git".to_string()));
        assert!(names.contains(&"node_modules".to_string()));
    }

    #[test]
    fn test_exclude_replaces_defaults() {
        let config = Config {
            exclude: vec!["target".to_string()],
            ..Default::default()
        };
        let names = config.effective_excludes();
        assert_eq!(names, vec!["target".to_string()]);
    }

    #[test]
    fn test_exclusion_set_merges_cli_extras() {
        let config = Config::default();
        let set = config.exclusion_set(&["dist".to_string()]);
        assert!(set.excludes(".git"));
        assert!(set.excludes("dist"));
        assert!(!set.excludes("src"));
    }

    #[test]
    fn test_load_from_file() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join("drudge_test_config_load");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir)?;
        fs::write(
            dir.join("drudge.toml"),
            "exclude = [\"vendor\"]\nextend-exclude = [\"ignored-anyway\"]\n",
        )?;

        let config = Config::load(&dir);
        assert!(config.source.is_some());
        // exclude replaces defaults, so extend-exclude does not apply
        assert_eq!(config.effective_excludes(), vec!["vendor".to_string()]);

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_load_kebab_case_key() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join("drudge_test_config_kebab");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("drudge.toml"), "extend-exclude = [\"build\"]\n")?;

        let config = Config::load(&dir);
        let names = config.effective_excludes();
        assert!(names.contains(&".git".to_string()));
        assert!(names.contains(&"build".to_string()));

        fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() -> anyhow::Result<()> {
        let dir = std::env::temp_dir().join("drudge_test_config_malformed");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir)?;
        fs::write(dir.join("drudge.toml"), "exclude = not-a-list")?;

        let config = Config::load(&dir);
        // Parse failure is forgiven; ancestor search may still find a real
        // drudge.toml, but effective excludes must at minimum stay sane.
        let names = config.effective_excludes();
        assert!(!names.is_empty());

        fs::remove_dir_all(&dir)?;
        Ok(())
    }
}
