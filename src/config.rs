use crate::player::PlayerRecord;
use anyhow::Result;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// A validation error in the configuration
#[derive(Debug, Clone)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]: {}", self.field, self.message)
    }
}

/// Session journal settings
#[derive(Debug, Clone, Deserialize, Default)]
pub struct JournalConfig {
    /// Defaults to on
    #[serde(default)]
    pub enabled: Option<bool>,
    /// Directory for `<session>.jsonl` files; defaults to .roster/sessions
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DisplayConfig {
    #[serde(default)]
    pub prompt: Option<String>,
    /// Print the full table after every successful mutation (default on)
    #[serde(default)]
    pub redraw_after_mutation: Option<bool>,
}

const DEFAULT_PROMPT: &str = "roster> ";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub journal: JournalConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Players pushed at startup, first entry at the bottom
    #[serde(default)]
    pub seed: Vec<PlayerRecord>,
}

impl Config {
    /// Load configuration from default paths
    /// Priority: local (.roster/config.local.toml) > project (.roster/config.toml) > user (~/.roster/config.toml)
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        if let Some(home) = dirs::home_dir() {
            let user_config = home.join(".roster").join("config.toml");
            if user_config.exists() {
                let user = Self::load_from(&user_config)?;
                config.merge(user);
            }
        }

        let project_config = Path::new(".roster").join("config.toml");
        if project_config.exists() {
            let project = Self::load_from(&project_config)?;
            config.merge(project);
        }

        // Should be gitignored
        let local_config = Path::new(".roster").join("config.local.toml");
        if local_config.exists() {
            let local = Self::load_from(&local_config)?;
            config.merge(local);
        }

        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes priority).
    /// Only keys the other config sets are overridden; seed players replace
    /// the seed list only when the other config names any.
    pub fn merge(&mut self, other: Config) {
        if other.journal.enabled.is_some() {
            self.journal.enabled = other.journal.enabled;
        }
        if other.journal.dir.is_some() {
            self.journal.dir = other.journal.dir;
        }

        if other.display.prompt.is_some() {
            self.display.prompt = other.display.prompt;
        }
        if other.display.redraw_after_mutation.is_some() {
            self.display.redraw_after_mutation = other.display.redraw_after_mutation;
        }

        if !other.seed.is_empty() {
            self.seed = other.seed;
        }
    }

    pub fn journal_enabled(&self) -> bool {
        self.journal.enabled.unwrap_or(true)
    }

    pub fn prompt(&self) -> &str {
        self.display.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    pub fn redraw_after_mutation(&self) -> bool {
        self.display.redraw_after_mutation.unwrap_or(true)
    }

    /// Journal directory, relative paths resolved against `root`
    pub fn journal_dir(&self, root: &Path) -> PathBuf {
        match &self.journal.dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => root.join(dir),
            None => root.join(".roster").join("sessions"),
        }
    }

    /// Validate configuration and return any errors found
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.display.prompt.as_deref() == Some("") {
            errors.push(ValidationError {
                field: "display.prompt".to_string(),
                message: "Must not be empty".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for (i, player) in self.seed.iter().enumerate() {
            if !seen.insert(player.id) {
                errors.push(ValidationError {
                    field: format!("seed[{}].id", i),
                    message: format!("Duplicate player id {}", player.id),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Role;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(config.journal_enabled());
        assert!(config.redraw_after_mutation());
        assert_eq!(config.prompt(), "roster> ");
        assert!(config.seed.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[journal]
enabled = false

[display]
prompt = "> "

[[seed]]
id = 1
name = "Shaheen Afridi"
role = "Bowler"
matches = 31
stat = 116

[[seed]]
id = 2
name = "Babar Azam"
matches_played = 55
stat_value = 4051
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(!config.journal_enabled());
        assert_eq!(config.prompt(), "> ");
        assert!(config.redraw_after_mutation());
        assert_eq!(config.seed.len(), 2);
        assert_eq!(config.seed[0].role, Role::Bowler);
        assert_eq!(config.seed[1].role, Role::Batsman);
        assert_eq!(config.seed[1].stat_value, 4051);
    }

    #[test]
    fn test_load_from_bad_role() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[[seed]]\nid = 1\nname = \"X\"\nrole = \"Umpire\"\nmatches = 1\nstat = 1\n",
        )
        .unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();
        base.journal.dir = Some(PathBuf::from("logs"));
        base.seed = vec![PlayerRecord::new(1, "A", Role::Coach, 0, 0)];

        let other: Config = toml::from_str("[journal]\nenabled = false\n").unwrap();
        base.merge(other);

        assert!(!base.journal_enabled());
        assert_eq!(base.journal.dir, Some(PathBuf::from("logs")));
        assert_eq!(base.seed.len(), 1);
    }

    #[test]
    fn test_merge_keeps_keys_a_layer_does_not_set() {
        let mut config = Config::default();
        let user: Config = toml::from_str(
            "[journal]\nenabled = false\n\n[display]\nprompt = \"cricket> \"\nredraw_after_mutation = false\n",
        )
        .unwrap();
        config.merge(user);

        let project: Config = toml::from_str(
            "[[seed]]\nid = 1\nname = \"Kagiso Rabada\"\nrole = \"Bowler\"\nmatches = 65\nstat = 311\n",
        )
        .unwrap();
        config.merge(project);

        assert!(!config.journal_enabled());
        assert_eq!(config.prompt(), "cricket> ");
        assert!(!config.redraw_after_mutation());
        assert_eq!(config.seed.len(), 1);

        let local: Config = toml::from_str("[display]\nprompt = \"> \"\n").unwrap();
        config.merge(local);
        assert_eq!(config.prompt(), "> ");
        assert!(!config.redraw_after_mutation());
        assert!(!config.journal_enabled());
        assert_eq!(config.seed.len(), 1);
    }

    #[test]
    fn test_journal_dir() {
        let root = Path::new("/work");
        let mut config = Config::default();
        assert_eq!(
            config.journal_dir(root),
            PathBuf::from("/work/.roster/sessions")
        );
        config.journal.dir = Some(PathBuf::from("logs"));
        assert_eq!(config.journal_dir(root), PathBuf::from("/work/logs"));
        config.journal.dir = Some(PathBuf::from("/var/roster"));
        assert_eq!(config.journal_dir(root), PathBuf::from("/var/roster"));
    }

    #[test]
    fn test_validate_duplicate_seed_ids() {
        let mut config = Config::default();
        config.seed = vec![
            PlayerRecord::new(1, "A", Role::Batsman, 0, 0),
            PlayerRecord::new(2, "B", Role::Batsman, 0, 0),
            PlayerRecord::new(1, "C", Role::Batsman, 0, 0),
        ];
        let errors = config.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "seed[2].id");
    }

    #[test]
    fn test_validate_empty_prompt() {
        let mut config = Config::default();
        config.display.prompt = Some(String::new());
        let errors = config.validate().unwrap_err();
        assert_eq!(errors[0].field, "display.prompt");
    }
}
