//! @acp:module "Configuration"
//! @acp:summary "Project configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{QsetError, Result};
use crate::export::DEFAULT_INDENT;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".qset.config.json";

/// @acp:summary "Main qset configuration structure"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Skill taxonomy file
    #[serde(default = "default_taxonomy")]
    pub taxonomy: PathBuf,

    /// Export document settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Question set generator invocation
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            taxonomy: default_taxonomy(),
            export: ExportConfig::default(),
            generator: GeneratorConfig::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @acp:summary "Load the config at `path` if present, then apply a taxonomy override"
    ///
    /// A missing file gives the defaults; a malformed one is an error.
    pub fn resolve<P: AsRef<Path>>(path: P, taxonomy: Option<PathBuf>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            Self::load(path)?
        } else {
            Self::default()
        };
        if let Some(taxonomy) = taxonomy {
            config.taxonomy = taxonomy;
        }
        Ok(config)
    }

    /// Where `submit` writes the export document
    pub fn document_path(&self) -> PathBuf {
        self.generator.working_dir.join(&self.export.document_path)
    }

    fn validate(&self) -> Result<()> {
        if self.generator.program.trim().is_empty() {
            return Err(QsetError::Config("generator.program must not be empty".to_string()));
        }
        if self.export.indent > 16 {
            return Err(QsetError::Config(format!(
                "export.indent must be at most 16 (got {})",
                self.export.indent
            )));
        }
        Ok(())
    }
}

fn default_taxonomy() -> PathBuf {
    PathBuf::from("skill-tree.json")
}

/// Export document settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportConfig {
    /// Spaces per indentation level
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Document file name, relative to the generator's working directory
    #[serde(default = "default_document_path")]
    pub document_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            indent: default_indent(),
            document_path: default_document_path(),
        }
    }
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

fn default_document_path() -> PathBuf {
    PathBuf::from("input.json")
}

/// Generator process invocation; the document path is appended to `args`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,

    #[serde(default = "default_working_dir")]
    pub working_dir: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
            working_dir: default_working_dir(),
        }
    }
}

fn default_program() -> String {
    "uv".to_string()
}

fn default_args() -> Vec<String> {
    vec!["run".to_string(), "main.py".to_string(), "qset".to_string()]
}

fn default_working_dir() -> PathBuf {
    PathBuf::from(".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"export": {"indent": 2}}"#).unwrap();
        assert_eq!(config.taxonomy, PathBuf::from("skill-tree.json"));
        assert_eq!(config.export.indent, 2);
        assert_eq!(config.export.document_path, PathBuf::from("input.json"));
        assert_eq!(config.generator, GeneratorConfig::default());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let mut config = Config::default();
        config.generator.working_dir = PathBuf::from("..");
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.document_path(), PathBuf::from("../input.json"));
    }

    #[test]
    fn test_resolve_missing_file_uses_defaults_and_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let config = Config::resolve(&path, None).unwrap();
        assert_eq!(config, Config::default());

        let config = Config::resolve(&path, Some(PathBuf::from("other.json"))).unwrap();
        assert_eq!(config.taxonomy, PathBuf::from("other.json"));
    }

    #[test]
    fn test_resolve_override_wins_over_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, r#"{"taxonomy": "from-file.json", "export": {"indent": 2}}"#).unwrap();

        let config = Config::resolve(&path, Some(PathBuf::from("cli.json"))).unwrap();
        assert_eq!(config.taxonomy, PathBuf::from("cli.json"));
        assert_eq!(config.export.indent, 2);
    }

    #[test]
    fn test_resolve_malformed_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::resolve(&path, None), Err(QsetError::Json(_))));
    }

    #[test]
    fn test_rejects_empty_program() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"generator": {"program": " "}}"#).unwrap();
        assert!(matches!(Config::load(&path), Err(QsetError::Config(_))));
    }
}
