use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{
    errors::{EditorError, Result},
    model::InputType,
    template::INPUT_ITEM_TEMPLATE,
    utils::paths::{app_data_dir, config_file_in, ensure_dir, templates_dir_in},
};

const TMP_SUFFIX: &str = "tmp";

/// How a submitted record is printed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Template,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Template => f.write_str("template"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "template" => Ok(OutputFormat::Template),
            "json" => Ok(OutputFormat::Json),
            other => Err(EditorError::InvalidArgument(format!(
                "unknown output format `{}` (expected template or json)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    #[serde(default = "default_template_name")]
    pub template_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
    /// Type preselected when the editor opens without a seed.
    #[serde(default = "default_initial_type")]
    pub initial_type: Option<InputType>,
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_template_name() -> String {
    INPUT_ITEM_TEMPLATE.into()
}

fn default_initial_type() -> Option<InputType> {
    Some(InputType::Boolean)
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            template_name: default_template_name(),
            template_dir: None,
            initial_type: default_initial_type(),
            output_format: OutputFormat::default(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
    templates_dir: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::from_base(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
            templates_dir: templates_dir_in(&base),
        })
    }

    pub fn load(&self) -> Result<EditorConfig> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| {
                EditorError::Config(format!("{}: {}", self.path.display(), err))
            })
        } else {
            Ok(EditorConfig::default())
        }
    }

    pub fn save(&self, config: &EditorConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory consulted for templates when the config names none.
    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.template_name, "InputItem.template");
        assert_eq!(config.initial_type, Some(InputType::Boolean));
    }

    #[test]
    fn save_then_load_preserves_values() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = EditorConfig {
            template_name: "Custom.template".into(),
            template_dir: Some(temp.path().join("tpl")),
            initial_type: Some(InputType::String),
            output_format: OutputFormat::Json,
        };
        manager.save(&config).unwrap();
        assert!(!tmp_path(manager.path()).exists());
        assert_eq!(manager.load().unwrap(), config);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{"template_name":"Other.template"}"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.template_name, "Other.template");
        assert_eq!(config.initial_type, Some(InputType::Boolean));
        assert_eq!(config.output_format, OutputFormat::Template);
    }

    #[test]
    fn corrupt_file_reports_config_error() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), "{ not json").unwrap();
        assert!(matches!(manager.load(), Err(EditorError::Config(_))));
    }

    #[test]
    fn output_format_parses_names() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
