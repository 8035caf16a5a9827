use dirs::home_dir;
use std::{env, fs, io, path::Path, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".template_input_editor";
const CONFIG_FILE: &str = "config.json";
const TEMPLATES_DIR: &str = "templates";

/// Environment override for the application directory.
pub const HOME_ENV: &str = "TEMPLATE_INPUT_EDITOR_HOME";

/// Returns the application-specific data directory, defaulting to
/// `~/.template_input_editor`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

pub fn config_file_in(base: &Path) -> PathBuf {
    base.join(CONFIG_FILE)
}

/// Default lookup directory for user-supplied templates.
pub fn templates_dir_in(base: &Path) -> PathBuf {
    base.join(TEMPLATES_DIR)
}

pub fn ensure_dir(path: &Path) -> io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
