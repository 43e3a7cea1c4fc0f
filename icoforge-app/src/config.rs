use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use icoforge_core::{IconBuilder, SizeSet, WriteMode};

/// File name looked up next to the executable.
pub const CONFIG_FILE_NAME: &str = "icoforge.json";

/// Paths and options for one conversion run.
///
/// Every field is optional in the JSON file; missing ones take the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconConfig {
    #[serde(default = "default_source")]
    pub source: PathBuf,
    #[serde(default = "default_destination")]
    pub destination: PathBuf,
    /// Square edge lengths, smallest first.
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,
    /// Stage the output in a temporary file and rename it into place.
    #[serde(default)]
    pub atomic_write: bool,
}

fn default_source() -> PathBuf {
    PathBuf::from("assets").join("icon.png")
}
fn default_destination() -> PathBuf {
    PathBuf::from("assets").join("icon.ico")
}
fn default_sizes() -> Vec<u32> {
    SizeSet::STANDARD_EDGES.to_vec()
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            destination: default_destination(),
            sizes: default_sizes(),
            atomic_write: false,
        }
    }
}

impl IconConfig {
    /// Load `icoforge.json` from the executable's directory, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<IconConfig>(&json) {
                Ok(config) => {
                    debug!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    error!("Failed to parse config {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read config file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Validated size set; an invalid list is logged and replaced by the standard sizes.
    pub fn size_set(&self) -> SizeSet {
        SizeSet::new(self.sizes.clone()).unwrap_or_else(|e| {
            warn!("Ignoring configured sizes {:?}: {e}", self.sizes);
            SizeSet::standard()
        })
    }

    pub fn write_mode(&self) -> WriteMode {
        if self.atomic_write {
            WriteMode::Atomic
        } else {
            WriteMode::Direct
        }
    }

    pub fn builder(&self) -> IconBuilder {
        IconBuilder::new(self.size_set()).with_write_mode(self.write_mode())
    }
}

/// `icoforge.json` beside the running executable, or in the working
/// directory when the executable path is unavailable.
fn config_path() -> PathBuf {
    let dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    dir.join(CONFIG_FILE_NAME)
}
