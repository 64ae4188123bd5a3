use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Error;
use crate::tree::Layout;

/// Name of the project config file, looked up in the project root.
pub const CONFIG_FILE: &str = ".bookref.toml";

/// Project configuration loaded from `.bookref.toml`.
/// Every key is optional; missing keys take the conventional book layout.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Typesetting settings for `compile`.
    pub compile: CompileSettings,
    /// Names that are never standalone targets.
    pub exclude: Vec<String>,
    /// Document-tree root, relative to the project root.
    pub latex_dir: PathBuf,
    /// Top-level area directory names.
    pub layout: Layout,
}

/// External tools and output location for `compile`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompileSettings {
    /// Bibliography processor run by `compile --bib`.
    pub bib_tool: String,
    /// Output directory, relative to the latex directory.
    pub build_dir: PathBuf,
    /// Target compiled when none is given.
    pub default_target: String,
    /// TeX engine.
    pub engine: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            compile: CompileSettings::default(),
            exclude: vec!["localsettings".to_string()],
            latex_dir: PathBuf::from("latex"),
            layout: Layout::default(),
        }
    }
}

impl Default for CompileSettings {
    fn default() -> Self {
        Self {
            bib_tool: "biber".to_string(),
            build_dir: PathBuf::from("build"),
            default_target: "main".to_string(),
            engine: "pdflatex".to_string(),
        }
    }
}

impl Config {
    /// Load config from `.bookref.toml` in the given root directory.
    /// Returns defaults if the file doesn't exist. Returns an error if the
    /// file exists but is malformed; a config the user wrote is never
    /// silently replaced by defaults.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&path) {
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            },
            Err(e) => return Err(Error::Io(e)),
            Ok(c) => c,
        };

        let config: Self = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        return Ok(config);
    }

    /// The document-tree root under `root`.
    pub fn latex_root(&self, root: &Path) -> PathBuf {
        return root.join(&self.latex_dir);
    }
}
