pub mod template;
pub mod xresources;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::pipeline::select::ColorScheme;

/// A target format a color scheme can be rendered to and installed into.
pub trait ThemeBackend {
    /// Human readable name, used in log messages.
    fn name(&self) -> &str;

    /// Render the scheme. `source` names the image it was generated from.
    fn serialize(&self, scheme: &ColorScheme, source: &str) -> String;

    /// Write to the backend's default location and return that path.
    fn install(&self, scheme: &ColorScheme, source: &str) -> Result<PathBuf>;

    /// Write to an arbitrary path.
    fn write_to(&self, scheme: &ColorScheme, source: &str, path: &Path) -> Result<()> {
        let content = self.serialize(scheme, source);
        std::fs::write(path, content).with_context(|| {
            format!("failed to write {} theme to {}", self.name(), path.display())
        })?;
        log::info!("wrote {} theme to {}", self.name(), path.display());
        Ok(())
    }
}

/// The user's home directory, from `$HOME`.
pub(crate) fn home_dir() -> Result<PathBuf> {
    let home = std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .context("HOME is not set, cannot locate the install directory")?;
    Ok(PathBuf::from(home))
}
