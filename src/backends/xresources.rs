use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{bail, Context, Result};

use crate::pipeline::select::ColorScheme;

use super::{home_dir, ThemeBackend};

/// File name used when exporting into a user-chosen directory.
pub const EXPORT_FILE_NAME: &str = "ColTerm-Xresource";

/// X resource database backend (`*.key: #RRGGBB` lines).
pub struct XresourcesBackend;

impl ThemeBackend for XresourcesBackend {
    fn name(&self) -> &str {
        "Xresources"
    }

    fn serialize(&self, scheme: &ColorScheme, source: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!("! Created by colterm with {source}\n"));
        out.push_str(&format!("*.background: {}\n", scheme.background()));
        out.push_str(&format!("*.foreground: {}\n", scheme.foreground()));
        for (i, color) in scheme.ansi().iter().enumerate() {
            out.push_str(&format!("*.color{i}: {color}\n"));
        }
        out
    }

    fn install(&self, scheme: &ColorScheme, source: &str) -> Result<PathBuf> {
        let path = cache_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("failed to create cache directory: {}", dir.display()))?;
        }
        self.write_to(scheme, source, &path)?;
        Ok(path)
    }
}

impl XresourcesBackend {
    /// Write into `dir` under [`EXPORT_FILE_NAME`].
    pub fn export(&self, scheme: &ColorScheme, source: &str, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(EXPORT_FILE_NAME);
        self.write_to(scheme, source, &path)?;
        Ok(path)
    }
}

/// `~/.cache/colterm/Xresources`
pub fn cache_path() -> Result<PathBuf> {
    Ok(home_dir()?.join(".cache").join("colterm").join("Xresources"))
}

/// Merge `path` into the running X resource database.
pub fn reload(path: &Path) -> Result<()> {
    log::info!("merging {} with xrdb", path.display());
    let status = Command::new("xrdb")
        .args(["-merge", "-quiet"])
        .arg(path)
        .status()
        .context("failed to run xrdb")?;
    if !status.success() {
        bail!("xrdb exited with {status} while merging {}", path.display());
    }
    Ok(())
}
