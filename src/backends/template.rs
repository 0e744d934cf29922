use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::color::Color;
use crate::pipeline::select::ColorScheme;

use super::{home_dir, ThemeBackend};

/// Fills a user-supplied theme file by replacing color tokens with
/// `#RRGGBB` values.
///
/// Recognized tokens: `background`, `foreground`, `cursor` (foreground
/// color), `color0`..`color7` and `color8`..`color15`, the bright half
/// reusing the normal colors.
#[derive(Debug, Clone)]
pub struct TemplateBackend {
    template: String,
    file_name: String,
}

impl TemplateBackend {
    pub fn new(template: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            file_name: file_name.into(),
        }
    }

    /// Read a template from disk.
    pub fn from_file(path: &Path) -> Result<Self> {
        let template = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read template: {}", path.display()))?;
        let file_name = path
            .file_name()
            .with_context(|| format!("template path has no file name: {}", path.display()))?
            .to_string_lossy()
            .into_owned();
        Ok(Self::new(template, file_name))
    }

    /// Token/color pairs in substitution order. `color1x` tokens come
    /// before `color1` so the shorter token never eats their prefix.
    fn substitutions(scheme: &ColorScheme) -> Vec<(String, Color)> {
        let mut subs = vec![
            ("background".to_string(), scheme.background()),
            ("foreground".to_string(), scheme.foreground()),
            ("cursor".to_string(), scheme.foreground()),
        ];
        let ansi = scheme.ansi();
        for i in (0..16).rev() {
            subs.push((format!("color{i}"), ansi[i % ansi.len()]));
        }
        subs
    }
}

impl ThemeBackend for TemplateBackend {
    fn name(&self) -> &str {
        "template"
    }

    fn serialize(&self, scheme: &ColorScheme, _source: &str) -> String {
        Self::substitutions(scheme)
            .into_iter()
            .fold(self.template.clone(), |text, (token, color)| {
                text.replace(&token, &color.to_string())
            })
    }

    /// Writes `~/Colterm-<template file name>`.
    fn install(&self, scheme: &ColorScheme, source: &str) -> Result<PathBuf> {
        let path = home_dir()?.join(format!("Colterm-{}", self.file_name));
        self.write_to(scheme, source, &path)?;
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::select::SCHEME_LEN;

    fn test_scheme() -> ColorScheme {
        let mut slots = [Color::default(); SCHEME_LEN];
        for (i, slot) in slots.iter_mut().enumerate() {
            *slot = Color::new(i as u8, 0xab, 0xcd);
        }
        ColorScheme { slots }
    }

    #[test]
    fn replaces_named_tokens() {
        let backend = TemplateBackend::new("bg=background fg=foreground cur=cursor", "st.h");
        let out = backend.serialize(&test_scheme(), "img.png");
        assert_eq!(out, "bg=#00ABCD fg=#01ABCD cur=#01ABCD");
    }

    #[test]
    fn two_digit_tokens_are_not_clobbered() {
        let backend = TemplateBackend::new("color1 color10 color15 color7", "st.h");
        let out = backend.serialize(&test_scheme(), "img.png");
        // color1 -> slot 3, color10 -> color2 -> slot 4, color15 -> color7 -> slot 9
        assert_eq!(out, "#03ABCD #04ABCD #09ABCD #09ABCD");
    }

    #[test]
    fn bright_colors_mirror_normal_colors() {
        let scheme = test_scheme();
        for i in 0..8 {
            let backend = TemplateBackend::new(format!("color{i}|color{}", i + 8), "t");
            let out = backend.serialize(&scheme, "");
            let (normal, bright) = out.split_once('|').unwrap();
            assert_eq!(normal, bright);
            assert_eq!(normal, scheme.ansi()[i].to_string());
        }
    }

    #[test]
    fn text_without_tokens_is_unchanged() {
        let backend = TemplateBackend::new("font = monospace;\n", "t");
        assert_eq!(backend.serialize(&test_scheme(), ""), "font = monospace;\n");
    }

    #[test]
    fn from_file_reads_template_and_name() {
        let dir = std::env::temp_dir().join("colterm-test-template-read");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.h");
        std::fs::write(&path, "static const char *bg = \"background\";").unwrap();

        let backend = TemplateBackend::from_file(&path).unwrap();
        assert_eq!(backend.file_name, "config.h");
        assert_eq!(
            backend.serialize(&test_scheme(), ""),
            "static const char *bg = \"#00ABCD\";"
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn from_missing_file_fails() {
        let err = TemplateBackend::from_file(Path::new("/nonexistent/config.h")).unwrap_err();
        assert!(err.to_string().contains("failed to read template"));
    }
}
