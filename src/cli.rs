use std::path::PathBuf;

use clap::Parser;

use crate::pipeline::select::{Brightness, DEFAULT_BG_BRIGHTNESS, DEFAULT_FG_BRIGHTNESS};

/// Generate an X terminal color scheme from an image file or URL.
#[derive(Parser, Debug)]
#[command(name = "colterm", version, about)]
pub struct Args {
    /// Image path or http(s) URL
    pub image: Option<String>,

    /// Input image, alternative to the positional argument
    #[arg(short, long, conflicts_with = "image")]
    pub file: Option<String>,

    /// Background brightness (0-255, -1 keeps the matched color as is)
    #[arg(long, default_value_t = DEFAULT_BG_BRIGHTNESS, allow_negative_numbers = true)]
    pub bg: i32,

    /// Foreground brightness (0-255, -1 keeps the matched color as is)
    #[arg(long, default_value_t = DEFAULT_FG_BRIGHTNESS, allow_negative_numbers = true)]
    pub fg: i32,

    /// Write the Xresources file into this directory instead of ~/.cache/colterm
    #[arg(short, long, value_name = "DIR")]
    pub export: Option<PathBuf>,

    /// Fill color tokens in this file and save it as ~/Colterm-<name>
    #[arg(short, long, value_name = "FILE")]
    pub template: Option<PathBuf>,

    /// Print colors only, without writing or applying anything
    #[arg(short = 'n', long)]
    pub palette_only: bool,

    /// Write the Xresources file but do not merge it with xrdb
    #[arg(long)]
    pub no_reload: bool,

    /// Tune background/foreground brightness interactively before writing
    #[arg(long)]
    pub tui: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Args {
    /// The image to process, from either the positional argument or `--file`.
    pub fn source(&self) -> Option<&str> {
        self.file.as_deref().or(self.image.as_deref())
    }

    pub fn brightness(&self) -> Brightness {
        Brightness::from_raw(self.bg, self.fg)
    }
}
