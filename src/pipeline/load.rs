use std::path::Path;

use anyhow::{bail, Context, Result};
use image::DynamicImage;

use crate::color::Color;

/// Where the input image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource<'a> {
    File(&'a Path),
    Url(&'a str),
}

impl<'a> ImageSource<'a> {
    /// An existing path wins; otherwise an `http(s)://` string is a URL.
    pub fn resolve(source: &'a str) -> Result<Self> {
        let path = Path::new(source);
        if path.exists() {
            Ok(Self::File(path))
        } else if source.starts_with("http://") || source.starts_with("https://") {
            Ok(Self::Url(source))
        } else {
            bail!("file not found: {source}")
        }
    }
}

/// Load an image from a file path or URL and flatten it to 8-bit,
/// alpha-premultiplied RGB pixels.
pub fn load_and_prepare(source: &str) -> Result<Vec<Color>> {
    let img = match ImageSource::resolve(source)? {
        ImageSource::File(path) => open_file(path)?,
        ImageSource::Url(url) => fetch_url(url)?,
    };
    log::info!(
        "decoded {source}: {}x{} ({:?})",
        img.width(),
        img.height(),
        img.color()
    );
    Ok(to_pixels(&img))
}

fn open_file(path: &Path) -> Result<DynamicImage> {
    image::open(path).with_context(|| {
        format!(
            "unsupported or corrupt image: {}. Supported formats: PNG, JPEG, WebP, BMP, TIFF, GIF",
            path.display()
        )
    })
}

fn fetch_url(url: &str) -> Result<DynamicImage> {
    log::info!("fetching {url}");
    let response = reqwest::blocking::get(url)
        .with_context(|| format!("failed to fetch {url}"))?
        .error_for_status()
        .with_context(|| format!("server rejected request for {url}"))?;
    let body = response
        .bytes()
        .with_context(|| format!("failed to read response body from {url}"))?;
    log::debug!("fetched {} bytes from {url}", body.len());
    image::load_from_memory(&body)
        .with_context(|| format!("unsupported or corrupt image downloaded from {url}"))
}

const CHANNEL_MAX: u32 = u16::MAX as u32;
/// 16-bit to 8-bit scale, truncating.
const NARROW: u32 = 257;

/// Flatten to 8-bit RGB with channels premultiplied by alpha.
///
/// Every source depth is widened to 16 bits first, then narrowed by
/// truncating division, so a fully transparent pixel is black.
pub fn to_pixels(img: &DynamicImage) -> Vec<Color> {
    img.to_rgba16()
        .pixels()
        .map(|p| {
            let [r, g, b, a] = p.0.map(u32::from);
            let narrow = |c: u32| (c * a / CHANNEL_MAX / NARROW) as u8;
            Color::new(narrow(r), narrow(g), narrow(b))
        })
        .collect()
}
