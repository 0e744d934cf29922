use crate::color::Color;
use crate::error::SchemeError;
use crate::pipeline::select::SCHEME_LEN;

/// Number of quantization ranges per channel.
const RANGES: usize = 3;
/// 3 x 3 x 3 partition of RGB space.
pub const BUCKETS: usize = RANGES * RANGES * RANGES;

/// The representative colors of an image, one per populated bucket,
/// in ascending bucket order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// A scheme needs at least one palette color per slot.
    pub fn ensure_schemable(&self) -> Result<(), SchemeError> {
        if self.len() < SCHEME_LEN {
            return Err(SchemeError::InsufficientPalette { found: self.len() });
        }
        Ok(())
    }
}

impl From<Vec<Color>> for Palette {
    fn from(colors: Vec<Color>) -> Self {
        Self { colors }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    count: u64,
    sum: [u64; 3],
}

/// Quantize one channel into `[0,85)`, `[85,170)` or `[170,255]`.
pub fn bucket_range(c: u8) -> usize {
    match c {
        0..=84 => 0,
        85..=169 => 1,
        170..=255 => 2,
    }
}

/// Index of the 3x3x3 bucket a color falls into, in `0..27`.
pub fn bucket_index(color: Color) -> usize {
    bucket_range(color.r) * RANGES * RANGES
        + bucket_range(color.g) * RANGES
        + bucket_range(color.b)
}

/// Average the pixels of every populated bucket.
///
/// Each channel mean is truncated. The result has between 0 (empty input)
/// and 27 colors.
pub fn extract_palette(pixels: &[Color]) -> Palette {
    let mut buckets = [Bucket::default(); BUCKETS];
    for &pixel in pixels {
        let bucket = &mut buckets[bucket_index(pixel)];
        bucket.count += 1;
        for (sum, c) in bucket.sum.iter_mut().zip(pixel.channels()) {
            *sum += u64::from(c);
        }
    }

    let colors: Vec<Color> = buckets
        .iter()
        .filter(|bucket| bucket.count > 0)
        // a mean of u8 values always fits in u8
        .map(|bucket| Color::from(bucket.sum.map(|s| (s / bucket.count) as u8)))
        .collect();

    log::debug!(
        "extracted {} palette colors from {} pixels",
        colors.len(),
        pixels.len()
    );
    Palette { colors }
}
