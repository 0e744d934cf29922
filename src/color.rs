use palette::{LinSrgb, Srgb};

/// Core color type used throughout the pipeline.
/// Plain 8-bit sRGB components; equality is exact per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Uppercase `RRGGBB`, no leading `#`.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Sum of absolute per-channel differences.
    pub fn l1_distance(self, other: Color) -> u32 {
        self.channels()
            .iter()
            .zip(other.channels())
            .map(|(&a, b)| u32::from(a.abs_diff(b)))
            .sum()
    }

    /// Subtract the smallest channel from all three, so the darkest channel
    /// becomes 0.
    pub fn normalize(self) -> Color {
        let min = self.r.min(self.g).min(self.b);
        Color::new(self.r - min, self.g - min, self.b - min)
    }

    /// Normalize, then add `brightness` to every channel, saturating at
    /// both ends of [0, 255].
    pub fn shape_brightness(self, brightness: i32) -> Color {
        let norm = self.normalize();
        let shift = |c: u8| (i32::from(c).saturating_add(brightness)).clamp(0, 255) as u8;
        Color::new(shift(norm.r), shift(norm.g), shift(norm.b))
    }

    /// WCAG 2.0 relative luminance, linearized through `palette`.
    ///
    /// Only used to pick readable label text on top of a swatch.
    pub fn relative_luminance(self) -> f32 {
        let linear: LinSrgb = self.to_srgb_u8().into_format::<f32>().into_linear();
        0.2126 * linear.red + 0.7152 * linear.green + 0.0722 * linear.blue
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Color = Color { r: 0, g: 0, b: 0 };
    const WHITE: Color = Color {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn hex_is_uppercase_and_padded() {
        assert_eq!(Color::new(255, 136, 0).to_hex(), "FF8800");
        assert_eq!(Color::new(1, 16, 15).to_hex(), "01100F");
        assert_eq!(BLACK.to_hex(), "000000");
    }

    #[test]
    fn display_has_hash_prefix() {
        let color = Color::new(171, 205, 239);
        assert_eq!(format!("{color}"), "#ABCDEF");
    }

    #[test]
    fn distance_to_self_is_zero() {
        let c = Color::new(12, 200, 99);
        assert_eq!(c.l1_distance(c), 0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Color::new(200, 50, 50);
        let b = Color::new(50, 200, 10);
        assert_eq!(a.l1_distance(b), b.l1_distance(a));
        assert_eq!(a.l1_distance(b), 150 + 150 + 40);
    }

    #[test]
    fn distance_black_white_is_max() {
        assert_eq!(BLACK.l1_distance(WHITE), 765);
    }

    #[test]
    fn normalize_zeroes_darkest_channel() {
        assert_eq!(Color::new(10, 20, 30).normalize(), Color::new(0, 10, 20));
        assert_eq!(Color::new(90, 90, 90).normalize(), BLACK);
    }

    #[test]
    fn zero_brightness_equals_normalize() {
        let c = Color::new(10, 20, 30);
        assert_eq!(c.shape_brightness(0), c.normalize());
        assert_eq!(c.shape_brightness(0), Color::new(0, 10, 20));
    }

    #[test]
    fn full_brightness_on_black_is_white() {
        assert_eq!(BLACK.shape_brightness(255), WHITE);
    }

    #[test]
    fn brightness_saturates_per_channel() {
        let c = Color::new(0, 200, 100);
        assert_eq!(c.shape_brightness(100), Color::new(100, 255, 200));
    }

    #[test]
    fn out_of_range_brightness_is_clamped() {
        let c = Color::new(40, 80, 120);
        assert_eq!(c.shape_brightness(1000), WHITE);
        assert_eq!(c.shape_brightness(-500), BLACK);
        assert_eq!(c.shape_brightness(i32::MAX), WHITE);
    }

    #[test]
    fn relative_luminance_bounds() {
        assert!(BLACK.relative_luminance() < 0.001);
        assert!((WHITE.relative_luminance() - 1.0).abs() < 0.001);
    }
}
