use crate::color::Color;
use crate::error::SchemeError;
use crate::pipeline::extract::Palette;

/// Number of slots in a scheme: background, foreground and 8 ANSI colors.
pub const SCHEME_LEN: usize = 10;

/// Reference color for every scheme slot, in slot order.
pub const TEMPLATE: [Color; SCHEME_LEN] = [
    Color::new(0, 0, 0),       // background
    Color::new(150, 150, 150), // foreground
    Color::new(0, 0, 0),       // black
    Color::new(255, 0, 0),     // red
    Color::new(0, 255, 0),     // green
    Color::new(255, 255, 0),   // yellow
    Color::new(0, 0, 150),     // blue
    Color::new(255, 0, 255),   // magenta
    Color::new(0, 255, 255),   // cyan
    Color::new(255, 255, 255), // white
];

/// Slot labels for log output, index-aligned with [`TEMPLATE`].
const SLOT_NAMES: [&str; SCHEME_LEN] = [
    "background",
    "foreground",
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
];

const BACKGROUND: usize = 0;
const FOREGROUND: usize = 1;

/// Raw brightness value that switches shaping off for a slot.
pub const BRIGHTNESS_DISABLED: i32 = -1;
pub const DEFAULT_BG_BRIGHTNESS: i32 = 20;
pub const DEFAULT_FG_BRIGHTNESS: i32 = 150;

/// Brightness shaping for the background and foreground slots.
/// `None` leaves the slot as the dedup loop picked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Brightness {
    pub background: Option<i32>,
    pub foreground: Option<i32>,
}

impl Brightness {
    /// Build from raw integers where exactly [`BRIGHTNESS_DISABLED`] means off.
    /// Any other value is kept as-is and clamped later, per channel.
    pub fn from_raw(background: i32, foreground: i32) -> Self {
        let enabled = |v: i32| (v != BRIGHTNESS_DISABLED).then_some(v);
        Self {
            background: enabled(background),
            foreground: enabled(foreground),
        }
    }

    pub fn disabled() -> Self {
        Self {
            background: None,
            foreground: None,
        }
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::from_raw(DEFAULT_BG_BRIGHTNESS, DEFAULT_FG_BRIGHTNESS)
    }
}

/// A finished scheme, index-aligned with [`TEMPLATE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub slots: [Color; SCHEME_LEN],
}

impl ColorScheme {
    pub fn background(&self) -> Color {
        self.slots[BACKGROUND]
    }

    pub fn foreground(&self) -> Color {
        self.slots[FOREGROUND]
    }

    /// ANSI color0 through color7.
    pub fn ansi(&self) -> &[Color] {
        &self.slots[2..]
    }
}

/// All palette colors ordered by L1 distance to `target`, nearest first.
///
/// The sort is stable, so equal distances keep palette order.
pub fn select_closest(palette: &[Color], target: Color) -> Vec<Color> {
    let mut ordered = palette.to_vec();
    ordered.sort_by_key(|c| c.l1_distance(target));
    ordered
}

/// Give every template slot its nearest palette color that no earlier slot
/// has taken. A slot with no unused candidate keeps `Color::default()`.
pub fn assign_slots(palette: &[Color]) -> [Color; SCHEME_LEN] {
    let mut slots = [Color::default(); SCHEME_LEN];
    let mut taken = [Color::default(); SCHEME_LEN];
    let mut n_taken = 0;

    for (slot, target) in TEMPLATE.iter().enumerate() {
        let pick = select_closest(palette, *target)
            .into_iter()
            .find(|c| !taken[..n_taken].contains(c));
        match pick {
            Some(color) => {
                slots[slot] = color;
                taken[n_taken] = color;
                n_taken += 1;
            }
            None => log::warn!("{}", SchemeError::ExhaustedCandidates { slot }),
        }
    }
    slots
}

/// Map a palette onto the template and shape background/foreground
/// brightness.
pub fn select_scheme(
    palette: &Palette,
    brightness: Brightness,
) -> Result<ColorScheme, SchemeError> {
    palette.ensure_schemable()?;

    let mut slots = assign_slots(palette.colors());
    for (slot, level) in [
        (BACKGROUND, brightness.background),
        (FOREGROUND, brightness.foreground),
    ] {
        let Some(level) = level else { continue };
        if let Some(&nearest) = select_closest(palette.colors(), TEMPLATE[slot]).first() {
            slots[slot] = nearest.shape_brightness(level);
        }
    }

    log::debug!(
        "scheme: {}",
        slots
            .iter()
            .zip(SLOT_NAMES)
            .map(|(c, name)| format!("{name}={c}"))
            .collect::<Vec<_>>()
            .join(" ")
    );
    Ok(ColorScheme { slots })
}
