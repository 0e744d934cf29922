use crossterm::style::{Color as TermColor, Stylize};

use crate::color::Color;
use crate::pipeline::select::ColorScheme;

fn to_term(c: Color) -> TermColor {
    TermColor::Rgb {
        r: c.r,
        g: c.g,
        b: c.b,
    }
}

/// Hex value printed on a truecolor swatch of itself.
fn swatch(c: Color) -> String {
    let fg = if c.relative_luminance() > 0.4 {
        TermColor::Black
    } else {
        TermColor::White
    };
    format!("{}", format!(" {} ", c.to_hex()).with(fg).on(to_term(c)))
}

/// Render the scheme as labelled truecolor swatches, one slot per line.
pub fn render(scheme: &ColorScheme) -> String {
    let mut out = String::from("   ¯\\_(•_•)_/¯   \nHere are your colors\n\n");
    out.push_str(&format!("{:<11}{}\n", "Background", swatch(scheme.background())));
    out.push_str(&format!("{:<11}{}\n", "Foreground", swatch(scheme.foreground())));
    for (i, &c) in scheme.ansi().iter().enumerate() {
        out.push_str(&format!("{:<11}{}\n", format!("Color{i}"), swatch(c)));
    }
    out
}
