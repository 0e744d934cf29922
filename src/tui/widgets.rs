use ratatui::prelude::*;
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::color::Color as AppColor;
use crate::pipeline::select::{Brightness, ColorScheme};

const ANSI_NAMES: [&str; 8] = ["Blk", "Red", "Grn", "Yel", "Blu", "Mag", "Cyn", "Wht"];
const SWATCH_WIDTH: usize = 9;

/// Renders a scheme as a row of background/foreground swatches followed by
/// the eight ANSI colors, each labelled with its hex value.
pub struct SchemeWidget<'a> {
    scheme: &'a ColorScheme,
    brightness: Brightness,
}

impl<'a> SchemeWidget<'a> {
    pub fn new(scheme: &'a ColorScheme, brightness: Brightness) -> Self {
        Self { scheme, brightness }
    }
}

fn to_color(c: AppColor) -> Color {
    Color::Rgb(c.r, c.g, c.b)
}

/// Choose black or white foreground for readable text on the given background.
fn contrast_fg(c: AppColor) -> Color {
    if c.relative_luminance() > 0.4 {
        Color::Black
    } else {
        Color::White
    }
}

fn swatch(label: &str, c: AppColor) -> Span<'static> {
    Span::styled(
        format!("{label:^SWATCH_WIDTH$}"),
        Style::default().bg(to_color(c)).fg(contrast_fg(c)),
    )
}

fn hex_label(c: AppColor) -> Span<'static> {
    Span::styled(
        format!("{:^SWATCH_WIDTH$}", c.to_hex()),
        Style::default().fg(Color::DarkGray),
    )
}

fn level_label(level: Option<i32>) -> String {
    match level {
        Some(v) => format!("brightness {v}"),
        None => "brightness off".to_string(),
    }
}

fn build_swatch_row<'s>(colors: impl Iterator<Item = (&'s str, AppColor)>) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for (label, c) in colors {
        spans.push(swatch(label, c));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn build_hex_row(colors: impl Iterator<Item = AppColor>) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for c in colors {
        spans.push(hex_label(c));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

impl Widget for SchemeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered().title("Scheme");
        let inner = block.inner(area);
        block.render(area, buf);

        let bg = self.scheme.background();
        let fg = self.scheme.foreground();
        let sample = Style::default().bg(to_color(bg)).fg(to_color(fg));

        let lines = vec![
            Line::from("  Background / Foreground"),
            build_swatch_row([("Bg", bg), ("Fg", fg)].into_iter()),
            build_hex_row([bg, fg].into_iter()),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(" $ echo sample text ", sample),
                Span::raw(format!(
                    "  bg {}  fg {}",
                    level_label(self.brightness.background),
                    level_label(self.brightness.foreground)
                )),
            ]),
            Line::from(""),
            Line::from("  Colors"),
            build_swatch_row(ANSI_NAMES.into_iter().zip(self.scheme.ansi().iter().copied())),
            build_hex_row(self.scheme.ansi().iter().copied()),
        ];

        Paragraph::new(lines).render(inner, buf);
    }
}
