pub mod widgets;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Paragraph;
use ratatui::{DefaultTerminal, Frame};

use crate::pipeline::extract::Palette;
use crate::pipeline::select::{
    select_scheme, Brightness, ColorScheme, DEFAULT_BG_BRIGHTNESS, DEFAULT_FG_BRIGHTNESS,
};

use widgets::SchemeWidget;

const STEP: i32 = 5;
const BG: usize = 0;
const FG: usize = 1;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Continue,
    Accept,
    Quit,
}

/// State for the interactive brightness tuner.
#[derive(Debug)]
pub struct TuiApp {
    pub palette: Palette,
    pub source: String,
    pub scheme: ColorScheme,
    levels: [i32; 2],
    enabled: [bool; 2],
}

impl TuiApp {
    /// The palette must already be large enough to build a scheme.
    pub fn new(palette: Palette, source: String, brightness: Brightness) -> Result<Self> {
        let scheme = select_scheme(&palette, brightness)?;
        Ok(Self {
            palette,
            source,
            scheme,
            levels: [
                brightness.background.unwrap_or(DEFAULT_BG_BRIGHTNESS),
                brightness.foreground.unwrap_or(DEFAULT_FG_BRIGHTNESS),
            ],
            enabled: [brightness.background.is_some(), brightness.foreground.is_some()],
        })
    }

    pub fn brightness(&self) -> Brightness {
        Brightness {
            background: self.enabled[BG].then_some(self.levels[BG]),
            foreground: self.enabled[FG].then_some(self.levels[FG]),
        }
    }

    fn adjust(&mut self, slot: usize, delta: i32) -> Result<()> {
        self.levels[slot] = (self.levels[slot] + delta).clamp(0, 255);
        self.enabled[slot] = true;
        self.refresh()
    }

    fn toggle(&mut self, slot: usize) -> Result<()> {
        self.enabled[slot] = !self.enabled[slot];
        self.refresh()
    }

    fn refresh(&mut self) -> Result<()> {
        self.scheme = select_scheme(&self.palette, self.brightness())?;
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Result<Action> {
        match code {
            KeyCode::Left => self.adjust(BG, -STEP)?,
            KeyCode::Right => self.adjust(BG, STEP)?,
            KeyCode::Down => self.adjust(FG, -STEP)?,
            KeyCode::Up => self.adjust(FG, STEP)?,
            KeyCode::Char('b') => self.toggle(BG)?,
            KeyCode::Char('f') => self.toggle(FG)?,
            KeyCode::Enter => return Ok(Action::Accept),
            KeyCode::Char('q') | KeyCode::Esc => return Ok(Action::Quit),
            _ => {}
        }
        Ok(Action::Continue)
    }

    fn draw(&self, frame: &mut Frame) {
        let [title, body, help] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(10),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        frame.render_widget(Paragraph::new(format!(" colterm: {}", self.source)), title);
        frame.render_widget(SchemeWidget::new(&self.scheme, self.brightness()), body);
        frame.render_widget(
            Paragraph::new(
                " ←/→ background  ↑/↓ foreground  b/f toggle  enter accept  q quit",
            ),
            help,
        );
    }
}

/// Launch the tuner. Returns the accepted brightness, or `None` if the user
/// quit.
pub fn run(mut app: TuiApp) -> Result<Option<Brightness>> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app);
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, app: &mut TuiApp) -> Result<Option<Brightness>> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match app.handle_key(key.code)? {
            Action::Continue => {}
            Action::Accept => return Ok(Some(app.brightness())),
            Action::Quit => return Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::pipeline::extract::extract_palette;

    fn test_app(brightness: Brightness) -> TuiApp {
        let levels = [40u8, 127, 212];
        let mut pixels = Vec::new();
        for r in levels {
            for g in levels {
                for b in levels {
                    pixels.push(Color::new(r, g, b));
                }
            }
        }
        TuiApp::new(extract_palette(&pixels), "cube".to_string(), brightness).unwrap()
    }

    #[test]
    fn arrows_step_brightness() {
        let mut app = test_app(Brightness::from_raw(20, 150));
        app.handle_key(KeyCode::Right).unwrap();
        app.handle_key(KeyCode::Down).unwrap();
        assert_eq!(app.brightness(), Brightness::from_raw(25, 145));
        assert_eq!(app.scheme.background(), Color::new(25, 25, 25));
    }

    #[test]
    fn levels_stay_in_range() {
        let mut app = test_app(Brightness::from_raw(0, 255));
        app.handle_key(KeyCode::Left).unwrap();
        app.handle_key(KeyCode::Up).unwrap();
        assert_eq!(app.brightness(), Brightness::from_raw(0, 255));
    }

    #[test]
    fn toggle_disables_and_restores_level() {
        let mut app = test_app(Brightness::from_raw(30, 150));
        app.handle_key(KeyCode::Char('b')).unwrap();
        assert_eq!(app.brightness().background, None);
        app.handle_key(KeyCode::Char('b')).unwrap();
        assert_eq!(app.brightness().background, Some(30));
    }

    #[test]
    fn disabled_slot_starts_from_default_level() {
        let mut app = test_app(Brightness::disabled());
        app.handle_key(KeyCode::Right).unwrap();
        assert_eq!(app.brightness().background, Some(DEFAULT_BG_BRIGHTNESS + STEP));
        assert_eq!(app.brightness().foreground, None);
    }

    #[test]
    fn enter_accepts_and_q_quits() {
        let mut app = test_app(Brightness::default());
        assert_eq!(app.handle_key(KeyCode::Enter).unwrap(), Action::Accept);
        assert_eq!(app.handle_key(KeyCode::Char('q')).unwrap(), Action::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc).unwrap(), Action::Quit);
        assert_eq!(app.handle_key(KeyCode::Tab).unwrap(), Action::Continue);
    }

    #[test]
    fn small_palette_is_rejected() {
        let palette = extract_palette(&[Color::new(1, 1, 1)]);
        assert!(TuiApp::new(palette, "solid".to_string(), Brightness::default()).is_err());
    }
}
