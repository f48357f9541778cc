//! Application state and the reducer driving it.
//!
//! The event loop feeds [`Msg`] values in and executes the [`Effect`] values
//! that come back; nothing in here spawns tasks, touches the network, or
//! draws. That keeps every state transition testable without a terminal or a
//! runtime.

use std::time::Duration;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tracing::debug;

use stratus_core::{ConditionIcon, CurrentConditions, FetchError, SuggestionState, WeatherSnapshot};

use crate::ui;

/// Grace period between the search box losing focus and the suggestion panel
/// hiding, so a click landing on a suggestion still gets observed.
pub const BLUR_HIDE_DELAY: Duration = Duration::from_millis(200);

/// Which interaction zone owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Panel,
}

/// What the main area shows. One value, so loading-and-error cannot coexist.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Loading,
    Error(String),
    Ready,
}

/// Inputs to the reducer: terminal events plus completions reported back by
/// spawned tasks.
#[derive(Debug)]
pub enum Msg {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    FetchDone {
        seq: u64,
        result: Result<CurrentConditions, FetchError>,
    },
    HideSuggestions {
        generation: u64,
    },
}

/// Work the runtime performs on the reducer's behalf.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Fetch { seq: u64, city: String },
    ScheduleHide { generation: u64 },
}

pub struct App {
    pub input: String,
    pub focus: Focus,
    pub suggestions: SuggestionState,
    pub phase: Phase,
    /// Last good display; survives errors (hidden behind the banner, never
    /// cleared or partially overwritten).
    pub snapshot: WeatherSnapshot,
    pub icon: ConditionIcon,
    pub terminal_area: Rect,
    pub should_quit: bool,
    /// Sequence of the latest dispatched fetch; older completions are stale.
    fetch_seq: u64,
    /// Generation of the latest blur timer; refocusing bumps it, so a stale
    /// timer firing afterwards is a no-op.
    hide_generation: u64,
}

impl App {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            focus: Focus::Input,
            suggestions: SuggestionState::default(),
            phase: Phase::Ready,
            snapshot: WeatherSnapshot::placeholder(),
            icon: ConditionIcon::default(),
            terminal_area: Rect::new(0, 0, 80, 24),
            should_quit: false,
            fetch_seq: 0,
            hide_generation: 0,
        }
    }

    /// Dispatch a weather lookup. Blank input short-circuits into an error
    /// without producing a fetch effect.
    pub fn search(&mut self, city: String) -> Option<Effect> {
        if city.trim().is_empty() {
            self.phase = Phase::Error(FetchError::EmptyQuery.to_string());
            return None;
        }

        self.fetch_seq += 1;
        self.phase = Phase::Loading;
        debug!(seq = self.fetch_seq, city = %city, "dispatching fetch");
        Some(Effect::Fetch {
            seq: self.fetch_seq,
            city,
        })
    }

    pub fn update(&mut self, msg: Msg) -> Option<Effect> {
        match msg {
            Msg::Key(key) => self.on_key(key),
            Msg::Mouse(mouse) => self.on_mouse(mouse),
            Msg::Resize(width, height) => {
                self.terminal_area = Rect::new(0, 0, width, height);
                None
            }
            Msg::FetchDone { seq, result } => self.on_fetch_done(seq, result),
            Msg::HideSuggestions { generation } => {
                if generation == self.hide_generation {
                    self.suggestions.hide();
                }
                None
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Option<Effect> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return None;
        }

        match self.focus {
            Focus::Input => self.on_input_key(key),
            Focus::Panel => self.on_panel_key(key),
        }
    }

    fn on_input_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Char(c) => {
                self.input.push(c);
                self.suggestions.refilter(&self.input);
                None
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.suggestions.refilter(&self.input);
                None
            }
            KeyCode::Enter => {
                if let Some(city) = self.suggestions.highlighted_city() {
                    self.commit_suggestion(city.name)
                } else {
                    let query = self.input.clone();
                    self.suggestions.hide();
                    self.search(query)
                }
            }
            KeyCode::Down => {
                self.suggestions.highlight_next();
                None
            }
            KeyCode::Up => {
                self.suggestions.highlight_prev();
                None
            }
            KeyCode::Esc => {
                if self.suggestions.is_visible() {
                    self.suggestions.hide();
                } else {
                    self.should_quit = true;
                }
                None
            }
            KeyCode::Tab => self.blur(),
            _ => None,
        }
    }

    fn on_panel_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match key.code {
            KeyCode::Tab | KeyCode::Char('i') => {
                self.focus_input();
                None
            }
            KeyCode::Esc | KeyCode::Char('q') => {
                self.should_quit = true;
                None
            }
            _ => None,
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) -> Option<Effect> {
        let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
            return None;
        };

        let zones = ui::zones(self.terminal_area, self);
        let pos = Position::new(mouse.column, mouse.row);

        if zones.search_button.contains(pos) {
            let query = self.input.clone();
            self.suggestions.hide();
            return self.search(query);
        }

        if zones.input.contains(pos) {
            if self.focus != Focus::Input {
                self.focus_input();
            }
            return None;
        }

        if self.suggestions.is_visible()
            && zones.suggestions.contains(pos)
            && mouse.row > zones.suggestions.y
        {
            // First row inside the border is match index 0.
            let index = (mouse.row - zones.suggestions.y - 1) as usize;
            if let Some(city) = self.suggestions.matches().get(index).copied() {
                return self.commit_suggestion(city.name);
            }
            return None;
        }

        // A click anywhere else is the terminal's blur.
        if self.focus == Focus::Input {
            return self.blur();
        }
        None
    }

    fn on_fetch_done(
        &mut self,
        seq: u64,
        result: Result<CurrentConditions, FetchError>,
    ) -> Option<Effect> {
        if seq != self.fetch_seq {
            debug!(seq, latest = self.fetch_seq, "dropping stale fetch result");
            return None;
        }

        match result {
            Ok(conditions) => {
                // Snapshot and icon swap together; the panel never shows a
                // mix of old and new fields.
                self.snapshot = conditions.snapshot;
                self.icon = conditions.icon;
                self.phase = Phase::Ready;
                self.input.clear();
                self.suggestions.clear();
            }
            Err(err) => {
                self.phase = Phase::Error(err.to_string());
            }
        }
        None
    }

    fn commit_suggestion(&mut self, name: &str) -> Option<Effect> {
        self.input = name.to_string();
        self.suggestions.hide();
        self.search(name.to_string())
    }

    fn blur(&mut self) -> Option<Effect> {
        self.focus = Focus::Panel;
        self.hide_generation += 1;
        Some(Effect::ScheduleHide {
            generation: self.hide_generation,
        })
    }

    fn focus_input(&mut self) {
        self.focus = Focus::Input;
        // Invalidate any pending delayed hide.
        self.hide_generation += 1;
        if !self.input.is_empty() {
            self.suggestions.reshow();
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
