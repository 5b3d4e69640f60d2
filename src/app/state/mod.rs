use super::keymap::KeyMap;
use crate::components::terminal_view::HistoryCache;
use crate::content::profile::Quote;
use crate::content::{Portfolio, Prompt};
use crate::domain::chime::Chime;
use crate::domain::console::Console;
use crate::domain::latency::LatencySource;
use crate::theme::{PaletteType, Theme};
use std::sync::Arc;

pub mod input;
pub mod status;

// Re-exports
pub use input::{AppTextArea, InputState};
pub use status::SystemStatus;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum View {
    Terminal, // The shell
    Desktop,  // The "mac" desktop with the verse card
}

/// Who the shell belongs to, as shown outside the history pane.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerCard {
    pub name: String,
    pub role: String,
    pub location: String,
    pub verse_of_day: Option<Quote>,
}

pub struct AppState<'a> {
    // --- Lifecycle ---
    pub should_quit: bool,
    pub view: View,

    // --- Shell ---
    pub console: Console,
    pub input: InputState<'a>,
    pub prompt: Prompt,

    // --- Output pane ---
    /// Lines scrolled up from the bottom of the history. Clamped on draw.
    pub scroll: u16,
    pub history_cache: HistoryCache,

    // --- Desktop ---
    pub owner: OwnerCard,
    pub show_verse: bool,

    // --- Decoration ---
    pub status: SystemStatus,
    pub frame_count: u64,
    pub visits: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: PaletteType,
    pub theme: Theme,
}

impl AppState<'_> {
    pub fn new(
        portfolio: Portfolio,
        latency: Box<dyn LatencySource>,
        chime: Box<dyn Chime>,
    ) -> Self {
        let Portfolio {
            registry,
            welcome,
            prompt,
            owner,
            role,
            location,
            verse_of_day,
        } = portfolio;

        Self {
            should_quit: false,
            view: View::Terminal,
            console: Console::new(Arc::new(registry), welcome, latency, chime),
            input: InputState::new(),
            prompt,
            scroll: 0,
            history_cache: HistoryCache::default(),
            owner: OwnerCard {
                name: owner,
                role,
                location,
                verse_of_day,
            },
            show_verse: true,
            status: SystemStatus::new(),
            frame_count: 0,
            visits: 0,
            keymap: Arc::new(KeyMap::default()),
            palette_type: PaletteType::default(),
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub fn with_palette(mut self, palette_type: PaletteType) -> Self {
        self.set_palette(palette_type);
        self
    }

    #[must_use]
    pub fn with_view(mut self, view: View) -> Self {
        self.view = view;
        self
    }

    #[must_use]
    pub fn with_visits(mut self, visits: u64) -> Self {
        self.visits = visits;
        self
    }

    pub fn set_palette(&mut self, palette_type: PaletteType) {
        self.palette_type = palette_type;
        self.theme = Theme::from_palette_type(palette_type);
    }
}

#[cfg(test)]
impl AppState<'static> {
    /// Built-in profile, a fixed short delay and no bell.
    pub fn for_tests() -> Self {
        use crate::content::{assemble, profile::Profile};
        use crate::domain::chime::SilentChime;
        use crate::domain::latency::FixedLatency;
        use std::time::Duration;

        let today = chrono::NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        let portfolio = assemble(&Profile::builtin().unwrap(), today).unwrap();
        Self::new(
            portfolio,
            Box::new(FixedLatency(Duration::from_millis(5))),
            Box::new(SilentChime),
        )
    }
}
