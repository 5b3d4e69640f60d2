use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,
    pub title: Style,

    pub status_bar: Style,
    pub status_online: Style,
    pub status_metric: Style,
    pub status_warn: Style,

    pub prompt_user: Style,
    pub prompt_path: Style,
    pub command: Style,
    pub input: Style,
    pub cursor: Style,
    pub spinner: Style,

    pub output_title: Style,
    pub output_heading: Style,
    pub output_text: Style,
    pub output_bullet: Style,
    pub field_label: Style,
    pub field_value: Style,
    pub quote: Style,
    pub quote_source: Style,
    pub error: Style,
    pub hint: Style,

    pub suggestion_label: Style,
    pub suggestion: Style,

    pub footer: Style,
    pub footer_key: Style,

    pub desktop: Style,
    pub menu_bar: Style,
    pub menu_bar_logo: Style,
    pub card: Style,
    pub card_title: Style,
    pub button: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[
            PaletteType::CatppuccinMocha,
            PaletteType::Nord,
            PaletteType::Gruvbox,
        ]
    }

    /// The palette after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        let all = Self::all();
        let idx = all.iter().position(|p| *p == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }
}

impl Default for PaletteType {
    fn default() -> Self {
        PaletteType::CatppuccinMocha
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Gruvbox => Self::from_palette(&gruvbox::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.green),
            title: Style::default()
                .bg(p.surface0)
                .fg(p.green)
                .add_modifier(Modifier::BOLD),

            status_bar: Style::default().bg(p.mantle).fg(p.subtext0),
            status_online: Style::default()
                .bg(p.mantle)
                .fg(p.green)
                .add_modifier(Modifier::BOLD),
            status_metric: Style::default().bg(p.mantle).fg(p.blue),
            status_warn: Style::default().bg(p.mantle).fg(p.yellow),

            prompt_user: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            prompt_path: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            command: Style::default().fg(p.text),
            input: Style::default().fg(p.text),
            cursor: Style::default().bg(p.green).fg(p.crust),
            spinner: Style::default().fg(p.yellow),

            output_title: Style::default().fg(p.green).add_modifier(Modifier::BOLD),
            output_heading: Style::default().fg(p.sapphire).add_modifier(Modifier::BOLD),
            output_text: Style::default().fg(p.subtext1),
            output_bullet: Style::default().fg(p.mauve),
            field_label: Style::default().fg(p.teal).add_modifier(Modifier::BOLD),
            field_value: Style::default().fg(p.text),
            quote: Style::default().fg(p.yellow).add_modifier(Modifier::ITALIC),
            quote_source: Style::default().fg(p.overlay1),
            error: Style::default().fg(p.red).add_modifier(Modifier::BOLD),
            hint: Style::default().fg(p.overlay1).add_modifier(Modifier::ITALIC),

            suggestion_label: Style::default().fg(p.overlay0),
            suggestion: Style::default()
                .bg(p.surface0)
                .fg(p.teal)
                .add_modifier(Modifier::BOLD),

            footer: Style::default().bg(p.crust).fg(p.subtext0),
            footer_key: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),

            desktop: Style::default().bg(dim_color(p.blue, 0.22)).fg(p.text),
            menu_bar: Style::default().bg(p.surface1).fg(p.text),
            menu_bar_logo: Style::default()
                .bg(p.surface1)
                .fg(p.peach)
                .add_modifier(Modifier::BOLD),
            card: Style::default().bg(p.base).fg(p.text),
            card_title: Style::default()
                .bg(p.base)
                .fg(p.mauve)
                .add_modifier(Modifier::BOLD),
            button: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
