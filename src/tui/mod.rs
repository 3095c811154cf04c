//! Terminal User Interface
//!
//! Mansion explorer and evidence board using ratatui

pub mod app;
pub mod widgets;

pub use app::App;

use crate::data::Tone;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
};

/// Color scheme for the game
pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub warning: Color,
    pub border: Color,
    pub header: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg: Color::Black,
            fg: Color::White,
            accent: Color::Yellow,
            warning: Color::Red,
            border: Color::DarkGray,
            header: Color::Magenta,
        }
    }
}

/// Get color for a message tone
pub fn tone_color(tone: &Tone) -> Color {
    match tone {
        Tone::Info => Color::Gray,
        Tone::Clue => Color::Cyan,
        Tone::Lead => Color::Yellow,
        Tone::Warning => Color::Red,
    }
}

/// Create a styled border block
pub fn styled_block<'a>(title: &str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border))
        .title_style(Style::default().fg(theme.accent).add_modifier(Modifier::BOLD))
}

/// ASCII art logo
pub const LOGO: &str = r#"
 ____       _            _   _             ___                  _
|  _ \  ___| |_ ___  ___| |_(_)_   _____  / _ \ _   _  ___  ___| |_
| | | |/ _ \ __/ _ \/ __| __| \ \ / / _ \| | | | | | |/ _ \/ __| __|
| |_| |  __/ ||  __/ (__| |_| |\ V /  __/| |_| | |_| |  __/\__ \ |_
|____/ \___|\__\___|\___|\__|_| \_/ \___| \__\_\\__,_|\___||___/\__|

                 The mansion keeps its secrets. Find them.
"#;

/// Smaller logo for header
pub const SMALL_LOGO: &str = " DETECTIVE QUEST ";

/// Help text
pub const HELP_TEXT: &str = r#"
╔═══════════════════════════════════════════════════════════════╗
║                       CONTROLS                                ║
╠═══════════════════════════════════════════════════════════════╣
║  ↑/↓   Navigate menus                                         ║
║  Enter Select option                                          ║
║  ?     Toggle this help                                       ║
║  :     Type a command (left, right, back, clues, analyze...)  ║
║  Esc   Close help / cancel command                            ║
╠═══════════════════════════════════════════════════════════════╣
║                      IN THE MANSION                           ║
╠═══════════════════════════════════════════════════════════════╣
║  e     Take the left path                                     ║
║  d     Take the right path                                    ║
║  s     Go back (from the hall: leave the mansion)             ║
║  p     Show collected clues                                   ║
║  a     Analyze the evidence                                   ║
║  q     Leave the mansion                                      ║
╚═══════════════════════════════════════════════════════════════╝
"#;

/// Create the main layout
pub fn create_main_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),   // Header
            Constraint::Min(10),     // Main content
            Constraint::Length(3),   // Status bar
        ])
        .split(area)
        .to_vec()
}

/// Create the game content layout (left panel + main area)
pub fn create_content_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),  // Side panel
            Constraint::Percentage(70),  // Main area
        ])
        .split(area)
        .to_vec()
}

/// Create the main area layout (narrative + clue board)
pub fn create_main_area_layout(area: Rect) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60),  // Messages
            Constraint::Percentage(40),  // Collected clues
        ])
        .split(area)
        .to_vec()
}
