//! Main application state and rendering

use crate::config::QuestConfig;
use crate::data::Tone;
use crate::game::{Game, GameAction, GameMessage};
use crate::tui::widgets::{DramaticBox, ProgressBar};
use crate::tui::{create_content_layout, create_main_area_layout, create_main_layout};
use crate::tui::{styled_block, tone_color, Theme, HELP_TEXT, LOGO, SMALL_LOGO};
use crate::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use std::time::Duration;

const MENU_ITEMS: [&str; 3] = ["  ▶ New Investigation", "  ▶ Help", "  ▶ Quit"];

/// Application state
pub struct App {
    pub game: Game,
    pub config: QuestConfig,
    pub theme: Theme,
    pub running: bool,
    pub show_help: bool,
    pub current_screen: Screen,
    pub menu_state: ListState,
    pub input_buffer: String,
    pub input_mode: InputMode,
    pub command_history: Vec<String>,
}

/// Current screen being displayed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    MainMenu,
    Playing,
    CaseClosed,
}

/// Input mode for command prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,  // Typing a command
}

impl App {
    pub fn new(config: QuestConfig) -> Result<Self> {
        let mut menu_state = ListState::default();
        menu_state.select(Some(0));

        Ok(Self {
            game: Game::from_config(&config)?,
            config,
            theme: Theme::default(),
            running: true,
            show_help: false,
            current_screen: Screen::MainMenu,
            menu_state,
            input_buffer: String::new(),
            input_mode: InputMode::Normal,
            command_history: Vec::new(),
        })
    }

    /// Poll the terminal for a key and handle it
    pub fn handle_input(&mut self) -> Result<bool> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key.code)?;
                }
            }
        }
        Ok(self.running)
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode) -> Result<()> {
        // Handle command input mode separately
        if self.input_mode == InputMode::Command {
            match code {
                KeyCode::Enter => {
                    self.execute_command()?;
                    self.input_mode = InputMode::Normal;
                }
                KeyCode::Esc => {
                    self.input_buffer.clear();
                    self.input_mode = InputMode::Normal;
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Char(c) => {
                    self.input_buffer.push(c);
                }
                _ => {}
            }
            return Ok(());
        }

        match code {
            KeyCode::Char('?') => self.show_help = !self.show_help,
            KeyCode::Esc if self.show_help => self.show_help = false,
            KeyCode::Up => self.navigate_up(),
            KeyCode::Down => self.navigate_down(),
            KeyCode::Enter => self.handle_enter()?,
            KeyCode::Char('q') if self.current_screen == Screen::MainMenu => {
                self.running = false;
            }
            KeyCode::Char(':') | KeyCode::Char('/')
                if self.current_screen != Screen::MainMenu =>
            {
                self.input_mode = InputMode::Command;
                self.input_buffer.clear();
            }
            KeyCode::Char(c) if self.current_screen != Screen::MainMenu => {
                if let Some(action) = GameAction::parse(&c.to_string()) {
                    self.perform(action)?;
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn perform(&mut self, action: GameAction) -> Result<()> {
        self.game.execute_action(action)?;
        if self.game.is_over() && self.current_screen == Screen::Playing {
            tracing::info!(verdict = ?self.game.verdict().map(|s| &s.name), "case closed");
            self.current_screen = Screen::CaseClosed;
        }
        Ok(())
    }

    fn execute_command(&mut self) -> Result<()> {
        let cmd = self.input_buffer.trim().to_lowercase();
        self.input_buffer.clear();
        if cmd.is_empty() {
            return Ok(());
        }
        self.command_history.push(cmd.clone());

        match cmd.as_str() {
            "help" | "?" => self.show_help = true,
            "clear" | "cls" => self.game.message_log.clear(),
            "status" => {
                let status = self.game.check_status();
                self.system_message(Tone::Info, &status);
            }
            "quit" => self.running = false,
            other => match GameAction::parse(other) {
                Some(action) => self.perform(action)?,
                None => self.system_message(
                    Tone::Warning,
                    &format!("Unknown command: {}. Type help for the list.", other),
                ),
            },
        }
        Ok(())
    }

    fn system_message(&mut self, tone: Tone, text: &str) {
        self.game.message_log.push(GameMessage::new(tone, text));
    }

    fn navigate_up(&mut self) {
        let i = self.menu_state.selected().unwrap_or(0);
        if i > 0 {
            self.menu_state.select(Some(i - 1));
        }
    }

    fn navigate_down(&mut self) {
        let i = self.menu_state.selected().unwrap_or(0);
        if i + 1 < MENU_ITEMS.len() {
            self.menu_state.select(Some(i + 1));
        }
    }

    fn handle_enter(&mut self) -> Result<()> {
        match self.current_screen {
            Screen::MainMenu => match self.menu_state.selected() {
                Some(0) => self.start_new_game()?,
                Some(1) => self.show_help = true,
                Some(2) => self.running = false,
                _ => {}
            },
            Screen::CaseClosed => {
                self.current_screen = Screen::MainMenu;
                self.menu_state.select(Some(0));
            }
            Screen::Playing => {}
        }
        Ok(())
    }

    fn start_new_game(&mut self) -> Result<()> {
        self.game = Game::from_config(&self.config)?;
        self.current_screen = Screen::Playing;
        self.input_mode = InputMode::Normal;
        tracing::info!(player = %self.game.player_name, "new investigation");
        Ok(())
    }

    pub fn render(&mut self, frame: &mut Frame) {
        match self.current_screen {
            Screen::MainMenu => self.render_main_menu(frame),
            Screen::Playing => self.render_game(frame),
            Screen::CaseClosed => {
                self.render_game(frame);
                self.render_case_closed(frame);
            }
        }

        // Overlay help if showing
        if self.show_help {
            self.render_help_overlay(frame);
        }
    }

    fn render_main_menu(&mut self, frame: &mut Frame) {
        let area = frame.area();

        frame.render_widget(Clear, area);
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.bg)),
            area,
        );

        let menu_height: u16 = 5;
        let logo_height = LOGO.lines().count() as u16;
        let total_height = logo_height + menu_height + 2;
        let start_y = area.height.saturating_sub(total_height) / 2;

        let logo_area = Rect::new(
            area.x,
            start_y,
            area.width,
            logo_height.min(area.height.saturating_sub(start_y)),
        );
        let logo = Paragraph::new(LOGO)
            .style(Style::default().fg(self.theme.accent))
            .alignment(Alignment::Center);
        frame.render_widget(logo, logo_area);

        let menu_y = (start_y + logo_height + 2).min(area.height.saturating_sub(menu_height));
        let menu_area = Rect::new(
            area.width / 4,
            menu_y,
            area.width / 2,
            menu_height.min(area.height.saturating_sub(menu_y)),
        );

        let menu_items: Vec<ListItem> = MENU_ITEMS.iter().map(|item| ListItem::new(*item)).collect();
        let menu = List::new(menu_items)
            .block(styled_block("Main Menu", &self.theme))
            .highlight_style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED),
            )
            .highlight_symbol("→ ");
        frame.render_stateful_widget(menu, menu_area, &mut self.menu_state);

        if area.height > 1 {
            let footer = Paragraph::new("Press ? for help | q to quit")
                .style(Style::default().fg(self.theme.border))
                .alignment(Alignment::Center);
            frame.render_widget(
                footer,
                Rect::new(0, area.height.saturating_sub(1), area.width, 1),
            );
        }
    }

    fn render_game(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = create_main_layout(area);

        self.render_header(frame, layout[0]);

        let content_layout = create_content_layout(layout[1]);
        self.render_side_panel(frame, content_layout[0]);

        let main_layout = create_main_area_layout(content_layout[1]);
        self.render_messages(frame, main_layout[0]);
        self.render_clue_board(frame, main_layout[1]);

        self.render_status_bar(frame, layout[2]);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header_layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(20),
                Constraint::Min(20),
                Constraint::Length(24),
            ])
            .split(area);

        let bordered = || {
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.border))
        };

        let logo = Paragraph::new(SMALL_LOGO)
            .style(Style::default().fg(self.theme.accent).add_modifier(Modifier::BOLD))
            .block(bordered());
        frame.render_widget(logo, header_layout[0]);

        let location = self
            .game
            .current_room()
            .map(|room| room.name.clone())
            .unwrap_or_else(|| "Outside the mansion".to_string());
        let title = Paragraph::new(location)
            .style(Style::default().fg(self.theme.header))
            .alignment(Alignment::Center)
            .block(bordered());
        frame.render_widget(title, header_layout[1]);

        let player = Paragraph::new(format!(" {} | v{} ", self.game.player_name, crate::VERSION))
            .style(Style::default().fg(self.theme.fg))
            .alignment(Alignment::Right)
            .block(bordered());
        frame.render_widget(player, header_layout[2]);
    }

    fn render_side_panel(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6),   // Paths
                Constraint::Min(5),      // Trail
            ])
            .split(area);

        let mut paths: Vec<Line> = self
            .game
            .exits()
            .into_iter()
            .map(|(side, dest)| {
                Line::from(vec![
                    Span::styled(format!("[{}] ", side.key()), Style::default().fg(self.theme.accent)),
                    Span::raw(dest.to_string()),
                ])
            })
            .collect();
        if paths.is_empty() {
            let note = if self.game.is_over() { "You are outside." } else { "Dead end." };
            paths.push(Line::from(Span::styled(note, Style::default().fg(Color::DarkGray))));
        }
        let paths = Paragraph::new(paths).block(styled_block("Paths", &self.theme));
        frame.render_widget(paths, chunks[0]);

        let trail: Vec<ListItem> = self
            .game
            .trail_names()
            .into_iter()
            .enumerate()
            .map(|(depth, name)| ListItem::new(format!("{}{}", "  ".repeat(depth), name)))
            .collect();
        let trail = List::new(trail).block(styled_block("Trail", &self.theme));
        frame.render_widget(trail, chunks[1]);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),      // Log
                Constraint::Length(3),   // Input line
            ])
            .split(area);

        let visible_lines = chunks[0].height.saturating_sub(2) as usize;
        let log = &self.game.message_log;
        let start = log.len().saturating_sub(visible_lines);
        let lines: Vec<Line> = log[start..]
            .iter()
            .map(|msg| {
                let mut style = Style::default().fg(tone_color(&msg.tone));
                if msg.tone == Tone::Lead {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Line::from(vec![
                    Span::styled(
                        format!("{} ", msg.timestamp.format("%H:%M:%S")),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(format!("{} ", msg.tone.symbol()), style),
                    Span::styled(msg.text.as_str(), style),
                ])
            })
            .collect();

        let messages = Paragraph::new(lines)
            .block(styled_block("Notebook", &self.theme))
            .wrap(Wrap { trim: false });
        frame.render_widget(messages, chunks[0]);

        let typing = self.input_mode == InputMode::Command;
        let prompt = if typing {
            format!("> {}_", self.input_buffer)
        } else {
            "> [Press : to type a command]".to_string()
        };
        let input = Paragraph::new(prompt)
            .style(Style::default().fg(if typing { Color::Green } else { Color::DarkGray }))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if typing { Color::Green } else { self.theme.border }))
                    .title(" Command "),
            );
        frame.render_widget(input, chunks[1]);
    }

    fn render_clue_board(&self, frame: &mut Frame, area: Rect) {
        let registry = self.game.registry();
        let items: Vec<ListItem> = self
            .game
            .clue_log()
            .in_order()
            .map(|clue| {
                let owner = registry
                    .find_suspect_by_clue(clue)
                    .map(|suspect| format!("  ({})", suspect.name))
                    .unwrap_or_default();
                ListItem::new(Line::from(vec![
                    Span::styled(clue.to_string(), Style::default().fg(tone_color(&Tone::Clue))),
                    Span::styled(owner, Style::default().fg(Color::DarkGray)),
                ]))
            })
            .collect();

        let board = List::new(items).block(styled_block("Collected Clues", &self.theme));
        frame.render_widget(board, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(30)])
            .split(area);

        let status = Paragraph::new(format!(" {} | Press ? for help ", self.game.check_status()))
            .style(Style::default().fg(self.theme.fg).bg(Color::DarkGray));
        frame.render_widget(status, chunks[0]);

        let progress = ProgressBar::new(
            "Clues",
            self.game.clue_log().count(),
            self.game.mansion().clue_count(),
        );
        frame.render_widget(progress, chunks[1]);
    }

    fn render_case_closed(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_width = 56.min(area.width);
        let popup_height = 9.min(area.height);
        let popup_area = Rect::new(
            (area.width - popup_width) / 2,
            (area.height - popup_height) / 2,
            popup_width,
            popup_height,
        );

        frame.render_widget(Clear, popup_area);

        let mut lines = vec![String::new()];
        match self.game.verdict() {
            Some(suspect) => {
                lines.push(format!("Most cited suspect: {}", suspect.name));
                lines.push(format!("Clues against them: {}", suspect.clue_count()));
            }
            None => lines.push("No suspect stands out.".to_string()),
        }
        lines.push(format!(
            "Clues you collected: {}",
            self.game.clue_log().count()
        ));
        lines.push(String::new());
        lines.push("Press Enter to return to the menu".to_string());

        let verdict = DramaticBox::new("CASE CLOSED")
            .content(lines)
            .border_color(self.theme.warning);
        frame.render_widget(verdict, popup_area);
    }

    fn render_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();
        let popup_width = 68.min(area.width.saturating_sub(4));
        let popup_height = 22.min(area.height.saturating_sub(4));
        let popup_area = Rect::new(
            (area.width - popup_width) / 2,
            (area.height - popup_height) / 2,
            popup_width,
            popup_height,
        );

        frame.render_widget(Clear, popup_area);

        let help = Paragraph::new(HELP_TEXT)
            .style(Style::default().fg(self.theme.fg))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(self.theme.accent)));
        frame.render_widget(help, popup_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playing() -> App {
        let mut app = App::new(QuestConfig::default()).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.current_screen, Screen::Playing);
        app
    }

    #[test]
    fn menu_keys_walk_the_mansion() {
        let mut app = playing();
        app.handle_key(KeyCode::Char('d')).unwrap();
        app.handle_key(KeyCode::Char('e')).unwrap();
        assert_eq!(app.game.current_room().unwrap().name, "Cozinha");
        assert!(app.game.clue_log().contains("Faca com manchas de sangue."));
    }

    #[test]
    fn command_mode_runs_actions() {
        let mut app = playing();
        app.handle_key(KeyCode::Char(':')).unwrap();
        for c in "left".chars() {
            app.handle_key(KeyCode::Char(c)).unwrap();
        }
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.game.current_room().unwrap().name, "Biblioteca");
        assert_eq!(app.command_history, vec!["left".to_string()]);
    }

    #[test]
    fn unknown_command_leaves_a_warning() {
        let mut app = playing();
        app.handle_key(KeyCode::Char(':')).unwrap();
        app.handle_key(KeyCode::Char('z')).unwrap();
        app.handle_key(KeyCode::Enter).unwrap();
        let last = app.game.message_log.last().unwrap();
        assert_eq!(last.tone, Tone::Warning);
    }

    #[test]
    fn leaving_closes_the_case() {
        let mut app = playing();
        app.handle_key(KeyCode::Char('s')).unwrap();
        assert_eq!(app.current_screen, Screen::CaseClosed);
        app.handle_key(KeyCode::Enter).unwrap();
        assert_eq!(app.current_screen, Screen::MainMenu);
    }

    #[test]
    fn q_on_menu_quits() {
        let mut app = App::new(QuestConfig::default()).unwrap();
        app.handle_key(KeyCode::Char('q')).unwrap();
        assert!(!app.running);
    }
}
