//! Core game logic and state management

pub mod casebook;

use crate::config::QuestConfig;
use crate::data::*;
use crate::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The main game state
#[derive(Debug, Clone)]
pub struct Game {
    /// Current game phase
    pub phase: GamePhase,

    /// Name shown in the header
    pub player_name: String,

    /// The house being searched
    mansion: Mansion,

    /// Every clue picked up so far
    clue_log: ClueIndex,

    /// Suspects and the clues tied to them
    registry: SuspectRegistry,

    /// Rooms from the entrance to where the player stands
    trail: Vec<RoomId>,

    visited: HashSet<RoomId>,

    /// Game statistics
    pub stats: GameStats,

    /// Message log (for UI display)
    pub message_log: Vec<GameMessage>,
}

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Exploring,
    /// Walked out of the mansion; only the evidence is left to review
    CaseClosed,
}

/// Actions the player can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    GoLeft,
    GoRight,
    Back,
    ShowClues,
    Analyze,
    Leave,
}

impl GameAction {
    /// Parse a menu key or command word
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "e" | "left" | "esquerda" => Some(GameAction::GoLeft),
            "d" | "right" | "direita" => Some(GameAction::GoRight),
            "s" | "back" | "voltar" => Some(GameAction::Back),
            "p" | "clues" | "pistas" => Some(GameAction::ShowClues),
            "a" | "analyze" | "analisar" => Some(GameAction::Analyze),
            "q" | "leave" | "exit" | "sair" => Some(GameAction::Leave),
            _ => None,
        }
    }

    pub fn key(&self) -> char {
        match self {
            GameAction::GoLeft => 'e',
            GameAction::GoRight => 'd',
            GameAction::Back => 's',
            GameAction::ShowClues => 'p',
            GameAction::Analyze => 'a',
            GameAction::Leave => 'q',
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GameAction::GoLeft => "Take the left path",
            GameAction::GoRight => "Take the right path",
            GameAction::Back => "Go back to the previous room / leave the mansion",
            GameAction::ShowClues => "Show every clue collected (in order)",
            GameAction::Analyze => "Analyze the evidence against each suspect",
            GameAction::Leave => "Leave the mansion now",
        }
    }

    pub const ALL: [GameAction; 6] = [
        GameAction::GoLeft,
        GameAction::GoRight,
        GameAction::Back,
        GameAction::ShowClues,
        GameAction::Analyze,
        GameAction::Leave,
    ];
}

/// Game statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    pub moves: u32,
    pub rooms_visited: usize,
    pub clues_collected: usize,
    pub blocked_paths: u32,
}

/// A message to display to the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameMessage {
    pub timestamp: DateTime<Utc>,
    pub tone: Tone,
    pub text: String,
}

impl GameMessage {
    pub fn new(tone: Tone, text: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            tone,
            text: text.to_string(),
        }
    }
}

impl Game {
    /// Start at the entrance of `mansion` with an already loaded registry
    pub fn new(player_name: &str, mansion: Mansion, registry: SuspectRegistry) -> Result<Self> {
        let entrance = mansion.entrance();
        let mut game = Self {
            phase: GamePhase::Exploring,
            player_name: player_name.to_string(),
            mansion,
            clue_log: ClueIndex::new(),
            registry,
            trail: vec![entrance],
            visited: HashSet::new(),
            stats: GameStats::default(),
            message_log: Vec::new(),
        };

        let mut out = Vec::new();
        game.note(&mut out, Tone::Info, "Welcome to the mansion. Find the clues, then name the culprit.");
        game.arrive(entrance, &mut out)?;
        Ok(game)
    }

    /// The demo mansion with the configured (or built-in) casebook
    pub fn from_config(config: &QuestConfig) -> Result<Self> {
        let entries = config
            .bounded_casebook()
            .unwrap_or_else(casebook::default_casebook);
        let registry = casebook::load_registry(&entries);
        Self::new(&config.player_name, Mansion::fixture(), registry)
    }

    fn note(&mut self, out: &mut Vec<String>, tone: Tone, text: &str) {
        out.push(text.to_string());
        self.message_log.push(GameMessage::new(tone, text));
    }

    /// Execute a player action, returning what happened
    pub fn execute_action(&mut self, action: GameAction) -> Result<Vec<String>> {
        let mut out = Vec::new();
        tracing::debug!(?action, "executing action");

        match action {
            GameAction::GoLeft => self.walk(Side::Left, &mut out)?,
            GameAction::GoRight => self.walk(Side::Right, &mut out)?,
            GameAction::Back => self.back(&mut out)?,
            GameAction::ShowClues => self.show_clues(&mut out),
            GameAction::Analyze => self.analyze(&mut out),
            GameAction::Leave => {
                if self.phase == GamePhase::CaseClosed {
                    self.note(&mut out, Tone::Warning, "You have already left the mansion.");
                } else {
                    self.leave(&mut out);
                }
            }
        }

        Ok(out)
    }

    fn walk(&mut self, side: Side, out: &mut Vec<String>) -> Result<()> {
        let Some(current) = self.current_room_id() else {
            self.note(out, Tone::Warning, "You have already left the mansion.");
            return Ok(());
        };

        match self.mansion.exit(current, side)? {
            Some(next) => {
                self.stats.moves += 1;
                self.trail.push(next);
                self.arrive(next, out)?;
            }
            None => {
                self.stats.blocked_paths += 1;
                let msg = format!(
                    "Path '{}' is blocked or does not exist. Try again.",
                    side.key()
                );
                self.note(out, Tone::Warning, &msg);
            }
        }
        Ok(())
    }

    fn back(&mut self, out: &mut Vec<String>) -> Result<()> {
        if self.trail.pop().is_none() {
            self.note(out, Tone::Warning, "You have already left the mansion.");
            return Ok(());
        }

        match self.current_room_id() {
            Some(parent) => {
                self.stats.moves += 1;
                self.arrive(parent, out)?;
            }
            None => self.leave(out),
        }
        Ok(())
    }

    fn leave(&mut self, out: &mut Vec<String>) {
        self.trail.clear();
        self.phase = GamePhase::CaseClosed;
        tracing::info!(
            clues = self.stats.clues_collected,
            rooms = self.stats.rooms_visited,
            "left the mansion"
        );
        self.note(out, Tone::Info, "You leave the mansion.");
    }

    /// Announce a room and pick up its clue
    fn arrive(&mut self, id: RoomId, out: &mut Vec<String>) -> Result<()> {
        let room = self.mansion.room(id)?;
        let name = room.name.clone();
        let clue = room.clue.clone();

        if self.visited.insert(id) {
            self.stats.rooms_visited = self.visited.len();
        }
        tracing::debug!(room = %name, "entered room");
        self.note(out, Tone::Info, &format!("You are in: {}", name));

        let Some(clue) = clue else {
            self.note(out, Tone::Info, "No clue here.");
            return Ok(());
        };

        self.note(out, Tone::Clue, &format!("Clue found here: {}", clue));
        if self.clue_log.insert(&clue) {
            self.stats.clues_collected += 1;
            tracing::info!(%clue, room = %name, "clue collected");
        }

        let lead = self
            .registry
            .find_suspect_by_clue(&clue)
            .map(|suspect| suspect.name.clone());
        match lead {
            Some(suspect) => {
                self.note(out, Tone::Lead, &format!("This clue points to {}.", suspect))
            }
            None => self.note(out, Tone::Info, "No suspect is tied to this clue."),
        }
        Ok(())
    }

    fn show_clues(&mut self, out: &mut Vec<String>) {
        if self.clue_log.is_empty() {
            self.note(out, Tone::Info, "No clues collected yet.");
            return;
        }
        let lines: Vec<String> = self
            .clue_log
            .in_order()
            .map(|clue| format!("- {}", clue))
            .collect();
        self.note(out, Tone::Info, "Clues collected so far:");
        for line in lines {
            self.note(out, Tone::Clue, &line);
        }
    }

    fn analyze(&mut self, out: &mut Vec<String>) {
        let report = self.registry.report();
        for line in report.lines() {
            let tone = if line.starts_with("Most cited") {
                Tone::Lead
            } else {
                Tone::Info
            };
            self.note(out, tone, line);
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::CaseClosed
    }

    pub fn current_room_id(&self) -> Option<RoomId> {
        self.trail.last().copied()
    }

    pub fn current_room(&self) -> Option<&Room> {
        self.current_room_id()
            .and_then(|id| self.mansion.room(id).ok())
    }

    /// Names of the rooms from the entrance to the current one
    pub fn trail_names(&self) -> Vec<&str> {
        self.trail
            .iter()
            .filter_map(|&id| self.mansion.room(id).ok())
            .map(|room| room.name.as_str())
            .collect()
    }

    /// Exits from the current room as (side, destination name)
    pub fn exits(&self) -> Vec<(Side, &str)> {
        let Some(room) = self.current_room() else {
            return Vec::new();
        };
        [Side::Left, Side::Right]
            .into_iter()
            .filter_map(|side| {
                let id = room.exit(side)?;
                let dest = self.mansion.room(id).ok()?;
                Some((side, dest.name.as_str()))
            })
            .collect()
    }

    /// The menu the original console shows in every room
    pub fn menu_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (side, dest) in self.exits() {
            lines.push(format!("  [{}] Go to: {}", side.key(), dest));
        }
        for action in [GameAction::ShowClues, GameAction::Analyze, GameAction::Back] {
            lines.push(format!("  [{}] {}", action.key(), action.description()));
        }
        lines
    }

    pub fn mansion(&self) -> &Mansion {
        &self.mansion
    }

    pub fn clue_log(&self) -> &ClueIndex {
        &self.clue_log
    }

    pub fn registry(&self) -> &SuspectRegistry {
        &self.registry
    }

    /// The suspect the evidence points at most
    pub fn verdict(&self) -> Option<&Suspect> {
        self.registry.most_cited()
    }

    /// Check current game status
    pub fn check_status(&self) -> String {
        let location = self
            .current_room()
            .map(|room| room.name.as_str())
            .unwrap_or("outside");
        format!(
            "Location: {} | Moves: {} | Rooms: {}/{} | Clues: {}/{}",
            location,
            self.stats.moves,
            self.stats.rooms_visited,
            self.mansion.len(),
            self.stats.clues_collected,
            self.mansion.clue_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game() -> Game {
        Game::from_config(&QuestConfig::default()).unwrap()
    }

    #[test]
    fn starts_in_the_hall() {
        let game = game();
        assert_eq!(game.current_room().unwrap().name, "Hall de Entrada");
        assert_eq!(game.stats.rooms_visited, 1);
        assert!(game.clue_log().is_empty());
        assert!(game
            .message_log
            .iter()
            .any(|m| m.text == "You are in: Hall de Entrada"));
    }

    #[test]
    fn parse_accepts_menu_letters_and_words() {
        assert_eq!(GameAction::parse("e"), Some(GameAction::GoLeft));
        assert_eq!(GameAction::parse(" D "), Some(GameAction::GoRight));
        assert_eq!(GameAction::parse("pistas"), Some(GameAction::ShowClues));
        assert_eq!(GameAction::parse("x"), None);
        for action in GameAction::ALL {
            assert_eq!(GameAction::parse(&action.key().to_string()), Some(action));
        }
    }

    #[test]
    fn blocked_path_changes_nothing() {
        let mut game = game();
        game.execute_action(GameAction::GoRight).unwrap();
        let out = game.execute_action(GameAction::GoRight).unwrap();
        assert_eq!(out, vec!["Path 'd' is blocked or does not exist. Try again."]);
        assert_eq!(game.current_room().unwrap().name, "Sala de Estar");
        assert_eq!(game.stats.moves, 1);
        assert_eq!(game.stats.blocked_paths, 1);
    }

    #[test]
    fn exits_follow_the_current_room() {
        let mut game = game();
        game.execute_action(GameAction::GoRight).unwrap();
        assert_eq!(game.exits(), vec![(Side::Left, "Cozinha")]);
    }
}
