//! Detective Quest
//!
//! A mansion mystery: walk the rooms, pick up clues and work out which suspect
//! the evidence points at.
//!
//! # Game Mechanics
//!
//! - **Exploration**: The mansion is a fixed binary tree of rooms; go left,
//!   go right, or step back the way you came
//! - **Evidence**: Every clue you find lands in an ordered index
//! - **Suspects**: A hash table ties suspects to the clues against them
//! - **Analysis**: The suspect with the most clues is the prime suspect
//!
//! # Architecture
//!
//! - `data` - Clue index, suspect registry, mansion map
//! - `game` - Game state, actions, casebook bootstrap
//! - `config` - JSON configuration
//! - `tui` - Terminal user interface with ratatui
//! - `console` - Line-based front-end over stdin/stdout

pub mod config;
pub mod console;
pub mod data;
pub mod game;
pub mod tui;

pub use data::*;
pub use game::Game;

/// Game version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type for the game
pub type Result<T> = anyhow::Result<T>;

/// Custom error types
#[derive(thiserror::Error, Debug)]
pub enum QuestError {
    #[error("text is empty after trimming")]
    EmptyText,

    #[error("no room with id {0}")]
    UnknownRoom(usize),

    #[error("invalid configuration: {0}")]
    Config(String),
}
