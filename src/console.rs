//! Plain line-based front-end
//!
//! Reads one command per line and prints plain text. Works anywhere, including
//! pipes, which makes it handy for scripted runs.

use crate::game::{Game, GameAction};
use crate::Result;
use anyhow::Context;
use std::io::{BufRead, Write};

const RULE: &str = "=============================================";

/// Play until the player leaves the mansion or input runs out
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, mut output: W) -> Result<()> {
    for message in &game.message_log {
        writeln!(output, "{}", message.text)?;
    }
    write_menu(game, &mut output)?;

    for line in input.lines() {
        let line = line.context("reading command")?;
        if line.trim().is_empty() {
            continue;
        }

        match GameAction::parse(&line) {
            Some(action) => {
                for text in game.execute_action(action)? {
                    writeln!(output, "{}", text)?;
                }
            }
            None => writeln!(output, "Invalid option. Try again.")?,
        }

        if game.is_over() {
            break;
        }
        write_menu(game, &mut output)?;
    }

    if game.is_over() {
        writeln!(output, "{}", RULE)?;
        for text in game.execute_action(GameAction::Analyze)? {
            writeln!(output, "{}", text)?;
        }
    }
    output.flush()?;
    Ok(())
}

fn write_menu<W: Write>(game: &Game, output: &mut W) -> Result<()> {
    writeln!(output, "{}", RULE)?;
    writeln!(output, "{}", game.check_status())?;
    for line in game.menu_lines() {
        writeln!(output, "{}", line)?;
    }
    writeln!(output, "{}", RULE)?;
    write!(output, "Where to? ")?;
    output.flush()?;
    Ok(())
}
