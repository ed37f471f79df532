use std::io::{self, Write};

use crate::game::{GameController, InputEvent, Outcome, Phase, TickResult, COLS, ROWS};

/// Run a game with no terminal UI, printing each move and the final board.
///
/// Only makes progress when both seats play on their own. Gives up after a
/// bounded number of idle ticks and returns `None` if the game never ends.
pub fn play<W: Write>(game: &mut GameController, out: &mut W) -> io::Result<Option<Outcome>> {
    game.tick(&[InputEvent::Begin]);

    let mut idle = 0;
    while game.phase() == Phase::Playing {
        match game.tick(&[]) {
            TickResult::Moved(mv) | TickResult::Finished(mv, _) => {
                idle = 0;
                writeln!(out, "{} -> column {}", mv.player.name(), mv.col)?;
            }
            _ => {
                idle += 1;
                if idle > ROWS * COLS {
                    break;
                }
            }
        }
    }

    writeln!(out)?;
    write!(out, "{}", game.board())?;
    let outcome = game.outcome();
    match outcome {
        Some(Outcome::Winner(player)) => writeln!(out, "{} wins!", player.name())?,
        Some(Outcome::Draw) => writeln!(out, "It's a draw!")?,
        None => writeln!(out, "Game did not finish")?,
    }
    Ok(outcome)
}
