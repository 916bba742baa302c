//! Line-oriented play on stdin/stdout.

use std::io::{self, BufRead, Write};

use log::info;

use crate::config::AppConfig;
use crate::game::{GameEngine, GameOutcome, MoveOutcome, Player};

/// Play console rounds until the user declines another one.
pub fn run(config: &AppConfig) -> io::Result<()> {
    let [first, second] = config.game.contestants();
    let mut engine = GameEngine::new(first, second);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    writeln!(output, "=== Connect 4 - Console Mode ({}) ===", config.game.mode.name())?;
    writeln!(output, "Board legend: X = Player 1, O = Player 2")?;

    loop {
        let outcome = play(&mut engine, &mut input, &mut output)?;
        info!("round finished: {outcome}");

        write!(output, "\nPlay again? [y/N] ")?;
        output.flush()?;
        let mut answer = String::new();
        input.read_line(&mut answer)?;
        if !answer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
        engine.reset();
    }
}

/// Play one round to completion, printing the board after every turn.
pub fn play<R: BufRead, W: Write>(
    engine: &mut GameEngine,
    input: &mut R,
    output: &mut W,
) -> io::Result<GameOutcome> {
    writeln!(output, "\n{}", engine.board())?;

    loop {
        let player = engine.current_player();
        let column = if engine.current_contestant().is_human() {
            read_column(engine, player, input, output)?
        } else {
            writeln!(output, "Computer ({player}) thinking...")?;
            match engine.propose_move() {
                Ok(Some(column)) => column,
                Ok(None) => continue,
                Err(err) => return Err(io::Error::other(err)),
            }
        };

        match engine.make_move(column) {
            Ok(result) => {
                writeln!(output, "\n{player} played column {column}")?;
                writeln!(output, "{}", engine.board())?;
                if let MoveOutcome::Finished(outcome) = result {
                    writeln!(output, "\nGame Over - {outcome}")?;
                    return Ok(outcome);
                }
            }
            Err(err) => writeln!(output, "{err}, try again.")?,
        }
    }
}

/// Prompt until the human enters a legal column.
fn read_column<R: BufRead, W: Write>(
    engine: &GameEngine,
    player: Player,
    input: &mut R,
    output: &mut W,
) -> io::Result<usize> {
    let valid = engine.valid_moves();
    loop {
        write!(output, "{player} turn. Choose a column {valid:?}: ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before the game finished",
            ));
        }

        match line.trim().parse::<usize>() {
            Ok(column) if valid.contains(&column) => return Ok(column),
            Ok(_) => writeln!(output, "Invalid column, try again.")?,
            Err(_) => writeln!(output, "Please enter an integer column.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::Contestant;
    use std::io::Cursor;

    #[test]
    fn scripted_vertical_win() {
        let mut engine = GameEngine::new(Contestant::Human, Contestant::Human);
        let mut input = Cursor::new("0\n1\n0\n1\n0\n1\n0\n");
        let mut output = Vec::new();

        let outcome = play(&mut engine, &mut input, &mut output).unwrap();

        assert_eq!(outcome, GameOutcome::Winner(Player::One));
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Game Over - Player 1 wins!"));
        assert!(text.contains("Player 2 played column 1"));
    }

    #[test]
    fn reprompts_on_bad_input() {
        let mut engine = GameEngine::new(Contestant::Human, Contestant::Human);
        let mut input = Cursor::new("abc\n9\n3\n");
        let mut output = Vec::new();

        // Input runs out on player two's turn
        let err = play(&mut engine, &mut input, &mut output).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Please enter an integer column."));
        assert!(text.contains("Invalid column, try again."));
        assert!(text.contains("Player 1 played column 3"));
        assert_eq!(engine.board().piece_count(), 1);
    }

    #[test]
    fn computer_game_needs_no_input() {
        let mut engine = GameEngine::new(
            Contestant::Automated { depth: 1 },
            Contestant::Automated { depth: 2 },
        );
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let outcome = play(&mut engine, &mut input, &mut output).unwrap();
        assert_eq!(engine.outcome(), Some(outcome));
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Computer (Player 1) thinking..."));
    }
}
