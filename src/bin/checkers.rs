//! Two players at one terminal.
//!
//! Enter moves as `from_row from_col to_row to_col`, e.g. `2 1 3 2`.
//! `q` quits. Set `RUST_LOG=debug` to trace the engine.

use std::io::{self, BufRead, Write};

use draughts::core::Move;
use draughts::rules::Checkers;

/// Lines printed to push the previous board out of view.
const CLEAR_LINES: usize = 50;

fn clear_console(out: &mut impl Write) -> io::Result<()> {
    write!(out, "{}", "\n".repeat(CLEAR_LINES))
}

fn main() -> io::Result<()> {
    env_logger::init();

    let mut game = Checkers::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut out = io::stdout().lock();

    loop {
        write!(out, "{}", game)?;

        if let Some(winner) = game.winner() {
            writeln!(out, "Game over! {} wins!", winner)?;
            break;
        }

        writeln!(out, "Enter move (e.g., '2 1 3 2') or 'q' to quit: ")?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        let input = line.trim();
        if input == "q" {
            break;
        }

        let message = match input.parse::<Move>() {
            Ok(mv) => match game.try_move(mv.from, mv.to) {
                Ok(_) => "Move successful!".to_string(),
                Err(err) => format!("Invalid move, try again. ({})", err),
            },
            Err(err) => format!("Invalid input format: {}", err),
        };

        clear_console(&mut out)?;
        writeln!(out, "{}", message)?;
    }

    Ok(())
}
