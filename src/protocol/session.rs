//! Referee protocol session
//!
//! The referee speaks a line-based protocol on stdin/stdout. Moves are two
//! characters (column letter 'A'-'H', row digit '1'-'8'). Two control
//! tokens exist: `Start` tells the engine it plays white and begins, `Quit`
//! ends the process. Everything the engine prints to stdout is protocol
//! output; diagnostics go to stderr through the tracing subscriber.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use crate::core::board::{Color, Square};
use crate::engine::player::Player;
use crate::engine::search::SearchLimits;

pub struct Session {
    player: Player,
}

impl Session {
    /// New session with the tournament search limits. The engine assumes it
    /// plays black until the referee says otherwise.
    pub fn new() -> Self {
        Self::with_limits(SearchLimits::default())
    }

    pub fn with_limits(limits: SearchLimits) -> Self {
        Session {
            player: Player::with_limits(Color::Black, limits),
        }
    }

    /// Current player state (for tests and diagnostics).
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Run the session over stdin/stdout until the game ends, the referee
    /// quits, or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_io(stdin.lock(), stdout.lock())
    }

    /// Protocol loop over arbitrary reader/writer pairs.
    pub fn run_io<R: BufRead, W: Write>(&mut self, reader: R, mut writer: W) -> io::Result<()> {
        let mut lines = reader.lines();

        if !self.read_referee(&mut lines)? {
            return Ok(());
        }

        while !self.player.board().is_full() {
            let Some(mv) = self.player.select_and_apply_move() else {
                break;
            };
            writeln!(writer, "{}", mv.square)?;
            writer.flush()?;
            debug!(board = %self.player.board(), "position after own move");

            if self.player.board().is_full() {
                break;
            }
            if !self.read_referee(&mut lines)? {
                return Ok(());
            }
        }

        info!(
            white = self.player.board().white_score(),
            black = self.player.board().black_score(),
            "game over"
        );
        Ok(())
    }

    /// Read referee input until it yields an action: `Start` switches the
    /// engine to white, a legal move is applied. Invalid or illegal input
    /// is reported and re-read without advancing the game. Returns `false`
    /// on `Quit` or end of input.
    fn read_referee<R: BufRead>(&mut self, lines: &mut io::Lines<R>) -> io::Result<bool> {
        loop {
            let Some(line) = lines.next() else {
                return Ok(false);
            };
            let line = line?;
            let line = line.trim();

            match line {
                "Start" => {
                    self.player.set_white();
                    return Ok(true);
                }
                "Quit" => {
                    info!("referee quit");
                    return Ok(false);
                }
                _ => match Square::from_notation(line) {
                    Some(sq) => match self.player.apply_external_move(sq.col(), sq.row()) {
                        Ok(mv) => {
                            debug!(mv = %mv, "applied opponent move");
                            return Ok(true);
                        }
                        Err(err) => warn!(%err, input = line, "rejected opponent move"),
                    },
                    None => warn!(input = line, "bad input"),
                },
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
