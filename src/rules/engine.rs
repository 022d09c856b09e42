//! The checkers rules engine.
//!
//! `Checkers` owns the board, the player to move and the forced-continuation
//! square. All mutation goes through [`Checkers::try_move`] (or its boolean
//! form [`Checkers::attempt_move`]), which validates completely before
//! touching the board, so a rejected move leaves no trace.
//!
//! ## Turn flow
//!
//! ```text
//! AwaitingMove(p) --step / final jump--> AwaitingMove(p.opponent())
//! AwaitingMove(p) --jump, more jumps---> ForcedJump(p, landing)
//! ForcedJump(p, s) --jump from s-------> ForcedJump(p, landing) | AwaitingMove(p.opponent())
//! ```
//!
//! The game ends when the player to move has no legal move.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::error::MoveError;
use super::legality;
use crate::board::{Board, Snapshot};
use crate::core::config::RulesConfig;
use crate::core::moves::Move;
use crate::core::piece::Piece;
use crate::core::player::Player;
use crate::core::position::Position;

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameResult {
    /// The opponent of the player left without a move.
    pub winner: Player,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }

    #[must_use]
    pub fn loser(&self) -> Player {
        self.winner.opponent()
    }
}

/// Where the game stands between moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// `player` may move any of their pieces.
    AwaitingMove(Player),
    /// `player` must continue jumping with the piece on `from`.
    ForcedJump { player: Player, from: Position },
    /// The player to move has no legal move.
    Finished(GameResult),
}

/// What an accepted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The move as played.
    pub mv: Move,

    /// Square of the captured piece, for jumps.
    pub captured: Option<Position>,

    /// Did the moving piece become a king on arrival?
    pub promoted: bool,

    /// Must the same piece jump again before the turn passes?
    pub continues: bool,
}

/// English draughts game state and rules.
///
/// ## Example
///
/// ```
/// use draughts::core::{Player, Position};
/// use draughts::rules::Checkers;
///
/// let mut game = Checkers::new();
/// assert_eq!(game.current_player(), Player::Red);
///
/// assert!(game.attempt_move(Position::new(2, 1), Position::new(3, 2)));
/// assert_eq!(game.current_player(), Player::Black);
///
/// // Red cannot move twice.
/// assert!(!game.attempt_move(Position::new(3, 2), Position::new(4, 3)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkers {
    board: Board,
    current_player: Player,
    must_continue: Option<Position>,
    config: RulesConfig,
}

impl Default for Checkers {
    fn default() -> Self {
        Self::new()
    }
}

impl Checkers {
    /// Start a game with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RulesConfig::default())
    }

    /// Start a game with custom rules.
    #[must_use]
    pub fn with_config(config: RulesConfig) -> Self {
        Self {
            board: Board::standard(),
            current_player: config.first_player,
            must_continue: None,
            config,
        }
    }

    /// Resume from an arbitrary board.
    ///
    /// No forced continuation is pending. Useful for puzzles and tests.
    #[must_use]
    pub fn from_board(board: Board, to_move: Player, config: RulesConfig) -> Self {
        Self {
            board,
            current_player: to_move,
            must_continue: None,
            config,
        }
    }

    /// Build a game from a list of pieces with the standard rules.
    ///
    /// Panics if any position is off the board.
    #[must_use]
    pub fn from_position(
        pieces: impl IntoIterator<Item = (Position, Piece)>,
        to_move: Player,
    ) -> Self {
        let mut board = Board::new();
        for (pos, piece) in pieces {
            board.place(pos, piece);
        }
        Self::from_board(board, to_move, RulesConfig::default())
    }

    /// Return to the starting layout, keeping the rules.
    pub fn reset(&mut self) {
        self.board.setup();
        self.current_player = self.config.first_player;
        self.must_continue = None;
        debug!("board reset, {} to move", self.current_player);
    }

    // === Queries ===

    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Square of the piece that must keep jumping, if a chain is in progress.
    #[must_use]
    pub fn must_continue(&self) -> Option<Position> {
        self.must_continue
    }

    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.board.get(pos)
    }

    /// Copy of every cell for renderers.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    #[must_use]
    pub fn piece_count(&self, player: Player) -> usize {
        self.board.count(player)
    }

    // === Moves ===

    /// Play `from -> to` if legal. Returns whether the move was made.
    pub fn attempt_move(&mut self, from: Position, to: Position) -> bool {
        self.try_move(from, to).is_ok()
    }

    /// Play `from -> to`, or explain why it is illegal.
    ///
    /// On error the game is unchanged.
    pub fn try_move(&mut self, from: Position, to: Position) -> Result<MoveOutcome, MoveError> {
        let mv = Move::new(from, to);
        let (piece, captured) = self.validate(mv).map_err(|err| {
            trace!("rejected {} for {}: {}", mv, self.current_player, err);
            err
        })?;

        if let Some(square) = captured {
            self.board.remove(square);
        }
        self.board.remove(from);

        let promoted = !piece.is_king() && to.row == piece.player().promotion_row();
        let landed = if promoted { piece.crowned() } else { piece };
        self.board.place(to, landed);

        let continues =
            captured.is_some() && legality::has_jump(&self.board, &self.config, to, landed);

        debug!(
            "{} played {}{}{}",
            self.current_player,
            mv,
            if captured.is_some() { ", capture" } else { "" },
            if promoted { ", crowned" } else { "" },
        );

        if continues {
            self.must_continue = Some(to);
            debug!("{} must continue jumping from {}", self.current_player, to);
        } else {
            self.must_continue = None;
            self.current_player = self.current_player.opponent();
        }

        Ok(MoveOutcome {
            mv,
            captured,
            promoted,
            continues,
        })
    }

    /// Every move `attempt_move` would accept right now.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .pieces_of(self.current_player)
            .filter(|(pos, _)| self.must_continue.map_or(true, |required| required == *pos))
            .flat_map(|(pos, piece)| legality::moves_from(&self.board, &self.config, pos, piece))
            .collect()
    }

    // === Termination ===

    /// The player to move has no legal step or jump with any piece.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        !self
            .board
            .pieces_of(self.current_player)
            .any(|(pos, piece)| legality::has_any_move(&self.board, &self.config, pos, piece))
    }

    /// The opponent of the stuck player, once the game is over.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.is_game_over().then(|| self.current_player.opponent())
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.winner().map(|winner| GameResult { winner })
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        if let Some(result) = self.result() {
            return GameStatus::Finished(result);
        }
        match self.must_continue {
            Some(from) => GameStatus::ForcedJump {
                player: self.current_player,
                from,
            },
            None => GameStatus::AwaitingMove(self.current_player),
        }
    }

    /// Run every pre-move check and the legality check.
    fn validate(&self, mv: Move) -> Result<(Piece, Option<Position>), MoveError> {
        for pos in [mv.from, mv.to] {
            if !pos.is_on_board() {
                return Err(MoveError::OffBoard(pos));
            }
        }

        let piece = self.board.get(mv.from).ok_or(MoveError::EmptyOrigin(mv.from))?;
        if piece.player() != self.current_player {
            return Err(MoveError::WrongPlayer {
                expected: self.current_player,
                found: piece.player(),
            });
        }
        if let Some(required) = self.must_continue {
            if required != mv.from {
                return Err(MoveError::MustContinueJump { required });
            }
        }

        let captured = legality::check_move(&self.board, &self.config, mv, piece)?;
        Ok((piece, captured))
    }
}

impl std::fmt::Display for Checkers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Current Player: {}", self.current_player)?;
        write!(f, "{}", self.board)
    }
}
