//! The engine's operation set behind one trait.
//!
//! Front ends (a text renderer, a CLI, a test harness) drive a game through
//! [`Model`] and never touch the rules or search modules directly.

use super::rules;
use super::search::{self, SearchConfig, SearchReport};
use super::{GameError, GameState, Line, Move, Outcome, Player};
use tracing::instrument;

/// Operations a front end needs to run a game.
///
/// Only [`Model::find_best_move`] varies between implementations; the rules
/// are shared.
pub trait Model {
    /// Creates a game with an empty board.
    fn game_start(&self, first: Player, size: usize) -> GameState {
        GameState::new(first, size)
    }

    /// Returns the other player.
    fn next_player(&self, player: Player) -> Player {
        player.opponent()
    }

    /// Creates a move without checking it against any board.
    fn create_move(&self, row: usize, col: usize) -> Move {
        Move::new(row, col)
    }

    /// Places the current player's mark.
    fn apply_move(&self, game: &GameState, mv: Move) -> Result<GameState, GameError> {
        game.apply(mv)
    }

    /// Lists the empty cells.
    fn move_generator(&self, game: &GameState) -> Vec<Move> {
        rules::move_generator(game)
    }

    /// Enumerates the lines of a board.
    fn lines(&self, size: usize) -> Vec<Line> {
        super::lines(size)
    }

    /// Classifies the game.
    fn game_outcome(&self, game: &GameState) -> Outcome {
        rules::game_outcome(game)
    }

    /// Returns true once the game is won or drawn.
    fn game_over(&self, game: &GameState) -> bool {
        rules::game_over(game)
    }

    /// Chooses a move for the player to move.
    fn find_best_move(&self, game: &GameState) -> Result<Move, GameError>;
}

/// Minimax engine configured by a [`SearchConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Engine {
    config: SearchConfig,
}

impl Engine {
    /// Creates an engine with the given search options.
    #[instrument]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Searches for the player to move, reporting score and node count.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoMoveAvailable`] if the game is already over.
    #[instrument(skip(self, game), fields(engine = %self))]
    pub fn search(&self, game: &GameState) -> Result<SearchReport, GameError> {
        search::best_move_with(game, &self.config).map(|(_, report)| report)
    }
}

impl Model for Engine {
    fn find_best_move(&self, game: &GameState) -> Result<Move, GameError> {
        search::best_move_with(game, &self.config).map(|(mv, _)| mv)
    }
}

impl std::fmt::Display for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = if *self.config.pruning() {
            "Minimax with alpha-beta pruning"
        } else {
            "Minimax"
        };
        if *self.config.parallel() {
            write!(f, "{} (parallel)", name)
        } else {
            write!(f, "{}", name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert_eq!(Engine::default().to_string(), "Minimax");
        let pruned = Engine::new(SearchConfig::new().with_pruning(true));
        assert_eq!(pruned.to_string(), "Minimax with alpha-beta pruning");
        let both = Engine::new(SearchConfig::new().with_pruning(true).with_parallel(true));
        assert_eq!(both.to_string(), "Minimax with alpha-beta pruning (parallel)");
    }

    #[test]
    fn test_engine_drives_a_game() {
        let engine = Engine::new(SearchConfig::new().with_pruning(true));
        let game = engine.game_start(Player::Cross, 3);
        assert_eq!(engine.move_generator(&game).len(), 9);
        assert_eq!(engine.lines(3).len(), 8);

        let game = engine
            .apply_move(&game, engine.create_move(0, 0))
            .unwrap();
        assert_eq!(game.turn(), engine.next_player(Player::Cross));

        let reply = engine.find_best_move(&game).unwrap();
        // Only the centre holds the draw against a corner opening.
        assert_eq!(reply, Move::new(1, 1));
        assert!(!engine.game_over(&game));
        assert_eq!(engine.game_outcome(&game), Outcome::Undecided);
    }

    #[test]
    fn test_search_on_finished_game() {
        let engine = Engine::default();
        let moves = [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)].map(|(r, c)| Move::new(r, c));
        let game = GameState::replay(Player::Cross, 3, &moves).unwrap();
        assert_eq!(engine.search(&game), Err(GameError::NoMoveAvailable));
    }
}
