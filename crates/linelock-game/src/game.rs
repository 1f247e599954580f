//! Game session controller.

use std::{collections::VecDeque, ops::Index};

use linelock_board::{Board, BoardError};
use log::{debug, info, trace, warn};
use rand::{Rng, RngExt as _, SeedableRng as _};
use rand_pcg::Pcg64Mcg;

use crate::GameEvent;

/// A game session: one board plus the step/new-game operations around it.
///
/// The controller owns its [`Board`] exclusively and replaces it wholesale
/// when a new game starts. It derives the terminal state from the board (a
/// fully filled board is a won game) and queues [`GameEvent`]s for the
/// presentation layer in exact emission order.
///
/// # Example
///
/// ```
/// use linelock_game::{Game, GameEvent};
///
/// let mut game = Game::with_size(2);
/// game.step(0, 0)?; // empty cell advances to 1
///
/// assert_eq!(game[(0, 0)], 1);
/// assert_eq!(game.poll_event(), Some(GameEvent::FieldChanged { x: 0, y: 0 }));
/// assert_eq!(game.poll_event(), Some(GameEvent::GameAdvanced));
/// assert_eq!(game.poll_event(), None);
/// # Ok::<(), linelock_game::BoardError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    events: VecDeque<GameEvent>,
}

impl Game {
    /// Creates a session with an empty default-size board.
    ///
    /// No [`GameEvent::GameCreated`] is emitted for the initial board; only
    /// [`new_game`](Game::new_game) announces board replacement.
    #[must_use]
    pub fn new() -> Self {
        Self::with_size(Board::DEFAULT_SIZE)
    }

    /// Creates a session with an empty board of the given dimension.
    #[must_use]
    pub fn with_size(size: usize) -> Self {
        Self {
            board: Board::new(size),
            events: VecDeque::new(),
        }
    }

    /// Returns the grid dimension of the current board.
    #[must_use]
    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Returns a read-only view of the current board, e.g. for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns `true` once the board is fully filled.
    ///
    /// Filling the board is the sole terminal condition; there is no loss
    /// state.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_filled()
    }

    /// Returns the value of the cell at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CoordinateOutOfRange`] for coordinates outside
    /// the board.
    pub fn value(&self, x: usize, y: usize) -> Result<usize, BoardError> {
        self.board.value(x, y)
    }

    /// Returns `true` when the cell at `(x, y)` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CoordinateOutOfRange`] for coordinates outside
    /// the board.
    pub fn is_empty(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        self.board.is_empty(x, y)
    }

    /// Returns `true` when the cell at `(x, y)` is locked.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CoordinateOutOfRange`] for coordinates outside
    /// the board.
    pub fn is_locked(&self, x: usize, y: usize) -> Result<bool, BoardError> {
        self.board.is_locked(x, y)
    }

    /// Discards the current board and starts a fresh game of the same size.
    ///
    /// Every cell of the new board is empty and unlocked. Emits
    /// [`GameEvent::GameCreated`].
    pub fn new_game(&mut self) {
        let size = self.board.size();
        debug!("starting new {size}x{size} game");
        self.board = Board::new(size);
        self.emit(GameEvent::GameCreated);
    }

    /// Starts a fresh game pre-seeded with locked given cells.
    ///
    /// Up to `givens` empty cells are chosen at random, filled by repeated
    /// stepping, and locked. Placement is deterministic for a given `seed`.
    /// Cells where no nonzero value fits are skipped, so fewer than `givens`
    /// cells may be locked; the number actually locked is returned.
    ///
    /// Emits a single [`GameEvent::GameCreated`] after seeding.
    pub fn new_game_seeded(&mut self, givens: usize, seed: u64) -> usize {
        let size = self.board.size();
        debug!("starting new {size}x{size} game with up to {givens} givens (seed {seed})");
        let mut board = Board::new(size);
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let placed = seed_givens(&mut board, givens, &mut rng);
        self.board = board;
        self.emit(GameEvent::GameCreated);
        placed
    }

    /// Performs one step on the cell at `(x, y)`.
    ///
    /// A step on an unlocked in-bounds cell always succeeds: the cell advances
    /// to the next value that fits its row and column, then
    /// [`GameEvent::FieldChanged`] and [`GameEvent::GameAdvanced`] are
    /// emitted, followed by [`GameEvent::GameOver`] if the board just became
    /// filled.
    ///
    /// Stepping after the game is over, or stepping a locked cell, is a
    /// silent no-op that emits nothing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::CoordinateOutOfRange`] for coordinates outside
    /// the board (unless the game is already over, which is checked first).
    pub fn step(&mut self, x: usize, y: usize) -> Result<(), BoardError> {
        if self.is_game_over() {
            return Ok(());
        }
        if self.board.is_locked(x, y)? {
            return Ok(());
        }

        self.board.step_value(x, y)?;
        trace!("stepped ({x}, {y}) to {}", self.board[(x, y)]);
        self.emit(GameEvent::FieldChanged { x, y });
        self.emit(GameEvent::GameAdvanced);

        if self.board.is_filled() {
            info!("board filled, game won");
            self.emit(GameEvent::GameOver { is_won: true });
        }
        Ok(())
    }

    /// Removes and returns the oldest queued event.
    ///
    /// Consumers call this in a loop until it returns `None`; events come out
    /// in the exact order they were emitted.
    pub fn poll_event(&mut self) -> Option<GameEvent> {
        self.events.pop_front()
    }

    /// Returns the queued events, oldest first, without consuming them.
    pub fn pending_events(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    fn emit(&mut self, event: GameEvent) {
        trace!("emitting event: {event}");
        self.events.push_back(event);
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<(usize, usize)> for Game {
    type Output = usize;

    /// Returns the raw value of the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of range; use [`Game::value`] for the
    /// fallible variant.
    fn index(&self, coordinate: (usize, usize)) -> &usize {
        &self.board[coordinate]
    }
}

/// Fills and locks up to `count` random empty cells by repeated stepping.
///
/// Returns the number of cells actually locked. Board accesses cannot fail:
/// every coordinate is drawn from `0..size`.
fn seed_givens(board: &mut Board, count: usize, rng: &mut impl Rng) -> usize {
    let size = board.size();
    if size == 0 {
        return 0;
    }

    let mut placed = 0;
    for _ in 0..count {
        if board.is_filled() {
            break;
        }

        let (x, y) = loop {
            let x = rng.random_range(0..size);
            let y = rng.random_range(0..size);
            if board[(x, y)] == 0 {
                break (x, y);
            }
        };

        for _ in 0..rng.random_range(1..=size) {
            board
                .step_value(x, y)
                .expect("coordinate is within board bounds");
        }
        // A full extra cycle without landing on a nonzero value means nothing
        // fits in this cell; leave it empty and move on.
        let mut attempts = 0;
        while board[(x, y)] == 0 && attempts <= size {
            board
                .step_value(x, y)
                .expect("coordinate is within board bounds");
            attempts += 1;
        }
        if board[(x, y)] == 0 {
            warn!("no value fits at ({x}, {y}), skipping this given");
            continue;
        }

        board
            .set_lock(x, y)
            .expect("coordinate is within board bounds");
        placed += 1;
    }
    placed
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_new_game_emits_created_and_resets_board() {
        let mut game = Game::with_size(3);
        game.step(0, 0).unwrap();
        while game.poll_event().is_some() {}

        game.new_game();
        assert_eq!(game.poll_event(), Some(GameEvent::GameCreated));
        assert_eq!(game.poll_event(), None);
        assert_eq!(game.size(), 3);
        for x in 0..3 {
            for y in 0..3 {
                assert!(game.is_empty(x, y).unwrap());
                assert!(!game.is_locked(x, y).unwrap());
            }
        }
    }

    #[test]
    fn test_initial_session_emits_nothing() {
        let mut game = Game::new();
        assert_eq!(game.size(), 9);
        assert_eq!(game.poll_event(), None);
    }

    #[test]
    fn test_step_emits_field_changed_then_advanced() {
        let mut game = Game::new();
        game.step(4, 2).unwrap();
        assert_eq!(game.poll_event(), Some(GameEvent::FieldChanged { x: 4, y: 2 }));
        assert_eq!(game.poll_event(), Some(GameEvent::GameAdvanced));
        assert_eq!(game.poll_event(), None);
        assert_eq!(game[(4, 2)], 1);
    }

    #[test]
    fn test_step_on_locked_cell_is_silent() {
        let mut game = Game::with_size(2);
        game.new_game_seeded(1, 7);
        while game.poll_event().is_some() {}
        let locked = (0..2)
            .flat_map(|x| (0..2).map(move |y| (x, y)))
            .find(|&(x, y)| game.is_locked(x, y).unwrap())
            .expect("seeding locked one cell");

        let before = game[locked];
        game.step(locked.0, locked.1).unwrap();
        assert_eq!(game[locked], before);
        assert_eq!(game.poll_event(), None);
    }

    #[test]
    fn test_one_by_one_game_is_won_in_one_step() {
        let mut game = Game::with_size(1);
        assert!(!game.is_game_over());
        game.step(0, 0).unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.poll_event(), Some(GameEvent::FieldChanged { x: 0, y: 0 }));
        assert_eq!(game.poll_event(), Some(GameEvent::GameAdvanced));
        assert_eq!(game.poll_event(), Some(GameEvent::GameOver { is_won: true }));
        assert_eq!(game.poll_event(), None);
    }

    #[test]
    fn test_step_after_game_over_is_noop() {
        let mut game = Game::with_size(1);
        game.step(0, 0).unwrap();
        while game.poll_event().is_some() {}

        game.step(0, 0).unwrap();
        assert_eq!(game[(0, 0)], 1);
        assert_eq!(game.poll_event(), None);
        // The game-over check comes before bounds validation, so even a bad
        // coordinate is a quiet no-op now.
        assert_eq!(game.step(5, 5), Ok(()));
    }

    #[test]
    fn test_step_out_of_range_propagates() {
        let mut game = Game::new();
        assert_eq!(
            game.step(9, 0),
            Err(BoardError::CoordinateOutOfRange { x: 9, y: 0, size: 9 })
        );
        assert_eq!(game.poll_event(), None);
    }

    #[test]
    fn test_two_by_two_walkthrough_fills_the_board() {
        let mut game = Game::with_size(2);
        game.step(0, 0).unwrap(); // -> 1
        game.step(0, 1).unwrap(); // 1 conflicts in row 0 -> 2
        game.step(1, 0).unwrap(); // 1 conflicts in column 0 -> 2
        game.step(1, 1).unwrap(); // 1 fits -> 1

        assert_eq!(game[(0, 0)], 1);
        assert_eq!(game[(0, 1)], 2);
        assert_eq!(game[(1, 0)], 2);
        assert_eq!(game[(1, 1)], 1);
        assert!(game.is_game_over());

        let events: Vec<_> = std::iter::from_fn(|| game.poll_event()).collect();
        assert_eq!(events.len(), 9); // 4 x (changed + advanced) + game over
        assert_eq!(events.last(), Some(&GameEvent::GameOver { is_won: true }));
    }

    #[test]
    fn test_pending_events_preserve_order_without_consuming() {
        let mut game = Game::new();
        game.step(0, 0).unwrap();
        game.step(1, 1).unwrap();

        let pending: Vec<_> = game.pending_events().copied().collect();
        assert_eq!(
            pending,
            [
                GameEvent::FieldChanged { x: 0, y: 0 },
                GameEvent::GameAdvanced,
                GameEvent::FieldChanged { x: 1, y: 1 },
                GameEvent::GameAdvanced,
            ]
        );
        assert_eq!(game.pending_events().count(), 4);
    }

    #[test]
    fn test_seeded_game_locks_nonzero_cells() {
        let mut game = Game::new();
        let placed = game.new_game_seeded(10, 42);
        assert_eq!(game.poll_event(), Some(GameEvent::GameCreated));
        assert_eq!(game.poll_event(), None);

        let mut locked = 0;
        for x in 0..9 {
            for y in 0..9 {
                if game.is_locked(x, y).unwrap() {
                    assert!(!game.is_empty(x, y).unwrap());
                    locked += 1;
                }
            }
        }
        assert_eq!(locked, placed);
        assert!(placed <= 10);
    }

    #[test]
    fn test_seeded_game_is_deterministic() {
        let mut first = Game::new();
        let mut second = Game::new();
        first.new_game_seeded(20, 1234);
        second.new_game_seeded(20, 1234);
        for x in 0..9 {
            for y in 0..9 {
                assert_eq!(first[(x, y)], second[(x, y)]);
                assert_eq!(
                    first.is_locked(x, y).unwrap(),
                    second.is_locked(x, y).unwrap()
                );
            }
        }
    }

    proptest! {
        #[test]
        fn prop_game_over_tracks_board_fill(
            steps in prop::collection::vec((0_usize..3, 0_usize..3), 0..48),
        ) {
            let mut game = Game::with_size(3);
            for (x, y) in steps {
                game.step(x, y).unwrap();
                prop_assert_eq!(game.is_game_over(), game.board().is_filled());
            }
            let game_over_events = game
                .pending_events()
                .filter(|event| event.is_game_over())
                .count();
            prop_assert_eq!(game_over_events, usize::from(game.is_game_over()));
        }
    }
}
