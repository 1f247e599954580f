//! Events emitted by the game controller.

/// A notification emitted by [`Game`](crate::Game) for the presentation layer.
///
/// Events carry the minimal payload the consumer needs and are delivered
/// through a FIFO queue in exact emission order; drain them with
/// [`Game::poll_event`](crate::Game::poll_event).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GameEvent {
    /// The displayable value of one cell changed.
    #[display("field changed at ({x}, {y})")]
    FieldChanged {
        /// Row index of the changed cell.
        x: usize,
        /// Column index of the changed cell.
        y: usize,
    },
    /// One step was taken; drives move counters and similar.
    #[display("game advanced")]
    GameAdvanced,
    /// A new board replaced the old one; the consumer should re-render all
    /// cells.
    #[display("game created")]
    GameCreated,
    /// The game reached its terminal state.
    #[display("game over (won: {is_won})")]
    GameOver {
        /// Whether the player won. The only reachable terminal state is a
        /// win, so this is always `true` in practice.
        is_won: bool,
    },
}
