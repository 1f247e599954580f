//! Game session management for the linelock game.
//!
//! This crate provides the [`Game`] controller that sits between the board
//! and the presentation layer. It owns one [`Board`] per session, exposes the
//! step and new-game operations, and queues [`GameEvent`]s (cell changed, turn
//! advanced, game created, game over) for the consumer to drain in emission
//! order.
//!
//! The model is single-threaded and synchronous: every operation completes
//! before it returns, and event order always matches call order.
//!
//! # Examples
//!
//! ```
//! use linelock_game::{Game, GameEvent};
//!
//! let mut game = Game::with_size(1);
//! game.step(0, 0)?;
//!
//! assert!(game.is_game_over());
//! let events: Vec<_> = std::iter::from_fn(|| game.poll_event()).collect();
//! assert_eq!(
//!     events,
//!     [
//!         GameEvent::FieldChanged { x: 0, y: 0 },
//!         GameEvent::GameAdvanced,
//!         GameEvent::GameOver { is_won: true },
//!     ]
//! );
//! # Ok::<(), linelock_game::BoardError>(())
//! ```

pub mod event;
pub mod game;

pub use linelock_board::{Board, BoardError};

pub use self::{event::GameEvent, game::Game};
