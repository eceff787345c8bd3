//! Hangman Engine
//!
//! This crate provides command interpretation and round state for a
//! chat-driven hangman game.
//!
//! # Overview
//!
//! - **Command Dispatcher** - Classifies raw chat text (`newgame <word>`,
//!   `state`, bare guesses) against a fixed grammar, routes it to the
//!   channel's round, and announces every outcome as a typed event.
//!
//! - **Round State** - One hangman round per channel: the target word,
//!   revealed letters, guessed letters and words, and the eight-stage
//!   failure drawing.
//!
//! - **Channel Registry** - At most one active round per channel. A new
//!   round displaces the old one, and a finished round is dropped as soon as
//!   the finishing guess is processed.
//!
//! # Design Principles
//!
//! 1. **No transport** - This crate is pure command handling and state, no
//!    HTTP or sockets. Hosts feed it `(text, issuer, channel)` tuples and
//!    react to events.
//!
//! 2. **Typed events** - Every command produces exactly one event. Observers
//!    subscribe per kind and run synchronously, in registration order.
//!
//! 3. **Snapshots over references** - Events carry cloned round state, so a
//!    finished round can still be rendered after the registry dropped it.
//!
//! 4. **Serialization-ready** - Round state converts to JSON for hosts that
//!    relay it.
//!
//! # Example
//!
//! ```rust
//! use hangman_engine::{Dispatcher, EventKind, GameEvent};
//!
//! let mut dispatcher: Dispatcher<()> = Dispatcher::new();
//!
//! dispatcher.on(EventKind::Guess, |event, _ctx| {
//!     if let GameEvent::Guess { game, guess } = event {
//!         println!("{} guessed:\n{}", guess, game.display_state());
//!     }
//! });
//!
//! dispatcher.handle_command("newgame banana", "alice", "channel-1", ());
//! dispatcher.handle_command("a", "bob", "channel-1", ());
//! ```

pub mod dispatch;
pub mod state;
pub mod util;

// Re-export the public surface at the crate root
pub use dispatch::{Callback, Dispatcher, EventKind, GameEvent};
pub use state::{
    Board, Gallows, Game, GameRegistry, GameStatus, GuessOutcome, InvalidWord, PLACEHOLDER,
    STAGE_COUNT,
};
