//! Round state for the hangman engine.
//!
//! This module provides the core state types:
//!
//! - `game` - One hangman round, plus the per-channel registry
//! - `board` - The player-visible revealed-letter row
//! - `gallows` - The eight-stage failure drawing
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                 GameRegistry                   │
//! │                                                │
//! │  channel_id → Game                             │
//! │                │                               │
//! │                ├── word / remaining letters    │
//! │                ├── guessed letters / words     │
//! │                ├── Board    (revealed row)     │
//! │                └── Gallows  (failure stages)   │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! The registry is plain owned state. The dispatcher in [`crate::dispatch`]
//! owns one and is the only mutator during command handling; nothing here
//! knows about commands, events, or transports.

pub mod board;
pub mod gallows;
pub mod game;

// Re-export commonly used types
pub use board::{Board, PLACEHOLDER};
pub use gallows::{Gallows, STAGE_COUNT};
pub use game::{Game, GameRegistry, GameStatus, GuessOutcome, InvalidWord};
