//! Typed events raised by the command dispatcher.

use crate::state::game::Game;

/// Event kinds observers can register for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    NewGame,
    Guess,
    StateRequest,
    InvalidRequest,
    UnknownRequest,
}

impl EventKind {
    /// Every kind, in a fixed order. Handy for catch-all registration.
    pub const ALL: [EventKind; 5] = [
        Self::NewGame,
        Self::Guess,
        Self::StateRequest,
        Self::InvalidRequest,
        Self::UnknownRequest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NewGame => "newgame",
            Self::Guess => "guess",
            Self::StateRequest => "staterequest",
            Self::InvalidRequest => "invalidrequest",
            Self::UnknownRequest => "unknownrequest",
        }
    }
}

/// One event, raised while handling one command.
///
/// Game-carrying variants hold a snapshot taken after the command was
/// applied, so observers can still render a finished round even though the
/// dispatcher has already dropped it from the registry.
#[derive(Debug, Clone)]
pub enum GameEvent {
    /// A round was started, displacing any active one.
    NewGame { game: Game },

    /// A guess was applied to the channel's round.
    Guess { game: Game, guess: String },

    /// The channel's round was asked for its state.
    StateRequest { game: Game },

    /// A state query or guess arrived on a channel with no round.
    InvalidRequest { context: EventKind, command: String },

    /// The text matched no command pattern.
    UnknownRequest { command: String },
}

impl GameEvent {
    /// Which observer list this event is delivered to.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::NewGame { .. } => EventKind::NewGame,
            Self::Guess { .. } => EventKind::Guess,
            Self::StateRequest { .. } => EventKind::StateRequest,
            Self::InvalidRequest { .. } => EventKind::InvalidRequest,
            Self::UnknownRequest { .. } => EventKind::UnknownRequest,
        }
    }

    /// The round snapshot, for variants that carry one.
    pub fn game(&self) -> Option<&Game> {
        match self {
            Self::NewGame { game } | Self::Guess { game, .. } | Self::StateRequest { game } => {
                Some(game)
            }
            Self::InvalidRequest { .. } | Self::UnknownRequest { .. } => None,
        }
    }
}

/// Observer callback. Receives the event plus the caller's pass-through
/// context.
pub type Callback<C> = Box<dyn Fn(&GameEvent, &C) + Send + Sync>;
