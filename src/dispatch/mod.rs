//! Command interpretation and event fan-out.
//!
//! The dispatcher turns raw chat text into round operations. `newgame <word>`
//! starts a round for the channel, `state` asks for the current rendering,
//! and a bare alphabetic token is a guess: one letter routes to a letter
//! guess, anything longer to a word guess. Everything else is unknown. Every
//! outcome is announced to registered observers as a [`GameEvent`]; the
//! dispatcher itself performs no I/O.
//!
//! # Usage
//!
//! ```rust
//! use hangman_engine::dispatch::{Dispatcher, EventKind, GameEvent};
//!
//! let mut dispatcher: Dispatcher<()> = Dispatcher::new();
//! dispatcher.on(EventKind::NewGame, |event, _ctx| {
//!     if let GameEvent::NewGame { game } = event {
//!         println!("round started by {}", game.creator());
//!     }
//! });
//!
//! dispatcher.handle_command("newgame banana", "alice", "channel-1", ());
//! ```

use std::collections::HashMap;

use regex::Regex;
use tracing::{debug, info};

use crate::state::game::{Game, GameRegistry};

pub mod event;

pub use event::{Callback, EventKind, GameEvent};

/// Classifies commands and drives the per-channel round registry.
///
/// `C` is an opaque pass-through context supplied per command and handed
/// unmodified to every observer the command reaches; hosts use it to tie
/// events back to the originating request.
pub struct Dispatcher<C> {
    games: GameRegistry,
    observers: HashMap<EventKind, Vec<Callback<C>>>,
    newgame_pattern: Regex,
    state_pattern: Regex,
    guess_pattern: Regex,
}

impl<C> Dispatcher<C> {
    /// Dispatcher over an empty registry.
    pub fn new() -> Self {
        Self::with_registry(GameRegistry::new())
    }

    /// Dispatcher over an existing registry.
    pub fn with_registry(games: GameRegistry) -> Self {
        Self {
            games,
            observers: HashMap::new(),
            newgame_pattern: Regex::new(r"^newgame\s+([a-z]+)$").unwrap(),
            state_pattern: Regex::new(r"^state$").unwrap(),
            guess_pattern: Regex::new(r"^([a-z]+)$").unwrap(),
        }
    }

    /// Register an observer for one event kind.
    ///
    /// Multiple observers per kind run synchronously, in registration order.
    pub fn on<F>(&mut self, kind: EventKind, callback: F)
    where
        F: Fn(&GameEvent, &C) + Send + Sync + 'static,
    {
        self.observers
            .entry(kind)
            .or_default()
            .push(Box::new(callback));
    }

    /// The registry of active rounds.
    pub fn games(&self) -> &GameRegistry {
        &self.games
    }

    /// Handle one command: classify, apply, announce.
    ///
    /// Commands are matched case-insensitively with surrounding whitespace
    /// ignored; the new-game pattern is checked before the guess pattern
    /// because its leading token would otherwise read as a word guess.
    /// Taking `&mut self` makes each command a critical section: hosts that
    /// process a channel's commands in parallel wrap the dispatcher in a
    /// mutex.
    pub fn handle_command(&mut self, text: &str, issuer_id: &str, channel_id: &str, context: C) {
        let command = text.trim().to_lowercase();

        if let Some(word) = self
            .newgame_pattern
            .captures(&command)
            .map(|captures| captures[1].to_string())
        {
            let game = Game::new(&word, issuer_id).expect("pattern only captures ascii letters");
            let snapshot = game.clone();
            if let Some(displaced) = self.games.insert(channel_id, game) {
                debug!(
                    "channel {} abandons its round on {:?} for a fresh one",
                    channel_id,
                    displaced.word()
                );
            }
            info!("{} started a round in channel {}", issuer_id, channel_id);
            self.emit(GameEvent::NewGame { game: snapshot }, &context);
            return;
        }

        if self.state_pattern.is_match(&command) {
            match self.games.get(channel_id) {
                Some(game) => {
                    let snapshot = game.clone();
                    self.emit(GameEvent::StateRequest { game: snapshot }, &context);
                }
                None => {
                    debug!("state query in channel {} with no active round", channel_id);
                    self.emit(
                        GameEvent::InvalidRequest {
                            context: EventKind::StateRequest,
                            command,
                        },
                        &context,
                    );
                }
            }
            return;
        }

        if let Some(guess) = self
            .guess_pattern
            .captures(&command)
            .map(|captures| captures[1].to_string())
        {
            let game = match self.games.get_mut(channel_id) {
                Some(game) => game,
                None => {
                    debug!("guess in channel {} with no active round", channel_id);
                    self.emit(
                        GameEvent::InvalidRequest {
                            context: EventKind::Guess,
                            command,
                        },
                        &context,
                    );
                    return;
                }
            };

            let mut letters = guess.chars();
            if let (Some(letter), None) = (letters.next(), letters.next()) {
                game.guess_letter(letter);
            } else {
                game.guess_word(&guess);
            }

            let snapshot = game.clone();
            debug!(
                "guess {:?} in channel {}: {:?}",
                guess,
                channel_id,
                snapshot.last_outcome()
            );
            if snapshot.is_over() {
                info!(
                    "round in channel {} finished {}",
                    channel_id,
                    snapshot.status().as_str()
                );
                self.games.remove(channel_id);
            }
            self.emit(
                GameEvent::Guess {
                    game: snapshot,
                    guess,
                },
                &context,
            );
            return;
        }

        debug!("unrecognized command {:?} in channel {}", command, channel_id);
        self.emit(GameEvent::UnknownRequest { command }, &context);
    }

    /// Deliver an event to every observer registered for its kind.
    fn emit(&self, event: GameEvent, context: &C) {
        if let Some(callbacks) = self.observers.get(&event.kind()) {
            for callback in callbacks {
                callback(&event, context);
            }
        }
    }
}

impl<C> Default for Dispatcher<C> {
    fn default() -> Self {
        Self::new()
    }
}
