//! Hangman round state.
//!
//! Tracks one round: the target word, which letters remain hidden, every
//! guess so far, the revealed-letter board, and the failure drawing. The
//! registry at the bottom maps channels to their active round.

use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::state::board::Board;
use crate::state::gallows::{Gallows, STAGE_COUNT};
use crate::util;

/// Round outcome states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Letters remain hidden and the drawing is unfinished
    InProgress,
    /// Every letter revealed, or the word guessed outright
    Won,
    /// The drawing reached its final stage
    Lost,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InProgress => "in_progress",
            Self::Won => "won",
            Self::Lost => "lost",
        }
    }

    /// Check if the round is over (cannot change).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Outcome of the most recent guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess revealed letters or matched the word
    Correct,
    /// The guess revealed nothing
    Incorrect,
}

impl GuessOutcome {
    pub fn is_correct(&self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Word rejected at round creation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("hangman word must be one or more ascii letters, got {word:?}")]
pub struct InvalidWord {
    pub word: String,
}

/// One hangman round.
#[derive(Debug, Clone)]
pub struct Game {
    /// The target word, lowercase
    word: String,

    /// Letters of `word` not yet revealed
    remaining: HashSet<char>,

    /// Every letter guessed so far, right or wrong
    guessed_letters: HashSet<char>,

    /// Every whole-word guess so far
    guessed_words: HashSet<String>,

    /// Player-visible revealed letters
    board: Board,

    /// Failure drawing
    gallows: Gallows,

    /// Issuer who started the round
    creator: String,

    /// Outcome of the most recent guess, unset until the first guess
    last_outcome: Option<GuessOutcome>,

    /// When the round was created
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Game {
    /// Create a round for `word`, started by `creator`.
    ///
    /// The word is lowercased before storing and guesses are matched against
    /// the lowercase form. Anything other than one or more ascii letters is
    /// rejected.
    pub fn new(word: &str, creator: &str) -> Result<Self, InvalidWord> {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(InvalidWord {
                word: word.to_string(),
            });
        }

        let word = word.to_ascii_lowercase();
        Ok(Self {
            remaining: word.chars().collect(),
            guessed_letters: HashSet::new(),
            guessed_words: HashSet::new(),
            board: Board::new(word.len()),
            gallows: Gallows::new(),
            creator: creator.to_string(),
            last_outcome: None,
            created_at: chrono::Utc::now(),
            word,
        })
    }

    /// Guess a single letter.
    ///
    /// Reveals every occurrence when the letter is still hidden, returning
    /// true. Any other guess returns false, and a wrong letter not tried
    /// before also advances the drawing. No-op once the round is over.
    pub fn guess_letter(&mut self, letter: char) -> bool {
        if self.is_over() {
            return false;
        }

        let letter = letter.to_ascii_lowercase();
        let positions = util::find_all(&self.word, &letter.to_string());

        let revealed = match (positions, self.remaining.contains(&letter)) {
            (Some(positions), true) => {
                self.board.reveal(letter, &positions);
                self.remaining.remove(&letter);
                self.last_outcome = Some(GuessOutcome::Correct);
                true
            }
            _ => {
                if !self.guessed_letters.contains(&letter) {
                    self.gallows.advance();
                }
                self.last_outcome = Some(GuessOutcome::Incorrect);
                false
            }
        };

        self.guessed_letters.insert(letter);
        revealed
    }

    /// Guess the whole word.
    ///
    /// An exact match clears every remaining letter, winning the round
    /// outright; the board stays as-is since nothing was revealed letter by
    /// letter. A wrong word not tried before advances the drawing. No-op
    /// once the round is over.
    pub fn guess_word(&mut self, word: &str) {
        if self.is_over() {
            return;
        }

        let word = word.to_ascii_lowercase();
        if word == self.word {
            self.remaining.clear();
            self.last_outcome = Some(GuessOutcome::Correct);
        } else {
            if !self.guessed_words.contains(&word) {
                self.gallows.advance();
            }
            self.last_outcome = Some(GuessOutcome::Incorrect);
        }
        self.guessed_words.insert(word);
    }

    /// Current round status.
    pub fn status(&self) -> GameStatus {
        if self.remaining.is_empty() {
            GameStatus::Won
        } else if self.gallows.is_final() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Check if the round is over, won or lost.
    pub fn is_over(&self) -> bool {
        self.status().is_terminal()
    }

    /// Outcome of the most recent guess. `None` before the first guess.
    pub fn last_outcome(&self) -> Option<GuessOutcome> {
        self.last_outcome
    }

    /// The target word, lowercase.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Issuer who started the round.
    pub fn creator(&self) -> &str {
        &self.creator
    }

    /// The revealed-letter board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The failure drawing.
    pub fn gallows(&self) -> &Gallows {
        &self.gallows
    }

    /// Letters guessed so far, in no particular order.
    pub fn guessed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed_letters.iter().copied()
    }

    /// Whole words guessed so far, in no particular order.
    pub fn guessed_words(&self) -> impl Iterator<Item = &str> {
        self.guessed_words.iter().map(String::as_str)
    }

    /// How many letters of the word are still hidden.
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    /// Full rendering: drawing, board row, and guess history.
    pub fn display_state(&self) -> String {
        format!(
            "{}\n{}\nGuessed letters: {}\nGuessed words: {}",
            self.gallows.render(),
            self.board.spaced(),
            util::join_sorted(self.guessed_letters.iter()),
            util::join_sorted(self.guessed_words.iter()),
        )
    }

    /// Convert the round to a JSON snapshot.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "word": self.word,
            "creator": self.creator,
            "status": self.status().as_str(),
            "board": self.board.compact(),
            "board_spaced": self.board.spaced(),
            "failure_stage": self.gallows.stage(),
            "final_stage": STAGE_COUNT - 1,
            "guessed_letters": util::join_sorted(self.guessed_letters.iter()),
            "guessed_words": util::join_sorted(self.guessed_words.iter()),
            "last_guess_valid": self.last_outcome.map(|outcome| outcome.is_correct()),
            "created_at": self.created_at
        })
    }
}

/// Per-channel round registry - at most one active round per channel.
#[derive(Debug, Default)]
pub struct GameRegistry {
    games: HashMap<String, Game>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a round for a channel, displacing any active one.
    ///
    /// Returns the displaced round when the channel already had one.
    pub fn insert(&mut self, channel_id: &str, game: Game) -> Option<Game> {
        self.games.insert(channel_id.to_string(), game)
    }

    /// Get a channel's active round.
    pub fn get(&self, channel_id: &str) -> Option<&Game> {
        self.games.get(channel_id)
    }

    /// Get a channel's active round, mutable.
    pub fn get_mut(&mut self, channel_id: &str) -> Option<&mut Game> {
        self.games.get_mut(channel_id)
    }

    /// Remove and return a channel's round.
    pub fn remove(&mut self, channel_id: &str) -> Option<Game> {
        self.games.remove(channel_id)
    }

    /// Check if a channel has an active round.
    pub fn contains(&self, channel_id: &str) -> bool {
        self.games.contains_key(channel_id)
    }

    /// Number of active rounds.
    pub fn count(&self) -> usize {
        self.games.len()
    }

    /// Channels with an active round.
    pub fn channel_ids(&self) -> impl Iterator<Item = &str> {
        self.games.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_game(word: &str) -> Game {
        Game::new(word, "alice").unwrap()
    }

    #[test]
    fn test_new_game_masks_every_letter() {
        let game = make_game("banana");
        assert_eq!(game.word(), "banana");
        assert_eq!(game.creator(), "alice");
        assert_eq!(game.board().spaced(), "* * * * * *");
        assert_eq!(game.remaining_count(), 3); // b, a, n
        assert_eq!(game.last_outcome(), None);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_over());
    }

    #[test]
    fn test_new_game_lowercases_word() {
        let mut game = make_game("BaNaNa");
        assert_eq!(game.word(), "banana");
        assert!(game.guess_letter('B'));
        assert_eq!(game.board().compact(), "b*****");
    }

    #[test]
    fn test_new_game_rejects_bad_words() {
        assert!(Game::new("", "alice").is_err());
        assert!(Game::new("abc123", "alice").is_err());
        assert!(Game::new("two words", "alice").is_err());
        assert!(Game::new("caf\u{e9}", "alice").is_err());

        let err = Game::new("123", "alice").unwrap_err();
        assert_eq!(err.word, "123");
    }

    #[test]
    fn test_correct_letter_reveals_every_occurrence() {
        let mut game = make_game("banana");
        assert!(game.guess_letter('a'));
        assert_eq!(game.board().spaced(), "* a * a * a");
        assert_eq!(game.board().compact(), "*a*a*a");
        assert_eq!(game.last_outcome(), Some(GuessOutcome::Correct));
        assert_eq!(game.gallows().stage(), 0);
        assert_eq!(game.remaining_count(), 2);
    }

    #[test]
    fn test_wrong_letter_advances_drawing() {
        let mut game = make_game("banana");
        assert!(!game.guess_letter('z'));
        assert_eq!(game.last_outcome(), Some(GuessOutcome::Incorrect));
        assert_eq!(game.gallows().stage(), 1);
        assert!(game.guessed_letters().any(|l| l == 'z'));
    }

    #[test]
    fn test_repeated_wrong_letter_advances_once() {
        let mut game = make_game("banana");
        game.guess_letter('z');
        game.guess_letter('z');
        game.guess_letter('Z'); // case-insensitive repeat
        assert_eq!(game.gallows().stage(), 1);
    }

    #[test]
    fn test_repeated_correct_letter_is_invalid_without_penalty() {
        let mut game = make_game("banana");
        assert!(game.guess_letter('a'));
        assert!(!game.guess_letter('a'));
        assert_eq!(game.last_outcome(), Some(GuessOutcome::Incorrect));
        assert_eq!(game.gallows().stage(), 0);
    }

    #[test]
    fn test_win_by_letters_any_order() {
        for order in [['b', 'a', 'n'], ['n', 'b', 'a'], ['a', 'n', 'b']] {
            let mut game = make_game("banana");
            for letter in order {
                game.guess_letter(letter);
            }
            assert!(game.is_over());
            assert_eq!(game.status(), GameStatus::Won);
            assert_eq!(game.remaining_count(), 0);
            assert_eq!(game.board().compact(), "banana");
        }
    }

    #[test]
    fn test_word_guess_wins_instantly() {
        let mut game = make_game("banana");
        game.guess_word("BANANA");
        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.remaining_count(), 0);
        assert_eq!(game.last_outcome(), Some(GuessOutcome::Correct));
        assert!(game.guessed_words().any(|w| w == "banana"));
        // The board stays masked; announcing the word is the host's job.
        assert_eq!(game.board().compact(), "******");
    }

    #[test]
    fn test_wrong_word_advances_drawing_once() {
        let mut game = make_game("banana");
        game.guess_word("bandana");
        game.guess_word("bandana");
        assert_eq!(game.gallows().stage(), 1);
        assert_eq!(game.last_outcome(), Some(GuessOutcome::Incorrect));
        assert!(game.guessed_words().any(|w| w == "bandana"));
    }

    #[test]
    fn test_seven_distinct_misses_lose_the_round() {
        let mut game = make_game("banana");
        for letter in ['c', 'd', 'e', 'f', 'g', 'h'] {
            assert!(!game.guess_letter(letter));
            assert!(!game.is_over());
        }
        game.guess_word("xylophone");
        assert_eq!(game.status(), GameStatus::Lost);
        assert!(game.is_over());
        assert_eq!(game.gallows().stage(), STAGE_COUNT - 1);
    }

    #[test]
    fn test_no_mutation_after_win() {
        let mut game = make_game("ab");
        game.guess_word("ab");
        assert!(game.is_over());

        assert!(!game.guess_letter('z'));
        game.guess_word("zzz");

        assert_eq!(game.status(), GameStatus::Won);
        assert_eq!(game.gallows().stage(), 0);
        assert!(!game.guessed_letters().any(|l| l == 'z'));
        assert!(!game.guessed_words().any(|w| w == "zzz"));
    }

    #[test]
    fn test_no_mutation_after_loss() {
        let mut game = make_game("ab");
        for letter in ['c', 'd', 'e', 'f', 'g', 'h', 'i'] {
            game.guess_letter(letter);
        }
        assert_eq!(game.status(), GameStatus::Lost);

        // A would-be correct guess no longer reveals anything.
        assert!(!game.guess_letter('a'));
        assert_eq!(game.board().compact(), "**");
        assert_eq!(game.remaining_count(), 2);
    }

    #[test]
    fn test_display_state_sorts_guesses() {
        let mut game = make_game("banana");
        game.guess_letter('n');
        game.guess_letter('b');
        game.guess_word("bonobo");
        game.guess_word("bandana");

        let display = game.display_state();
        assert!(display.contains("Guessed letters: b,n"));
        assert!(display.contains("Guessed words: bandana,bonobo"));
    }

    #[test]
    fn test_display_state_composition() {
        let mut game = make_game("banana");
        game.guess_letter('a');

        let expected = format!(
            "{}\n* a * a * a\nGuessed letters: a\nGuessed words: ",
            game.gallows().render()
        );
        assert_eq!(game.display_state(), expected);
    }

    #[test]
    fn test_to_json_snapshot() {
        let mut game = make_game("banana");
        game.guess_letter('a');
        game.guess_word("bandana");

        let snapshot = game.to_json();
        assert_eq!(snapshot["word"], "banana");
        assert_eq!(snapshot["creator"], "alice");
        assert_eq!(snapshot["status"], "in_progress");
        assert_eq!(snapshot["board"], "*a*a*a");
        assert_eq!(snapshot["board_spaced"], "* a * a * a");
        assert_eq!(snapshot["failure_stage"], 1);
        assert_eq!(snapshot["final_stage"], 7);
        assert_eq!(snapshot["guessed_letters"], "a");
        assert_eq!(snapshot["guessed_words"], "bandana");
        assert_eq!(snapshot["last_guess_valid"], false);
        assert!(snapshot["created_at"].is_string());
    }

    #[test]
    fn test_to_json_before_first_guess() {
        let snapshot = make_game("banana").to_json();
        assert!(snapshot["last_guess_valid"].is_null());
    }

    #[test]
    fn test_registry_replace_returns_displaced_round() {
        let mut registry = GameRegistry::new();
        assert!(registry.insert("c1", make_game("banana")).is_none());

        let displaced = registry.insert("c1", Game::new("kiwi", "bob").unwrap());
        assert_eq!(displaced.unwrap().word(), "banana");
        assert_eq!(registry.count(), 1);
        assert_eq!(registry.get("c1").unwrap().creator(), "bob");
    }

    #[test]
    fn test_registry_channels_are_independent() {
        let mut registry = GameRegistry::new();
        registry.insert("c1", make_game("banana"));
        registry.insert("c2", make_game("kiwi"));

        registry.get_mut("c1").unwrap().guess_letter('z');
        assert_eq!(registry.get("c1").unwrap().gallows().stage(), 1);
        assert_eq!(registry.get("c2").unwrap().gallows().stage(), 0);

        assert!(registry.remove("c2").is_some());
        assert!(!registry.contains("c2"));
        assert!(registry.contains("c1"));
        assert_eq!(registry.channel_ids().collect::<Vec<_>>(), ["c1"]);
    }
}
