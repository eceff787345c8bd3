//! Failure progression for a hangman round.
//!
//! Each distinct wrong guess advances a fixed drawing of the scaffold and
//! figure by one stage. Reaching the final stage loses the round.

/// Number of drawing stages, including the empty scaffold.
pub const STAGE_COUNT: usize = 8;

/// One fixed drawing per stage, in order.
const FRAMES: [&str; STAGE_COUNT] = [
    r"        ________
        |      |
        |
        |
        |
        |
  ______|__________
 /      |         /|
/________________/ /
                | /
________________ /",
    r"        ________
        |      |
        |      @
        |
        |
        |
  ______|__________
 /      |         /|
/________________/ /
                | /
________________ /",
    r"        ________
        |      |
        |      @
        |     /
        |
        |
  ______|__________
 /      |         /|
/________________/ /
                | /
________________ /",
    r"        ________
        |      |
        |      @
        |     /|
        |
        |
  ______|__________
 /      |         /|
/________________/ /
                | /
________________ /",
    r"        ________
        |      |
        |      @
        |     /|\
        |
        |
  ______|__________
 /      |         /|
/________________/ /
                | /
________________ /",
    r"        ________
        |      |
        |      @
        |     /|\
        |      |
        |
  ______|__________
 /      |         /|
/________________/ /
                | /
________________ /",
    r"        ________
        |      |
        |      @
        |     /|\
        |      |
        |     /
  ______|__________
 /      |         /|
/________________/ /
                | /
________________ /",
    r"        ________
        |      |
        |      @
        |     \|/
        |      |
        |     / \
  ______|__________
 /      |         /|
/________________/ /
                | /
________________ /",
];

/// Progress of the hangman drawing for one round.
///
/// Transitions are forward-only, one stage at a time, clamped at the final
/// stage.
#[derive(Debug, Clone, Default)]
pub struct Gallows {
    stage: usize,
}

impl Gallows {
    /// Fresh scaffold with nothing drawn.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stage index, `0..STAGE_COUNT`.
    pub fn stage(&self) -> usize {
        self.stage
    }

    /// Advance the drawing by one stage.
    pub fn advance(&mut self) {
        if self.stage < STAGE_COUNT - 1 {
            self.stage += 1;
        }
    }

    /// Check if the figure is fully drawn.
    pub fn is_final(&self) -> bool {
        self.stage == STAGE_COUNT - 1
    }

    /// The drawing for the current stage.
    pub fn render(&self) -> &'static str {
        FRAMES[self.stage]
    }
}
