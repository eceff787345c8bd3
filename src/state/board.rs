//! Player-visible revealed-letter row.

/// Slot value shown for letters not yet revealed.
pub const PLACEHOLDER: char = '*';

/// The revealed-letter row for one round.
///
/// One slot per letter of the target word, fully masked at creation and
/// filled in slot by slot as letters are confirmed.
#[derive(Debug, Clone)]
pub struct Board {
    slots: Vec<char>,
}

impl Board {
    /// Fully masked board for a word of `len` letters.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![PLACEHOLDER; len],
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the board has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Reveal `letter` at each of the given positions.
    ///
    /// Positions outside the board are ignored.
    pub fn reveal(&mut self, letter: char, positions: &[usize]) {
        for &pos in positions {
            if let Some(slot) = self.slots.get_mut(pos) {
                *slot = letter;
            }
        }
    }

    /// Slots joined without separators, e.g. `*a*a*a`.
    pub fn compact(&self) -> String {
        self.slots.iter().collect()
    }

    /// Slots joined by single spaces, e.g. `* a * a * a`.
    pub fn spaced(&self) -> String {
        self.slots
            .iter()
            .map(|slot| slot.to_string())
            .collect::<Vec<String>>()
            .join(" ")
    }
}
