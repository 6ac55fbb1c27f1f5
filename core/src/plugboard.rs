use enigma_types::{ALPHABET_LEN, Letter};

use crate::errors::PlugboardDefect;

/// Swaps `symbol` with its partner if any pair contains it.
///
/// Works directly on the raw pair list, without validation, so the swap rule
/// can be exercised on its own. For a valid pairing this is an involution.
#[must_use]
pub fn plugboard_swap(symbol: char, pairs: &[[char; 2]]) -> char {
    pairs
        .iter()
        .find_map(|&[a, b]| {
            if symbol == a {
                Some(b)
            } else if symbol == b {
                Some(a)
            } else {
                None
            }
        })
        .unwrap_or(symbol)
}

/// Validated set of disjoint letter pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plugboard {
    pairs: Vec<(Letter, Letter)>,
    wiring: [Letter; ALPHABET_LEN],
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}

impl Plugboard {
    /// No cables: every letter passes straight through.
    #[must_use]
    pub fn empty() -> Self {
        let mut wiring = [Letter::from_index(0); ALPHABET_LEN];
        for letter in Letter::all() {
            wiring[letter.index()] = letter;
        }
        Self {
            pairs: Vec::new(),
            wiring,
        }
    }

    /// Build from symbol pairs. Letters are case-folded.
    pub fn new(pairs: &[[char; 2]]) -> Result<Self, PlugboardDefect> {
        let mut board = Self::empty();
        let mut used = [false; ALPHABET_LEN];

        for &[a, b] in pairs {
            let a = Letter::from_char(a).ok_or(PlugboardDefect::InvalidSymbol(a))?;
            let b = Letter::from_char(b).ok_or(PlugboardDefect::InvalidSymbol(b))?;
            if a == b {
                return Err(PlugboardDefect::SelfPair(a));
            }
            for letter in [a, b] {
                if used[letter.index()] {
                    return Err(PlugboardDefect::ReusedLetter(letter));
                }
                used[letter.index()] = true;
            }
            board.wiring[a.index()] = b;
            board.wiring[b.index()] = a;
            board.pairs.push((a, b));
        }

        Ok(board)
    }

    #[must_use]
    pub fn swap(&self, letter: Letter) -> Letter {
        self.wiring[letter.index()]
    }

    #[must_use]
    pub fn pairs(&self) -> &[(Letter, Letter)] {
        &self.pairs
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
