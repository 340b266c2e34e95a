//! Deck generation: uniform symbol selection and shuffling.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use super::entities::{Card, Symbol, Theme};

/// Errors that can occur while generating a deck. These surface at
/// configuration time, before a session starts.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum DeckError {
    #[error("theme '{theme}' has {available} symbols but {needed} pairs are needed")]
    InsufficientSymbols {
        theme: String,
        needed: usize,
        available: usize,
    },
    #[error("deck size must be a positive even number, got {0}")]
    InvalidDeckSize(usize),
}

/// Generate a shuffled, paired deck for a board of `total_cards` cards.
///
/// Selects `total_cards / 2` distinct symbols from the theme (uniformly,
/// without replacement), duplicates them into pairs, shuffles the
/// combined sequence, and assigns contiguous 0-based ids in the final
/// order. Pure over its inputs plus the random source.
pub fn generate<R: Rng + ?Sized>(
    total_cards: usize,
    theme: &Theme,
    rng: &mut R,
) -> Result<Vec<Card>, DeckError> {
    if total_cards == 0 || total_cards % 2 != 0 {
        return Err(DeckError::InvalidDeckSize(total_cards));
    }
    let pairs_needed = total_cards / 2;
    if theme.symbols.len() < pairs_needed {
        return Err(DeckError::InsufficientSymbols {
            theme: theme.name.to_string(),
            needed: pairs_needed,
            available: theme.symbols.len(),
        });
    }

    let mut pool: Vec<&str> = theme.symbols.to_vec();
    pool.shuffle(rng);
    pool.truncate(pairs_needed);

    let mut faces: Vec<&str> = pool.iter().chain(pool.iter()).copied().collect();
    faces.shuffle(rng);

    Ok(faces
        .into_iter()
        .enumerate()
        .map(|(id, face)| Card::face_down(id, Symbol::new(face)))
        .collect())
}
