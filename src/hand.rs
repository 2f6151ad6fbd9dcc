use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("need at least {min} cards to evaluate, got {0}", min = Pool::MIN_CARDS)]
    NotEnoughCards(usize),
    #[error("duplicate card in pool: {0}")]
    DuplicateCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// The cards one player can build a hand from: the shared board plus that
/// player's hole cards.
///
/// Card order is kept as given (board first when built with
/// [`Pool::from_parts`]); among cards of equal rank it decides which ones are
/// reported in the chosen five.
///
/// ```
/// use holdem_showdown::cards::parse_cards;
/// use holdem_showdown::hand::Pool;
///
/// let board = parse_cards("AS KD 7H 4S 2C").unwrap();
/// let hole = parse_cards("9D 3C").unwrap();
/// let pool = Pool::from_parts(&board, &hole).unwrap();
/// assert_eq!(pool.len(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    cards: Vec<Card>,
}

impl Pool {
    /// Smallest pool a five-card hand can be drawn from.
    pub const MIN_CARDS: usize = 5;

    pub fn try_new(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() < Self::MIN_CARDS {
            return Err(HandError::NotEnoughCards(cards.len()));
        }
        let mut seen = HashSet::with_capacity(cards.len());
        if let Some(dup) = cards.iter().find(|c| !seen.insert(**c)) {
            return Err(HandError::DuplicateCard(*dup));
        }
        Ok(Self { cards })
    }

    /// Build a pool from board cards followed by hole cards.
    pub fn from_parts(board: &[Card], hole: &[Card]) -> Result<Self, HandError> {
        let mut cards = Vec::with_capacity(board.len() + hole.len());
        cards.extend_from_slice(board);
        cards.extend_from_slice(hole);
        Self::try_new(cards)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false for a constructed pool; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

}

impl FromStr for Pool {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Pool::try_new(cards)
    }
}
