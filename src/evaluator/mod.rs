#[cfg(test)]
mod combinations;
mod comparator;
pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

pub use comparator::{compare_hands, HandValue};

use crate::cards::{Card, Rank};
use crate::hand::{HandError, Pool};
use core::cmp::Ordering;
use serde::{Serialize, Serializer};
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Human readable category name, e.g. `"Three of a Kind"`.
    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A classified hand: its category and the five cards that make it.
///
/// `best_five` is laid out per category (matched groups first, then kickers,
/// each by descending rank; straights from the run's top card down, so the
/// wheel reads `5 4 3 2 A`). Ordering uses the tiebreak key packed into
/// [`HandValue`], never the card positions or suits.
#[derive(Debug, Clone, Copy, Serialize)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    #[serde(rename = "chosen5")]
    pub best_five: [Card; 5],
    #[serde(skip)]
    value: HandValue,
}

impl Evaluation {
    pub(crate) fn new(category: Category, best_five: [Card; 5], tiebreak: [Rank; 5]) -> Self {
        let value = HandValue::from_parts(category, &tiebreak);
        Self { category, best_five, value }
    }

    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }

    /// Ranks that decide ties within the category, most significant first.
    pub fn tiebreak(&self) -> [Rank; 5] {
        self.value.tiebreak()
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (i, card) in self.best_five.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("]")
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
}

/// Classify a pool: run the category detectors strongest first and keep the
/// first match.
pub fn evaluate_pool(pool: &Pool) -> Evaluation {
    use detector::DETECTORS;
    use hand_analysis::PoolAnalysis;

    let analysis = PoolAnalysis::new(pool.as_slice());

    DETECTORS
        .iter()
        .find_map(|detector| detector.detect(&analysis))
        // Unreachable: HighCard matches every pool of MIN_CARDS or more.
        .unwrap_or_else(|| unreachable!("HighCard detector should always match"))
}

/// Validate `cards` as a pool and classify it.
pub fn evaluate_cards(cards: &[Card]) -> Result<Evaluation, EvalError> {
    let pool = Pool::try_new(cards.to_vec())?;
    Ok(evaluate_pool(&pool))
}

/// Evaluate a Hold'em hand given a board and one player's hole cards.
///
/// ```
/// use holdem_showdown::cards::parse_cards;
/// use holdem_showdown::evaluator::{evaluate_holdem, Category};
///
/// let board = parse_cards("AS 2D 3H 9S KC").unwrap();
/// let hole = parse_cards("4D 5C").unwrap();
/// let eval = evaluate_holdem(&board, &hole).unwrap();
/// assert_eq!(eval.category, Category::Straight);
/// assert_eq!(eval.best_five.map(|c| c.to_string()), ["5C", "4D", "3H", "2D", "AS"]);
/// ```
pub fn evaluate_holdem(board: &[Card], hole: &[Card]) -> Result<Evaluation, EvalError> {
    let pool = Pool::from_parts(board, hole)?;
    Ok(evaluate_pool(&pool))
}

/// Compare two Hold'em hands on a shared board. Returns the ordering or a validation error.
///
/// ```
/// use holdem_showdown::cards::parse_cards;
/// use holdem_showdown::evaluator::compare_holdem;
///
/// let board = parse_cards("QC JD 9H 3S 2C").unwrap();
/// let aces = parse_cards("AS AH").unwrap();
/// let kings = parse_cards("KS KH").unwrap();
/// assert!(compare_holdem(&aces, &kings, &board).unwrap().is_gt());
/// ```
pub fn compare_holdem(a: &[Card], b: &[Card], board: &[Card]) -> Result<Ordering, EvalError> {
    let va = evaluate_holdem(board, a)?;
    let vb = evaluate_holdem(board, b)?;
    Ok(compare_hands(&va, &vb))
}
