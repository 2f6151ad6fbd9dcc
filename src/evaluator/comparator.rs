use super::{Category, Evaluation};
use crate::cards::Rank;
use core::cmp::Ordering;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u64);

const CAT_SHIFT: u32 = 48;
const RANK_STRIDE: u32 = 6;

impl HandValue {
    /// Pack a category and five rank tiebreakers into a comparable value.
    ///
    /// `tiebreak` lists the ranks that decide between two hands of the same
    /// category, most significant first; unused slots hold `Rank::Two`.
    pub fn from_parts(category: Category, tiebreak: &[Rank; 5]) -> Self {
        // [ category (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 18 zero bits ]
        let mut v: u64 = (category.ordinal() as u64) << CAT_SHIFT;
        for (i, r) in tiebreak.iter().enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (r.value() as u64) << offset;
        }
        HandValue(v)
    }

    /// The tiebreak ranks this value was packed from.
    pub fn tiebreak(self) -> [Rank; 5] {
        core::array::from_fn(|i| {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            let v = ((self.0 >> offset) & 0x3f) as u8;
            Rank::from_value(v).unwrap_or(Rank::Two)
        })
    }
}

/// Order two classified hands: category first, then the category's tiebreak
/// ranks. `Equal` means the pot is split between them.
///
/// ```
/// use holdem_showdown::cards::parse_cards;
/// use holdem_showdown::evaluator::{compare_hands, evaluate_cards};
///
/// let flush = evaluate_cards(&parse_cards("9S 8S 7S 6C 5D TS 2S").unwrap()).unwrap();
/// let straight = evaluate_cards(&parse_cards("9S 8S 7S 6C 5D 4H 3H").unwrap()).unwrap();
/// assert!(compare_hands(&flush, &straight).is_gt());
/// ```
pub fn compare_hands(a: &Evaluation, b: &Evaluation) -> Ordering {
    a.category.cmp(&b.category).then_with(|| a.value.cmp(&b.value))
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_hands(self, other)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Evaluation {}
