use crate::cards::{Card, Rank};

/// Rank values of the wheel (A-2-3-4-5), highest run rank first; Ace plays low.
const WHEEL: [u8; 5] = [5, 4, 3, 2, 14];

/// Five cards of consecutive ranks, ordered from the run's top rank down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightRun {
    /// Highest rank of the run; `Five` for the wheel.
    pub top: Rank,
    pub cards: [Card; 5],
}

impl StraightRun {
    /// Find the highest straight among `cards`.
    ///
    /// Runs are searched from Ace-high downward and the wheel is tried last.
    /// When a rank appears more than once, the first such card is used.
    pub fn find(cards: &[Card]) -> Option<Self> {
        let mut by_rank: [Option<Card>; 15] = [None; 15];
        for &card in cards {
            let slot = &mut by_rank[card.rank().value() as usize];
            if slot.is_none() {
                *slot = Some(card);
            }
        }

        (6..=Rank::Ace.value())
            .rev()
            .find_map(|top| Self::collect(&by_rank, [top, top - 1, top - 2, top - 3, top - 4]))
            .or_else(|| Self::collect(&by_rank, WHEEL))
    }

    fn collect(by_rank: &[Option<Card>; 15], values: [u8; 5]) -> Option<Self> {
        let mut cards = [by_rank[values[0] as usize]?; 5];
        for (slot, v) in cards.iter_mut().zip(values).skip(1) {
            *slot = by_rank[v as usize]?;
        }
        Some(StraightRun { top: cards[0].rank(), cards })
    }
}
