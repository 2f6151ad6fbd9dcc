use crate::cards::{Card, Suit};

/// Cards grouped by suit. Groups are visited in `Suit::ALL` order; that order
/// decides which flush is reported if more than one suit qualifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitGroups {
    groups: [Vec<Card>; 4],
}

impl SuitGroups {
    /// Minimum suited cards for a flush.
    pub const FLUSH_LEN: usize = 5;

    /// Split cards by suit, keeping their relative order.
    pub fn from_sorted(sorted: &[Card]) -> Self {
        let mut groups: [Vec<Card>; 4] = Default::default();
        for &card in sorted {
            groups[card.suit().index()].push(card);
        }
        Self { groups }
    }

    /// Every suit holding enough cards for a flush.
    pub fn flushes(&self) -> impl Iterator<Item = (Suit, &[Card])> + '_ {
        Suit::ALL
            .into_iter()
            .map(|suit| (suit, self.groups[suit.index()].as_slice()))
            .filter(|(_, cards)| cards.len() >= Self::FLUSH_LEN)
    }

    pub fn first_flush(&self) -> Option<(Suit, &[Card])> {
        self.flushes().next()
    }
}
