use crate::cards::{Card, Rank};

/// Cards grouped by rank, highest rank first.
///
/// Example: pool `7H AS 7S KC 7D` groups as `[(A, [AS]), (K, [KC]), (7, [7H, 7S, 7D])]`.
/// Within a group cards keep the order they were given in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, Vec<Card>)>,
}

impl RankGroups {
    /// Group cards that are already ordered by descending rank.
    pub fn from_sorted(sorted: &[Card]) -> Self {
        let mut groups: Vec<(Rank, Vec<Card>)> = Vec::new();
        for &card in sorted {
            match groups.last_mut() {
                Some((rank, cards)) if *rank == card.rank() => cards.push(card),
                _ => groups.push((card.rank(), vec![card])),
            }
        }
        debug_assert!(groups.windows(2).all(|w| w[0].0 > w[1].0), "input must be rank-sorted");
        Self { groups }
    }

    /// Ranks holding at least `min` cards, highest first.
    pub fn with_at_least(&self, min: usize) -> impl Iterator<Item = (Rank, &[Card])> + '_ {
        self.groups
            .iter()
            .filter(move |(_, cards)| cards.len() >= min)
            .map(|(rank, cards)| (*rank, cards.as_slice()))
    }

    /// The highest rank holding at least `min` cards.
    pub fn highest_with_at_least(&self, min: usize) -> Option<(Rank, &[Card])> {
        self.with_at_least(min).next()
    }

    /// The highest rank other than `excluded` holding at least `min` cards.
    pub fn highest_with_at_least_except(
        &self,
        min: usize,
        excluded: Rank,
    ) -> Option<(Rank, &[Card])> {
        self.with_at_least(min).find(|(rank, _)| *rank != excluded)
    }

    #[cfg(test)]
    pub fn ranks(&self) -> Vec<Rank> {
        self.groups.iter().map(|(r, _)| *r).collect()
    }
}
