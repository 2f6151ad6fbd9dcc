use super::rank_groups::RankGroups;
use super::suit_info::SuitGroups;
use crate::cards::{Card, Rank};

/// Pre-computed view of a pool, built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct PoolAnalysis {
    /// Pool ordered by descending rank; equal ranks keep pool order.
    pub sorted: Vec<Card>,
    pub rank_groups: RankGroups,
    pub suit_groups: SuitGroups,
}

impl PoolAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut sorted = cards.to_vec();
        // Stable: suits carry no weight, so ties fall back to pool order.
        sorted.sort_by(|a, b| b.rank().cmp(&a.rank()));

        let rank_groups = RankGroups::from_sorted(&sorted);
        let suit_groups = SuitGroups::from_sorted(&sorted);

        Self { sorted, rank_groups, suit_groups }
    }

    /// Up to `n` highest cards whose rank is not in `excluded`.
    pub fn kickers(&self, excluded: &[Rank], n: usize) -> Vec<Card> {
        self.sorted.iter().copied().filter(|c| !excluded.contains(&c.rank())).take(n).collect()
    }
}

/// Concatenate card groups into a five-card hand; `None` unless exactly five.
pub fn assemble(parts: &[&[Card]]) -> Option<[Card; 5]> {
    let cards: Vec<Card> = parts.iter().flat_map(|part| part.iter().copied()).collect();
    <[Card; 5]>::try_from(cards).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    #[test]
    fn sort_is_rank_descending_and_stable() {
        let cards = parse_cards("AS AD 7H 7S KC 7D 2C").unwrap();
        let analysis = PoolAnalysis::new(&cards);
        assert_eq!(analysis.sorted, parse_cards("AS AD KC 7H 7S 7D 2C").unwrap());
    }

    #[test]
    fn kickers_skip_excluded_ranks() {
        let cards = parse_cards("AS KD 7H 4S 2C 7D 3C").unwrap();
        let analysis = PoolAnalysis::new(&cards);
        assert_eq!(analysis.kickers(&[Rank::Seven], 3), parse_cards("AS KD 4S").unwrap());
        assert_eq!(analysis.kickers(&[Rank::Ace, Rank::King], 1), parse_cards("7H").unwrap());
    }

    #[test]
    fn kickers_may_run_short() {
        let cards = parse_cards("AS AD AH AC KC").unwrap();
        let analysis = PoolAnalysis::new(&cards);
        assert_eq!(analysis.kickers(&[Rank::Ace], 3), parse_cards("KC").unwrap());
    }

    #[test]
    fn assemble_requires_exactly_five() {
        let cards = parse_cards("AS AD AH AC KC QD").unwrap();
        assert!(assemble(&[&cards[..4], &cards[4..5]]).is_some());
        assert!(assemble(&[&cards[..4]]).is_none());
        assert!(assemble(&[&cards[..]]).is_none());
    }
}
