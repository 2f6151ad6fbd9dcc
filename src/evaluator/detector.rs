use super::hand_analysis::{assemble, PoolAnalysis};
use super::straight_info::StraightRun;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation};

/// Strategy pattern: each detector either finds the best five cards of its
/// category in a pool or reports that the category is absent.
///
/// A detector fixes the layout of its five cards (groups first, then kickers,
/// each descending) and the tiebreak ranks that go with it.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &PoolAnalysis) -> Option<Evaluation>;
}

fn ranks_at(cards: &[Card; 5], positions: &[usize]) -> [Rank; 5] {
    let mut tiebreak = [Rank::Two; 5];
    for (slot, &pos) in tiebreak.iter_mut().zip(positions) {
        *slot = cards[pos].rank();
    }
    tiebreak
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: a straight within a single suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &PoolAnalysis) -> Option<Evaluation> {
        let run = analysis.suit_groups.flushes().find_map(|(_, suited)| StraightRun::find(suited))?;
        Some(Evaluation::new(self.category(), run.cards, ranks_at(&run.cards, &[0])))
    }
}

/// Four of a Kind: quads plus the best kicker
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &PoolAnalysis) -> Option<Evaluation> {
        let (quad, cards) = analysis.rank_groups.highest_with_at_least(4)?;
        let kicker = analysis.kickers(&[quad], 1);
        let five = assemble(&[&cards[..4], kicker.as_slice()])?;
        Some(Evaluation::new(self.category(), five, ranks_at(&five, &[0, 4])))
    }
}

/// Full House: the best trips plus the best other rank holding a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &PoolAnalysis) -> Option<Evaluation> {
        let (trips, trip_cards) = analysis.rank_groups.highest_with_at_least(3)?;
        // A second set of trips qualifies here too and plays as the pair.
        let (_, pair_cards) = analysis.rank_groups.highest_with_at_least_except(2, trips)?;
        let five = assemble(&[&trip_cards[..3], &pair_cards[..2]])?;
        Some(Evaluation::new(self.category(), five, ranks_at(&five, &[0, 3])))
    }
}

/// Flush: the five highest cards of a suit holding five or more
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &PoolAnalysis) -> Option<Evaluation> {
        let (_, suited) = analysis.suit_groups.first_flush()?;
        let five = assemble(&[&suited[..5]])?;
        Some(Evaluation::new(self.category(), five, ranks_at(&five, &[0, 1, 2, 3, 4])))
    }
}

/// Straight: five consecutive ranks, Ace high or low
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &PoolAnalysis) -> Option<Evaluation> {
        let run = StraightRun::find(&analysis.sorted)?;
        Some(Evaluation::new(self.category(), run.cards, ranks_at(&run.cards, &[0])))
    }
}

/// Three of a Kind: trips plus two kickers
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &PoolAnalysis) -> Option<Evaluation> {
        let (trips, cards) = analysis.rank_groups.highest_with_at_least(3)?;
        let kickers = analysis.kickers(&[trips], 2);
        let five = assemble(&[&cards[..3], kickers.as_slice()])?;
        Some(Evaluation::new(self.category(), five, ranks_at(&five, &[0, 3, 4])))
    }
}

/// Two Pair: the two best pairs plus one kicker
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &PoolAnalysis) -> Option<Evaluation> {
        let mut pairs = analysis.rank_groups.with_at_least(2);
        let (high, high_cards) = pairs.next()?;
        let (low, low_cards) = pairs.next()?;
        let kicker = analysis.kickers(&[high, low], 1);
        let five = assemble(&[&high_cards[..2], &low_cards[..2], kicker.as_slice()])?;
        Some(Evaluation::new(self.category(), five, ranks_at(&five, &[0, 2, 4])))
    }
}

/// One Pair: the best pair plus three kickers
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::OnePair
    }

    fn detect(&self, analysis: &PoolAnalysis) -> Option<Evaluation> {
        let (pair, cards) = analysis.rank_groups.highest_with_at_least(2)?;
        let kickers = analysis.kickers(&[pair], 3);
        let five = assemble(&[&cards[..2], kickers.as_slice()])?;
        Some(Evaluation::new(self.category(), five, ranks_at(&five, &[0, 2, 3, 4])))
    }
}

/// High Card: the five highest cards; matches any pool of five or more
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, analysis: &PoolAnalysis) -> Option<Evaluation> {
        let five = assemble(&[analysis.sorted.get(..5)?])?;
        Some(Evaluation::new(self.category(), five, ranks_at(&five, &[0, 1, 2, 3, 4])))
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analysis(s: &str) -> PoolAnalysis {
        PoolAnalysis::new(&parse_cards(s).unwrap())
    }

    fn best_five(e: &Evaluation) -> Vec<Card> {
        e.best_five.to_vec()
    }

    #[test]
    fn detectors_are_listed_strongest_first() {
        let cats: Vec<Category> = DETECTORS.iter().map(|d| d.category()).collect();
        assert!(cats.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(cats.len(), 9);
    }

    #[test]
    fn test_straight_flush_detector() {
        let a = analysis("AS KS QS 2D 3C JS TS");
        let eval = StraightFlushDetector.detect(&a).unwrap();
        assert_eq!(eval.category, Category::StraightFlush);
        assert_eq!(best_five(&eval), parse_cards("AS KS QS JS TS").unwrap());
    }

    #[test]
    fn straight_flush_needs_the_run_inside_one_suit() {
        // Flush in spades and a straight using the off-suit 6.
        let a = analysis("9S 8S 7S 6C 5S 2S KD");
        assert!(StraightFlushDetector.detect(&a).is_none());
        assert!(FlushDetector.detect(&a).is_some());
        assert!(StraightDetector.detect(&a).is_some());
    }

    #[test]
    fn steel_wheel_is_five_high() {
        let a = analysis("AH 2H 3H 4H 5H KD QC");
        let eval = StraightFlushDetector.detect(&a).unwrap();
        assert_eq!(best_five(&eval), parse_cards("5H 4H 3H 2H AH").unwrap());
        assert_eq!(eval.tiebreak()[0], Rank::Five);
    }

    #[test]
    fn test_four_of_a_kind_detector() {
        let a = analysis("AS AD AH 7S KC AC 2C");
        let eval = FourOfAKindDetector.detect(&a).unwrap();
        assert_eq!(best_five(&eval), parse_cards("AS AD AH AC KC").unwrap());
        assert!(FourOfAKindDetector.detect(&analysis("AS AD AH 7S KC")).is_none());
    }

    #[test]
    fn test_full_house_detector() {
        let a = analysis("AS AD 7H 7S KC 7D 2C");
        let eval = FullHouseDetector.detect(&a).unwrap();
        assert_eq!(best_five(&eval), parse_cards("7H 7S 7D AS AD").unwrap());
    }

    #[test]
    fn second_trips_play_as_the_pair() {
        let a = analysis("9S 9D 9H 4C 4D 4H KS");
        let eval = FullHouseDetector.detect(&a).unwrap();
        assert_eq!(best_five(&eval), parse_cards("9S 9D 9H 4C 4D").unwrap());
    }

    #[test]
    fn quads_alone_are_not_a_full_house() {
        let a = analysis("AS AD AH AC KC QD JH");
        assert!(FullHouseDetector.detect(&a).is_none());
    }

    #[test]
    fn test_flush_detector() {
        let a = analysis("AS QS 9S 2S KC 7S 3C");
        let eval = FlushDetector.detect(&a).unwrap();
        assert_eq!(best_five(&eval), parse_cards("AS QS 9S 7S 2S").unwrap());
    }

    #[test]
    fn test_straight_detector() {
        let a = analysis("AS 2D 3H 9S KC 4D 5C");
        let eval = StraightDetector.detect(&a).unwrap();
        assert_eq!(best_five(&eval), parse_cards("5C 4D 3H 2D AS").unwrap());
    }

    #[test]
    fn test_three_of_a_kind_detector() {
        let a = analysis("AS KD 7H 4S 2C 7D 7C");
        let eval = ThreeOfAKindDetector.detect(&a).unwrap();
        assert_eq!(best_five(&eval), parse_cards("7H 7D 7C AS KD").unwrap());
    }

    #[test]
    fn test_two_pair_detector() {
        let a = analysis("AS KD 7H 4S 2C 7D 2D");
        let eval = TwoPairDetector.detect(&a).unwrap();
        assert_eq!(best_five(&eval), parse_cards("7H 7D 2C 2D AS").unwrap());
    }

    #[test]
    fn third_pair_can_supply_the_kicker() {
        let a = analysis("KS KD QH QS 2C 2D JC");
        let eval = TwoPairDetector.detect(&a).unwrap();
        assert_eq!(best_five(&eval), parse_cards("KS KD QH QS JC").unwrap());

        let a = analysis("KS KD QH QS 9C 9D 3C");
        let eval = TwoPairDetector.detect(&a).unwrap();
        assert_eq!(best_five(&eval), parse_cards("KS KD QH QS 9C").unwrap());
    }

    #[test]
    fn test_one_pair_detector() {
        let a = analysis("AS KD 7H 4S 2C 7D 3C");
        let eval = OnePairDetector.detect(&a).unwrap();
        assert_eq!(best_five(&eval), parse_cards("7H 7D AS KD 4S").unwrap());
    }

    #[test]
    fn test_high_card_detector() {
        let a = analysis("AS KD 7H 4S 2C 9D 3C");
        let eval = HighCardDetector.detect(&a).unwrap();
        assert_eq!(best_five(&eval), parse_cards("AS KD 9D 7H 4S").unwrap());
    }

    #[test]
    fn tiebreak_follows_category_layout() {
        let a = analysis("AS KD 7H 4S 2C 7D 2D");
        let eval = TwoPairDetector.detect(&a).unwrap();
        assert_eq!(eval.tiebreak(), [Rank::Seven, Rank::Two, Rank::Ace, Rank::Two, Rank::Two]);

        let a = analysis("AS AD AH 7S KC AC 2C");
        let eval = FourOfAKindDetector.detect(&a).unwrap();
        assert_eq!(eval.tiebreak()[..2], [Rank::Ace, Rank::King]);
    }
}
