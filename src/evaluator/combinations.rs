/// Iterator over every 5-element index subset of `0..n`, in lexicographic order.
///
/// Yields C(n, 5) arrays: 1 for a five-card pool, 21 for a Hold'em seven.
pub struct ChooseFive {
    n: usize,
    indices: [usize; 5],
    done: bool,
}

impl ChooseFive {
    pub fn new(n: usize) -> Self {
        Self { n, indices: [0, 1, 2, 3, 4], done: n < 5 }
    }
}

impl Iterator for ChooseFive {
    type Item = [usize; 5];

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let result = self.indices;

        // Find the rightmost index that can still move right.
        match (0..5).rev().find(|&i| self.indices[i] < self.n - (5 - i)) {
            Some(i) => {
                self.indices[i] += 1;
                for j in (i + 1)..5 {
                    self.indices[j] = self.indices[j - 1] + 1;
                }
            }
            None => self.done = true,
        }

        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn counts_match_binomials() {
        assert_eq!(ChooseFive::new(4).count(), 0);
        assert_eq!(ChooseFive::new(5).count(), 1);
        assert_eq!(ChooseFive::new(6).count(), 6);
        assert_eq!(ChooseFive::new(7).count(), 21);
    }

    #[test]
    fn first_and_last_of_seven() {
        let combos: Vec<[usize; 5]> = ChooseFive::new(7).collect();
        assert_eq!(combos.first(), Some(&[0, 1, 2, 3, 4]));
        assert_eq!(combos.last(), Some(&[2, 3, 4, 5, 6]));
    }

    #[test]
    fn combinations_are_valid_and_unique() {
        let mut seen = HashSet::new();
        for combo in ChooseFive::new(7) {
            assert!(combo.iter().all(|&i| i < 7));
            assert!(combo.windows(2).all(|w| w[0] < w[1]));
            assert!(seen.insert(combo), "Duplicate combination found: {combo:?}");
        }
    }

    #[test]
    fn lexicographic_order() {
        let combos: Vec<[usize; 5]> = ChooseFive::new(7).collect();
        assert!(combos.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn exhausted_iterator_stays_empty() {
        let mut iter = ChooseFive::new(5);
        assert!(iter.next().is_some());
        assert!(iter.next().is_none());
        assert!(iter.next().is_none());
    }
}
