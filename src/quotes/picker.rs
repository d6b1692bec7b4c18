// Without-replacement quote selection
//
// The picker owns the collection and a consumption pool of indices into it.
// Each draw removes one random pool entry, so every quote is shown exactly
// once per round; the pool refills lazily when it runs dry. The pool is
// always a permutation-subset of the full index range.

use super::Quote;
use rand::Rng;

/// Draws quotes uniformly at random, each once per round
pub struct Picker {
    quotes: Vec<Quote>,
    /// Indices into `quotes` not yet drawn this round
    pool: Vec<usize>,
}

impl Picker {
    pub fn new(quotes: Vec<Quote>) -> Self {
        Self {
            quotes,
            pool: Vec::new(),
        }
    }

    /// Replace the collection (successful reload). Resets the round.
    pub fn reset(&mut self, quotes: Vec<Quote>) {
        self.quotes = quotes;
        self.pool.clear();
    }

    /// Total number of quotes in the collection
    pub fn total(&self) -> usize {
        self.quotes.len()
    }

    /// Quotes not yet drawn in the current round
    pub fn remaining_in_round(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    /// Draw one quote. Returns None only when the collection is empty;
    /// callers guard and no-op in that case.
    pub fn draw(&mut self) -> Option<&Quote> {
        if self.quotes.is_empty() {
            return None;
        }

        if self.pool.is_empty() {
            self.pool.extend(0..self.quotes.len());
        }

        // swap_remove keeps the draw O(1); pool order is irrelevant
        let slot = rand::thread_rng().gen_range(0..self.pool.len());
        let index = self.pool.swap_remove(slot);
        self.quotes.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quotes::Language;
    use std::collections::HashSet;

    fn collection(n: usize) -> Vec<Quote> {
        (0..n)
            .map(|i| Quote {
                id: Some(i as u64),
                text: format!("quote {i}"),
                author: String::new(),
                source: None,
                language: Language::En,
            })
            .collect()
    }

    #[test]
    fn test_empty_collection_draws_nothing() {
        let mut picker = Picker::new(Vec::new());
        assert!(picker.draw().is_none());
        assert!(picker.is_empty());
    }

    #[test]
    fn test_round_is_a_permutation() {
        let n = 17;
        let mut picker = Picker::new(collection(n));

        let mut seen = HashSet::new();
        for _ in 0..n {
            let id = picker.draw().unwrap().id.unwrap();
            assert!(seen.insert(id), "quote {id} repeated within a round");
        }
        assert_eq!(seen.len(), n);
        assert_eq!(picker.remaining_in_round(), 0);
    }

    #[test]
    fn test_repeat_only_after_full_round() {
        let n = 9;
        let mut picker = Picker::new(collection(n));

        let mut seen = HashSet::new();
        let mut draws = Vec::new();
        for _ in 0..n + 1 {
            let id = picker.draw().unwrap().id.unwrap();
            draws.push(id);
            seen.insert(id);
        }

        // N+1 draws: all N distinct quotes appeared, and exactly one repeat
        // occurred - necessarily the last draw, after the round completed.
        assert_eq!(seen.len(), n);
        let last = *draws.last().unwrap();
        assert_eq!(draws.iter().filter(|&&id| id == last).count(), 2);
    }

    #[test]
    fn test_rounds_are_independent() {
        let n = 5;
        let mut picker = Picker::new(collection(n));

        for _round in 0..3 {
            let mut seen = HashSet::new();
            for _ in 0..n {
                seen.insert(picker.draw().unwrap().id.unwrap());
            }
            assert_eq!(seen.len(), n);
        }
    }

    #[test]
    fn test_single_quote_always_drawn() {
        let mut picker = Picker::new(collection(1));
        for _ in 0..4 {
            assert_eq!(picker.draw().unwrap().id, Some(0));
        }
    }

    #[test]
    fn test_reset_starts_a_fresh_round() {
        let mut picker = Picker::new(collection(3));
        picker.draw();
        picker.reset(collection(2));
        assert_eq!(picker.total(), 2);

        let mut seen = HashSet::new();
        for _ in 0..2 {
            seen.insert(picker.draw().unwrap().id.unwrap());
        }
        assert_eq!(seen.len(), 2);
    }
}
