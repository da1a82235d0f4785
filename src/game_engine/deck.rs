use rand::Rng;

/// Uniform in-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// An ordered, shuffled run of cards with a cursor.
///
/// The original card list is kept so every reshuffle starts from the full
/// deck, never from a previous shuffle order.
#[derive(Debug, Clone)]
pub struct Deck<T> {
    source: Vec<T>,
    cards: Vec<T>,
    cursor: usize,
}

impl<T: Clone> Deck<T> {
    /// Copy `source` and shuffle it with `rng`.
    pub fn new_shuffled<R: Rng>(source: Vec<T>, rng: &mut R) -> Self {
        let mut cards = source.clone();
        shuffle(&mut cards, rng);
        Deck { source, cards, cursor: 0 }
    }

    /// Fresh shuffle of the full source deck; cursor back to the top.
    pub fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards = self.source.clone();
        shuffle(&mut self.cards, rng);
        self.cursor = 0;
    }

    /// Card under the cursor, `None` once the deck is exhausted.
    pub fn current(&self) -> Option<&T> {
        self.cards.get(self.cursor)
    }

    /// Step past the current card. Saturates at the end of the deck.
    pub fn advance(&mut self) {
        if self.cursor < self.cards.len() {
            self.cursor += 1;
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.cards.len()
    }

    /// Remaining cards, including the current one.
    pub fn remaining(&self) -> usize {
        self.cards.len() - self.cursor
    }

    /// Current shuffle order.
    pub fn cards(&self) -> &[T] {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let deck = Deck::new_shuffled((0..23u32).collect(), &mut rng);
        let mut seen: Vec<u32> = deck.cards().to_vec();
        seen.sort_unstable();
        assert_eq!(seen, (0..23).collect::<Vec<_>>());
    }

    #[test]
    fn deck_is_deterministic_with_seed() {
        let make = |seed: u64| -> Vec<u32> {
            let mut rng = StdRng::seed_from_u64(seed);
            Deck::new_shuffled((0..10).collect(), &mut rng).cards().to_vec()
        };
        assert_eq!(make(99), make(99));
        assert_ne!(make(99), make(100));
    }

    #[test]
    fn shuffle_is_roughly_uniform() {
        // Each of 3 values should land in slot 0 about a third of the time.
        let mut rng = StdRng::seed_from_u64(3);
        let mut first = [0usize; 3];
        for _ in 0..3000 {
            let mut v = [0usize, 1, 2];
            shuffle(&mut v, &mut rng);
            first[v[0]] += 1;
        }
        for (value, count) in first.iter().enumerate() {
            assert!((800..1200).contains(count), "value {value} led {count}/3000 times");
        }
    }

    #[test]
    fn cursor_saturates_and_reshuffle_rewinds() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut deck = Deck::new_shuffled(vec!['a', 'b'], &mut rng);
        deck.advance();
        deck.advance();
        deck.advance();
        assert!(deck.is_exhausted());
        assert_eq!(deck.cursor(), 2);
        assert!(deck.current().is_none());
        deck.reshuffle(&mut rng);
        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.remaining(), 2);
    }
}
