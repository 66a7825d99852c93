//! Property tests for shuffling and dealing.

use std::collections::HashSet;

use deckrs::shuffle::fisher_yates;
use deckrs::{Card, DECK_SIZE, Deck};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

proptest! {
    #[test]
    fn shuffle_keeps_every_card(seed in any::<u64>(), dealt in 0usize..=DECK_SIZE) {
        let mut deck = Deck::new();
        deck.deal(dealt);
        let before: HashSet<Card> = deck.iter().copied().collect();

        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        prop_assert_eq!(deck.len(), DECK_SIZE - dealt);
        prop_assert_eq!(deck.iter().copied().collect::<HashSet<_>>(), before);
    }

    #[test]
    fn dealing_decrements_by_one(seed in any::<u64>(), deals in 0usize..60) {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));

        for _ in 0..deals {
            let before = deck.len();
            let top = deck.top().copied();
            let card = deck.deal_one_card();

            prop_assert_eq!(card, top);
            prop_assert_eq!(deck.len(), before.saturating_sub(1));
            prop_assert_eq!(card.is_none(), before == 0);
        }
        prop_assert_eq!(deck.is_empty(), deals >= DECK_SIZE);
    }

    #[test]
    fn reset_after_anything_is_canonical(seed in any::<u64>(), deals in 0usize..=DECK_SIZE) {
        let mut deck = Deck::new();
        deck.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
        deck.deal(deals);

        deck.reset();

        prop_assert_eq!(deck, Deck::new());
    }

    #[test]
    fn fisher_yates_permutes(seed in any::<u64>(), items in prop::collection::vec(any::<u32>(), 0..64)) {
        let mut items = items;
        let mut expected = items.clone();
        fisher_yates(&mut items, &mut ChaCha8Rng::seed_from_u64(seed));

        expected.sort_unstable();
        items.sort_unstable();
        prop_assert_eq!(items, expected);
    }
}
