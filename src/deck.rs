//! The 52-card deck.

use alloc::vec::Vec;
use core::fmt;
use core::slice;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::shuffle::fisher_yates;

/// A standard 52-card deck.
///
/// Cards are stored bottom to top; the top of the deck is the last element
/// of [`Deck::cards`] and is the next card dealt. A new or reset deck is in
/// canonical order: suits in [`Suit::ALL`] order, ranks in [`Rank::ALL`]
/// order within each suit.
///
/// ```
/// use deckrs::{Card, Deck, Rank, Suit};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut deck = Deck::new();
/// assert_eq!(deck.deal_one_card(), Some(Card::new(Suit::Diamonds, Rank::King)));
///
/// deck.reset();
/// deck.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
/// assert_eq!(deck.cards_remaining(), 52);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cards: Self::canonical_cards(),
        }
    }

    fn canonical_cards() -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }

        cards
    }

    /// Restores all 52 cards in canonical order, discarding the current
    /// order and any dealt state.
    pub fn reset(&mut self) {
        self.cards = Self::canonical_cards();
        tracing::debug!(cards = self.cards.len(), "deck reset");
    }

    /// Shuffles the remaining cards in place.
    ///
    /// The outcome depends only on `rng`, so a seeded generator gives a
    /// reproducible order. Empty and single-card decks are left as is.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        fisher_yates(&mut self.cards, rng);
        tracing::debug!(cards = self.cards.len(), "deck shuffled");
    }

    /// Shuffles the remaining cards with a `ChaCha8Rng` seeded from `seed`.
    ///
    /// The same seed applied to decks holding the same cards in the same
    /// order always produces the same result.
    pub fn shuffle_with_seed(&mut self, seed: u64) {
        self.shuffle(&mut ChaCha8Rng::seed_from_u64(seed));
    }

    /// Removes and returns the top card.
    ///
    /// Returns `None` if the deck is empty.
    pub fn deal_one_card(&mut self) -> Option<Card> {
        let card = self.cards.pop();
        if let Some(card) = card {
            tracing::trace!(%card, remaining = self.cards.len(), "dealt card");
        } else {
            tracing::debug!("deal from empty deck");
        }
        card
    }

    /// Deals up to `count` cards, top card first.
    ///
    /// Stops early if the deck runs out, so the result may be shorter than
    /// `count`.
    pub fn deal(&mut self, count: usize) -> Vec<Card> {
        let count = count.min(self.cards.len());
        let mut dealt = self.cards.split_off(self.cards.len() - count);
        dealt.reverse();
        tracing::trace!(dealt = dealt.len(), remaining = self.cards.len(), "dealt cards");
        dealt
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    /// Returns the remaining cards, bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns whether `card` is still in the deck.
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards, bottom to top.
    pub fn iter(&self) -> slice::Iter<'_, Card> {
        self.cards.iter()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck with {} cards remaining", self.cards.len())
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
