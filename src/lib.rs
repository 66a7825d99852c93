//! A standard 52-card deck with optional `no_std` support.
//!
//! The crate provides a [`Deck`] that is built in canonical order, shuffled
//! in place with a Fisher-Yates shuffle driven by a caller-supplied random
//! number generator, dealt from the top, and reset back to canonical order.
//!
//! # Example
//!
//! ```
//! use deckrs::{Deck, DECK_SIZE};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut deck = Deck::new();
//! deck.shuffle(&mut rng);
//!
//! let hand = deck.deal(5);
//! assert_eq!(hand.len(), 5);
//! assert_eq!(deck.cards_remaining(), DECK_SIZE - 5);
//!
//! while deck.deal_one_card().is_some() {}
//! assert!(deck.is_empty());
//! assert_eq!(deck.deal_one_card(), None);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod shuffle;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::CardError;
