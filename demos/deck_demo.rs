//! Deck demo: build, deal, reset, shuffle, and deal out a full deck.
//!
//! Pass a seed as the first argument for a reproducible shuffle. Set
//! `RUST_LOG=deckrs=trace` to see the deck's log events.

use std::env;
use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::{Card, Deck, Rank, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    println!("=== Deck of Cards Demo (seed {seed}) ===\n");

    let mut deck = Deck::new();
    println!("Created new deck: {deck}");
    println!("Is empty: {}", deck.is_empty());

    println!("\nFirst 5 cards in order:");
    print_numbered(&deck.deal(5));

    deck.reset();
    println!("\nDeck reset: {deck}");

    deck.shuffle(&mut rng);
    println!("Deck shuffled!");

    println!("\nFirst 5 cards after shuffle:");
    print_numbered(&deck.deal(5));
    println!("\nCards remaining: {}", deck.cards_remaining());

    deck.reset();
    deck.shuffle(&mut rng);

    let hand = deck.deal(5);
    println!(
        "\nDealing a poker hand (5 cards): {}",
        hand.iter().map(format_card).collect::<Vec<_>>().join(" ")
    );
    println!("Cards left in deck: {}", deck.cards_remaining());

    deck.reset();
    deck.shuffle(&mut rng);

    println!("\nDealing entire deck to verify uniqueness...");
    let mut dealt = Vec::new();
    while let Some(card) = deck.deal_one_card() {
        dealt.push(card);
    }

    let mut unique = dealt.clone();
    unique.sort_unstable();
    unique.dedup();
    println!("Total cards dealt: {}", dealt.len());
    println!("Unique cards: {}", unique.len());

    println!("\nCards per suit:");
    for suit in Suit::ALL {
        let count = dealt.iter().filter(|card| card.suit() == suit).count();
        println!("  {suit}: {count}");
    }

    println!("\nCards per rank:");
    for rank in Rank::ALL {
        let count = dealt.iter().filter(|card| card.rank() == rank).count();
        println!("  {rank}: {count}");
    }

    match deck.deal_one_card() {
        Some(card) => println!("\nDealing from empty deck: {card}"),
        None => println!("\nDealing from empty deck: no card"),
    }
}

fn print_numbered(cards: &[Card]) {
    for (i, card) in cards.iter().enumerate() {
        println!("  {}. {card}  {}", i + 1, format_card(card));
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit() {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = match card.rank() {
        Rank::Ace => "A",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        rank => rank.name(),
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
