//! Card integration tests.

use std::collections::{HashMap, HashSet};

use deckrs::{Card, CardError, Deck, Rank, Suit};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn card_accessors() {
    let c = card(Suit::Spades, Rank::Queen);
    assert_eq!(c.suit(), Suit::Spades);
    assert_eq!(c.rank(), Rank::Queen);
    assert_eq!(c.rank().value(), 12);
}

#[test]
fn equal_cards_collapse_in_sets_and_maps() {
    let a = card(Suit::Hearts, Rank::Ace);
    let b = card(Suit::Hearts, Rank::Ace);
    let other = card(Suit::Spades, Rank::Ace);

    assert_eq!(a, b);
    assert_ne!(a, other);
    assert_ne!(a, card(Suit::Hearts, Rank::Two));

    let set: HashSet<Card> = [a, b, other].into_iter().collect();
    assert_eq!(set.len(), 2);

    let mut map = HashMap::new();
    map.insert(a, "first");
    map.insert(b, "second");
    assert_eq!(map.len(), 1);
    assert_eq!(map[&a], "second");
}

#[test]
fn ordering_follows_canonical_order() {
    let deck = Deck::new();
    let mut shuffled = deck.clone();
    shuffled.shuffle_with_seed(17);

    let mut sorted = shuffled.cards().to_vec();
    sorted.sort_unstable();
    assert_eq!(sorted.as_slice(), deck.cards());
    assert!(card(Suit::Hearts, Rank::King) < card(Suit::Spades, Rank::Ace));
    assert!(card(Suit::Clubs, Rank::Ace) < card(Suit::Clubs, Rank::Two));
}

#[test]
fn card_display() {
    assert_eq!(card(Suit::Hearts, Rank::Ace).to_string(), "Ace of Hearts");
    assert_eq!(card(Suit::Spades, Rank::Ten).to_string(), "10 of Spades");
    assert_eq!(card(Suit::Clubs, Rank::Two).to_string(), "2 of Clubs");
    assert_eq!(card(Suit::Diamonds, Rank::King).to_string(), "King of Diamonds");
}

#[test]
fn every_card_parses_from_its_display() {
    for c in &Deck::new() {
        assert_eq!(c.to_string().parse::<Card>(), Ok(*c));
    }
}

#[test]
fn parsing_is_case_insensitive_and_trims() {
    assert_eq!(
        "  queen of clubs ".parse::<Card>(),
        Ok(card(Suit::Clubs, Rank::Queen))
    );
    assert_eq!("DIAMONDS".parse::<Suit>(), Ok(Suit::Diamonds));
    assert_eq!("jack".parse::<Rank>(), Ok(Rank::Jack));
}

#[test]
fn parsing_rejects_unknown_names() {
    assert_eq!("Joker".parse::<Card>(), Err(CardError::MissingSeparator));
    assert_eq!("Ace of Stars".parse::<Card>(), Err(CardError::UnknownSuit));
    assert_eq!("1 of Hearts".parse::<Card>(), Err(CardError::UnknownRank));
    assert_eq!("11 of Hearts".parse::<Card>(), Err(CardError::UnknownRank));
    assert_eq!("Cups".parse::<Suit>(), Err(CardError::UnknownSuit));
    assert_eq!("".parse::<Rank>(), Err(CardError::UnknownRank));
}

#[test]
fn rank_numeric_conversion() {
    for rank in Rank::ALL {
        assert_eq!(Rank::try_from(rank.value()), Ok(rank));
    }
    assert_eq!(Rank::try_from(1), Ok(Rank::Ace));
    assert_eq!(Rank::try_from(13), Ok(Rank::King));
    assert_eq!(Rank::try_from(0), Err(CardError::RankOutOfRange));
    assert_eq!(Rank::try_from(14), Err(CardError::RankOutOfRange));
}

#[test]
fn error_messages() {
    assert_eq!(CardError::UnknownSuit.to_string(), "unknown suit");
    assert_eq!(
        CardError::MissingSeparator.to_string(),
        "missing \" of \" separator"
    );
}
