use crate::card::types::{Card, Rank, Suit};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeckError {
    #[error("Deck size {size} is too small (need at least 2 cards)")]
    TooSmall { size: usize },
    #[error("Deck size {size} is odd; a faro shuffle needs an exact bisection")]
    OddSize { size: usize },
    #[error("Position {position} is outside a deck of {size} cards")]
    PositionOutOfRange { position: usize, size: usize },
}

/// Reject sizes a faro shuffle cannot split evenly
pub fn validate_size(size: usize) -> Result<(), DeckError> {
    if size < 2 {
        return Err(DeckError::TooSmall { size });
    }
    if size % 2 != 0 {
        return Err(DeckError::OddSize { size });
    }
    Ok(())
}

/// Ordered deck of cards. Always even-sized and at least 2 cards long.
#[derive(Debug, Clone, Serialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the identity ordering of `size` cards.
    ///
    /// First half is hearts, second half spades; ranks cycle A..K
    /// independently within each half.
    pub fn new(size: usize) -> Result<Self, DeckError> {
        validate_size(size)?;
        let half = size / 2;

        let cards = (0..size)
            .map(|i| {
                let suit = if i < half { Suit::Hearts } else { Suit::Spades };
                Card::new(i, Rank::cyclic(i % half), suit)
            })
            .collect();

        Ok(Deck { cards })
    }

    /// Wrap an already-permuted ordering. Callers keep the length even.
    pub(crate) fn from_cards(cards: Vec<Card>) -> Self {
        debug_assert!(cards.len() >= 2 && cards.len() % 2 == 0);
        Deck { cards }
    }

    pub fn size(&self) -> usize {
        self.cards.len()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn top(&self) -> &Card {
        &self.cards[0]
    }

    pub fn bottom(&self) -> &Card {
        &self.cards[self.cards.len() - 1]
    }

    /// Split view used while a shuffle is being previewed
    pub fn halves(&self) -> (&[Card], &[Card]) {
        self.cards.split_at(self.cards.len() / 2)
    }

    /// Current ordering as position ids
    pub fn ordering(&self) -> Vec<usize> {
        self.cards.iter().map(|c| c.position_id).collect()
    }

    /// Index of the card with the given position id
    pub fn index_of(&self, position_id: usize) -> Option<usize> {
        self.cards.iter().position(|c| c.position_id == position_id)
    }

    pub fn is_identity(&self) -> bool {
        self.cards
            .iter()
            .enumerate()
            .all(|(i, c)| c.position_id == i)
    }
}

/// Two decks are equal when their position id sequences match
impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.cards.len() == other.cards.len()
            && self
                .cards
                .iter()
                .zip(other.cards.iter())
                .all(|(a, b)| a.position_id == b.position_id)
    }
}

impl Eq for Deck {}

/// Create a fresh identity-ordered deck
pub fn create_deck(size: usize) -> Result<Deck, DeckError> {
    Deck::new(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::types::CardColor;

    #[test]
    fn test_create_deck_assigns_ids_in_order() {
        let deck = create_deck(10).expect("10 is a valid size");
        assert_eq!(deck.size(), 10);
        assert_eq!(deck.ordering(), (0..10).collect::<Vec<_>>());
        assert!(deck.is_identity());
    }

    #[test]
    fn test_suits_split_by_halves() {
        let deck = create_deck(8).expect("8 is a valid size");
        let (first, second) = deck.halves();
        assert!(first.iter().all(|c| c.suit == Suit::Hearts && c.color == CardColor::Red));
        assert!(second.iter().all(|c| c.suit == Suit::Spades && c.color == CardColor::Black));
    }

    #[test]
    fn test_ranks_cycle_within_each_half() {
        let deck = create_deck(52).expect("52 is a valid size");
        let cards = deck.cards();
        // 26 cards per half: A..K twice
        assert_eq!(cards[0].rank, Rank::Ace);
        assert_eq!(cards[12].rank, Rank::King);
        assert_eq!(cards[13].rank, Rank::Ace);
        assert_eq!(cards[25].rank, Rank::King);
        // second half restarts at Ace
        assert_eq!(cards[26].rank, Rank::Ace);
        assert_eq!(cards[26].suit, Suit::Spades);
    }

    #[test]
    fn test_small_deck_ranks_restart_per_half() {
        let deck = create_deck(4).expect("4 is a valid size");
        let labels: Vec<String> = deck.cards().iter().map(|c| c.to_string()).collect();
        assert_eq!(labels, vec!["A♥", "2♥", "A♠", "2♠"]);
    }

    #[test]
    fn test_rejects_odd_size() {
        assert_eq!(create_deck(7), Err(DeckError::OddSize { size: 7 }));
    }

    #[test]
    fn test_rejects_tiny_sizes() {
        assert_eq!(create_deck(0), Err(DeckError::TooSmall { size: 0 }));
        assert_eq!(create_deck(1), Err(DeckError::TooSmall { size: 1 }));
        assert!(create_deck(2).is_ok());
    }

    #[test]
    fn test_equality_compares_ordering() {
        let a = create_deck(6).expect("valid");
        let b = create_deck(6).expect("valid");
        let reordered = Deck::from_cards(a.cards().iter().rev().copied().collect());
        assert_eq!(a, b);
        assert_ne!(a, reordered);
        assert_ne!(a, create_deck(8).expect("valid"));
    }

    #[test]
    fn test_create_deck_is_deterministic() {
        for size in (2..=64).step_by(2) {
            let a = create_deck(size).expect("valid");
            let b = create_deck(size).expect("valid");
            assert_eq!(a.cards(), b.cards(), "size {} should build identically", size);
        }
    }
}
