use crate::card::deck::Deck;
use crate::card::types::Card;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two perfect riffle variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShuffleKind {
    /// Second half leads; the top card moves to index 1
    In,
    /// First half leads; top and bottom cards stay put
    Out,
}

impl ShuffleKind {
    pub fn apply(&self, deck: &Deck) -> Deck {
        match self {
            ShuffleKind::In => in_shuffle(deck),
            ShuffleKind::Out => out_shuffle(deck),
        }
    }

    pub fn other(&self) -> ShuffleKind {
        match self {
            ShuffleKind::In => ShuffleKind::Out,
            ShuffleKind::Out => ShuffleKind::In,
        }
    }
}

impl fmt::Display for ShuffleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShuffleKind::In => write!(f, "in"),
            ShuffleKind::Out => write!(f, "out"),
        }
    }
}

/// Interleave the two halves, taking from `lead` first
fn interleave(lead: &[Card], follow: &[Card]) -> Vec<Card> {
    let mut result = Vec::with_capacity(lead.len() + follow.len());
    for (a, b) in lead.iter().zip(follow.iter()) {
        result.push(*a);
        result.push(*b);
    }
    result
}

/// second[0], first[0], second[1], first[1], ...
pub fn in_shuffle(deck: &Deck) -> Deck {
    let (first, second) = deck.halves();
    Deck::from_cards(interleave(second, first))
}

/// first[0], second[0], first[1], second[1], ...
pub fn out_shuffle(deck: &Deck) -> Deck {
    let (first, second) = deck.halves();
    Deck::from_cards(interleave(first, second))
}

/// Apply the same shuffle `times` times
pub fn apply_repeated(deck: &Deck, kind: ShuffleKind, times: usize) -> Deck {
    let mut current = deck.clone();
    for _ in 0..times {
        current = kind.apply(&current);
    }
    current
}

/// Apply a sequence of shuffles left to right
pub fn apply_sequence(deck: &Deck, sequence: &[ShuffleKind]) -> Deck {
    sequence
        .iter()
        .fold(deck.clone(), |current, kind| kind.apply(&current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::deck::create_deck;

    #[test]
    fn test_out_shuffle_small_deck() {
        let deck = create_deck(6).expect("valid");
        assert_eq!(out_shuffle(&deck).ordering(), vec![0, 3, 1, 4, 2, 5]);
    }

    #[test]
    fn test_in_shuffle_small_deck() {
        let deck = create_deck(6).expect("valid");
        assert_eq!(in_shuffle(&deck).ordering(), vec![3, 0, 4, 1, 5, 2]);
    }

    #[test]
    fn test_out_shuffle_fixes_top_and_bottom() {
        for size in (2..=200).step_by(2) {
            let deck = create_deck(size).expect("valid");
            let shuffled = out_shuffle(&deck);
            assert_eq!(shuffled.top(), deck.top(), "size {}", size);
            assert_eq!(shuffled.bottom(), deck.bottom(), "size {}", size);
        }
    }

    #[test]
    fn test_in_shuffle_never_keeps_top() {
        for size in (2..=200).step_by(2) {
            let deck = create_deck(size).expect("valid");
            let shuffled = in_shuffle(&deck);
            assert_ne!(shuffled.top(), deck.top(), "size {}", size);
            // original top lands at index 1
            assert_eq!(shuffled.index_of(0), Some(1), "size {}", size);
        }
    }

    #[test]
    fn test_shuffles_do_not_mutate_input() {
        let deck = create_deck(10).expect("valid");
        let _ = in_shuffle(&deck);
        let _ = out_shuffle(&deck);
        assert!(deck.is_identity());
    }

    #[test]
    fn test_shuffles_keep_every_card() {
        let deck = create_deck(52).expect("valid");
        for shuffled in [in_shuffle(&deck), out_shuffle(&deck)] {
            let mut ids = shuffled.ordering();
            ids.sort_unstable();
            assert_eq!(ids, deck.ordering());
        }
    }

    #[test]
    fn test_shuffles_are_deterministic() {
        let deck = create_deck(52).expect("valid");
        assert_eq!(in_shuffle(&deck).cards(), in_shuffle(&deck).cards());
        assert_eq!(out_shuffle(&deck).cards(), out_shuffle(&deck).cards());
    }

    #[test]
    fn test_apply_sequence_matches_manual_application() {
        let deck = create_deck(12).expect("valid");
        let sequence = [ShuffleKind::Out, ShuffleKind::In, ShuffleKind::In];
        let manual = in_shuffle(&in_shuffle(&out_shuffle(&deck)));
        assert_eq!(apply_sequence(&deck, &sequence), manual);
    }

    #[test]
    fn test_apply_repeated_zero_times_is_noop() {
        let deck = create_deck(8).expect("valid");
        assert_eq!(apply_repeated(&deck, ShuffleKind::In, 0), deck);
    }

    #[test]
    fn test_kind_other() {
        assert_eq!(ShuffleKind::In.other(), ShuffleKind::Out);
        assert_eq!(ShuffleKind::Out.other(), ShuffleKind::In);
    }
}
