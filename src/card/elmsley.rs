//! Binary card positioning.
//!
//! Writing a target index in binary and reading it from the most significant
//! bit, an in-shuffle for every 1 and an out-shuffle for every 0 carries the
//! top card to that index. An out-shuffle sends index `i` of the first half
//! to `2i`, an in-shuffle sends it to `2i + 1`, so each step appends one bit.

use crate::card::deck::{Deck, DeckError};
use crate::card::shuffle::{apply_sequence, ShuffleKind};

/// Shuffle sequence that moves the top card to `target`.
/// Target 0 needs no shuffles.
pub fn elmsley_sequence(target: usize) -> Vec<ShuffleKind> {
    if target == 0 {
        return Vec::new();
    }
    let bits = usize::BITS - target.leading_zeros();
    (0..bits)
        .rev()
        .map(|bit| {
            if target & (1 << bit) != 0 {
                ShuffleKind::In
            } else {
                ShuffleKind::Out
            }
        })
        .collect()
}

/// Move the current top card of `deck` to index `target`
pub fn place_top_card(deck: &Deck, target: usize) -> Result<Deck, DeckError> {
    if target >= deck.size() {
        return Err(DeckError::PositionOutOfRange {
            position: target,
            size: deck.size(),
        });
    }
    Ok(apply_sequence(deck, &elmsley_sequence(target)))
}

/// Render a sequence as e.g. "In-In-Out-In-Out"
pub fn describe_sequence(sequence: &[ShuffleKind]) -> String {
    if sequence.is_empty() {
        return "(none)".to_string();
    }
    sequence
        .iter()
        .map(|kind| match kind {
            ShuffleKind::In => "In",
            ShuffleKind::Out => "Out",
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::deck::create_deck;
    use ShuffleKind::{In, Out};

    #[test]
    fn test_sequence_for_26() {
        // 26 = 0b11010
        assert_eq!(elmsley_sequence(26), vec![In, In, Out, In, Out]);
    }

    #[test]
    fn test_sequence_for_zero_and_one() {
        assert!(elmsley_sequence(0).is_empty());
        assert_eq!(elmsley_sequence(1), vec![In]);
    }

    #[test]
    fn test_places_top_card_everywhere() {
        for size in (2..=64).step_by(2) {
            let deck = create_deck(size).expect("valid");
            for target in 0..size {
                let placed = place_top_card(&deck, target).expect("target in range");
                assert_eq!(
                    placed.index_of(0),
                    Some(target),
                    "size {} target {}",
                    size,
                    target
                );
            }
        }
    }

    #[test]
    fn test_places_from_shuffled_deck() {
        let deck = ShuffleKind::In.apply(&create_deck(20).expect("valid"));
        let top = deck.top().position_id;
        let placed = place_top_card(&deck, 13).expect("target in range");
        assert_eq!(placed.index_of(top), Some(13));
    }

    #[test]
    fn test_rejects_out_of_range_target() {
        let deck = create_deck(8).expect("valid");
        assert_eq!(
            place_top_card(&deck, 8),
            Err(DeckError::PositionOutOfRange { position: 8, size: 8 })
        );
    }

    #[test]
    fn test_describe_sequence() {
        assert_eq!(describe_sequence(&elmsley_sequence(26)), "In-In-Out-In-Out");
        assert_eq!(describe_sequence(&[]), "(none)");
    }
}
