pub mod deck;
pub mod elmsley;
pub mod shuffle;
pub mod types;

pub use deck::{create_deck, validate_size, Deck, DeckError};
pub use elmsley::{describe_sequence, elmsley_sequence, place_top_card};
pub use shuffle::{apply_repeated, apply_sequence, in_shuffle, out_shuffle, ShuffleKind};
pub use types::{Card, CardColor, Rank, Suit};
