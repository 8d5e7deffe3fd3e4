use crate::card::{create_deck, DeckError, ShuffleKind};
use serde::Serialize;

/// Hard ceiling on simulated shuffles before giving up
pub const RESTORE_CAP: usize = 1000;

/// Outcome of a capped restoration simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Restoration {
    pub count: usize,
    pub cap: usize,
}

impl Restoration {
    /// False when the count hit the cap; such a count is not a real cycle length
    pub fn is_exact(&self) -> bool {
        self.count < self.cap
    }

    /// The cycle length, if the simulation found one below the cap
    pub fn exact(&self) -> Option<usize> {
        if self.is_exact() {
            Some(self.count)
        } else {
            None
        }
    }
}

/// Number of `kind` shuffles that return a fresh deck of `size` to identity
pub fn restoration_count(size: usize, kind: ShuffleKind) -> Result<Restoration, DeckError> {
    restoration_count_with_cap(size, kind, RESTORE_CAP)
}

/// Same as [`restoration_count`], stopping after `cap` shuffles
pub fn restoration_count_with_cap(
    size: usize,
    kind: ShuffleKind,
    cap: usize,
) -> Result<Restoration, DeckError> {
    let original = create_deck(size)?;

    let mut current = kind.apply(&original);
    let mut count = 1;
    while current != original && count < cap {
        current = kind.apply(&current);
        count += 1;
    }

    let restoration = Restoration { count, cap };
    if restoration.is_exact() {
        log::debug!("{}-shuffle restores {} cards after {}", kind, size, count);
    } else {
        log::warn!(
            "{}-shuffle of {} cards reached the cap of {} without restoring",
            kind,
            size,
            cap
        );
    }
    Ok(restoration)
}
