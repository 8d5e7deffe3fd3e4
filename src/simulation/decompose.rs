use crate::card::{create_deck, DeckError, ShuffleKind};
use crate::simulation::restore::{restoration_count_with_cap, RESTORE_CAP};
use serde::Serialize;
use std::fmt;

/// Out-shuffles followed by in-shuffles that together restore the deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decomposition {
    pub outshuffles: usize,
    pub inshuffles: usize,
}

impl Decomposition {
    pub fn total(&self) -> usize {
        self.outshuffles + self.inshuffles
    }

    /// Fewer shuffles wins; on a tie, more out-shuffles wins
    fn beats(&self, other: &Decomposition) -> bool {
        self.total() < other.total()
            || (self.total() == other.total() && self.outshuffles > other.outshuffles)
    }
}

impl fmt::Display for Decomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} out + {} in", self.outshuffles, self.inshuffles)
    }
}

/// Search out/in splits bounded by the out-shuffle restoration count
pub fn decompose(size: usize) -> Result<Option<Decomposition>, DeckError> {
    decompose_with_cap(size, RESTORE_CAP)
}

/// Every split `(out, in)` with `0 < out + in <= total` is simulated, where
/// `total` is the out-shuffle restoration count. The in-shuffle count never
/// bounds the search.
///
/// When the out-shuffle count hit the cap, `(total, 0)` is not known to
/// restore, so only splits actually seen to restore are returned. `None`
/// means no restoring split exists within the bound.
pub fn decompose_with_cap(size: usize, cap: usize) -> Result<Option<Decomposition>, DeckError> {
    let restoration = restoration_count_with_cap(size, ShuffleKind::Out, cap)?;
    let total = restoration.count;
    let original = create_deck(size)?;

    // All out-shuffles restores by definition of an exact `total`
    let mut best = restoration.exact().map(|count| Decomposition {
        outshuffles: count,
        inshuffles: 0,
    });

    let mut after_out = original.clone();
    for out in 0..=total {
        if out > 0 {
            after_out = ShuffleKind::Out.apply(&after_out);
        }

        let mut current = after_out.clone();
        for inn in 0..=(total - out) {
            if inn > 0 {
                current = ShuffleKind::In.apply(&current);
            }
            let candidate = Decomposition {
                outshuffles: out,
                inshuffles: inn,
            };
            let improves = best.map_or(true, |b| candidate.beats(&b));
            if candidate.total() > 0 && current == original && improves {
                best = Some(candidate);
            }
        }
    }

    match best {
        Some(d) => log::debug!("decomposition for {} cards: {}", size, d),
        None => log::warn!(
            "no restoring split for {} cards within {} shuffles (cap {})",
            size,
            total,
            cap
        ),
    }
    Ok(best)
}
