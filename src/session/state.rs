use crate::card::{create_deck, Card, Deck, DeckError, ShuffleKind};
use crate::session::scheduler::AutoShuffle;
use crate::simulation::{decompose_with_cap, restoration_count_with_cap, Decomposition, Restoration};
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("A shuffle is already in progress")]
    ShuffleInProgress,
    #[error("No shuffle is pending")]
    NoShufflePending,
    #[error("Deck error: {0}")]
    DeckError(#[from] DeckError),
}

/// What the deck view currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// One ordering
    Assembled,
    /// Both halves side by side, shuffle not yet applied
    SplitPreview,
}

impl Phase {
    pub fn next(&self) -> Phase {
        match self {
            Phase::Assembled => Phase::SplitPreview,
            Phase::SplitPreview => Phase::Assembled,
        }
    }
}

/// The deck a viewer is stepping through, plus the analysis for its size
#[derive(Debug, Clone)]
pub struct Session {
    size: usize,
    kind: ShuffleKind,
    cap: usize,
    deck: Deck,
    shuffle_count: usize,
    phase: Phase,
    restoration: Restoration,
    decomposition: Option<Decomposition>,
    auto: AutoShuffle,
}

impl Session {
    pub fn new(
        size: usize,
        kind: ShuffleKind,
        cap: usize,
        auto_interval: Duration,
    ) -> Result<Self, SessionError> {
        Ok(Session {
            size,
            kind,
            cap,
            deck: create_deck(size)?,
            shuffle_count: 0,
            phase: Phase::Assembled,
            restoration: restoration_count_with_cap(size, kind, cap)?,
            decomposition: decompose_with_cap(size, cap)?,
            auto: AutoShuffle::new(auto_interval),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn kind(&self) -> ShuffleKind {
        self.kind
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn shuffle_count(&self) -> usize {
        self.shuffle_count
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn restoration(&self) -> Restoration {
        self.restoration
    }

    /// `None` when the cap hid every restoring split
    pub fn decomposition(&self) -> Option<Decomposition> {
        self.decomposition
    }

    pub fn auto(&self) -> &AutoShuffle {
        &self.auto
    }

    pub fn auto_mut(&mut self) -> &mut AutoShuffle {
        &mut self.auto
    }

    /// New deck size: fresh deck, count reset, analysis recomputed
    pub fn set_size(&mut self, size: usize) -> Result<(), SessionError> {
        let deck = create_deck(size)?;
        let restoration = restoration_count_with_cap(size, self.kind, self.cap)?;
        let decomposition = decompose_with_cap(size, self.cap)?;

        self.size = size;
        self.deck = deck;
        self.shuffle_count = 0;
        self.phase = Phase::Assembled;
        self.restoration = restoration;
        self.decomposition = decomposition;
        Ok(())
    }

    /// New shuffle kind. The displayed deck and count stay; the restoration
    /// count is recomputed from a fresh identity deck. A pending shuffle
    /// keeps the kind it was started with, so switching is refused while split.
    pub fn set_kind(&mut self, kind: ShuffleKind) -> Result<(), SessionError> {
        if self.phase == Phase::SplitPreview {
            return Err(SessionError::ShuffleInProgress);
        }
        self.restoration = restoration_count_with_cap(self.size, kind, self.cap)?;
        self.kind = kind;
        Ok(())
    }

    /// Show the split preview. The halves are what will be interleaved.
    pub fn begin_shuffle(&mut self) -> Result<(&[Card], &[Card]), SessionError> {
        if self.phase == Phase::SplitPreview {
            return Err(SessionError::ShuffleInProgress);
        }
        self.phase = self.phase.next();
        Ok(self.deck.halves())
    }

    /// Apply the pending shuffle and reassemble
    pub fn commit_shuffle(&mut self) -> Result<&Deck, SessionError> {
        if self.phase != Phase::SplitPreview {
            return Err(SessionError::NoShufflePending);
        }
        self.deck = self.kind.apply(&self.deck);
        self.shuffle_count += 1;
        self.phase = self.phase.next();
        Ok(&self.deck)
    }

    /// Split and commit in one step
    pub fn shuffle(&mut self) -> Result<&Deck, SessionError> {
        self.begin_shuffle()?;
        self.commit_shuffle()
    }

    /// Fire a shuffle if the auto scheduler says one is due
    pub fn tick(&mut self, now: Instant) -> Result<bool, SessionError> {
        let animating = self.phase == Phase::SplitPreview;
        if self.auto.due(now, animating) {
            self.shuffle()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Fresh deck, zero count, auto-shuffle off
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.auto.stop();
        self.deck = create_deck(self.size)?;
        self.shuffle_count = 0;
        self.phase = Phase::Assembled;
        Ok(())
    }

    /// True once the count reaches the restoration count for this kind
    pub fn is_restored(&self) -> bool {
        self.shuffle_count > 0 && self.shuffle_count == self.restoration.count
    }

    /// Fraction of the restoration cycle completed, capped at 1
    pub fn progress(&self) -> f64 {
        if self.restoration.count == 0 {
            return 0.0;
        }
        (self.shuffle_count as f64 / self.restoration.count as f64).min(1.0)
    }
}
