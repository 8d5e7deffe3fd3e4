pub mod scheduler;
pub mod state;

pub use scheduler::{AutoShuffle, ShuffleTiming};
pub use state::{Phase, Session, SessionError};
