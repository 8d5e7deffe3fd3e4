use crate::card::ShuffleKind;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "faro-shuffle")]
#[command(about = "Faro (perfect riffle) shuffle explorer", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// JSON config file (restore cap, size bounds, timing)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Deck size for the default summary
    #[arg(short, long, default_value = "52")]
    pub size: usize,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count shuffles until the deck returns to its original order
    Restore {
        /// Number of cards (even)
        #[arg(short, long, default_value = "52")]
        size: usize,

        /// Shuffle kind
        #[arg(short, long, value_enum, default_value = "out")]
        kind: KindArg,
    },

    /// Find the shortest out-then-in shuffle mix that restores the deck
    Decompose {
        /// Number of cards (even)
        #[arg(short, long, default_value = "52")]
        size: usize,
    },

    /// Tabulate restoration counts over a range of deck sizes
    Table {
        /// Smallest deck size (defaults to the configured minimum)
        #[arg(long)]
        min: Option<usize>,

        /// Largest deck size (defaults to the configured maximum)
        #[arg(long)]
        max: Option<usize>,

        /// Print the table as JSON
        #[arg(long)]
        json: bool,

        /// Save the table to a timestamped JSON file
        #[arg(long)]
        save: bool,
    },

    /// Move the top card to any position with in/out shuffles
    Place {
        /// Number of cards (even)
        #[arg(short, long, default_value = "52")]
        size: usize,

        /// Target index (0 = top); picked at random when omitted
        #[arg(short, long)]
        position: Option<usize>,

        /// Seed for the random target
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Step a deck through shuffles, showing each split and result
    Play {
        /// Number of cards (even)
        #[arg(short, long, default_value = "52")]
        size: usize,

        /// Shuffle kind
        #[arg(short, long, value_enum, default_value = "out")]
        kind: KindArg,

        /// Number of shuffles (defaults to one full restoration cycle)
        #[arg(short = 'n', long)]
        steps: Option<usize>,

        /// Pace shuffles with the auto-shuffle interval
        #[arg(short, long)]
        auto: bool,

        /// Skip all delays
        #[arg(short, long)]
        fast: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    In,
    Out,
}

impl From<KindArg> for ShuffleKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::In => ShuffleKind::In,
            KindArg::Out => ShuffleKind::Out,
        }
    }
}
