use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded random number generator for picking demo targets.
/// Shuffles themselves never use it.
#[derive(Clone)]
pub struct TrickRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl TrickRng {
    /// Create a new TrickRng with an optional seed
    /// If seed is None, generates a random seed
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| {
            use rand::thread_rng;
            thread_rng().gen()
        });

        let rng = ChaCha8Rng::seed_from_u64(seed);
        TrickRng { rng, seed }
    }

    /// Get the seed used for this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random integer in range [0, max)
    pub fn random_range(&mut self, max: usize) -> usize {
        self.rng.gen_range(0..max)
    }

    /// Pick a destination index for the top card of a `size`-card deck
    pub fn pick_position(&mut self, size: usize) -> usize {
        self.random_range(size)
    }
}
