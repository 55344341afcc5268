use rand::{Rng, SeedableRng, rngs::StdRng};

/// The source of every random decision the selector makes.
///
/// Injected so tests can replay a seed or script individual draws.
#[cfg_attr(test, mockall::automock)]
pub trait RandomSource {
    /// A uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// A uniform index in `[0, upper)`. `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;
}

/// A `RandomSource` backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

/// The standard generator, used by the binary and by seeded tests.
pub type StdRngSource = RngSource<StdRng>;

impl RngSource<StdRng> {
    /// A reproducible source; the same seed replays the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn next_index(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}
