//! Seeded random bit vectors for property checks.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{BitVec, FixedBitVec};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenConfig {
    /// Fixed seed; a fresh one is drawn from the OS when `None`.
    pub seed: Option<u64>,
    /// Iterations run by [`Generator::check`].
    pub cases: usize,
    /// Exclusive ceiling for generated indices.
    pub limit: usize,
    /// Upper bound on the number of bits set in a generated vector.
    pub max_bits: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            seed: None,
            cases: 1000,
            limit: 10_000,
            max_bits: 100,
        }
    }
}

impl GenConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_cases(mut self, cases: usize) -> Self {
        self.cases = cases;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit.max(1);
        self
    }

    /// Uses the seed in environment variable `var` if it parses, else `default`.
    pub fn with_seed_from_env(self, var: &str, default: u64) -> Self {
        let seed = std::env::var(var)
            .ok()
            .and_then(|value| value.trim().parse().ok())
            .unwrap_or(default);
        self.with_seed(seed)
    }

    pub fn with_max_bits(mut self, max_bits: usize) -> Self {
        self.max_bits = max_bits;
        self
    }
}

pub struct Generator {
    rng: StdRng,
    seed: u64,
    cases: usize,
    limit: usize,
    max_bits: usize,
}

impl Generator {
    pub fn new(config: &GenConfig) -> Self {
        let seed = config
            .seed
            .unwrap_or_else(|| StdRng::from_os_rng().random());
        Generator {
            rng: StdRng::seed_from_u64(seed),
            seed,
            cases: config.cases,
            limit: config.limit.max(1),
            max_bits: config.max_bits,
        }
    }

    /// Seed to reproduce this generator's sequence.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn index(&mut self) -> usize {
        self.rng.random_range(0..self.limit)
    }

    pub fn bit_vec(&mut self) -> BitVec {
        let n = self.rng.random_range(0..=self.max_bits);
        (0..n).map(|_| self.index()).collect()
    }

    /// Fixed vector with a random capacity up to the index ceiling.
    pub fn fixed_bit_vec(&mut self) -> FixedBitVec {
        let len = self.rng.random_range(0..=self.limit);
        let mut bv = FixedBitVec::new(len);
        if len > 0 {
            let n = self.rng.random_range(0..=self.max_bits);
            for _ in 0..n {
                let pos = self.rng.random_range(0..len);
                bv.insert_unchecked(pos);
            }
        }
        bv
    }

    /// Runs `property` for the configured number of cases.
    ///
    /// # Panics
    ///
    /// On the first case returning `false`, naming the case and the seed.
    pub fn check(&mut self, name: &str, mut property: impl FnMut(&mut Generator) -> bool) {
        debug!(name, seed = self.seed, cases = self.cases, "checking property");
        for case in 0..self.cases {
            if !property(self) {
                panic!(
                    "property `{name}` failed on case {case} (seed {})",
                    self.seed
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let config = GenConfig::default().with_seed(7);
        let mut a = Generator::new(&config);
        let mut b = Generator::new(&config);
        for _ in 0..20 {
            assert_eq!(a.bit_vec(), b.bit_vec());
            assert_eq!(a.index(), b.index());
        }
        assert_eq!(a.seed(), 7);
    }

    #[test]
    fn test_respects_limit() {
        let config = GenConfig::default()
            .with_seed(1)
            .with_limit(50)
            .with_max_bits(30);
        let mut generator = Generator::new(&config);
        for _ in 0..100 {
            let bv = generator.bit_vec();
            assert!(bv.len() <= 50);
            assert!(bv.cardinality() <= 30);
            assert!(generator.index() < 50);
            assert!(generator.fixed_bit_vec().len() <= 50);
        }
    }

    #[test]
    fn test_fixed_bits_stay_below_capacity() {
        let config = GenConfig::default().with_seed(5).with_limit(70);
        let mut generator = Generator::new(&config);
        for _ in 0..200 {
            let bv = generator.fixed_bit_vec();
            assert!(bv.iter().all(|i| i < bv.len()));
            assert_eq!(bv.as_words().len(), bv.len().div_ceil(64));
        }
    }

    #[test]
    fn test_seed_from_env_falls_back_to_default() {
        let config = GenConfig::default().with_seed_from_env("WORDBITS_UNSET_SEED_VAR", 42);
        assert_eq!(config.seed, Some(42));
        assert_eq!(Generator::new(&config).seed(), 42);
    }

    #[test]
    fn test_check_runs_every_case() {
        let config = GenConfig::default().with_seed(3).with_cases(25);
        let mut generator = Generator::new(&config);
        let mut runs = 0;
        generator.check("counts", |_| {
            runs += 1;
            true
        });
        assert_eq!(runs, 25);
    }

    #[test]
    #[should_panic(expected = "property `never` failed on case 0 (seed 11)")]
    fn test_check_reports_seed() {
        let mut generator = Generator::new(&GenConfig::default().with_seed(11));
        generator.check("never", |_| false);
    }
}
