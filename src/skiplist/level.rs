/// Draws the participation level of a newly inserted node.
///
/// Level `k` is drawn with probability `1 / 2^(k + 1)`; draws that would pass
/// `max_level` are clamped to it.
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    max_level: usize,
    rng: fastrand::Rng,
}

impl LevelGenerator {
    pub fn new(max_level: usize, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Self { max_level, rng }
    }

    #[inline(always)]
    pub fn max_level(&self) -> usize {
        self.max_level
    }

    #[inline(always)]
    pub fn random_level(&mut self) -> usize {
        let mut level = 0;
        while level < self.max_level && self.rng.bool() {
            level += 1;
        }
        level
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_within_bounds() {
        let mut levels = LevelGenerator::new(3, Some(42));
        for _ in 0..10_000 {
            assert!(levels.random_level() <= 3);
        }
    }

    #[test]
    fn test_cap_is_reached() {
        let mut levels = LevelGenerator::new(1, Some(1));
        let hits = (0..1000).filter(|_| levels.random_level() == 1).count();
        // about half of all draws continue past level 0
        assert!(hits > 350 && hits < 650, "hits = {hits}");
    }

    #[test]
    fn test_geometric_distribution() {
        let mut levels = LevelGenerator::new(16, Some(0xDEADBEEF));
        let mut counts = [0usize; 17];
        let draws = 100_000;
        for _ in 0..draws {
            counts[levels.random_level()] += 1;
        }
        let ratio = |k: usize| counts[k] as f64 / draws as f64;
        assert!((ratio(0) - 0.5).abs() < 0.02, "p(0) = {}", ratio(0));
        assert!((ratio(1) - 0.25).abs() < 0.02, "p(1) = {}", ratio(1));
        assert!((ratio(2) - 0.125).abs() < 0.02, "p(2) = {}", ratio(2));
    }

    #[test]
    fn test_seeded_draws_repeat() {
        let mut a = LevelGenerator::new(16, Some(99));
        let mut b = LevelGenerator::new(16, Some(99));
        let first: Vec<usize> = (0..64).map(|_| a.random_level()).collect();
        let second: Vec<usize> = (0..64).map(|_| b.random_level()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_cap_always_zero() {
        let mut levels = LevelGenerator::new(0, None);
        assert_eq!(levels.max_level(), 0);
        for _ in 0..100 {
            assert_eq!(levels.random_level(), 0);
        }
    }
}
