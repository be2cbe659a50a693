use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG owned by a single game session, so runs can be replayed
/// from their seed.
#[derive(Debug)]
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_bool(&mut self) -> bool {
        self.rng.random()
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }

    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index = self.random_range(0..items.len());
        items.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut first = SessionRng::new(42);
        let mut second = SessionRng::new(42);

        for _ in 0..32 {
            assert_eq!(first.random_bool(), second.random_bool());
        }
    }

    #[test]
    fn test_pick_stays_in_bounds() {
        let mut rng = SessionRng::new(7);
        let items = [10, 20, 30];

        for _ in 0..100 {
            let picked = *rng.pick(&items).unwrap();
            assert!(items.contains(&picked));
        }
    }

    #[test]
    fn test_pick_from_empty_slice() {
        let mut rng = SessionRng::new(7);
        let items: [u32; 0] = [];

        assert_eq!(rng.pick(&items), None);
    }
}
