/// Source of uniform random choices for peg assignment
pub trait RandomSource {
    /// Return an index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Small PCG-style generator, seeded from the platform's entropy source
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new()
    }
}

impl SimpleRng {
    pub fn new() -> Self {
        // getrandom works in the browser through its `js` feature
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u64(&mut self) -> u64 {
        // PCG-like PRNG
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        (xorshifted.rotate_right(rot)) as u64
    }
}

impl RandomSource for SimpleRng {
    fn next_index(&mut self, bound: usize) -> usize {
        (self.next_u64() as usize) % bound
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound. An empty list always
/// yields 0.
#[derive(Debug, Clone, Default)]
pub struct SequenceRng {
    values: Vec<usize>,
    cursor: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceRng {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = SimpleRng::with_seed(42);
        let mut b = SimpleRng::with_seed(42);
        for _ in 0..32 {
            assert_eq!(a.next_index(3), b.next_index(3));
        }
    }

    #[test]
    fn test_rng_stays_in_bounds() {
        let mut rng = SimpleRng::new();
        for _ in 0..1000 {
            assert!(rng.next_index(3) < 3);
            assert!(rng.next_index(2) < 2);
        }
    }

    #[test]
    fn test_rng_covers_every_peg() {
        let mut rng = SimpleRng::with_seed(7);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[rng.next_index(3)] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_sequence_rng_cycles() {
        let mut rng = SequenceRng::new(vec![2, 1]);
        assert_eq!(rng.next_index(3), 2);
        assert_eq!(rng.next_index(2), 1);
        assert_eq!(rng.next_index(3), 2);
        // reduced modulo the bound
        assert_eq!(rng.next_index(2), 1);
        assert_eq!(rng.next_index(2), 0);
    }

    #[test]
    fn test_empty_sequence_yields_zero() {
        let mut rng = SequenceRng::default();
        assert_eq!(rng.next_index(3), 0);
    }
}
