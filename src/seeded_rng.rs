/// Deterministic seeded pseudo-random generator
///
/// A 32-bit mulberry32 generator: the same seed always yields the same
/// float stream, which makes every generated map reproducible. Each
/// consumer (hotspots, heat samples, detections) gets its own instance
/// seeded through a distinct stream salt, so advancing one stream never
/// shifts another.

#[derive(Debug, Clone)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Instance for an independent sub-stream of `seed`. `salt` must be
    /// odd and unique per consumer (see `constants`).
    pub fn stream(seed: u32, salt: u32) -> Self {
        Self::new(seed ^ salt)
    }

    /// Next float in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }

    /// Uniform float in [min, max).
    pub fn range_f64(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Uniform index in [0, n). Returns 0 when n == 0.
    pub fn pick(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let idx = (self.next_f64() * n as f64) as usize;
        idx.min(n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use more_asserts::{assert_ge, assert_lt};

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededRng::new(42);
        let mut b = SeededRng::new(42);
        for _ in 0..1000 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = SeededRng::new(1);
        let mut b = SeededRng::new(2);
        let same = (0..100).filter(|_| a.next_f64() == b.next_f64()).count();
        assert_lt!(same, 5);
    }

    #[test]
    fn test_output_range() {
        let mut rng = SeededRng::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert_ge!(v, 0.0);
            assert_lt!(v, 1.0);
        }
    }

    #[test]
    fn test_range_f64_bounds() {
        let mut rng = SeededRng::new(99);
        for _ in 0..1000 {
            let v = rng.range_f64(25.0, 80.0);
            assert_ge!(v, 25.0);
            assert_lt!(v, 80.0);
        }
    }

    #[test]
    fn test_streams_are_independent() {
        // Consuming extra draws from one stream must not shift the other.
        let mut hotspots_a = SeededRng::stream(42, crate::constants::HOTSPOT_STREAM);
        let mut samples_a = SeededRng::stream(42, crate::constants::HEAT_SAMPLE_STREAM);
        let first_sample_a = {
            for _ in 0..17 {
                hotspots_a.next_f64();
            }
            samples_a.next_f64()
        };

        let mut hotspots_b = SeededRng::stream(42, crate::constants::HOTSPOT_STREAM);
        let mut samples_b = SeededRng::stream(42, crate::constants::HEAT_SAMPLE_STREAM);
        let first_sample_b = {
            for _ in 0..9000 {
                hotspots_b.next_f64();
            }
            samples_b.next_f64()
        };

        assert_eq!(first_sample_a.to_bits(), first_sample_b.to_bits());
    }

    #[test]
    fn test_pick_in_bounds() {
        let mut rng = SeededRng::new(3);
        for _ in 0..1000 {
            assert_lt!(rng.pick(3), 3);
        }
        assert_eq!(rng.pick(0), 0);
    }
}
