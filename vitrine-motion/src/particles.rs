/// Neon palette the ambient particles draw from, as 0xRRGGBB.
pub const PARTICLE_PALETTE: [u32; 3] = [0x00D4FF, 0xFF006E, 0x8AC926];

/// Particles created per page load.
pub const PARTICLE_COUNT: usize = 50;

/// One decorative background particle. Spawned once at startup with
/// randomized placement and timing, then left to its CSS animation forever.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleSpec {
    /// Horizontal position as a percentage of the layer width, `0..100`.
    pub left_pct: f32,
    /// Animation start offset in seconds, `0..6`.
    pub delay_s: f32,
    /// Animation duration in seconds, `3..6`.
    pub duration_s: f32,
    /// Fill color as 0xRRGGBB, drawn from [`PARTICLE_PALETTE`].
    pub color: u32,
}

/// Xorshift32 generator. Decorative randomness only; seeded from the clock
/// at startup and from fixed values in tests.
#[derive(Debug, Clone)]
pub struct Rng32 {
    state: u32,
}

impl Rng32 {
    pub fn new(seed: u32) -> Self {
        // xorshift sticks at zero
        Self { state: if seed == 0 { 0xDEAD_BEEF } else { seed } }
    }

    fn next_u32(&mut self) -> u32 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 17;
        self.state ^= self.state << 5;
        self.state
    }

    /// Uniform float in `0.0..=1.0`.
    pub fn next_f32(&mut self) -> f32 {
        self.next_u32() as f32 / u32::MAX as f32
    }

    /// Uniform pick from a slice; `None` on an empty slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = (self.next_f32() * items.len() as f32) as usize;
        items.get(idx.min(items.len() - 1))
    }
}

/// Rolls `count` particle specs.
pub fn scatter(rng: &mut Rng32, count: usize) -> Vec<ParticleSpec> {
    (0..count)
        .map(|_| ParticleSpec {
            left_pct: rng.next_f32() * 100.0,
            delay_s: rng.next_f32() * 6.0,
            duration_s: 3.0 + rng.next_f32() * 3.0,
            color: *rng.pick(&PARTICLE_PALETTE).unwrap_or(&PARTICLE_PALETTE[0]),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scatter_respects_ranges_and_palette() {
        let mut rng = Rng32::new(0x5EED_1234);
        let specs = scatter(&mut rng, 200);
        assert_eq!(specs.len(), 200);
        for spec in &specs {
            assert!((0.0..=100.0).contains(&spec.left_pct));
            assert!((0.0..=6.0).contains(&spec.delay_s));
            assert!((3.0..=6.0).contains(&spec.duration_s));
            assert!(PARTICLE_PALETTE.contains(&spec.color));
        }
    }

    #[test]
    fn test_scatter_is_deterministic_per_seed() {
        let a = scatter(&mut Rng32::new(7), 50);
        let b = scatter(&mut Rng32::new(7), 50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_zero_seed_does_not_stick() {
        let mut rng = Rng32::new(0);
        let first = rng.next_f32();
        let second = rng.next_f32();
        assert_ne!(first, second);
    }

    #[test]
    fn test_pick_stays_in_bounds() {
        let mut rng = Rng32::new(99);
        let wardrobe = ["a", "b", "c", "d", "e"];
        for _ in 0..100 {
            assert!(wardrobe.contains(rng.pick(&wardrobe).unwrap()));
        }
        assert_eq!(rng.pick::<u32>(&[]), None);
    }
}
