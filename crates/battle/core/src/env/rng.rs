//! Deterministic random draws for target and action selection.
//!
//! Every draw is a pure function of a seed, so a battle replayed with the same
//! base seed and the same inputs makes the same choices.

/// RNG oracle for deterministic random number generation.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Generate a random value in range [min, max] inclusive.
    fn range(&self, seed: u64, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + (self.next_u32(seed) % span)
    }

    /// Picks an index from `weights` with probability proportional to each
    /// weight. Returns `None` when all weights are zero.
    fn weighted_index(&self, seed: u64, weights: &[u32]) -> Option<usize> {
        let total: u32 = weights.iter().sum();
        if total == 0 {
            return None;
        }
        let mut roll = self.next_u32(seed) % total;
        weights.iter().position(|&weight| {
            if roll < weight {
                true
            } else {
                roll -= weight;
                false
            }
        })
    }
}

/// PCG-XSH-RR generator: 64-bit LCG state, 32-bit permuted output.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn output(seed: u64) -> u32 {
        let state = seed
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(seed)
    }
}

/// Mixes the battle seed, draw counter, battler and draw purpose into a seed.
///
/// `context` separates independent draws made for the same battler at the
/// same nonce (0 = action choice, 1 = target choice).
pub fn compute_seed(battle_seed: u64, nonce: u64, battler: u32, context: u32) -> u64 {
    let mut hash = battle_seed;
    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (battler as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (context as u64).wrapping_mul(0x85ebca6b);

    // SplitMix-style avalanche
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
