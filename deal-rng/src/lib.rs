//! xoshiro256++ random source used for shuffling.
//!
//! Reference: https://prng.di.unimi.it/
//! Period: 2^256 - 1, passes BigCrush and PractRand. Not cryptographic.
//!
//! Each generator owns its state, so independent generators can be used from
//! different threads without any locking.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Distinguishes generators seeded from entropy within the same clock tick.
static ENTROPY_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Fast, high-quality PRNG using the xoshiro256++ algorithm.
#[derive(Clone, Debug)]
pub struct Xoshiro256PlusPlus {
    s: [u64; 4],
}

impl Xoshiro256PlusPlus {
    /// Create a new RNG seeded from a u64.
    ///
    /// Uses SplitMix64 to expand the seed into the full 256-bit state,
    /// as recommended by the xoshiro authors.
    pub fn seed_from_u64(seed: u64) -> Self {
        let mut z = seed;
        let mut state = [0u64; 4];
        for s in &mut state {
            z = z.wrapping_add(0x9e3779b97f4a7c15);
            let mut x = z;
            x = (x ^ (x >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
            x = (x ^ (x >> 27)).wrapping_mul(0x94d049bb133111eb);
            *s = x ^ (x >> 31);
        }
        Self { s: state }
    }

    /// Create a new RNG seeded from the system clock.
    ///
    /// Microsecond time is mixed with a process-wide counter so generators
    /// created back to back still get distinct streams.
    pub fn from_entropy() -> Self {
        Self::seed_from_u64(entropy_seed())
    }

    /// Generate the next u64 value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let result = (self.s[0].wrapping_add(self.s[3]))
            .rotate_left(23)
            .wrapping_add(self.s[0]);

        let t = self.s[1] << 17;

        self.s[2] ^= self.s[0];
        self.s[3] ^= self.s[1];
        self.s[1] ^= self.s[2];
        self.s[0] ^= self.s[3];

        self.s[2] ^= t;
        self.s[3] = self.s[3].rotate_left(45);

        result
    }

    /// Generate a random u32 (uses upper bits of u64 for better quality).
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a random index in range [0, n) without modulo bias.
    ///
    /// `n` must be non-zero.
    #[inline]
    pub fn next_index(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0, "next_index called with empty range");

        if n.is_power_of_two() {
            return self.next_u32() & (n - 1);
        }

        // Lemire's nearly divisionless method
        let mut x = self.next_u32();
        let mut m = (x as u64) * (n as u64);
        let mut l = m as u32;

        if l < n {
            let t = n.wrapping_neg() % n;
            while l < t {
                x = self.next_u32();
                m = (x as u64) * (n as u64);
                l = m as u32;
            }
        }

        (m >> 32) as u32
    }

    /// Shuffle a slice in place with Fisher-Yates.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.next_index((i + 1) as u32) as usize;
            items.swap(i, j);
        }
    }
}

fn entropy_seed() -> u64 {
    let micros = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0);
    let count = ENTROPY_COUNTER.fetch_add(1, Ordering::Relaxed);
    micros ^ count.wrapping_mul(0x9e3779b97f4a7c15)
}
