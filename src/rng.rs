//! Date-stable pseudo-random source
//!
//! A 32-bit linear congruential generator seeded from a calendar date, so a
//! daily puzzle comes out identical for every player on that day.

use rand::RngCore;

const MULTIPLIER: u64 = 1_664_525;
const INCREMENT: u64 = 1_013_904_223;
const MODULUS: u64 = 1 << 32;

/// Linear congruential generator: `state = (state * 1664525 + 1013904223) mod 2^32`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyLcg {
    state: u64,
}

impl DailyLcg {
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    /// Seed with `year * 10000 + month * 100 + day`
    ///
    /// # Examples
    /// ```
    /// use puzzle_grove::rng::DailyLcg;
    /// use rand::Rng;
    ///
    /// let mut a = DailyLcg::from_date(2025, 3, 14);
    /// let mut b = DailyLcg::from_date(2025, 3, 14);
    /// assert_eq!(a.random_range(0..100), b.random_range(0..100));
    /// ```
    #[must_use]
    pub const fn from_date(year: u32, month: u32, day: u32) -> Self {
        Self::new(
            year.wrapping_mul(10_000)
                .wrapping_add(month.wrapping_mul(100))
                .wrapping_add(day),
        )
    }
}

impl RngCore for DailyLcg {
    fn next_u32(&mut self) -> u32 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.state as u32
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
