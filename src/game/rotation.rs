//! Non-repeating random selection

use rand::Rng;
use rustc_hash::FxHashSet;

/// Hands out items of a list without repeats until every item has been used
///
/// Tracks indices, so the same `Rotation` should always be used with the same
/// list. Once the list is exhausted the history resets.
#[derive(Debug, Clone, Default)]
pub struct Rotation {
    used: FxHashSet<usize>,
}

impl Rotation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pick an unused item uniformly at random; `None` only for an empty list
    ///
    /// # Examples
    /// ```
    /// use puzzle_grove::game::Rotation;
    ///
    /// let items = ["OAK", "PINE", "PALM"];
    /// let mut rotation = Rotation::new();
    /// let mut rng = rand::rng();
    /// let mut seen: Vec<_> = (0..3).filter_map(|_| rotation.pick(&items, &mut rng)).collect();
    /// seen.sort_unstable();
    /// assert_eq!(seen, [&"OAK", &"PALM", &"PINE"]);
    /// ```
    pub fn pick<'a, T, R>(&mut self, items: &'a [T], rng: &mut R) -> Option<&'a T>
    where
        R: Rng + ?Sized,
    {
        if items.is_empty() {
            return None;
        }

        let mut available: Vec<usize> = (0..items.len()).filter(|i| !self.used.contains(i)).collect();
        if available.is_empty() {
            tracing::debug!(items = items.len(), "rotation exhausted, starting over");
            self.used.clear();
            available = (0..items.len()).collect();
        }

        let index = available[rng.random_range(0..available.len())];
        self.used.insert(index);
        items.get(index)
    }

    /// Number of items handed out since the last reset
    #[must_use]
    pub fn used(&self) -> usize {
        self.used.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha20Rng;

    #[test]
    fn no_repeats_within_a_cycle() {
        let items: Vec<u32> = (0..20).collect();
        let mut rotation = Rotation::new();
        let mut rng = ChaCha20Rng::seed_from_u64(4);

        let picked: FxHashSet<u32> = (0..20)
            .map(|_| *rotation.pick(&items, &mut rng).unwrap())
            .collect();
        assert_eq!(picked.len(), 20);
        assert_eq!(rotation.used(), 20);
    }

    #[test]
    fn resets_after_exhaustion() {
        let items = ["A", "B"];
        let mut rotation = Rotation::new();
        let mut rng = ChaCha20Rng::seed_from_u64(0);

        rotation.pick(&items, &mut rng);
        rotation.pick(&items, &mut rng);
        assert_eq!(rotation.used(), 2);

        assert!(rotation.pick(&items, &mut rng).is_some());
        assert_eq!(rotation.used(), 1);
    }

    #[test]
    fn empty_list() {
        let items: [u8; 0] = [];
        let mut rotation = Rotation::new();
        assert!(rotation.pick(&items, &mut ChaCha20Rng::seed_from_u64(0)).is_none());
    }
}
