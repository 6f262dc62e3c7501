//! Random test-data helpers.

use rand::distributions::Alphanumeric;
use rand::Rng;

const RANDOM_STRING_LEN: usize = 16;

/// Generates a random alphanumeric string suitable as a human-readable title.
///
/// Uniqueness across calls is probabilistic, not guaranteed.
pub fn random_string() -> String {
    random_string_with_rng(&mut rand::thread_rng())
}

/// Seedable variant of [`random_string`] for reproducible test scenarios.
pub fn random_string_with_rng<R: Rng>(rng: &mut R) -> String {
    rng.sample_iter(&Alphanumeric)
        .take(RANDOM_STRING_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_string_length_and_charset() {
        let s = random_string();
        assert_eq!(s.len(), RANDOM_STRING_LEN);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_random_string_differs_across_calls() {
        // Collisions are possible in principle but vanishingly unlikely
        assert_ne!(random_string(), random_string());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(random_string_with_rng(&mut a), random_string_with_rng(&mut b));
    }
}
