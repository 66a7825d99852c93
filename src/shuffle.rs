//! In-place Fisher-Yates shuffle.

use rand::Rng;

/// Shuffles `items` in place with the Fisher-Yates (Knuth) algorithm.
///
/// Walks from the last index down to 1, swapping each position with a
/// uniformly chosen index in `0..=i`. That is exactly `len - 1` swaps, and
/// every ordering is equally likely given an unbiased `rng`. Slices of length
/// 0 or 1 are left untouched.
///
/// ```
/// use deckrs::shuffle::fisher_yates;
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut items = [1, 2, 3, 4, 5];
/// fisher_yates(&mut items, &mut ChaCha8Rng::seed_from_u64(7));
/// items.sort_unstable();
/// assert_eq!(items, [1, 2, 3, 4, 5]);
/// ```
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
