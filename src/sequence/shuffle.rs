//! Uniformly randomized permutation.

use rand::Rng;

/// Returns the elements in a uniformly random order.
///
/// The input is left unmodified; the result holds every element exactly
/// once. Randomness comes from the thread-local generator; use
/// [`shuffle_with`] to supply a seeded generator instead.
///
/// # Examples
///
/// ```rust
/// use funcol::sequence::shuffle;
///
/// let original = vec![1, 2, 3, 4, 5];
/// let mut permuted = shuffle(&original);
/// assert_eq!(original, vec![1, 2, 3, 4, 5]);
///
/// permuted.sort_unstable();
/// assert_eq!(permuted, original);
/// ```
pub fn shuffle<V: Clone>(sequence: &[V]) -> Vec<V> {
    shuffle_with(sequence, &mut rand::thread_rng())
}

/// Returns the elements in a random order drawn from the given generator.
///
/// A Fisher-Yates walk: each position is swapped with a uniformly chosen
/// position at or below it, so every permutation is equally likely for a
/// uniform generator.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use funcol::sequence::shuffle_with;
///
/// let mut generator = StdRng::seed_from_u64(7);
/// let permuted = shuffle_with(&[1, 2, 3], &mut generator);
/// assert_eq!(permuted.len(), 3);
/// ```
pub fn shuffle_with<V: Clone, R>(sequence: &[V], generator: &mut R) -> Vec<V>
where
    R: Rng + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    for position in (1..shuffled.len()).rev() {
        let chosen = generator.gen_range(0..=position);
        shuffled.swap(position, chosen);
    }
    shuffled
}
