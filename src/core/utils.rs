use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Get the random number generator. If no seed is provided, the generator is seeded from the
/// operating system entropy source.
///
/// # Arguments
///
/// * `seed`: The optional seed number.
///
/// returns: `Box<dyn RngCore>`
pub fn get_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    let rng = match seed {
        None => ChaCha8Rng::from_entropy(),
        Some(s) => ChaCha8Rng::seed_from_u64(s),
    };
    Box::new(rng)
}

#[cfg(test)]
mod test {
    use rand::RngCore;

    use crate::core::get_rng;

    #[test]
    /// The same seed yields the same sequence
    fn test_seeded_rng() {
        let mut rng1 = get_rng(Some(10));
        let mut rng2 = get_rng(Some(10));
        let mut rng3 = get_rng(Some(11));
        let seq1: Vec<u64> = (0..5).map(|_| rng1.next_u64()).collect();
        let seq2: Vec<u64> = (0..5).map(|_| rng2.next_u64()).collect();
        let seq3: Vec<u64> = (0..5).map(|_| rng3.next_u64()).collect();
        assert_eq!(seq1, seq2);
        assert_ne!(seq1, seq3);
    }
}
