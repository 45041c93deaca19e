use rand::Rng;
use rand::seq::SliceRandom;

/// Returns a uniformly shuffled copy of `items`, leaving the input untouched.
#[must_use]
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    out.as_mut_slice().shuffle(rng);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let input: Vec<u32> = (0..12).collect();

        let mut out = shuffled(&input, &mut rng);
        assert_eq!(out.len(), input.len());
        out.sort_unstable();
        assert_eq!(out, input);
    }

    #[test]
    fn shuffle_keeps_duplicates() {
        let mut rng = StdRng::seed_from_u64(1);
        let input = vec!["a", "b", "a", "c", "a"];

        let mut out = shuffled(&input, &mut rng);
        out.sort_unstable();
        assert_eq!(out, vec!["a", "a", "a", "b", "c"]);
        assert_eq!(input, vec!["a", "b", "a", "c", "a"]);
    }

    #[test]
    fn shuffle_handles_empty_and_single() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(shuffled::<u8, _>(&[], &mut rng).is_empty());
        assert_eq!(shuffled(&[9], &mut rng), vec![9]);
    }
}
