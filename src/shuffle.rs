use rand::Rng;

/// Returns a uniformly random permutation of `items`, leaving the input untouched.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

/// Fisher–Yates with a caller-supplied generator.
pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}

/// Shuffled `0..len`.
pub fn shuffled_indices<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<usize> {
    let indices: Vec<usize> = (0..len).collect();
    shuffle_with(&indices, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn short_inputs_are_copied() {
        let empty: Vec<u8> = Vec::new();
        assert!(shuffle(&empty).is_empty());
        assert_eq!(shuffle(&["only"]), vec!["only"]);
    }

    #[test]
    fn input_is_not_modified() {
        let input = vec![1, 2, 3, 4, 5];
        let _ = shuffle(&input);
        assert_eq!(input, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn output_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(7);
        let input: Vec<u32> = (0..20).collect();
        for _ in 0..100 {
            let mut out = shuffle_with(&input, &mut rng);
            out.sort_unstable();
            assert_eq!(out, input);
        }
    }

    #[test]
    fn every_element_reaches_every_position() {
        let mut rng = StdRng::seed_from_u64(42);
        let input = ['a', 'b', 'c', 'd'];
        let mut seen = [[false; 4]; 4];
        for _ in 0..1000 {
            let out = shuffle_with(&input, &mut rng);
            for (pos, c) in out.iter().enumerate() {
                let elem = input.iter().position(|x| x == c).unwrap();
                seen[elem][pos] = true;
            }
        }
        assert!(seen.iter().all(|row| row.iter().all(|&hit| hit)));
    }

    #[test]
    fn same_seed_same_order() {
        let a = shuffled_indices(10, &mut StdRng::seed_from_u64(3));
        let b = shuffled_indices(10, &mut StdRng::seed_from_u64(3));
        assert_eq!(a, b);
    }
}
