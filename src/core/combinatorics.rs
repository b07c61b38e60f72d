//! Exact-integer combinatorics for box and wheel ticket expansion
//!
//! Bet counts are small (fields of at most 18 entrants) but must be exact,
//! so everything here stays in integer arithmetic.

/// Binomial coefficient C(n, k)
///
/// The multiplicative form divides at every step; each prefix product is a
/// binomial coefficient itself, so the division is always exact.
pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut result: u64 = 1;
    for i in 0..k {
        result = result * (n - i) / (i + 1);
    }
    result
}

/// All size-`k` combinations of `items`, preserving input order
pub fn combinations(items: &[u8], k: usize) -> Vec<Vec<u8>> {
    if k > items.len() {
        return Vec::new();
    }
    if k == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for (i, &head) in items.iter().enumerate() {
        if items.len() - i < k {
            break;
        }
        for mut tail in combinations(&items[i + 1..], k - 1) {
            let mut combo = Vec::with_capacity(k);
            combo.push(head);
            combo.append(&mut tail);
            out.push(combo);
        }
    }
    out
}

/// All size-`k` permutations of `items`
pub fn permutations(items: &[u8], k: usize) -> Vec<Vec<u8>> {
    if k > items.len() {
        return Vec::new();
    }
    if k == 0 {
        return vec![Vec::new()];
    }
    let mut out = Vec::new();
    for (i, &head) in items.iter().enumerate() {
        let mut rest = Vec::with_capacity(items.len() - 1);
        rest.extend_from_slice(&items[..i]);
        rest.extend_from_slice(&items[i + 1..]);
        for mut tail in permutations(&rest, k - 1) {
            let mut perm = Vec::with_capacity(k);
            perm.push(head);
            perm.append(&mut tail);
            out.push(perm);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binomial_small_values() {
        assert_eq!(binomial(5, 2), 10);
        assert_eq!(binomial(18, 3), 816);
        assert_eq!(binomial(6, 0), 1);
        assert_eq!(binomial(6, 6), 1);
        assert_eq!(binomial(2, 3), 0);
    }

    #[test]
    fn test_combinations_of_pairs() {
        let pairs = combinations(&[1, 3, 5], 2);
        assert_eq!(pairs, vec![vec![1, 3], vec![1, 5], vec![3, 5]]);
    }

    #[test]
    fn test_combinations_count_matches_binomial() {
        let items: Vec<u8> = (1..=8).collect();
        for k in 0..=4usize {
            assert_eq!(
                combinations(&items, k).len() as u64,
                binomial(items.len() as u64, k as u64)
            );
        }
    }

    #[test]
    fn test_combinations_oversized_k() {
        assert!(combinations(&[1, 2], 3).is_empty());
    }

    #[test]
    fn test_permutations_of_pairs() {
        let pairs = permutations(&[1, 3], 2);
        assert_eq!(pairs, vec![vec![1, 3], vec![3, 1]]);
    }

    #[test]
    fn test_permutations_count() {
        // k * (k-1) * (k-2) ordered triples
        assert_eq!(permutations(&[1, 2, 3, 4, 5], 3).len(), 60);
        assert_eq!(permutations(&[1, 2, 3], 3).len(), 6);
        assert!(permutations(&[1, 2], 3).is_empty());
    }
}
