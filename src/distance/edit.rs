/// Computes the Levenshtein edit distance between two byte sequences using
/// the full Wagner–Fischer table.
///
/// The distance is the minimum number of single-symbol insertions,
/// deletions, and substitutions transforming one sequence into the other.
/// It is symmetric, zero iff the inputs are equal, and satisfies the
/// triangle inequality.
///
/// # Example
/// ```
/// use motif::distance::edit_distance;
///
/// assert_eq!(edit_distance(b"ATG", b"ATA"), 1);
/// assert_eq!(edit_distance(b"ATG", b"ATGC"), 1);
/// assert_eq!(edit_distance(b"AAAA", b"TTTT"), 4);
/// ```
#[must_use]
pub fn edit_distance(a: &[u8], b: &[u8]) -> usize {
    let (n, m) = (a.len(), b.len());
    if n == 0 {
        return m;
    }
    if m == 0 {
        return n;
    }

    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1) // deletion
                .min(dp[i][j - 1] + 1) // insertion
                .min(dp[i - 1][j - 1] + cost); // substitution
        }
    }

    dp[n][m]
}

/// Similar to [`edit_distance`] but tallies one comparison per DP cell's
/// cost evaluation.
#[must_use]
pub fn edit_distance_tallied(a: &[u8], b: &[u8]) -> (usize, u64) {
    let (n, m) = (a.len(), b.len());
    if n == 0 {
        return (m, 0);
    }
    if m == 0 {
        return (n, 0);
    }

    let mut comparisons = 0u64;
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=n {
        for j in 1..=m {
            comparisons += 1;
            let cost = usize::from(a[i - 1] != b[j - 1]);
            dp[i][j] = (dp[i - 1][j] + 1)
                .min(dp[i][j - 1] + 1)
                .min(dp[i - 1][j - 1] + cost);
        }
    }

    (dp[n][m], comparisons)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn distance_units() {
        assert_eq!(edit_distance(b"ATG", b"ATG"), 0);
        assert_eq!(edit_distance(b"ATG", b"ATA"), 1);
        assert_eq!(edit_distance(b"ATG", b"AT"), 1);
        assert_eq!(edit_distance(b"ATG", b"ATGC"), 1);
        assert_eq!(edit_distance(b"ATCG", b"ATGG"), 1);
        assert_eq!(edit_distance(b"AAAA", b"TTTT"), 4);
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(edit_distance(b"", b""), 0);
        assert_eq!(edit_distance(b"A", b""), 1);
        assert_eq!(edit_distance(b"", b"A"), 1);
        assert_eq!(edit_distance(b"", b"ATCG"), 4);
    }

    #[test]
    fn metric_properties() {
        let sequences: [&[u8]; 5] = [b"ATCG", b"ATGG", b"A", b"GATTACA", b""];

        for a in sequences {
            assert_eq!(edit_distance(a, a), 0);
            for b in sequences {
                assert_eq!(edit_distance(a, b), edit_distance(b, a));
                for c in sequences {
                    assert!(edit_distance(a, c) <= edit_distance(a, b) + edit_distance(b, c));
                }
            }
        }
    }

    #[test]
    fn tallied_visits_every_cell() {
        let (distance, comparisons) = edit_distance_tallied(b"GATTACA", b"ATCG");
        assert_eq!(distance, edit_distance(b"GATTACA", b"ATCG"));
        assert_eq!(comparisons, 7 * 4);

        assert_eq!(edit_distance_tallied(b"", b"ATCG"), (4, 0));
    }
}
