/// Longest proper prefix of `pattern[..=i]` that is also a suffix of it,
/// for every `i`.
///
/// `lps[0]` is always 0, and `lps[i] <= i` holds for all entries. The table
/// is built by self-comparison with a fallback index: a mismatch at a
/// non-zero prefix length falls back to `lps[j - 1]` without advancing.
#[must_use]
pub fn lps_table(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0usize; pattern.len()];
    let mut j = 0;
    let mut i = 1;

    while i < pattern.len() {
        if pattern[i] == pattern[j] {
            j += 1;
            lps[i] = j;
            i += 1;
        } else if j > 0 {
            j = lps[j - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

/// Finds all occurrences of `pattern` in `text` using Knuth–Morris–Pratt.
///
/// Matches are returned as ascending 0-indexed start offsets, including
/// overlapping occurrences. An empty pattern or a pattern longer than the
/// text yields no matches.
///
/// The total number of symbol comparisons is bounded by `2n`: each fallback
/// step is amortized against previously matched symbols.
///
/// # Example
/// ```
/// use motif::search::kmp_search;
///
/// let text = b"ATCGATCGATCG";
/// assert_eq!(kmp_search(text, b"GATC"), vec![3, 7]);
/// ```
#[must_use]
pub fn kmp_search(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 || m > n {
        return Vec::new();
    }

    let lps = lps_table(pattern);
    let mut matches = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < n {
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                matches.push(i - j);
                // Fall back instead of resetting so overlapping
                // occurrences are found.
                j = lps[j - 1];
            }
        } else if j > 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    matches
}

/// Similar to [`kmp_search`] but tallies each symbol comparison performed
/// during the scan.
#[must_use]
pub fn kmp_search_tallied(text: &[u8], pattern: &[u8]) -> (Vec<usize>, u64) {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 || m > n {
        return (Vec::new(), 0);
    }

    let lps = lps_table(pattern);
    let mut matches = Vec::new();
    let mut comparisons = 0u64;
    let (mut i, mut j) = (0, 0);

    while i < n {
        comparisons += 1;
        if text[i] == pattern[j] {
            i += 1;
            j += 1;

            if j == m {
                matches.push(i - j);
                j = lps[j - 1];
            }
        } else if j > 0 {
            j = lps[j - 1];
        } else {
            i += 1;
        }
    }

    (matches, comparisons)
}
