/// Rightmost index of each byte within `pattern`, or `-1` for absent bytes.
///
/// Built with a single left-to-right scan; later occurrences overwrite
/// earlier ones.
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn bad_character_table(pattern: &[u8]) -> [isize; 256] {
    let mut rightmost = [-1isize; 256];

    for (i, &b) in pattern.iter().enumerate() {
        rightmost[usize::from(b)] = i as isize;
    }

    rightmost
}

/// Shift distances for the good-suffix rule, indexed by the first
/// mismatching pattern position from the right.
///
/// The border-array computation covers both cases of the rule: the matched
/// suffix recurring elsewhere in the pattern, and a prefix of the pattern
/// equal to a suffix of the matched part. Every entry is at least 1, which
/// guarantees forward progress during the scan.
#[allow(clippy::needless_range_loop)]
#[must_use]
pub fn good_suffix_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut shift = vec![m; m];
    let mut border = vec![0usize; m + 1];

    // Case: a prefix of the pattern matches a suffix of the matched part.
    let mut i = m;
    let mut j = m + 1;
    border[i] = j;

    while i > 0 {
        while j <= m && pattern[i - 1] != pattern[j - 1] {
            if shift[j - 1] == m {
                shift[j - 1] = j - i;
            }
            j = border[j];
        }
        i -= 1;
        j -= 1;
        border[i] = j;
    }

    // Case: the matched suffix occurs elsewhere in the pattern.
    j = border[0];
    for i in 0..m {
        if shift[i] == m {
            shift[i] = j;
        }
        if i == j {
            j = border[j];
        }
    }

    shift
}

/// Amount to advance the window after a mismatch at pattern index `j`
/// against text byte `mismatched`. Always at least 1.
#[allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]
#[inline]
fn mismatch_shift(bad_char: &[isize; 256], good_suffix: &[usize], mismatched: u8, j: usize) -> usize {
    let by_bad_char = j as isize - bad_char[usize::from(mismatched)];
    let by_good_suffix = good_suffix[j] as isize;

    by_bad_char.max(by_good_suffix) as usize
}

/// Finds all occurrences of `pattern` in `text` using Boyer–Moore with the
/// bad-character and good-suffix heuristics.
///
/// Matches are returned as ascending 0-indexed start offsets, including
/// overlapping occurrences. An empty pattern or a pattern longer than the
/// text yields no matches.
///
/// # Example
/// ```
/// use motif::search::boyer_moore_search;
///
/// let text = b"ATCGATCGATCG";
/// assert_eq!(boyer_moore_search(text, b"GATC"), vec![3, 7]);
/// ```
#[must_use]
pub fn boyer_moore_search(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 || m > n {
        return Vec::new();
    }

    let bad_char = bad_character_table(pattern);
    let good_suffix = good_suffix_table(pattern);

    let mut matches = Vec::new();
    let mut s = 0;

    while s <= n - m {
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[s + j - 1] {
            j -= 1;
        }

        if j == 0 {
            matches.push(s);
            // Shifting by 1 at the text's tail keeps overlapping matches
            // near the end from being skipped.
            s += if s + m < n { good_suffix[0] } else { 1 };
        } else {
            s += mismatch_shift(&bad_char, &good_suffix, text[s + j - 1], j - 1);
        }
    }

    matches
}

/// Similar to [`boyer_moore_search`] but tallies every symbol comparison
/// made during the right-to-left scan, including the mismatching one.
#[must_use]
pub fn boyer_moore_search_tallied(text: &[u8], pattern: &[u8]) -> (Vec<usize>, u64) {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 || m > n {
        return (Vec::new(), 0);
    }

    let bad_char = bad_character_table(pattern);
    let good_suffix = good_suffix_table(pattern);

    let mut matches = Vec::new();
    let mut comparisons = 0u64;
    let mut s = 0;

    while s <= n - m {
        let mut j = m;
        while j > 0 {
            comparisons += 1;
            if pattern[j - 1] != text[s + j - 1] {
                break;
            }
            j -= 1;
        }

        if j == 0 {
            matches.push(s);
            s += if s + m < n { good_suffix[0] } else { 1 };
        } else {
            s += mismatch_shift(&bad_char, &good_suffix, text[s + j - 1], j - 1);
        }
    }

    (matches, comparisons)
}
