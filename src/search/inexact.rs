use crate::distance::{edit_distance, edit_distance_tallied};

/// The search strategy used by [`approximate_search`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ApproximateStrategy {
    /// Full edit-distance table per window. O(n·m²) time; the correctness
    /// reference.
    Naive,
    /// Two-row DP per window. O(m) memory with the same asymptotic time,
    /// and identical results to [`Naive`](ApproximateStrategy::Naive) on
    /// every input.
    RollingRow,
    /// Single banded pass over the text. O(n·d) time, but with a reduced
    /// correctness guarantee; see [`levenshtein_search_banded`].
    Banded,
}

/// Fill value for DP cells outside the banded corridor. Any value strictly
/// greater than the threshold works; a cell holding it can never lie on a
/// path that satisfies the threshold.
#[inline]
fn band_sentinel(max_distance: usize) -> usize {
    max_distance.saturating_add(1)
}

/// Finds all offsets where the length-`m` window of `text` is within
/// `max_distance` edits of `pattern`, with the chosen strategy.
///
/// An empty pattern matches every offset `0..=n`; a pattern longer than the
/// text matches nowhere. A negative threshold is unrepresentable by
/// construction.
///
/// # Example
/// ```
/// use motif::search::{ApproximateStrategy, approximate_search};
///
/// let matches = approximate_search(b"ATCGATCG", b"GATG", 1, ApproximateStrategy::Naive);
/// assert_eq!(matches, vec![3]);
/// ```
#[inline]
#[must_use]
pub fn approximate_search(text: &[u8], pattern: &[u8], max_distance: usize, strategy: ApproximateStrategy) -> Vec<usize> {
    match strategy {
        ApproximateStrategy::Naive => levenshtein_search_naive(text, pattern, max_distance),
        ApproximateStrategy::RollingRow => levenshtein_search_rolling(text, pattern, max_distance),
        ApproximateStrategy::Banded => levenshtein_search_banded(text, pattern, max_distance),
    }
}

/// Similar to [`approximate_search`] but also tallies one comparison per DP
/// cell's cost evaluation.
#[inline]
#[must_use]
pub fn approximate_search_tallied(
    text: &[u8], pattern: &[u8], max_distance: usize, strategy: ApproximateStrategy,
) -> (Vec<usize>, u64) {
    match strategy {
        ApproximateStrategy::Naive => levenshtein_search_naive_tallied(text, pattern, max_distance),
        ApproximateStrategy::RollingRow => levenshtein_search_rolling_tallied(text, pattern, max_distance),
        ApproximateStrategy::Banded => levenshtein_search_banded_tallied(text, pattern, max_distance),
    }
}

/// Recomputes the full edit distance for every window of the text.
///
/// ### Limitations
///
/// O(n·m²) total work; only suitable as a correctness reference for the
/// other strategies.
#[must_use]
pub fn levenshtein_search_naive(text: &[u8], pattern: &[u8], max_distance: usize) -> Vec<usize> {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 {
        return (0..=n).collect();
    }
    if m > n {
        return Vec::new();
    }

    text.windows(m)
        .enumerate()
        .filter(|(_, w)| edit_distance(w, pattern) <= max_distance)
        .map(|(i, _)| i)
        .collect()
}

/// Similar to [`levenshtein_search_naive`] but tallies DP cell cost
/// evaluations across all windows.
#[must_use]
pub fn levenshtein_search_naive_tallied(text: &[u8], pattern: &[u8], max_distance: usize) -> (Vec<usize>, u64) {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 {
        return ((0..=n).collect(), 0);
    }
    if m > n {
        return (Vec::new(), 0);
    }

    let mut matches = Vec::new();
    let mut comparisons = 0u64;

    for (start, window) in text.windows(m).enumerate() {
        let (distance, cells) = edit_distance_tallied(window, pattern);
        comparisons += cells;
        if distance <= max_distance {
            matches.push(start);
        }
    }

    (matches, comparisons)
}

/// Sliding-window search retaining only two DP rows per window.
///
/// Produces results identical to [`levenshtein_search_naive`] for every
/// input, with O(m) memory instead of a full table.
#[must_use]
pub fn levenshtein_search_rolling(text: &[u8], pattern: &[u8], max_distance: usize) -> Vec<usize> {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 {
        return (0..=n).collect();
    }
    if m > n {
        return Vec::new();
    }

    let mut matches = Vec::new();
    let mut prev = vec![0usize; m + 1];
    let mut curr = vec![0usize; m + 1];

    for (start, window) in text.windows(m).enumerate() {
        for (j, cell) in prev.iter_mut().enumerate() {
            *cell = j;
        }

        for i in 1..=m {
            curr[0] = i;
            for j in 1..=m {
                let cost = usize::from(window[i - 1] != pattern[j - 1]);
                curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        // After the final swap the completed row lives in `prev`.
        if prev[m] <= max_distance {
            matches.push(start);
        }
    }

    matches
}

/// Similar to [`levenshtein_search_rolling`] but tallies one comparison per
/// DP cell's cost evaluation.
#[must_use]
pub fn levenshtein_search_rolling_tallied(text: &[u8], pattern: &[u8], max_distance: usize) -> (Vec<usize>, u64) {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 {
        return ((0..=n).collect(), 0);
    }
    if m > n {
        return (Vec::new(), 0);
    }

    let mut matches = Vec::new();
    let mut comparisons = 0u64;
    let mut prev = vec![0usize; m + 1];
    let mut curr = vec![0usize; m + 1];

    for (start, window) in text.windows(m).enumerate() {
        for (j, cell) in prev.iter_mut().enumerate() {
            *cell = j;
        }

        for i in 1..=m {
            curr[0] = i;
            for j in 1..=m {
                comparisons += 1;
                let cost = usize::from(window[i - 1] != pattern[j - 1]);
                curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            }
            std::mem::swap(&mut prev, &mut curr);
        }

        if prev[m] <= max_distance {
            matches.push(start);
        }
    }

    (matches, comparisons)
}

/// Single-pass banded search: one DP row over the whole text, with active
/// columns restricted to the corridor `[max(1, i - d), min(m, i + d)]` for
/// threshold `d`. Cells outside the corridor hold a sentinel above the
/// threshold, so no path through them can satisfy it. A match at `i - m` is
/// emitted whenever `i >= m` and the row's final cell is within the
/// threshold.
///
/// ### Limitations
///
/// This is a reduced-guarantee optimization, not a drop-in replacement for
/// the window strategies: it agrees with them only while no valid alignment
/// path needs to leave the corridor, which in practice confines reliable
/// detection to matches within `max_distance` of the text start. Widening
/// the corridor to at least `max(m, 2 * max_distance + 1)` would restore
/// equivalence at the cost of the O(n·d) profile.
#[must_use]
pub fn levenshtein_search_banded(text: &[u8], pattern: &[u8], max_distance: usize) -> Vec<usize> {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 {
        return (0..=n).collect();
    }
    if m > n {
        return Vec::new();
    }

    let sentinel = band_sentinel(max_distance);
    let mut matches = Vec::new();
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];

    for i in 1..=n {
        let lo = 1.max(i.saturating_sub(max_distance));
        let hi = m.min(i.saturating_add(max_distance));

        curr.fill(0);
        curr[0] = i;

        for j in lo..=hi {
            let cost = usize::from(text[i - 1] != pattern[j - 1]);
            curr[j] = (curr[j - 1] + 1).min(prev[j] + 1).min(prev[j - 1] + cost);
        }

        // Once the corridor moves past column m the whole row is filled.
        for cell in &mut curr[1..lo.min(m + 1)] {
            *cell = sentinel;
        }
        if hi < m {
            for cell in &mut curr[hi + 1..] {
                *cell = sentinel;
            }
        }

        if i >= m && curr[m] <= max_distance {
            matches.push(i - m);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    matches
}

/// Similar to [`levenshtein_search_banded`] but tallies one comparison per
/// corridor cell's cost evaluation.
#[must_use]
pub fn levenshtein_search_banded_tallied(text: &[u8], pattern: &[u8], max_distance: usize) -> (Vec<usize>, u64) {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 {
        return ((0..=n).collect(), 0);
    }
    if m > n {
        return (Vec::new(), 0);
    }

    let sentinel = band_sentinel(max_distance);
    let mut matches = Vec::new();
    let mut comparisons = 0u64;
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];

    for i in 1..=n {
        let lo = 1.max(i.saturating_sub(max_distance));
        let hi = m.min(i.saturating_add(max_distance));

        curr.fill(0);
        curr[0] = i;

        for j in lo..=hi {
            comparisons += 1;
            let cost = usize::from(text[i - 1] != pattern[j - 1]);
            curr[j] = (curr[j - 1] + 1).min(prev[j] + 1).min(prev[j - 1] + cost);
        }

        for cell in &mut curr[1..lo.min(m + 1)] {
            *cell = sentinel;
        }
        if hi < m {
            for cell in &mut curr[hi + 1..] {
                *cell = sentinel;
            }
        }

        if i >= m && curr[m] <= max_distance {
            matches.push(i - m);
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    (matches, comparisons)
}
