/// Finds every occurrence of `pattern` in `text` by direct window
/// comparison.
///
/// ### Limitations
///
/// This is a naive O(n·m) reference used to validate the other exact
/// matchers; prefer [`boyer_moore_search`] or [`kmp_search`] for real
/// workloads.
///
/// [`boyer_moore_search`]: super::boyer_moore_search
/// [`kmp_search`]: super::kmp_search
#[must_use]
pub fn brute_force_search(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    text.windows(pattern.len())
        .enumerate()
        .filter(|(_, w)| *w == pattern)
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn baseline_units() {
        assert_eq!(brute_force_search(b"ATCGATCGATCG", b"GATC"), vec![3, 7]);
        assert_eq!(brute_force_search(b"AAAAAAA", b"AAA"), vec![0, 1, 2, 3, 4]);
        assert_eq!(brute_force_search(b"ATCG", b""), Vec::<usize>::new());
        assert_eq!(brute_force_search(b"ATCG", b"ATCGATCG"), Vec::<usize>::new());
    }
}
