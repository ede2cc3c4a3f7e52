use motif::prelude::*;
use motif::search::{brute_force_search, levenshtein_search_naive, levenshtein_search_rolling};
use rand_xoshiro::{Xoshiro256PlusPlus, rand_core::SeedableRng};

const ALPHA: &[u8] = b"ATGC";

#[test]
fn exact_matchers_agree_on_random_sequences() {
    for seed in 0..5 {
        let text = rand_sequence(ALPHA, 2000, seed);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);

        for length in [3, 8, 20] {
            let pattern = extract_pattern(&text, length, &mut rng).unwrap();

            let expected = brute_force_search(&text, &pattern);
            assert!(!expected.is_empty());
            assert_eq!(exact_search(&text, &pattern, ExactAlgorithm::BoyerMoore), expected);
            assert_eq!(exact_search(&text, &pattern, ExactAlgorithm::Kmp), expected);
        }
    }
}

#[test]
fn kmp_comparisons_within_linear_bound() {
    for seed in 0..5 {
        let text = rand_sequence(ALPHA, 5000, seed);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed + 100);
        let pattern = extract_pattern(&text, 12, &mut rng).unwrap();

        let (_, comparisons) = exact_search_tallied(&text, &pattern, ExactAlgorithm::Kmp);
        assert!(comparisons <= 2 * text.len() as u64);
    }
}

#[test]
fn boyer_moore_is_sublinear_on_random_dna() {
    let text = rand_sequence(ALPHA, 5000, 42);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
    let pattern = extract_pattern(&text, 20, &mut rng).unwrap();

    let (bm_matches, bm_comparisons) = exact_search_tallied(&text, &pattern, ExactAlgorithm::BoyerMoore);
    let (kmp_matches, kmp_comparisons) = exact_search_tallied(&text, &pattern, ExactAlgorithm::Kmp);

    assert_eq!(bm_matches, kmp_matches);
    assert!(bm_comparisons < kmp_comparisons);
    assert!(bm_comparisons < text.len() as u64);
}

#[test]
fn rolling_row_equals_naive_on_mutated_patterns() {
    for seed in 0..3 {
        let text = rand_sequence(ALPHA, 300, seed);
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed + 7);
        let pattern = extract_pattern(&text, 10, &mut rng).unwrap();

        for max_distance in 0..=2 {
            // Substitutions keep the window aligned with the extraction
            // site, so a hit there is guaranteed within the edit budget.
            let substituted = mutate_pattern(&pattern, ALPHA, max_distance, MutationKind::Substitution, &mut rng);
            let naive = levenshtein_search_naive(&text, &substituted, max_distance);
            assert!(!naive.is_empty());
            assert_eq!(naive, levenshtein_search_rolling(&text, &substituted, max_distance));

            let mixed = mutate_pattern(&pattern, ALPHA, max_distance, MutationKind::Mixed, &mut rng);
            assert_eq!(
                levenshtein_search_naive(&text, &mixed, max_distance),
                levenshtein_search_rolling(&text, &mixed, max_distance)
            );
        }
    }
}

#[test]
fn tallied_dispatch_preserves_matches() {
    let text = rand_sequence(ALPHA, 500, 5);
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(5);
    let pattern = extract_pattern(&text, 8, &mut rng).unwrap();

    for strategy in [ApproximateStrategy::Naive, ApproximateStrategy::RollingRow] {
        let (matches, comparisons) = approximate_search_tallied(&text, &pattern, 1, strategy);
        assert_eq!(matches, approximate_search(&text, &pattern, 1, strategy));
        assert!(comparisons > 0);
    }
}

#[test]
fn edit_distance_metric_on_random_triples() {
    for seed in 0..10 {
        let a = rand_sequence(ALPHA, 20, seed);
        let b = rand_sequence(ALPHA, 25, seed + 50);
        let c = rand_sequence(ALPHA, 15, seed + 100);

        assert_eq!(edit_distance(&a, &a), 0);
        assert_eq!(edit_distance(&a, &b), edit_distance(&b, &a));
        assert!(edit_distance(&a, &c) <= edit_distance(&a, &b) + edit_distance(&b, &c));
    }
}
