//! Tests for deterministic RNG
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce same sequence.

use txgen_core_rs::RngManager;

#[test]
fn test_rng_new_with_seed() {
    let rng = RngManager::new(12345);
    assert_eq!(rng.get_state(), 12345);
}

#[test]
fn test_rng_next_deterministic() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(12345);

    // Same seed should produce same sequence
    for _ in 0..100 {
        let val1 = rng1.next();
        let val2 = rng2.next();
        assert_eq!(val1, val2, "RNG not deterministic!");
    }
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(54321);

    let val1 = rng1.next();
    let val2 = rng2.next();

    assert_ne!(
        val1, val2,
        "Different seeds should produce different values"
    );
}

#[test]
fn test_rng_range() {
    let mut rng = RngManager::new(12345);

    for _ in 0..100 {
        let val = rng.range(0, 100);
        assert!(val >= 0 && val < 100, "Value {} out of range [0, 100)", val);
    }
}

#[test]
fn test_rng_range_single_value() {
    let mut rng = RngManager::new(12345);

    // Range [5, 6) should always return 5
    let val = rng.range(5, 6);
    assert_eq!(val, 5);
}

#[test]
fn test_rng_range_deterministic() {
    let mut rng1 = RngManager::new(99999);
    let mut rng2 = RngManager::new(99999);

    for _ in 0..50 {
        let val1 = rng1.range(10_000, 19_999);
        let val2 = rng2.range(10_000, 19_999);
        assert_eq!(val1, val2, "range() not deterministic!");
    }
}

#[test]
fn test_rng_state_advances() {
    let mut rng = RngManager::new(12345);
    let initial_state = rng.get_state();

    rng.next();
    let new_state = rng.get_state();

    assert_ne!(initial_state, new_state, "RNG state should advance");
}

#[test]
fn test_uniform_deterministic_and_bounded() {
    let mut rng1 = RngManager::new(4242);
    let mut rng2 = RngManager::new(4242);

    for _ in 0..1_000 {
        let val1 = rng1.uniform(0.9, 1.1);
        let val2 = rng2.uniform(0.9, 1.1);
        assert_eq!(val1, val2, "uniform() not deterministic!");
        assert!(val1 >= 0.9 && val1 < 1.1, "uniform() value {} out of bounds", val1);
    }
}

#[test]
fn test_normal_uses_two_draws_per_call() {
    // The reproducibility contract fixes Box-Muller at two uniforms
    // per sample; a following draw must line up accordingly.
    let mut sampled = RngManager::new(31337);
    let _ = sampled.normal(10.2, 0.9);

    let mut manual = RngManager::new(31337);
    manual.next_f64();
    manual.next_f64();

    assert_eq!(sampled.next(), manual.next());
}

#[test]
fn test_uniform_sample_mean() {
    let mut rng = RngManager::new(2024);

    let n = 100_000;
    let sum: f64 = (0..n).map(|_| rng.uniform(0.9, 1.1)).sum();
    let mean = sum / n as f64;

    assert!(
        (mean - 1.0).abs() < 0.001,
        "uniform [0.9, 1.1) sample mean {} too far from 1.0",
        mean
    );
}
