// Rate derivation tests (pure parts of the sampler)

use reslight::sampler::rate_from_counters;

#[test]
fn test_rate_from_counter_deltas() {
    let rates = rate_from_counters((1_000, 2_000), (3_000, 6_000), 2.0);
    assert_eq!(rates.up_bps, 1_000.0);
    assert_eq!(rates.down_bps, 2_000.0);
}

#[test]
fn test_rate_zero_elapsed_returns_zero() {
    let rates = rate_from_counters((0, 0), (4_096, 4_096), 0.0);
    assert_eq!(rates.up_bps, 0.0);
    assert_eq!(rates.down_bps, 0.0);

    let rates = rate_from_counters((0, 0), (4_096, 4_096), -1.0);
    assert_eq!(rates.up_bps, 0.0);
    assert_eq!(rates.down_bps, 0.0);
}

#[test]
fn test_rate_counter_reset_does_not_underflow() {
    // Counters can go backwards (interface reset); saturate to zero.
    let rates = rate_from_counters((10_000, 10_000), (100, 100), 1.0);
    assert_eq!(rates.up_bps, 0.0);
    assert_eq!(rates.down_bps, 0.0);
}
