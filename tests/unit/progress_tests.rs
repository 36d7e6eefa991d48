/*!
 * Tests for the progress completion fraction
 */

use hinglify::transliteration::completion_fraction;

/// Test standard fractions
#[test]
fn test_completion_fraction_withPartialCompletion_shouldReturnRatio() {
    assert_eq!(completion_fraction(0, 4), 0.0);
    assert_eq!(completion_fraction(1, 4), 0.25);
    assert_eq!(completion_fraction(2, 4), 0.5);
    assert_eq!(completion_fraction(4, 4), 1.0);
}

/// Test that a run with zero chunks counts as complete
#[test]
fn test_completion_fraction_withZeroTotal_shouldReturnOne() {
    assert_eq!(completion_fraction(0, 0), 1.0);
}

/// Test that full completion is exactly 1.0, not merely close to it
#[test]
fn test_completion_fraction_withFullCompletion_shouldBeExactlyOne() {
    for total in [1, 3, 7, 50, 120] {
        assert_eq!(completion_fraction(total, total), 1.0);
    }
}

/// Test that the fraction never leaves the unit interval
#[test]
fn test_completion_fraction_withOvercount_shouldClampToOne() {
    assert_eq!(completion_fraction(5, 4), 1.0);
}

/// Test monotonicity over a whole run
#[test]
fn test_completion_fraction_withIncreasingCompleted_shouldBeMonotone() {
    let total = 9;
    let fractions: Vec<f64> = (0..=total).map(|c| completion_fraction(c, total)).collect();
    assert!(fractions.windows(2).all(|w| w[0] <= w[1]));
}
