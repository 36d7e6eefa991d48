/*!
 * Progress reporting for conversion runs.
 */

/// Fraction of a run that has completed, as a value in [0, 1].
///
/// Pure mapping from completed/total chunk counts: monotonically
/// non-decreasing across a run (completed only ever grows) and exactly 1.0
/// once every chunk has resolved. A run with zero chunks is trivially
/// complete; the pipeline never reports progress for such a run.
pub fn completion_fraction(completed: usize, total: usize) -> f64 {
    if total == 0 {
        return 1.0;
    }
    (completed as f64 / total as f64).clamp(0.0, 1.0)
}
