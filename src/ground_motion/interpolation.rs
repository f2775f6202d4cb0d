//! Stateless queries over a sample sequence.

/// Piecewise-linear load factor at `pseudo_time`.
///
/// With `incr = pseudo_time / time_step` and `i = floor(incr)`, the value is
/// `scale_factor * (s[i] + (s[i+1] - s[i]) * (incr - i))`.
///
/// Returns `0.0` when `pseudo_time < 0`, when `samples` is empty, or when
/// `i + 1 >= samples.len()`. A query at or after the time of the last sample
/// therefore yields zero: the last usable interval is
/// `[(n-2) * time_step, (n-1) * time_step)` and the final sample is never held.
///
/// Arguments
/// -----------------
/// * `samples`: raw samples, one per time step.
/// * `time_step`: spacing of the samples, strictly positive for a non-empty sequence.
/// * `scale_factor`: multiplier applied to the interpolated value.
/// * `pseudo_time`: query time, in the unit of `time_step`.
pub fn interpolate(samples: &[f64], time_step: f64, scale_factor: f64, pseudo_time: f64) -> f64 {
    if pseudo_time < 0.0 || samples.is_empty() {
        return 0.0;
    }

    let incr = pseudo_time / time_step;
    if !incr.is_finite() {
        return 0.0;
    }
    let lower = incr.floor();
    if lower + 1.0 >= samples.len() as f64 {
        return 0.0;
    }

    let i = lower as usize;
    let (value1, value2) = (samples[i], samples[i + 1]);
    scale_factor * (value1 + (value2 - value1) * (incr - lower))
}

/// Largest absolute sample, `None` for an empty sequence.
pub fn peak_abs(samples: &[f64]) -> Option<f64> {
    samples.iter().map(|v| v.abs()).reduce(f64::max)
}
