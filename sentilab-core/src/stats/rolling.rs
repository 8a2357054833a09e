//! Rolling mean and rolling sample standard deviation.
//!
//! Window anchored at position `i` covers `values[i..i + window]`. With a
//! newest-first series that is the reading at `i` and the `window - 1`
//! readings before it. Positions too close to the oldest end to fill a
//! window get `None` (strict windows: `n - window + 1` defined values when
//! `n >= window`, none otherwise).

/// Arithmetic mean. `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Sample standard deviation (divide by `n - 1`). `None` below two values.
pub fn sample_std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    let sum_sq: f64 = values
        .iter()
        .map(|v| {
            let diff = v - m;
            diff * diff
        })
        .sum();
    Some((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Rolling arithmetic mean over `window` values.
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut result = vec![None; n];

    if window == 0 || n < window {
        return result;
    }

    // Slide from the oldest full window towards position 0 so the entering
    // value is the newer one, matching how the series grows over time.
    let last = n - window;
    let mut sum: f64 = values[last..].iter().sum();
    result[last] = Some(sum / window as f64);

    for i in (0..last).rev() {
        sum = sum - values[i + window] + values[i];
        result[i] = Some(sum / window as f64);
    }

    result
}

/// Rolling sample standard deviation over `window` values.
///
/// Each window is computed from scratch (two-pass) so the result does not
/// drift with series length. `window < 2` yields no values.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let n = values.len();
    let mut result = vec![None; n];

    if window < 2 || n < window {
        return result;
    }

    for i in 0..=(n - window) {
        result[i] = sample_std_dev(&values[i..i + window]);
    }

    result
}
