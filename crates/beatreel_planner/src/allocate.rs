//! Duration allocation across beats.

/// Split `target` seconds across beats in proportion to `weights`.
///
/// Every share is `clamp(scale × weight, floor, ceiling)` where the ceiling is
/// `ceiling_ratio` times the mean share (never below the floor). The scale is
/// the one at which the clamped shares sum to `target`; it exists whenever
/// `floor × n < target`, since the ceiling is at least the mean share. Shares
/// are then rounded to hundredths, with the rounding residual applied to the
/// longest share.
///
/// When the target cannot cover the floor for every beat, every beat gets the
/// floor and the total overshoots.
pub(crate) fn allocate(weights: &[f64], target: f64, floor: f64, ceiling_ratio: f64) -> Vec<f64> {
    let count = weights.len();
    if count == 0 {
        return Vec::new();
    }
    if target <= floor * count as f64 {
        return vec![floor; count];
    }

    let weights: Vec<f64> = weights
        .iter()
        .map(|w| if w.is_finite() && *w > 0.0 { *w } else { 1.0 })
        .collect();
    let ceiling = (ceiling_ratio * target / count as f64).max(floor);
    let clamped = |scale: f64| -> Vec<f64> {
        weights
            .iter()
            .map(|w| (scale * w).clamp(floor, ceiling))
            .collect()
    };

    // The clamped total is non-decreasing in the scale: floor × n at zero,
    // ceiling × n once the lightest weight reaches the ceiling.
    let lightest = weights.iter().copied().fold(f64::INFINITY, f64::min);
    let (mut low, mut high) = (0.0, ceiling / lightest);
    for _ in 0..SCALE_ITERATIONS {
        let mid = (low + high) / 2.0;
        if clamped(mid).iter().sum::<f64>() < target {
            low = mid;
        } else {
            high = mid;
        }
    }

    round_to_target(clamped(high), target)
}

/// Bisection steps; enough to pin the scale to double precision.
const SCALE_ITERATIONS: usize = 128;

fn round_to_target(shares: Vec<f64>, target: f64) -> Vec<f64> {
    let mut rounded: Vec<f64> = shares.iter().map(|s| round_cents(*s)).collect();
    let residual = round_cents(target - rounded.iter().sum::<f64>());
    if residual != 0.0 {
        if let Some(longest) = longest_index(&rounded) {
            rounded[longest] = round_cents(rounded[longest] + residual);
        }
    }
    rounded
}

fn longest_index(values: &[f64]) -> Option<usize> {
    values
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, v)| match best {
            Some((_, b)) if b >= *v => best,
            _ => Some((i, *v)),
        })
        .map(|(i, _)| i)
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
