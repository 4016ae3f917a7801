//! One-dimensional k-means used for threshold calibration.

use ordered_float::OrderedFloat;

/// Iteration cap for Lloyd's algorithm; gap distributions converge in a
/// handful of rounds, the cap only bounds pathological inputs.
const MAX_ITERATIONS: usize = 300;

/// Clusters 1-D samples with Lloyd's algorithm and returns the surviving
/// cluster centers sorted ascending.
///
/// Initial centers sit at evenly spaced quantiles of the sorted sample, so
/// the whole procedure is deterministic: identical input always yields
/// identical centers, run over run. `k` is clamped to the sample count, and
/// clusters that end up with no members are dropped, so the result may hold
/// fewer than `k` centers.
pub fn cluster_centers(samples: &[f64], k: usize) -> Vec<f64> {
    if samples.is_empty() || k == 0 {
        return Vec::new();
    }

    let mut sorted: Vec<f64> = samples.to_vec();
    sorted.sort_unstable_by_key(|v| OrderedFloat(*v));

    let k = k.min(sorted.len());
    let mut centers: Vec<f64> = (0..k)
        .map(|i| {
            // Midpoint of the i-th of k equal slices of the sorted sample.
            let pos = (2 * i + 1) * sorted.len() / (2 * k);
            sorted[pos.min(sorted.len() - 1)]
        })
        .collect();

    let mut assignment = vec![0usize; sorted.len()];
    for _ in 0..MAX_ITERATIONS {
        let mut changed = false;
        for (i, &v) in sorted.iter().enumerate() {
            let nearest = centers
                .iter()
                .enumerate()
                .min_by_key(|(_, c)| OrderedFloat((v - **c).abs()))
                .map(|(ci, _)| ci)
                .unwrap_or(0);
            if assignment[i] != nearest {
                assignment[i] = nearest;
                changed = true;
            }
        }

        let mut sums = vec![0.0f64; centers.len()];
        let mut counts = vec![0usize; centers.len()];
        for (i, &v) in sorted.iter().enumerate() {
            sums[assignment[i]] += v;
            counts[assignment[i]] += 1;
        }
        for (ci, center) in centers.iter_mut().enumerate() {
            if counts[ci] > 0 {
                *center = sums[ci] / counts[ci] as f64;
            }
        }

        if !changed {
            break;
        }
    }

    let mut survivors: Vec<f64> = centers
        .iter()
        .enumerate()
        .filter(|(ci, _)| assignment.contains(ci))
        .map(|(_, c)| *c)
        .collect();
    survivors.sort_unstable_by_key(|v| OrderedFloat(*v));
    survivors
}
