//! Word-count distribution: fixed-bin histogram plus a Gaussian density curve.

use serde::Serialize;

use crate::constants::pipeline::DENSITY_GRID_POINTS;

/// One equal-width histogram bin. Bins are `[lower, upper)` except the last,
/// which also includes `upper`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HistogramBin {
    /// Inclusive lower edge.
    pub lower: f64,
    /// Exclusive upper edge (inclusive for the last bin).
    pub upper: f64,
    /// Values falling in the bin.
    pub count: usize,
}

/// One point of the smoothed density overlay, in histogram count units.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DensityPoint {
    /// Word count.
    pub x: f64,
    /// Density scaled by sample size and bin width.
    pub y: f64,
}

/// Histogram and density estimate of article word counts.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct WordCountDistribution {
    /// Number of values binned.
    pub sample_size: usize,
    /// Smallest value, `None` for an empty sample.
    pub min: Option<usize>,
    /// Largest value, `None` for an empty sample.
    pub max: Option<usize>,
    /// Arithmetic mean, `None` for an empty sample.
    pub mean: Option<f64>,
    /// Equal-width bins from `min` to `max`.
    pub bins: Vec<HistogramBin>,
    /// Empty when fewer than two distinct values exist.
    pub density: Vec<DensityPoint>,
}

impl WordCountDistribution {
    /// Width shared by every bin, or `None` when there are no bins.
    pub fn bin_width(&self) -> Option<f64> {
        self.bins.first().map(|bin| bin.upper - bin.lower)
    }
}

/// Bin `values` into `bin_count` equal-width bins and fit a density curve.
///
/// The range spans the sample min to max; a constant sample is widened to
/// `[v - 0.5, v + 0.5]`. An empty sample yields no bins.
pub fn word_count_distribution(values: &[usize], bin_count: usize) -> WordCountDistribution {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return WordCountDistribution::default();
    };
    if bin_count == 0 {
        return WordCountDistribution {
            sample_size: values.len(),
            min: Some(min),
            max: Some(max),
            mean: Some(mean(values)),
            ..WordCountDistribution::default()
        };
    }
    let (lower, upper) = if min == max {
        (min as f64 - 0.5, max as f64 + 0.5)
    } else {
        (min as f64, max as f64)
    };
    let width = (upper - lower) / bin_count as f64;
    let edges: Vec<f64> = (0..=bin_count)
        .map(|idx| {
            if idx == bin_count {
                upper
            } else {
                lower + width * idx as f64
            }
        })
        .collect();
    let mut counts = vec![0usize; bin_count];
    for &value in values {
        counts[bin_index(value as f64, lower, width, &edges)] += 1;
    }
    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(idx, count)| HistogramBin {
            lower: edges[idx],
            upper: edges[idx + 1],
            count,
        })
        .collect();
    WordCountDistribution {
        sample_size: values.len(),
        min: Some(min),
        max: Some(max),
        mean: Some(mean(values)),
        bins,
        density: density_curve(values, min as f64, max as f64, width),
    }
}

/// Bin holding `value`, checked against the reported edges so a value on an
/// edge always lands in the bin that starts there.
fn bin_index(value: f64, lower: f64, width: f64, edges: &[f64]) -> usize {
    let last = edges.len() - 2;
    let mut idx = (((value - lower) / width).floor().max(0.0) as usize).min(last);
    while idx > 0 && value < edges[idx] {
        idx -= 1;
    }
    while idx < last && value >= edges[idx + 1] {
        idx += 1;
    }
    idx
}

fn mean(values: &[usize]) -> f64 {
    values.iter().map(|&v| v as f64).sum::<f64>() / values.len() as f64
}

/// Gaussian KDE with Scott's bandwidth, scaled to histogram counts.
fn density_curve(values: &[usize], min: f64, max: f64, bin_width: f64) -> Vec<DensityPoint> {
    let n = values.len();
    if n < 2 || min == max {
        return Vec::new();
    }
    let n_f = n as f64;
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|&v| (v as f64 - avg).powi(2))
        .sum::<f64>()
        / (n_f - 1.0);
    let bandwidth = variance.sqrt() * n_f.powf(-0.2);
    if bandwidth <= 0.0 || !bandwidth.is_finite() {
        return Vec::new();
    }
    let norm = 1.0 / (n_f * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
    let step = (max - min) / (DENSITY_GRID_POINTS - 1) as f64;
    (0..DENSITY_GRID_POINTS)
        .map(|idx| {
            let x = min + step * idx as f64;
            let density: f64 = values
                .iter()
                .map(|&v| {
                    let z = (x - v as f64) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            DensityPoint {
                x,
                y: density * n_f * bin_width,
            }
        })
        .collect()
}
