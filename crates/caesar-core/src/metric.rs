// crates/caesar-core/src/metric.rs

use std::fmt;

use crate::dist::LetterDist;

/// Distance used to score an observed histogram against a reference.
///
/// Every metric returns a non-negative value where 0 means identical.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    ChiSquared,
    Euclidean,
    Cosine,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::ChiSquared, Metric::Euclidean, Metric::Cosine];

    /// Argument order matters for [`Metric::ChiSquared`]: observed first, reference second.
    #[inline]
    pub fn distance(self, observed: &LetterDist, reference: &LetterDist) -> f64 {
        match self {
            Metric::ChiSquared => chi_squared_distance(observed, reference),
            Metric::Euclidean => euclidean_distance(observed, reference),
            Metric::Cosine => cosine_distance(observed, reference),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Metric::ChiSquared => "Chi-squared",
            Metric::Euclidean => "Euclidean",
            Metric::Cosine => "Cosine",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Σ (o - r)² / r over letters with r > 0.
///
/// Letters the reference never uses are skipped, so this is not symmetric.
pub fn chi_squared_distance(observed: &LetterDist, reference: &LetterDist) -> f64 {
    observed
        .0
        .iter()
        .zip(reference.0.iter())
        .filter(|&(_, &r)| r > 0.0)
        .map(|(&o, &r)| {
            let diff = o - r;
            diff * diff / r
        })
        .sum()
}

/// Plain L2 distance.
pub fn euclidean_distance(observed: &LetterDist, reference: &LetterDist) -> f64 {
    observed
        .0
        .iter()
        .zip(reference.0.iter())
        .map(|(&o, &r)| (o - r) * (o - r))
        .sum::<f64>()
        .sqrt()
}

/// `1 - cos(angle)`. A zero vector on either side scores 1.0.
pub fn cosine_distance(observed: &LetterDist, reference: &LetterDist) -> f64 {
    let mut dot = 0.0;
    let mut norm_o = 0.0;
    let mut norm_r = 0.0;
    for (&o, &r) in observed.0.iter().zip(reference.0.iter()) {
        dot += o * r;
        norm_o += o * o;
        norm_r += r * r;
    }

    if norm_o == 0.0 || norm_r == 0.0 {
        return 1.0;
    }

    let similarity = (dot / (norm_o.sqrt() * norm_r.sqrt())).clamp(-1.0, 1.0);
    1.0 - similarity
}
