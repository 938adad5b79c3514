use crate::cohort::CohortIndex;
use crate::percentile::{quantile, round_to};

/// 5th, 50th and 95th percentile heights of one age cohort.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct ReferenceBand {
    pub age: f64,
    pub p5: f64,
    pub median: f64,
    pub p95: f64,
}

/// One band per known age, ascending by age.
pub fn reference_bands(index: &CohortIndex) -> Vec<ReferenceBand> {
    index
        .iter()
        .filter_map(|(age, heights)| {
            Some(ReferenceBand {
                age,
                p5: round_to(quantile(heights, 0.05)?, 1),
                median: round_to(quantile(heights, 0.5)?, 1),
                p95: round_to(quantile(heights, 0.95)?, 1),
            })
        })
        .collect()
}
