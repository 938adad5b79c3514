use crate::chart;
use crate::cohort::CohortIndex;
use crate::percentile::{fraction_below, quantile, round_to};
use crate::reference::Sex;
use crate::result;

#[derive(PartialEq, Debug, Clone)]
pub struct ProjectionQuery {
    pub sex: Sex,
    pub current_age: u32,
    pub current_height: f64,
    pub target_age: u32,
}

/// Share of the cohort at `age` that is strictly shorter than `height`,
/// rounded to 2 decimals. `None` if there is no reference data for `age`.
pub fn estimate_rank(index: &CohortIndex, age: f64, height: f64) -> Option<f64> {
    let cohort = index.cohort_at(age)?;

    Some(round_to(fraction_below(cohort, height), 2))
}

/// Height at `rank` within the cohort at `target_age`, rounded to 1 decimal.
///
/// An absent rank yields an absent height without touching the index.
pub fn predict_height(index: &CohortIndex, target_age: f64, rank: Option<f64>) -> Option<f64> {
    let rank = rank?;
    let cohort = index.cohort_at(target_age)?;

    quantile(cohort, rank).map(|height| round_to(height, 1))
}

pub fn project(
    index: &CohortIndex,
    query: &ProjectionQuery,
    with_chart: bool,
) -> result::ProjectionResult {
    let percentile_rank = estimate_rank(index, f64::from(query.current_age), query.current_height);

    match percentile_rank {
        Some(rank) => debug!(
            "{} cm at age {} is percentile rank {}",
            query.current_height, query.current_age, rank
        ),
        None => warn!("No reference data for current age {}", query.current_age),
    }

    let projected_height = predict_height(index, f64::from(query.target_age), percentile_rank);

    if percentile_rank.is_some() && !index.is_known_age(f64::from(query.target_age)) {
        warn!("No reference data for target age {}", query.target_age);
    }

    result::ProjectionResult {
        sex: query.sex,
        current_age: query.current_age,
        current_height: query.current_height,
        target_age: query.target_age,
        percentile_rank,
        projected_height,
        chart: if with_chart {
            Some(chart::reference_bands(index))
        } else {
            None
        },
    }
}
