use std::collections::BTreeMap;

use float_ord::FloatOrd;

use crate::reference::{ReferenceDataError, ReferenceRow};

/// Reference heights grouped by age.
///
/// Every cohort holds at least one height, sorted ascending. The index is
/// never mutated after `from_rows`, so a shared reference can serve
/// concurrent queries.
#[derive(Debug, Clone, PartialEq)]
pub struct CohortIndex {
    cohorts: BTreeMap<FloatOrd<f64>, Vec<f64>>,
}

// FloatOrd orders -0.0 below 0.0; adding 0.0 folds both into 0.0.
fn age_key(age: f64) -> FloatOrd<f64> {
    FloatOrd(age + 0.0)
}

impl CohortIndex {
    pub fn from_rows(rows: &[ReferenceRow]) -> Result<CohortIndex, ReferenceDataError> {
        if rows.is_empty() {
            return Err(ReferenceDataError::Empty);
        }

        let mut cohorts: BTreeMap<FloatOrd<f64>, Vec<f64>> = BTreeMap::new();

        for row in rows {
            cohorts
                .entry(age_key(row.age))
                .or_insert_with(Vec::new)
                .push(row.height);
        }

        for heights in cohorts.values_mut() {
            heights.sort_by_key(|&height| FloatOrd(height));
        }

        debug!(
            "Indexed {} reference rows into {} cohorts",
            rows.len(),
            cohorts.len()
        );

        Ok(CohortIndex { cohorts })
    }

    /// Heights recorded at `age`, ascending.
    pub fn cohort_at(&self, age: f64) -> Option<&[f64]> {
        self.cohorts.get(&age_key(age)).map(|heights| heights.as_slice())
    }

    pub fn is_known_age(&self, age: f64) -> bool {
        self.cohorts.contains_key(&age_key(age))
    }

    /// All ages with reference data, ascending.
    pub fn known_ages(&self) -> Vec<f64> {
        self.cohorts.keys().map(|&FloatOrd(age)| age).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (f64, &[f64])> {
        self.cohorts
            .iter()
            .map(|(&FloatOrd(age), heights)| (age, heights.as_slice()))
    }

    /// Number of cohorts.
    pub fn len(&self) -> usize {
        self.cohorts.len()
    }
}
