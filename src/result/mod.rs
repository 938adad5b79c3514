use crate::chart::ReferenceBand;
use crate::reference::Sex;

#[derive(PartialEq, Debug, Clone)]
pub struct ProjectionResult {
    pub sex: Sex,
    pub current_age: u32,
    pub current_height: f64,
    pub target_age: u32,
    pub percentile_rank: Option<f64>,
    pub projected_height: Option<f64>,
    pub chart: Option<Vec<ReferenceBand>>,
}
