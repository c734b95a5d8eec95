use itertools::{Itertools, MinMaxResult};

use crate::model::condition::Score;
use crate::model::group::Partition;

/// Spread between the strongest and weakest team as a percentage of the average team total.
///
/// Returns 0 for fewer than two teams or when the average total is 0.
pub fn difference_of_totals(totals: &[Score]) -> f64 {
    if totals.len() < 2 {
        return 0.0;
    }
    let average = totals.iter().sum::<Score>() / totals.len() as f64;
    if average == 0.0 {
        return 0.0;
    }
    match totals.iter().minmax() {
        MinMaxResult::MinMax(min, max) => (max - min) / average * 100.0,
        MinMaxResult::OneElement(_) | MinMaxResult::NoElements => 0.0,
    }
}

pub fn difference(partition: &Partition) -> f64 {
    difference_of_totals(&partition.totals())
}

/// Sum of squared deviations of each team total from `target`.
pub fn variance_of_totals(totals: &[Score], target: Score) -> f64 {
    totals.iter().map(|total| (total - target).powi(2)).sum()
}
