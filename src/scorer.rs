use crate::constants::{ATTRIBUTE_MAX, ATTRIBUTE_MIN};
use crate::model::condition::{Score, Weights};
use crate::model::entity::Participant;

/// A participant paired with its weighted score for one balancing run.
#[derive(Debug, Clone, Copy)]
pub struct ScoredParticipant<'a> {
    pub participant: &'a Participant,
    pub score: Score,
}

/// Weighted mean of the clamped attributes; absent attributes count as 0.
///
/// Always finite and within `[0, 5]` for non-negative weights. A zero weight
/// sum yields 0 for everyone.
pub fn score(participant: &Participant, weights: &Weights) -> Score {
    let total_weight = weights.total();
    if total_weight <= 0.0 || !total_weight.is_finite() {
        return 0.0;
    }
    let weighted_sum: f64 = participant
        .attributes()
        .iter()
        .zip(weights.as_array())
        .map(|(value, weight)| clamp_attribute(*value) * weight)
        .sum();
    weighted_sum / total_weight
}

fn clamp_attribute(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_nan() => ATTRIBUTE_MIN,
        Some(v) => v.clamp(ATTRIBUTE_MIN, ATTRIBUTE_MAX),
        None => ATTRIBUTE_MIN,
    }
}

pub fn score_all<'a>(
    participants: &'a [Participant],
    weights: &Weights,
) -> Vec<ScoredParticipant<'a>> {
    participants
        .iter()
        .map(|participant| ScoredParticipant { participant, score: score(participant, weights) })
        .collect()
}
