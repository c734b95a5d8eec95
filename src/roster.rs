use crate::model::entity::Participant;

/// Participants marked as taking part in the next draw.
pub fn eligible(participants: &[Participant]) -> Vec<&Participant> {
    participants.iter().filter(|p| p.is_eligible()).collect()
}
