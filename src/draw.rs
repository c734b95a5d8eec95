//! A draw session: balance the eligible roster while steering away from the
//! most recent draw, then record the outcome.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::balancer::{balance_with_rng, validate};
use crate::config::BalancerConfig;
use crate::error::{BalanceError, DrawError};
use crate::history::{DrawHistory, DrawRecord};
use crate::model::entity::Participant;
use crate::roster::eligible;

#[derive(Debug, Clone, Default)]
pub struct DrawSession {
    config: BalancerConfig,
    history: DrawHistory,
}

impl DrawSession {
    pub fn new(config: BalancerConfig) -> DrawSession {
        let history = DrawHistory::with_capacity(config.history_capacity);
        DrawSession { config, history }
    }

    /// Resume with a previously persisted history.
    pub fn with_history(config: BalancerConfig, history: DrawHistory) -> DrawSession {
        DrawSession { config, history }
    }

    pub fn config(&self) -> &BalancerConfig {
        &self.config
    }

    pub fn history(&self) -> &DrawHistory {
        &self.history
    }

    pub fn into_history(self) -> DrawHistory {
        self.history
    }

    pub fn draw(
        &mut self,
        roster: &[Participant],
        team_count: usize,
    ) -> Result<&DrawRecord, DrawError> {
        let mut rng = SmallRng::from_entropy();
        self.draw_with_rng(roster, team_count, &mut rng)
    }

    /// The team count is checked against the eligible roster first, then a
    /// draw needs at least two participants.
    pub fn draw_with_rng<R: Rng + ?Sized>(
        &mut self,
        roster: &[Participant],
        team_count: usize,
        rng: &mut R,
    ) -> Result<&DrawRecord, DrawError> {
        let participants: Vec<Participant> = eligible(roster).into_iter().cloned().collect();
        validate(participants.len(), team_count).map_err(BalanceError::from)?;
        if participants.len() < 2 {
            return Err(DrawError::TooFewParticipants { found: participants.len() });
        }

        let previous = self.history.latest().map(|record| &record.partition);
        let balanced = balance_with_rng(
            &participants,
            team_count,
            self.config.algorithm,
            Some(&self.config.weights),
            previous,
            rng,
        )?;
        info!(
            participants = participants.len(),
            team_count,
            difference = balanced.difference,
            strategy = ?balanced.strategy,
            "draw recorded"
        );

        Ok(self.history.push(DrawRecord::new(balanced)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balancer::Algorithm;
    use crate::error::ValidationError;
    use crate::guard::is_similar;
    use crate::model::condition::Weights;

    fn roster() -> Vec<Participant> {
        [5.0, 4.0, 3.0, 2.0, 4.5, 1.0]
            .iter()
            .enumerate()
            .map(|(i, &r)| {
                Participant::new(i.to_string(), format!("P{i}"))
                    .with_attributes(Some(r), Some(r), Some(r))
            })
            .collect()
    }

    #[test]
    fn test_draw_records_history() {
        let mut session = DrawSession::new(BalancerConfig::default());
        let mut rng = SmallRng::seed_from_u64(31);
        let record = session.draw_with_rng(&roster(), 2, &mut rng).unwrap();
        assert_eq!(record.participant_count, 6);
        assert_eq!(record.algorithm, Algorithm::Fast);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_consecutive_draws_differ() {
        let config = BalancerConfig {
            algorithm: Algorithm::Best,
            weights: Weights::new(1.0, 0.0, 0.0),
            ..Default::default()
        };
        let mut session = DrawSession::new(config);
        let mut rng = SmallRng::seed_from_u64(17);
        let first = session.draw_with_rng(&roster(), 2, &mut rng).unwrap().partition.clone();
        let second = session.draw_with_rng(&roster(), 2, &mut rng).unwrap().partition.clone();
        assert!(!is_similar(&first, &second));
    }

    #[test]
    fn test_only_eligible_participants_are_drawn() {
        let mut players = roster();
        players[0].participating = false;
        players[1].set_recurring(false);
        let mut session = DrawSession::default();
        let mut rng = SmallRng::seed_from_u64(3);
        let record = session.draw_with_rng(&players, 2, &mut rng).unwrap();
        assert_eq!(record.participant_count, 4);
    }

    #[test]
    fn test_needs_two_participants() {
        let mut session = DrawSession::default();
        let err = session.draw(&roster()[..1], 1).unwrap_err();
        assert_eq!(err, DrawError::TooFewParticipants { found: 1 });
    }

    #[test]
    fn test_team_count_is_checked_before_roster_size() {
        let mut session = DrawSession::default();
        let err = session.draw(&roster()[..1], 2).unwrap_err();
        assert_eq!(
            err,
            DrawError::Balance(BalanceError::Validation(ValidationError::NotEnoughParticipants {
                required: 2,
                found: 1,
            }))
        );
        assert!(err.to_string().contains("at least 2 participants are required to form 2 teams"));
    }

    #[test]
    fn test_propagates_validation() {
        let mut session = DrawSession::default();
        let err = session.draw(&roster(), 7).unwrap_err();
        assert_eq!(
            err,
            DrawError::Balance(BalanceError::Validation(ValidationError::NotEnoughParticipants {
                required: 7,
                found: 6,
            }))
        );
        assert!(session.history().is_empty());
    }
}
