use std::fmt;
use std::str::FromStr;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::SMALL_POOL_THRESHOLD;
use crate::error::{BalanceError, ConfigError, ValidationError};
use crate::evaluate::difference;
use crate::guard::RepetitionGuard;
use crate::model::condition::Weights;
use crate::model::entity::Participant;
use crate::model::group::Partition;
use crate::scorer::score_all;
use crate::{exhaustive, greedy, improved};

/// Algorithm tier exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Single randomized greedy pass.
    #[default]
    #[serde(alias = "greedy")]
    Fast,
    /// Exhaustive shuffling for small pools, seeded placement for larger ones.
    #[serde(alias = "optimal")]
    Best,
}

impl Algorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Fast => "fast",
            Algorithm::Best => "best",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fast" | "greedy" => Ok(Algorithm::Fast),
            "best" | "optimal" => Ok(Algorithm::Best),
            _ => Err(ConfigError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Which search actually produced a partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    Greedy,
    /// Deterministic greedy pass, used when every randomized attempt repeated
    /// the previous partition.
    GreedyFallback,
    ImprovedGreedy,
    ImprovedGreedyFallback,
    ExhaustiveSmall,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Balanced {
    pub partition: Partition,
    /// Imbalance percentage, see [`crate::difference`].
    pub difference: f64,
    pub algorithm: Algorithm,
    pub strategy: Strategy,
}

pub fn validate(participant_count: usize, team_count: usize) -> Result<(), ValidationError> {
    if team_count == 0 {
        return Err(ValidationError::NoTeams);
    }
    if participant_count < team_count {
        return Err(ValidationError::NotEnoughParticipants {
            required: team_count,
            found: participant_count,
        });
    }
    Ok(())
}

/// Split `participants` into `team_count` teams of similar total score.
///
/// `weights` defaults to [`Weights::default`]. When `previous` is given, the
/// search tries to avoid returning a partition similar to it (see
/// [`crate::is_similar`]) but always returns a valid partition.
pub fn balance(
    participants: &[Participant],
    team_count: usize,
    algorithm: Algorithm,
    weights: Option<&Weights>,
    previous: Option<&Partition>,
) -> Result<Balanced, BalanceError> {
    let mut rng = SmallRng::from_entropy();
    balance_with_rng(participants, team_count, algorithm, weights, previous, &mut rng)
}

pub fn balance_with_rng<R: Rng + ?Sized>(
    participants: &[Participant],
    team_count: usize,
    algorithm: Algorithm,
    weights: Option<&Weights>,
    previous: Option<&Partition>,
    rng: &mut R,
) -> Result<Balanced, BalanceError> {
    validate(participants.len(), team_count)?;

    let default_weights = Weights::default();
    let scored = score_all(participants, weights.unwrap_or(&default_weights));
    let guard = previous.map(RepetitionGuard::new);

    let (table, strategy) = match algorithm {
        Algorithm::Fast => greedy::partition(&scored, team_count, guard.as_ref(), rng),
        Algorithm::Best if scored.len() <= SMALL_POOL_THRESHOLD => {
            exhaustive::partition(&scored, team_count, guard.as_ref(), rng)
        }
        Algorithm::Best => improved::partition(&scored, team_count, guard.as_ref(), rng),
    };

    let partition = table.into_partition(&scored);
    let difference = difference(&partition);
    debug!(
        participants = participants.len(),
        team_count,
        %algorithm,
        ?strategy,
        difference,
        "balanced teams"
    );

    Ok(Balanced { partition, difference, algorithm, strategy })
}
