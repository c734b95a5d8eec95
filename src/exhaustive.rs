//! Repeated full-shuffle search for small pools.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::balancer::Strategy;
use crate::cache::{Index, TableCache};
use crate::constants::{
    EXHAUSTIVE_ACCEPT_BELOW, EXHAUSTIVE_ATTEMPTS, EXHAUSTIVE_ATTEMPTS_AVOIDING,
};
use crate::greedy;
use crate::guard::RepetitionGuard;
use crate::model::condition::Score;
use crate::scorer::ScoredParticipant;
use crate::search::{best_of, Params};

fn params(avoiding: bool) -> Params {
    Params {
        max_attempts: if avoiding { EXHAUSTIVE_ATTEMPTS_AVOIDING } else { EXHAUSTIVE_ATTEMPTS },
        accept_below: EXHAUSTIVE_ACCEPT_BELOW,
    }
}

pub(crate) fn partition<R: Rng + ?Sized>(
    scored: &[ScoredParticipant<'_>],
    team_count: usize,
    guard: Option<&RepetitionGuard<'_>>,
    rng: &mut R,
) -> (TableCache, Strategy) {
    let target = scored.iter().map(|s| s.score).sum::<Score>() / team_count as f64;

    let found = best_of(
        &params(guard.is_some()),
        guard,
        scored,
        rng,
        |_, rng| {
            let mut order: Vec<Index> = (0..scored.len()).collect();
            order.shuffle(rng);
            greedy::assign_to_lowest(scored, &order, team_count, rng)
        },
        |table| table.variance(target),
    );

    match found {
        Some(table) => (table, Strategy::ExhaustiveSmall),
        None => {
            warn!(team_count, "no distinct shuffle found, handing over to greedy");
            greedy::partition(scored, team_count, guard, rng)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::Participant;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_attempt_budget() {
        assert_eq!(params(false).max_attempts, 100);
        assert_eq!(params(true).max_attempts, 200);
        assert_eq!(params(true).accept_below, 0.1);
    }

    #[test]
    fn test_finds_perfect_split() {
        let people: Vec<Participant> =
            (0..6).map(|i| Participant::new(i.to_string(), format!("P{i}"))).collect();
        let scores = [5.0, 1.0, 4.0, 2.0, 3.0, 3.0];
        let scored: Vec<_> = people
            .iter()
            .zip(scores)
            .map(|(participant, score)| ScoredParticipant { participant, score })
            .collect();
        let mut rng = SmallRng::seed_from_u64(4);

        let (table, strategy) = partition(&scored, 2, None, &mut rng);
        assert_eq!(strategy, Strategy::ExhaustiveSmall);
        assert!(table.variance(9.0) < EXHAUSTIVE_ACCEPT_BELOW);
    }

    #[test]
    fn test_hands_over_to_greedy_when_every_shuffle_repeats() {
        let people = vec![Participant::new("solo", "Solo")];
        let scored = vec![ScoredParticipant { participant: &people[0], score: 2.0 }];
        let mut only = TableCache::create(1);
        only.add(0, 0, 2.0);
        let previous = only.into_partition(&scored);
        let guard = RepetitionGuard::new(&previous);
        let mut rng = SmallRng::seed_from_u64(4);

        let (table, strategy) = partition(&scored, 1, Some(&guard), &mut rng);
        assert_eq!(strategy, Strategy::GreedyFallback);
        assert_eq!(table.teams[0].members, vec![0]);
    }
}
