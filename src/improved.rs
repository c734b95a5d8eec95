//! Seeded placement for larger pools: one top scorer per team, then every other
//! participant to the team it leaves closest to the mean of the rest.

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::balancer::Strategy;
use crate::cache::{Index, TableCache};
use crate::constants::{IMBALANCE_TIE_TOLERANCE, IMPROVED_ACCEPT_BELOW, IMPROVED_ATTEMPTS};
use crate::guard::RepetitionGuard;
use crate::scorer::ScoredParticipant;
use crate::search::{best_of, Params};

/// Seeds go to teams in order; the rest follow by least placement imbalance.
/// Near-tied teams are drawn at random when `rng` is given, otherwise the first wins.
fn place<R: Rng + ?Sized>(
    scored: &[ScoredParticipant<'_>],
    seeds: &[Index],
    rest: &[Index],
    team_count: usize,
    mut rng: Option<&mut R>,
) -> TableCache {
    let mut table = TableCache::create(team_count);
    for (team_index, &member) in seeds.iter().enumerate() {
        table.add(team_index, member, scored[member].score);
    }

    for &member in rest {
        let score = scored[member].score;
        let imbalances: Vec<f64> =
            (0..team_count).map(|t| table.placement_imbalance(t, score)).collect();
        let min = imbalances.iter().copied().fold(f64::INFINITY, f64::min);
        let tied: Vec<Index> = imbalances
            .iter()
            .positions(|v| (v - min).abs() < IMBALANCE_TIE_TOLERANCE)
            .collect();
        let chosen = match rng.as_deref_mut() {
            Some(rng) => tied.choose(rng),
            None => tied.first(),
        };
        table.add(chosen.copied().unwrap_or(0), member, score);
    }
    table
}

pub(crate) fn partition<R: Rng + ?Sized>(
    scored: &[ScoredParticipant<'_>],
    team_count: usize,
    guard: Option<&RepetitionGuard<'_>>,
    rng: &mut R,
) -> (TableCache, Strategy) {
    let ranked: Vec<Index> = (0..scored.len())
        .sorted_by(|&a, &b| scored[b].score.total_cmp(&scored[a].score))
        .collect();
    let (seeds, rest) = ranked.split_at(team_count.min(ranked.len()));

    let params = Params::new(guard.is_some(), IMPROVED_ATTEMPTS, IMPROVED_ACCEPT_BELOW);
    let found = best_of(
        &params,
        guard,
        scored,
        rng,
        |attempt, rng| {
            let mut seeds = seeds.to_vec();
            let mut rest = rest.to_vec();
            // The first attempt keeps the strongest player on team 0.
            if attempt > 0 {
                seeds.shuffle(rng);
                rest.shuffle(rng);
            }
            place(scored, &seeds, &rest, team_count, Some(rng))
        },
        TableCache::difference,
    );

    match found {
        Some(table) => (table, Strategy::ImprovedGreedy),
        None => {
            warn!(
                team_count,
                "every improved attempt repeated the previous partition, using ranked order"
            );
            let table = place::<R>(scored, seeds, rest, team_count, None);
            (table, Strategy::ImprovedGreedyFallback)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::is_similar;
    use crate::model::condition::Score;
    use crate::model::entity::Participant;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn people(n: usize) -> Vec<Participant> {
        (0..n).map(|i| Participant::new(i.to_string(), format!("P{i}"))).collect()
    }

    fn scored<'a>(people: &'a [Participant], scores: &[Score]) -> Vec<ScoredParticipant<'a>> {
        people
            .iter()
            .zip(scores)
            .map(|(participant, &score)| ScoredParticipant { participant, score })
            .collect()
    }

    #[test]
    fn test_first_attempt_pins_top_scorers_in_rank_order() {
        let people = people(12);
        let scores: Vec<Score> = (0..12).map(|i| i as f64 * 0.4).collect();
        let scored = scored(&people, &scores);
        let mut rng = SmallRng::seed_from_u64(9);
        let (table, strategy) = partition(&scored, 3, None, &mut rng);

        assert_eq!(strategy, Strategy::ImprovedGreedy);
        assert_eq!(table.teams[0].members[0], 11);
        assert_eq!(table.teams[1].members[0], 10);
        assert_eq!(table.teams[2].members[0], 9);
        assert_eq!(table.teams.iter().map(|t| t.members.len()).sum::<usize>(), 12);
    }

    #[test]
    fn test_deterministic_placement_without_rng() {
        let people = people(4);
        let scored = scored(&people, &[4.0, 3.0, 2.0, 1.0]);
        let table = place::<SmallRng>(&scored, &[0, 1], &[2, 3], 2, None);
        // 2.0 goes to team 1 (|3+2-4| = 1 < |4+2-3| = 3), then 1.0 to team 0 (|4+1-5| = 0).
        assert_eq!(table.teams[0].members, vec![0, 3]);
        assert_eq!(table.teams[1].members, vec![1, 2]);
    }

    #[test]
    fn test_near_tied_imbalances_are_drawn_at_random() {
        let people = people(3);
        // Placing 1.0 leaves imbalances 0.996 and 1.004, inside the tie band.
        let scored = scored(&people, &[2.0, 2.004, 1.0]);
        let mut rng = SmallRng::seed_from_u64(41);
        let targets: Vec<Index> = (0..200)
            .map(|_| {
                let table = place(&scored, &[0, 1], &[2], 2, Some(&mut rng));
                table.teams.iter().position(|team| team.members.contains(&2)).unwrap_or(0)
            })
            .collect();
        assert!(targets.contains(&0));
        assert!(targets.contains(&1));

        let table = place::<SmallRng>(&scored, &[0, 1], &[2], 2, None);
        assert_eq!(table.teams[0].members, vec![0, 2]);
    }

    #[test]
    fn test_falls_back_to_ranked_order_when_every_attempt_repeats() {
        // With a single team every attempt yields the same grouping.
        let people = people(11);
        let scores: Vec<Score> = (0..11).map(|i| i as f64 * 0.3).collect();
        let scored = scored(&people, &scores);
        let mut everyone = TableCache::create(1);
        for member in (0..11).rev() {
            everyone.add(0, member, scored[member].score);
        }
        let previous = everyone.into_partition(&scored);
        let guard = RepetitionGuard::new(&previous);
        let mut rng = SmallRng::seed_from_u64(2);

        let (table, strategy) = partition(&scored, 1, Some(&guard), &mut rng);
        assert_eq!(strategy, Strategy::ImprovedGreedyFallback);
        let expected: Vec<Index> = (0..11).rev().collect();
        assert_eq!(table.teams[0].members, expected);
        assert!(is_similar(&table.into_partition(&scored), &previous));
    }

    #[test]
    fn test_retries_steer_away_from_previous() {
        let people = people(12);
        let scores: Vec<Score> = (0..12).map(|i| 1.0 + (i % 4) as f64 * 0.9).collect();
        let scored = scored(&people, &scores);
        let mut rng = SmallRng::seed_from_u64(57);
        let (first, _) = partition(&scored, 3, None, &mut rng);
        let previous = first.into_partition(&scored);
        let guard = RepetitionGuard::new(&previous);

        for _ in 0..50 {
            let (table, strategy) = partition(&scored, 3, Some(&guard), &mut rng);
            assert_eq!(strategy, Strategy::ImprovedGreedy);
            assert!(!is_similar(&table.into_partition(&scored), &previous));
        }
    }
}
