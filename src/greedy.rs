//! Fast single-pass placement: strongest first, each to the currently weakest team.

use std::cmp::Reverse;

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::warn;

use crate::balancer::Strategy;
use crate::cache::{Index, TableCache};
use crate::constants::{BUCKET_WIDTH, GREEDY_ACCEPT_BELOW, GREEDY_ATTEMPTS, NEAR_TIE_WINDOW};
use crate::guard::RepetitionGuard;
use crate::model::condition::Score;
use crate::scorer::ScoredParticipant;
use crate::search::{best_of, Params};

fn bucket(score: Score) -> i64 {
    (score / BUCKET_WIDTH).round() as i64
}

/// Descending by score bucket, shuffled inside each bucket, with near-tied
/// neighbours swapped at random.
pub(crate) fn working_order<R: Rng + ?Sized>(
    scored: &[ScoredParticipant<'_>],
    rng: &mut R,
) -> Vec<Index> {
    let mut order: Vec<Index> = (0..scored.len())
        .into_group_map_by(|&i| bucket(scored[i].score))
        .into_iter()
        .sorted_by_key(|(level, _)| Reverse(*level))
        .flat_map(|(_, mut members)| {
            members.shuffle(&mut *rng);
            members
        })
        .collect();

    for i in 1..order.len() {
        let gap = (scored[order[i - 1]].score - scored[order[i]].score).abs();
        if gap < NEAR_TIE_WINDOW && rng.gen_bool(0.5) {
            order.swap(i - 1, i);
        }
    }
    order
}

/// Each member in `order` joins a lowest-total team, ties broken uniformly.
pub(crate) fn assign_to_lowest<R: Rng + ?Sized>(
    scored: &[ScoredParticipant<'_>],
    order: &[Index],
    team_count: usize,
    rng: &mut R,
) -> TableCache {
    let mut table = TableCache::create(team_count);
    for &member in order {
        let team_index = table.pick_min_total_team(rng);
        table.add(team_index, member, scored[member].score);
    }
    table
}

fn deterministic(scored: &[ScoredParticipant<'_>], team_count: usize) -> TableCache {
    let order: Vec<Index> = (0..scored.len())
        .sorted_by(|&a, &b| scored[b].score.total_cmp(&scored[a].score))
        .collect();
    let mut table = TableCache::create(team_count);
    for member in order {
        let team_index = table.first_min_total_team();
        table.add(team_index, member, scored[member].score);
    }
    table
}

pub(crate) fn partition<R: Rng + ?Sized>(
    scored: &[ScoredParticipant<'_>],
    team_count: usize,
    guard: Option<&RepetitionGuard<'_>>,
    rng: &mut R,
) -> (TableCache, Strategy) {
    let params = Params::new(guard.is_some(), GREEDY_ATTEMPTS, GREEDY_ACCEPT_BELOW);
    let found = best_of(
        &params,
        guard,
        scored,
        rng,
        |_, rng| {
            let order = working_order(scored, rng);
            assign_to_lowest(scored, &order, team_count, rng)
        },
        TableCache::difference,
    );

    match found {
        Some(table) => (table, Strategy::Greedy),
        None => {
            warn!(
                team_count,
                "every greedy attempt repeated the previous partition, using deterministic order"
            );
            (deterministic(scored, team_count), Strategy::GreedyFallback)
        }
    }
}
