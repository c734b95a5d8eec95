use std::collections::HashSet;

use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::evaluate::{difference_of_totals, variance_of_totals};
use crate::model::condition::Score;
use crate::model::group::{Partition, Team};
use crate::scorer::ScoredParticipant;

pub(crate) type Index = usize;

/// Team under construction: positions into the scored slice plus a running total.
#[derive(Debug, Clone, Default)]
pub(crate) struct TeamCache {
    pub members: Vec<Index>,
    pub total: Score,
}

impl TeamCache {
    fn add(&mut self, member: Index, score: Score) {
        self.members.push(member);
        self.total += score;
    }

    pub fn get_ids<'a>(&self, scored: &[ScoredParticipant<'a>]) -> HashSet<&'a str> {
        self.members.iter().map(|&i| scored[i].participant.id.as_str()).collect()
    }
}

#[derive(Debug, Clone)]
pub(crate) struct TableCache {
    pub teams: Vec<TeamCache>,
}

impl TableCache {
    pub fn create(team_count: usize) -> TableCache {
        TableCache { teams: vec![TeamCache::default(); team_count] }
    }

    pub fn add(&mut self, team_index: Index, member: Index, score: Score) {
        self.teams[team_index].add(member, score);
    }

    pub fn totals(&self) -> Vec<Score> {
        self.teams.iter().map(|team| team.total).collect()
    }

    /// Teams holding the lowest total. If any of them is still empty, only the
    /// empty ones, so no team is left without members.
    fn min_total_teams(&self) -> Vec<Index> {
        let min = self.teams.iter().map(|team| team.total).fold(f64::INFINITY, f64::min);
        let lowest: Vec<Index> = self.teams.iter().positions(|team| team.total == min).collect();
        let empty: Vec<Index> =
            lowest.iter().copied().filter(|&i| self.teams[i].members.is_empty()).collect();
        if empty.is_empty() {
            lowest
        } else {
            empty
        }
    }

    /// Any team holding the lowest total, chosen uniformly.
    pub fn pick_min_total_team<R: Rng + ?Sized>(&self, rng: &mut R) -> Index {
        self.min_total_teams().choose(rng).copied().unwrap_or(0)
    }

    /// Lowest-index team holding the lowest total.
    pub fn first_min_total_team(&self) -> Index {
        self.min_total_teams().first().copied().unwrap_or(0)
    }

    /// Distance between this team's total after adding `score` and the mean of every other team.
    pub fn placement_imbalance(&self, team_index: Index, score: Score) -> f64 {
        let others = self.teams.len() - 1;
        let others_mean = if others == 0 {
            0.0
        } else {
            let others_total: Score = self
                .teams
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != team_index)
                .map(|(_, team)| team.total)
                .sum();
            others_total / others as f64
        };
        (self.teams[team_index].total + score - others_mean).abs()
    }

    pub fn difference(&self) -> f64 {
        difference_of_totals(&self.totals())
    }

    pub fn variance(&self, target: Score) -> f64 {
        variance_of_totals(&self.totals(), target)
    }

    pub fn into_partition(self, scored: &[ScoredParticipant<'_>]) -> Partition {
        let teams = self
            .teams
            .into_iter()
            .map(|team| Team {
                members: team.members.iter().map(|&i| scored[i].participant.clone()).collect(),
                total_score: team.total,
            })
            .collect();
        Partition::new(teams)
    }
}
