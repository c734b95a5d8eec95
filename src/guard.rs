use std::collections::HashSet;

use crate::cache::TableCache;
use crate::model::group::Partition;
use crate::scorer::ScoredParticipant;

/// Whether two partitions put the same participants in the team at each position.
///
/// Teams are compared index by index and order within a team is ignored, so the
/// same grouping listed in a different team order is *not* similar.
pub fn is_similar(a: &Partition, b: &Partition) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x.ids() == y.ids())
}

/// Rejects candidates that would repeat a previous partition.
pub(crate) struct RepetitionGuard<'p> {
    previous: Vec<HashSet<&'p str>>,
}

impl<'p> RepetitionGuard<'p> {
    pub fn new(previous: &'p Partition) -> RepetitionGuard<'p> {
        RepetitionGuard { previous: previous.iter().map(|team| team.ids()).collect() }
    }

    pub fn rejects(&self, candidate: &TableCache, scored: &[ScoredParticipant<'_>]) -> bool {
        self.previous.len() == candidate.teams.len()
            && self
                .previous
                .iter()
                .zip(&candidate.teams)
                .all(|(ids, team)| *ids == team.get_ids(scored))
    }
}

/// `true` when a guard is present and rejects the candidate.
pub(crate) fn collides(
    guard: Option<&RepetitionGuard<'_>>,
    candidate: &TableCache,
    scored: &[ScoredParticipant<'_>],
) -> bool {
    guard.is_some_and(|g| g.rejects(candidate, scored))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::Participant;
    use crate::model::group::Team;

    fn team(ids: &[&str]) -> Team {
        let members = ids.iter().map(|id| Participant::new(*id, *id)).collect();
        Team { members, total_score: 0.0 }
    }

    #[test]
    fn test_same_members_in_any_order_are_similar() {
        let a = Partition::new(vec![team(&["1", "2"]), team(&["3", "4"])]);
        let b = Partition::new(vec![team(&["2", "1"]), team(&["4", "3"])]);
        assert!(is_similar(&a, &b));
    }

    #[test]
    fn test_swapped_team_positions_are_not_similar() {
        let a = Partition::new(vec![team(&["1", "2"]), team(&["3", "4"])]);
        let b = Partition::new(vec![team(&["3", "4"]), team(&["1", "2"])]);
        assert!(!is_similar(&a, &b));
    }

    #[test]
    fn test_different_team_counts_are_not_similar() {
        let a = Partition::new(vec![team(&["1", "2"]), team(&["3", "4"])]);
        let b = Partition::new(vec![team(&["1", "2", "3", "4"])]);
        assert!(!is_similar(&a, &b));
    }

    #[test]
    fn test_guard_matches_table() {
        let people: Vec<Participant> =
            ["1", "2", "3"].iter().map(|id| Participant::new(*id, *id)).collect();
        let scored: Vec<ScoredParticipant<'_>> = people
            .iter()
            .map(|participant| ScoredParticipant { participant, score: 1.0 })
            .collect();
        let previous = Partition::new(vec![team(&["1", "3"]), team(&["2"])]);
        let guard = RepetitionGuard::new(&previous);

        let mut table = TableCache::create(2);
        table.add(0, 2, 1.0);
        table.add(0, 0, 1.0);
        table.add(1, 1, 1.0);
        assert!(guard.rejects(&table, &scored));
        assert!(collides(Some(&guard), &table, &scored));
        assert!(!collides(None, &table, &scored));

        let mut other = TableCache::create(2);
        other.add(0, 0, 1.0);
        other.add(1, 1, 1.0);
        other.add(1, 2, 1.0);
        assert!(!guard.rejects(&other, &scored));
    }
}
