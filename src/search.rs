use rand::Rng;
use tracing::{debug, trace};

use crate::cache::TableCache;
use crate::guard::{collides, RepetitionGuard};
use crate::scorer::ScoredParticipant;

pub(crate) struct Params {
    pub max_attempts: usize,
    /// A distinct candidate whose metric falls below this ends the search.
    pub accept_below: f64,
}

impl Params {
    /// A single attempt suffices unless there is a previous partition to steer away from.
    pub fn new(avoiding: bool, attempts: usize, accept_below: f64) -> Params {
        Params { max_attempts: if avoiding { attempts } else { 1 }, accept_below }
    }
}

struct State {
    best: Option<TableCache>,
    best_metric: f64,
    n_rejected: usize,
}

/// Bounded best-of-K sampling.
///
/// `build` produces one candidate per attempt; candidates the guard rejects are
/// dropped, the rest are ranked by `metric` (lower is better). Returns `None`
/// only when every attempt repeated the previous partition.
pub(crate) fn best_of<R, B, M>(
    params: &Params,
    guard: Option<&RepetitionGuard<'_>>,
    scored: &[ScoredParticipant<'_>],
    rng: &mut R,
    mut build: B,
    metric: M,
) -> Option<TableCache>
where
    R: Rng + ?Sized,
    B: FnMut(usize, &mut R) -> TableCache,
    M: Fn(&TableCache) -> f64,
{
    let mut state = State { best: None, best_metric: f64::INFINITY, n_rejected: 0 };

    for attempt in 0..params.max_attempts {
        let candidate = build(attempt, rng);
        if collides(guard, &candidate, scored) {
            trace!(attempt, "candidate repeats the previous partition");
            state.n_rejected += 1;
            continue;
        }

        let value = metric(&candidate);
        if state.best.is_none() || value < state.best_metric {
            state.best_metric = value;
            state.best = Some(candidate);
        }
        if value < params.accept_below {
            debug!(attempt, metric = value, "accepted candidate");
            return state.best;
        }
    }

    debug!(
        attempts = params.max_attempts,
        rejected = state.n_rejected,
        best_metric = state.best_metric,
        "search budget exhausted"
    );
    state.best
}
