/// Pools of this size or smaller use the exhaustive shuffle search under `Algorithm::Best`;
/// larger pools use the improved greedy placement.
pub const SMALL_POOL_THRESHOLD: usize = 10;

/// Lowest and highest value an attribute can contribute to a score.
pub const ATTRIBUTE_MIN: f64 = 0.0;
pub const ATTRIBUTE_MAX: f64 = 5.0;

/// Greedy: attempts when a previous partition must be avoided, and the
/// imbalance percentage under which a distinct candidate is accepted at once.
pub const GREEDY_ATTEMPTS: usize = 50;
pub const GREEDY_ACCEPT_BELOW: f64 = 20.0;

/// Width of the score buckets used to build the greedy working order.
pub const BUCKET_WIDTH: f64 = 0.5;

/// Adjacent entries in the greedy working order closer than this are swapped at random.
pub const NEAR_TIE_WINDOW: f64 = 0.3;

pub const IMPROVED_ATTEMPTS: usize = 30;
pub const IMPROVED_ACCEPT_BELOW: f64 = 15.0;

/// Placement imbalances within this distance of the minimum count as tied.
pub const IMBALANCE_TIE_TOLERANCE: f64 = 0.01;

/// Exhaustive search runs more attempts when it must also dodge the previous partition.
pub const EXHAUSTIVE_ATTEMPTS: usize = 100;
pub const EXHAUSTIVE_ATTEMPTS_AVOIDING: usize = 200;

/// Sum of squared deviations from the per-team target under which a candidate is accepted.
pub const EXHAUSTIVE_ACCEPT_BELOW: f64 = 0.1;

pub const DEFAULT_HISTORY_CAPACITY: usize = 50;
