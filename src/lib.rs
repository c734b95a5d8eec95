//! team-balance: split a pool of participants into teams of similar strength.
//!
//! Each participant is reduced to one weighted score, then partitioned by one of
//! several bounded randomized searches. Given the previous result, the search
//! steers away from repeating it. No IO and no state between calls.
//!
//! ```rust
//! use team_balance::{balance, difference, Algorithm, Participant};
//!
//! let players: Vec<Participant> = [5.0, 4.0, 3.0, 2.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &r)| {
//!         Participant::new(i.to_string(), format!("Player {i}"))
//!             .with_attributes(Some(r), Some(r), Some(r))
//!     })
//!     .collect();
//!
//! let first = balance(&players, 2, Algorithm::Fast, None, None).unwrap();
//! assert_eq!(first.partition.len(), 2);
//! assert_eq!(first.difference, difference(&first.partition));
//!
//! // Ask for another draw that differs from the first one.
//! let next = balance(&players, 2, Algorithm::Best, None, Some(&first.partition)).unwrap();
//! assert_eq!(next.partition.participant_count(), 4);
//! ```

pub mod balancer;
mod cache;
pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod evaluate;
mod exhaustive;
pub mod format;
mod greedy;
pub mod guard;
pub mod history;
mod improved;
pub mod model;
pub mod roster;
pub mod scorer;
mod search;

pub use balancer::{balance, balance_with_rng, validate, Algorithm, Balanced, Strategy};
pub use config::BalancerConfig;
pub use draw::DrawSession;
pub use error::{BalanceError, ConfigError, DrawError, ValidationError};
pub use evaluate::difference;
pub use format::format_announcement;
pub use guard::is_similar;
pub use history::{DrawHistory, DrawRecord, DrawStats};
pub use model::condition::{Score, Weights};
pub use model::entity::{Id, Participant};
pub use model::group::{Partition, Team};
pub use roster::eligible;
pub use scorer::{score, score_all, ScoredParticipant};
