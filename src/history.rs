//! Bounded, newest-first record of past draws.
//!
//! The engine itself keeps no state between calls; callers persist a
//! [`DrawHistory`] however they like (it is serde-serializable) and feed
//! [`DrawHistory::latest`] back in as the partition to avoid.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::balancer::{Algorithm, Balanced};
use crate::constants::DEFAULT_HISTORY_CAPACITY;
use crate::model::group::Partition;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRecord {
    pub id: Uuid,
    pub partition: Partition,
    pub difference: f64,
    pub algorithm: Algorithm,
    pub timestamp: DateTime<Utc>,
    pub participant_count: usize,
}

impl DrawRecord {
    pub fn new(balanced: Balanced) -> DrawRecord {
        DrawRecord {
            id: Uuid::new_v4(),
            participant_count: balanced.partition.participant_count(),
            partition: balanced.partition,
            difference: balanced.difference,
            algorithm: balanced.algorithm,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawStats {
    pub total_draws: usize,
    pub average_difference: f64,
    pub best_difference: f64,
    pub worst_difference: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawHistory {
    capacity: usize,
    records: VecDeque<DrawRecord>,
}

impl Default for DrawHistory {
    fn default() -> Self {
        DrawHistory::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }
}

impl DrawHistory {
    /// A capacity of 0 is treated as 1.
    pub fn with_capacity(capacity: usize) -> DrawHistory {
        let capacity = capacity.max(1);
        DrawHistory { capacity, records: VecDeque::with_capacity(capacity) }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Insert as the newest entry, evicting the oldest beyond capacity.
    pub fn push(&mut self, record: DrawRecord) -> &DrawRecord {
        self.records.push_front(record);
        self.records.truncate(self.capacity.max(1));
        &self.records[0]
    }

    pub fn latest(&self) -> Option<&DrawRecord> {
        self.records.front()
    }

    pub fn best(&self) -> Option<&DrawRecord> {
        self.records.iter().min_by(|a, b| a.difference.total_cmp(&b.difference))
    }

    pub fn stats(&self) -> DrawStats {
        if self.records.is_empty() {
            return DrawStats::default();
        }
        let differences = self.records.iter().map(|r| r.difference);
        DrawStats {
            total_draws: self.records.len(),
            average_difference: differences.clone().sum::<f64>() / self.records.len() as f64,
            best_difference: differences.clone().fold(f64::INFINITY, f64::min),
            worst_difference: differences.fold(f64::NEG_INFINITY, f64::max),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
