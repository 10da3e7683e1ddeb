//! Preference history recording.
//!
//! Each snapshot is an owned copy of a player's preference vector, so later
//! updates never reach back into history. Recording is governed by a
//! `HistoryPolicy`: off by default, optionally sampled, optionally bounded.
//!
//! With an unbounded policy memory grows linearly with games played; callers
//! running long tournaments should set an interval or a capacity.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::HistoryPolicy;

/// Immutable copy of a preference vector.
///
/// Stored inline for games with up to four strategies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot(SmallVec<[f64; 4]>);

impl Snapshot {
    /// Copy a preference vector.
    #[must_use]
    pub fn new(preferences: &[f64]) -> Self {
        Self(SmallVec::from_slice(preferences))
    }

    /// The recorded probabilities.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

impl std::ops::Deref for Snapshot {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Ordered log of preference snapshots for one player.
#[derive(Clone, Debug, Default)]
pub struct PreferenceHistory {
    snapshots: VecDeque<Snapshot>,
    policy: HistoryPolicy,
    /// Games observed, recorded or not.
    games_seen: u64,
    /// Snapshots dropped to respect the capacity.
    evicted: u64,
}

impl PreferenceHistory {
    /// Create an empty history with the given policy.
    pub fn new(policy: HistoryPolicy) -> Self {
        Self {
            snapshots: VecDeque::with_capacity(policy.capacity.unwrap_or(0).min(1024)),
            policy,
            games_seen: 0,
            evicted: 0,
        }
    }

    /// Observe the preferences after a game, recording them if the policy asks.
    ///
    /// Returns `true` if a snapshot was stored.
    pub fn observe(&mut self, preferences: &[f64]) -> bool {
        self.games_seen += 1;
        if !self.policy.is_enabled() || self.games_seen % u64::from(self.policy.interval) != 0 {
            return false;
        }

        if let Some(capacity) = self.policy.capacity {
            if capacity == 0 {
                return false;
            }
            if self.snapshots.len() >= capacity {
                self.snapshots.pop_front();
                if self.evicted == 0 {
                    log::debug!("history capacity {} reached, evicting oldest snapshots", capacity);
                }
                self.evicted += 1;
            }
        }
        self.snapshots.push_back(Snapshot::new(preferences));
        true
    }

    /// Number of snapshots currently held.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if no snapshots are held.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Iterate over snapshots, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    /// Most recent snapshot.
    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.back()
    }

    /// The recording policy.
    pub fn policy(&self) -> HistoryPolicy {
        self.policy
    }

    /// Snapshots dropped because the capacity was reached.
    pub fn evicted(&self) -> u64 {
        self.evicted
    }

    /// Copy the snapshots out as plain vectors.
    pub fn to_vecs(&self) -> Vec<Vec<f64>> {
        self.snapshots.iter().map(|s| s.to_vec()).collect()
    }
}
