//! Short-TTL cache for the two reference listings
//!
//! The only shared mutable state in the crate. Writers invalidate
//! synchronously after every mutation, so readers inside the TTL window
//! still observe their own writes.

use std::time::{Duration, Instant};

use parking_lot::RwLock;

use super::models::{PlayerSummary, Team};

/// A cached value with its capture time for TTL checking.
pub(super) struct CachedValue<T> {
    value: T,
    cached_at: Instant,
}

impl<T: Clone> CachedValue<T> {
    pub(super) fn new(value: T) -> Self {
        Self {
            value,
            cached_at: Instant::now(),
        }
    }

    pub(super) fn get(&self, ttl: Duration) -> Option<T> {
        if self.cached_at.elapsed() < ttl {
            Some(self.value.clone())
        } else {
            None
        }
    }
}

/// Cache slots for the selection-widget listings.
pub(super) struct ListingCache {
    pub(super) teams: RwLock<Option<CachedValue<Vec<Team>>>>,
    pub(super) players: RwLock<Option<CachedValue<Vec<PlayerSummary>>>>,
}

impl ListingCache {
    pub(super) fn new() -> Self {
        Self {
            teams: RwLock::new(None),
            players: RwLock::new(None),
        }
    }

    pub(super) fn invalidate_all(&self) {
        *self.teams.write() = None;
        *self.players.write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_value_hits_within_ttl() {
        let cached = CachedValue::new(vec![1, 2, 3]);
        assert_eq!(cached.get(Duration::from_secs(60)), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_zero_ttl_always_misses() {
        let cached = CachedValue::new("stale");
        assert_eq!(cached.get(Duration::ZERO), None);
    }

    #[test]
    fn test_invalidate_all_clears_both_slots() {
        let cache = ListingCache::new();
        *cache.teams.write() = Some(CachedValue::new(vec![Team {
            team_id: 1,
            team_name: "India".to_string(),
            country: "India".to_string(),
        }]));
        *cache.players.write() = Some(CachedValue::new(vec![PlayerSummary {
            player_id: 10,
            full_name: "V Kohli".to_string(),
        }]));

        cache.invalidate_all();

        assert!(cache.teams.read().is_none());
        assert!(cache.players.read().is_none());
    }
}
