//! Prediction cache with confidence-tiered per-entry TTL.
//!
//! Uses `moka::sync::Cache` with the `Expiry` trait for per-entry TTL:
//! high-confidence predictions stay cached longest, low-confidence ones
//! are refreshed soonest. Entries are immutable once written
//! (replace-on-write), so concurrent readers never observe a partial
//! entry. LRU eviction bounds capacity; hit/miss counters feed the
//! hit-rate metric.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use moka::sync::Cache;
use moka::Expiry;
use tracing::debug;

use aura_core::config::CacheConfig;
use aura_core::prediction::PredictionResult;
use aura_core::ContextRecord;

use crate::fingerprint::Fingerprint;

/// One cached prediction plus the tier data that produced its expiry.
#[derive(Debug, Clone)]
struct CachedPrediction {
    result: PredictionResult,
    ttl: Duration,
}

/// Reads each entry's precomputed TTL.
struct TierExpiry;

impl Expiry<Fingerprint, CachedPrediction> for TierExpiry {
    fn expire_after_create(
        &self,
        _key: &Fingerprint,
        value: &CachedPrediction,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Confidence-tiered prediction cache.
pub struct PredictionCache {
    cache: Option<Cache<Fingerprint, CachedPrediction>>,
    config: CacheConfig,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PredictionCache {
    /// Create a cache from config. Capacity zero disables caching
    /// entirely; every lookup then computes directly.
    pub fn new(config: CacheConfig) -> Self {
        let cache = (config.capacity > 0).then(|| {
            Cache::builder()
                .max_capacity(config.capacity)
                .expire_after(TierExpiry)
                .build()
        });
        Self {
            cache,
            config,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the cached prediction for this context, or compute, store,
    /// and return it. The stored TTL is tiered by the computed result's
    /// overall confidence.
    pub fn get_or_compute(
        &self,
        ctx: &ContextRecord,
        compute: impl FnOnce() -> PredictionResult,
    ) -> PredictionResult {
        let Some(cache) = &self.cache else {
            return compute();
        };

        let key = Fingerprint::of(ctx);
        if let Some(entry) = cache.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return entry.result;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);

        let result = compute();
        let confidence = result.overall_confidence();
        let ttl = self.ttl_for_confidence(confidence);
        debug!(%key, confidence, ttl_secs = ttl.as_secs(), "prediction cached");
        cache.insert(
            key,
            CachedPrediction {
                result: result.clone(),
                ttl,
            },
        );
        result
    }

    /// TTL tier for a confidence score. Monotone: higher confidence
    /// never yields a shorter TTL (enforced by `CacheConfig::validate`).
    pub fn ttl_for_confidence(&self, confidence: f64) -> Duration {
        let secs = if confidence >= self.config.conf_high {
            self.config.ttl_high_secs
        } else if confidence >= self.config.conf_elevated {
            self.config.ttl_elevated_secs
        } else if confidence >= self.config.conf_moderate {
            self.config.ttl_moderate_secs
        } else {
            self.config.ttl_floor_secs
        };
        Duration::from_secs(secs)
    }

    /// Drop all entries (e.g. on model artifact reload).
    pub fn invalidate_all(&self) {
        if let Some(cache) = &self.cache {
            cache.invalidate_all();
        }
    }

    /// Total cache hits.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Total cache misses.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Cache hit rate (0.0-1.0).
    pub fn hit_rate(&self) -> f64 {
        let h = self.hits() as f64;
        let m = self.misses() as f64;
        let total = h + m;
        if total == 0.0 {
            0.0
        } else {
            h / total
        }
    }

    /// Number of entries currently in the cache.
    pub fn entry_count(&self) -> u64 {
        self.cache.as_ref().map_or(0, |c| {
            c.run_pending_tasks();
            c.entry_count()
        })
    }
}

impl Default for PredictionCache {
    fn default() -> Self {
        Self::new(CacheConfig::default())
    }
}
