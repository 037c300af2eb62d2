use serde::{Serialize, Deserialize};

/// Hit and occupancy counters for one of the engine caches.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheStats {
    pub hit_count: usize,
    pub miss_count: usize,
    pub size: usize,
    pub capacity: usize,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hit_count + self.miss_count;
        if total == 0 {
            0.0
        } else {
            self.hit_count as f64 / total as f64
        }
    }
}

/// Point-in-time view of engine state, for logging and diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineStats {
    pub document_count: usize,
    pub vocabulary_size: usize,
    pub result_cache: CacheStats,
    pub normalization_cache: CacheStats,
}
