//! Event relay and logging configuration types.

use serde::{Deserialize, Serialize};

/// Lifecycle event relay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventsConfig {
    /// Broadcast channel capacity (valid range: 1-4096).
    pub capacity: usize,
}

impl EventsConfig {
    pub const MIN_CAPACITY: usize = 1;
    pub const MAX_CAPACITY: usize = 4096;

    /// `capacity` forced into the valid range.
    pub fn effective_capacity(&self) -> usize {
        self.capacity.clamp(Self::MIN_CAPACITY, Self::MAX_CAPACITY)
    }
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "dockyard=info".into(),
        }
    }
}
