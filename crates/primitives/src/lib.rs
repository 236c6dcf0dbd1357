//! Shared primitives for the stck playground.

/// Cancellable, tick-driven deadline timers.
pub mod timer;

pub use std::time::Duration;

pub use timer::Timer;
pub use web_time::Instant;

/// Default quiet period after the last edit before publishing.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Default minimum spacing between share-token writes to the URL.
pub const DEFAULT_SHARE_INTERVAL: Duration = Duration::from_millis(5_000);

/// Default namespace for per-device storage keys.
pub const DEFAULT_STORAGE_PREFIX: &str = "stck-";
