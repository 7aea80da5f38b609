use std::sync::Arc;

use hourglass_rs::{SafeTimeProvider, TimeSource};

/// clock handle shared by every account and card that should see the same time
pub type SharedTime = Arc<SafeTimeProvider>;

/// wall-clock time
pub fn system_time() -> SharedTime {
    Arc::new(SafeTimeProvider::new(TimeSource::System))
}

/// controllable clock starting at `start`, for tests and simulations
pub fn test_time(start: chrono::DateTime<chrono::Utc>) -> SharedTime {
    Arc::new(SafeTimeProvider::new(TimeSource::Test(start)))
}
