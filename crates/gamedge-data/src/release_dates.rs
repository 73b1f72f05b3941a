//! Release date windows that define the game categories.

use chrono::{DateTime, Duration, Utc};

/// How far back a release still counts for the popular category.
pub const POPULAR_GAMES_LOOKBACK_DAYS: i64 = 365;

/// How far back a release still counts as recently released.
pub const RECENTLY_RELEASED_LOOKBACK_DAYS: i64 = 30;

/// Release date bounds for each category, in unix seconds, computed for a
/// single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseWindows {
    /// Popular games are released after this.
    pub popular_min: i64,
    /// Recently released games are released after this...
    pub recently_released_min: i64,
    /// ...and before this.
    pub recently_released_max: i64,
    /// Coming-soon games are released after this.
    pub coming_soon_min: i64,
    /// Most-anticipated games are released after this.
    pub most_anticipated_min: i64,
}

impl ReleaseWindows {
    /// Compute the windows as seen at `now`.
    #[must_use]
    pub fn at(now: DateTime<Utc>) -> Self {
        let now_secs = now.timestamp();
        let days_ago = |days: i64| (now - Duration::days(days)).timestamp();

        Self {
            popular_min: days_ago(POPULAR_GAMES_LOOKBACK_DAYS),
            recently_released_min: days_ago(RECENTLY_RELEASED_LOOKBACK_DAYS),
            recently_released_max: now_secs,
            coming_soon_min: now_secs,
            most_anticipated_min: now_secs,
        }
    }
}

/// Source of release windows.
///
/// Queries ask for fresh windows every time they run, so long-lived
/// subscriptions follow the clock.
pub trait ReleaseDatesProvider: Send + Sync {
    /// The windows as of now.
    fn windows(&self) -> ReleaseWindows;
}

/// Provider backed by the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemReleaseDates;

impl ReleaseDatesProvider for SystemReleaseDates {
    fn windows(&self) -> ReleaseWindows {
        ReleaseWindows::at(Utc::now())
    }
}

/// Fixed windows, mainly for tests.
impl ReleaseDatesProvider for ReleaseWindows {
    fn windows(&self) -> ReleaseWindows {
        *self
    }
}
