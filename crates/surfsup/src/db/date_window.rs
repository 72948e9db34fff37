use log::debug;
use time::{Date, Duration};

use super::{ClimateData, Error};

/// Length of the "most recent year" lookback. A fixed day count, leap years are ignored.
pub const WINDOW_DAYS: i64 = 365;

/// First day of the lookback window ending at `most_recent`
pub fn window_start(most_recent: Date) -> Date {
    most_recent.saturating_sub(Duration::days(WINDOW_DAYS))
}

/// Resolve the start of the most recent year of observations.
///
/// Recomputed on every call, the store is consulted each time.
pub async fn resolve_window(climate_db: &dyn ClimateData) -> Result<Date, Error> {
    let most_recent = climate_db
        .most_recent_date()
        .await?
        .ok_or(Error::EmptyDataset)?;

    let most_recent_date = most_recent
        .to_date()
        .map_err(|source| Error::MalformedDate {
            value: most_recent.to_string(),
            source,
        })?;

    let start = window_start(most_recent_date);
    debug!("resolved window start {} from {}", start, most_recent);
    Ok(start)
}
