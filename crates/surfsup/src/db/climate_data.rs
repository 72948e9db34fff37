use async_trait::async_trait;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use sqlx::{
    sqlite::{SqliteConnectOptions, SqliteConnection},
    ConnectOptions, Connection,
};
use std::path::Path;
use utoipa::ToSchema;

use super::DateKey;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("No observations recorded, unable to resolve the date window")]
    EmptyDataset,
    #[error("Stored date '{value}' is not a valid yyyy-mm-dd date: {source}")]
    MalformedDate {
        value: String,
        #[source]
        source: time::error::Parse,
    },
    #[error("Failed to query climate store: {0}")]
    StoreUnavailable(#[from] sqlx::Error),
}

/// One day of rainfall at one station
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema, sqlx::FromRow)]
pub struct Precipitation {
    #[schema(value_type = String, example = "2017-08-23")]
    pub date: DateKey,
    /// Rainfall in inches, null when the station did not report
    pub prep: Option<f64>,
}

/// One day's temperature observation at one station
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema, sqlx::FromRow)]
pub struct TemperatureObservation {
    #[schema(value_type = String, example = "2017-08-23")]
    pub date: DateKey,
    /// Temperature in degrees Fahrenheit
    pub tobs: Option<f64>,
}

/// Aggregate temperatures, serialized as `[min, avg, max]`.
///
/// All three are `None` when nothing matched the filter.
#[derive(Serialize, Debug, Clone, Copy, Default, PartialEq, sqlx::FromRow)]
#[serde(into = "[Option<f64>; 3]")]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

impl From<TemperatureStats> for [Option<f64>; 3] {
    fn from(stats: TemperatureStats) -> Self {
        [stats.min, stats.avg, stats.max]
    }
}

/// Inclusive date bounds for temperature aggregates, open-ended when `end` is `None`
#[derive(Debug, Clone, PartialEq)]
pub struct DateRange {
    pub start: DateKey,
    pub end: Option<DateKey>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClimateData: Send + Sync {
    /// Greatest observation date in the store, `None` when there are no observations
    async fn most_recent_date(&self) -> Result<Option<DateKey>, Error>;
    async fn precipitation_since(&self, window: &DateKey) -> Result<Vec<Precipitation>, Error>;
    /// Station identifiers in table order, duplicates included
    async fn stations(&self) -> Result<Vec<String>, Error>;
    async fn temperatures_since(
        &self,
        station: &str,
        window: &DateKey,
    ) -> Result<Vec<TemperatureObservation>, Error>;
    async fn temperature_stats(&self, range: &DateRange) -> Result<TemperatureStats, Error>;
}

/// Read-only access to the `measurement` and `station` relations of a SQLite store
pub struct ClimateAccess {
    options: SqliteConnectOptions,
}

impl ClimateAccess {
    pub fn new(database_path: impl AsRef<Path>) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(database_path)
            .read_only(true)
            .create_if_missing(false);
        Self { options }
    }

    /// Opens a fresh connection for a single query, so requests never share cursor state
    pub async fn open_connection(&self) -> Result<SqliteConnection, Error> {
        Ok(self.options.connect().await?)
    }
}

/// Closes the connection once the query is done, whatever its outcome.
async fn release<T>(conn: SqliteConnection, result: Result<T, sqlx::Error>) -> Result<T, Error> {
    if let Err(e) = conn.close().await {
        warn!("error closing climate store connection: {}", e);
    }
    Ok(result?)
}

#[async_trait]
impl ClimateData for ClimateAccess {
    async fn most_recent_date(&self) -> Result<Option<DateKey>, Error> {
        let mut conn = self.open_connection().await?;
        let result = sqlx::query_scalar::<_, Option<DateKey>>("SELECT MAX(date) FROM measurement")
            .fetch_one(&mut conn)
            .await;
        let most_recent = release(conn, result).await?;
        debug!("most recent observation date: {:?}", most_recent);
        Ok(most_recent)
    }

    async fn precipitation_since(&self, window: &DateKey) -> Result<Vec<Precipitation>, Error> {
        let mut conn = self.open_connection().await?;
        let result = sqlx::query_as::<_, Precipitation>(
            "SELECT date, CAST(prcp AS REAL) AS prep FROM measurement WHERE date >= ?",
        )
        .bind(window)
        .fetch_all(&mut conn)
        .await;
        release(conn, result).await
    }

    async fn stations(&self) -> Result<Vec<String>, Error> {
        let mut conn = self.open_connection().await?;
        let result = sqlx::query_scalar::<_, String>("SELECT station FROM station")
            .fetch_all(&mut conn)
            .await;
        release(conn, result).await
    }

    async fn temperatures_since(
        &self,
        station: &str,
        window: &DateKey,
    ) -> Result<Vec<TemperatureObservation>, Error> {
        let mut conn = self.open_connection().await?;
        let result = sqlx::query_as::<_, TemperatureObservation>(
            "SELECT date, CAST(tobs AS REAL) AS tobs FROM measurement
             WHERE station = ? AND date >= ?",
        )
        .bind(station)
        .bind(window)
        .fetch_all(&mut conn)
        .await;
        release(conn, result).await
    }

    async fn temperature_stats(&self, range: &DateRange) -> Result<TemperatureStats, Error> {
        let mut conn = self.open_connection().await?;
        let result = match &range.end {
            None => {
                sqlx::query_as::<_, TemperatureStats>(
                    "SELECT CAST(MIN(tobs) AS REAL) AS min, AVG(tobs) AS avg,
                            CAST(MAX(tobs) AS REAL) AS max
                     FROM measurement WHERE date >= ?",
                )
                .bind(&range.start)
                .fetch_one(&mut conn)
                .await
            }
            Some(end) => {
                sqlx::query_as::<_, TemperatureStats>(
                    "SELECT CAST(MIN(tobs) AS REAL) AS min, AVG(tobs) AS avg,
                            CAST(MAX(tobs) AS REAL) AS max
                     FROM measurement WHERE date >= ? AND date <= ?",
                )
                .bind(&range.start)
                .bind(end)
                .fetch_one(&mut conn)
                .await
            }
        };
        release(conn, result).await
    }
}
