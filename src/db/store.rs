use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use crate::db::{queries, DbPool};
use crate::models::booking::{AwardCandidate, BookingStatus};
use crate::models::trip::TripInfo;
use crate::processor::award_processor::AwardStore;

/// Postgres-backed booking/user store for the award workflow.
pub struct PgAwardStore {
    pool: DbPool,
}

impl PgAwardStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AwardStore for PgAwardStore {
    async fn confirmed_unawarded(&self) -> Result<Vec<AwardCandidate>> {
        let rows = sqlx::query(queries::SELECT_AWARD_CANDIDATES)
            .bind(BookingStatus::Confirmed.as_str())
            .fetch_all(&self.pool)
            .await?;

        let mut candidates = Vec::with_capacity(rows.len());
        for row in rows {
            let trip_id: Option<Uuid> = row.try_get("trip_id")?;
            let departure_time: Option<NaiveTime> = row.try_get("departure_time")?;
            let trip = match (trip_id, departure_time) {
                (Some(trip_id), Some(departure_time)) => Some(TripInfo {
                    trip_id,
                    departure_time,
                    origin: row.try_get::<Option<String>, _>("origin")?.unwrap_or_default(),
                    destination: row
                        .try_get::<Option<String>, _>("destination")?
                        .unwrap_or_default(),
                }),
                _ => None,
            };

            candidates.push(AwardCandidate {
                booking_id: row.try_get("booking_id")?,
                user_id: row.try_get("user_id")?,
                travel_date: row.try_get("travel_date")?,
                paid_with_reward: row.try_get("paid_with_reward")?,
                trip,
            });
        }

        Ok(candidates)
    }

    async fn complete_booking(&self, booking_id: Uuid, awarded_at: DateTime<Utc>) -> Result<bool> {
        // Conditional update doubles as the claim: zero rows affected means
        // another run already completed this booking.
        let result = sqlx::query(queries::COMPLETE_BOOKING)
            .bind(booking_id)
            .bind(BookingStatus::Completed.as_str())
            .bind(awarded_at)
            .bind(BookingStatus::Confirmed.as_str())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    async fn credit_point(&self, user_id: Uuid) -> Result<i64> {
        let row = sqlx::query(queries::CREDIT_LOYALTY_POINT)
            .bind(user_id)
            .bind(1i64)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.try_get("loyalty_points")?)
    }
}
