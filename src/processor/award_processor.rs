use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::models::booking::AwardCandidate;
use crate::models::notification::RewardNotification;
use crate::models::trip::TripInfo;

/// A trip counts as complete this long after its scheduled departure.
const COMPLETION_LAG_HOURS: i64 = 2;

/// Every 8 earned points entitle the user to one free trip.
const POINTS_PER_FREE_TRIP: i64 = 8;

#[async_trait]
pub trait AwardStore: Send + Sync {
    /// Bookings with status `confirmed` and `points_awarded_at` unset.
    async fn confirmed_unawarded(&self) -> Result<Vec<AwardCandidate>>;

    /// Conditionally transition a booking to `completed`, stamping
    /// `points_awarded_at`. Returns false when the booking was no longer
    /// claimable (already completed by an overlapping run).
    async fn complete_booking(&self, booking_id: Uuid, awarded_at: DateTime<Utc>) -> Result<bool>;

    /// Add one loyalty point to the user, returning the new total.
    async fn credit_point(&self, user_id: Uuid) -> Result<i64>;
}

#[async_trait]
pub trait RewardNotifier: Send + Sync {
    /// Best-effort delivery; callers swallow errors.
    async fn deliver(&self, notification: &RewardNotification) -> Result<()>;
}

/// The trip's full departure instant: travel date + scheduled
/// time-of-day, interpreted in the operating timezone.
///
/// Returns None when that local datetime does not exist (DST gap); the
/// booking simply stays ineligible until a later run.
pub fn departure_instant(
    travel_date: NaiveDate,
    departure_time: NaiveTime,
    tz: Tz,
) -> Option<DateTime<Utc>> {
    match tz.from_local_datetime(&travel_date.and_time(departure_time)) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Some(earliest.with_timezone(&Utc)),
        LocalResult::None => None,
    }
}

/// Points still needed to reach the next free-trip threshold, computed
/// over the post-credit total. A total sitting exactly on a multiple of
/// 8 reports a full cycle of 8 for the *next* reward; the notification
/// copy has always read that way, so keep the arithmetic as-is.
pub fn points_to_free_trip(points: i64) -> i64 {
    let remainder = points % POINTS_PER_FREE_TRIP;
    if remainder == 0 && points > 0 {
        POINTS_PER_FREE_TRIP
    } else {
        POINTS_PER_FREE_TRIP - remainder
    }
}

/// One award run: scan confirmed bookings, complete and credit every
/// trip that departed at least two hours before `now`. Returns the
/// number of bookings processed successfully.
pub async fn run_award_cycle(
    store: &dyn AwardStore,
    notifier: &dyn RewardNotifier,
    tz: Tz,
    now: DateTime<Utc>,
) -> usize {
    let candidates = match store.confirmed_unawarded().await {
        Ok(candidates) => candidates,
        Err(e) => {
            error!("Failed to load award candidates: {:#}", e);
            return 0;
        }
    };

    let mut awarded = 0usize;

    for candidate in candidates {
        // Bookings pointing at a deleted trip never qualify.
        let trip = match candidate.trip.clone() {
            Some(trip) => trip,
            None => continue,
        };

        let departure = match departure_instant(candidate.travel_date, trip.departure_time, tz) {
            Some(departure) => departure,
            None => continue,
        };

        if now.signed_duration_since(departure) < Duration::hours(COMPLETION_LAG_HOURS) {
            continue;
        }

        match process_candidate(store, notifier, &candidate, &trip, now).await {
            Ok(true) => {
                awarded += 1;
                info!(
                    booking_id = %candidate.booking_id,
                    user_id = %candidate.user_id,
                    trip_id = %trip.trip_id,
                    paid_with_reward = candidate.paid_with_reward,
                    "Booking completed and loyalty credit settled"
                );
            }
            // Lost the claim to an overlapping run; nothing to do.
            Ok(false) => {}
            Err(e) => {
                error!(booking_id = %candidate.booking_id, "Failed to process booking: {:#}", e);
            }
        }
    }

    awarded
}

async fn process_candidate(
    store: &dyn AwardStore,
    notifier: &dyn RewardNotifier,
    candidate: &AwardCandidate,
    trip: &TripInfo,
    now: DateTime<Utc>,
) -> Result<bool> {
    if !store.complete_booking(candidate.booking_id, now).await? {
        return Ok(false);
    }

    // A trip paid for with an earned reward does not accrue further points.
    if candidate.paid_with_reward {
        return Ok(true);
    }

    let total = store.credit_point(candidate.user_id).await?;
    let needed = points_to_free_trip(total);

    let notification = RewardNotification::points_awarded(
        candidate.user_id,
        &trip.origin,
        &trip.destination,
        total,
        needed,
    );

    // The credit above is already committed; a lost notification must not
    // undo or block it.
    if let Err(e) = notifier.deliver(&notification).await {
        warn!(
            booking_id = %candidate.booking_id,
            user_id = %candidate.user_id,
            "Reward notification dispatch failed: {:#}", e
        );
    }

    Ok(true)
}
