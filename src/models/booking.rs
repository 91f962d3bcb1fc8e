use chrono::NaiveDate;
use uuid::Uuid;

use crate::models::trip::TripInfo;

/// Booking lifecycle states as stored in the `status` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// A confirmed, not-yet-credited booking pulled in by the award run.
///
/// `trip` is None when the booking references a trip that no longer
/// exists; such rows are skipped by the workflow.
#[derive(Debug, Clone)]
pub struct AwardCandidate {
    pub booking_id: Uuid,
    pub user_id: Uuid,
    pub travel_date: NaiveDate,
    pub paid_with_reward: bool,
    pub trip: Option<TripInfo>,
}
