use chrono::NaiveTime;
use uuid::Uuid;

/// Trip fields the award workflow needs: the scheduled departure
/// time-of-day plus route display names for the notification text.
#[derive(Debug, Clone)]
pub struct TripInfo {
    pub trip_id: Uuid,
    pub departure_time: NaiveTime,
    pub origin: String,
    pub destination: String,
}
