pub const SELECT_AWARD_CANDIDATES: &str = r#"
SELECT b.booking_id,
       b.user_id,
       b.travel_date,
       b.paid_with_reward,
       t.trip_id,
       t.departure_time,
       co.name AS origin,
       cd.name AS destination
FROM bookings b
LEFT JOIN trips t ON t.trip_id = b.trip_id
LEFT JOIN cities co ON co.city_id = t.origin_city_id
LEFT JOIN cities cd ON cd.city_id = t.destination_city_id
WHERE b.status = $1
  AND b.points_awarded_at IS NULL
ORDER BY b.travel_date;
"#;

pub const COMPLETE_BOOKING: &str = r#"
UPDATE bookings
SET status = $2,
    points_awarded_at = $3
WHERE booking_id = $1
  AND status = $4
  AND points_awarded_at IS NULL;
"#;

pub const CREDIT_LOYALTY_POINT: &str = r#"
UPDATE users
SET loyalty_points = loyalty_points + $2
WHERE user_id = $1
RETURNING loyalty_points;
"#;
