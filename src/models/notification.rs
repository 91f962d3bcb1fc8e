use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Event published to the notifications topic after a point is credited.
#[derive(Debug, Clone, Serialize)]
pub struct RewardNotification {
    pub user_id: Uuid,
    pub category: String,
    pub title: String,
    pub body: String,
    pub data: HashMap<String, Value>,
}

impl RewardNotification {
    pub fn points_awarded(
        user_id: Uuid,
        origin: &str,
        destination: &str,
        total_points: i64,
        needed: i64,
    ) -> Self {
        let mut data = HashMap::new();
        data.insert("origin".to_string(), Value::from(origin));
        data.insert("destination".to_string(), Value::from(destination));
        data.insert("total_points".to_string(), Value::from(total_points));
        data.insert("points_to_free_trip".to_string(), Value::from(needed));

        Self {
            user_id,
            category: "loyalty_points".to_string(),
            title: "You earned a loyalty point!".to_string(),
            body: format!(
                "Your trip from {} to {} is complete. You now have {} point(s); {} more and your next trip is free!",
                origin, destination, total_points, needed
            ),
            data,
        }
    }
}
