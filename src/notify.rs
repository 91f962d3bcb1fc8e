use anyhow::{Context, Result};
use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use rdkafka::util::Timeout;
use std::time::Duration;
use tracing::info;

use crate::config::AppConfig;
use crate::models::notification::RewardNotification;
use crate::processor::award_processor::RewardNotifier;

/// Publishes reward notifications to the user-notifications topic. The
/// push gateway consuming that topic owns actual delivery.
pub struct KafkaNotifier {
    producer: FutureProducer,
    topic: String,
}

impl KafkaNotifier {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let mut client_config = ClientConfig::new();
        client_config
            .set("bootstrap.servers", &config.kafka_bootstrap_servers)
            .set("message.timeout.ms", "5000")
            // SASL Configuration
            .set("security.protocol", &config.kafka_security_protocol)
            .set("sasl.mechanism", &config.kafka_sasl_mechanism)
            .set("sasl.username", &config.kafka_username)
            .set("sasl.password", &config.kafka_password);

        let producer: FutureProducer = client_config.create()?;
        info!(
            "Notification producer ready for topic: {}",
            config.kafka_notifications_topic
        );

        Ok(Self {
            producer,
            topic: config.kafka_notifications_topic.clone(),
        })
    }
}

#[async_trait]
impl RewardNotifier for KafkaNotifier {
    async fn deliver(&self, notification: &RewardNotification) -> Result<()> {
        let key = notification.user_id.to_string();
        let payload =
            serde_json::to_string(notification).context("Failed to serialize notification")?;

        let record = FutureRecord::to(&self.topic).key(&key).payload(&payload);

        self.producer
            .send(record, Timeout::After(Duration::from_secs(0)))
            .await
            .map_err(|(e, _msg)| e)
            .with_context(|| format!("Failed to publish notification for user {}", key))?;

        Ok(())
    }
}
