use anyhow::{Context, Result};
use chrono_tz::Tz;
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub kafka_bootstrap_servers: String,
    pub kafka_notifications_topic: String,
    pub kafka_sasl_mechanism: String,
    pub kafka_username: String,
    pub kafka_password: String,
    pub kafka_security_protocol: String,
    pub database_url: String,
    pub booking_timezone: Tz,
    pub award_interval_secs: u64,
    pub log_level: String,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let kafka_bootstrap_servers =
            env::var("KAFKA_BOOTSTRAP_SERVERS").unwrap_or_else(|_| "localhost:9092".to_string());
        let kafka_notifications_topic = env::var("KAFKA_NOTIFICATIONS_TOPIC")
            .unwrap_or_else(|_| "user-notifications".to_string());
        let kafka_sasl_mechanism =
            env::var("KAFKA_SASL_MECHANISM").unwrap_or_else(|_| "SCRAM-SHA-256".to_string());
        let kafka_username = env::var("KAFKA_USERNAME").unwrap_or_default();
        let kafka_password = env::var("KAFKA_PASSWORD").unwrap_or_default();
        let kafka_security_protocol =
            env::var("KAFKA_SECURITY_PROTOCOL").unwrap_or_else(|_| "SASL_PLAINTEXT".to_string());

        let db_host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let db_port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
        let db_name = env::var("DB_DATABASE").unwrap_or_else(|_| "transit_admin".to_string());
        let db_user = env::var("DB_USER").unwrap_or_else(|_| "transit".to_string());
        let db_pwd = env::var("DB_PWD").unwrap_or_else(|_| "transit".to_string());

        let database_url = format!(
            "postgres://{}:{}@{}:{}/{}",
            db_user, db_pwd, db_host, db_port, db_name
        );

        let tz_name =
            env::var("BOOKING_TIMEZONE").unwrap_or_else(|_| "America/Mexico_City".to_string());
        let booking_timezone: Tz = tz_name
            .parse()
            .ok()
            .with_context(|| format!("Invalid BOOKING_TIMEZONE: '{}'", tz_name))?;

        let award_interval_secs = env::var("AWARD_INTERVAL_SECS")
            .unwrap_or_else(|_| "600".to_string())
            .parse()
            .unwrap_or(600);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            kafka_bootstrap_servers,
            kafka_notifications_topic,
            kafka_sasl_mechanism,
            kafka_username,
            kafka_password,
            kafka_security_protocol,
            database_url,
            booking_timezone,
            award_interval_secs,
            log_level,
        })
    }
}
