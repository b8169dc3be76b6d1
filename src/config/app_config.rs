use std::time::Duration;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub postgres_host: String,
    pub postgres_port: u16,
    pub postgres_user: String,
    pub postgres_password: String,
    pub availability_database: String,
    pub booking_database: String,
    pub authority_base_url: String,
    pub authority_check_timeout_secs: u64,
    pub authority_probe_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            postgres_host: std::env::var("POSTGRES_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            postgres_port: std::env::var("POSTGRES_PORT")
                .unwrap_or_else(|_| "5432".to_string())
                .parse()
                .unwrap_or(5432),
            postgres_user: std::env::var("POSTGRES_USER")
                .unwrap_or_else(|_| "postgres".to_string()),
            postgres_password: std::env::var("POSTGRES_PASSWORD")
                .unwrap_or_else(|_| "admin".to_string()),
            availability_database: std::env::var("AVAILABILITY_DATABASE")
                .unwrap_or_else(|_| "availability_service".to_string()),
            booking_database: std::env::var("BOOKING_DATABASE")
                .unwrap_or_else(|_| "booking_service".to_string()),
            authority_base_url: std::env::var("AUTHORITY_BASE_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string()),
            authority_check_timeout_secs: std::env::var("AUTHORITY_CHECK_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            authority_probe_timeout_secs: std::env::var("AUTHORITY_PROBE_TIMEOUT_SECS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .unwrap_or(3),
        }
    }

    pub fn availability_database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.availability_database
        )
    }

    pub fn booking_database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.postgres_user,
            self.postgres_password,
            self.postgres_host,
            self.postgres_port,
            self.booking_database
        )
    }

    pub fn authority_check_timeout(&self) -> Duration {
        Duration::from_secs(self.authority_check_timeout_secs)
    }

    pub fn authority_probe_timeout(&self) -> Duration {
        Duration::from_secs(self.authority_probe_timeout_secs)
    }
}
