use std::env;

/// Connection settings for the InfluxDB backend, read once at startup and
/// passed explicitly into the service layer.
#[derive(Debug, Clone)]
pub struct InfluxSettings {
    pub url: String,
    pub token: String,
    pub org: String,
    pub bucket_test: String,
    pub bucket_spec: String,
}

impl InfluxSettings {
    pub fn from_env() -> Self {
        Self {
            url: env_or("INFLUXDB_URL", "http://localhost:8086"),
            token: env_or("INFLUXDB_TOKEN", ""),
            org: env_or("INFLUXDB_ORG", "primary"),
            bucket_test: env_or("INFLUX_BUCKET_TEST", "testspc"),
            bucket_spec: env_or("INFLUX_BUCKET_SPEC", "testspecspc"),
        }
    }
}

/// Address the HTTP server binds to.
pub fn bind_addr() -> String {
    env_or("GATEWAY_BIND", "0.0.0.0:8000")
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
