// InfluxDB v2 HTTP client and its result decoding
pub mod flux_csv;
pub mod flux_record;
pub mod influx_client;
pub mod query_executor_trait;
