use crate::config::LogConfig;

pub fn init(log: &LogConfig) {
    if log.json {
        tracing_subscriber::fmt()
            .with_env_filter(log.filter.as_str())
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(log.filter.as_str())
            .init();
    }
}
