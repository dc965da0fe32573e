use std::sync::Arc;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env()?);
        Ok(Self { config })
    }

    pub fn from_parts(config: Arc<AppConfig>) -> Self {
        Self { config }
    }

    pub fn fake() -> Self {
        Self::from_parts(Arc::new(AppConfig::default()))
    }
}
