// src/state.rs
use crate::clock::{Clock, SystemClock};
use crate::config::{AppConfig, ConfigError};
use crate::copywriter::{GeminiClient, TextGenerator};
use crate::db::connection::Database;
use chrono_tz::Tz;
use std::sync::Arc;

/// Everything a request handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub db: Database,
    pub clock: Arc<dyn Clock>,
    pub tz: Tz,
    pub copywriter: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> Result<Self, ConfigError> {
        let tz = config.time_zone()?;
        let db = Database::new(config.database_path.clone());
        let copywriter = GeminiClient::from_config(&config.copywriter)
            .map(|c| Arc::new(c) as Arc<dyn TextGenerator>);

        Ok(Self {
            config: Arc::new(config),
            db,
            clock: Arc::new(SystemClock),
            tz,
            copywriter,
        })
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_copywriter(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.copywriter = Some(generator);
        self
    }

    pub fn now_unix(&self) -> i64 {
        self.clock.now().timestamp()
    }
}
