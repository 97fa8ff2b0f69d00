use crate::prelude::HscoreError;
use log::{debug, warn};

pub struct LogManager;

impl LogManager {
    pub fn new() -> Self {
        Self
    }

    pub fn record(&self, message: &str) {
        debug!("{}", message);
    }

    pub fn reject(&self, error: &HscoreError) {
        warn!("rejected input: {}", error);
    }
}

impl Default for LogManager {
    fn default() -> Self {
        Self::new()
    }
}
