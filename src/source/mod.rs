//! Record sources: where a view's collection comes from.
//!
//! The console ships with fixture data behind a simulated network delay; a real
//! backend slots in by implementing [`RecordSource`].

pub mod fixtures;

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::AppError;

/// Deferred load of a complete, finite collection.
#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    async fn load(&self) -> Result<Vec<R>, AppError>;
}

/// Serves a fixed collection after a fixed delay.
pub struct FixtureSource<R> {
    records: Vec<R>,
    delay: Duration,
}

impl<R> FixtureSource<R> {
    pub fn new(records: Vec<R>, delay: Duration) -> Self {
        Self { records, delay }
    }
}

#[async_trait]
impl<R: Clone + Send + Sync> RecordSource<R> for FixtureSource<R> {
    async fn load(&self) -> Result<Vec<R>, AppError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(self.records.clone())
    }
}
