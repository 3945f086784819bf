//! Shared, async-facing handle around a [`ViewController`].

use std::sync::Arc;

use tokio::sync::RwLock;

use super::{Record, RecordId, ViewController, ViewInput, ViewSnapshot};
use crate::errors::AppError;
use crate::source::RecordSource;

/// One view instance: its controller plus the source it loads from.
///
/// The lock is never held across the source's await point, so inputs and
/// snapshots stay responsive while a load is in flight.
pub struct ViewHandle<R: Record> {
    controller: Arc<RwLock<ViewController<R>>>,
    source: Arc<dyn RecordSource<R>>,
}

impl<R: Record> Clone for ViewHandle<R> {
    fn clone(&self) -> Self {
        Self {
            controller: Arc::clone(&self.controller),
            source: Arc::clone(&self.source),
        }
    }
}

impl<R: Record> ViewHandle<R> {
    pub fn new(source: Arc<dyn RecordSource<R>>, page_size: usize) -> Self {
        Self {
            controller: Arc::new(RwLock::new(ViewController::new(page_size))),
            source,
        }
    }

    pub async fn snapshot(&self) -> ViewSnapshot<R> {
        self.controller.read().await.snapshot()
    }

    pub async fn revision(&self) -> u64 {
        self.controller.read().await.revision()
    }

    /// Look up a record together with the revision it was read at.
    pub async fn get(&self, id: RecordId) -> (Option<R>, u64) {
        let controller = self.controller.read().await;
        (controller.get(id).cloned(), controller.revision())
    }

    /// Apply a batch of inputs and return the resulting snapshot.
    ///
    /// A rejected batch leaves the view untouched.
    pub async fn apply_all(&self, inputs: Vec<ViewInput<R>>) -> Result<ViewSnapshot<R>, AppError> {
        let mut controller = self.controller.write().await;
        controller.apply_all(inputs)?;
        Ok(controller.snapshot())
    }

    pub async fn apply(&self, input: ViewInput<R>) -> Result<ViewSnapshot<R>, AppError> {
        self.apply_all(vec![input]).await
    }

    /// Load (or reload) the collection and wait for it to land.
    #[cfg(test)]
    pub async fn reload(&self) {
        let ticket = self.controller.write().await.begin_load();
        let result = self.source.load().await;
        self.controller.write().await.finish_load(ticket, result);
    }

    /// Start a reload in the background and return the `Loading` snapshot.
    pub async fn spawn_reload(&self) -> ViewSnapshot<R> {
        let ticket = {
            let mut controller = self.controller.write().await;
            controller.begin_load()
        };

        let controller = Arc::clone(&self.controller);
        let source = Arc::clone(&self.source);
        tokio::spawn(async move {
            let result = source.load().await;
            controller.write().await.finish_load(ticket, result);
        });

        self.snapshot().await
    }
}
