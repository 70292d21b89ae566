use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::Dataset;

/// Holds the single current dataset.
///
/// Clones share the same slot. `replace` swaps the whole dataset; the last
/// writer wins and readers keep whatever snapshot they already took.
#[derive(Clone, Default)]
pub struct DatasetStore {
    inner: Arc<RwLock<Arc<Dataset>>>,
}

impl DatasetStore {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(dataset))),
        }
    }

    pub async fn snapshot(&self) -> Arc<Dataset> {
        let guard = self.inner.read().await;
        Arc::clone(&guard)
    }

    pub async fn replace(&self, dataset: Dataset) -> Arc<Dataset> {
        let dataset = Arc::new(dataset);
        let mut guard = self.inner.write().await;
        *guard = Arc::clone(&dataset);
        dataset
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }
}
