use std::sync::Arc;

use crate::application::ports::ImageStore;

/// Explicitly constructed dependencies for the image use cases.
///
/// Built once at startup (or per test) and handed to each use case; there is
/// no process-wide store handle.
#[derive(Clone)]
pub struct ImageContext {
    pub store: Arc<dyn ImageStore>,
}

impl ImageContext {
    pub fn new(store: Arc<dyn ImageStore>) -> Self {
        Self { store }
    }
}
