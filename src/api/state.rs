//! Application state for the honours evaluation API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::handbook::HandbookLoader;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// such as the loaded handbook configuration.
#[derive(Clone)]
pub struct AppState {
    /// The loaded handbook configuration.
    loader: Arc<HandbookLoader>,
}

impl AppState {
    /// Creates a new application state with the given handbook loader.
    pub fn new(loader: HandbookLoader) -> Self {
        Self {
            loader: Arc::new(loader),
        }
    }

    /// Returns a reference to the handbook loader.
    pub fn loader(&self) -> &HandbookLoader {
        &self.loader
    }
}
