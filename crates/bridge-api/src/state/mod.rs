//! Application state
//!
//! Holds the store handles and configuration shared by every handler.

use std::sync::Arc;

use bridge_common::AppConfig;
use bridge_core::{ChatwootStore, LibreChatStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    chatwoot: Arc<dyn ChatwootStore>,
    librechat: Arc<dyn LibreChatStore>,
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        config: AppConfig,
        chatwoot: Arc<dyn ChatwootStore>,
        librechat: Arc<dyn LibreChatStore>,
    ) -> Self {
        Self {
            chatwoot,
            librechat,
            config: Arc::new(config),
        }
    }

    /// Chatwoot relational store
    pub fn chatwoot(&self) -> &dyn ChatwootStore {
        self.chatwoot.as_ref()
    }

    /// LibreChat document store
    pub fn librechat(&self) -> &dyn LibreChatStore {
        self.librechat.as_ref()
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("chatwoot", &"dyn ChatwootStore")
            .field("librechat", &"dyn LibreChatStore")
            .field("config", &self.config)
            .finish()
    }
}
