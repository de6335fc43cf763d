// ABOUTME: In-memory MacroTargetStore keyed by user id
// ABOUTME: Shared HashMap behind a tokio RwLock, cloneable across tasks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{MacroTargetRecord, MacroTargetStore};
use macro_targets_core::errors::AppResult;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// In-memory target store
///
/// Clones share the same map, so a store handed to several services sees one
/// set of records.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTargetStore {
    records: Arc<RwLock<HashMap<Uuid, MacroTargetRecord>>>,
}

impl InMemoryTargetStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with stored targets
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether no targets are stored
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl MacroTargetStore for InMemoryTargetStore {
    async fn save_targets(&self, record: MacroTargetRecord) -> AppResult<()> {
        let user_id = record.user_id;
        let replaced = self
            .records
            .write()
            .await
            .insert(user_id, record)
            .is_some();
        debug!(%user_id, replaced, "Stored macro targets");
        Ok(())
    }

    async fn get_targets(&self, user_id: Uuid) -> AppResult<Option<MacroTargetRecord>> {
        Ok(self.records.read().await.get(&user_id).cloned())
    }

    async fn delete_targets(&self, user_id: Uuid) -> AppResult<bool> {
        let removed = self.records.write().await.remove(&user_id).is_some();
        debug!(%user_id, removed, "Deleted macro targets");
        Ok(removed)
    }
}
