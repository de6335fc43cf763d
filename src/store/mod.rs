// ABOUTME: Persistence seam for a user's computed macro targets
// ABOUTME: Defines MacroTargetRecord and the async MacroTargetStore trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Macro Target Storage
//!
//! The calculation engine never persists anything. Callers that need to keep
//! a user's targets (the onboarding flow) go through [`MacroTargetStore`],
//! which a database layer implements. [`InMemoryTargetStore`] is the
//! reference implementation.
//!
//! ```rust,no_run
//! use macro_targets::store::{InMemoryTargetStore, MacroTargetRecord, MacroTargetStore};
//! use macro_targets::models::{ActivityLevel, Goal, MacroResult};
//! use uuid::Uuid;
//!
//! # async fn example() -> Result<(), macro_targets::errors::AppError> {
//! let store = InMemoryTargetStore::new();
//! let user_id = Uuid::new_v4();
//! let record = MacroTargetRecord::new(user_id, MacroResult::ZERO, Goal::Maintain, ActivityLevel::Sedentary);
//! store.save_targets(record).await?;
//! assert!(store.get_targets(user_id).await?.is_some());
//! # Ok(())
//! # }
//! ```

/// In-memory store backed by a `HashMap`
pub mod memory;

pub use memory::InMemoryTargetStore;

use chrono::{DateTime, Utc};
use macro_targets_core::errors::AppResult;
use macro_targets_core::models::{ActivityLevel, Goal, MacroResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user's persisted daily targets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroTargetRecord {
    /// Owner of the targets
    pub user_id: Uuid,
    /// Rounded calorie and gram targets
    pub macros: MacroResult,
    /// Goal the targets were computed for
    pub goal: Goal,
    /// Activity level the targets were computed for
    pub activity_level: ActivityLevel,
    /// When the targets were last written
    pub updated_at: DateTime<Utc>,
}

impl MacroTargetRecord {
    /// Build a record stamped with the current time
    #[must_use]
    pub fn new(
        user_id: Uuid,
        macros: MacroResult,
        goal: Goal,
        activity_level: ActivityLevel,
    ) -> Self {
        Self {
            user_id,
            macros,
            goal,
            activity_level,
            updated_at: Utc::now(),
        }
    }
}

/// Storage for per-user macro targets
///
/// One record per user; saving again replaces the previous record.
#[async_trait::async_trait]
pub trait MacroTargetStore: Send + Sync {
    /// Insert or replace the record for `record.user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn save_targets(&self, record: MacroTargetRecord) -> AppResult<()>;

    /// Fetch a user's record, `None` when the user has no targets yet
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn get_targets(&self, user_id: Uuid) -> AppResult<Option<MacroTargetRecord>>;

    /// Remove a user's record, returning whether one existed
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store fails
    async fn delete_targets(&self, user_id: Uuid) -> AppResult<bool>;
}
