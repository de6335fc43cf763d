// ABOUTME: Onboarding service computing and persisting a user's macro targets
// ABOUTME: Lenient preview for the standalone calculator, strict onboarding with storage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::NutritionConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::macro_calculator::{calculate_for_profile, calculate_full_macros};
use crate::models::{BiometricProfile, FullMacroResult, RawProfile};
use crate::store::{MacroTargetRecord, MacroTargetStore};
use tracing::{info, warn};
use uuid::Uuid;

/// Macro target operations over a [`MacroTargetStore`]
pub struct MacroTargetService<S> {
    store: S,
    config: NutritionConfig,
}

impl<S: MacroTargetStore> MacroTargetService<S> {
    /// Create a service using the process-wide configuration
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_config(store, NutritionConfig::global().clone())
    }

    /// Create a service with an explicit configuration
    #[must_use]
    pub const fn with_config(store: S, config: NutritionConfig) -> Self {
        Self { store, config }
    }

    /// Configuration in effect
    #[must_use]
    pub const fn config(&self) -> &NutritionConfig {
        &self.config
    }

    /// Underlying store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Compute targets without validation or persistence
    ///
    /// Used by the standalone calculator, which shows zeros for incomplete
    /// input instead of an error.
    #[must_use]
    pub fn preview(&self, profile: &RawProfile) -> FullMacroResult {
        calculate_full_macros(profile, &self.config)
    }

    /// Validate a submitted profile, compute its targets and persist them
    ///
    /// # Errors
    ///
    /// Returns a validation error naming the offending field, or a storage
    /// error if the record cannot be written. Nothing is stored on failure.
    pub async fn onboard(&self, user_id: Uuid, profile: &RawProfile) -> AppResult<FullMacroResult> {
        let validated = BiometricProfile::try_from(profile).map_err(|e| {
            warn!(%user_id, field = e.field(), "Rejected onboarding profile: {e}");
            AppError::from(e).with_user_id(user_id)
        })?;

        let result = calculate_for_profile(&validated, &self.config);
        let record = MacroTargetRecord::new(
            user_id,
            result.macros,
            validated.goal,
            validated.activity_level,
        );
        self.store
            .save_targets(record)
            .await
            .map_err(|e| e.with_user_id(user_id))?;

        info!(
            %user_id,
            calories = result.macros.calories,
            protein = result.macros.protein,
            carbs = result.macros.carbs,
            fat = result.macros.fat,
            goal = %validated.goal,
            "Saved macro targets"
        );
        Ok(result)
    }

    /// Fetch a user's stored targets
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when the user has not been onboarded, or a
    /// storage error if the lookup fails
    pub async fn current_targets(&self, user_id: Uuid) -> AppResult<MacroTargetRecord> {
        self.store
            .get_targets(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Macro targets").with_user_id(user_id))
    }

    /// Remove a user's stored targets, returning whether any existed
    ///
    /// # Errors
    ///
    /// Returns a storage error if the delete fails
    pub async fn reset(&self, user_id: Uuid) -> AppResult<bool> {
        self.store.delete_targets(user_id).await
    }
}
