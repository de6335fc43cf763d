// ABOUTME: Tests for the onboarding service over the in-memory store
// ABOUTME: Covers preview, strict onboarding with persistence, lookups and store failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use async_trait::async_trait;
use common::{create_test_service, raw_profile, reference_profile};
use macro_targets::config::NutritionConfig;
use macro_targets::errors::{AppError, AppResult, ErrorCode, ErrorResponse};
use macro_targets::models::{ActivityLevel, Goal, MacroResult};
use macro_targets::services::MacroTargetService;
use macro_targets::store::{MacroTargetRecord, MacroTargetStore};
use uuid::Uuid;

/// Store whose writes always fail
struct FailingStore;

#[async_trait]
impl MacroTargetStore for FailingStore {
    async fn save_targets(&self, _record: MacroTargetRecord) -> AppResult<()> {
        Err(AppError::storage("disk full"))
    }

    async fn get_targets(&self, _user_id: Uuid) -> AppResult<Option<MacroTargetRecord>> {
        Ok(None)
    }

    async fn delete_targets(&self, _user_id: Uuid) -> AppResult<bool> {
        Ok(false)
    }
}

#[tokio::test]
async fn test_preview_is_lenient_and_not_persisted() {
    let service = create_test_service();

    let incomplete = raw_profile("male", "", "70", "175", "moderate", "maintain");
    let preview = service.preview(&incomplete);
    assert!(preview.bmr.abs() < f64::EPSILON);

    let full = service.preview(&reference_profile());
    assert_eq!(full.macros.calories, 2556);
    assert!(service.store().is_empty().await);
}

#[tokio::test]
async fn test_onboard_persists_targets() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let result = service.onboard(user_id, &reference_profile()).await.unwrap();
    assert_eq!(
        result.macros,
        MacroResult {
            calories: 2556,
            protein: 154,
            carbs: 325,
            fat: 71,
        }
    );

    let stored = service.current_targets(user_id).await.unwrap();
    assert_eq!(stored.user_id, user_id);
    assert_eq!(stored.macros, result.macros);
    assert_eq!(stored.goal, Goal::Maintain);
    assert_eq!(stored.activity_level, ActivityLevel::Moderate);
}

#[tokio::test]
async fn test_onboard_rejects_invalid_profile_without_saving() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let err = service
        .onboard(user_id, &raw_profile("male", "30", "70", "175", "moderate", "shred"))
        .await
        .unwrap_err();

    assert_eq!(err.code, ErrorCode::UnknownCategory);
    assert_eq!(err.context.field.as_deref(), Some("goal"));
    assert_eq!(err.context.user_id, Some(user_id));
    assert!(service.store().is_empty().await);

    let response = serde_json::to_value(ErrorResponse::from(err)).unwrap();
    assert_eq!(response["error"]["code"], "UNKNOWN_CATEGORY");
    assert_eq!(response["error"]["field"], "goal");
}

#[tokio::test]
async fn test_reonboarding_replaces_targets() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    service.onboard(user_id, &reference_profile()).await.unwrap();
    let cutting = raw_profile("male", "30", "70", "175", "moderate", "lose");
    let result = service.onboard(user_id, &cutting).await.unwrap();

    let stored = service.current_targets(user_id).await.unwrap();
    assert_eq!(stored.goal, Goal::Lose);
    assert_eq!(stored.macros, result.macros);
    assert_eq!(service.store().len().await, 1);
}

#[tokio::test]
async fn test_current_targets_not_found() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    let err = service.current_targets(user_id).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
    assert_eq!(err.context.user_id, Some(user_id));
}

#[tokio::test]
async fn test_reset_removes_targets() {
    let service = create_test_service();
    let user_id = Uuid::new_v4();

    service.onboard(user_id, &reference_profile()).await.unwrap();
    assert!(service.reset(user_id).await.unwrap());
    assert!(!service.reset(user_id).await.unwrap());
    assert!(service.current_targets(user_id).await.is_err());
}

#[tokio::test]
async fn test_storage_failure_is_propagated() {
    let service = MacroTargetService::with_config(FailingStore, NutritionConfig::default());
    let user_id = Uuid::new_v4();

    let err = service.onboard(user_id, &reference_profile()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert_eq!(err.context.user_id, Some(user_id));
}
