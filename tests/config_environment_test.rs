// ABOUTME: Tests for environment-driven configuration loading
// ABOUTME: Validates MACRO_TARGETS_* overrides, validation failures and logging settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::reference_profile;
use macro_targets::config::{ConfigError, NutritionConfig, ProteinPolicy};
use macro_targets::errors::{AppError, ErrorCode};
use macro_targets::intelligence::calculate_full_macros;
use macro_targets::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const OVERRIDE_VARS: &[&str] = &[
    "MACRO_TARGETS_PROTEIN_POLICY",
    "MACRO_TARGETS_CLAMP_NEGATIVE_CARBS",
    "MACRO_TARGETS_ACTIVITY_MODERATE",
    "MACRO_TARGETS_GOAL_LOSE",
    "MACRO_TARGETS_FAT_MAINTAIN_FRACTION",
    "MACRO_TARGETS_PROTEIN_MAINTAIN_G_PER_KG",
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_load_without_overrides_matches_defaults() {
    clear_overrides();
    let config = NutritionConfig::load().unwrap();
    assert_eq!(config, NutritionConfig::default());
}

#[test]
#[serial]
fn test_policy_overrides_from_environment() {
    clear_overrides();
    env::set_var("MACRO_TARGETS_PROTEIN_POLICY", "flat");
    env::set_var("MACRO_TARGETS_CLAMP_NEGATIVE_CARBS", "false");

    let config = NutritionConfig::load().unwrap();
    clear_overrides();

    assert_eq!(config.macro_split.protein_policy, ProteinPolicy::Flat);
    assert!(!config.macro_split.clamp_negative_carbs);
}

#[test]
#[serial]
fn test_numeric_overrides_change_results() {
    clear_overrides();
    env::set_var("MACRO_TARGETS_FAT_MAINTAIN_FRACTION", "0.30");
    env::set_var("MACRO_TARGETS_PROTEIN_MAINTAIN_G_PER_KG", " 2.0 ");

    let config = NutritionConfig::load().unwrap();
    clear_overrides();

    let result = calculate_full_macros(&reference_profile(), &config);
    // 70 kg x 2.0 = 140 g; 2555.5625 x 0.30 / 9 = 85.19 g
    assert_eq!(result.macros.protein, 140);
    assert_eq!(result.macros.fat, 85);
    assert_eq!(result.macros.calories, 2556);
}

#[test]
#[serial]
fn test_invalid_override_is_rejected() {
    clear_overrides();
    env::set_var("MACRO_TARGETS_PROTEIN_POLICY", "carnivore");
    let err = NutritionConfig::load().unwrap_err();
    clear_overrides();
    assert!(matches!(err, ConfigError::Parse(_)));

    env::set_var("MACRO_TARGETS_GOAL_LOSE", "1.2");
    let err = NutritionConfig::load().unwrap_err();
    clear_overrides();
    assert!(matches!(err, ConfigError::InvalidRange(_)));
}

#[test]
#[serial]
fn test_config_error_maps_to_config_invalid() {
    clear_overrides();
    env::set_var("MACRO_TARGETS_ACTIVITY_MODERATE", "3.0");
    let err = NutritionConfig::load().unwrap_err();
    clear_overrides();

    let app_error = AppError::from(err);
    assert_eq!(app_error.code, ErrorCode::ConfigInvalid);
    assert!(!app_error.code.is_client_error());
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "macro-targets-test");

    let config = LoggingConfig::from_env();

    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");
    env::remove_var("SERVICE_NAME");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "macro-targets-test");
    assert!(config.include_location);
    assert!(config.include_thread);
}
