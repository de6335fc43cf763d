// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, reference profiles and a service over an in-memory store
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `macro_targets`

use macro_targets::config::NutritionConfig;
use macro_targets::models::RawProfile;
use macro_targets::services::MacroTargetService;
use macro_targets::store::InMemoryTargetStore;
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; quiet by default
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Build a form-style profile from plain values
pub fn raw_profile(
    gender: &str,
    age: &str,
    weight: &str,
    height: &str,
    activity_level: &str,
    goal: &str,
) -> RawProfile {
    RawProfile {
        gender: gender.to_owned(),
        age: age.to_owned(),
        weight: weight.to_owned(),
        height: height.to_owned(),
        activity_level: activity_level.to_owned(),
        goal: goal.to_owned(),
    }
}

/// Male, 30 years, 70 kg, 175 cm, moderate activity, maintaining weight
pub fn reference_profile() -> RawProfile {
    raw_profile("male", "30", "70", "175", "moderate", "maintain")
}

/// Service with default configuration over a fresh in-memory store
pub fn create_test_service() -> MacroTargetService<InMemoryTargetStore> {
    init_test_logging();
    MacroTargetService::with_config(InMemoryTargetStore::new(), NutritionConfig::default())
}
