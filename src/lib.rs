// ABOUTME: Main library entry point for the macro target engine
// ABOUTME: Converts biometric profiles into daily calorie and macronutrient targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macro Targets
//!
//! Computes daily calorie, protein, carbohydrate and fat targets from a
//! person's sex, age, weight, height, activity level and goal.
//!
//! ## Architecture
//!
//! - **Intelligence**: Mifflin-St Jeor BMR, activity and goal multipliers, macro split
//! - **Config**: formula coefficients and split policy, overridable from the environment
//! - **Store**: persistence seam for a user's targets
//! - **Services**: onboarding flow combining validation, calculation and storage
//!
//! ## Example Usage
//!
//! ```rust
//! use macro_targets::config::NutritionConfig;
//! use macro_targets::intelligence::calculate_full_macros;
//! use macro_targets::models::RawProfile;
//!
//! let profile = RawProfile {
//!     gender: "male".into(),
//!     age: "30".into(),
//!     weight: "70".into(),
//!     height: "175".into(),
//!     activity_level: "moderate".into(),
//!     goal: "maintain".into(),
//! };
//!
//! let result = calculate_full_macros(&profile, &NutritionConfig::default());
//! assert_eq!(result.macros.calories, 2556);
//! assert_eq!(result.macros.protein, 154);
//! ```

/// Formula coefficients, split policy and environment overrides
pub mod config;

/// Unified error handling (re-exported from `macro-targets-core`)
pub mod errors;

/// BMR, TDEE and macronutrient calculation
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Profile and result models (re-exported from `macro-targets-core`)
pub mod models;

/// Domain services built on the calculator
pub mod services;

/// Persistence seam for computed targets
pub mod store;
