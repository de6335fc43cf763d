// ABOUTME: Intelligence module for nutrition target calculation
// ABOUTME: Exposes the macro calculator and the numeric input abstraction it consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Evidence-based calculations that turn a biometric profile into daily
//! calorie and macronutrient targets.

/// BMR, TDEE and macronutrient split calculation
pub mod macro_calculator;
/// Numeric input abstraction for form strings and numbers
pub mod measurement;

pub use macro_calculator::{
    activity_multiplier_for_key, calculate_bmr, calculate_for_profile, calculate_full_macros,
    calculate_macros, get_activity_multiplier, get_goal_adjustment, goal_adjustment_for_key,
    round_half_up, try_calculate_full_macros,
};
pub use measurement::Measurement;
