// ABOUTME: Calculation commands for macro-targets
// ABOUTME: Runs the lenient or strict pipeline and the standalone BMR formula
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macro_targets::config::NutritionConfig;
use macro_targets::errors::{AppError, AppResult, ErrorResponse};
use macro_targets::intelligence::{calculate_bmr, calculate_full_macros, try_calculate_full_macros};
use macro_targets::models::{Gender, RawProfile};
use tracing::info;

use crate::helpers::display::{display_bmr, display_full_result};
use crate::OutputFormat;

/// Assemble a form-style profile; absent flags become empty fields
pub fn profile_from_args(
    gender: Option<String>,
    age: Option<String>,
    weight: Option<String>,
    height: Option<String>,
    activity: Option<String>,
    goal: Option<String>,
) -> RawProfile {
    RawProfile {
        gender: gender.unwrap_or_default(),
        age: age.unwrap_or_default(),
        weight: weight.unwrap_or_default(),
        height: height.unwrap_or_default(),
        activity_level: activity.unwrap_or_default(),
        goal: goal.unwrap_or_default(),
    }
}

/// Compute and print the full breakdown
pub fn run(
    profile: &RawProfile,
    config: &NutritionConfig,
    strict: bool,
    format: OutputFormat,
) -> AppResult<()> {
    let result = if strict {
        match try_calculate_full_macros(profile, config) {
            Ok(result) => result,
            Err(e) => {
                if matches!(format, OutputFormat::Json) {
                    let (code, message) = (e.code, e.message.clone());
                    let response = ErrorResponse::from(e);
                    println!("{}", serde_json::to_string_pretty(&response)?);
                    return Err(AppError::new(code, message));
                }
                return Err(e);
            }
        }
    } else {
        calculate_full_macros(profile, config)
    };

    info!(calories = result.macros.calories, strict, "Computed targets");

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => display_full_result(&result),
    }
    Ok(())
}

/// Compute and print BMR
pub fn bmr(gender: Gender, weight: f64, height: f64, age: u32, config: &NutritionConfig) {
    let value = calculate_bmr(gender, weight, height, age, &config.bmr);
    display_bmr(gender, value);
}
