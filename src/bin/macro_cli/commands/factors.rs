// ABOUTME: Factor table command for macro-targets
// ABOUTME: Prints the configuration in effect after environment overrides
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macro_targets::config::NutritionConfig;
use macro_targets::errors::AppResult;

use crate::helpers::display::display_factors;
use crate::OutputFormat;

/// Print the active configuration
pub fn run(config: &NutritionConfig, format: OutputFormat) -> AppResult<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(config)?),
        OutputFormat::Text => display_factors(config),
    }
    Ok(())
}
