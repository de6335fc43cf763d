// ABOUTME: Output formatting helpers for macro-targets
// ABOUTME: Provides consistent display functions for targets and factor tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use macro_targets::config::NutritionConfig;
use macro_targets::models::{ActivityLevel, FullMacroResult, Gender, Goal};

/// Display the full pipeline breakdown
pub fn display_full_result(result: &FullMacroResult) {
    let macros = &result.macros;
    let pct = macros.percentages();

    println!("\nDaily Targets");
    println!("{}", "=".repeat(40));
    println!("   BMR:            {:>8.1} kcal", result.bmr);
    println!(
        "   TDEE:           {:>8.1} kcal  (x{})",
        result.tdee, result.activity_multiplier
    );
    println!(
        "   Adjusted TDEE:  {:>8.1} kcal  (x{})",
        result.adjusted_tdee, result.goal_adjustment
    );
    println!("{}", "-".repeat(40));
    println!("   Calories:       {:>8} kcal", macros.calories);
    println!(
        "   Protein:        {:>8} g     ({:.0}%)",
        macros.protein, pct.protein_percent
    );
    println!(
        "   Carbs:          {:>8} g     ({:.0}%)",
        macros.carbs, pct.carbs_percent
    );
    println!(
        "   Fat:            {:>8} g     ({:.0}%)",
        macros.fat, pct.fat_percent
    );

    if macros.is_zero() {
        println!("\nIncomplete profile: enter weight, height and age to see targets.");
    }
}

/// Display a BMR value
pub fn display_bmr(gender: Gender, bmr: f64) {
    println!("BMR ({gender}): {bmr:.2} kcal/day");
}

/// Display the active multiplier tables and macro split
pub fn display_factors(config: &NutritionConfig) {
    println!("\nActivity multipliers");
    println!("{}", "=".repeat(40));
    for level in ActivityLevel::ALL {
        println!(
            "   {:<12} x{}",
            level.as_str(),
            config.activity_factors.factor_for(level)
        );
    }

    println!("\nGoals ({} protein)", config.macro_split.protein_policy);
    println!("{}", "=".repeat(40));
    println!("   {:<12} {:>8} {:>10} {:>8}", "goal", "calories", "protein", "fat");
    for goal in Goal::ALL {
        println!(
            "   {:<12} {:>7}x {:>6} g/kg {:>7.0}%",
            goal.as_str(),
            config.goal_adjustments.adjustment_for(goal),
            config.macro_split.protein_g_per_kg(goal),
            config.macro_split.fat_fraction(goal) * 100.0
        );
    }

    println!(
        "\nNegative carbohydrates {}",
        if config.macro_split.clamp_negative_carbs {
            "are floored at 0"
        } else {
            "are reported as computed"
        }
    );
}
