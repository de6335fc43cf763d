// ABOUTME: Macro target calculation using the Mifflin-St Jeor equation
// ABOUTME: BMR, activity-scaled TDEE, goal adjustment, and protein/fat/carb gram split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Macro Target Calculator
//!
//! Converts a biometric profile into daily calorie and macronutrient targets:
//!
//! 1. BMR via Mifflin-St Jeor
//! 2. TDEE = BMR x activity multiplier
//! 3. Adjusted TDEE = TDEE x goal multiplier
//! 4. Protein from body weight, fat as a share of calories, carbs from the remainder
//!
//! Two entry points exist. The lenient functions accept raw form values and
//! degrade unusable input to zero (or to a default category). The strict
//! [`try_calculate_full_macros`] validates the form first and reports the
//! offending field instead.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>
//!
//! - Phillips, S.M., & Van Loon, L.J. (2011). Dietary protein for athletes.
//!   *Journal of Sports Sciences*, 29(sup1), S29-S38.
//!   <https://doi.org/10.1080/02640414.2011.619204>

use crate::config::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroSplitConfig, NutritionConfig,
};
use crate::intelligence::measurement::Measurement;
use macro_targets_core::constants::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use macro_targets_core::errors::AppResult;
use macro_targets_core::models::{
    ActivityLevel, BiometricProfile, FullMacroResult, Gender, Goal, MacroResult, RawProfile,
};
use tracing::{debug, warn};

/// Round to the nearest integer, with exact halves going toward positive infinity
///
/// `f64::round` sends -2.5 to -3; targets round -2.5 to -2 so that
/// unclamped negative carbohydrate values match the positive case.
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor as i64 + 1
    } else {
        floor as i64
    }
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// Returns `0.0` when any input is not a finite number. No lower bound is
/// applied: a zero weight simply contributes zero.
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_bmr(
    gender: Gender,
    weight: impl Measurement,
    height: impl Measurement,
    age: impl Measurement,
    config: &BmrConfig,
) -> f64 {
    let (Some(weight_kg), Some(height_cm), Some(age_years)) = (
        weight.finite_value(),
        height.finite_value(),
        age.finite_value(),
    ) else {
        debug!("BMR inputs are not all finite numbers, returning 0");
        return 0.0;
    };

    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * age_years;

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Activity multiplier applied to BMR
///
/// Activity factors based on `McArdle` et al. (2010):
/// - Sedentary: 1.2
/// - Light: 1.375
/// - Moderate: 1.55
/// - Active: 1.725
/// - Extreme: 1.9
#[must_use]
pub const fn get_activity_multiplier(level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    config.factor_for(level)
}

/// Activity multiplier for a raw key; unknown keys use the sedentary factor
#[must_use]
pub fn activity_multiplier_for_key(key: &str, config: &ActivityFactorsConfig) -> f64 {
    get_activity_multiplier(ActivityLevel::from_str_lossy(key), config)
}

/// Caloric adjustment applied to TDEE: 0.8 (lose), 1.0 (maintain), 1.15 (gain)
#[must_use]
pub const fn get_goal_adjustment(goal: Goal, config: &GoalAdjustmentConfig) -> f64 {
    config.adjustment_for(goal)
}

/// Goal adjustment for a raw key; unknown keys use the maintenance factor
#[must_use]
pub fn goal_adjustment_for_key(key: &str, config: &GoalAdjustmentConfig) -> f64 {
    get_goal_adjustment(Goal::from_str_lossy(key), config)
}

/// Split a calorie target into protein, fat and carbohydrate grams
///
/// - Protein (g) = weight x g/kg for the goal (see [`MacroSplitConfig::protein_g_per_kg`])
/// - Fat (g) = calories x fat fraction / 9
/// - Carbs (g) = (calories - protein kcal - fat kcal) / 4
///
/// Fat calories feed the carbohydrate remainder before rounding, so rounded
/// grams reproduce the calorie target to within a few kcal. Carbohydrates
/// that fall below zero are floored at zero unless
/// `clamp_negative_carbs` is disabled.
///
/// Returns [`MacroResult::ZERO`] when the calorie target or weight is not a
/// finite number.
#[must_use]
pub fn calculate_macros(
    adjusted_tdee: impl Measurement,
    weight: impl Measurement,
    goal: Goal,
    config: &MacroSplitConfig,
) -> MacroResult {
    let (Some(calories), Some(weight_kg)) = (adjusted_tdee.finite_value(), weight.finite_value())
    else {
        debug!("Macro inputs are not finite numbers, returning zeroed targets");
        return MacroResult::ZERO;
    };

    let protein = round_half_up(weight_kg * config.protein_g_per_kg(goal));
    let protein_kcal = protein as f64 * KCAL_PER_GRAM_PROTEIN;

    let fat_kcal = calories * config.fat_fraction(goal);
    let fat = round_half_up(fat_kcal / KCAL_PER_GRAM_FAT);

    let remaining_kcal = calories - protein_kcal - fat_kcal;
    let mut carbs = round_half_up(remaining_kcal / KCAL_PER_GRAM_CARBS);
    if carbs < 0 {
        if config.clamp_negative_carbs {
            debug!(carbs, "Protein and fat exceed the calorie budget, flooring carbs at 0");
            carbs = 0;
        } else {
            warn!(carbs, "Protein and fat exceed the calorie budget");
        }
    }

    MacroResult {
        calories: round_half_up(calories),
        protein,
        carbs,
        fat,
    }
}

/// Run the full pipeline on raw form values
///
/// Unknown categories fall back to their defaults (female, sedentary,
/// maintain) and unparseable numbers degrade to zero, so this never fails.
#[must_use]
pub fn calculate_full_macros(profile: &RawProfile, config: &NutritionConfig) -> FullMacroResult {
    let gender = Gender::from_str_lossy(&profile.gender);
    let activity_level = ActivityLevel::from_str_lossy(&profile.activity_level);
    let goal = Goal::from_str_lossy(&profile.goal);

    let bmr = calculate_bmr(
        gender,
        profile.weight.as_str(),
        profile.height.as_str(),
        profile.age.as_str(),
        &config.bmr,
    );

    let result = run_pipeline(bmr, profile.weight.as_str(), activity_level, goal, config);
    if result.macros.is_zero() {
        warn!(
            weight = %profile.weight,
            height = %profile.height,
            age = %profile.age,
            "Profile produced zeroed macro targets"
        );
    }
    result
}

/// Run the full pipeline on a validated profile
#[must_use]
pub fn calculate_for_profile(
    profile: &BiometricProfile,
    config: &NutritionConfig,
) -> FullMacroResult {
    let bmr = calculate_bmr(
        profile.gender,
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        &config.bmr,
    );
    run_pipeline(
        bmr,
        profile.weight_kg,
        profile.activity_level,
        profile.goal,
        config,
    )
}

/// Validate raw form values, then run the full pipeline
///
/// # Errors
///
/// Returns a validation error naming the first missing, unparseable,
/// out-of-range, or unrecognised field.
pub fn try_calculate_full_macros(
    profile: &RawProfile,
    config: &NutritionConfig,
) -> AppResult<FullMacroResult> {
    let validated = BiometricProfile::try_from(profile)?;
    Ok(calculate_for_profile(&validated, config))
}

fn run_pipeline(
    bmr: f64,
    weight: impl Measurement,
    activity_level: ActivityLevel,
    goal: Goal,
    config: &NutritionConfig,
) -> FullMacroResult {
    let activity_multiplier = get_activity_multiplier(activity_level, &config.activity_factors);
    let goal_adjustment = get_goal_adjustment(goal, &config.goal_adjustments);

    let tdee = bmr * activity_multiplier;
    let adjusted_tdee = tdee * goal_adjustment;
    let macros = calculate_macros(adjusted_tdee, weight, goal, &config.macro_split);

    debug!(
        bmr,
        tdee,
        adjusted_tdee,
        %activity_level,
        %goal,
        calories = macros.calories,
        "Calculated macro targets"
    );

    FullMacroResult {
        bmr,
        tdee,
        adjusted_tdee,
        macros,
        activity_multiplier,
        goal_adjustment,
    }
}
