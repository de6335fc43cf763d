// ABOUTME: Nutrition configuration for BMR, activity factors, goal adjustment and macro split
// ABOUTME: Default values reproduce the Mifflin-St Jeor pipeline used by onboarding
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculation Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010). Exercise Physiology
//! - Protein: Phillips & Van Loon (2011) DOI: 10.1080/02640414.2011.619204

use macro_targets_core::models::{ActivityLevel, Goal};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ConfigError;

/// Nutrition calculation configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Goal-based caloric adjustment multipliers
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Protein/fat/carb split policy
    pub macro_split: MacroSplitConfig,
}

/// Mifflin-St Jeor coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Male constant (+5)
    pub msj_male_constant: f64,
    /// Female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary (little/no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Extreme (hard training 2x/day): 1.9
    pub extreme: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor_for(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::Extreme => self.extreme,
        }
    }
}

/// Goal-based caloric adjustment applied to TDEE
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GoalAdjustmentConfig {
    /// Deficit multiplier: 0.80
    pub lose: f64,
    /// Maintenance multiplier: 1.00
    pub maintain: f64,
    /// Surplus multiplier: 1.15
    pub gain: f64,
}

impl GoalAdjustmentConfig {
    /// Multiplier for a goal
    #[must_use]
    pub const fn adjustment_for(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Lose => self.lose,
            Goal::Maintain => self.maintain,
            Goal::Gain => self.gain,
        }
    }
}

/// How protein grams per kilogram are chosen
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProteinPolicy {
    /// Same g/kg for every goal
    Flat,
    /// g/kg depends on the goal (higher in a deficit)
    #[default]
    GoalScaled,
}

impl FromStr for ProteinPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "flat" => Ok(Self::Flat),
            "goal_scaled" | "goal-scaled" => Ok(Self::GoalScaled),
            other => Err(ConfigError::Parse(format!("unknown protein policy '{other}'"))),
        }
    }
}

impl fmt::Display for ProteinPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => f.write_str("flat"),
            Self::GoalScaled => f.write_str("goal_scaled"),
        }
    }
}

/// Macronutrient split configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroSplitConfig {
    /// Protein policy in effect
    pub protein_policy: ProteinPolicy,
    /// Protein g/kg under the flat policy: 2.2
    pub protein_flat_g_per_kg: f64,
    /// Protein g/kg while losing: 2.4
    pub protein_lose_g_per_kg: f64,
    /// Protein g/kg while maintaining: 2.2
    pub protein_maintain_g_per_kg: f64,
    /// Protein g/kg while gaining: 2.0
    pub protein_gain_g_per_kg: f64,
    /// Fat share of calories while losing: 0.30
    pub fat_lose_fraction: f64,
    /// Fat share of calories while maintaining: 0.25
    pub fat_maintain_fraction: f64,
    /// Fat share of calories while gaining: 0.20
    pub fat_gain_fraction: f64,
    /// Floor carbohydrate grams at zero when protein and fat exceed the budget
    pub clamp_negative_carbs: bool,
}

impl MacroSplitConfig {
    /// Protein grams per kilogram of body weight for a goal
    #[must_use]
    pub const fn protein_g_per_kg(&self, goal: Goal) -> f64 {
        match self.protein_policy {
            ProteinPolicy::Flat => self.protein_flat_g_per_kg,
            ProteinPolicy::GoalScaled => match goal {
                Goal::Lose => self.protein_lose_g_per_kg,
                Goal::Maintain => self.protein_maintain_g_per_kg,
                Goal::Gain => self.protein_gain_g_per_kg,
            },
        }
    }

    /// Fraction of calories allocated to fat for a goal
    #[must_use]
    pub const fn fat_fraction(&self, goal: Goal) -> f64 {
        match goal {
            Goal::Lose => self.fat_lose_fraction,
            Goal::Maintain => self.fat_maintain_fraction,
            Goal::Gain => self.fat_gain_fraction,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            extreme: 1.9,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose: 0.8,
            maintain: 1.0,
            gain: 1.15,
        }
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_policy: ProteinPolicy::GoalScaled,
            protein_flat_g_per_kg: 2.2,
            protein_lose_g_per_kg: 2.4,
            protein_maintain_g_per_kg: 2.2,
            protein_gain_g_per_kg: 2.0,
            fat_lose_fraction: 0.30,
            fat_maintain_fraction: 0.25,
            fat_gain_fraction: 0.20,
            clamp_negative_carbs: true,
        }
    }
}
