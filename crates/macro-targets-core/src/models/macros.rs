// ABOUTME: Macro target result models returned by the calculation engine
// ABOUTME: MacroResult (kcal + grams), percentage split, and full pipeline breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN};
use serde::{Deserialize, Serialize};

/// Daily calorie and macronutrient targets
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MacroResult {
    /// Energy target (kcal/day)
    pub calories: i64,
    /// Protein target (g/day)
    pub protein: i64,
    /// Carbohydrate target (g/day)
    pub carbs: i64,
    /// Fat target (g/day)
    pub fat: i64,
}

impl MacroResult {
    /// All-zero result returned for unusable input
    pub const ZERO: Self = Self {
        calories: 0,
        protein: 0,
        carbs: 0,
        fat: 0,
    };

    /// Whether every field is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.calories == 0 && self.protein == 0 && self.carbs == 0 && self.fat == 0
    }

    /// Energy implied by the gram targets using Atwater factors
    #[must_use]
    pub fn atwater_kcal(&self) -> f64 {
        (self.fat as f64).mul_add(
            KCAL_PER_GRAM_FAT,
            (self.protein as f64).mul_add(KCAL_PER_GRAM_PROTEIN, self.carbs as f64 * KCAL_PER_GRAM_CARBS),
        )
    }

    /// Share of Atwater energy contributed by each macronutrient
    #[must_use]
    pub fn percentages(&self) -> MacroPercentages {
        let total = self.atwater_kcal();
        if total <= 0.0 {
            return MacroPercentages::default();
        }
        MacroPercentages {
            protein_percent: self.protein as f64 * KCAL_PER_GRAM_PROTEIN / total * 100.0,
            carbs_percent: self.carbs as f64 * KCAL_PER_GRAM_CARBS / total * 100.0,
            fat_percent: self.fat as f64 * KCAL_PER_GRAM_FAT / total * 100.0,
        }
    }
}

/// Macronutrient percentage breakdown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct MacroPercentages {
    /// Protein as percentage of total calories
    pub protein_percent: f64,
    /// Carbohydrates as percentage of total calories
    pub carbs_percent: f64,
    /// Fat as percentage of total calories
    pub fat_percent: f64,
}

/// Every intermediate value of the BMR → TDEE → macros pipeline
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct FullMacroResult {
    /// Basal Metabolic Rate (kcal/day)
    pub bmr: f64,
    /// Total Daily Energy Expenditure before goal adjustment (kcal/day)
    pub tdee: f64,
    /// TDEE after goal adjustment (kcal/day)
    pub adjusted_tdee: f64,
    /// Rounded targets
    pub macros: MacroResult,
    /// Activity multiplier applied to BMR
    pub activity_multiplier: f64,
    /// Goal multiplier applied to TDEE
    pub goal_adjustment: f64,
}
