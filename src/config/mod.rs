// ABOUTME: Configuration loading for the macro target engine
// ABOUTME: Environment overrides, validation, and the process-wide validated singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration Module
//!
//! Configuration is environment-only: defaults come from [`NutritionConfig::default`],
//! `MACRO_TARGETS_*` variables override individual values, and the result is
//! validated before use.

/// Nutrition formula coefficients and macro split policy
pub mod nutrition;

pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, GoalAdjustmentConfig, MacroSplitConfig, NutritionConfig,
    ProteinPolicy,
};

use macro_targets_core::errors::AppError;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::warn;

/// Prefix shared by every configuration environment variable
pub const ENV_PREFIX: &str = "MACRO_TARGETS_";

/// Global configuration singleton
static NUTRITION_CONFIG: OnceLock<NutritionConfig> = OnceLock::new();

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Two related values are not ordered correctly
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// An environment value could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// A value lies outside its accepted bounds
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

impl NutritionConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        NUTRITION_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load nutrition config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| env::var(name).ok())
    }

    /// Load configuration using a custom variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if a looked-up value is invalid or validation fails
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self::default().apply_overrides(&lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a single override into `target` when the variable is set
    fn apply_var<T, F>(lookup: &F, suffix: &str, target: &mut T) -> Result<(), ConfigError>
    where
        T: FromStr,
        F: Fn(&str) -> Option<String>,
    {
        let name = format!("{ENV_PREFIX}{suffix}");
        if let Some(val) = lookup(&name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {name}")))?;
        }
        Ok(())
    }

    fn apply_overrides<F>(mut self, lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let numeric = [
            ("BMR_WEIGHT_COEF", &mut self.bmr.msj_weight_coef),
            ("BMR_HEIGHT_COEF", &mut self.bmr.msj_height_coef),
            ("BMR_AGE_COEF", &mut self.bmr.msj_age_coef),
            ("BMR_MALE_CONSTANT", &mut self.bmr.msj_male_constant),
            ("BMR_FEMALE_CONSTANT", &mut self.bmr.msj_female_constant),
            ("ACTIVITY_SEDENTARY", &mut self.activity_factors.sedentary),
            ("ACTIVITY_LIGHT", &mut self.activity_factors.light),
            ("ACTIVITY_MODERATE", &mut self.activity_factors.moderate),
            ("ACTIVITY_ACTIVE", &mut self.activity_factors.active),
            ("ACTIVITY_EXTREME", &mut self.activity_factors.extreme),
            ("GOAL_LOSE", &mut self.goal_adjustments.lose),
            ("GOAL_MAINTAIN", &mut self.goal_adjustments.maintain),
            ("GOAL_GAIN", &mut self.goal_adjustments.gain),
            (
                "PROTEIN_FLAT_G_PER_KG",
                &mut self.macro_split.protein_flat_g_per_kg,
            ),
            (
                "PROTEIN_LOSE_G_PER_KG",
                &mut self.macro_split.protein_lose_g_per_kg,
            ),
            (
                "PROTEIN_MAINTAIN_G_PER_KG",
                &mut self.macro_split.protein_maintain_g_per_kg,
            ),
            (
                "PROTEIN_GAIN_G_PER_KG",
                &mut self.macro_split.protein_gain_g_per_kg,
            ),
            ("FAT_LOSE_FRACTION", &mut self.macro_split.fat_lose_fraction),
            (
                "FAT_MAINTAIN_FRACTION",
                &mut self.macro_split.fat_maintain_fraction,
            ),
            ("FAT_GAIN_FRACTION", &mut self.macro_split.fat_gain_fraction),
        ];
        for (suffix, target) in numeric {
            Self::apply_var(lookup, suffix, target)?;
        }

        Self::apply_var(
            lookup,
            "PROTEIN_POLICY",
            &mut self.macro_split.protein_policy,
        )?;
        Self::apply_var(
            lookup,
            "CLAMP_NEGATIVE_CARBS",
            &mut self.macro_split.clamp_negative_carbs,
        )?;

        Ok(self)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first rule the configuration violates
    pub fn validate(&self) -> Result<(), ConfigError> {
        let bmr = &self.bmr;
        if [bmr.msj_weight_coef, bmr.msj_height_coef]
            .iter()
            .any(|c| !c.is_finite() || *c <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be finite and positive",
            ));
        }
        if !bmr.msj_age_coef.is_finite()
            || !bmr.msj_male_constant.is_finite()
            || !bmr.msj_female_constant.is_finite()
        {
            return Err(ConfigError::ValueOutOfRange(
                "BMR age coefficient and constants must be finite",
            ));
        }

        let factors = &self.activity_factors;
        let ordered_factors = [
            factors.sedentary,
            factors.light,
            factors.moderate,
            factors.active,
            factors.extreme,
        ];
        if ordered_factors.iter().any(|f| !(1.0..=2.5).contains(f)) {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5",
            ));
        }
        if ordered_factors.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order",
            ));
        }

        let goals = &self.goal_adjustments;
        let ordered_goals = [goals.lose, goals.maintain, goals.gain];
        // Lower bound is exclusive: a zero adjustment would erase the target
        if ordered_goals
            .iter()
            .any(|g| !(f64::MIN_POSITIVE..=2.0).contains(g))
        {
            return Err(ConfigError::ValueOutOfRange(
                "Goal adjustments must be between 0.0 (exclusive) and 2.0",
            ));
        }
        if ordered_goals.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(ConfigError::InvalidRange(
                "Goal adjustments must satisfy lose < maintain < gain",
            ));
        }

        self.validate_macro_split()
    }

    fn validate_macro_split(&self) -> Result<(), ConfigError> {
        let split = &self.macro_split;
        let protein = [
            split.protein_flat_g_per_kg,
            split.protein_lose_g_per_kg,
            split.protein_maintain_g_per_kg,
            split.protein_gain_g_per_kg,
        ];
        if protein.iter().any(|g| !(0.5..=3.5).contains(g)) {
            return Err(ConfigError::ValueOutOfRange(
                "Protein recommendations must be between 0.5 and 3.5 g/kg",
            ));
        }

        let fat = [
            split.fat_lose_fraction,
            split.fat_maintain_fraction,
            split.fat_gain_fraction,
        ];
        if fat.iter().any(|f| !(0.1..=0.5).contains(f)) {
            return Err(ConfigError::ValueOutOfRange(
                "Fat fractions must be between 0.1 and 0.5 of calories",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_validate() {
        assert!(NutritionConfig::default().validate().is_ok());
    }

    #[test]
    fn test_overrides_applied() {
        let config = NutritionConfig::load_with(lookup_from(&[
            ("MACRO_TARGETS_PROTEIN_POLICY", "flat"),
            ("MACRO_TARGETS_CLAMP_NEGATIVE_CARBS", "false"),
            ("MACRO_TARGETS_GOAL_GAIN", "1.10"),
        ]))
        .unwrap();

        assert_eq!(config.macro_split.protein_policy, ProteinPolicy::Flat);
        assert!(!config.macro_split.clamp_negative_carbs);
        assert!((config.goal_adjustments.gain - 1.10).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unparseable_override_rejected() {
        let err = NutritionConfig::load_with(lookup_from(&[(
            "MACRO_TARGETS_ACTIVITY_LIGHT",
            "lots",
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse(msg) if msg.contains("ACTIVITY_LIGHT")));
    }

    #[test]
    fn test_out_of_order_activity_factors_rejected() {
        let err = NutritionConfig::load_with(lookup_from(&[(
            "MACRO_TARGETS_ACTIVITY_MODERATE",
            "1.3",
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange(_)));
    }

    #[test]
    fn test_goal_ordering_enforced() {
        let err = NutritionConfig::load_with(lookup_from(&[("MACRO_TARGETS_GOAL_LOSE", "1.05")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRange(_)));
    }

    #[test]
    fn test_fat_fraction_bounds_enforced() {
        let err = NutritionConfig::load_with(lookup_from(&[(
            "MACRO_TARGETS_FAT_GAIN_FRACTION",
            "0.75",
        )]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::ValueOutOfRange(_)));
    }

    #[test]
    fn test_nan_overrides_rejected() {
        for suffix in [
            "BMR_WEIGHT_COEF",
            "BMR_HEIGHT_COEF",
            "BMR_AGE_COEF",
            "ACTIVITY_SEDENTARY",
            "ACTIVITY_MODERATE",
            "ACTIVITY_EXTREME",
            "GOAL_LOSE",
            "GOAL_MAINTAIN",
            "GOAL_GAIN",
            "FAT_MAINTAIN_FRACTION",
        ] {
            let name = format!("{ENV_PREFIX}{suffix}");
            let result = NutritionConfig::load_with(lookup_from(&[(name.as_str(), "NaN")]));
            assert!(
                matches!(result, Err(ConfigError::ValueOutOfRange(_))),
                "{name}=NaN should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn test_infinite_and_zero_overrides_rejected() {
        let weight = NutritionConfig::load_with(lookup_from(&[(
            "MACRO_TARGETS_BMR_WEIGHT_COEF",
            "inf",
        )]));
        assert!(matches!(weight, Err(ConfigError::ValueOutOfRange(_))));

        let lose = NutritionConfig::load_with(lookup_from(&[("MACRO_TARGETS_GOAL_LOSE", "0")]));
        assert!(matches!(lose, Err(ConfigError::ValueOutOfRange(_))));
    }
}
