// ABOUTME: Biometric profile models used as calculation input
// ABOUTME: Gender, ActivityLevel, Goal enums plus raw (form) and validated profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::ProfileError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Biological sex used by the Mifflin-St Jeor constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Male (+5 kcal constant)
    Male,
    /// Female (-161 kcal constant)
    Female,
}

impl Gender {
    /// Parse gender from string, treating anything but "male" as female
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" => Self::Male,
            _ => Self::Female,
        }
    }

    /// Lookup key for this gender
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(ProfileError::unknown_category("gender", s)),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Activity level used to scale BMR into TDEE
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Exercise 1-3 days/week
    Light,
    /// Exercise 3-5 days/week
    Moderate,
    /// Exercise 6-7 days/week
    Active,
    /// Hard training or a physical job
    Extreme,
}

impl ActivityLevel {
    /// All levels in ascending order of energy expenditure
    pub const ALL: [Self; 5] = [
        Self::Sedentary,
        Self::Light,
        Self::Moderate,
        Self::Active,
        Self::Extreme,
    ];

    /// Parse activity level from string, falling back to sedentary
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Lookup key for this level
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Sedentary => "sedentary",
            Self::Light => "light",
            Self::Moderate => "moderate",
            Self::Active => "active",
            Self::Extreme => "extreme",
        }
    }
}

impl FromStr for ActivityLevel {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Ok(Self::Sedentary),
            "light" => Ok(Self::Light),
            "moderate" => Ok(Self::Moderate),
            "active" => Ok(Self::Active),
            "extreme" => Ok(Self::Extreme),
            _ => Err(ProfileError::unknown_category("activity_level", s)),
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body composition goal driving the calorie adjustment and macro split
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    #[default]
    Maintain,
    /// Caloric surplus
    Gain,
}

impl Goal {
    /// All goals from deficit to surplus
    pub const ALL: [Self; 3] = [Self::Lose, Self::Maintain, Self::Gain];

    /// Parse goal from string, falling back to maintain
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Lookup key for this goal
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lose => "lose",
            Self::Maintain => "maintain",
            Self::Gain => "gain",
        }
    }
}

impl FromStr for Goal {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lose" => Ok(Self::Lose),
            "maintain" => Ok(Self::Maintain),
            "gain" => Ok(Self::Gain),
            _ => Err(ProfileError::unknown_category("goal", s)),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile exactly as submitted by a form: every field is text
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawProfile {
    /// "male" or "female"
    #[serde(default)]
    pub gender: String,
    /// Age in years
    #[serde(default)]
    pub age: String,
    /// Weight in kilograms
    #[serde(default)]
    pub weight: String,
    /// Height in centimeters
    #[serde(default)]
    pub height: String,
    /// Activity level key
    #[serde(default, alias = "activityLevel")]
    pub activity_level: String,
    /// Goal key
    #[serde(default)]
    pub goal: String,
}

/// Validated biometric profile
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BiometricProfile {
    /// Biological sex
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Height in centimeters
    pub height_cm: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
    /// Goal
    pub goal: Goal,
}

fn required<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ProfileError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ProfileError::missing(field));
    }
    Ok(trimmed)
}

fn positive_number(field: &'static str, value: &str) -> Result<f64, ProfileError> {
    let raw = required(field, value)?;
    let parsed: f64 = raw
        .parse()
        .map_err(|_| ProfileError::invalid_number(field, raw))?;
    if !parsed.is_finite() || parsed <= 0.0 {
        return Err(ProfileError::out_of_range(field, raw));
    }
    Ok(parsed)
}

impl TryFrom<&RawProfile> for BiometricProfile {
    type Error = ProfileError;

    fn try_from(raw: &RawProfile) -> Result<Self, Self::Error> {
        let gender = required("gender", &raw.gender)?.parse()?;

        let age_raw = required("age", &raw.age)?;
        let age: u32 = age_raw
            .parse()
            .map_err(|_| ProfileError::invalid_number("age", age_raw))?;
        if age == 0 {
            return Err(ProfileError::out_of_range("age", age_raw));
        }

        Ok(Self {
            gender,
            age,
            weight_kg: positive_number("weight", &raw.weight)?,
            height_cm: positive_number("height", &raw.height)?,
            activity_level: required("activity_level", &raw.activity_level)?.parse()?,
            goal: required("goal", &raw.goal)?.parse()?,
        })
    }
}

impl From<&BiometricProfile> for RawProfile {
    fn from(profile: &BiometricProfile) -> Self {
        Self {
            gender: profile.gender.to_string(),
            age: profile.age.to_string(),
            weight: profile.weight_kg.to_string(),
            height: profile.height_cm.to_string(),
            activity_level: profile.activity_level.to_string(),
            goal: profile.goal.to_string(),
        }
    }
}
