// ABOUTME: Core data models for macro target calculation
// ABOUTME: Re-exports biometric profile and macro result types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Biometric profile input types and category enums
pub mod biometrics;

/// Macro result output types
pub mod macros;

pub use biometrics::{ActivityLevel, BiometricProfile, Gender, Goal, RawProfile};
pub use macros::{FullMacroResult, MacroPercentages, MacroResult};
