// ABOUTME: Physiological constants used by macro target calculations
// ABOUTME: Atwater energy densities for protein, carbohydrate, and fat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Energy density constants (Atwater general factors).
//!
//! Reference: Atwater, W.O. & Bryant, A.P. (1900). The availability and fuel
//! value of food materials.

/// Energy per gram of protein (kcal/g)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy per gram of carbohydrate (kcal/g)
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy per gram of fat (kcal/g)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;
