// ABOUTME: Data model re-exports from the macro-targets-core crate
// ABOUTME: Biometric profiles, category enums and macro results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - [`RawProfile`]: form input with every field as text
//! - [`BiometricProfile`]: validated input
//! - [`MacroResult`]: rounded calorie and gram targets
//! - [`FullMacroResult`]: every intermediate value of the pipeline

pub use macro_targets_core::models::*;
