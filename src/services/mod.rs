// ABOUTME: Domain service layer combining the calculator with persistence
// ABOUTME: Provides caller-facing operations reusable by the CLI and any UI layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services wrap the pure calculation engine with validation and storage so
//! every entry point applies the same rules.

/// Onboarding: preview, validate-and-persist, and lookup of macro targets
pub mod onboarding;

pub use onboarding::MacroTargetService;
