// ABOUTME: Core types and constants for the macro target calculation engine
// ABOUTME: Foundation crate with error handling, biometric models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Macro Targets Core
//!
//! Foundation crate providing shared types and constants for the macro target
//! engine. This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ErrorResponse`
//! - **models**: Biometric profiles, categories, and macro results
//! - **constants**: Physiological constants (Atwater energy factors)

/// Unified error handling system with standard error codes
pub mod errors;

/// Physiological constants shared by the engine and its callers
pub mod constants;

/// Core data models (profiles, categories, macro results)
pub mod models;
