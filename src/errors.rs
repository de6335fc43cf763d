// ABOUTME: Error handling re-exports from the macro-targets-core crate
// ABOUTME: Keeps crate::errors paths stable for the engine, services and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Re-exports [`AppError`], [`ErrorCode`] and friends from `macro-targets-core`.
//! Configuration errors convert into [`AppError`] with `CONFIG_INVALID`, and
//! profile validation errors convert with the code matching their kind.

pub use macro_targets_core::errors::*;
