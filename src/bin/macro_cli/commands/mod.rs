// ABOUTME: Re-exports command modules for macro-targets
// ABOUTME: Provides access to calculation and factor table commands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod calculate;
pub mod factors;
