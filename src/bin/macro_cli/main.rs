// ABOUTME: macro-targets CLI - computes calorie and macro targets from a biometric profile
// ABOUTME: Subcommands for the full pipeline, BMR alone, and the active multiplier tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full targets, forgiving incomplete input (zeros instead of errors)
//! macro-targets calculate --gender male --age 30 --weight 70 --height 175 \
//!     --activity moderate --goal maintain
//!
//! # Reject invalid input and emit JSON
//! macro-targets calculate --gender male --age 30 --weight 70 --height 175 \
//!     --activity moderate --goal maintain --strict --format json
//!
//! # Basal Metabolic Rate only
//! macro-targets bmr --gender female --weight 60 --height 165 --age 28
//!
//! # Show the multiplier tables in effect (after MACRO_TARGETS_* overrides)
//! macro-targets factors
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand, ValueEnum};
use macro_targets::config::NutritionConfig;
use macro_targets::errors::AppResult;
use macro_targets::logging::LoggingConfig;
use macro_targets::models::Gender;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "macro-targets",
    about = "Daily calorie and macronutrient targets",
    long_about = "Computes BMR (Mifflin-St Jeor), TDEE and a protein/carbohydrate/fat split from a biometric profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

/// Output format for results
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Text,
    /// JSON document on stdout
    Json,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Compute BMR, TDEE and macro targets
    Calculate {
        /// "male" or "female"
        #[arg(long)]
        gender: Option<String>,

        /// Age in years
        #[arg(long)]
        age: Option<String>,

        /// Weight in kilograms
        #[arg(long)]
        weight: Option<String>,

        /// Height in centimeters
        #[arg(long)]
        height: Option<String>,

        /// sedentary, light, moderate, active or extreme
        #[arg(long)]
        activity: Option<String>,

        /// lose, maintain or gain
        #[arg(long)]
        goal: Option<String>,

        /// Reject missing or invalid fields instead of degrading to defaults
        #[arg(long)]
        strict: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compute Basal Metabolic Rate only
    Bmr {
        /// "male" or "female"
        #[arg(long)]
        gender: Gender,

        /// Weight in kilograms
        #[arg(long)]
        weight: f64,

        /// Height in centimeters
        #[arg(long)]
        height: f64,

        /// Age in years
        #[arg(long)]
        age: u32,
    },

    /// Print the activity and goal multipliers and the macro split in effect
    Factors {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn run(cli: Cli) -> AppResult<()> {
    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    let config = NutritionConfig::load()?;

    match cli.command {
        Command::Calculate {
            gender,
            age,
            weight,
            height,
            activity,
            goal,
            strict,
            format,
        } => {
            let profile = commands::calculate::profile_from_args(
                gender, age, weight, height, activity, goal,
            );
            commands::calculate::run(&profile, &config, strict, format)
        }
        Command::Bmr {
            gender,
            weight,
            height,
            age,
        } => {
            commands::calculate::bmr(gender, weight, height, age, &config);
            Ok(())
        }
        Command::Factors { format } => commands::factors::run(&config, format),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.code.is_client_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
