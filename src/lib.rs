// ABOUTME: Main library entry point for the Sage Intake metabolic analysis engine
// ABOUTME: Exposes the analyze/plan pipeline, configuration surface, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

// Crate-level attributes:
// - deny(unsafe_code): the engine is pure arithmetic over owned values;
//   there is no justification for unsafe anywhere in this crate
#![deny(unsafe_code)]

//! # Sage Intake Engine
//!
//! The metabolic analysis and diet-planning engine behind a dietitian
//! intake workflow. It turns a subject's raw measurements into classified
//! health metrics and a calorie plan toward a goal weight, including the
//! safety validation that gates unsafe plans.
//!
//! ## Features
//!
//! - **Body composition**: BMI with qualitative category, waist-to-hip
//!   ratio with cardiometabolic risk class
//! - **Energy**: Mifflin-St Jeor BMR, activity-scaled TDEE, daily water
//!   requirement, obesity-adjusted body weight
//! - **Planning**: tiered calorie targets toward a goal weight with
//!   advisory safety flags and a weeks-to-goal estimate
//! - **Macros and menus**: percentage-based macronutrient targets and
//!   menu composition totals against those targets
//!
//! ## Architecture
//!
//! The crate is purely functional: [`engine::analyze`] and
//! [`engine::plan`] are stateless transformations of their inputs, every
//! clinically meaningful constant lives in [`config::EngineConfig`], and
//! the caller owns every result. Storage, rendering, and document export
//! are external collaborators that consume the serde-ready models.
//!
//! ## Example Usage
//!
//! ```rust
//! use sage_intake::config::EngineConfig;
//! use sage_intake::engine::{analyze, plan};
//! use sage_intake::errors::EngineResult;
//! use sage_intake::models::{ActivityLevel, IntensityTier, Sex, Subject};
//!
//! fn main() -> EngineResult<()> {
//!     let config = EngineConfig::default();
//!     let subject = Subject::new(Sex::Female, 80.0, 170.0, 30);
//!
//!     let result = analyze(&subject, ActivityLevel::Sedentary, &config)?;
//!     let diet = plan(&result, 80.0, 70.0, Some(IntensityTier::Standard), &config)?;
//!
//!     println!(
//!         "target {} kcal/day, about {:.1} weeks",
//!         diet.daily_calorie_target,
//!         diet.estimated_weeks_to_goal.unwrap_or_default()
//!     );
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────

/// Engine configuration surface
pub mod config;

/// Analysis and planning pipeline
pub mod engine;

/// Unified error handling system
pub mod errors;

/// Structured logging setup for host processes
pub mod logging;

/// Core domain models
pub mod models;

pub use engine::{analyze, plan};
