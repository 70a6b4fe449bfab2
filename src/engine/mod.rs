// ABOUTME: Metabolic analysis and diet-planning pipeline entry points
// ABOUTME: Orchestrates validation, classification, weight resolution, energy, planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

//! # Analysis and Planning Engine
//!
//! The engine exposes exactly two operations to collaborators:
//!
//! - [`analyze`] runs the one-shot pipeline Subject → Classifier → Weight
//!   Resolver → BMR → TDEE/Water and returns an immutable
//!   [`AnalysisResult`].
//! - [`plan`] turns an analysis result plus a goal selection into a
//!   [`DietPlan`] with advisory safety flags and a timeline estimate.
//!
//! Both are pure functions of their arguments: no global state, no I/O,
//! no randomness, and nothing retained between calls. Validation happens
//! once at each entry point; any failure aborts the call before a partial
//! result exists. Arbitrarily many calls may run concurrently with no
//! coordination.

pub mod body_composition;
pub mod energy;
pub mod ideal_weight;
pub mod macros;
pub mod menu;
pub mod physiological_constants;
pub mod planner;
pub mod timeline;

use crate::config::EngineConfig;
use crate::errors::{EngineError, EngineResult};
use crate::models::{ActivityLevel, AnalysisResult, DietPlan, IntensityTier, Subject};
use tracing::debug;

pub use planner::goal_direction;

/// Run the full metabolic analysis for one subject
///
/// # Errors
///
/// Returns a validation error when the subject's measurements are out of
/// domain (non-positive weight or height, negative circumference), or a
/// configuration error when the supplied [`EngineConfig`] is unusable
pub fn analyze(
    subject: &Subject,
    activity: ActivityLevel,
    config: &EngineConfig,
) -> EngineResult<AnalysisResult> {
    config.validate()?;
    validate_subject(subject)?;

    // Step 1: body composition classification
    let bmi = body_composition::calculate_bmi(subject.weight_kg, subject.height_cm);
    let bmi_category = body_composition::classify_bmi(bmi);
    let whr = body_composition::waist_hip_ratio(subject.waist_cm, subject.hip_cm);
    let whr_risk = body_composition::classify_whr(whr, subject.sex);

    // Step 2: ideal weight range and the weight the BMR formula will use
    let ideal_weight_range =
        ideal_weight::ideal_weight_range(config.ideal_weight_formula, subject.sex, subject.height_cm);
    let (weight_used_for_bmr_kg, weight_basis) =
        ideal_weight::resolve_bmr_weight(bmi, subject.weight_kg, &ideal_weight_range);

    // Step 3: basal metabolism from the resolved weight
    let bmr_kcal = energy::calculate_mifflin_st_jeor(
        weight_used_for_bmr_kg,
        subject.height_cm,
        subject.age,
        subject.sex,
        &config.bmr,
    );

    // Step 4: total expenditure and hydration (water always uses actual weight)
    let tdee_kcal = energy::calculate_tdee(bmr_kcal, activity, &config.activity_factors);
    let water_need_liters =
        energy::daily_water_need_liters(subject.weight_kg, config.water_coefficient_l_per_kg);

    debug!(
        bmi,
        ?bmi_category,
        ?weight_basis,
        bmr_kcal,
        tdee_kcal,
        "analysis computed"
    );

    Ok(AnalysisResult {
        sex: subject.sex,
        bmi,
        bmi_category,
        ideal_weight_range,
        weight_used_for_bmr_kg,
        weight_basis,
        bmr_kcal,
        tdee_kcal,
        water_need_liters,
        whr,
        whr_risk,
    })
}

/// Build a calorie plan toward a goal weight
///
/// `tier` may be `None` when the goal equals the current weight; for loss
/// and gain goals a tier is required and must be present in the configured
/// tier table. Safety validation always runs and attaches advisory flags
/// without altering the target.
///
/// # Errors
///
/// Returns a validation error for out-of-domain weights or a missing tier,
/// and a configuration error when the configuration is unusable or the
/// requested tier has no entry in the applicable table
pub fn plan(
    result: &AnalysisResult,
    current_weight_kg: f64,
    goal_weight_kg: f64,
    tier: Option<IntensityTier>,
    config: &EngineConfig,
) -> EngineResult<DietPlan> {
    config.validate()?;
    planner::build_plan(result, current_weight_kg, goal_weight_kg, tier, config)
}

/// Central validation stage for subject measurements
///
/// All missing-data conventions are resolved here so the formulas never
/// guess: a zero waist or hip means "not provided" and simply leaves WHR
/// unavailable, while negative circumferences are rejected outright.
fn validate_subject(subject: &Subject) -> EngineResult<()> {
    // Age is unsigned by construction; a negative age cannot reach here.
    if subject.weight_kg <= 0.0 {
        return Err(EngineError::invalid_input(format!(
            "weight must be positive, got {} kg",
            subject.weight_kg
        )));
    }
    if subject.height_cm <= 0.0 {
        return Err(EngineError::invalid_input(format!(
            "height must be positive, got {} cm",
            subject.height_cm
        )));
    }
    if subject.waist_cm < 0.0 {
        return Err(EngineError::value_out_of_range(format!(
            "waist circumference cannot be negative, got {} cm",
            subject.waist_cm
        )));
    }
    if subject.hip_cm < 0.0 {
        return Err(EngineError::value_out_of_range(format!(
            "hip circumference cannot be negative, got {} cm",
            subject.hip_cm
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn default_config() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn test_analyze_rejects_non_positive_weight() {
        let subject = Subject::new(Sex::Female, 0.0, 170.0, 30);
        let err = analyze(&subject, ActivityLevel::Sedentary, &default_config()).unwrap_err();
        assert!(err.message.contains("weight"));
    }

    #[test]
    fn test_analyze_rejects_negative_circumference() {
        let subject =
            Subject::new(Sex::Female, 80.0, 170.0, 30).with_circumferences(-1.0, 100.0);
        assert!(analyze(&subject, ActivityLevel::Sedentary, &default_config()).is_err());
    }

    #[test]
    fn test_analyze_is_deterministic() {
        let subject = Subject::new(Sex::Male, 95.0, 175.0, 40).with_circumferences(102.0, 104.0);
        let config = default_config();
        let first = analyze(&subject, ActivityLevel::ModeratelyActive, &config).unwrap();
        let second = analyze(&subject, ActivityLevel::ModeratelyActive, &config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_plan_rejects_invalid_config() {
        let subject = Subject::new(Sex::Female, 80.0, 170.0, 30);
        let config = default_config();
        let result = analyze(&subject, ActivityLevel::Sedentary, &config).unwrap();

        let mut broken = config;
        broken.water_coefficient_l_per_kg = 0.0;
        assert!(plan(&result, 80.0, 70.0, Some(IntensityTier::Standard), &broken).is_err());
    }
}
