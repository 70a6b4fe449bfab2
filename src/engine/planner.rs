// ABOUTME: Calorie target planning toward a goal weight with advisory safety validation
// ABOUTME: Resolves goal direction, intensity tier deltas, and safety flags for a plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

//! Calorie Target Planner
//!
//! Turns an analysis result plus a goal weight and tier selection into a
//! daily calorie target. Tier identifiers map to kcal deltas through the
//! configured tier tables, never through display labels, and the safety
//! validation always runs, attaching advisory flags without ever altering
//! the computed target. Whether a flagged plan blocks or merely warns is
//! the caller's decision: a dietitian may deliberately supervise an
//! aggressive plan.

use crate::config::EngineConfig;
use crate::engine::physiological_constants::bmi as bmi_bands;
use crate::engine::timeline;
use crate::errors::{EngineError, EngineResult};
use crate::models::{AnalysisResult, DietPlan, GoalDirection, IntensityTier, SafetyFlag};
use tracing::debug;

/// Direction of the weight goal relative to the current weight
///
/// Exact equality means maintain; any difference selects lose or gain.
#[must_use]
pub fn goal_direction(current_weight_kg: f64, goal_weight_kg: f64) -> GoalDirection {
    let diff = goal_weight_kg - current_weight_kg;
    if diff < 0.0 {
        GoalDirection::Lose
    } else if diff > 0.0 {
        GoalDirection::Gain
    } else {
        GoalDirection::Maintain
    }
}

/// Build a diet plan from an analysis result and a goal selection
///
/// Called by [`crate::engine::plan`] after configuration validation.
pub(crate) fn build_plan(
    result: &AnalysisResult,
    current_weight_kg: f64,
    goal_weight_kg: f64,
    tier: Option<IntensityTier>,
    config: &EngineConfig,
) -> EngineResult<DietPlan> {
    if current_weight_kg <= 0.0 {
        return Err(EngineError::invalid_input(format!(
            "current weight must be positive, got {current_weight_kg} kg"
        )));
    }
    if goal_weight_kg <= 0.0 {
        return Err(EngineError::invalid_input(format!(
            "goal weight must be positive, got {goal_weight_kg} kg"
        )));
    }

    let direction = goal_direction(current_weight_kg, goal_weight_kg);
    let (resolved_tier, daily_delta_kcal) = resolve_delta(direction, tier, config)?;

    #[allow(clippy::cast_possible_truncation)]
    let daily_calorie_target = (result.tdee_kcal + daily_delta_kcal).round() as i32;

    let safety_flags = evaluate_safety(
        daily_calorie_target,
        result.bmr_kcal,
        result.bmi,
        config.safe_floor_kcal(result.sex),
    );

    let estimated_weeks_to_goal = match direction {
        GoalDirection::Maintain => None,
        GoalDirection::Lose | GoalDirection::Gain => timeline::estimated_weeks_to_goal(
            current_weight_kg,
            goal_weight_kg,
            daily_delta_kcal,
            config.kcal_per_kg_body_mass,
        ),
    };

    debug!(
        ?direction,
        ?resolved_tier,
        daily_calorie_target,
        flags = safety_flags.len(),
        "diet plan computed"
    );

    Ok(DietPlan {
        direction,
        tier: resolved_tier,
        daily_calorie_target,
        daily_delta_kcal,
        safety_flags,
        estimated_weeks_to_goal,
    })
}

/// Resolve the signed daily kcal delta for the direction and tier
///
/// Maintain ignores any tier that is still selected in the caller's UI.
/// Lose and gain require a tier present in the respective configured
/// table; requesting an absent tier is a configuration error.
fn resolve_delta(
    direction: GoalDirection,
    tier: Option<IntensityTier>,
    config: &EngineConfig,
) -> EngineResult<(Option<IntensityTier>, f64)> {
    match direction {
        GoalDirection::Maintain => Ok((None, 0.0)),
        GoalDirection::Lose => {
            let tier = tier.ok_or_else(|| {
                EngineError::missing_field("an intensity tier is required for a loss plan")
            })?;
            let magnitude = config.loss_tiers.delta_kcal(tier).ok_or_else(|| {
                EngineError::config_invalid(format!(
                    "tier {tier:?} is not present in the loss tier table"
                ))
            })?;
            Ok((Some(tier), -magnitude))
        }
        GoalDirection::Gain => {
            let tier = tier.ok_or_else(|| {
                EngineError::missing_field("an intensity tier is required for a gain plan")
            })?;
            let magnitude = config.gain_tiers.delta_kcal(tier).ok_or_else(|| {
                EngineError::config_invalid(format!(
                    "tier {tier:?} is not present in the gain tier table"
                ))
            })?;
            Ok((Some(tier), magnitude))
        }
    }
}

/// Compute advisory safety flags for a calorie target
///
/// A target strictly below BMR raises `BelowBmr`; a BMI at or above the
/// obesity boundary adds `ObesityException` alongside it, since the
/// below-BMR concern is clinically relaxed for obese subjects (both flags
/// stay present so the caller can present them together). A target
/// strictly below the sex floor raises `BelowSexFloor` independently.
fn evaluate_safety(
    target_kcal: i32,
    bmr_kcal: f64,
    bmi: f64,
    sex_floor_kcal: i32,
) -> Vec<SafetyFlag> {
    let mut flags = Vec::new();

    if f64::from(target_kcal) < bmr_kcal {
        flags.push(SafetyFlag::BelowBmr);
        if bmi >= bmi_bands::OBESE_MIN {
            flags.push(SafetyFlag::ObesityException);
        }
    }
    if target_kcal < sex_floor_kcal {
        flags.push(SafetyFlag::BelowSexFloor);
    }

    flags
}
