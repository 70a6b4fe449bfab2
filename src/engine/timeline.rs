// ABOUTME: Expected time to reach a goal weight from a sustained daily calorie delta
// ABOUTME: Converts kcal deltas into weekly body-mass change via the kcal-per-kg rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

//! Timeline Estimator
//!
//! Converts a sustained caloric surplus or deficit into an expected number
//! of weeks to reach the goal weight, using the 7700 kcal ≈ 1 kg energy
//! density of body-mass change. The engine returns a week count, never a
//! calendar date: date arithmetic belongs to the caller, keeping the
//! pipeline free of timezone and locale concerns.

use crate::engine::physiological_constants::energy;

/// Expected weeks until the goal weight is reached
///
/// Weekly change (kg) is `|daily_delta| * 7 / kcal_per_kg`; the estimate is
/// the remaining weight difference divided by that pace. Returns `None`
/// when the daily delta is zero or there is no weight difference to cover:
/// a timeline is undefined rather than infinite or zero.
#[must_use]
pub fn estimated_weeks_to_goal(
    current_weight_kg: f64,
    goal_weight_kg: f64,
    daily_delta_kcal: f64,
    kcal_per_kg: f64,
) -> Option<f64> {
    let weekly_change_kg = daily_delta_kcal.abs() * energy::DAYS_PER_WEEK / kcal_per_kg;
    if weekly_change_kg == 0.0 {
        return None;
    }

    let remaining_kg = (goal_weight_kg - current_weight_kg).abs();
    if remaining_kg == 0.0 {
        return None;
    }

    Some(remaining_kg / weekly_change_kg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_deficit_pace() {
        // 500 kcal/day * 7 / 7700 = 0.4545 kg/week; 10 kg / 0.4545 = 22.0 weeks
        let weeks = estimated_weeks_to_goal(80.0, 70.0, -500.0, 7700.0).unwrap();
        assert!((weeks - 22.0).abs() < 0.01);
    }

    #[test]
    fn test_surplus_and_deficit_are_symmetric() {
        let losing = estimated_weeks_to_goal(80.0, 75.0, -500.0, 7700.0).unwrap();
        let gaining = estimated_weeks_to_goal(75.0, 80.0, 500.0, 7700.0).unwrap();
        assert!((losing - gaining).abs() < 1e-9);
    }

    #[test]
    fn test_zero_delta_has_no_timeline() {
        assert!(estimated_weeks_to_goal(80.0, 70.0, 0.0, 7700.0).is_none());
    }

    #[test]
    fn test_zero_remaining_weight_has_no_timeline() {
        assert!(estimated_weeks_to_goal(80.0, 80.0, -500.0, 7700.0).is_none());
    }
}
