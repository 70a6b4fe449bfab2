// ABOUTME: Basal metabolism and energy expenditure calculations
// ABOUTME: Mifflin-St Jeor BMR, activity-scaled TDEE, and daily water requirement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

//! Basal Metabolism Calculator and Energy Expenditure Estimator
//!
//! Mifflin-St Jeor is the single canonical BMR formula:
//! `10*weight + 6.25*height - 5*age`, plus 5 for males or minus 161 for
//! females. The weight fed in is the one selected by the ideal-weight
//! resolver (actual, or adjusted for obesity); the water requirement always
//! uses the actual body weight.
//!
//! # Reference
//! Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241

use crate::config::{ActivityFactorsConfig, BmrConfig};
use crate::models::{ActivityLevel, Sex};

/// Basal Metabolic Rate via the Mifflin-St Jeor equation (kcal/day)
///
/// `weight_kg` is the resolved BMR weight from the ideal-weight stage.
/// Inputs are validated centrally at the pipeline entry; the formula
/// itself applies no floors or clamps, so results track the inputs
/// exactly and stay strictly monotone in weight.
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    sex: Sex,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    weight_component + height_component + age_component + config.sex_constant(sex)
}

/// Total Daily Energy Expenditure: BMR scaled by the activity factor
#[must_use]
pub fn calculate_tdee(bmr_kcal: f64, level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr_kcal * config.factor(level)
}

/// Daily water requirement in liters from actual body weight
///
/// The coefficient is configurable (default 0.035 L/kg); deployments that
/// follow the 0.033 L/kg guideline override it rather than editing code.
#[must_use]
pub fn daily_water_need_liters(actual_weight_kg: f64, water_coefficient_l_per_kg: f64) -> f64 {
    actual_weight_kg * water_coefficient_l_per_kg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bmr_female_80kg_170cm_30y() {
        // 10*80 + 6.25*170 - 5*30 - 161 = 800 + 1062.5 - 150 - 161 = 1551.5
        let bmr = calculate_mifflin_st_jeor(80.0, 170.0, 30, Sex::Female, &BmrConfig::default());
        assert!((bmr - 1551.5).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_male_adds_five() {
        let config = BmrConfig::default();
        let female = calculate_mifflin_st_jeor(70.0, 175.0, 25, Sex::Female, &config);
        let male = calculate_mifflin_st_jeor(70.0, 175.0, 25, Sex::Male, &config);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_strictly_increasing_in_weight() {
        let config = BmrConfig::default();
        let mut previous = f64::MIN;
        for weight in [45.0, 55.0, 65.0, 75.0, 85.0] {
            let bmr = calculate_mifflin_st_jeor(weight, 170.0, 30, Sex::Female, &config);
            assert!(bmr > previous);
            previous = bmr;
        }
    }

    #[test]
    fn test_tdee_sedentary_factor() {
        let tdee = calculate_tdee(
            1551.5,
            ActivityLevel::Sedentary,
            &ActivityFactorsConfig::default(),
        );
        assert!((tdee - 1861.8).abs() < 1e-9);
    }

    #[test]
    fn test_water_need_uses_actual_weight_and_coefficient() {
        // 80 kg at 0.035 L/kg = 2.8 L/day
        let water = daily_water_need_liters(80.0, 0.035);
        assert!((water - 2.8).abs() < 1e-9);
    }
}
