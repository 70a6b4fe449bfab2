// ABOUTME: Macronutrient distribution planning from a daily calorie target
// ABOUTME: Defines MacroDistribution percentages and gram-level MacroTargets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

//! Macronutrient Planner
//!
//! Splits a daily calorie target into carbohydrate/protein/fat gram targets
//! from a percentage distribution, using the Atwater energy densities
//! (4 kcal/g carbohydrate and protein, 9 kcal/g fat). A distribution whose
//! percentages do not sum to exactly 100 is a configuration error: silently
//! normalizing would change clinical output behind the dietitian's back.

use crate::engine::physiological_constants::macros as macro_constants;
use crate::errors::{EngineError, EngineResult};
use serde::{Deserialize, Serialize};

/// Percentage split of daily calories across the three macronutrients
///
/// Percentages must sum to exactly 100; [`MacroDistribution::validate`]
/// enforces this wherever a distribution enters the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MacroDistribution {
    /// Percent of daily calories from carbohydrate
    pub carbs_percent: u8,
    /// Percent of daily calories from protein
    pub protein_percent: u8,
    /// Percent of daily calories from fat
    pub fat_percent: u8,
}

impl MacroDistribution {
    /// Create a distribution from raw percentages (validated on use)
    #[must_use]
    pub const fn new(carbs_percent: u8, protein_percent: u8, fat_percent: u8) -> Self {
        Self {
            carbs_percent,
            protein_percent,
            fat_percent,
        }
    }

    /// Check that the percentages sum to exactly 100
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the sum differs from 100
    pub fn validate(&self) -> EngineResult<()> {
        let sum = u16::from(self.carbs_percent)
            + u16::from(self.protein_percent)
            + u16::from(self.fat_percent);
        if sum != 100 {
            return Err(EngineError::config_invalid(format!(
                "macro distribution must sum to 100 percent, got {sum}"
            )));
        }
        Ok(())
    }
}

impl Default for MacroDistribution {
    /// The clinical default split: 50% carbohydrate, 20% protein, 30% fat
    fn default() -> Self {
        Self {
            carbs_percent: macro_constants::DEFAULT_CARBS_PERCENT,
            protein_percent: macro_constants::DEFAULT_PROTEIN_PERCENT,
            fat_percent: macro_constants::DEFAULT_FAT_PERCENT,
        }
    }
}

/// Gram-level macronutrient targets for one day
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MacroTargets {
    /// Daily calorie target the grams were derived from (kcal)
    pub calories: f64,
    /// Daily carbohydrate target (grams)
    pub carbs_g: f64,
    /// Daily protein target (grams)
    pub protein_g: f64,
    /// Daily fat target (grams)
    pub fat_g: f64,
}

/// Derive gram targets from a daily calorie target and a distribution
///
/// Grams = `calories * percent / 100 / energy_density`, with carbohydrate
/// and protein at 4 kcal/g and fat at 9 kcal/g.
///
/// # Errors
///
/// Returns a configuration error when the distribution does not sum to 100
/// or the calorie target is not positive
pub fn macro_targets(
    daily_calorie_target: f64,
    distribution: &MacroDistribution,
) -> EngineResult<MacroTargets> {
    distribution.validate()?;
    if daily_calorie_target <= 0.0 {
        return Err(EngineError::value_out_of_range(format!(
            "daily calorie target must be positive, got {daily_calorie_target}"
        )));
    }

    let share = |percent: u8, kcal_per_g: f64| -> f64 {
        daily_calorie_target * f64::from(percent) / 100.0 / kcal_per_g
    };

    Ok(MacroTargets {
        calories: daily_calorie_target,
        carbs_g: share(distribution.carbs_percent, macro_constants::KCAL_PER_G_CARBS),
        protein_g: share(
            distribution.protein_percent,
            macro_constants::KCAL_PER_G_PROTEIN,
        ),
        fat_g: share(distribution.fat_percent, macro_constants::KCAL_PER_G_FAT),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split_of_2000_kcal() {
        let targets = macro_targets(2000.0, &MacroDistribution::default()).unwrap();

        // 50% of 2000 at 4 kcal/g = 250 g carbs
        assert!((targets.carbs_g - 250.0).abs() < 1e-9);
        // 20% of 2000 at 4 kcal/g = 100 g protein
        assert!((targets.protein_g - 100.0).abs() < 1e-9);
        // 30% of 2000 at 9 kcal/g = 66.67 g fat
        assert!((targets.fat_g - 2000.0 * 0.30 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_grams_scale_linearly_with_calories() {
        let distribution = MacroDistribution::default();
        let low = macro_targets(1500.0, &distribution).unwrap();
        let high = macro_targets(3000.0, &distribution).unwrap();
        assert!((high.carbs_g - 2.0 * low.carbs_g).abs() < 1e-9);
        assert!((high.protein_g - 2.0 * low.protein_g).abs() < 1e-9);
        assert!((high.fat_g - 2.0 * low.fat_g).abs() < 1e-9);
    }

    #[test]
    fn test_distribution_must_sum_to_100() {
        let off_by_one = MacroDistribution::new(49, 20, 30);
        assert!(off_by_one.validate().is_err());
        assert!(macro_targets(2000.0, &off_by_one).is_err());
    }

    #[test]
    fn test_non_positive_calorie_target_rejected() {
        let err = macro_targets(0.0, &MacroDistribution::default()).unwrap_err();
        assert!(err.message.contains("positive"));
    }
}
