// ABOUTME: Clinical constants for body composition, energy, and macronutrient calculations
// ABOUTME: Single source for thresholds and coefficients used throughout the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Sage Health Intelligence

//! Clinical constants based on published nutrition and body-composition
//! references
//!
//! This module contains the established thresholds and coefficients used
//! throughout the intake engine. Values that deployments may legitimately
//! tune (water coefficient, tier deltas, safety floors) also appear as
//! defaults in [`crate::config::EngineConfig`]; the constants here are the
//! canonical clinical values those defaults are built from.

/// BMI classification band boundaries
///
/// Reference: WHO Expert Consultation (2004). Appropriate body-mass index
/// for Asian populations and its implications. *The Lancet*, 363(9403).
/// Bands are inclusive on the lower bound of each category.
pub mod bmi {
    /// Lower bound of the "normal" band; below this is underweight
    pub const NORMAL_MIN: f64 = 18.5;

    /// Lower bound of the "overweight" band
    pub const OVERWEIGHT_MIN: f64 = 25.0;

    /// Lower bound of the "obese" band
    pub const OBESE_MIN: f64 = 30.0;
}

/// Waist-to-hip ratio risk thresholds
///
/// Reference: WHO (2008). Waist circumference and waist-hip ratio:
/// report of a WHO expert consultation.
pub mod whr {
    /// Male WHR above this value indicates elevated cardiometabolic risk
    pub const MALE_HIGH_RISK: f64 = 0.90;

    /// Female WHR above this value indicates elevated cardiometabolic risk
    pub const FEMALE_HIGH_RISK: f64 = 0.85;
}

/// Mifflin-St Jeor BMR formula coefficients
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for
/// resting energy expenditure in healthy individuals. *American Journal of
/// Clinical Nutrition*, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
pub mod bmr {
    /// Weight coefficient (kcal per kg)
    pub const WEIGHT_COEF: f64 = 10.0;

    /// Height coefficient (kcal per cm)
    pub const HEIGHT_COEF: f64 = 6.25;

    /// Age coefficient (kcal per year)
    pub const AGE_COEF: f64 = -5.0;

    /// Additive constant for male subjects
    pub const MALE_CONSTANT: f64 = 5.0;

    /// Additive constant for female subjects
    pub const FEMALE_CONSTANT: f64 = -161.0;
}

/// Activity factor multipliers for TDEE
///
/// Reference: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010).
/// *Exercise Physiology*, 7th Edition.
pub mod activity {
    /// Sedentary (little/no exercise)
    pub const SEDENTARY: f64 = 1.2;

    /// Lightly active (1-3 days/week)
    pub const LIGHTLY_ACTIVE: f64 = 1.375;

    /// Moderately active (3-5 days/week)
    pub const MODERATELY_ACTIVE: f64 = 1.55;

    /// Very active (6-7 days/week)
    pub const VERY_ACTIVE: f64 = 1.725;

    /// Extra active (hard training 2x/day)
    pub const EXTRA_ACTIVE: f64 = 1.9;
}

/// Ideal and adjusted body weight coefficients
pub mod ideal_weight {
    /// Lower BMI of the healthy reference band
    pub const BMI_BAND_MIN: f64 = 18.5;

    /// Upper BMI of the healthy reference band
    pub const BMI_BAND_MAX: f64 = 24.9;

    /// Fraction of the excess over the ideal midpoint retained by the
    /// adjusted-body-weight correction
    ///
    /// Reference: Krenitsky, J. (2005). Adjusted body weight, pro:
    /// evidence to support the use of adjusted body weight in calculating
    /// calorie requirements. *Nutrition in Clinical Practice*, 20(4).
    pub const ADJUSTMENT_FACTOR: f64 = 0.25;

    /// Half-width applied around a point-estimate formula (Hamwi, Robinson)
    /// to express it as a reference range
    pub const POINT_ESTIMATE_SPREAD: f64 = 0.10;

    /// Reference height both point-estimate formulas measure from (5 ft)
    pub const BASE_HEIGHT_CM: f64 = 152.4;

    /// Hamwi (1964) base weight and per-cm slope, male
    pub const HAMWI_MALE_BASE_KG: f64 = 48.0;
    /// Hamwi male slope: 2.7 kg per inch over 5 ft
    pub const HAMWI_MALE_KG_PER_CM: f64 = 2.7 / 2.54;

    /// Hamwi (1964) base weight and per-cm slope, female
    pub const HAMWI_FEMALE_BASE_KG: f64 = 45.5;
    /// Hamwi female slope: 2.2 kg per inch over 5 ft
    pub const HAMWI_FEMALE_KG_PER_CM: f64 = 2.2 / 2.54;

    /// Robinson (1983) base weight and per-cm slope, male
    pub const ROBINSON_MALE_BASE_KG: f64 = 52.0;
    /// Robinson male slope: 1.9 kg per inch over 5 ft
    pub const ROBINSON_MALE_KG_PER_CM: f64 = 1.9 / 2.54;

    /// Robinson (1983) base weight and per-cm slope, female
    pub const ROBINSON_FEMALE_BASE_KG: f64 = 49.0;
    /// Robinson female slope: 1.7 kg per inch over 5 ft
    pub const ROBINSON_FEMALE_KG_PER_CM: f64 = 1.7 / 2.54;
}

/// Energy and hydration conversion constants
pub mod energy {
    /// Energy density of body-mass change: 7700 kcal per kg
    ///
    /// Reference: Wishnofsky, M. (1958). Caloric equivalents of gained or
    /// lost weight. *American Journal of Clinical Nutrition*, 6(5).
    pub const KCAL_PER_KG_BODY_MASS: f64 = 7700.0;

    /// Default daily water requirement coefficient (liters per kg of
    /// actual body weight)
    ///
    /// Reference: EFSA Panel on Dietetic Products (2010). Scientific
    /// opinion on dietary reference values for water. *EFSA Journal*, 8(3).
    pub const DEFAULT_WATER_COEFFICIENT_L_PER_KG: f64 = 0.035;

    /// Days per week, named for the weekly-rate conversions
    pub const DAYS_PER_WEEK: f64 = 7.0;
}

/// Macronutrient energy densities (Atwater factors)
///
/// Reference: Atwater, W.O. & Bryant, A.P. (1900). The availability and
/// fuel value of food materials.
pub mod macros {
    /// Carbohydrate energy density (kcal per gram)
    pub const KCAL_PER_G_CARBS: f64 = 4.0;

    /// Protein energy density (kcal per gram)
    pub const KCAL_PER_G_PROTEIN: f64 = 4.0;

    /// Fat energy density (kcal per gram)
    pub const KCAL_PER_G_FAT: f64 = 9.0;

    /// Default distribution: percent of daily calories from carbohydrate
    pub const DEFAULT_CARBS_PERCENT: u8 = 50;

    /// Default distribution: percent of daily calories from protein
    pub const DEFAULT_PROTEIN_PERCENT: u8 = 20;

    /// Default distribution: percent of daily calories from fat
    pub const DEFAULT_FAT_PERCENT: u8 = 30;
}

/// Calorie safety floors
///
/// Reference: Academy of Nutrition and Dietetics position on very-low-
/// calorie diets; targets below these floors warrant clinical supervision.
pub mod safety {
    /// Minimum advisable daily intake for female subjects (kcal)
    pub const FEMALE_FLOOR_KCAL: i32 = 1200;

    /// Minimum advisable daily intake for male subjects (kcal)
    pub const MALE_FLOOR_KCAL: i32 = 1500;
}

/// Default intensity tier deltas (kcal/day magnitudes)
pub mod tiers {
    /// Light pace deficit/surplus
    pub const LIGHT_KCAL: f64 = 250.0;

    /// Standard (recommended) pace deficit/surplus
    pub const STANDARD_KCAL: f64 = 500.0;

    /// Aggressive pace deficit/surplus
    pub const AGGRESSIVE_KCAL: f64 = 750.0;

    /// Extreme pace deficit (loss table only by default)
    pub const EXTREME_KCAL: f64 = 1000.0;
}
